/// Returns true iff `s` starts with at least one of `prefixes`.
///
/// Matching is literal and case-sensitive. No prefixes means no match.
pub fn has_prefix<P: AsRef<str>>(s: &str, prefixes: &[P]) -> bool {
    prefixes.iter().any(|px| s.starts_with(px.as_ref()))
}

/// Returns true iff `s` ends with at least one of `suffixes`.
pub fn has_suffix<P: AsRef<str>>(s: &str, suffixes: &[P]) -> bool {
    suffixes.iter().any(|sx| s.ends_with(sx.as_ref()))
}
