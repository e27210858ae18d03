use anyhow::Context;

use crate::{check, check_result, contains, debug, has_prefix, has_suffix};

pub fn handle_contains(needle: &str, items: &[String]) -> bool {
    let found = contains(items, &needle);
    tracing::debug!("contains {:?} in {} items: {}", needle, items.len(), found);
    found
}

pub fn handle_has_prefix(value: &str, prefixes: &[String]) -> bool {
    has_prefix(value, prefixes)
}

pub fn handle_has_suffix(value: &str, suffixes: &[String]) -> bool {
    has_suffix(value, suffixes)
}

/// Returns only when `error` is `None`.
pub fn handle_check(error: Option<String>, context: Option<String>) {
    let result = match error {
        Some(message) => Err(anyhow::Error::msg(message)),
        None => Ok(()),
    };

    match context {
        Some(context) => check_result(result.context(context)),
        None => check(result.err()),
    }
}

pub fn handle_debug(words: &[String]) {
    debug!(words.join(" "));
}
