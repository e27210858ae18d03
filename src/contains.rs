use std::any::Any;

/// Returns true if `x` equals at least one element of `xs`.
///
/// Linear scan, fine for the small lists this is meant for. Equality is the
/// element type's `PartialEq`, which is structural for derived impls, so two
/// separately built values with the same fields match.
///
/// ```
/// assert!(belt::contains(&[1, 2, 3], &2));
/// assert!(belt::contains(&["Apple Pie".to_string()], &"Apple Pie"));
/// ```
pub fn contains<T, U>(xs: &[T], x: &U) -> bool
where
    T: PartialEq<U>,
    U: ?Sized,
{
    xs.iter().any(|item| item == x)
}

/// Membership test for a needle whose type is only known at runtime.
///
/// `x` only matches when its concrete type is exactly the element type `T`;
/// anything else (`Some(1)` against `i32`s, `1u8` against `i64`s) is `false`
/// rather than an error. An absent sequence contains nothing.
///
/// ```
/// let xs = [1, 2, 3];
/// assert!(belt::contains_value(Some(&xs[..]), &3));
/// assert!(!belt::contains_value(Some(&xs[..]), &"3"));
/// assert!(!belt::contains_value(None::<&[i32]>, &1));
/// ```
pub fn contains_value<T>(xs: Option<&[T]>, x: &dyn Any) -> bool
where
    T: PartialEq + 'static,
{
    match (xs, x.downcast_ref::<T>()) {
        (Some(xs), Some(x)) => contains(xs, x),
        _ => false,
    }
}
