//! Deduplication that keeps the first occurrence of each element.
//!
//! Only equality is required, so every [`Equivalence`] type can be
//! deduplicated, including types with no total order. The accepted list is
//! searched linearly, which makes the operations `O(n²)` in the worst case.
//!
//! # Examples
//!
//! ```rust
//! use seqalg::dedup::{unique, unique_by};
//!
//! assert_eq!(unique(vec![1, 3, 2, 3, 1]), vec![1, 3, 2]);
//! assert_eq!(unique_by(vec![1, 2, 3, 4], |value: &i32| value % 2), vec![1, 2]);
//! ```

use crate::callable::IntoCallable;
use crate::numeric::Equivalence;

fn unique_with<T>(
    items: impl IntoIterator<Item = T>,
    equivalent: impl Fn(&T, &T) -> bool,
) -> Vec<T> {
    let mut accepted: Vec<T> = Vec::new();
    for item in items {
        if !accepted.iter().any(|kept| equivalent(kept, &item)) {
            accepted.push(item);
        }
    }
    accepted
}

/// Returns the elements of `items` with later duplicates removed.
///
/// The first element of each equivalence class is kept and input order is
/// preserved. Iterator inputs are consumed.
///
/// # Examples
///
/// ```rust
/// use rust_decimal::Decimal;
/// use seqalg::dedup::unique;
/// use seqalg::numeric::Number;
///
/// let values = vec![Number::from(2), Number::from(Decimal::new(20, 1)), Number::from(3.0)];
/// assert_eq!(unique(values), vec![Number::from(2), Number::from(3)]);
/// ```
pub fn unique<T: Equivalence>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    unique_with(items, T::equivalent)
}

/// Returns the elements of `items` with later duplicates removed, where two
/// elements are duplicates if `callable` says they are equivalent.
pub fn unique_by<'a, T, Marker>(
    items: impl IntoIterator<Item = T>,
    callable: impl IntoCallable<'a, T, Marker>,
) -> Vec<T> {
    let callable = callable.into_callable();
    unique_with(items, |kept, candidate| callable.equivalent(kept, candidate))
}

/// Removes later duplicates from `items` in place.
///
/// # Examples
///
/// ```rust
/// use seqalg::dedup::unique_in_place;
///
/// let mut words = vec!["a", "b", "a", "c", "b"];
/// unique_in_place(&mut words);
/// assert_eq!(words, vec!["a", "b", "c"]);
/// ```
pub fn unique_in_place<T: Equivalence>(items: &mut Vec<T>) {
    let drained = std::mem::take(items);
    *items = unique(drained);
}

/// Removes later duplicates from `items` in place, using `callable` as the
/// equivalence.
pub fn unique_in_place_by<'a, T, Marker>(
    items: &mut Vec<T>,
    callable: impl IntoCallable<'a, T, Marker>,
) {
    let drained = std::mem::take(items);
    *items = unique_by(drained, callable);
}
