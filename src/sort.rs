//! Stable sorting under the numeric order or a [`Callable`].
//!
//! Every sort in this module is stable: elements that compare equal keep
//! their relative input order. Key extractors are evaluated once per element.
//!
//! # Examples
//!
//! ```rust
//! use seqalg::sort::{sorted_copy, sorted_copy_by};
//!
//! assert_eq!(sorted_copy(vec![3, 1, 2]), vec![1, 2, 3]);
//!
//! let pairs = vec![(1, "x"), (1, "y"), (0, "z")];
//! let by_first = sorted_copy_by(pairs, |pair: &(i32, &str)| pair.0);
//! assert_eq!(by_first, vec![(0, "z"), (1, "x"), (1, "y")]);
//! ```
//!
//! [`Callable`]: crate::callable::Callable

use std::cmp::Ordering;

use crate::callable::IntoCallable;
use crate::error::Result;
use crate::numeric::NumericOrd;

/// Returns the elements of `items` in ascending numeric order.
pub fn sorted_copy<T: NumericOrd>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut sorted: Vec<T> = items.into_iter().collect();
    sort_in_place(&mut sorted);
    sorted
}

/// Sorts `items` in ascending numeric order.
///
/// # Examples
///
/// ```rust
/// use seqalg::numeric::Number;
/// use seqalg::sort::sort_in_place;
///
/// let mut values = vec![Number::from(2.5), Number::from(1), Number::from(f64::NAN)];
/// sort_in_place(&mut values);
/// assert_eq!(values[0], Number::from(1));
/// assert!(values[2].to_exact().is_none());
/// ```
#[inline]
pub fn sort_in_place<T: NumericOrd>(items: &mut [T]) {
    items.sort_by(T::numeric_cmp);
}

/// Returns the elements of `items` ordered by `callable`.
pub fn sorted_copy_by<'a, T, Marker>(
    items: impl IntoIterator<Item = T>,
    callable: impl IntoCallable<'a, T, Marker>,
) -> Vec<T> {
    let mut sorted: Vec<T> = items.into_iter().collect();
    sort_in_place_by(&mut sorted, callable);
    sorted
}

/// Sorts `items` by `callable`.
///
/// # Examples
///
/// ```rust
/// use seqalg::sort::sort_in_place_by;
///
/// let mut words = vec!["ccc", "a", "bb"];
/// sort_in_place_by(&mut words, |word: &&str| word.len());
/// assert_eq!(words, vec!["a", "bb", "ccc"]);
/// ```
pub fn sort_in_place_by<'a, T, Marker>(
    items: &mut [T],
    callable: impl IntoCallable<'a, T, Marker>,
) {
    callable.into_callable().sort(items);
}

/// Returns the elements of `items` ordered by a comparator that may fail.
///
/// The first error returned by `compare` aborts the sort and is propagated;
/// `items` has been consumed at that point. The sort is a stable merge sort.
///
/// # Errors
///
/// Returns whatever error `compare` returns first, typically
/// [`AlgebraError::IncompatibleKeys`](crate::error::AlgebraError::IncompatibleKeys).
///
/// # Examples
///
/// ```rust
/// use seqalg::error::AlgebraError;
/// use seqalg::sort::try_sorted_copy_by;
///
/// let compare = |left: &i32, right: &i32| {
///     if *left < 0 || *right < 0 {
///         Err(AlgebraError::incompatible("negative values have no order"))
///     } else {
///         Ok(left.cmp(right))
///     }
/// };
/// assert_eq!(try_sorted_copy_by(vec![3, 1, 2], compare), Ok(vec![1, 2, 3]));
/// assert!(try_sorted_copy_by(vec![3, -1, 2], compare).is_err());
/// ```
pub fn try_sorted_copy_by<T, F>(items: impl IntoIterator<Item = T>, compare: F) -> Result<Vec<T>>
where
    F: Fn(&T, &T) -> Result<Ordering>,
{
    merge_sort(items.into_iter().collect(), &compare)
}

fn merge_sort<T, F>(mut items: Vec<T>, compare: &F) -> Result<Vec<T>>
where
    F: Fn(&T, &T) -> Result<Ordering>,
{
    if items.len() <= 1 {
        return Ok(items);
    }
    let upper = items.split_off(items.len() / 2);
    let lower = merge_sort(items, compare)?;
    let upper = merge_sort(upper, compare)?;

    let mut merged = Vec::with_capacity(lower.len() + upper.len());
    let mut lower = lower.into_iter().peekable();
    let mut upper = upper.into_iter().peekable();
    while let (Some(left), Some(right)) = (lower.peek(), upper.peek()) {
        // taking from `lower` on ties keeps the sort stable
        let next = if compare(left, right)? == Ordering::Greater {
            upper.next()
        } else {
            lower.next()
        };
        merged.extend(next);
    }
    merged.extend(lower);
    merged.extend(upper);
    Ok(merged)
}

/// Returns `true` if `items` is in ascending numeric order.
pub fn is_sorted<T: NumericOrd>(items: &[T]) -> bool {
    items.is_sorted_by(|left, right| left.numeric_cmp(right).is_le())
}

/// Returns `true` if `items` is ordered by `callable`.
///
/// # Examples
///
/// ```rust
/// use seqalg::sort::is_sorted_by;
///
/// assert!(is_sorted_by(&["a", "bb", "cc"], |word: &&str| word.len()));
/// assert!(!is_sorted_by(&[1, 2, 3], |left: &i32, right: &i32| right.cmp(left)));
/// ```
pub fn is_sorted_by<'a, T, Marker>(
    items: &[T],
    callable: impl IntoCallable<'a, T, Marker>,
) -> bool {
    let callable = callable.into_callable();
    items.is_sorted_by(|left, right| callable.compare(left, right).is_le())
}

/// Sorts `items` in ascending numeric order on the rayon thread pool.
///
/// Stable, like [`sort_in_place`]. Blocks until the sort is complete.
#[cfg(feature = "rayon")]
pub fn par_sort_in_place<T: NumericOrd + Send>(items: &mut [T]) {
    use rayon::slice::ParallelSliceMut;

    tracing::trace!(len = items.len(), "parallel sort");
    items.par_sort_by(T::numeric_cmp);
}
