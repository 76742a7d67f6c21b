//! Minimum and maximum selection.
//!
//! A single pass replaces the current best element only when a candidate is
//! *strictly* smaller (for `min`) or *strictly* greater (for `max`), so the
//! first extremal element in input order wins ties.
//!
//! # Examples
//!
//! ```rust
//! use seqalg::extremal::{max, min_by};
//!
//! assert_eq!(max(vec![3, 7, 2]), Ok(7));
//! assert_eq!(min_by(vec!["hello", "hi", "hey"], |word: &&str| word.len()), Ok("hi"));
//! ```

use std::cmp::Ordering;

use crate::callable::IntoCallable;
use crate::error::{AlgebraError, Result};
use crate::numeric::NumericOrd;

fn select<T>(
    items: impl IntoIterator<Item = T>,
    operation: &'static str,
    mut replaces: impl FnMut(&T, &T) -> Result<bool>,
) -> Result<T> {
    let mut items = items.into_iter();
    let mut best = items.next().ok_or(AlgebraError::EmptyInput { operation })?;
    for candidate in items {
        if replaces(&candidate, &best)? {
            best = candidate;
        }
    }
    Ok(best)
}

/// Returns the smallest element of `items`, the first one on ties.
///
/// # Errors
///
/// Returns [`AlgebraError::EmptyInput`] if `items` is empty.
pub fn min<T: NumericOrd>(items: impl IntoIterator<Item = T>) -> Result<T> {
    select(items, "min", |candidate, best| {
        Ok(candidate.numeric_cmp(best) == Ordering::Less)
    })
}

/// Returns the largest element of `items`, the first one on ties.
///
/// # Errors
///
/// Returns [`AlgebraError::EmptyInput`] if `items` is empty.
pub fn max<T: NumericOrd>(items: impl IntoIterator<Item = T>) -> Result<T> {
    select(items, "max", |candidate, best| {
        Ok(candidate.numeric_cmp(best) == Ordering::Greater)
    })
}

/// Returns the smallest element of `items` under `callable`.
///
/// # Errors
///
/// Returns [`AlgebraError::EmptyInput`] if `items` is empty.
pub fn min_by<'a, T, Marker>(
    items: impl IntoIterator<Item = T>,
    callable: impl IntoCallable<'a, T, Marker>,
) -> Result<T> {
    callable
        .into_callable()
        .first_extremal(items, Ordering::Less)
        .ok_or(AlgebraError::EmptyInput { operation: "min" })
}

/// Returns the largest element of `items` under `callable`.
///
/// # Errors
///
/// Returns [`AlgebraError::EmptyInput`] if `items` is empty.
pub fn max_by<'a, T, Marker>(
    items: impl IntoIterator<Item = T>,
    callable: impl IntoCallable<'a, T, Marker>,
) -> Result<T> {
    callable
        .into_callable()
        .first_extremal(items, Ordering::Greater)
        .ok_or(AlgebraError::EmptyInput { operation: "max" })
}

/// Returns the smallest element of `items` under a comparator that may fail.
///
/// # Errors
///
/// Returns [`AlgebraError::EmptyInput`] if `items` is empty, or the first
/// error returned by `compare`.
pub fn try_min_by<T, F>(items: impl IntoIterator<Item = T>, compare: F) -> Result<T>
where
    F: Fn(&T, &T) -> Result<Ordering>,
{
    select(items, "min", |candidate, best| {
        Ok(compare(candidate, best)? == Ordering::Less)
    })
}

/// Returns the largest element of `items` under a comparator that may fail.
///
/// # Errors
///
/// Returns [`AlgebraError::EmptyInput`] if `items` is empty, or the first
/// error returned by `compare`.
pub fn try_max_by<T, F>(items: impl IntoIterator<Item = T>, compare: F) -> Result<T>
where
    F: Fn(&T, &T) -> Result<Ordering>,
{
    select(items, "max", |candidate, best| {
        Ok(compare(candidate, best)? == Ordering::Greater)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Number, NumberKind};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(vec![3, 1, 2], 1, 3)]
    #[case(vec![5], 5, 5)]
    #[case(vec![-1, -1, 0], -1, 0)]
    fn test_min_and_max(#[case] input: Vec<i32>, #[case] smallest: i32, #[case] largest: i32) {
        assert_eq!(min(input.clone()), Ok(smallest));
        assert_eq!(max(input), Ok(largest));
    }

    #[rstest]
    fn test_empty_input_names_the_operation() {
        assert_eq!(min(Vec::<i32>::new()), Err(AlgebraError::EmptyInput { operation: "min" }));
        assert_eq!(
            max_by(Vec::<i32>::new(), |value: &i32| *value),
            Err(AlgebraError::EmptyInput { operation: "max" })
        );
    }

    #[rstest]
    fn test_first_extremal_element_wins_ties() {
        let values = vec![
            Number::from(dec!(1.0)),
            Number::from(1_i32),
            Number::from(3.0_f64),
            Number::from(3_i32),
        ];
        assert_eq!(min(values.clone()).map(|value| value.kind()), Ok(NumberKind::Decimal));
        assert_eq!(max(values).map(|value| value.kind()), Ok(NumberKind::Float));
    }

    #[rstest]
    fn test_min_by_key_prefers_first_shortest() {
        let words = vec!["hello", "hi", "hey", "yo"];
        assert_eq!(min_by(words.clone(), |word: &&str| word.len()), Ok("hi"));
        assert_eq!(max_by(words, |word: &&str| word.len()), Ok("hello"));
    }

    #[rstest]
    fn test_max_by_comparator() {
        let pairs = vec![(1, 'a'), (3, 'b'), (3, 'c')];
        let result = max_by(pairs, |left: &(i32, char), right: &(i32, char)| left.0.cmp(&right.0));
        assert_eq!(result, Ok((3, 'b')));
    }

    #[rstest]
    fn test_key_extractor_runs_once_per_element() {
        let calls = std::cell::Cell::new(0_usize);
        let key = |word: &&str| {
            calls.set(calls.get() + 1);
            word.len()
        };
        let words = vec!["kiwi", "fig", "banana", "plum", "date"];
        assert_eq!(min_by(words.clone(), key), Ok("fig"));
        assert_eq!(calls.get(), words.len());
        assert_eq!(max_by(words.clone(), key), Ok("banana"));
        assert_eq!(calls.get(), 2 * words.len());
    }

    #[rstest]
    fn test_try_min_by_propagates_error() {
        let compare = |left: &i32, right: &i32| {
            if *left == 0 || *right == 0 {
                Err(AlgebraError::incompatible("zero"))
            } else {
                Ok(left.cmp(right))
            }
        };
        assert_eq!(try_min_by(vec![3, 1, 2], compare), Ok(1));
        assert_eq!(try_max_by(vec![3, 0, 2], compare), Err(AlgebraError::incompatible("zero")));
        assert_eq!(
            try_max_by(Vec::new(), compare),
            Err(AlgebraError::EmptyInput { operation: "max" })
        );
    }
}
