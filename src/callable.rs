//! Key extractors and comparators, resolved once at the call boundary.
//!
//! Every `*_by` operation accepts either
//!
//! - a one-argument function `Fn(&T) -> K` (a *key extractor*), whose keys are
//!   compared under [`NumericOrd`], or
//! - a two-argument function `Fn(&T, &T) -> Ordering` (a *comparator*).
//!
//! The choice is made statically by [`IntoCallable`] from the function's
//! arity and stored in a [`Callable`], which the algorithm then uses for its
//! whole run without inspecting the function again.
//!
//! # Examples
//!
//! ```rust
//! use seqalg::callable::{Callable, resolve};
//! use std::cmp::Ordering;
//!
//! let by_length = resolve(|word: &&str| word.len());
//! assert!(by_length.is_key_extractor());
//! assert_eq!(by_length.compare(&"hi", &"hey"), Ordering::Less);
//!
//! let reversed = resolve(|left: &i32, right: &i32| right.cmp(left));
//! assert!(reversed.is_comparator());
//! assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::numeric::NumericOrd;

/// An ordering of `T` derived from a key.
///
/// Object-safe so that [`Callable::KeyExtractor`] can hide the key type.
pub trait KeyOrder<T> {
    /// Compares the keys of `left` and `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// Returns `true` if the keys of `left` and `right` are equivalent.
    fn equivalent(&self, left: &T, right: &T) -> bool;

    /// Stably sorts `items` by key, extracting each key exactly once.
    fn sort(&self, items: &mut [T]);

    /// Returns the first element whose key no later key beats in the
    /// direction `wins`, extracting each key exactly once.
    fn first_extremal(&self, items: &mut dyn Iterator<Item = T>, wins: Ordering) -> Option<T>;
}

struct KeyFunction<F, K> {
    extract: F,
    _key: PhantomData<fn() -> K>,
}

impl<T, F, K> KeyOrder<T> for KeyFunction<F, K>
where
    F: Fn(&T) -> K,
    K: NumericOrd,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.extract)(left).numeric_cmp(&(self.extract)(right))
    }

    fn equivalent(&self, left: &T, right: &T) -> bool {
        (self.extract)(left).equivalent(&(self.extract)(right))
    }

    fn sort(&self, items: &mut [T]) {
        let keys: Vec<K> = items.iter().map(&self.extract).collect();
        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by(|&left, &right| keys[left].numeric_cmp(&keys[right]));
        apply_permutation(items, order);
    }

    fn first_extremal(&self, items: &mut dyn Iterator<Item = T>, wins: Ordering) -> Option<T> {
        let mut best = items.next()?;
        let mut best_key = (self.extract)(&best);
        for candidate in items {
            let key = (self.extract)(&candidate);
            if key.numeric_cmp(&best_key) == wins {
                best = candidate;
                best_key = key;
            }
        }
        Some(best)
    }
}

/// Rearranges `items` so that position `i` holds the element previously at
/// `order[i]`.
///
/// Each cycle of the permutation is walked once; visited positions are
/// marked by making them fixed points of `order`.
fn apply_permutation<T>(items: &mut [T], mut order: Vec<usize>) {
    for start in 0..items.len() {
        let mut current = start;
        loop {
            let source = order[current];
            order[current] = current;
            if source == start {
                break;
            }
            items.swap(current, source);
            current = source;
        }
    }
}

/// A resolved key extractor or comparator.
pub enum Callable<'a, T> {
    /// Elements are ordered by a derived key.
    KeyExtractor(Box<dyn KeyOrder<T> + 'a>),
    /// Elements are ordered by a caller-supplied comparison.
    Comparator(Box<dyn Fn(&T, &T) -> Ordering + 'a>),
}

impl<'a, T> Callable<'a, T> {
    /// Creates a key extractor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqalg::callable::Callable;
    ///
    /// let parity = Callable::key(|value: &i32| value % 2);
    /// assert!(parity.equivalent(&1, &7));
    /// ```
    pub fn key<F, K>(extract: F) -> Self
    where
        F: Fn(&T) -> K + 'a,
        K: NumericOrd + 'a,
    {
        Self::KeyExtractor(Box::new(KeyFunction {
            extract,
            _key: PhantomData,
        }))
    }

    /// Creates a comparator.
    pub fn comparator<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        Self::Comparator(Box::new(compare))
    }

    /// Compares two elements.
    #[inline]
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        match self {
            Self::KeyExtractor(key) => key.compare(left, right),
            Self::Comparator(compare) => compare(left, right),
        }
    }

    /// Returns `true` if two elements count as the same.
    ///
    /// For a comparator this means `compare(left, right) == Ordering::Equal`.
    #[inline]
    pub fn equivalent(&self, left: &T, right: &T) -> bool {
        match self {
            Self::KeyExtractor(key) => key.equivalent(left, right),
            Self::Comparator(compare) => compare(left, right).is_eq(),
        }
    }

    /// Stably sorts `items`.
    ///
    /// A key extractor is called exactly once per element.
    pub fn sort(&self, items: &mut [T]) {
        match self {
            Self::KeyExtractor(key) => key.sort(items),
            Self::Comparator(compare) => items.sort_by(|left, right| compare(left, right)),
        }
    }

    /// Returns the first element of `items` that no later element beats in
    /// the direction `wins`: `Ordering::Less` selects the minimum and
    /// `Ordering::Greater` the maximum. Returns `None` for empty input.
    ///
    /// A key extractor is called exactly once per element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqalg::callable::Callable;
    /// use std::cmp::Ordering;
    ///
    /// let by_length = Callable::key(|word: &&str| word.len());
    /// assert_eq!(by_length.first_extremal(vec!["ab", "c", "d"], Ordering::Less), Some("c"));
    /// ```
    pub fn first_extremal(&self, items: impl IntoIterator<Item = T>, wins: Ordering) -> Option<T> {
        let mut items = items.into_iter();
        match self {
            Self::KeyExtractor(key) => key.first_extremal(&mut items, wins),
            Self::Comparator(compare) => {
                let first = items.next()?;
                Some(items.fold(first, |best, candidate| {
                    if compare(&candidate, &best) == wins {
                        candidate
                    } else {
                        best
                    }
                }))
            }
        }
    }

    /// Returns `true` for [`Callable::KeyExtractor`].
    #[inline]
    pub const fn is_key_extractor(&self) -> bool {
        matches!(self, Self::KeyExtractor(_))
    }

    /// Returns `true` for [`Callable::Comparator`].
    #[inline]
    pub const fn is_comparator(&self) -> bool {
        matches!(self, Self::Comparator(_))
    }
}

impl<T> fmt::Debug for Callable<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyExtractor(_) => formatter.write_str("Callable::KeyExtractor(..)"),
            Self::Comparator(_) => formatter.write_str("Callable::Comparator(..)"),
        }
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Marker for one-argument functions, resolved as key extractors.
pub struct KeyExtractorArity<K>(PhantomData<fn() -> K>);

/// Marker for two-argument functions, resolved as comparators.
pub struct ComparatorArity;

/// Marker for values that are already a [`Callable`].
pub struct Resolved;

/// Conversion into a [`Callable`], chosen by the function's arity.
///
/// The `Marker` parameter only keeps the implementations apart; it is always
/// inferred.
pub trait IntoCallable<'a, T, Marker> {
    /// Resolves `self`.
    fn into_callable(self) -> Callable<'a, T>;
}

impl<'a, T, F, K> IntoCallable<'a, T, KeyExtractorArity<K>> for F
where
    F: Fn(&T) -> K + 'a,
    K: NumericOrd + 'a,
{
    #[inline]
    fn into_callable(self) -> Callable<'a, T> {
        Callable::key(self)
    }
}

impl<'a, T, F> IntoCallable<'a, T, ComparatorArity> for F
where
    F: Fn(&T, &T) -> Ordering + 'a,
{
    #[inline]
    fn into_callable(self) -> Callable<'a, T> {
        Callable::comparator(self)
    }
}

impl<'a, T> IntoCallable<'a, T, Resolved> for Callable<'a, T> {
    #[inline]
    fn into_callable(self) -> Self {
        self
    }
}

/// Resolves a key extractor or comparator.
#[inline]
pub fn resolve<'a, T, Marker>(callable: impl IntoCallable<'a, T, Marker>) -> Callable<'a, T> {
    callable.into_callable()
}
