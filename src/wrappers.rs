//! Newtype wrappers that choose how a type takes part in the equivalence.
//!
//! The same underlying type can be compared in different ways depending on
//! what the caller knows about it:
//!
//! - [`Natural`]: equality and ordering taken from the type's own `Ord`
//! - [`Unordered`]: equality taken from `PartialEq`, with no total order
//!
//! Wrapping a type in [`Unordered`] makes the set algebra fall back to its
//! pairwise algorithms, which only need equality.

use std::cmp::Ordering;

use crate::numeric::{Equivalence, NumericOrd};

// =============================================================================
// Natural Wrapper
// =============================================================================

/// A newtype wrapper that compares by the inner type's `Ord`.
///
/// Useful for caller-defined types that are totally ordered but have no
/// [`NumericOrd`] implementation of their own.
///
/// # Examples
///
/// ```rust
/// use seqalg::numeric::{Equivalence, NumericOrd};
/// use seqalg::wrappers::Natural;
/// use std::cmp::Ordering;
///
/// #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
/// enum Priority { Low, High }
///
/// let low = Natural::new(Priority::Low);
/// let high = Natural::new(Priority::High);
/// assert_eq!(low.numeric_cmp(&high), Ordering::Less);
/// assert!(Natural::<Priority>::total_order().is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Natural<A>(pub A);

impl<A> Natural<A> {
    /// Creates a new `Natural` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Natural` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Natural<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: Ord> Equivalence for Natural<A> {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    #[inline]
    fn total_order() -> Option<fn(&Self, &Self) -> Ordering> {
        Some(<Self as NumericOrd>::numeric_cmp)
    }
}

impl<A: Ord> NumericOrd for Natural<A> {
    #[inline]
    fn numeric_cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

// =============================================================================
// Unordered Wrapper
// =============================================================================

/// A newtype wrapper that compares by `PartialEq` only.
///
/// [`Equivalence::total_order`] returns `None` for this type, so the set
/// algebra uses its pairwise membership test. The wrapped `PartialEq` must
/// be reflexive for the values actually compared.
///
/// # Examples
///
/// ```rust
/// use seqalg::numeric::Equivalence;
/// use seqalg::wrappers::Unordered;
///
/// #[derive(Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Unordered::new(Point { x: 1, y: 2 });
/// assert!(point.equivalent(&Unordered::new(Point { x: 1, y: 2 })));
/// assert!(Unordered::<Point>::total_order().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unordered<A>(pub A);

impl<A> Unordered<A> {
    /// Creates a new `Unordered` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Unordered` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Unordered<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: PartialEq> Equivalence for Unordered<A> {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
