//! Equivalence and ordering for standard library and numeric crate types.
//!
//! Scalars delegate to their natural `Eq` / `Ord`. Floats are compared
//! numerically (`-0.0 == 0.0`) with `NaN` equivalent to itself and ordered
//! above positive infinity. Structural types (references, boxes, options,
//! slices, vectors, arrays, tuples) compare componentwise and
//! lexicographically, recursing into the element relation.

use std::cmp::Ordering;

use ibig::IBig;
use rust_decimal::Decimal;

use super::{Equivalence, NumericOrd};

// =============================================================================
// Scalars with a natural total order
// =============================================================================

macro_rules! impl_natural_order {
    ($($type:ty),* $(,)?) => {
        $(
            impl Equivalence for $type {
                #[inline]
                fn equivalent(&self, other: &Self) -> bool {
                    self == other
                }

                #[inline]
                fn total_order() -> Option<fn(&Self, &Self) -> Ordering> {
                    Some(<Self as NumericOrd>::numeric_cmp)
                }
            }

            impl NumericOrd for $type {
                #[inline]
                fn numeric_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_natural_order!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, (), str, String,
    Decimal, IBig,
);

// =============================================================================
// Floats
// =============================================================================

macro_rules! impl_float_order {
    ($($type:ty),* $(,)?) => {
        $(
            impl Equivalence for $type {
                #[inline]
                fn equivalent(&self, other: &Self) -> bool {
                    self.numeric_cmp(other).is_eq()
                }

                #[inline]
                fn total_order() -> Option<fn(&Self, &Self) -> Ordering> {
                    Some(<Self as NumericOrd>::numeric_cmp)
                }
            }

            impl NumericOrd for $type {
                fn numeric_cmp(&self, other: &Self) -> Ordering {
                    match (self.is_nan(), other.is_nan()) {
                        (true, true) => Ordering::Equal,
                        (true, false) => Ordering::Greater,
                        (false, true) => Ordering::Less,
                        // neither side is NaN, so the partial order is total
                        (false, false) => self.partial_cmp(other).unwrap_or(Ordering::Equal),
                    }
                }
            }
        )*
    };
}

impl_float_order!(f32, f64);

// =============================================================================
// Indirection
// =============================================================================

impl<T: NumericOrd + ?Sized> Equivalence for &T {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        (**self).equivalent(*other)
    }

    #[inline]
    fn total_order() -> Option<fn(&Self, &Self) -> Ordering> {
        Some(<Self as NumericOrd>::numeric_cmp)
    }
}

impl<T: NumericOrd + ?Sized> NumericOrd for &T {
    #[inline]
    fn numeric_cmp(&self, other: &Self) -> Ordering {
        (**self).numeric_cmp(*other)
    }
}

impl<T: NumericOrd + ?Sized> Equivalence for Box<T> {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        (**self).equivalent(&**other)
    }

    #[inline]
    fn total_order() -> Option<fn(&Self, &Self) -> Ordering> {
        Some(<Self as NumericOrd>::numeric_cmp)
    }
}

impl<T: NumericOrd + ?Sized> NumericOrd for Box<T> {
    #[inline]
    fn numeric_cmp(&self, other: &Self) -> Ordering {
        (**self).numeric_cmp(&**other)
    }
}

// =============================================================================
// Option
// =============================================================================

impl<T: NumericOrd> Equivalence for Option<T> {
    fn equivalent(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.equivalent(right),
            (None, None) => true,
            _ => false,
        }
    }

    #[inline]
    fn total_order() -> Option<fn(&Self, &Self) -> Ordering> {
        Some(<Self as NumericOrd>::numeric_cmp)
    }
}

/// `None` orders before every `Some`, matching `Option`'s own `Ord`.
impl<T: NumericOrd> NumericOrd for Option<T> {
    fn numeric_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Some(left), Some(right)) => left.numeric_cmp(right),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        }
    }
}

// =============================================================================
// Sequences
// =============================================================================

fn lexicographic<T: NumericOrd>(left: &[T], right: &[T]) -> Ordering {
    left.iter()
        .zip(right)
        .map(|(left, right)| left.numeric_cmp(right))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| left.len().cmp(&right.len()))
}

fn elementwise<T: NumericOrd>(left: &[T], right: &[T]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(left, right)| left.equivalent(right))
}

impl<T: NumericOrd> Equivalence for [T] {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        elementwise(self, other)
    }

    #[inline]
    fn total_order() -> Option<fn(&Self, &Self) -> Ordering> {
        Some(<Self as NumericOrd>::numeric_cmp)
    }
}

impl<T: NumericOrd> NumericOrd for [T] {
    #[inline]
    fn numeric_cmp(&self, other: &Self) -> Ordering {
        lexicographic(self, other)
    }
}

impl<T: NumericOrd> Equivalence for Vec<T> {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        elementwise(self, other)
    }

    #[inline]
    fn total_order() -> Option<fn(&Self, &Self) -> Ordering> {
        Some(<Self as NumericOrd>::numeric_cmp)
    }
}

impl<T: NumericOrd> NumericOrd for Vec<T> {
    #[inline]
    fn numeric_cmp(&self, other: &Self) -> Ordering {
        lexicographic(self, other)
    }
}

impl<T: NumericOrd, const N: usize> Equivalence for [T; N] {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        elementwise(self, other)
    }

    #[inline]
    fn total_order() -> Option<fn(&Self, &Self) -> Ordering> {
        Some(<Self as NumericOrd>::numeric_cmp)
    }
}

impl<T: NumericOrd, const N: usize> NumericOrd for [T; N] {
    #[inline]
    fn numeric_cmp(&self, other: &Self) -> Ordering {
        lexicographic(self, other)
    }
}

// =============================================================================
// Tuples
// =============================================================================

macro_rules! impl_tuple_order {
    ($(($($name:ident : $index:tt),+)),* $(,)?) => {
        $(
            impl<$($name: NumericOrd),+> Equivalence for ($($name,)+) {
                #[inline]
                fn equivalent(&self, other: &Self) -> bool {
                    $(self.$index.equivalent(&other.$index))&&+
                }

                #[inline]
                fn total_order() -> Option<fn(&Self, &Self) -> Ordering> {
                    Some(<Self as NumericOrd>::numeric_cmp)
                }
            }

            impl<$($name: NumericOrd),+> NumericOrd for ($($name,)+) {
                fn numeric_cmp(&self, other: &Self) -> Ordering {
                    Ordering::Equal
                        $(.then_with(|| self.$index.numeric_cmp(&other.$index)))+
                }
            }
        )*
    };
}

impl_tuple_order!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
    (A: 0, B: 1, C: 2, D: 3, E: 4),
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5),
);
