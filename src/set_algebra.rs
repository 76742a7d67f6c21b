//! Intersection, difference and disjointness over sequences.
//!
//! Each operation probes [`Equivalence::total_order`] once, before its main
//! loop, and picks one of two membership indexes:
//!
//! | Probe | Index | Cost |
//! |-------|-------|------|
//! | `Some(compare)` | sorted vector + binary search | `O((n + m) log n)` |
//! | `None` | plain vector + linear scan | `O(n * m)` |
//!
//! Both paths return identical results; the choice only affects speed. The
//! `*_by` variants always use the sorted index, ordered by their
//! [`Callable`](crate::callable::Callable).
//!
//! # Examples
//!
//! ```rust
//! use seqalg::set_algebra::{disjoint, intersect, minus};
//!
//! assert_eq!(intersect(vec![1, 2, 3, 2], vec![2, 3, 4]), vec![2, 3]);
//! assert_eq!(minus(vec![1, 2, 2, 3, 1], vec![1]), vec![2, 2, 3]);
//! assert!(disjoint(vec![1, 2], vec![3, 4]));
//! ```

use std::cmp::Ordering;

use crate::callable::IntoCallable;
use crate::numeric::Equivalence;

// =============================================================================
// Membership Indexes
// =============================================================================

trait Membership<'i, T: 'i> {
    fn contains(&self, item: &T) -> bool;

    /// Adds `item` unless an equivalent element is present; returns whether
    /// it was added.
    fn insert(&mut self, item: &'i T) -> bool;
}

struct SortedIndex<'i, T, C> {
    entries: Vec<&'i T>,
    compare: C,
}

impl<'i, T, C> SortedIndex<'i, T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn new(items: &'i [T], compare: C) -> Self {
        let mut entries: Vec<&T> = items.iter().collect();
        entries.sort_by(|left, right| compare(*left, *right));
        Self { entries, compare }
    }

    fn position(&self, item: &T) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|entry| (self.compare)(*entry, item))
    }
}

impl<'i, T, C> Membership<'i, T> for SortedIndex<'i, T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn contains(&self, item: &T) -> bool {
        self.position(item).is_ok()
    }

    fn insert(&mut self, item: &'i T) -> bool {
        match self.position(item) {
            Ok(_) => false,
            Err(position) => {
                self.entries.insert(position, item);
                true
            }
        }
    }
}

struct LinearIndex<'i, T, E> {
    entries: Vec<&'i T>,
    equivalent: E,
}

impl<'i, T, E> LinearIndex<'i, T, E>
where
    E: Fn(&T, &T) -> bool,
{
    fn new(items: &'i [T], equivalent: E) -> Self {
        Self {
            entries: items.iter().collect(),
            equivalent,
        }
    }
}

impl<'i, T, E> Membership<'i, T> for LinearIndex<'i, T, E>
where
    E: Fn(&T, &T) -> bool,
{
    #[inline]
    fn contains(&self, item: &T) -> bool {
        self.entries
            .iter()
            .any(|entry| (self.equivalent)(*entry, item))
    }

    fn insert(&mut self, item: &'i T) -> bool {
        if self.contains(item) {
            return false;
        }
        self.entries.push(item);
        true
    }
}

// =============================================================================
// Relations
// =============================================================================

/// Builds the membership index matching how elements are compared.
trait Relation<T>: Copy {
    fn index<'i>(self, items: &'i [T]) -> impl Membership<'i, T>
    where
        T: 'i;
}

#[derive(Clone, Copy)]
struct Ordered<C>(C);

#[derive(Clone, Copy)]
struct Pairwise<E>(E);

impl<T, C> Relation<T> for Ordered<C>
where
    C: Fn(&T, &T) -> Ordering + Copy,
{
    fn index<'i>(self, items: &'i [T]) -> impl Membership<'i, T>
    where
        T: 'i,
    {
        SortedIndex::new(items, self.0)
    }
}

impl<T, E> Relation<T> for Pairwise<E>
where
    E: Fn(&T, &T) -> bool + Copy,
{
    fn index<'i>(self, items: &'i [T]) -> impl Membership<'i, T>
    where
        T: 'i,
    {
        LinearIndex::new(items, self.0)
    }
}

fn trace_selection(operation: &'static str, sorted: bool, indexed: usize) {
    tracing::trace!(
        operation,
        path = if sorted { "sorted-index" } else { "pairwise" },
        indexed,
        "selected set algebra path"
    );
}

// =============================================================================
// Algorithms
// =============================================================================

fn intersect_in<T, R: Relation<T>>(left: Vec<T>, right: Vec<T>, relation: R) -> Vec<T> {
    if left.is_empty() || right.is_empty() {
        return Vec::new();
    }
    let (indexed, scanned) = if left.len() < right.len() {
        (right, left)
    } else {
        (left, right)
    };

    let keep: Vec<bool> = {
        let index = relation.index(&indexed);
        let mut emitted = relation.index(&scanned[..0]);
        scanned
            .iter()
            .map(|item| index.contains(item) && emitted.insert(item))
            .collect()
    };

    scanned
        .into_iter()
        .zip(keep)
        .filter_map(|(item, keep)| keep.then_some(item))
        .collect()
}

fn minus_in<T, R: Relation<T>>(
    left: impl IntoIterator<Item = T>,
    remove_me: &[T],
    relation: R,
) -> Vec<T> {
    if remove_me.is_empty() {
        return left.into_iter().collect();
    }
    let index = relation.index(remove_me);
    left.into_iter().filter(|item| !index.contains(item)).collect()
}

fn disjoint_in<T, R: Relation<T>>(
    left: impl IntoIterator<Item = T>,
    right: &[T],
    relation: R,
) -> bool {
    if right.is_empty() {
        return true;
    }
    let index = relation.index(right);
    !left.into_iter().any(|item| index.contains(&item))
}

// =============================================================================
// Public API
// =============================================================================

/// Returns one element of every equivalence class present in both `left`
/// and `right`.
///
/// The larger side is indexed (`left` when both have the same length) and
/// the smaller side is scanned in order; the result follows that scan order
/// and keeps the first scanned element of each class. If either side is
/// empty the result is empty.
///
/// # Examples
///
/// ```rust
/// use seqalg::set_algebra::intersect;
///
/// // `left` is smaller, so the result follows its order
/// assert_eq!(intersect(vec![3, 1], vec![1, 2, 3]), vec![3, 1]);
/// // `left` is larger, so the result follows `right`
/// assert_eq!(intersect(vec![3, 1, 2], vec![2, 3]), vec![2, 3]);
/// ```
pub fn intersect<T: Equivalence>(
    left: impl IntoIterator<Item = T>,
    right: impl IntoIterator<Item = T>,
) -> Vec<T> {
    let left: Vec<T> = left.into_iter().collect();
    let right: Vec<T> = right.into_iter().collect();
    match T::total_order() {
        Some(compare) => {
            trace_selection("intersect", true, left.len().max(right.len()));
            intersect_in(left, right, Ordered(compare))
        }
        None => {
            trace_selection("intersect", false, left.len().max(right.len()));
            intersect_in(left, right, Pairwise(T::equivalent))
        }
    }
}

/// Like [`intersect`], with equivalence decided by `callable`.
pub fn intersect_by<'a, T, Marker>(
    left: impl IntoIterator<Item = T>,
    right: impl IntoIterator<Item = T>,
    callable: impl IntoCallable<'a, T, Marker>,
) -> Vec<T> {
    let callable = callable.into_callable();
    let compare = |left: &T, right: &T| callable.compare(left, right);
    intersect_in(
        left.into_iter().collect(),
        right.into_iter().collect(),
        Ordered(&compare),
    )
}

/// Returns the elements of `left` not equivalent to any element of
/// `remove_me`.
///
/// Multiplicity and order of `left` are preserved.
pub fn minus<T: Equivalence>(
    left: impl IntoIterator<Item = T>,
    remove_me: impl IntoIterator<Item = T>,
) -> Vec<T> {
    let remove_me: Vec<T> = remove_me.into_iter().collect();
    match T::total_order() {
        Some(compare) => {
            trace_selection("minus", true, remove_me.len());
            minus_in(left, &remove_me, Ordered(compare))
        }
        None => {
            trace_selection("minus", false, remove_me.len());
            minus_in(left, &remove_me, Pairwise(T::equivalent))
        }
    }
}

/// Like [`minus`], with equivalence decided by `callable`.
///
/// # Examples
///
/// ```rust
/// use seqalg::set_algebra::minus_by;
///
/// let words = vec!["apple", "Banana", "cherry", "APPLE"];
/// let result = minus_by(words, vec!["apple"], |word: &&str| word.to_lowercase());
/// assert_eq!(result, vec!["Banana", "cherry"]);
/// ```
pub fn minus_by<'a, T, Marker>(
    left: impl IntoIterator<Item = T>,
    remove_me: impl IntoIterator<Item = T>,
    callable: impl IntoCallable<'a, T, Marker>,
) -> Vec<T> {
    let callable = callable.into_callable();
    let compare = |left: &T, right: &T| callable.compare(left, right);
    let remove_me: Vec<T> = remove_me.into_iter().collect();
    minus_in(left, &remove_me, Ordered(&compare))
}

/// Returns `true` if no element of `left` is equivalent to an element of
/// `right`.
///
/// Stops at the first shared element.
pub fn disjoint<T: Equivalence>(
    left: impl IntoIterator<Item = T>,
    right: impl IntoIterator<Item = T>,
) -> bool {
    let right: Vec<T> = right.into_iter().collect();
    match T::total_order() {
        Some(compare) => {
            trace_selection("disjoint", true, right.len());
            disjoint_in(left, &right, Ordered(compare))
        }
        None => {
            trace_selection("disjoint", false, right.len());
            disjoint_in(left, &right, Pairwise(T::equivalent))
        }
    }
}

/// Like [`disjoint`], with equivalence decided by `callable`.
pub fn disjoint_by<'a, T, Marker>(
    left: impl IntoIterator<Item = T>,
    right: impl IntoIterator<Item = T>,
    callable: impl IntoCallable<'a, T, Marker>,
) -> bool {
    let callable = callable.into_callable();
    let compare = |left: &T, right: &T| callable.compare(left, right);
    let right: Vec<T> = right.into_iter().collect();
    disjoint_in(left, &right, Ordered(&compare))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Number;
    use crate::wrappers::Unordered;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn unordered(values: &[i32]) -> Vec<Unordered<i32>> {
        values.iter().copied().map(Unordered::new).collect()
    }

    fn inner(values: Vec<Unordered<i32>>) -> Vec<i32> {
        values.into_iter().map(Unordered::into_inner).collect()
    }

    // =========================================================================
    // intersect
    // =========================================================================

    #[rstest]
    #[case(vec![], vec![1, 2], vec![])]
    #[case(vec![1, 2], vec![], vec![])]
    #[case(vec![1, 2, 3, 2], vec![2, 3, 4], vec![2, 3])]
    #[case(vec![3, 1], vec![1, 2, 3], vec![3, 1])]
    #[case(vec![4, 2, 2], vec![2, 4, 4], vec![2, 4])]
    #[case(vec![1, 2], vec![3, 4], vec![])]
    fn test_intersect_both_paths(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(intersect(left.clone(), right.clone()), expected);
        assert_eq!(inner(intersect(unordered(&left), unordered(&right))), expected);
    }

    #[rstest]
    fn test_intersect_across_numeric_representations() {
        let left = vec![Number::from(1_i32), Number::from(dec!(2.0)), Number::from(3.5_f64)];
        let right = vec![Number::from(2_u64), Number::from(dec!(3.50))];
        let result = intersect(left, right);
        assert_eq!(result, vec![Number::from(2), Number::from(dec!(3.5))]);
    }

    #[rstest]
    fn test_intersect_by_key() {
        let result = intersect_by(vec![10, 21, 32], vec![1, 3], |value: &i32| value % 10);
        assert_eq!(result, vec![1]);
    }

    // =========================================================================
    // minus
    // =========================================================================

    #[rstest]
    #[case(vec![1, 2, 2, 3, 1], vec![1], vec![2, 2, 3])]
    #[case(vec![1, 2, 3], vec![], vec![1, 2, 3])]
    #[case(vec![], vec![1], vec![])]
    #[case(vec![5, 4, 5], vec![4, 5], vec![])]
    fn test_minus_both_paths(
        #[case] left: Vec<i32>,
        #[case] remove_me: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(minus(left.clone(), remove_me.clone()), expected);
        assert_eq!(inner(minus(unordered(&left), unordered(&remove_me))), expected);
    }

    #[rstest]
    fn test_minus_by_comparator() {
        let result = minus_by(vec![-1, 2, -3, 4], vec![1, 3], |left: &i32, right: &i32| {
            left.abs().cmp(&right.abs())
        });
        assert_eq!(result, vec![2, 4]);
    }

    // =========================================================================
    // disjoint
    // =========================================================================

    #[rstest]
    #[case(vec![1, 2], vec![3, 4], true)]
    #[case(vec![1, 2], vec![2, 5], false)]
    #[case(vec![], vec![1], true)]
    #[case(vec![1], vec![], true)]
    fn test_disjoint_both_paths(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: bool,
    ) {
        assert_eq!(disjoint(left.clone(), right.clone()), expected);
        assert_eq!(disjoint(unordered(&left), unordered(&right)), expected);
    }

    #[rstest]
    fn test_disjoint_stops_at_first_shared_element() {
        let mut left = vec![7, 1, 2, 3].into_iter();
        assert!(!disjoint(left.by_ref(), vec![7]));
        assert_eq!(left.next(), Some(1));
    }

    #[rstest]
    fn test_disjoint_by_key() {
        assert!(!disjoint_by(vec!["a", "bb"], vec!["cc"], |word: &&str| word.len()));
        assert!(disjoint_by(vec!["a"], vec!["cc"], |word: &&str| word.len()));
    }

    // =========================================================================
    // Indexes
    // =========================================================================

    #[rstest]
    fn test_sorted_index_insert_rejects_equivalent() {
        let values = [3, 1, 2];
        let mut index = SortedIndex::new(&values[..0], i32::cmp);
        assert!(index.insert(&values[0]));
        assert!(index.insert(&values[1]));
        assert!(!index.insert(&values[0]));
        assert!(index.contains(&3));
        assert!(!index.contains(&2));
    }

    #[rstest]
    fn test_linear_index_contains() {
        let values = [Unordered::new(1), Unordered::new(2)];
        let index = LinearIndex::new(&values, Unordered::equivalent);
        assert!(index.contains(&Unordered::new(2)));
        assert!(!index.contains(&Unordered::new(3)));
    }
}
