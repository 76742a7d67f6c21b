//! Method-call syntax over standard containers.
//!
//! [`SimilarContainer`] describes a container that can be consumed and
//! rebuilt from its elements, so an algorithm can return "the same kind of
//! container" it was given. [`SequenceAlgebra`] is implemented for every
//! such container and exposes the algorithms of this crate as methods.
//!
//! # Examples
//!
//! ```rust
//! use seqalg::sequence::SequenceAlgebra;
//! use std::collections::VecDeque;
//!
//! let queue: VecDeque<i32> = VecDeque::from(vec![3, 1, 3, 2]);
//! assert_eq!(queue.clone().unique(), VecDeque::from(vec![3, 1, 2]));
//! assert_eq!(queue.sorted(), VecDeque::from(vec![1, 2, 3, 3]));
//! ```

use std::collections::{BTreeSet, LinkedList, VecDeque};
use std::hash::Hash;

use crate::callable::IntoCallable;
use crate::classify::{self, Classification};
use crate::error::Result;
use crate::numeric::{Equivalence, NumericOrd};
use crate::{dedup, extremal, set_algebra, sort};

/// A container that can be consumed and rebuilt from its elements.
///
/// `SORTED_BY_CONSTRUCTION` is `true` for containers that keep their
/// elements ordered no matter how they are built; sorting such a container
/// returns it unchanged.
pub trait SimilarContainer: IntoIterator + FromIterator<<Self as IntoIterator>::Item> {
    /// Whether the container orders its elements itself.
    const SORTED_BY_CONSTRUCTION: bool = false;
}

impl<T> SimilarContainer for Vec<T> {}

impl<T> SimilarContainer for VecDeque<T> {}

impl<T> SimilarContainer for LinkedList<T> {}

impl<T: Ord> SimilarContainer for BTreeSet<T> {
    const SORTED_BY_CONSTRUCTION: bool = true;
}

/// The algorithms of this crate as methods on any [`SimilarContainer`].
///
/// Methods that return a sequence rebuild it as `Self`. For a container
/// that orders its elements itself (such as [`BTreeSet`]) the rebuilt
/// container follows its own order, not the algorithm's.
pub trait SequenceAlgebra: SimilarContainer + Sized {
    /// See [`dedup::unique`].
    fn unique(self) -> Self
    where
        Self::Item: Equivalence,
    {
        dedup::unique(self).into_iter().collect()
    }

    /// See [`dedup::unique_by`].
    fn unique_by<'a, Marker>(self, callable: impl IntoCallable<'a, Self::Item, Marker>) -> Self {
        dedup::unique_by(self, callable).into_iter().collect()
    }

    /// See [`sort::sorted_copy`].
    ///
    /// A container that is sorted by construction is returned as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqalg::sequence::SequenceAlgebra;
    /// use std::collections::BTreeSet;
    ///
    /// let set: BTreeSet<u8> = [5, 1, 3].into_iter().collect();
    /// assert_eq!(set.sorted().into_iter().collect::<Vec<_>>(), vec![1, 3, 5]);
    /// ```
    fn sorted(self) -> Self
    where
        Self::Item: NumericOrd,
    {
        if Self::SORTED_BY_CONSTRUCTION {
            tracing::trace!("container is sorted by construction");
            return self;
        }
        sort::sorted_copy(self).into_iter().collect()
    }

    /// See [`sort::sorted_copy_by`].
    fn sorted_by<'a, Marker>(self, callable: impl IntoCallable<'a, Self::Item, Marker>) -> Self {
        sort::sorted_copy_by(self, callable).into_iter().collect()
    }

    /// See [`set_algebra::intersect`].
    fn intersect(self, other: impl IntoIterator<Item = Self::Item>) -> Self
    where
        Self::Item: Equivalence,
    {
        set_algebra::intersect(self, other).into_iter().collect()
    }

    /// See [`set_algebra::minus`].
    fn minus(self, remove_me: impl IntoIterator<Item = Self::Item>) -> Self
    where
        Self::Item: Equivalence,
    {
        set_algebra::minus(self, remove_me).into_iter().collect()
    }

    /// See [`set_algebra::disjoint`].
    fn disjoint(self, other: impl IntoIterator<Item = Self::Item>) -> bool
    where
        Self::Item: Equivalence,
    {
        set_algebra::disjoint(self, other)
    }

    /// See [`extremal::min`].
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::EmptyInput`](crate::error::AlgebraError::EmptyInput)
    /// for an empty container.
    fn minimum(self) -> Result<Self::Item>
    where
        Self::Item: NumericOrd,
    {
        extremal::min(self)
    }

    /// See [`extremal::max`].
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::EmptyInput`](crate::error::AlgebraError::EmptyInput)
    /// for an empty container.
    fn maximum(self) -> Result<Self::Item>
    where
        Self::Item: NumericOrd,
    {
        extremal::max(self)
    }

    /// See [`extremal::min_by`].
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::EmptyInput`](crate::error::AlgebraError::EmptyInput)
    /// for an empty container.
    fn minimum_by<'a, Marker>(
        self,
        callable: impl IntoCallable<'a, Self::Item, Marker>,
    ) -> Result<Self::Item> {
        extremal::min_by(self, callable)
    }

    /// See [`extremal::max_by`].
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::EmptyInput`](crate::error::AlgebraError::EmptyInput)
    /// for an empty container.
    fn maximum_by<'a, Marker>(
        self,
        callable: impl IntoCallable<'a, Self::Item, Marker>,
    ) -> Result<Self::Item> {
        extremal::max_by(self, callable)
    }

    /// See [`classify::group_by`]. Each group is rebuilt as `Self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqalg::sequence::SequenceAlgebra;
    /// use std::collections::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=4).collect();
    /// let groups = list.group_by(|value: &i32| value % 2 == 0);
    /// assert_eq!(groups[&true], LinkedList::from([2, 4]));
    /// ```
    fn group_by<K>(self, key: impl Fn(&Self::Item) -> K) -> Classification<K, Self>
    where
        K: Hash + Eq,
    {
        classify::group_by(self, key).map_values(|group| group.into_iter().collect())
    }

    /// See [`classify::count_by`].
    fn count_by<K>(self, key: impl Fn(&Self::Item) -> K) -> Classification<K, usize>
    where
        K: Hash + Eq,
    {
        classify::count_by(self, key)
    }
}

impl<C: SimilarContainer> SequenceAlgebra for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Number;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    fn test_vec_methods_rebuild_vec() {
        let values = vec![4, 1, 4, 2];
        assert_eq!(values.clone().unique(), vec![4, 1, 2]);
        assert_eq!(values.clone().sorted(), vec![1, 2, 4, 4]);
        assert_eq!(values.clone().intersect(vec![2, 4]), vec![2, 4]);
        assert_eq!(values.clone().minus(vec![4]), vec![1, 2]);
        assert!(values.clone().disjoint(vec![3]));
        assert_eq!(values.clone().minimum(), Ok(1));
        assert_eq!(values.maximum(), Ok(4));
    }

    #[rstest]
    fn test_linked_list_sorted_by_comparator() {
        let list: LinkedList<i32> = [1, 3, 2].into_iter().collect();
        let sorted = list.sorted_by(|left: &i32, right: &i32| right.cmp(left));
        assert_eq!(sorted.into_iter().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[rstest]
    fn test_btree_set_is_sorted_by_construction() {
        assert!(<BTreeSet<i32> as SimilarContainer>::SORTED_BY_CONSTRUCTION);
        assert!(!<Vec<i32> as SimilarContainer>::SORTED_BY_CONSTRUCTION);
        let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(set.clone().sorted(), set);
    }

    #[rstest]
    fn test_numbers_through_methods() {
        let values = vec![Number::from(2_i32), Number::from(dec!(2.00)), Number::from(0.5_f64)];
        assert_eq!(values.clone().unique().len(), 2);
        assert_eq!(values.minimum_by(|value: &Number| value.clone()), Ok(Number::from(dec!(0.5))));
    }

    #[rstest]
    fn test_extremal_by_key_on_deque() {
        let words: VecDeque<&str> = VecDeque::from(vec!["hello", "hi", "hey"]);
        assert_eq!(words.clone().minimum_by(|word: &&str| word.len()), Ok("hi"));
        assert_eq!(words.maximum_by(|word: &&str| word.len()), Ok("hello"));
    }

    #[rstest]
    fn test_group_and_count_by() {
        let values: VecDeque<i32> = (1..=6).collect();
        let groups = values.clone().group_by(|value: &i32| value % 3);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1, 2, 0]);
        assert_eq!(groups[&0], VecDeque::from(vec![3, 6]));
        let counts = values.count_by(|value: &i32| *value > 2);
        assert_eq!(counts[&true], 4);
        assert_eq!(counts[&false], 2);
    }

    #[rstest]
    fn test_unique_by_on_vec() {
        let result = vec!["Ab", "ab", "cd"].unique_by(|word: &&str| word.to_lowercase());
        assert_eq!(result, vec!["Ab", "cd"]);
    }
}
