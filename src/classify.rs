//! Key-based classification: grouping and counting.
//!
//! Every function in this module returns a [`Classification`], an
//! insertion-ordered map whose iteration order is the order in which keys
//! were first produced.
//!
//! Keys are hashed, so they need `Hash + Eq`. Using [`Number`] keys merges
//! numerically equal keys of different representations into one group.
//!
//! # Examples
//!
//! ```rust
//! use seqalg::classify::{count_by, group_by};
//!
//! let groups = group_by(1..=6, |value: &i32| value % 2);
//! assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1, 0]);
//! assert_eq!(groups[&1], vec![1, 3, 5]);
//! assert_eq!(groups[&0], vec![2, 4, 6]);
//!
//! let counts = count_by(1..=5, |value: &i32| value % 2);
//! assert_eq!(counts[&1], 3);
//! assert_eq!(counts[&0], 2);
//! ```
//!
//! [`Number`]: crate::numeric::Number

use std::fmt;
use std::hash::Hash;
use std::ops::Index;

use indexmap::IndexMap;

/// An insertion-ordered map from classification key to value.
///
/// Backed by [`IndexMap`] with the `ahash` hasher. Equality is
/// order-sensitive: two classifications are equal only if they hold the
/// same entries in the same order.
#[derive(Clone)]
pub struct Classification<K, V> {
    entries: IndexMap<K, V, ahash::RandomState>,
}

impl<K, V> Classification<K, V> {
    /// Creates an empty classification.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::with_hasher(ahash::RandomState::new()),
        }
    }

    /// Returns the number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the keys in first-seen order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Returns an iterator over the values in first-seen key order.
    pub fn values(&self) -> indexmap::map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Returns an iterator over the entries in first-seen key order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Returns the entry whose key was produced first.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entries.first()
    }

    /// Transforms every value, keeping keys and their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqalg::classify::group_by;
    ///
    /// let sizes = group_by(vec!["a", "bb", "c"], |word: &&str| word.len())
    ///     .map_values(|words| words.len());
    /// assert_eq!(sizes[&1], 2);
    /// ```
    pub fn map_values<W>(self, mut transform: impl FnMut(V) -> W) -> Classification<K, W>
    where
        K: Hash + Eq,
    {
        self.entries
            .into_iter()
            .map(|(key, value)| (key, transform(value)))
            .collect()
    }
}

impl<K: Hash + Eq, V> Classification<K, V> {
    /// Returns the value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + indexmap::Equivalent<K>,
    {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + indexmap::Equivalent<K>,
    {
        self.entries.contains_key(key)
    }
}

impl<K, V> Default for Classification<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Classification<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Classification<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for Classification<K, V> {}

/// Panics if `key` is not present.
impl<K, V, Q> Index<&Q> for Classification<K, V>
where
    K: Hash + Eq,
    Q: ?Sized + Hash + indexmap::Equivalent<K>,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        &self.entries[key]
    }
}

/// Later duplicates of a key replace its value but keep its first position.
impl<K: Hash + Eq, V> FromIterator<(K, V)> for Classification<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K, V> IntoIterator for Classification<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Classification<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// Nested Groups
// =============================================================================

/// One level of a nested grouping produced by [`group_by_chain`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group<K, T> {
    /// The elements of a group at the last level.
    Items(Vec<T>),
    /// A further classification of the group's elements.
    Nested(Classification<K, Group<K, T>>),
}

impl<K, T> Group<K, T> {
    /// Returns the elements if this is the last level.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Self::Items(items) => Some(items),
            Self::Nested(_) => None,
        }
    }

    /// Returns the inner classification if there are further levels.
    pub const fn nested(&self) -> Option<&Classification<K, Self>> {
        match self {
            Self::Items(_) => None,
            Self::Nested(nested) => Some(nested),
        }
    }
}

// =============================================================================
// Algorithms
// =============================================================================

/// Groups `items` by `key`, keeping input order inside each group.
pub fn group_by<T, K>(
    items: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> K,
) -> Classification<K, Vec<T>>
where
    K: Hash + Eq,
{
    let mut groups: Classification<K, Vec<T>> = Classification::new();
    for item in items {
        groups.entries.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Groups `items` by `first`, then each group by the next key function in
/// `rest`, and so on.
///
/// With an empty `rest` this is [`group_by`] with [`Group::Items`] values.
///
/// # Examples
///
/// ```rust
/// use seqalg::classify::{Group, group_by_chain};
///
/// let groups = group_by_chain(1..=6, &|value: &i32| value % 2, &[&|value: &i32| value % 3]);
/// let odd = groups[&1].nested().unwrap();
/// assert_eq!(odd[&1], Group::Items(vec![1]));
/// assert_eq!(odd[&0], Group::Items(vec![3]));
/// assert_eq!(odd[&2], Group::Items(vec![5]));
/// ```
pub fn group_by_chain<T, K>(
    items: impl IntoIterator<Item = T>,
    first: &dyn Fn(&T) -> K,
    rest: &[&dyn Fn(&T) -> K],
) -> Classification<K, Group<K, T>>
where
    K: Hash + Eq,
{
    group_by(items, first).map_values(|group| match rest.split_first() {
        Some((next, remaining)) => Group::Nested(group_by_chain(group, *next, remaining)),
        None => Group::Items(group),
    })
}

/// Counts the elements of `items` per key.
pub fn count_by<T, K>(
    items: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> K,
) -> Classification<K, usize>
where
    K: Hash + Eq,
{
    let mut counts: Classification<K, usize> = Classification::new();
    for item in items {
        *counts.entries.entry(key(&item)).or_insert(0) += 1;
    }
    counts
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for Classification<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct ClassificationVisitor<K, V> {
    marker: std::marker::PhantomData<fn() -> (K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for ClassificationVisitor<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
{
    type Value = Classification<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut classification = Classification::new();
        while let Some((key, value)) = access.next_entry()? {
            classification.entries.insert(key, value);
        }
        Ok(classification)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Classification<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(ClassificationVisitor {
            marker: std::marker::PhantomData,
        })
    }
}
