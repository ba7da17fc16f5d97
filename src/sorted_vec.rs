//! A sequence backed by a `SmallVec` that keeps its elements sorted at all times.
//!
//! Elements are ordered by a [Comparator]. Inserting and searching are binary searches, so they
//! are O(log N) comparisons, but inserting and removing single elements moves the tail of the
//! vector and is O(N) for large sequences.
//!
//! Elements that are equal according to the comparator are kept in insertion order.
use crate::comparator::Comparator;
use crate::error::{Error, Result};
use smallvec::{Array, SmallVec};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Index;

/// A sorted sequence backed by a `SmallVec<A>`.
///
/// Only order preserving operations are exposed. Inserting at an explicit index is rejected
/// with [Error::UnsupportedOperation].
pub struct SortedVec<A: Array> {
    data: SmallVec<A>,
    cmp: Comparator<A::Item>,
}

/// A sorted vec that stores up to 2 elements inline
pub type SortedVec2<T> = SortedVec<[T; 2]>;

impl<T: Ord, A: Array<Item = T>> SortedVec<A> {
    /// An empty sequence ordered by the natural order of `T`
    pub fn new() -> Self {
        Self::with_comparator(Comparator::natural())
    }
}

impl<T, A: Array<Item = T>> SortedVec<A> {
    /// An empty sequence ordered by `cmp`
    pub fn with_comparator(cmp: Comparator<T>) -> Self {
        Self {
            data: SmallVec::new(),
            cmp,
        }
    }

    /// A sequence ordered by `cmp` that contains all elements of `iter`
    pub fn from_iter_with_comparator<I: IntoIterator<Item = T>>(iter: I, cmp: Comparator<T>) -> Self {
        let mut data: SmallVec<A> = iter.into_iter().collect();
        data.sort_by(|a, b| cmp.compare(a, b));
        Self { data, cmp }
    }

    /// Wraps data that is known to be sorted according to `cmp`
    pub(crate) fn from_sorted_unchecked(data: SmallVec<A>, cmp: Comparator<T>) -> Self {
        debug_assert!(cmp.is_sorted(&data));
        Self { data, cmp }
    }

    pub fn comparator(&self) -> &Comparator<T> {
        &self.cmp
    }

    /// Replaces the comparator and re-sorts all elements under it.
    ///
    /// The sort is stable, so elements that are equal under the new comparator keep their
    /// current relative order.
    pub fn set_comparator(&mut self, cmp: Comparator<T>) {
        log::debug!("re-sorting {} elements under a new comparator", self.data.len());
        self.data.sort_by(|a, b| cmp.compare(a, b));
        self.cmp = cmp;
    }

    /// index after the last element that does not sort after `value`
    fn upper_bound(&self, value: &T) -> usize {
        self.data
            .partition_point(|x| self.cmp.compare(x, value) != Ordering::Greater)
    }

    /// index of the first element that does not sort before `value`
    fn lower_bound(&self, value: &T) -> usize {
        self.data
            .partition_point(|x| self.cmp.compare(x, value) == Ordering::Less)
    }

    /// Inserts an element at its sorted position. Always returns true.
    pub fn insert(&mut self, value: T) -> bool {
        let index = self.upper_bound(&value);
        self.data.insert(index, value);
        true
    }

    /// Inserting at an explicit index is not supported, since it could break the sort order.
    pub fn insert_at(&mut self, _index: usize, _value: T) -> Result<()> {
        Err(Error::UnsupportedOperation(
            "a sorted vec does not allow inserting at an index",
        ))
    }

    /// Inserts all elements. Returns false if there was nothing to insert.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, iter: I) -> bool {
        let mut changed = false;
        for value in iter {
            changed |= self.insert(value);
        }
        changed
    }

    /// Inserting at an explicit index is not supported, since it could break the sort order.
    pub fn insert_all_at<I: IntoIterator<Item = T>>(&mut self, _index: usize, _iter: I) -> Result<bool> {
        Err(Error::UnsupportedOperation(
            "a sorted vec does not allow inserting at an index",
        ))
    }

    /// Index of the first element that is equal to `value` according to the comparator
    pub fn index_of(&self, value: &T) -> Option<usize> {
        let index = self.lower_bound(value);
        match self.data.get(index) {
            Some(x) if self.cmp.compare(x, value) == Ordering::Equal => Some(index),
            _ => None,
        }
    }

    /// Index of the last element that is equal to `value` according to the comparator
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        let index = self.upper_bound(value).checked_sub(1)?;
        if self.cmp.compare(&self.data[index], value) == Ordering::Equal {
            Some(index)
        } else {
            None
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.last_index_of(value).is_some()
    }

    /// Removes the first element that is equal to `value` according to the comparator.
    ///
    /// Returns true if an element was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        if let Some(index) = self.index_of(value) {
            self.data.remove(index);
            true
        } else {
            false
        }
    }

    /// Removes and returns the element at `index`, or None if the index is out of bounds
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.data.len() {
            Some(self.data.remove(index))
        } else {
            None
        }
    }

    /// Retains only the elements for which `f` returns true
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        self.data.retain(|x| f(x))
    }

    pub fn clear(&mut self) {
        self.data.clear()
    }

    /// The elements from the first occurrence of `from` to the last occurrence of `to`,
    /// inclusive. Empty if either bound is absent or `from` sorts after `to`.
    pub fn range(&self, from: &T, to: &T) -> &[T] {
        match (self.index_of(from), self.last_index_of(to)) {
            (Some(start), Some(end)) if start <= end => &self.data[start..=end],
            _ => &[],
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// The smallest element
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// The largest element
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// An iterator that returns the elements in ascending order
    pub fn iter(&self) -> std::slice::Iter<T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }
}

impl<T: Ord, A: Array<Item = T>> Default for SortedVec<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, A: Array<Item = T>> Clone for SortedVec<A> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: Debug, A: Array<Item = T>> Debug for SortedVec<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

// equality and hashing only look at the elements, not at the comparator

impl<T: PartialEq, A: Array<Item = T>> PartialEq for SortedVec<A> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq, A: Array<Item = T>> Eq for SortedVec<A> {}

impl<T: Hash, A: Array<Item = T>> Hash for SortedVec<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state)
    }
}

impl<T, A: Array<Item = T>> Index<usize> for SortedVec<A> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, A: Array<Item = T>> AsRef<[T]> for SortedVec<A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Ord, A: Array<Item = T>> FromIterator<T> for SortedVec<A> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with_comparator(iter, Comparator::natural())
    }
}

impl<T: Ord, A: Array<Item = T>> From<Vec<T>> for SortedVec<A> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, A: Array<Item = T>> Extend<T> for SortedVec<A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<A: Array> IntoIterator for SortedVec<A> {
    type Item = A::Item;
    type IntoIter = smallvec::IntoIter<A>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, A: Array> IntoIterator for &'a SortedVec<A> {
    type Item = &'a A::Item;
    type IntoIter = std::slice::Iter<'a, A::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[cfg_attr(sorted_collections_docsrs, doc(cfg(feature = "serde")))]
    impl<T: Serialize, A: Array<Item = T>> Serialize for SortedVec<A> {
        fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
            serializer.collect_seq(self.data.iter())
        }
    }

    /// Deserializes into the natural order, whatever the order of the serialized elements
    #[cfg_attr(sorted_collections_docsrs, doc(cfg(feature = "serde")))]
    impl<'de, T: Deserialize<'de> + Ord, A: Array<Item = T>> Deserialize<'de> for SortedVec<A> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
            let elements: Vec<T> = Vec::deserialize(deserializer)?;
            Ok(elements.into_iter().collect())
        }
    }
}
