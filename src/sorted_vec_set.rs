//! A sorted set that treats elements with equal hash codes as duplicates.
//!
//! The elements are stored in a [SortedVec], ordered by a [Comparator]. In addition the hash
//! codes of all elements are kept in a hash set, which is used to reject duplicates. Unlike
//! `BTreeSet`, two elements are the same element if their *hash codes* are equal, regardless
//! of what the comparator or `Eq` say about them.
//!
//! Hash codes are computed with the FNV hasher, so they are stable across sets and runs.
use crate::comparator::Comparator;
use crate::condition::ensure_false;
use crate::error::{Error, Result};
use crate::sorted_vec::SortedVec;
use fnv::{FnvHashSet, FnvHasher};
use smallvec::{Array, SmallVec};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

/// The hash code that is used by [SortedVecSet] to detect duplicates
pub fn hash_code<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = FnvHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

/// A set backed by a [SortedVec] that deduplicates by hash code.
///
/// This is not synchronized. Mutation needs `&mut self`, so sharing a set between threads
/// requires external locking.
pub struct SortedVecSet<A: Array> {
    seq: SortedVec<A>,
    hashes: FnvHashSet<u64>,
}

/// A sorted vec set that stores up to 2 elements inline
pub type SortedVecSet2<T> = SortedVecSet<[T; 2]>;

impl<T: Ord + Hash, A: Array<Item = T>> SortedVecSet<A> {
    /// An empty set ordered by the natural order of `T`
    pub fn new() -> Self {
        Self::with_comparator(Comparator::natural())
    }
}

impl<T: Hash, A: Array<Item = T>> SortedVecSet<A> {
    /// An empty set ordered by `cmp`
    pub fn with_comparator(cmp: Comparator<T>) -> Self {
        Self {
            seq: SortedVec::with_comparator(cmp),
            hashes: FnvHashSet::default(),
        }
    }

    /// A set ordered by `cmp` that contains the elements of `iter`, minus duplicates
    pub fn from_iter_with_comparator<I: IntoIterator<Item = T>>(iter: I, cmp: Comparator<T>) -> Self {
        let mut res = Self::with_comparator(cmp);
        res.insert_all(iter);
        res
    }

    pub fn comparator(&self) -> &Comparator<T> {
        self.seq.comparator()
    }

    /// Replaces the comparator and re-sorts all elements under it
    pub fn set_comparator(&mut self, cmp: Comparator<T>) {
        self.seq.set_comparator(cmp)
    }

    /// Inserts an element, unless an element with the same hash code is already present.
    ///
    /// Returns true if the element was inserted.
    pub fn insert(&mut self, value: T) -> bool {
        if self.hashes.insert(hash_code(&value)) {
            self.seq.insert(value)
        } else {
            false
        }
    }

    /// Inserting at an explicit index is not supported, since it could break the sort order.
    pub fn insert_at(&mut self, _index: usize, _value: T) -> Result<bool> {
        Err(Error::UnsupportedOperation(
            "a sorted vec set does not allow inserting at an index",
        ))
    }

    /// Removes the element with the same hash code as `value`.
    ///
    /// Returns true if an element was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        let hash = hash_code(value);
        if !self.hashes.remove(&hash) {
            return false;
        }
        if let Some(index) = self.position_of_hash(value, hash) {
            self.seq.remove_at(index);
        }
        true
    }

    /// position of the element with hash code `hash`. Looks at the run of elements that are
    /// equal to `value` according to the comparator first.
    fn position_of_hash(&self, value: &T, hash: u64) -> Option<usize> {
        if let Some(start) = self.seq.index_of(value) {
            let run = self.seq.as_slice()[start..]
                .iter()
                .take_while(|x| self.comparator().compare(x, value) == Ordering::Equal);
            for (offset, x) in run.enumerate() {
                if hash_code(x) == hash {
                    return Some(start + offset);
                }
            }
        }
        self.seq.iter().position(|x| hash_code(x) == hash)
    }

    /// true if an element with the same hash code as `value` is present.
    ///
    /// This does not consult the comparator.
    pub fn contains(&self, value: &T) -> bool {
        self.hashes.contains(&hash_code(value))
    }

    /// true if all elements are contained. An empty input is trivially contained.
    pub fn contains_all<'a, I>(&self, iter: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        iter.into_iter().all(|x| self.contains(x))
    }

    /// Inserts all elements.
    ///
    /// Returns false for an empty input, otherwise true if every single element was inserted.
    /// All elements are inserted even if an earlier one was a duplicate.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, iter: I) -> bool {
        let mut iter = iter.into_iter().peekable();
        if iter.peek().is_none() {
            return false;
        }
        iter.fold(true, |all, x| self.insert(x) && all)
    }

    /// Removes all elements.
    ///
    /// Returns false for an empty input, otherwise true if every single element was removed.
    pub fn remove_all<'a, I>(&mut self, iter: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut iter = iter.into_iter().peekable();
        if iter.peek().is_none() {
            return false;
        }
        iter.fold(true, |all, x| self.remove(x) && all)
    }

    /// Retains only the elements that are contained in `elements` (by `PartialEq`).
    ///
    /// Returns true if anything was removed.
    pub fn retain_all(&mut self, elements: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.retain(|x| elements.contains(x))
    }

    /// Retains only the elements for which `f` returns true.
    ///
    /// Returns true if anything was removed.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) -> bool {
        let mut removed = false;
        // back to front, so removing does not shift the elements that are still to be visited
        for index in (0..self.seq.len()).rev() {
            if !f(&self.seq[index]) {
                if let Some(x) = self.seq.remove_at(index) {
                    self.hashes.remove(&hash_code(&x));
                    removed = true;
                }
            }
        }
        removed
    }

    pub fn clear(&mut self) {
        self.hashes.clear();
        self.seq.clear();
    }

    /// The smallest element
    pub fn first(&self) -> Result<&T> {
        self.seq.first().ok_or(Error::NoSuchElement("set is empty"))
    }

    /// The largest element
    pub fn last(&self) -> Result<&T> {
        self.seq.last().ok_or(Error::NoSuchElement("set is empty"))
    }

    /// index of the stored element with the same hash code as `value`
    fn stored_index(&self, value: &T, message: &'static str) -> Result<usize> {
        let hash = hash_code(value);
        if !self.hashes.contains(&hash) {
            return Err(Error::NoSuchElement(message));
        }
        self.position_of_hash(value, hash)
            .ok_or(Error::NoSuchElement(message))
    }

    /// first index of the comparator run of the stored element matching `from`
    fn start_of(&self, from: &T) -> Result<usize> {
        let index = self.stored_index(from, "from element not contained by set")?;
        Ok(self.seq.index_of(&self.seq[index]).unwrap_or(index))
    }

    /// last index of the comparator run of the stored element matching `to`
    fn end_of(&self, to: &T) -> Result<usize> {
        let index = self.stored_index(to, "to element not contained by set")?;
        Ok(self.seq.last_index_of(&self.seq[index]).unwrap_or(index))
    }

    /// A new set that contains the elements from `from` to `to`, both inclusive.
    ///
    /// A boundary must be contained by the set, i.e. match a stored element by hash code. The
    /// range extends over the whole comparator run of the stored elements at either end.
    pub fn sub_set(&self, from: &T, to: &T) -> Result<Self>
    where
        T: Clone,
    {
        let start = self.start_of(from)?;
        let end = self.end_of(to)?;
        ensure_false(start > end, "from element greater than to element")?;
        Ok(self.copy_of_range(start, end + 1))
    }

    /// A new set that contains the elements up to `to`, inclusive
    pub fn head_set(&self, to: &T) -> Result<Self>
    where
        T: Clone,
    {
        let end = self.end_of(to)?;
        Ok(self.copy_of_range(0, end + 1))
    }

    /// A new set that contains the elements from `from` on, inclusive
    pub fn tail_set(&self, from: &T) -> Result<Self>
    where
        T: Clone,
    {
        let start = self.start_of(from)?;
        Ok(self.copy_of_range(start, self.len()))
    }

    fn copy_of_range(&self, start: usize, end: usize) -> Self
    where
        T: Clone,
    {
        let elements = &self.seq.as_slice()[start..end];
        let data: SmallVec<A> = elements.iter().cloned().collect();
        Self {
            hashes: elements.iter().map(|x| hash_code(x)).collect(),
            seq: SortedVec::from_sorted_unchecked(data, self.comparator().clone()),
        }
    }

    /// An iterator that returns the elements in ascending order
    pub fn iter(&self) -> std::slice::Iter<T> {
        self.seq.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        self.seq.as_slice()
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn shrink_to_fit(&mut self) {
        self.seq.shrink_to_fit();
        self.hashes.shrink_to_fit();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.seq.into_vec()
    }

    /// The underlying sorted sequence
    pub fn into_sorted_vec(self) -> SortedVec<A> {
        self.seq
    }

    fn sorted_hashes(&self) -> Vec<u64> {
        let mut res: Vec<u64> = self.hashes.iter().cloned().collect();
        res.sort_unstable();
        res
    }
}

impl<T: Ord + Hash, A: Array<Item = T>> Default for SortedVecSet<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, A: Array<Item = T>> Clone for SortedVecSet<A> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq.clone(),
            hashes: self.hashes.clone(),
        }
    }
}

impl<T: Debug, A: Array<Item = T>> Debug for SortedVecSet<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.seq.iter()).finish()
    }
}

/// Two sets are equal if they contain the same hash codes
impl<T: Hash, A: Array<Item = T>> PartialEq for SortedVecSet<A> {
    fn eq(&self, other: &Self) -> bool {
        self.hashes == other.hashes
    }
}

impl<T: Hash, A: Array<Item = T>> Eq for SortedVecSet<A> {}

impl<T: Hash, A: Array<Item = T>> Hash for SortedVecSet<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_hashes().hash(state)
    }
}

impl<T: Ord + Hash, A: Array<Item = T>> FromIterator<T> for SortedVecSet<A> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with_comparator(iter, Comparator::natural())
    }
}

impl<T: Ord + Hash, A: Array<Item = T>> From<Vec<T>> for SortedVecSet<A> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T: Hash, A: Array<Item = T>> Extend<T> for SortedVecSet<A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<A: Array> IntoIterator for SortedVecSet<A> {
    type Item = A::Item;
    type IntoIter = smallvec::IntoIter<A>;
    fn into_iter(self) -> Self::IntoIter {
        self.seq.into_iter()
    }
}

impl<'a, A: Array> IntoIterator for &'a SortedVecSet<A> {
    type Item = &'a A::Item;
    type IntoIter = std::slice::Iter<'a, A::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.seq.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[cfg_attr(sorted_collections_docsrs, doc(cfg(feature = "serde")))]
    impl<T: Serialize, A: Array<Item = T>> Serialize for SortedVecSet<A> {
        fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
            serializer.collect_seq(self.seq.iter())
        }
    }

    /// Deserializes into the natural order. Elements with duplicate hash codes are dropped.
    #[cfg_attr(sorted_collections_docsrs, doc(cfg(feature = "serde")))]
    impl<'de, T: Deserialize<'de> + Ord + Hash, A: Array<Item = T>> Deserialize<'de>
        for SortedVecSet<A>
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
            let elements: Vec<T> = Vec::deserialize(deserializer)?;
            Ok(elements.into_iter().collect())
        }
    }
}
