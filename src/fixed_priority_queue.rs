//! A priority queue with a fixed maximum size.
//!
//! The queue keeps the `max_size` greatest elements that were offered to it. Its head is the
//! smallest of them, so once the queue is full a new element is only accepted if it sorts
//! after the head, which is then dropped.
use crate::comparator::Comparator;
use crate::condition::ensure_at_least;
use crate::error::Result;
use crate::sorted_vec::SortedVec;
use smallvec::Array;
use std::cmp::Ordering;
use std::fmt::Debug;

/// A bounded priority queue backed by a [SortedVec]
pub struct FixedPriorityQueue<A: Array> {
    max_size: usize,
    items: SortedVec<A>,
}

impl<T: Ord, A: Array<Item = T>> FixedPriorityQueue<A> {
    /// An empty queue using the natural order of `T`. Fails if `max_size` is 0.
    pub fn new(max_size: usize) -> Result<Self> {
        Self::with_comparator(max_size, Comparator::natural())
    }

    /// A queue that contains the greatest `max_size` elements of `iter`
    pub fn from_elements<I: IntoIterator<Item = T>>(max_size: usize, iter: I) -> Result<Self> {
        let mut res = Self::new(max_size)?;
        res.extend(iter);
        Ok(res)
    }
}

impl<T, A: Array<Item = T>> FixedPriorityQueue<A> {
    /// An empty queue ordered by `cmp`. Fails if `max_size` is 0.
    pub fn with_comparator(max_size: usize, cmp: Comparator<T>) -> Result<Self> {
        ensure_at_least(max_size, 1, "the maximum size must be at least 1")?;
        Ok(Self {
            max_size,
            items: SortedVec::with_comparator(cmp),
        })
    }

    /// A queue ordered by `cmp` that contains the greatest `max_size` elements of `iter`
    pub fn from_elements_with_comparator<I: IntoIterator<Item = T>>(
        max_size: usize,
        iter: I,
        cmp: Comparator<T>,
    ) -> Result<Self> {
        let mut res = Self::with_comparator(max_size, cmp)?;
        res.extend(iter);
        Ok(res)
    }

    /// Offers an element to the queue.
    ///
    /// Returns true if the element was added. If the queue was full, the head has been dropped
    /// to make room for it.
    pub fn offer(&mut self, value: T) -> bool {
        if self.items.len() < self.max_size {
            return self.items.insert(value);
        }
        let accept = match self.items.first() {
            Some(head) => self.items.comparator().compare(&value, head) == Ordering::Greater,
            None => true,
        };
        if accept {
            log::trace!("queue full ({}), evicting head", self.max_size);
            self.items.remove_at(0);
            self.items.insert(value)
        } else {
            log::trace!("queue full ({}), rejecting element", self.max_size);
            false
        }
    }

    /// The head of the queue, i.e. its smallest element
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Removes and returns the head of the queue
    pub fn poll(&mut self) -> Option<T> {
        self.items.remove_at(0)
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_size
    }

    pub fn comparator(&self) -> &Comparator<T> {
        self.items.comparator()
    }

    pub fn clear(&mut self) {
        self.items.clear()
    }

    /// An iterator over the elements, starting with the head
    pub fn iter(&self) -> std::slice::Iter<T> {
        self.items.iter()
    }

    /// The elements in ascending order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.items.into_vec()
    }
}

impl<T, A: Array<Item = T>> Extend<T> for FixedPriorityQueue<A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.offer(value);
        }
    }
}

impl<T: Clone, A: Array<Item = T>> Clone for FixedPriorityQueue<A> {
    fn clone(&self) -> Self {
        Self {
            max_size: self.max_size,
            items: self.items.clone(),
        }
    }
}

impl<T: Debug, A: Array<Item = T>> Debug for FixedPriorityQueue<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedPriorityQueue")
            .field("max_size", &self.max_size)
            .field("items", &self.items)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    type Test = FixedPriorityQueue<[i32; 4]>;

    #[test]
    fn max_size_must_be_positive() {
        assert!(matches!(Test::new(0), Err(Error::InvalidArgument(_))));
        assert_eq!(Test::new(1).unwrap().max_size(), 1);
    }

    #[test]
    fn keeps_the_greatest() {
        let mut q = Test::new(3).unwrap();
        assert!(q.offer(5));
        assert!(q.offer(1));
        assert!(q.offer(3));
        assert!(q.is_full());
        // smaller than the head
        assert!(!q.offer(0));
        assert!(q.offer(4));
        assert_eq!(q.peek(), Some(&3));
        assert_eq!(q.iter().cloned().collect::<Vec<_>>(), vec![3, 4, 5]);
        // equal to the head is not greater
        assert!(!q.offer(3));
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn poll() {
        let mut q = Test::from_elements(2, vec![2, 7, 1, 9]).unwrap();
        assert_eq!(q.poll(), Some(7));
        assert_eq!(q.poll(), Some(9));
        assert_eq!(q.poll(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn reversed_keeps_the_smallest() {
        let mut q: Test =
            FixedPriorityQueue::with_comparator(2, Comparator::natural().reversed()).unwrap();
        q.extend(vec![4, 8, 2, 6]);
        assert_eq!(q.into_sorted_vec(), vec![4, 2]);
    }

    #[test]
    fn from_elements_with_comparator() {
        let by_tens: Comparator<i32> = Comparator::by_key(|x| x / 10);
        let elements = vec![35, 12, 41, 27];
        let q = Test::from_elements_with_comparator(2, elements, by_tens).unwrap();
        assert!(!q.comparator().is_natural());
        assert_eq!(q.into_sorted_vec(), vec![35, 41]);
        let empty = Test::from_elements_with_comparator(0, vec![1], Comparator::natural());
        assert!(matches!(empty, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn evicted_elements_are_dropped() {
        use testdrop::{Item, TestDrop};
        let td = TestDrop::new();
        let by_key = Comparator::new(|a: &(u32, Item), b: &(u32, Item)| a.0.cmp(&b.0));
        let mut q: FixedPriorityQueue<[(u32, Item); 2]> =
            FixedPriorityQueue::with_comparator(1, by_key).unwrap();
        let (first, item) = td.new_item();
        assert!(q.offer((1, item)));
        let (second, item) = td.new_item();
        assert!(q.offer((2, item)));
        td.assert_drop(first);
        let (third, item) = td.new_item();
        assert!(!q.offer((0, item)));
        td.assert_drop(third);
        td.assert_no_drop(second);
    }

    #[quickcheck]
    fn keeps_the_greatest_elements(elements: Vec<i32>, max_size: u8) -> bool {
        let max_size = max_size as usize % 8 + 1;
        let q = Test::from_elements(max_size, elements.clone()).unwrap();
        let mut expected = elements;
        expected.sort();
        let skip = expected.len().saturating_sub(max_size);
        q.into_sorted_vec() == expected[skip..]
    }
}
