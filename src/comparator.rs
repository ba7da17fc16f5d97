//! Comparison functions used to order the elements of the sorted collections.
use std::cmp::Ordering;
use std::fmt::Debug;
use std::sync::Arc;

type CompareFn<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

/// A cloneable total order over elements of type `T`.
///
/// A comparator is either the *natural* order of an `Ord` type, or a custom function. Cloning a
/// custom comparator is cheap, the function is shared.
pub struct Comparator<T>(Inner<T>);

enum Inner<T> {
    Natural(fn(&T, &T) -> Ordering),
    Custom(Arc<CompareFn<T>>),
}

impl<T> Comparator<T> {
    /// The natural order of `T`, as given by its `Ord` impl
    pub fn natural() -> Self
    where
        T: Ord,
    {
        Self(Inner::Natural(<T as Ord>::cmp))
    }

    /// A comparator backed by an arbitrary comparison function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self(Inner::Custom(Arc::new(f)))
    }

    /// A comparator that orders elements by a key extracted from them
    pub fn by_key<K, F>(f: F) -> Self
    where
        T: 'static,
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::new(move |a, b| f(a).cmp(&f(b)))
    }

    /// The inverse of this order
    pub fn reversed(&self) -> Self
    where
        T: 'static,
    {
        let inner = self.clone();
        Self::new(move |a, b| inner.compare(b, a))
    }

    /// true if this is the natural order of `T`
    pub fn is_natural(&self) -> bool {
        matches!(self.0, Inner::Natural(_))
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match &self.0 {
            Inner::Natural(f) => f(a, b),
            Inner::Custom(f) => f(a, b),
        }
    }

    /// true if the slice is sorted in ascending order under this comparator
    pub fn is_sorted(&self, items: &[T]) -> bool {
        items
            .windows(2)
            .all(|w| self.compare(&w[0], &w[1]) != Ordering::Greater)
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        match &self.0 {
            Inner::Natural(f) => Self(Inner::Natural(*f)),
            Inner::Custom(f) => Self(Inner::Custom(f.clone())),
        }
    }
}

impl<T: Ord> Default for Comparator<T> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<T> Debug for Comparator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Inner::Natural(_) => f.write_str("Comparator::Natural"),
            Inner::Custom(_) => f.write_str("Comparator::Custom"),
        }
    }
}
