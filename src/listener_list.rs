//! A thread-safe list of listeners without duplicates.
//!
//! The listeners are held in a shared vector that is replaced on every modification, so
//! iterating over a [ListenerList::snapshot] never blocks writers and is not affected by
//! listeners being added or removed concurrently.
use parking_lot::Mutex;
use std::fmt::Debug;
use std::sync::Arc;

/// How a [ListenerList] decides whether two listeners are the same
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareMethod {
    /// listeners are the same if they compare equal with [PartialEq]
    Equality,
    /// listeners are the same if they are the same allocation
    Identity,
}

fn identical<L: ?Sized>(a: &Arc<L>, b: &Arc<L>) -> bool {
    Arc::ptr_eq(a, b)
}

fn equal<L: ?Sized + PartialEq>(a: &Arc<L>, b: &Arc<L>) -> bool {
    **a == **b
}

pub struct ListenerList<L: ?Sized> {
    compare_method: CompareMethod,
    same: fn(&Arc<L>, &Arc<L>) -> bool,
    listeners: Mutex<Arc<Vec<Arc<L>>>>,
}

impl<L: ?Sized> ListenerList<L> {
    /// An empty list that compares listeners by identity.
    ///
    /// This is the only constructor for listener types without [PartialEq], such as
    /// `dyn Fn(&Event)`. [ListenerList::with_compare_method] needs `L: PartialEq`.
    pub fn new() -> Self {
        Self {
            compare_method: CompareMethod::Identity,
            same: identical::<L>,
            listeners: Mutex::new(Arc::new(Vec::new())),
        }
    }

    pub fn compare_method(&self) -> CompareMethod {
        self.compare_method
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    fn position(&self, listeners: &[Arc<L>], listener: &Arc<L>) -> Option<usize> {
        listeners.iter().position(|x| (self.same)(x, listener))
    }

    /// Adds a listener. Returns false if it was already registered.
    pub fn add(&self, listener: Arc<L>) -> bool {
        let mut guard = self.listeners.lock();
        if self.position(&guard, &listener).is_some() {
            return false;
        }
        let mut next = Vec::with_capacity(guard.len() + 1);
        next.extend(guard.iter().cloned());
        next.push(listener);
        log::trace!("added listener, {} registered", next.len());
        *guard = Arc::new(next);
        true
    }

    /// Adds all listeners that are not yet registered. Returns true if any was added.
    pub fn add_all<I: IntoIterator<Item = Arc<L>>>(&self, listeners: I) -> bool {
        let mut guard = self.listeners.lock();
        let mut next: Vec<Arc<L>> = guard.iter().cloned().collect();
        let before = next.len();
        for listener in listeners {
            if self.position(&next, &listener).is_none() {
                next.push(listener);
            }
        }
        if next.len() == before {
            return false;
        }
        log::trace!("added {} listeners, {} registered", next.len() - before, next.len());
        *guard = Arc::new(next);
        true
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn remove(&self, listener: &Arc<L>) -> bool {
        let mut guard = self.listeners.lock();
        match self.position(&guard, listener) {
            Some(index) => {
                let mut next: Vec<Arc<L>> = guard.iter().cloned().collect();
                next.remove(index);
                log::trace!("removed listener, {} registered", next.len());
                *guard = Arc::new(next);
                true
            }
            None => false,
        }
    }

    /// Removes all given listeners. Returns true if any was removed.
    pub fn remove_all<'a, I>(&self, listeners: I) -> bool
    where
        I: IntoIterator<Item = &'a Arc<L>>,
        L: 'a,
    {
        let to_remove: Vec<&Arc<L>> = listeners.into_iter().collect();
        let mut guard = self.listeners.lock();
        let next: Vec<Arc<L>> = guard
            .iter()
            .filter(|x| !to_remove.iter().any(|r| (self.same)(*x, *r)))
            .cloned()
            .collect();
        if next.len() == guard.len() {
            return false;
        }
        log::trace!("removed {} listeners", guard.len() - next.len());
        *guard = Arc::new(next);
        true
    }

    pub fn clear(&self) {
        *self.listeners.lock() = Arc::new(Vec::new());
    }

    /// The listeners registered at the time of the call, in registration order
    pub fn snapshot(&self) -> Arc<Vec<Arc<L>>> {
        self.listeners.lock().clone()
    }

    /// Iterates over a snapshot of the listeners
    pub fn iter(&self) -> Iter<L> {
        Iter {
            listeners: self.snapshot(),
            index: 0,
        }
    }
}

impl<L: ?Sized + PartialEq> ListenerList<L> {
    /// An empty list that compares listeners with [PartialEq]
    pub fn with_equality() -> Self {
        Self::with_compare_method(CompareMethod::Equality)
    }

    /// An empty list using `compare_method`. `CompareMethod::Identity` gives the same list as
    /// [ListenerList::new].
    pub fn with_compare_method(compare_method: CompareMethod) -> Self {
        let same: fn(&Arc<L>, &Arc<L>) -> bool = match compare_method {
            CompareMethod::Equality => equal::<L>,
            CompareMethod::Identity => identical::<L>,
        };
        Self {
            compare_method,
            same,
            listeners: Mutex::new(Arc::new(Vec::new())),
        }
    }
}

impl<L: ?Sized> Default for ListenerList<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized> Debug for ListenerList<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerList")
            .field("compare_method", &self.compare_method)
            .field("len", &self.len())
            .finish()
    }
}

/// An iterator over a snapshot of a [ListenerList]
pub struct Iter<L: ?Sized> {
    listeners: Arc<Vec<Arc<L>>>,
    index: usize,
}

impl<L: ?Sized> Iterator for Iter<L> {
    type Item = Arc<L>;

    fn next(&mut self) -> Option<Arc<L>> {
        let res = self.listeners.get(self.index).cloned();
        if res.is_some() {
            self.index += 1;
        }
        res
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.listeners.len() - self.index;
        (n, Some(n))
    }
}

impl<L: ?Sized> ExactSizeIterator for Iter<L> {}
