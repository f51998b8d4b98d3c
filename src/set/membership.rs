//! Presence-only membership storage.
//!
//! This is the unsynchronized storage layer shared by both set flavors:
//! a map from element to a unit marker, where key uniqueness is what
//! enforces the "no duplicate elements" invariant. Thread safety is
//! layered on top by [`SyncSet`](super::SyncSet).

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// A map from element value to a unit marker.
///
/// All operations are O(1) expected time. Snapshots come out in an
/// arbitrary order that is stable only for the lifetime of a single
/// snapshot; insertion order is not preserved.
#[derive(Clone)]
pub(crate) struct Membership<T> {
    inner: HashMap<T, ()>,
}

impl<T> Membership<T>
where
    T: Hash + Eq,
{
    pub(crate) fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Inserts an element. Returns `true` if it was not already present.
    pub(crate) fn insert(&mut self, element: T) -> bool {
        self.inner.insert(element, ()).is_none()
    }

    /// Removes an element. Returns `true` if it was present.
    pub(crate) fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element).is_some()
    }

    pub(crate) fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(element)
    }

    pub(crate) fn clear(&mut self) {
        self.inner.clear();
    }

    /// Removes and returns an arbitrary element, or `None` if empty.
    pub(crate) fn pop(&mut self) -> Option<T>
    where
        T: Clone,
    {
        let element = self.inner.keys().next().cloned()?;
        self.inner.remove(&element);
        Some(element)
    }

    /// Iterates the current elements in arbitrary order.
    pub(crate) fn elements(&self) -> std::collections::hash_map::Keys<'_, T, ()> {
        self.inner.keys()
    }

    /// Materializes the current elements as an owned snapshot.
    pub(crate) fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.keys().cloned().collect()
    }
}

impl<T> Extend<T> for Membership<T>
where
    T: Hash + Eq,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().map(|element| (element, ())));
    }
}

impl<T> FromIterator<T> for Membership<T>
where
    T: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().map(|element| (element, ())).collect(),
        }
    }
}

impl<T> IntoIterator for Membership<T>
where
    T: Hash + Eq,
{
    type Item = T;
    type IntoIter = std::iter::Map<std::collections::hash_map::IntoIter<T, ()>, fn((T, ())) -> T>;

    fn into_iter(self) -> Self::IntoIter {
        fn extract_key<T>((key, ()): (T, ())) -> T {
            key
        }
        self.inner.into_iter().map(extract_key)
    }
}

// =============================================================================
// Tests
// =============================================================================
