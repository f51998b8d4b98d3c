//! Thread-safe set guarded by one reader/writer lock.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;
use static_assertions::assert_impl_all;

use super::Set;
use super::membership::Membership;
use super::stream::{ElementStream, SetIter};

// =============================================================================
// SyncSet Definition
// =============================================================================

/// A thread-safe, unordered collection of unique elements.
///
/// `SyncSet` wraps the membership storage in a single reader/writer lock.
/// Read-only operations take the shared read lock, mutations take the
/// exclusive write lock, and every public operation is atomic with respect
/// to itself: each read observes a consistent snapshot as of some point
/// between its start and end. Composite invariants spanning several calls
/// need external synchronization by the caller.
///
/// # Handle Semantics
///
/// A `SyncSet` value is a *handle*. [`Clone`] clones the handle, not the
/// data: both handles share one membership map and one lock, which is how a
/// set is handed to other threads. [`snapshot`](SyncSet::snapshot) is the
/// deep copy.
///
/// # Lock Ordering
///
/// Binary operations read from two independently locked sets. They always
/// acquire the receiver's lock first and the argument's lock second; when
/// both handles point at the same set, a single acquisition is used. With
/// this fixed order and shared read locks on both sides, `a.union(&b)`
/// racing `b.union(&a)` cannot form a circular wait.
///
/// # Examples
///
/// ```rust
/// use std::thread;
/// use syncset::SyncSet;
///
/// let visited = SyncSet::new();
/// thread::scope(|scope| {
///     for page in ["/", "/about", "/", "/contact"] {
///         let visited = visited.clone();
///         scope.spawn(move || {
///             visited.insert(page);
///         });
///     }
/// });
/// assert_eq!(visited.len(), 3);
/// ```
pub struct SyncSet<T> {
    shared: Arc<RwLock<Membership<T>>>,
}

assert_impl_all!(SyncSet<String>: Send, Sync, Clone);

impl<T> Clone for SyncSet<T> {
    /// Clones the handle. Both handles observe and mutate the same set.
    ///
    /// Use [`snapshot`](SyncSet::snapshot) for an independent deep copy.
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> SyncSet<T>
where
    T: Hash + Eq,
{
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::SyncSet;
    ///
    /// let set: SyncSet<i32> = SyncSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_membership(Membership::new())
    }

    /// Creates an empty set with at least the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_membership(Membership::with_capacity(capacity))
    }

    pub(crate) fn from_membership(membership: Membership<T>) -> Self {
        Self {
            shared: Arc::new(RwLock::new(membership)),
        }
    }

    /// Runs `operation` against the membership under the read lock.
    #[cfg(feature = "serde")]
    pub(crate) fn with_membership<R>(&self, operation: impl FnOnce(&Membership<T>) -> R) -> R {
        operation(&self.shared.read())
    }

    /// Returns the number of elements in the set.
    ///
    /// Under concurrent mutation the count may differ between two
    /// successive calls; each call reports the exact cardinality at the
    /// moment its read lock was held.
    pub fn len(&self) -> usize {
        self.shared.read().len()
    }

    /// Returns `true` if the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.shared.read().is_empty()
    }

    /// Inserts an element into the set.
    ///
    /// Returns `true` if the element was not already present. Inserting a
    /// present element is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::SyncSet;
    ///
    /// let set = SyncSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&self, element: T) -> bool {
        self.shared.write().insert(element)
    }

    /// Inserts every element of `elements` into the set atomically.
    ///
    /// Returns `true` if at least one element was newly inserted. The whole
    /// batch happens under a single write-lock hold, so no reader observes
    /// a partial batch.
    pub fn insert_all<I: IntoIterator<Item = T>>(&self, elements: I) -> bool {
        let mut guard = self.shared.write();
        let mut inserted = false;
        for element in elements {
            inserted |= guard.insert(element);
        }
        inserted
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present; removing an absent
    /// element is a no-op. Accepts any borrowed form of the element type.
    pub fn remove<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.shared.write().remove(element)
    }

    /// Removes all elements. The set stays usable afterward.
    pub fn clear(&self) {
        self.shared.write().clear();
    }

    /// Returns `true` if the set contains the element.
    ///
    /// Accepts any borrowed form of the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::SyncSet;
    ///
    /// let set: SyncSet<String> = ["earth".to_string()].into();
    /// assert!(set.contains("earth")); // &str lookup for String elements
    /// ```
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.shared.read().contains(element)
    }

    /// Returns `true` if every given element is present.
    ///
    /// The whole check runs under one read-lock hold, so it answers against
    /// a single consistent snapshot. Vacuously `true` for empty input.
    pub fn contains_all<'a, I>(&self, elements: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let guard = self.shared.read();
        elements.into_iter().all(|element| guard.contains(element))
    }

    /// Returns `true` if at least one given element is present.
    pub fn contains_any<'a, I>(&self, elements: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let guard = self.shared.read();
        elements.into_iter().any(|element| guard.contains(element))
    }

    /// Visits every element under the read lock, stopping early when the
    /// visitor returns `true`.
    ///
    /// A panic inside the visitor propagates to the caller; the read lock
    /// is released during unwinding (the guard is a scoped RAII guard and
    /// `parking_lot` locks do not poison), so the set remains fully usable
    /// afterward.
    ///
    /// The visitor runs while the read lock is held. Do not call this
    /// set's own operations from inside it; use [`iter`](SyncSet::iter)
    /// when the loop body needs the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::SyncSet;
    ///
    /// let set: SyncSet<i32> = (0..10).collect();
    /// let mut sum = 0;
    /// set.each(|element| {
    ///     sum += element;
    ///     false // never stop early
    /// });
    /// assert_eq!(sum, 45);
    /// ```
    pub fn each<F: FnMut(&T) -> bool>(&self, mut visitor: F) {
        let guard = self.shared.read();
        for element in guard.elements() {
            if visitor(element) {
                break;
            }
        }
    }
}

impl<T> SyncSet<T>
where
    T: Hash + Eq + Clone,
{
    /// Removes and returns an arbitrary element, or `None` if empty.
    pub fn pop(&self) -> Option<T> {
        self.shared.write().pop()
    }

    /// Materializes the current membership as a vector.
    ///
    /// Order is unspecified. The snapshot is taken under a bounded
    /// read-lock hold, so calling this while other threads drain
    /// [`stream`](SyncSet::stream) iterators of the same set cannot
    /// deadlock.
    pub fn to_vec(&self) -> Vec<T> {
        self.shared.read().snapshot()
    }

    /// Returns a deep copy with independent storage and an independent
    /// lock.
    ///
    /// The copy reflects the membership at the moment the read lock was
    /// held; later mutations of either set do not affect the other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::SyncSet;
    ///
    /// let set: SyncSet<i32> = [1, 2].into();
    /// let copy = set.snapshot();
    /// copy.insert(3);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(copy.len(), 3);
    /// ```
    #[must_use]
    pub fn snapshot(&self) -> Self {
        let guard = self.shared.read();
        Self::from_membership(Membership::clone(&guard))
    }

    /// Returns an iterator over a snapshot of the set.
    ///
    /// The elements are copied out under a bounded read-lock hold and the
    /// lock is released before the first `next` call, so iteration never
    /// blocks writers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::SyncSet;
    ///
    /// let set: SyncSet<i32> = [1, 2, 3].into();
    /// let mut elements: Vec<i32> = set.iter().collect();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> SetIter<T> {
        SetIter::from_snapshot(self.to_vec())
    }

    /// Returns the union of two sets as a freshly allocated set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::SyncSet;
    ///
    /// let set_a: SyncSet<i32> = [1, 2, 3].into();
    /// let set_b: SyncSet<i32> = [2, 3, 4].into();
    ///
    /// let union = set_a.union(&set_b);
    /// assert_eq!(union.len(), 4);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if Arc::ptr_eq(&self.shared, &other.shared) {
            return self.snapshot();
        }
        // Receiver's lock first, then the argument's.
        let ours = self.shared.read();
        let theirs = other.shared.read();
        let mut membership = Membership::clone(&ours);
        membership.extend(theirs.elements().cloned());
        Self::from_membership(membership)
    }

    /// Returns the intersection of two sets as a freshly allocated set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::SyncSet;
    ///
    /// let set_a: SyncSet<i32> = [1, 2, 3].into();
    /// let set_b: SyncSet<i32> = [2, 3, 4].into();
    ///
    /// let intersection = set_a.intersection(&set_b);
    /// assert_eq!(intersection.len(), 2);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        if Arc::ptr_eq(&self.shared, &other.shared) {
            return self.snapshot();
        }
        let ours = self.shared.read();
        let theirs = other.shared.read();

        // Iterate over the smaller side for better performance
        let (smaller, larger) = if ours.len() <= theirs.len() {
            (&*ours, &*theirs)
        } else {
            (&*theirs, &*ours)
        };
        let mut membership = Membership::new();
        for element in smaller.elements() {
            if larger.contains(element) {
                membership.insert(element.clone());
            }
        }
        Self::from_membership(membership)
    }

    /// Returns the elements of `self` absent from `other` as a freshly
    /// allocated set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::SyncSet;
    ///
    /// let set_a: SyncSet<i32> = [1, 2, 3].into();
    /// let set_b: SyncSet<i32> = [2, 3, 4].into();
    ///
    /// let difference = set_a.difference(&set_b);
    /// assert!(difference.contains(&1));
    /// assert_eq!(difference.len(), 1);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        if Arc::ptr_eq(&self.shared, &other.shared) {
            return Self::new();
        }
        let ours = self.shared.read();
        let theirs = other.shared.read();
        let mut membership = Membership::new();
        for element in ours.elements() {
            if !theirs.contains(element) {
                membership.insert(element.clone());
            }
        }
        Self::from_membership(membership)
    }

    /// Returns the elements present in exactly one of the two sets as a
    /// freshly allocated set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::SyncSet;
    ///
    /// let set_a: SyncSet<i32> = [1, 2, 3].into();
    /// let set_b: SyncSet<i32> = [2, 3, 4].into();
    ///
    /// let symmetric = set_a.symmetric_difference(&set_b);
    /// assert!(symmetric.contains(&1));
    /// assert!(symmetric.contains(&4));
    /// assert_eq!(symmetric.len(), 2);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        if Arc::ptr_eq(&self.shared, &other.shared) {
            return Self::new();
        }
        let ours = self.shared.read();
        let theirs = other.shared.read();
        let mut membership = Membership::new();
        for element in ours.elements() {
            if !theirs.contains(element) {
                membership.insert(element.clone());
            }
        }
        for element in theirs.elements() {
            if !ours.contains(element) {
                membership.insert(element.clone());
            }
        }
        Self::from_membership(membership)
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// Both sets are read under one lock hold each, so the answer is
    /// consistent against a single snapshot of the pair.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.shared, &other.shared) {
            return true;
        }
        let ours = self.shared.read();
        let theirs = other.shared.read();
        if ours.len() > theirs.len() {
            return false;
        }
        ours.elements().all(|element| theirs.contains(element))
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` is a subset of `other` and strictly
    /// smaller.
    #[must_use]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.shared, &other.shared) {
            return false;
        }
        let ours = self.shared.read();
        let theirs = other.shared.read();
        ours.len() < theirs.len() && ours.elements().all(|element| theirs.contains(element))
    }

    /// Returns `true` if `self` is a superset of `other` and strictly
    /// larger.
    #[must_use]
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_proper_subset(self)
    }

    /// Returns `true` if the two sets share at least one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::SyncSet;
    ///
    /// let set_a: SyncSet<i32> = [1, 2].into();
    /// let set_b: SyncSet<i32> = [2, 3].into();
    /// let set_c: SyncSet<i32> = [4, 5].into();
    ///
    /// assert!(set_a.intersects(&set_b));
    /// assert!(!set_a.intersects(&set_c));
    /// ```
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.shared, &other.shared) {
            return !self.is_empty();
        }
        let ours = self.shared.read();
        let theirs = other.shared.read();
        let (smaller, larger) = if ours.len() <= theirs.len() {
            (&*ours, &*theirs)
        } else {
            (&*theirs, &*ours)
        };
        smaller.elements().any(|element| larger.contains(element))
    }

    /// Returns `true` if the two sets share no elements.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.intersects(other)
    }
}

impl<T> SyncSet<T>
where
    T: Hash + Eq + Clone + Send + 'static,
{
    /// Streams the elements of the set through a bounded hand-off channel.
    ///
    /// A producer thread snapshots the membership under a bounded read-lock
    /// hold, releases the lock, then sends the elements one at a time into
    /// a channel of the given `capacity` (`0` means a rendezvous channel:
    /// every element is handed off directly). Because no lock is held while
    /// streaming, a slow consumer exerts backpressure on the producer
    /// thread only, never on the set.
    ///
    /// Dropping the stream disconnects the channel; the producer notices on
    /// its next send and exits, so abandoned streams leak no threads.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::SyncSet;
    ///
    /// let set: SyncSet<i32> = (0..100).collect();
    /// let mut drained: Vec<i32> = set.stream(8).collect();
    /// drained.sort_unstable();
    /// assert_eq!(drained.len(), 100);
    ///
    /// // Abandoning a stream early is fine; the set is unaffected.
    /// let mut stream = set.stream(0);
    /// let _first = stream.next();
    /// drop(stream);
    /// assert_eq!(set.len(), 100);
    /// ```
    pub fn stream(&self, capacity: usize) -> ElementStream<T> {
        ElementStream::spawn(self.to_vec(), capacity)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for SyncSet<T>
where
    T: Hash + Eq,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SyncSet<T>
where
    T: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_membership(iter.into_iter().collect())
    }
}

impl<T, const N: usize> From<[T; N]> for SyncSet<T>
where
    T: Hash + Eq,
{
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> Extend<T> for SyncSet<T>
where
    T: Hash + Eq,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<T> IntoIterator for SyncSet<T>
where
    T: Hash + Eq + Clone,
{
    type Item = T;
    type IntoIter = SetIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterating a borrowed `SyncSet` yields owned elements from a snapshot;
/// references into the locked storage cannot escape the lock.
impl<T> IntoIterator for &SyncSet<T>
where
    T: Hash + Eq + Clone,
{
    type Item = T;
    type IntoIter = SetIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> PartialEq for SyncSet<T>
where
    T: Hash + Eq,
{
    /// Same cardinality and same membership.
    ///
    /// Locks the receiver first, then the argument, like every binary
    /// operation.
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.shared, &other.shared) {
            return true;
        }
        let ours = self.shared.read();
        let theirs = other.shared.read();
        if ours.len() != theirs.len() {
            return false;
        }
        ours.elements().all(|element| theirs.contains(element))
    }
}

impl<T> Eq for SyncSet<T> where T: Hash + Eq {}

impl<T> fmt::Debug for SyncSet<T>
where
    T: Hash + Eq + fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.shared.read();
        formatter.debug_set().entries(guard.elements()).finish()
    }
}

impl<T> fmt::Display for SyncSet<T>
where
    T: Hash + Eq + fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.shared.read();
        write!(formatter, "{{")?;
        let mut first = true;
        for element in guard.elements() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Set Trait Implementation
// =============================================================================

impl<T> Set<T> for SyncSet<T>
where
    T: Hash + Eq + Clone,
{
    fn insert(&mut self, element: T) -> bool {
        Self::insert(self, element)
    }

    fn insert_all<I: IntoIterator<Item = T>>(&mut self, elements: I) -> bool {
        Self::insert_all(self, elements)
    }

    fn remove(&mut self, element: &T) -> bool {
        Self::remove(self, element)
    }

    fn pop(&mut self) -> Option<T> {
        Self::pop(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    fn contains_all<'a, I>(&self, elements: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        Self::contains_all(self, elements)
    }

    fn contains_any<'a, I>(&self, elements: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        Self::contains_any(self, elements)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn to_vec(&self) -> Vec<T> {
        Self::to_vec(self)
    }

    fn each<F: FnMut(&T) -> bool>(&self, visitor: F) {
        Self::each(self, visitor);
    }

    fn snapshot(&self) -> Self {
        Self::snapshot(self)
    }

    fn union(&self, other: &Self) -> Self {
        Self::union(self, other)
    }

    fn intersection(&self, other: &Self) -> Self {
        Self::intersection(self, other)
    }

    fn difference(&self, other: &Self) -> Self {
        Self::difference(self, other)
    }

    fn symmetric_difference(&self, other: &Self) -> Self {
        Self::symmetric_difference(self, other)
    }

    fn is_subset(&self, other: &Self) -> bool {
        Self::is_subset(self, other)
    }

    fn is_superset(&self, other: &Self) -> bool {
        Self::is_superset(self, other)
    }

    fn is_proper_subset(&self, other: &Self) -> bool {
        Self::is_proper_subset(self, other)
    }

    fn is_proper_superset(&self, other: &Self) -> bool {
        Self::is_proper_superset(self, other)
    }

    fn intersects(&self, other: &Self) -> bool {
        Self::intersects(self, other)
    }

    fn is_disjoint(&self, other: &Self) -> bool {
        Self::is_disjoint(self, other)
    }
}

// =============================================================================
// Rayon Support
// =============================================================================

#[cfg(feature = "rayon")]
impl<T> SyncSet<T>
where
    T: Hash + Eq + Clone + Send,
{
    /// Returns a parallel iterator over a snapshot of the set.
    ///
    /// The snapshot is taken under a bounded read-lock hold; the parallel
    /// iteration itself runs lock-free on the copied elements.
    pub fn par_iter(&self) -> rayon::vec::IntoIter<T> {
        use rayon::iter::IntoParallelIterator;
        self.to_vec().into_par_iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
