//! Unsynchronized set for single-owner use.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use super::Set;
use super::membership::Membership;

// =============================================================================
// LocalSet Definition
// =============================================================================

/// An unordered collection of unique elements without synchronization.
///
/// `LocalSet` is the baseline flavor: every operation touches the membership
/// storage directly, with no lock and no sharing. Use it when one owner
/// holds the set, or as the scratch space inside algorithms; reach for
/// [`SyncSet`](super::SyncSet) when concurrent callers are involved.
///
/// Unlike `SyncSet`, `LocalSet` has value semantics: [`Clone`] produces an
/// independent copy.
///
/// # Examples
///
/// ```rust
/// use syncset::LocalSet;
///
/// let mut set = LocalSet::new();
/// assert!(set.insert("earth"));
/// assert!(!set.insert("earth")); // already present
/// assert!(set.contains("earth"));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone)]
pub struct LocalSet<T> {
    membership: Membership<T>,
}

impl<T> LocalSet<T>
where
    T: Hash + Eq,
{
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::LocalSet;
    ///
    /// let set: LocalSet<i32> = LocalSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            membership: Membership::new(),
        }
    }

    /// Creates an empty set with at least the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            membership: Membership::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.membership.len()
    }

    /// Returns `true` if the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.membership.is_empty()
    }

    /// Inserts an element into the set.
    ///
    /// Returns `true` if the element was not already present. Inserting a
    /// present element is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::LocalSet;
    ///
    /// let mut set = LocalSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        self.membership.insert(element)
    }

    /// Inserts every element of `elements` into the set.
    ///
    /// Returns `true` if at least one element was newly inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::LocalSet;
    ///
    /// let mut set: LocalSet<i32> = [1, 2].into();
    /// assert!(set.insert_all([2, 3]));  // 3 is new
    /// assert!(!set.insert_all([1, 2])); // nothing new
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, elements: I) -> bool {
        let mut inserted = false;
        for element in elements {
            inserted |= self.membership.insert(element);
        }
        inserted
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present; removing an absent
    /// element is a no-op.
    ///
    /// Accepts any borrowed form of the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::LocalSet;
    ///
    /// let mut set: LocalSet<String> = ["earth".to_string()].into();
    /// assert!(set.remove("earth")); // &str lookup for String elements
    /// assert!(!set.remove("earth"));
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.membership.remove(element)
    }

    /// Removes all elements. The set stays usable afterward.
    pub fn clear(&mut self) {
        self.membership.clear();
    }

    /// Returns `true` if the set contains the element.
    ///
    /// Accepts any borrowed form of the element type.
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.membership.contains(element)
    }

    /// Returns `true` if every given element is present.
    ///
    /// Vacuously `true` for empty input.
    pub fn contains_all<'a, I>(&self, elements: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        elements
            .into_iter()
            .all(|element| self.membership.contains(element))
    }

    /// Returns `true` if at least one given element is present.
    pub fn contains_any<'a, I>(&self, elements: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        elements
            .into_iter()
            .any(|element| self.membership.contains(element))
    }

    /// Visits every element, stopping early when the visitor returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::LocalSet;
    ///
    /// let set: LocalSet<i32> = (0..100).collect();
    /// let mut seen = 0;
    /// set.each(|_| {
    ///     seen += 1;
    ///     seen == 10 // stop after ten elements
    /// });
    /// assert_eq!(seen, 10);
    /// ```
    pub fn each<F: FnMut(&T) -> bool>(&self, mut visitor: F) {
        for element in self.membership.elements() {
            if visitor(element) {
                break;
            }
        }
    }

    /// Returns an iterator over the elements of the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::LocalSet;
    ///
    /// let set: LocalSet<i32> = [1, 2, 3].into();
    /// assert_eq!(set.iter().count(), 3);
    /// ```
    pub fn iter(&self) -> LocalSetIterator<'_, T> {
        LocalSetIterator {
            inner: self.membership.elements(),
        }
    }
}

impl<T> LocalSet<T>
where
    T: Hash + Eq + Clone,
{
    /// Removes and returns an arbitrary element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.membership.pop()
    }

    /// Materializes the current membership as a vector.
    ///
    /// Order is unspecified.
    pub fn to_vec(&self) -> Vec<T> {
        self.membership.snapshot()
    }

    /// Returns the union of two sets.
    ///
    /// The union contains all elements that are in either set. The result
    /// is freshly allocated and shares no storage with the inputs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::LocalSet;
    ///
    /// let set_a: LocalSet<i32> = [1, 2, 3].into();
    /// let set_b: LocalSet<i32> = [2, 3, 4].into();
    ///
    /// let union = set_a.union(&set_b);
    /// assert_eq!(union.len(), 4);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut membership = Membership::with_capacity(self.len().max(other.len()));
        membership.extend(self.membership.elements().cloned());
        membership.extend(other.membership.elements().cloned());
        Self { membership }
    }

    /// Returns the intersection of two sets.
    ///
    /// The intersection contains only elements that are in both sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::LocalSet;
    ///
    /// let set_a: LocalSet<i32> = [1, 2, 3].into();
    /// let set_b: LocalSet<i32> = [2, 3, 4].into();
    ///
    /// let intersection = set_a.intersection(&set_b);
    /// assert_eq!(intersection.len(), 2);
    /// assert!(intersection.contains(&2));
    /// assert!(intersection.contains(&3));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        // Iterate over the smaller set for better performance
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut membership = Membership::new();
        for element in smaller.membership.elements() {
            if larger.membership.contains(element) {
                membership.insert(element.clone());
            }
        }
        Self { membership }
    }

    /// Returns the difference of two sets.
    ///
    /// The difference contains elements that are in `self` but not in
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::LocalSet;
    ///
    /// let set_a: LocalSet<i32> = [1, 2, 3].into();
    /// let set_b: LocalSet<i32> = [2, 3, 4].into();
    ///
    /// let difference = set_a.difference(&set_b);
    /// assert_eq!(difference.len(), 1);
    /// assert!(difference.contains(&1));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut membership = Membership::new();
        for element in self.membership.elements() {
            if !other.membership.contains(element) {
                membership.insert(element.clone());
            }
        }
        Self { membership }
    }

    /// Returns the symmetric difference of two sets.
    ///
    /// The symmetric difference contains elements that are in either set
    /// but not in both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::LocalSet;
    ///
    /// let set_a: LocalSet<i32> = [1, 2, 3].into();
    /// let set_b: LocalSet<i32> = [2, 3, 4].into();
    ///
    /// let symmetric = set_a.symmetric_difference(&set_b);
    /// assert_eq!(symmetric.len(), 2);
    /// assert!(symmetric.contains(&1));
    /// assert!(symmetric.contains(&4));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut membership = Membership::new();
        for element in self.membership.elements() {
            if !other.membership.contains(element) {
                membership.insert(element.clone());
            }
        }
        for element in other.membership.elements() {
            if !self.membership.contains(element) {
                membership.insert(element.clone());
            }
        }
        Self { membership }
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::LocalSet;
    ///
    /// let subset: LocalSet<i32> = [1, 2].into();
    /// let superset: LocalSet<i32> = [1, 2, 3].into();
    ///
    /// assert!(subset.is_subset(&superset));
    /// assert!(!superset.is_subset(&subset));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.membership
            .elements()
            .all(|element| other.membership.contains(element))
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` is a subset of `other` and strictly smaller.
    #[must_use]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Returns `true` if `self` is a superset of `other` and strictly larger.
    #[must_use]
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_proper_subset(self)
    }

    /// Returns `true` if the two sets share at least one element.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        // Iterate over the smaller set for better performance
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        smaller
            .membership
            .elements()
            .any(|element| larger.membership.contains(element))
    }

    /// Returns `true` if the two sets share no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::LocalSet;
    ///
    /// let set_a: LocalSet<i32> = [1, 2].into();
    /// let set_b: LocalSet<i32> = [3, 4].into();
    /// let set_c: LocalSet<i32> = [2, 3].into();
    ///
    /// assert!(set_a.is_disjoint(&set_b));
    /// assert!(!set_a.is_disjoint(&set_c));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.intersects(other)
    }
}

#[cfg(feature = "serde")]
impl<T> LocalSet<T> {
    pub(crate) fn from_membership(membership: Membership<T>) -> Self {
        Self { membership }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`LocalSet`].
pub struct LocalSetIterator<'a, T> {
    inner: std::collections::hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for LocalSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for LocalSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LocalSet<T>
where
    T: Hash + Eq,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LocalSet<T>
where
    T: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            membership: iter.into_iter().collect(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for LocalSet<T>
where
    T: Hash + Eq,
{
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> Extend<T> for LocalSet<T>
where
    T: Hash + Eq,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.membership.extend(iter);
    }
}

impl<T> IntoIterator for LocalSet<T>
where
    T: Hash + Eq,
{
    type Item = T;
    type IntoIter = std::iter::Map<std::collections::hash_map::IntoIter<T, ()>, fn((T, ())) -> T>;

    fn into_iter(self) -> Self::IntoIter {
        self.membership.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a LocalSet<T>
where
    T: Hash + Eq,
{
    type Item = &'a T;
    type IntoIter = LocalSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> PartialEq for LocalSet<T>
where
    T: Hash + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.membership
            .elements()
            .all(|element| other.membership.contains(element))
    }
}

impl<T> Eq for LocalSet<T> where T: Hash + Eq {}

impl<T> fmt::Debug for LocalSet<T>
where
    T: Hash + Eq + fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for LocalSet<T>
where
    T: Hash + Eq + fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self.iter() {
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

impl<T> Set<T> for LocalSet<T>
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
        self.clone()
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
// Tests
// =============================================================================
