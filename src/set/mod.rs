//! Set implementations and the shared [`Set`] capability trait.
//!
//! Two interchangeable flavors are provided:
//!
//! - [`SyncSet`]: one reader/writer lock around the membership storage;
//!   safe for arbitrary concurrent callers; handles have reference
//!   semantics (cloning a handle shares the underlying set).
//! - [`LocalSet`]: the same operations without synchronization, for
//!   single-owner use.
//!
//! # Examples
//!
//! ## Writing against the capability trait
//!
//! ```rust
//! use syncset::{LocalSet, Set, SyncSet};
//!
//! fn survivors<T, S>(population: &S, casualties: &S) -> S
//! where
//!     T: std::hash::Hash + Eq + Clone,
//!     S: Set<T>,
//! {
//!     population.difference(casualties)
//! }
//!
//! let population: LocalSet<i32> = [1, 2, 3, 4].into();
//! let casualties: LocalSet<i32> = [2, 4].into();
//! assert_eq!(survivors(&population, &casualties).len(), 2);
//!
//! let population: SyncSet<i32> = [1, 2, 3, 4].into();
//! let casualties: SyncSet<i32> = [2, 4].into();
//! assert_eq!(survivors(&population, &casualties).len(), 2);
//! ```
//!
//! ## Shared handles
//!
//! ```rust
//! use syncset::SyncSet;
//!
//! let set = SyncSet::new();
//! let handle = set.clone(); // same underlying set, not a copy
//! handle.insert("shared");
//! assert!(set.contains(&"shared"));
//!
//! let copy = set.snapshot(); // independent deep copy
//! copy.insert("private");
//! assert!(!set.contains(&"private"));
//! ```

use std::hash::Hash;

mod local;
mod membership;
mod stream;
mod sync;

#[cfg(feature = "serde")]
mod serde;

pub use local::{LocalSet, LocalSetIterator};
pub use stream::{ElementStream, SetIter};
pub use sync::SyncSet;

/// The capability shared by every set flavor.
///
/// Mutation goes through `&mut self` here so that the unsynchronized
/// [`LocalSet`] can implement the trait without interior mutability.
/// [`SyncSet`] additionally offers the same mutators on `&self` (through
/// its internal lock) for concurrent use; its trait impl simply delegates.
///
/// Binary operations take the other operand of the same concrete type and
/// always allocate a fresh result that aliases neither input.
pub trait Set<T>: Sized
where
    T: Hash + Eq + Clone,
{
    /// Inserts an element. Returns `true` if it was not already present.
    ///
    /// Idempotent: inserting a present element is a no-op, not an error.
    fn insert(&mut self, element: T) -> bool;

    /// Inserts every element of `elements`.
    ///
    /// Returns `true` if at least one element was newly inserted.
    fn insert_all<I: IntoIterator<Item = T>>(&mut self, elements: I) -> bool;

    /// Removes an element if present. Returns `true` if it was present.
    fn remove(&mut self, element: &T) -> bool;

    /// Removes and returns an arbitrary element, or `None` if empty.
    fn pop(&mut self) -> Option<T>;

    /// Removes all elements. The set stays usable afterward.
    fn clear(&mut self);

    /// Returns `true` if the element is present.
    fn contains(&self, element: &T) -> bool;

    /// Returns `true` if every given element is present.
    ///
    /// Vacuously `true` for empty input.
    fn contains_all<'a, I>(&self, elements: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>;

    /// Returns `true` if at least one given element is present.
    fn contains_any<'a, I>(&self, elements: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>;

    /// Returns the cardinality of the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materializes the current membership as a vector in arbitrary order.
    fn to_vec(&self) -> Vec<T>;

    /// Visits every element, stopping early when the visitor returns `true`.
    fn each<F: FnMut(&T) -> bool>(&self, visitor: F);

    /// Returns a deep copy with independent storage.
    fn snapshot(&self) -> Self;

    /// Returns a new set holding the elements present in either operand.
    fn union(&self, other: &Self) -> Self;

    /// Returns a new set holding the elements present in both operands.
    fn intersection(&self, other: &Self) -> Self;

    /// Returns a new set holding the elements of `self` absent from `other`.
    fn difference(&self, other: &Self) -> Self;

    /// Returns a new set holding the elements present in exactly one operand.
    fn symmetric_difference(&self, other: &Self) -> Self;

    /// Returns `true` if every element of `self` is in `other`.
    fn is_subset(&self, other: &Self) -> bool;

    /// Returns `true` if every element of `other` is in `self`.
    fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` is a subset of `other` and strictly smaller.
    fn is_proper_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Returns `true` if `self` is a superset of `other` and strictly larger.
    fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_proper_subset(self)
    }

    /// Returns `true` if the two sets share at least one element.
    fn intersects(&self, other: &Self) -> bool;

    /// Returns `true` if the two sets share no elements.
    fn is_disjoint(&self, other: &Self) -> bool {
        !self.intersects(other)
    }
}
