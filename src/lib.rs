//! # syncset
//!
//! A generic, thread-safe set library for Rust.
//!
//! ## Overview
//!
//! This library provides an unordered collection of unique elements with the
//! full algebra of sets (union, intersection, difference, symmetric
//! difference, subset/superset tests) in two interchangeable flavors:
//!
//! - [`SyncSet`]: safe for arbitrary concurrent callers with no external
//!   locking. Handles have reference semantics, so cloned handles observe
//!   the same underlying set. This is the default choice.
//! - [`LocalSet`]: the same operations without synchronization, for
//!   single-owner use where the lock would be pure overhead.
//!
//! Both implement the [`Set`] capability trait, so algorithms can be written
//! once against the trait and run with either flavor.
//!
//! ## Feature Flags
//!
//! - `serde`: serialize/deserialize sets as plain element sequences
//! - `rayon`: parallel iteration over a consistent snapshot
//!
//! ## Example
//!
//! ```rust
//! use syncset::prelude::*;
//!
//! let required: SyncSet<&str> = ["biology", "chemistry"].into();
//! let enrolled: SyncSet<&str> = ["biology", "physics", "art"].into();
//!
//! let missing = required.difference(&enrolled);
//! assert!(missing.contains(&"chemistry"));
//! assert_eq!(missing.len(), 1);
//! ```
//!
//! ## Concurrency
//!
//! Every public operation on a [`SyncSet`] is atomic with respect to itself:
//! reads observe a consistent snapshot taken under a shared reader/writer
//! lock, and writes are exclusive. Composite invariants across several calls
//! ("insert then check the count atomically") require external
//! synchronization by the caller.
//!
//! ```rust
//! use std::thread;
//! use syncset::SyncSet;
//!
//! let set = SyncSet::new();
//! thread::scope(|scope| {
//!     for index in 0..8 {
//!         let handle = set.clone();
//!         scope.spawn(move || {
//!             handle.insert(index);
//!         });
//!     }
//! });
//! assert_eq!(set.len(), 8);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use syncset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::{ElementStream, LocalSet, Set, SetIter, SyncSet};
}

pub mod set;

pub use set::{ElementStream, LocalSet, Set, SetIter, SyncSet};
