//! Unit tests for `SyncSet` behavior through a single caller.
//!
//! Concurrency is exercised separately in `concurrent_tests.rs`; these
//! tests pin down the operation contracts themselves.

use syncset::{Set, SyncSet};

use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_set() {
    let set: SyncSet<i32> = SyncSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}

#[rstest]
fn test_default_creates_empty_set() {
    let set: SyncSet<i32> = SyncSet::default();
    assert!(set.is_empty());
}

#[rstest]
fn test_from_iterator_deduplicates() {
    let set: SyncSet<i32> = [1, 1, 2, 2, 3].into_iter().collect();
    assert_eq!(set.len(), 3);
}

#[rstest]
fn test_from_array_seeds_membership() {
    let set: SyncSet<&str> = ["red", "green", "blue"].into();
    assert_eq!(set.len(), 3);
    assert!(set.contains(&"red"));
}

#[rstest]
fn test_with_capacity_starts_empty() {
    let set: SyncSet<i32> = SyncSet::with_capacity(64);
    assert!(set.is_empty());
}

// =============================================================================
// Single-set operations
// =============================================================================

#[rstest]
fn test_insert_is_idempotent() {
    let set = SyncSet::new();
    assert!(set.insert(7));
    assert!(!set.insert(7));
    assert_eq!(set.len(), 1);
}

#[rstest]
fn test_insert_all_reports_any_novelty() {
    let set: SyncSet<i32> = [1].into();
    assert!(set.insert_all([1, 2]));
    assert!(!set.insert_all([1, 2]));
    assert!(!set.insert_all(std::iter::empty()));
}

#[rstest]
fn test_remove_absent_element_is_noop() {
    let set: SyncSet<i32> = [1].into();
    assert!(!set.remove(&2));
    assert_eq!(set.len(), 1);
}

#[rstest]
fn test_borrowed_lookups() {
    let set: SyncSet<String> = ["mercury".to_string(), "venus".to_string()].into();
    assert!(set.contains("mercury"));
    assert!(set.remove("venus"));
    assert!(!set.contains("venus"));
}

#[rstest]
fn test_contains_all_and_any() {
    let set: SyncSet<i32> = [1, 2, 3].into();
    let empty: [&i32; 0] = [];

    assert!(set.contains_all(empty)); // vacuously true
    assert!(set.contains_all([&1, &2]));
    assert!(!set.contains_all([&1, &4]));
    assert!(set.contains_any([&4, &3]));
    assert!(!set.contains_any([&4, &5]));
}

#[rstest]
fn test_clear_then_reuse() {
    let set: SyncSet<i32> = [1, 2, 3].into();
    set.clear();
    assert!(set.is_empty());
    assert!(set.insert(9));
    assert_eq!(set.to_vec(), vec![9]);
}

#[rstest]
fn test_pop_until_empty() {
    let set: SyncSet<i32> = [1, 2].into();
    let first = set.pop().unwrap();
    let second = set.pop().unwrap();
    assert_ne!(first, second);
    assert_eq!(set.pop(), None);
}

#[rstest]
fn test_each_early_stop_is_not_an_error() {
    let set: SyncSet<i32> = (0..100).collect();
    let mut visited = 0;
    set.each(|_| {
        visited += 1;
        visited == 3
    });
    assert_eq!(visited, 3);
    assert_eq!(set.len(), 100); // untouched
}

#[rstest]
fn test_iter_yields_snapshot() {
    let set: SyncSet<i32> = [1, 2, 3].into();
    let iter = set.iter();
    set.insert(4); // the running iterator does not see later inserts
    let mut elements: Vec<i32> = iter.collect();
    elements.sort_unstable();
    assert_eq!(elements, vec![1, 2, 3]);
}

#[rstest]
fn test_into_iterator_for_borrowed_set() {
    let set: SyncSet<i32> = [1, 2, 3].into();
    let sum: i32 = (&set).into_iter().sum();
    assert_eq!(sum, 6);
}

#[rstest]
fn test_stream_drains_every_element() {
    let set: SyncSet<i32> = (0..50).collect();
    let mut drained: Vec<i32> = set.stream(5).collect();
    drained.sort_unstable();
    assert_eq!(drained, (0..50).collect::<Vec<_>>());
}

// =============================================================================
// Handle vs snapshot semantics
// =============================================================================

#[rstest]
fn test_cloned_handle_observes_mutations() {
    let set = SyncSet::new();
    let handle = set.clone();
    set.insert("shared");
    assert!(handle.contains(&"shared"));
}

#[rstest]
fn test_snapshot_does_not_observe_mutations() {
    let set: SyncSet<&str> = ["original"].into();
    let copy = set.snapshot();
    set.insert("later");
    assert_eq!(copy.len(), 1);
    assert!(!copy.contains(&"later"));
}

// =============================================================================
// Algebra
// =============================================================================

#[rstest]
fn test_worked_example_from_small_sets() {
    let set_a: SyncSet<i32> = [1, 2, 3].into();
    let set_b: SyncSet<i32> = [2, 3, 4].into();

    assert_eq!(set_a.union(&set_b), [1, 2, 3, 4].into());
    assert_eq!(set_a.intersection(&set_b), [2, 3].into());
    assert_eq!(set_a.difference(&set_b), [1].into());
    assert_eq!(set_b.difference(&set_a), [4].into());
    assert_eq!(set_a.symmetric_difference(&set_b), [1, 4].into());
    assert!(!set_a.is_subset(&set_b));
    assert!(!set_a.is_superset(&set_b));
    assert_ne!(set_a, set_b);
}

#[rstest]
fn test_union_with_empty_is_identity() {
    let set: SyncSet<i32> = [1, 2].into();
    let empty: SyncSet<i32> = SyncSet::new();
    assert_eq!(set.union(&empty), set);
    assert_eq!(empty.union(&set), set);
}

#[rstest]
fn test_subset_family() {
    let narrow: SyncSet<i32> = [1, 2].into();
    let wide: SyncSet<i32> = [1, 2, 3].into();
    let equal: SyncSet<i32> = [1, 2].into();

    assert!(narrow.is_subset(&wide));
    assert!(narrow.is_proper_subset(&wide));
    assert!(narrow.is_subset(&equal));
    assert!(!narrow.is_proper_subset(&equal));
    assert!(wide.is_superset(&narrow));
    assert!(wide.is_proper_superset(&narrow));
    assert!(!equal.is_proper_superset(&narrow));
}

#[rstest]
fn test_intersects_and_disjoint() {
    let set_a: SyncSet<i32> = [1, 2].into();
    let set_b: SyncSet<i32> = [2, 3].into();
    let set_c: SyncSet<i32> = [4].into();

    assert!(set_a.intersects(&set_b));
    assert!(set_a.is_disjoint(&set_c));
    assert!(!set_a.is_disjoint(&set_b));
}

#[rstest]
fn test_equality_ignores_handle_identity() {
    let set_a: SyncSet<i32> = [1, 2].into();
    let set_b: SyncSet<i32> = [2, 1].into();
    assert_eq!(set_a, set_b);

    set_b.insert(3);
    assert_ne!(set_a, set_b);
}

// =============================================================================
// Trait-generic callers
// =============================================================================

fn overlap<T, S>(left: &S, right: &S) -> usize
where
    T: std::hash::Hash + Eq + Clone,
    S: Set<T>,
{
    left.intersection(right).len()
}

#[rstest]
fn test_generic_algorithm_over_the_capability_trait() {
    let set_a: SyncSet<i32> = [1, 2, 3].into();
    let set_b: SyncSet<i32> = [3, 4].into();
    assert_eq!(overlap(&set_a, &set_b), 1);
}

#[rstest]
fn test_trait_mutators_through_mut_reference() {
    let mut set: SyncSet<i32> = SyncSet::new();
    assert!(Set::insert(&mut set, 1));
    assert!(Set::insert_all(&mut set, [2, 3]));
    assert!(Set::remove(&mut set, &1));
    assert_eq!(Set::len(&set), 2);
}
