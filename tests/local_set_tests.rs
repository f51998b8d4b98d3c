//! Unit tests for `LocalSet`, the unsynchronized flavor.

use syncset::{LocalSet, Set};

use rstest::rstest;

// =============================================================================
// Construction and basic operations
// =============================================================================

#[rstest]
fn test_new_creates_empty_set() {
    let set: LocalSet<i32> = LocalSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}

#[rstest]
fn test_from_iterator_deduplicates() {
    let set: LocalSet<i32> = [5, 5, 5, 6].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[rstest]
fn test_insert_remove_roundtrip() {
    let mut set = LocalSet::new();
    assert!(set.insert("a"));
    assert!(!set.insert("a"));
    assert!(set.remove(&"a"));
    assert!(!set.remove(&"a"));
    assert!(set.is_empty());
}

#[rstest]
fn test_extend_merges_elements() {
    let mut set: LocalSet<i32> = [1].into();
    set.extend([2, 3, 3]);
    assert_eq!(set.len(), 3);
}

#[rstest]
fn test_into_iterator_consumes_the_set() {
    let set: LocalSet<i32> = [1, 2, 3].into();
    let mut elements: Vec<i32> = set.into_iter().collect();
    elements.sort_unstable();
    assert_eq!(elements, vec![1, 2, 3]);
}

#[rstest]
fn test_borrowed_iteration() {
    let set: LocalSet<i32> = [1, 2, 3].into();
    let sum: i32 = (&set).into_iter().sum();
    assert_eq!(sum, 6);
    assert_eq!(set.len(), 3); // still usable
}

// =============================================================================
// Algebra parity with SyncSet
// =============================================================================

#[rstest]
fn test_worked_example_from_small_sets() {
    let set_a: LocalSet<i32> = [1, 2, 3].into();
    let set_b: LocalSet<i32> = [2, 3, 4].into();

    assert_eq!(set_a.union(&set_b), [1, 2, 3, 4].into());
    assert_eq!(set_a.intersection(&set_b), [2, 3].into());
    assert_eq!(set_a.difference(&set_b), [1].into());
    assert_eq!(set_a.symmetric_difference(&set_b), [1, 4].into());
    assert!(!set_a.is_subset(&set_b));
    assert_ne!(set_a, set_b);
}

#[rstest]
fn test_binary_operations_against_self() {
    let set: LocalSet<i32> = [1, 2].into();

    assert_eq!(set.union(&set), set);
    assert_eq!(set.intersection(&set), set);
    assert!(set.difference(&set).is_empty());
    assert!(set.symmetric_difference(&set).is_empty());
    assert!(set.is_subset(&set));
    assert!(!set.is_proper_subset(&set));
}

#[rstest]
fn test_results_never_alias_inputs() {
    let set_a: LocalSet<i32> = [1].into();
    let set_b: LocalSet<i32> = [2].into();
    let mut union = set_a.union(&set_b);

    union.insert(3);
    assert_eq!(set_a.len(), 1);
    assert_eq!(set_b.len(), 1);
    assert_eq!(union.len(), 3);
}

// =============================================================================
// Interchangeability through the trait
// =============================================================================

fn dedup_count<T, S>(set: &mut S, elements: Vec<T>) -> usize
where
    T: std::hash::Hash + Eq + Clone,
    S: Set<T>,
{
    set.insert_all(elements);
    set.len()
}

#[rstest]
fn test_local_set_through_the_capability_trait() {
    let mut set: LocalSet<i32> = LocalSet::new();
    assert_eq!(dedup_count(&mut set, vec![1, 1, 2, 2, 3]), 3);
}

#[rstest]
fn test_snapshot_through_the_trait_is_deep() {
    let mut set: LocalSet<i32> = [1].into();
    let copy = Set::snapshot(&set);
    set.insert(2);
    assert_eq!(copy.len(), 1);
    assert_eq!(set.len(), 2);
}
