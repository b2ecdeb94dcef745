//! Property-based tests for the set algebra.
//!
//! Results are checked against `std::collections::HashSet` as an oracle.

use std::collections::HashSet;

use coppice::{AnySet, ArraySet, Set, SetKind};
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = SetKind> {
    prop::sample::select(SetKind::ALL.to_vec())
}

fn elements() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..40)
}

fn oracle(set: &AnySet<u8>) -> HashSet<u8> {
    set.iter().copied().collect()
}

// =============================================================================
// Duplicate suppression
// Description: A set holds each distinct element exactly once
// =============================================================================

proptest! {
    #[test]
    fn prop_count_is_distinct_count(kind in kind(), elements in elements()) {
        let set = kind.build_from(elements.clone());
        let distinct: HashSet<u8> = elements.into_iter().collect();

        prop_assert_eq!(set.count(), distinct.len());
        prop_assert_eq!(set.iter().count(), set.count());
        prop_assert_eq!(oracle(&set), distinct);
    }
}

// =============================================================================
// Union, intersection and difference
// Description: Each operation agrees with the oracle
// =============================================================================

proptest! {
    #[test]
    fn prop_union_matches_oracle(
        first_kind in kind(),
        second_kind in kind(),
        first in elements(),
        second in elements()
    ) {
        let a = first_kind.build_from(first);
        let b = second_kind.build_from(second);
        let union = a.union(&b);

        let expected: HashSet<u8> = oracle(&a).union(&oracle(&b)).copied().collect();
        prop_assert_eq!(union.count(), expected.len());
        prop_assert_eq!(oracle(&union), expected);
    }

    #[test]
    fn prop_intersection_matches_oracle(
        first_kind in kind(),
        second_kind in kind(),
        first in elements(),
        second in elements()
    ) {
        let a = first_kind.build_from(first);
        let b = second_kind.build_from(second);

        let expected: HashSet<u8> = oracle(&a).intersection(&oracle(&b)).copied().collect();
        prop_assert_eq!(oracle(&a.intersection(&b)), expected);
    }

    #[test]
    fn prop_difference_matches_oracle(
        first_kind in kind(),
        second_kind in kind(),
        first in elements(),
        second in elements()
    ) {
        let a = first_kind.build_from(first);
        let b = second_kind.build_from(second);

        let expected: HashSet<u8> = oracle(&a).difference(&oracle(&b)).copied().collect();
        prop_assert_eq!(oracle(&a.difference(&b)), expected);
    }
}

// =============================================================================
// Symmetric difference
// Description: A △ B = (A − B) ∪ (B − A)
// =============================================================================

proptest! {
    #[test]
    fn prop_symmetric_difference_law(kind in kind(), first in elements(), second in elements()) {
        let a = kind.build_from(first);
        let b = kind.build_from(second);

        let symmetric = a.symmetric_difference(&b);
        prop_assert_eq!(&symmetric, &a.difference(&b).union(&b.difference(&a)));

        let expected: HashSet<u8> =
            oracle(&a).symmetric_difference(&oracle(&b)).copied().collect();
        prop_assert_eq!(oracle(&symmetric), expected);
    }
}

// =============================================================================
// Clone
// Description: A clone is equal to the original and independent of it
// =============================================================================

proptest! {
    #[test]
    fn prop_clone_is_independent(kind in kind(), elements in prop::collection::vec(any::<u8>(), 1..40)) {
        let set = kind.build_from(elements);
        let mut copy = set.clone();
        prop_assert_eq!(&copy, &set);

        let removed = *set.iter().next().unwrap();
        copy.remove(&removed);
        prop_assert!(set.contains(&removed));
        prop_assert_ne!(&copy, &set);
    }
}

// =============================================================================
// Removal
// Description: A removed element is never contained afterwards
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_contains_law(kind in kind(), elements in elements(), removed: u8) {
        let mut set = kind.build_from(elements);
        let before = set.count();
        let was_present = set.contains(&removed);

        prop_assert_eq!(set.remove(&removed), was_present);
        prop_assert!(!set.contains(&removed));
        prop_assert_eq!(set.count(), before - usize::from(was_present));
    }
}

// =============================================================================
// Growth
// Description: An array set only grows once full, by exactly one increment
// =============================================================================

proptest! {
    #[test]
    fn prop_growth_by_increment(capacity in 1usize..64, increment in 1usize..64) {
        let mut set = ArraySet::with_capacity_and_increment(capacity, increment).unwrap();

        for i in 0..capacity {
            set.add(i);
        }
        prop_assert_eq!(set.capacity(), capacity);

        set.add(capacity);
        prop_assert_eq!(set.capacity(), capacity + increment);
    }

    #[test]
    fn prop_strip_fits_capacity(elements in prop::collection::vec(any::<u8>(), 1..40)) {
        let mut set: ArraySet<u8> = elements.into_iter().collect();
        set.strip().unwrap();

        prop_assert_eq!(set.capacity(), set.count());
        prop_assert_eq!(set.to_array().len(), set.count());
    }
}
