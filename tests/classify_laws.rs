#![cfg(feature = "classify")]
//! Property-based tests for classification laws.

use proptest::prelude::*;
use seqalg::classify::{count_by, group_by};

// =============================================================================
// Partition Law
// Description: concatenating the groups gives back every element exactly once
// =============================================================================

proptest! {
    #[test]
    fn prop_partition_law(elements in prop::collection::vec(-50_i32..50, 0..80)) {
        let groups = group_by(elements.clone(), |value: &i32| value.rem_euclid(7));
        let total: usize = groups.values().map(Vec::len).sum();
        prop_assert_eq!(total, elements.len());

        for (key, members) in &groups {
            prop_assert!(members.iter().all(|member| member.rem_euclid(7) == *key));
            let expected: Vec<i32> = elements
                .iter()
                .copied()
                .filter(|element| element.rem_euclid(7) == *key)
                .collect();
            prop_assert_eq!(members, &expected);
        }
    }
}

// =============================================================================
// Key Order Law
// Description: keys iterate in the order they were first produced
// =============================================================================

proptest! {
    #[test]
    fn prop_first_seen_key_order_law(elements in prop::collection::vec(0_u8..10, 0..80)) {
        let groups = group_by(elements.clone(), |value: &u8| value % 4);
        let mut expected: Vec<u8> = Vec::new();
        for element in &elements {
            if !expected.contains(&(element % 4)) {
                expected.push(element % 4);
            }
        }
        prop_assert_eq!(groups.keys().copied().collect::<Vec<_>>(), expected);
    }
}

// =============================================================================
// Count Law
// Description: count_by equals the group sizes of group_by
// =============================================================================

proptest! {
    #[test]
    fn prop_count_matches_group_size_law(elements in prop::collection::vec(any::<i16>(), 0..80)) {
        let groups = group_by(elements.clone(), |value: &i16| value % 5);
        let counts = count_by(elements, |value: &i16| value % 5);
        let sizes = groups.map_values(|members| members.len());
        prop_assert_eq!(counts, sizes);
    }
}
