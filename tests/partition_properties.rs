//! Property-based tests for the partition laws

use proptest::prelude::*;

use watershed::predicate::{divisible_by, first_match, DivisibleBy};
use watershed::testing::{assert_covers, assert_remainder_rule};
use watershed::{partition_by_value, partition_elements, IndexMap};

fn divisor_stack() -> impl Strategy<Value = Vec<DivisibleBy<i64>>> {
    // Small divisors overlap often, which exercises first-match priority.
    prop::collection::vec((2i64..8).prop_map(divisible_by), 0..5)
}

fn int_source() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1000i64..1000, 0..64)
}

proptest! {
    #[test]
    fn prop_partition_is_exhaustive_exclusive_and_ordered(
        source in int_source(),
        predicates in divisor_stack(),
    ) {
        let groups = partition_elements(&source, &predicates);
        assert_covers(&source, &groups);
        assert_remainder_rule(&groups, predicates.len());
    }

    #[test]
    fn prop_every_item_sits_in_its_first_match_group(
        source in int_source(),
        predicates in divisor_stack(),
    ) {
        let groups = partition_elements(&source, &predicates);
        for (index, group) in groups.iter().enumerate() {
            let expected = if index < predicates.len() {
                Some(index)
            } else {
                None
            };
            for item in group {
                prop_assert_eq!(first_match(&predicates, item), expected);
            }
        }
    }

    #[test]
    fn prop_remainder_present_iff_something_matched_nothing(
        source in int_source(),
        predicates in divisor_stack(),
    ) {
        let groups = partition_elements(&source, &predicates);
        let all_matched = source
            .iter()
            .all(|item| first_match(&predicates, item).is_some());
        let expected = predicates.len() + usize::from(!all_matched);
        prop_assert_eq!(groups.len(), expected);
        if !all_matched {
            prop_assert!(!groups[predicates.len()].is_empty());
        }
    }

    #[test]
    fn prop_zero_predicates_is_all_remainder(source in int_source()) {
        let none: [DivisibleBy<i64>; 0] = [];
        let groups = partition_elements(&source, &none);
        if source.is_empty() {
            prop_assert!(groups.is_empty());
        } else {
            prop_assert_eq!(groups, vec![source]);
        }
    }

    #[test]
    fn prop_keyed_and_sequence_shapes_agree(
        source in int_source(),
        predicates in divisor_stack(),
    ) {
        let keyed: IndexMap<usize, i64> = source.iter().copied().enumerate().collect();

        let value_groups = partition_by_value(&keyed, &predicates);
        let element_groups = partition_elements(&source, &predicates);

        prop_assert_eq!(value_groups.len(), element_groups.len());
        for (map_group, vec_group) in value_groups.iter().zip(&element_groups) {
            let values: Vec<i64> = map_group.values().copied().collect();
            prop_assert_eq!(&values, vec_group);
        }
    }

    #[test]
    fn prop_single_total_predicate_consumes_everything(source in int_source()) {
        let catch_all = [divisible_by(1)];
        let groups = partition_elements(&source, &catch_all);
        prop_assert_eq!(groups.len(), 1);
        prop_assert_eq!(&groups[0], &source);
    }
}
