//! Integration tests for the sequence call shapes

use watershed::partition::{partition_elements, partition_into, partition_with};
use watershed::predicate::{between, even, ge, lt, odd, Predicate, PredicateExt};

#[test]
fn single_predicate_splits_into_match_and_remainder() {
    let groups = partition_elements(&[1, 2, 3, 4, 5], &[even()]);
    assert_eq!(groups, vec![vec![2, 4], vec![1, 3, 5]]);
}

#[test]
fn total_coverage_has_no_remainder() {
    let parity: Vec<Box<dyn Predicate<i32>>> = vec![even().boxed(), odd().boxed()];
    let groups = partition_elements(&[1, 2, 3, 4, 5], &parity);
    assert_eq!(groups, vec![vec![2, 4], vec![1, 3, 5]]);
}

#[test]
fn first_match_claims_overlapping_elements() {
    // Everything below 10 is also below 100; position decides.
    let groups = partition_elements(&[3, 250, 42, 7], &[lt(10), lt(100)]);
    assert_eq!(groups, vec![vec![3, 7], vec![42], vec![250]]);
}

#[test]
fn ranges_bucket_in_order() {
    let readings = [12, -4, 87, 40, 251, 0];
    let groups = partition_elements(&readings, &[lt(0).boxed(), between(0, 99).boxed()]);
    assert_eq!(groups, vec![vec![-4], vec![12, 87, 40, 0], vec![251]]);
}

#[test]
fn empty_source_keeps_predicate_groups() {
    let groups = partition_elements(&[] as &[i32], &[even(), even()]);
    assert_eq!(groups, vec![Vec::<i32>::new(), Vec::<i32>::new()]);
}

#[test]
fn zero_predicates() {
    let none: [fn(&i32) -> bool; 0] = [];
    assert_eq!(
        partition_elements(&[1, 2, 3], &none),
        vec![vec![1, 2, 3]]
    );
    assert!(partition_elements(&[] as &[i32], &none).is_empty());
}

#[test]
fn partition_into_moves_without_cloning() {
    let lines = vec![
        String::from("error: disk full"),
        String::from("ready"),
        String::from("warn: slow disk"),
        String::from("error: timeout"),
    ];
    let groups = partition_into(
        lines,
        &[
            (|l: &String| l.starts_with("error")).boxed(),
            (|l: &String| l.starts_with("warn")).boxed(),
        ],
    );
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0], ["error: disk full", "error: timeout"]);
    assert_eq!(groups[1], ["warn: slow disk"]);
    assert_eq!(groups[2], ["ready"]);
}

#[test]
fn partition_with_custom_group_container() {
    use std::collections::BTreeMap;

    let scores = [("ada", 92), ("bob", 51), ("cyd", 74), ("dee", 68)];
    let groups: Vec<BTreeMap<&str, i32>> =
        partition_with(scores, &[ge(90), ge(70)], |(_, score)| score);

    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0], BTreeMap::from([("ada", 92)]));
    assert_eq!(groups[1], BTreeMap::from([("cyd", 74)]));
    assert_eq!(groups[2], BTreeMap::from([("bob", 51), ("dee", 68)]));
}

#[test]
fn duplicate_elements_stay_distinct() {
    let groups = partition_elements(&[2, 2, 3, 2], &[even()]);
    assert_eq!(groups, vec![vec![2, 2, 2], vec![3]]);
}
