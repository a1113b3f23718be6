//! Fruit Baskets Example
//!
//! This example walks through the three partition call shapes with one
//! small fruit bowl: by value, by key, and by element.
//!
//! Run with: cargo run --example fruit_baskets

use watershed::predicate::{even, odd, Predicate, PredicateExt};
use watershed::{partition_by_key, partition_by_value, partition_elements, IndexMap};

fn main() {
    println!("=== Fruit Baskets Example ===\n");

    by_value();
    by_key();
    by_element();
}

fn bowl() -> IndexMap<&'static str, i32> {
    IndexMap::from([
        ("apple", 1),
        ("banana", 2),
        ("orange", 3),
        ("grape", 4),
        ("watermelon", 5),
    ])
}

/// Partition entries by their value: even counts, then odd counts.
fn by_value() {
    println!("--- By Value ---\n");

    let parity: Vec<Box<dyn Predicate<i32>>> = vec![even().boxed(), odd().boxed()];
    let groups = partition_by_value(&bowl(), &parity);

    // Odd catches everything even missed, so exactly two groups come back.
    println!("even counts: {:?}", groups[0]);
    println!("odd counts:  {:?}", groups[1]);
    println!();
}

/// Partition entries by their key, with only one predicate supplied.
fn by_key() {
    println!("--- By Key ---\n");

    let by_number: IndexMap<i32, &str> = IndexMap::from([
        (1, "apple"),
        (2, "banana"),
        (3, "orange"),
        (4, "grape"),
        (5, "watermelon"),
    ]);

    let groups = partition_by_key(&by_number, &[even()]);

    // The odd keys matched nothing, so an implicit remainder group appears.
    println!("even keys: {:?}", groups[0]);
    println!("remainder: {:?}", groups[1]);
    println!();
}

/// Partition a plain sequence.
fn by_element() {
    println!("--- By Element ---\n");

    let groups = partition_elements(&[1, 2, 3, 4, 5], &[even()]);

    println!("evens:     {:?}", groups[0]);
    println!("remainder: {:?}", groups[1]);
    println!();
}
