//! Tracing Demo
//!
//! Shows the trace event the core routine emits after each partition
//! pass when the `tracing` feature is enabled.
//!
//! Run with: cargo run --example tracing_demo --features tracing

use tracing::Level;
use watershed::partition_elements;
use watershed::predicate::{divisible_by, even, Predicate, PredicateExt};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .init();

    println!("=== Tracing Demo ===\n");

    let numbers: Vec<i64> = (1..=20).collect();

    let classes: Vec<Box<dyn Predicate<i64>>> = vec![divisible_by(4).boxed(), even().boxed()];
    let groups = partition_elements(&numbers, &classes);
    println!("by four: {:?}", groups[0]);
    println!("even:    {:?}", groups[1]);
    println!("odd:     {:?}", groups[2]);

    // A second pass with total coverage: the trace shows zero unmatched.
    let parity: Vec<Box<dyn Predicate<i64>>> = vec![even().boxed(), even().not().boxed()];
    let groups = partition_elements(&numbers, &parity);
    println!("\nno remainder this time: {} groups", groups.len());
}
