//! Triage Example
//!
//! This example partitions a stream of service events into an ordered
//! severity ladder with a heterogeneous predicate stack: stock
//! predicates, combinators, and closures sharing one boxed list.
//!
//! Run with: cargo run --example triage

use watershed::predicate::{between, ge, Predicate, PredicateExt};
use watershed::{first_match, partition_into};

#[derive(Debug, Clone)]
struct Event {
    source: &'static str,
    latency_ms: i64,
}

fn main() {
    println!("=== Triage Example ===\n");

    let events = vec![
        Event { source: "checkout", latency_ms: 12 },
        Event { source: "search", latency_ms: 740 },
        Event { source: "billing", latency_ms: 3200 },
        Event { source: "search", latency_ms: 95 },
        Event { source: "checkout", latency_ms: 410 },
    ];

    // Order is the policy: an event lands in the FIRST tier it satisfies.
    let tiers: Vec<Box<dyn Predicate<Event>>> = vec![
        (|e: &Event| e.latency_ms >= 1000).boxed(),
        (|e: &Event| e.source == "checkout" && e.latency_ms >= 400).boxed(),
        (|e: &Event| e.latency_ms >= 500).boxed(),
    ];

    // Ask where a single event would go without partitioning anything.
    let slow_checkout = Event { source: "checkout", latency_ms: 450 };
    println!(
        "a 450ms checkout event routes to tier {:?}\n",
        first_match(&tiers, &slow_checkout)
    );

    let groups = partition_into(events, &tiers);

    println!("page now:        {:?}", groups[0]);
    println!("checkout watch:  {:?}", groups[1]);
    println!("slow elsewhere:  {:?}", groups[2]);
    println!("healthy:         {:?}", groups[3]);
    println!();

    // The same latencies partition into plain numeric bands too.
    let latencies = [12, 740, 3200, 95, 410];
    let bands = partition_into(latencies, &[between(0, 99).boxed(), ge(1000).boxed()]);
    println!("fast:      {:?}", bands[0]);
    println!("very slow: {:?}", bands[1]);
    println!("the rest:  {:?}", bands[2]);
}
