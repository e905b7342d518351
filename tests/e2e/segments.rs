//! Segment transitions: what a new `given` carries forward and what it resets.

use gwt_core::{MemorySink, Scenario};

fn capture(name: &str) -> (Scenario<()>, MemorySink) {
    let sink = MemorySink::new();
    (Scenario::with_sink(name, sink.clone()), sink)
}

#[test]
fn test_failures_thread_across_given() {
    // The whole scenario's total spans all its segments; an earlier
    // segment's failure is never discarded by a later given.
    let (chain, _sink) = capture("t");
    let chain = chain
        .given("first segment", 1)
        .then(|x: i32| x == 2)
        .given("second segment", 3)
        .then(|x: i32| x == 3)
        .given_values("third segment", ())
        .then(|| false);
    assert_eq!(chain.failure_count(), 2);
}

#[test]
fn test_given_changes_value_set_type() {
    let (chain, _sink) = capture("t");
    let chain = chain
        .given("an integer", 1)
        .then(|x: i32| x == 1)
        .given("a string", "one")
        .then(|s: &str| s == "one")
        .given_values("a mixed pair", (1, "one"))
        .then(|n: i32, s: &str| n == 1 && s == "one");
    assert!(chain.passed());
}

#[test]
fn test_anonymous_counter_restarts_per_segment() {
    let (chain, sink) = capture("t");
    let _chain = chain
        .then(false)
        .then(false)
        .given("a value", 1)
        .then(|x: i32| x == 0);
    let captured = sink.captured();
    assert!(captured[0].contains("THEN #1"));
    assert!(captured[1].contains("THEN #2"));
    assert!(captured[2].contains("THEN #1"));
}

#[test]
fn test_new_segment_starts_without_mutation() {
    let (chain, _sink) = capture("t");
    let chain = chain
        .given("a value", 2)
        .when("squared", |x: &mut i32| *x *= *x)
        .then(|x: i32| x == 4)
        .given("a fresh value", 3)
        .then_named("the old mutation is gone", |x: i32| x == 3);
    assert!(chain.passed());
}

#[test]
fn test_scenario_name_carries_across_segments() {
    let (chain, sink) = capture("carried");
    let _chain = chain
        .given("first", 1)
        .given("second", 2)
        .then(|x: i32| x == 0);
    assert!(sink.captured()[0].starts_with("[FAILED] TEST carried\n"));
    assert!(sink.captured()[0].contains("GIVEN second"));
}

#[test]
fn test_eager_capture_happens_at_declaration() {
    // The eager form captures by value when given is declared; later
    // assertions all see equal copies of that capture.
    let mut source = vec![1, 2, 3];
    source.push(4);
    let captured = source.clone();
    let (chain, _sink) = capture("t");
    let chain = chain
        .given("a snapshot", captured)
        .then(|v: Vec<i32>| v == vec![1, 2, 3, 4])
        .then(|v: Vec<i32>| v.len() == 4);
    assert!(chain.passed());
}
