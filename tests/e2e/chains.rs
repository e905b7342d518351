//! Chain behavior: counting, value production, mutation, aggregation.

use gwt_core::{MemorySink, Scenario};
use std::cell::Cell;
use std::rc::Rc;

fn capture(name: &str) -> (Scenario<()>, MemorySink) {
    let sink = MemorySink::new();
    (Scenario::with_sink(name, sink.clone()), sink)
}

#[test]
fn test_true_assertion_leaves_count_unchanged() {
    let (chain, sink) = capture("t");
    let chain = chain.then(true);
    assert_eq!(chain.failure_count(), 0);
    assert!(sink.is_empty());
}

#[test]
fn test_false_assertion_counts_one_and_emits_one_block() {
    let (chain, sink) = capture("t");
    let chain = chain.then(false);
    assert_eq!(chain.failure_count(), 1);
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_each_failure_counts_exactly_once() {
    let (chain, sink) = capture("t");
    let chain = chain.then(false).then(true).then(false).then(false);
    assert_eq!(chain.failure_count(), 3);
    assert_eq!(sink.len(), 3);
}

#[test]
fn test_eager_values_arrive_unchanged_in_order() {
    let (chain, _sink) = capture("t");
    let chain = chain
        .given_values("three typed values", (7, "seven", 7.5))
        .then(|a: i32, b: &str, c: f64| a == 7 && b == "seven" && c == 7.5);
    assert!(chain.passed());
}

#[test]
fn test_eager_single_value_matches() {
    let (chain, _sink) = capture("t");
    let chain = chain
        .given("a value", 100)
        .then_named("eq", |x: i32| x == 100);
    assert_eq!(chain.failure_count(), 0);
}

#[test]
fn test_generator_runs_once_per_assertion() {
    let calls = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&calls);
    let (chain, _sink) = capture("t");
    let chain = chain
        .given_with("a counting generator", move || {
            counter.set(counter.get() + 1);
            (counter.get(),)
        })
        .then(|n: u32| n == 1)
        .then(|n: u32| n == 2);
    assert!(chain.passed());
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_generator_not_run_for_literal_assertions() {
    let calls = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&calls);
    let (chain, _sink) = capture("t");
    let _chain = chain
        .given_with("a counting generator", move || {
            counter.set(counter.get() + 1);
            (0i32,)
        })
        .then(true)
        .then_named("literal verdicts need no values", true);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_mutation_never_accumulates_across_assertions() {
    let (chain, _sink) = capture("t");
    let chain = chain
        .given("a value", 100)
        .when("incremented", |x: &mut i32| *x += 1)
        .then(|x: i32| x == 101)
        .then(|x: i32| x == 101)
        .then(|x: i32| x == 101);
    assert_eq!(chain.failure_count(), 0);
}

#[test]
fn test_second_when_replaces_rather_than_composes() {
    let (chain, _sink) = capture("t");
    let chain = chain
        .given("a value", 100)
        .when("plus 444", |x: &mut i32| *x += 444)
        .then(|x: i32| x == 544)
        .when("plus 999", |x: &mut i32| *x += 999)
        .then(|x: i32| x == 1099);
    assert!(chain.passed());
}

#[test]
fn test_mutation_on_lazy_values() {
    let (chain, _sink) = capture("t");
    let chain = chain
        .given_with("a generated pair", || (1, 2))
        .when("both doubled", |a: &mut i32, b: &mut i32| {
            *a *= 2;
            *b *= 2;
        })
        .then(|a: i32, b: i32| (a, b) == (2, 4))
        .then(|a: i32, b: i32| (a, b) == (2, 4));
    assert!(chain.passed());
}

#[test]
fn test_combining_two_failing_chains_sums_to_two() {
    let (a, _sa) = capture("a");
    let (b, _sb) = capture("b");
    let total = a.then(false) + b.then(false);
    assert_eq!(i32::from(total), 2);
}

#[test]
fn test_left_fold_combination_across_many_chains() {
    let (a, _sa) = capture("a");
    let (b, _sb) = capture("b");
    let (c, _sc) = capture("c");
    let total = a.then(true) + b.then(false).then(false) + c.given("v", 1).then(|x: i32| x == 2);
    assert_eq!(i32::from(total), 3);
}

#[test]
fn test_all_passing_chains_convert_to_zero() {
    let (a, _sa) = capture("a");
    let (b, _sb) = capture("b");
    let total = a.then(true) + b.given("v", 5).then(|x: i32| x == 5);
    assert!(total.passed());
    assert_eq!(i32::from(total), 0);
}
