//! Demonstration scenarios exercising the full chain surface.

use gwt_core::{DiagnosticSink, RunSummary, Scenario};

type MakeSink<'a> = &'a mut dyn FnMut() -> Box<dyn DiagnosticSink>;

/// Runs every demonstration scenario, recording outcomes into `summary`.
///
/// All scenarios here pass; `include_failures` adds one that fails on
/// purpose so the diagnostic layout can be seen.
pub fn run_all(summary: &mut RunSummary, make_sink: MakeSink<'_>, include_failures: bool) {
    let chain = Scenario::with_sink("empty scenario", make_sink());
    summary.record(&chain);

    let chain = Scenario::with_sink("single, undocumented assertion", make_sink()).then(true);
    summary.record(&chain);

    let chain = Scenario::with_sink("multiple, undocumented assertions", make_sink())
        .then(true)
        .then(true)
        .then(true);
    summary.record(&chain);

    let chain = Scenario::with_sink("documented assertion", make_sink()).then_named(
        "this message is printed if the condition is false",
        true,
    );
    summary.record(&chain);

    let chain = Scenario::with_sink("predicate assertions", make_sink())
        .then(|| true)
        .then_named("printed if the predicate returns false", || true);
    summary.record(&chain);

    let chain = Scenario::with_sink("eager setup values", make_sink())
        .given("a single value", 123)
        .then_named("the predicate receives the declared value", |value: i32| {
            value == 123
        })
        .given_values("multiple values", (456, "Hello, World!", 748.485))
        .then_named(
            "the predicate receives every value in order",
            |x: i32, y: &str, z: f64| (x, y, z) == (456, "Hello, World!", 748.485),
        )
        .given_values("nothing", ())
        .then_named("the predicate receives no values", || true);
    summary.record(&chain);

    let chain = Scenario::with_sink("generated setup values", make_sink())
        .given_with("a value built by a generator", || ((246, "135"),))
        .then_named(
            "the predicate receives the generated value",
            |value: (i32, &str)| value == (246, "135"),
        );
    summary.record(&chain);

    let chain = Scenario::with_sink("given, when, then", make_sink())
        .given("a single value", 100)
        .when("the value is altered", |value: &mut i32| *value += 444)
        .then_named("every following assertion sees the altered value", |value: i32| {
            value == 100 + 444
        })
        .then(|value: i32| value == 100 + 444)
        .when("the value is altered a different way", |value: &mut i32| {
            *value += 999
        })
        .then_named(
            "only the most recent alteration applies",
            |value: i32| value == 100 + 999,
        )
        .given_values("two words", ("Hello", "World"))
        .when("both words are replaced", |a: &mut &str, b: &mut &str| {
            *a = "Goodbye";
            *b = "Nothingness";
        })
        .then_named("the assertion sees both replacements", |a: &str, b: &str| {
            (a, b) == ("Goodbye", "Nothingness")
        })
        .given_values("nothing", ())
        .when("nothing is altered", || {})
        .then_named("mutation and predicate both run without arguments", || true);
    summary.record(&chain);

    if include_failures {
        let chain = Scenario::with_sink("deliberate failure", make_sink())
            .given("a single value", 1)
            .when("nothing changes", |_value: &mut i32| {})
            .then_named("one is two", |value: i32| value == 2)
            .then(false);
        summary.record(&chain);
    }
}
