//! GWT Core Library
//!
//! A fluent Given/When/Then scenario builder: a chain of calls declares
//! setup data, an optional in-place mutation, and one or more boolean
//! assertions. Failures are counted, not thrown — each one emits a
//! human-readable diagnostic block and the chain keeps going. Independent
//! chains combine with `+` into a single total suitable as a process exit
//! status. No separate test-runner process is involved.
//!
//! # Quick Start
//!
//! ```
//! use gwt_core::scenario;
//!
//! let chain = scenario("a value survives the round trip")
//!     .given("a starting value", 100)
//!     .when("it is incremented", |x: &mut i32| *x += 1)
//!     .then_named("the result is visible", |x: i32| x == 101);
//!
//! assert_eq!(chain.failure_count(), 0);
//! ```
//!
//! # Features
//!
//! ## Typed value-sets
//!
//! The chain's value-set type changes with every `given`, so predicate and
//! mutation signatures are checked against the declared values at compile
//! time — one argument per value, in declaration order:
//!
//! ```
//! use gwt_core::scenario;
//!
//! let chain = scenario("pairs")
//!     .given_values("two words", ("Hello", "World"))
//!     .when("both are replaced", |a: &mut &str, b: &mut &str| {
//!         *a = "Goodbye";
//!         *b = "Nothingness";
//!     })
//!     .then(|a: &str, b: &str| (a, b) == ("Goodbye", "Nothingness"));
//!
//! assert!(chain.passed());
//! ```
//!
//! ## Eager and lazy data
//!
//! `given` captures values once; `given_with` stores a generator that runs
//! anew for every assertion:
//!
//! ```
//! use gwt_core::scenario;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let runs = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&runs);
//!
//! let chain = scenario("generated data")
//!     .given_with("a fresh value each time", move || {
//!         counter.set(counter.get() + 1);
//!         (counter.get(),)
//!     })
//!     .then(|n: i32| n == 1)
//!     .then(|n: i32| n == 2);
//!
//! assert!(chain.passed());
//! assert_eq!(runs.get(), 2);
//! ```
//!
//! ## Aggregation
//!
//! ```
//! use gwt_core::{scenario, MemorySink, Scenario};
//!
//! let sink = MemorySink::new();
//! let total = Scenario::with_sink("a", sink.clone()).then(false)
//!     + Scenario::with_sink("b", sink.clone()).then(false);
//!
//! assert_eq!(i32::from(total), 2);
//! ```

mod condition;
mod error;
mod message;
mod mutation;
mod report;
mod scenario;
mod sink;
mod values;

pub use condition::Condition;
pub use error::{GwtError, Result};
pub use message::Message;
pub use mutation::Mutation;
pub use report::{RunSummary, ScenarioOutcome};
pub use scenario::{scenario, Scenario};
pub use sink::{render_failure, DiagnosticSink, FileSink, MemorySink, StderrSink};
pub use values::{ValueSet, ValueSource};
