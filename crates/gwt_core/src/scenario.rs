//! The fluent given/when/then step chain.

use crate::condition::Condition;
use crate::message::Message;
use crate::mutation::Mutation;
use crate::sink::{DiagnosticSink, StderrSink};
use crate::values::{ValueSet, ValueSource};
use std::fmt;
use std::ops::Add;
use std::process::ExitCode;

/// A test scenario under construction: a chain of given/when/then calls.
///
/// The type parameter is the segment's current value-set — it changes with
/// every `given`, so predicates and mutations are checked against the
/// declared values at compile time. `when` and `then` thread the same
/// scenario through by value, the usual fluent-builder shape.
///
/// A false assertion is counted and reported to the diagnostic sink; it
/// never aborts the chain. Independent scenarios combine with `+`, and the
/// result converts to an `i32` or [`ExitCode`] carrying the total failure
/// count.
///
/// # Examples
///
/// ```
/// use gwt_core::scenario;
///
/// let chain = scenario("addition")
///     .given_values("two numbers", (2, 3))
///     .then_named("they sum to five", |x: i32, y: i32| x + y == 5);
///
/// assert_eq!(chain.failure_count(), 0);
/// ```
///
/// Mutations apply to a fresh value-set on every assertion:
///
/// ```
/// use gwt_core::scenario;
///
/// let chain = scenario("counter")
///     .given("a starting value", 100)
///     .when("it is incremented", |x: &mut i32| *x += 1)
///     .then(|x: i32| x == 101)
///     .then(|x: i32| x == 101); // fresh 100, incremented again
///
/// assert!(chain.passed());
/// ```
pub struct Scenario<V: ValueSet = ()> {
    message: Message,
    source: ValueSource<V>,
    mutate: Option<Box<dyn FnMut(&mut V)>>,
    failures: u32,
    anonymous: u32,
    sink: Box<dyn DiagnosticSink>,
}

/// Starts a scenario chain with no declared values.
///
/// Shorthand for [`Scenario::new`].
pub fn scenario(name: &str) -> Scenario<()> {
    Scenario::new(name)
}

impl Scenario<()> {
    /// Starts a scenario reporting failures to stderr.
    pub fn new(name: &str) -> Self {
        Self::with_sink(name, StderrSink)
    }

    /// Starts a scenario reporting failures to `sink`.
    pub fn with_sink(name: &str, sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            message: Message::new(name),
            source: ValueSource::Eager(()),
            mutate: None,
            failures: 0,
            anonymous: 0,
            sink: Box::new(sink),
        }
    }
}

impl<V: ValueSet> Scenario<V> {
    /// Declares a single setup value, starting a new chain segment.
    ///
    /// Subsequent predicates and mutations take exactly one argument of the
    /// value's type. For several values use [`given_values`](Self::given_values);
    /// for generated values use [`given_with`](Self::given_with).
    pub fn given<T: Clone + 'static>(self, description: &str, value: T) -> Scenario<(T,)> {
        self.given_values(description, (value,))
    }

    /// Declares an ordered set of setup values, starting a new chain segment.
    ///
    /// The values are captured here, once; every assertion in the segment
    /// receives an equal copy. `given_values(desc, ())` declares a segment
    /// with no values, whose predicates take no arguments.
    pub fn given_values<W: ValueSet>(mut self, description: &str, values: W) -> Scenario<W> {
        self.message.given = description.to_string();
        tracing::trace!(
            scenario = %self.message.scenario,
            given = description,
            "eager segment"
        );
        self.segment(ValueSource::Eager(values))
    }

    /// Declares a generated value-set, starting a new chain segment.
    ///
    /// `generate` is stored, not called: each assertion in the segment
    /// invokes it anew, so side effects or randomness inside it recur once
    /// per assertion.
    pub fn given_with<G, W>(mut self, description: &str, generate: G) -> Scenario<W>
    where
        G: FnMut() -> W + 'static,
        W: ValueSet,
    {
        self.message.given = description.to_string();
        tracing::trace!(
            scenario = %self.message.scenario,
            given = description,
            "lazy segment"
        );
        self.segment(ValueSource::Lazy(Box::new(generate)))
    }

    /// Starts a new segment over `source`, carrying the message, sink, and
    /// accumulated failure count forward. The mutation and the anonymous
    /// assertion counter are segment-local and start fresh.
    fn segment<W: ValueSet>(self, source: ValueSource<W>) -> Scenario<W> {
        Scenario {
            message: self.message,
            source,
            mutate: None,
            failures: self.failures,
            anonymous: 0,
            sink: self.sink,
        }
    }

    /// Declares a mutation applied, in place, to the value-set of every
    /// subsequent assertion in this segment.
    ///
    /// A second `when` replaces the first outright; mutations never compose.
    /// The mutation runs against a freshly produced value-set on each
    /// assertion, so its effects never accumulate across `then` calls.
    pub fn when<M>(mut self, description: &str, mut mutation: M) -> Self
    where
        M: Mutation<V> + 'static,
    {
        self.message.when = description.to_string();
        self.mutate = Some(Box::new(move |values| mutation.apply(values)));
        self
    }

    /// Asserts an anonymous condition, labeled `#1`, `#2`, ... per segment.
    pub fn then<C: Condition<V>>(mut self, condition: C) -> Self {
        self.anonymous += 1;
        let label = format!("#{}", self.anonymous);
        self.then_named(&label, condition)
    }

    /// Asserts a described condition.
    ///
    /// A literal `bool` is judged as-is, without touching the value source.
    /// A predicate receives a freshly produced value-set with the current
    /// mutation applied. On failure the count increments by one and a single
    /// diagnostic block goes to the sink; the chain continues either way.
    pub fn then_named<C: Condition<V>>(mut self, description: &str, condition: C) -> Self {
        self.message.then = description.to_string();

        let Self { source, mutate, .. } = &mut self;
        let passed = condition.evaluate(|| {
            let mut values = source.produce();
            if let Some(mutation) = mutate.as_mut() {
                mutation(&mut values);
            }
            values
        });

        if passed {
            tracing::trace!(
                scenario = %self.message.scenario,
                then = description,
                "assertion passed"
            );
        } else {
            self.failures += 1;
            tracing::debug!(
                scenario = %self.message.scenario,
                then = description,
                failures = self.failures,
                "assertion failed"
            );
            self.sink.failure(&self.message);
        }

        self
    }

    /// Accumulated failure count for this chain.
    pub fn failure_count(&self) -> u32 {
        self.failures
    }

    /// The scenario's name.
    pub fn name(&self) -> &str {
        &self.message.scenario
    }

    /// True if no assertion has failed so far.
    pub fn passed(&self) -> bool {
        self.failures == 0
    }
}

/// Combines independent chains: adds the right-hand failure count into the
/// left-hand chain. Left-folds naturally across `a + b + c + ...`.
impl<V: ValueSet, W: ValueSet> Add<Scenario<W>> for Scenario<V> {
    type Output = Scenario<V>;

    fn add(mut self, other: Scenario<W>) -> Scenario<V> {
        self.failures += other.failures;
        self
    }
}

/// Integer conversion: the total failure count, `0` meaning all passed.
impl<V: ValueSet> From<Scenario<V>> for i32 {
    fn from(chain: Scenario<V>) -> i32 {
        chain.failures as i32
    }
}

/// Process-status conversion, clamped to the 8-bit exit-status range.
impl<V: ValueSet> From<Scenario<V>> for ExitCode {
    fn from(chain: Scenario<V>) -> ExitCode {
        ExitCode::from(chain.failures.min(255) as u8)
    }
}

impl<V: ValueSet> fmt::Debug for Scenario<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.message.scenario)
            .field("source", &self.source)
            .field("failures", &self.failures)
            .field("anonymous", &self.anonymous)
            .finish_non_exhaustive()
    }
}
