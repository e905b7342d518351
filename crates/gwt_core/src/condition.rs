//! Assertion inputs: literal booleans and typed predicates.

use crate::values::ValueSet;

/// Something a `then` step can assert on.
///
/// Implemented for two shapes:
///
/// - `bool` — a literal verdict. The value source is **not** consulted;
///   `evaluate` never calls `produce`.
/// - closures `FnOnce(A, B, ...) -> bool` over the segment's value-set
///   `(A, B, ...)` — `produce` is called exactly once to obtain a fresh,
///   possibly mutated value-set, which is unpacked positionally into the
///   predicate's arguments.
///
/// A predicate whose argument shape does not match the declared value-set,
/// or whose return type is not `bool`, is rejected at compile time.
pub trait Condition<V: ValueSet> {
    /// Resolves this condition to a verdict, requesting a value-set from
    /// `produce` only if one is needed.
    fn evaluate(self, produce: impl FnOnce() -> V) -> bool;
}

impl<V: ValueSet> Condition<V> for bool {
    fn evaluate(self, _produce: impl FnOnce() -> V) -> bool {
        self
    }
}

macro_rules! impl_condition {
    ($($name:ident),*) => {
        impl<Func, $($name,)*> Condition<($($name,)*)> for Func
        where
            Func: FnOnce($($name),*) -> bool,
            ($($name,)*): ValueSet,
        {
            #[allow(non_snake_case)]
            fn evaluate(self, produce: impl FnOnce() -> ($($name,)*)) -> bool {
                let ($($name,)*) = produce();
                self($($name),*)
            }
        }
    };
}

impl_condition!();
impl_condition!(A);
impl_condition!(A, B);
impl_condition!(A, B, C);
impl_condition!(A, B, C, D);
impl_condition!(A, B, C, D, E);
impl_condition!(A, B, C, D, E, F);
impl_condition!(A, B, C, D, E, F, G);
impl_condition!(A, B, C, D, E, F, G, H);
