//! In-place mutations applied to a value-set before assertion.

use crate::values::ValueSet;

/// A mutation over a segment's value-set.
///
/// Implemented for closures `FnMut(&mut A, &mut B, ...)` over the value-set
/// `(A, B, ...)` — one mutable reference per tracked value, in declaration
/// order. The `FnMut(..)` sugar fixes the closure's return type to `()`, so
/// a mutation that tries to return a value is a compile error, not a
/// silently discarded result.
pub trait Mutation<V: ValueSet> {
    /// Mutates `values` in place.
    fn apply(&mut self, values: &mut V);
}

macro_rules! impl_mutation {
    ($($name:ident),*) => {
        impl<Func, $($name,)*> Mutation<($($name,)*)> for Func
        where
            Func: FnMut($(&mut $name),*),
            ($($name,)*): ValueSet,
        {
            #[allow(non_snake_case)]
            fn apply(&mut self, values: &mut ($($name,)*)) {
                let ($($name,)*) = values;
                self($($name),*)
            }
        }
    };
}

impl_mutation!();
impl_mutation!(A);
impl_mutation!(A, B);
impl_mutation!(A, B, C);
impl_mutation!(A, B, C, D);
impl_mutation!(A, B, C, D, E);
impl_mutation!(A, B, C, D, E, F);
impl_mutation!(A, B, C, D, E, F, G);
impl_mutation!(A, B, C, D, E, F, G, H);
