//! Value-sets and the deferred sources that produce them.

/// Marker for the ordered, typed value-set a chain segment carries.
///
/// Implemented for tuples of up to eight `Clone + 'static` elements,
/// including the empty tuple for segments that declare no values. Each tuple
/// element is one tracked value; predicates and mutations receive one
/// argument per element, in declaration order.
pub trait ValueSet: Clone + 'static {}

macro_rules! impl_value_set {
    ($($name:ident),*) => {
        impl<$($name: Clone + 'static),*> ValueSet for ($($name,)*) {}
    };
}

impl_value_set!();
impl_value_set!(A);
impl_value_set!(A, B);
impl_value_set!(A, B, C);
impl_value_set!(A, B, C, D);
impl_value_set!(A, B, C, D, E);
impl_value_set!(A, B, C, D, E, F);
impl_value_set!(A, B, C, D, E, F, G);
impl_value_set!(A, B, C, D, E, F, G, H);

/// Deferred producer of a segment's value-set.
///
/// The eager form captures its values once, when the `given` is declared,
/// and every [`produce`](ValueSource::produce) call returns an equal clone of
/// that captured set. The lazy form stores a generator and re-invokes it on
/// every call — side effects or randomness inside the generator recur once
/// per request, never once overall. Nothing is cached.
pub enum ValueSource<V> {
    /// Fixed values captured at declaration time.
    Eager(V),
    /// Generator invoked anew on every request.
    Lazy(Box<dyn FnMut() -> V>),
}

impl<V: ValueSet> ValueSource<V> {
    /// Produces a fresh value-set.
    pub fn produce(&mut self) -> V {
        match self {
            ValueSource::Eager(values) => values.clone(),
            ValueSource::Lazy(generate) => generate(),
        }
    }

    /// Returns true for the eager form.
    pub fn is_eager(&self) -> bool {
        matches!(self, ValueSource::Eager(_))
    }
}

impl<V> std::fmt::Debug for ValueSource<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::Eager(_) => write!(f, "ValueSource::Eager"),
            ValueSource::Lazy(_) => write!(f, "ValueSource::Lazy"),
        }
    }
}
