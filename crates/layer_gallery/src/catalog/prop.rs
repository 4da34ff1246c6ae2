//! Visual property mappings: constants and per-record accessors.
//!
//! A [`Prop`] is either a fixed [`Value`] or an [`Accessor`] the rendering engine calls once
//! per record. Accessors receive an [`AccessorContext`] and an injected random source so that
//! randomized demo values can be made reproducible in tests by passing a seeded generator.
use std::fmt;
use std::sync::Arc;

use rand::RngCore;

use crate::catalog::value::{Record, Value};

/// Signature shared by all accessor functions.
pub type AccessorFn =
    dyn Fn(&Record, &AccessorContext, &mut dyn RngCore) -> Option<Value> + Send + Sync;

/// Positional information passed alongside each record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessorContext {
    /// Index of the record in its data sequence, when the caller tracks it.
    pub index: Option<usize>,
}

impl AccessorContext {
    pub fn new() -> Self {
        Self { index: None }
    }

    pub fn at(index: usize) -> Self {
        Self { index: Some(index) }
    }

    /// The record index, treating a missing index as the first record.
    #[inline]
    pub fn index_or_zero(&self) -> usize {
        self.index.unwrap_or(0)
    }
}

/// Whether an accessor's output depends on the random source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Determinism {
    /// Equal inputs always produce equal outputs.
    Deterministic,
    /// Output draws from the random source; no reproducibility unless the source is seeded.
    Randomized,
}

/// A shared, pure per-record accessor.
#[derive(Clone)]
pub struct Accessor {
    f: Arc<AccessorFn>,
    determinism: Determinism,
}

impl Accessor {
    /// Wraps a function that only reads the record and its context.
    pub fn deterministic<F>(f: F) -> Self
    where
        F: Fn(&Record, &AccessorContext) -> Option<Value> + Send + Sync + 'static,
    {
        let wrapped: Arc<AccessorFn> = Arc::new(
            move |record: &Record, ctx: &AccessorContext, _rng: &mut dyn RngCore| f(record, ctx),
        );
        Self {
            f: wrapped,
            determinism: Determinism::Deterministic,
        }
    }

    /// Wraps a function that draws from the random source.
    pub fn randomized<F>(f: F) -> Self
    where
        F: Fn(&Record, &AccessorContext, &mut dyn RngCore) -> Option<Value> + Send + Sync + 'static,
    {
        Self {
            f: Arc::new(f),
            determinism: Determinism::Randomized,
        }
    }

    pub fn determinism(&self) -> Determinism {
        self.determinism
    }

    pub fn is_randomized(&self) -> bool {
        self.determinism == Determinism::Randomized
    }

    /// Evaluates the accessor. Returns `None` when the record has the wrong shape.
    #[inline]
    pub fn evaluate(
        &self,
        record: &Record,
        ctx: &AccessorContext,
        rng: &mut dyn RngCore,
    ) -> Option<Value> {
        (self.f)(record, ctx, rng)
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Accessor").field(&self.determinism).finish()
    }
}

/// Accessors compare by identity of the shared function.
impl PartialEq for Accessor {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.f, &other.f) && self.determinism == other.determinism
    }
}

/// A property value: fixed, or computed per record.
#[derive(Clone, Debug, PartialEq)]
pub enum Prop {
    Constant(Value),
    Accessor(Accessor),
}

impl Prop {
    pub fn is_constant(&self) -> bool {
        matches!(self, Prop::Constant(_))
    }

    pub fn as_constant(&self) -> Option<&Value> {
        match self {
            Prop::Constant(v) => Some(v),
            Prop::Accessor(_) => None,
        }
    }

    /// Resolves the property for one record.
    pub fn evaluate(
        &self,
        record: &Record,
        ctx: &AccessorContext,
        rng: &mut dyn RngCore,
    ) -> Option<Value> {
        match self {
            Prop::Constant(v) => Some(v.clone()),
            Prop::Accessor(a) => a.evaluate(record, ctx, rng),
        }
    }
}

impl From<Value> for Prop {
    fn from(value: Value) -> Self {
        Prop::Constant(value)
    }
}

impl From<Accessor> for Prop {
    fn from(accessor: Accessor) -> Self {
        Prop::Accessor(accessor)
    }
}

/// Ordered property map. Names are unique; setting an existing name replaces it in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
    entries: Vec<(String, Prop)>,
}

impl Props {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets a property, keeping its original position if it was already present.
    pub fn set(&mut self, name: impl Into<String>, prop: impl Into<Prop>) -> &mut Self {
        let name = name.into();
        let prop = prop.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = prop,
            None => self.entries.push((name, prop)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Prop> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Prop)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p))
    }

    /// Resolves a named property for one record. `None` if the property is absent
    /// or its accessor rejects the record.
    pub fn evaluate(
        &self,
        name: &str,
        record: &Record,
        ctx: &AccessorContext,
        rng: &mut dyn RngCore,
    ) -> Option<Value> {
        self.get(name)?.evaluate(record, ctx, rng)
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    struct FixedRng {
        value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    fn point() -> Record {
        Record::Position(DVec2::new(-122.4, 37.7))
    }

    #[test]
    fn deterministic_accessor_ignores_random_source() {
        let acc = Accessor::deterministic(|r, _| r.position().map(Value::position));
        let mut a = FixedRng { value: 0 };
        let mut b = FixedRng { value: u32::MAX };
        let ctx = AccessorContext::new();
        assert_eq!(
            acc.evaluate(&point(), &ctx, &mut a),
            acc.evaluate(&point(), &ctx, &mut b)
        );
        assert!(!acc.is_randomized());
    }

    #[test]
    fn randomized_accessor_is_reproducible_with_seeded_source() {
        let acc = Accessor::randomized(|_, _, rng| Some(Value::Number(rng.next_u32() as f64)));
        let ctx = AccessorContext::new();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(
            acc.evaluate(&point(), &ctx, &mut a),
            acc.evaluate(&point(), &ctx, &mut b)
        );
        assert!(acc.is_randomized());
    }

    #[test]
    fn context_without_index_reads_as_zero() {
        assert_eq!(AccessorContext::new().index_or_zero(), 0);
        assert_eq!(AccessorContext::at(4).index_or_zero(), 4);
    }

    #[test]
    fn accessor_equality_is_identity() {
        let a = Accessor::deterministic(|_, _| None);
        let b = Accessor::deterministic(|_, _| None);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn set_replaces_in_place_and_keeps_order() {
        let mut props = Props::new();
        props
            .set("id", Value::from("layer"))
            .set("opacity", Value::from(0.5))
            .set("id", Value::from("renamed"));

        assert_eq!(props.len(), 2);
        assert_eq!(props.names().collect::<Vec<_>>(), vec!["id", "opacity"]);
        assert_eq!(
            props.get("id").and_then(Prop::as_constant),
            Some(&Value::from("renamed"))
        );
    }

    #[test]
    fn evaluate_missing_property_is_none() {
        let props = Props::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(props
            .evaluate("getColor", &point(), &AccessorContext::new(), &mut rng)
            .is_none());
    }

    #[test]
    fn constant_prop_evaluates_to_its_value() {
        let prop = Prop::from(Value::from([253.0, 128.0, 93.0]));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            prop.evaluate(&point(), &AccessorContext::new(), &mut rng),
            Some(Value::from([253.0, 128.0, 93.0]))
        );
        assert!(prop.is_constant());
    }
}
