//! Example descriptors: which layer to render, on what data, with which properties.
use rand::RngCore;

use crate::catalog::controls::{ControlValues, RangeControl};
use crate::catalog::data::DataSource;
use crate::catalog::kind::LayerKind;
use crate::catalog::prop::{Accessor, AccessorContext, Prop, Props};
use crate::catalog::value::{Record, Value};
use crate::error::{Error, Result};

/// Static configuration for one gallery example.
///
/// Construction is pure. Any randomness lives inside accessors and is drawn from the random
/// source the renderer passes when it evaluates them.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ExampleDescriptor {
    /// Engine layer to instantiate.
    pub layer: LayerKind,
    /// Records to render.
    pub data: DataSource,
    /// Visual property mappings, in declaration order.
    pub props: Props,
    /// Live-tunable numeric properties.
    pub controls: Vec<(String, RangeControl)>,
}

impl ExampleDescriptor {
    /// Create a new descriptor with required fields.
    pub fn new(layer: LayerKind, data: DataSource) -> Self {
        Self {
            layer,
            data,
            props: Props::new(),
            controls: Vec::new(),
        }
    }

    /// Sets the engine layer id.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_constant("id", Value::Text(id.into()))
    }

    pub fn with_constant(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.set(name, Prop::Constant(value.into()));
        self
    }

    /// Adds a deterministic per-record accessor.
    pub fn with_accessor<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Record, &AccessorContext) -> Option<Value> + Send + Sync + 'static,
    {
        self.props
            .set(name, Prop::Accessor(Accessor::deterministic(f)));
        self
    }

    /// Adds an accessor that draws from the renderer's random source.
    /// Its values are for visual variety only and are not reproducible unless the source is seeded.
    pub fn with_randomized_accessor<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Record, &AccessorContext, &mut dyn RngCore) -> Option<Value>
            + Send
            + Sync
            + 'static,
    {
        self.props.set(name, Prop::Accessor(Accessor::randomized(f)));
        self
    }

    /// Declares a range control for the named property.
    pub fn with_control(mut self, name: impl Into<String>, control: RangeControl) -> Self {
        let name = name.into();
        match self.controls.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = control,
            None => self.controls.push((name, control)),
        }
        self
    }

    /// The engine layer id, if set.
    pub fn id(&self) -> Option<&str> {
        self.props
            .get("id")
            .and_then(Prop::as_constant)
            .and_then(Value::as_text)
    }

    pub fn control(&self, name: &str) -> Option<&RangeControl> {
        self.controls
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    pub fn has_randomized_props(&self) -> bool {
        self.props
            .iter()
            .any(|(_, p)| matches!(p, Prop::Accessor(a) if a.is_randomized()))
    }

    /// Validates the controls, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        for (i, (name, control)) in self.controls.iter().enumerate() {
            control.validate().map_err(|e| {
                Error::InvalidConfig(format!("control '{name}' on {}: {e}", self.layer))
            })?;
            if self.controls[..i].iter().any(|(n, _)| n == name) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate control '{name}' on {}",
                    self.layer
                )));
            }
        }
        Ok(())
    }

    /// Initial live control values. Defaults come from the matching numeric constant
    /// property when present, otherwise from the control minimum.
    pub fn initial_control_values(&self) -> ControlValues {
        let mut values = ControlValues::new();
        for (name, control) in &self.controls {
            let initial = self
                .props
                .get(name)
                .and_then(Prop::as_constant)
                .and_then(Value::as_number)
                .unwrap_or(control.min);
            values.insert(name.clone(), *control, initial);
        }
        values
    }

    /// Properties with live control values substituted as constants.
    pub fn props_with_controls(&self, values: &ControlValues) -> Props {
        let mut props = self.props.clone();
        for (name, value) in values.iter() {
            if self.control(name).is_some() {
                props.set(name, Prop::Constant(Value::Number(value)));
            }
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::catalog::controls::ControlPolicy;

    fn trips_like() -> ExampleDescriptor {
        ExampleDescriptor::new(LayerKind::Trips, DataSource::empty())
            .with_id("trips")
            .with_constant("trailLength", 600.0)
            .with_constant("currentTime", 504.0)
            .with_control("currentTime", RangeControl::new(0.0, 1200.0, 12.0))
            .with_control("trailLength", RangeControl::new(0.0, 1200.0, 12.0))
    }

    #[test]
    fn builder_sets_id_and_props_in_order() {
        let d = ExampleDescriptor::new(LayerKind::GpuGrid, DataSource::empty())
            .with_id("grid")
            .with_constant("cellSize", 200.0)
            .with_accessor("getPosition", |r, _| r.position().map(Value::position));

        assert_eq!(d.id(), Some("grid"));
        assert_eq!(
            d.props.names().collect::<Vec<_>>(),
            vec!["id", "cellSize", "getPosition"]
        );
        assert!(!d.has_randomized_props());
        assert!(d.validate().is_ok());
    }

    #[test]
    fn randomized_accessors_are_flagged() {
        let d = ExampleDescriptor::new(LayerKind::S2, DataSource::empty())
            .with_randomized_accessor("getElevation", |_, _, rng| {
                Some(Value::Number(rng.next_u32() as f64))
            });
        assert!(d.has_randomized_props());
        assert_eq!(d.id(), None);
    }

    #[test]
    fn validate_rejects_bad_controls() {
        let bad = ExampleDescriptor::new(LayerKind::Trips, DataSource::empty())
            .with_control("currentTime", RangeControl::new(5.0, 0.0, 1.0));
        assert!(matches!(bad.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn control_defaults_come_from_constant_props() {
        let d = trips_like();
        let values = d.initial_control_values();
        assert_eq!(values.get("currentTime"), Some(504.0));
        assert_eq!(values.get("trailLength"), Some(600.0));

        let bare = ExampleDescriptor::new(LayerKind::Trips, DataSource::empty())
            .with_control("currentTime", RangeControl::new(24.0, 48.0, 12.0));
        assert_eq!(bare.initial_control_values().get("currentTime"), Some(24.0));
    }

    #[test]
    fn live_values_override_constants() {
        let d = trips_like();
        let mut values = d.initial_control_values();
        values
            .set("currentTime", 900.0, ControlPolicy::Reject)
            .unwrap();

        let props = d.props_with_controls(&values);
        assert_eq!(
            props.get("currentTime").and_then(Prop::as_constant),
            Some(&Value::Number(900.0))
        );
        assert_eq!(
            props.get("trailLength").and_then(Prop::as_constant),
            Some(&Value::Number(600.0))
        );
        // Descriptor itself is untouched.
        assert_eq!(
            d.props.get("currentTime").and_then(Prop::as_constant),
            Some(&Value::Number(504.0))
        );
    }

    #[test]
    fn accessor_rejects_wrong_record_shape() {
        let d = ExampleDescriptor::new(LayerKind::GreatCircle, DataSource::empty())
            .with_accessor("getSourcePosition", |r, _| match r {
                Record::Arc { source, .. } => Some(Value::position(*source)),
                _ => None,
            });
        let mut rng = StdRng::seed_from_u64(0);
        let wrong = Record::Position(DVec2::ZERO);
        assert!(d
            .props
            .evaluate("getSourcePosition", &wrong, &AccessorContext::new(), &mut rng)
            .is_none());
    }
}
