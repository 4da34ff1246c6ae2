//! Numeric range controls that a host UI can scrub or animate.
//!
//! Values live on a step grid anchored at `min`: every host-supplied value is stored as
//! `min + k * step` for some integer `k`, and lies within `[min, max]`. When `max` is not
//! itself on the grid, the largest grid value below it is the effective upper bound. An
//! in-range initial value is kept as authored; stepping moves it onto the grid.
//!
//! Two policies apply to host-supplied values:
//! - [`ControlPolicy::Clamp`] snaps to the nearest grid value and clamps into range.
//! - [`ControlPolicy::Reject`] fails for values off the grid or outside the range.
//!
//! Non-finite values fail under both policies.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// Relative tolerance when testing whether a value sits on the step grid.
const STEP_EPSILON: f64 = 1e-9;

/// A `{min, max, step}` range descriptor for one tunable property.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeControl {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// How out-of-range or off-grid values are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlPolicy {
    #[default]
    Clamp,
    Reject,
}

impl RangeControl {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Validates the range, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || !self.step.is_finite() {
            return Err(Error::InvalidConfig(
                "range control bounds and step must be finite".into(),
            ));
        }
        if self.min > self.max {
            return Err(Error::InvalidConfig(format!(
                "range control min {} exceeds max {}",
                self.min, self.max
            )));
        }
        if self.step <= 0.0 {
            return Err(Error::InvalidConfig("range control step must be > 0".into()));
        }
        Ok(())
    }

    /// Number of grid steps between `min` and the effective upper bound.
    pub fn step_count(&self) -> u64 {
        ((self.max - self.min) / self.step + STEP_EPSILON).floor() as u64
    }

    /// Largest grid value not above `max`.
    pub fn grid_max(&self) -> f64 {
        self.min + self.step_count() as f64 * self.step
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_on_grid(&self, value: f64) -> bool {
        let k = (value - self.min) / self.step;
        (k - k.round()).abs() <= STEP_EPSILON * k.abs().max(1.0)
    }

    /// Snaps a finite value to the nearest grid value and clamps into range.
    pub fn clamp(&self, value: f64) -> f64 {
        let k = ((value - self.min) / self.step).round();
        let k = k.clamp(0.0, self.step_count() as f64);
        self.min + k * self.step
    }

    fn ensure_finite(name: &str, value: f64) -> Result<()> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Error::ControlNotFinite {
                name: name.to_owned(),
                value,
            })
        }
    }

    /// Accepts `value` only if it is in range and on the grid, returning the exact grid value.
    pub fn check(&self, name: &str, value: f64) -> Result<f64> {
        Self::ensure_finite(name, value)?;
        if !self.contains(value) {
            return Err(Error::ControlOutOfRange {
                name: name.to_owned(),
                value,
                min: self.min,
                max: self.max,
            });
        }
        if !self.is_on_grid(value) {
            return Err(Error::ControlOffStep {
                name: name.to_owned(),
                value,
                min: self.min,
                step: self.step,
            });
        }
        let k = ((value - self.min) / self.step).round();
        Ok(self.min + k * self.step)
    }

    /// Applies `policy` to a host-supplied value.
    pub fn apply(&self, name: &str, value: f64, policy: ControlPolicy) -> Result<f64> {
        Self::ensure_finite(name, value)?;
        match policy {
            ControlPolicy::Reject => self.check(name, value),
            ControlPolicy::Clamp => {
                let clamped = self.clamp(value);
                if clamped != value {
                    warn!(
                        "Control '{}' value {} adjusted to {}.",
                        name, value, clamped
                    );
                }
                Ok(clamped)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct ControlEntry {
    name: String,
    control: RangeControl,
    value: f64,
}

/// Live values for a descriptor's controls, in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlValues {
    entries: Vec<ControlEntry>,
}

impl ControlValues {
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

    /// Adds a control with an initial value. An in-range value is kept as given; anything
    /// else is clamped onto the grid, and non-finite values start at `min`.
    pub fn insert(&mut self, name: impl Into<String>, control: RangeControl, initial: f64) {
        let name = name.into();
        let value = if !initial.is_finite() {
            control.min
        } else if control.contains(initial) {
            initial
        } else {
            control.clamp(initial)
        };
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.control = control;
                entry.value = value;
            }
            None => self.entries.push(ControlEntry {
                name,
                control,
                value,
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entry(name).map(|e| e.value)
    }

    pub fn control(&self, name: &str) -> Option<&RangeControl> {
        self.entry(name).map(|e| &e.control)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|e| (e.name.as_str(), e.value))
    }

    /// Sets a live value under `policy`, returning the stored value.
    pub fn set(&mut self, name: &str, value: f64, policy: ControlPolicy) -> Result<f64> {
        let entry = self.entry_mut(name)?;
        let accepted = entry.control.apply(name, value, policy)?;
        entry.value = accepted;
        Ok(accepted)
    }

    /// Advances to the next grid value above the current one, wrapping back to `min` after
    /// the upper bound.
    pub fn step_forward(&mut self, name: &str) -> Result<f64> {
        let entry = self.entry_mut(name)?;
        let control = entry.control;
        let k = ((entry.value - control.min) / control.step + STEP_EPSILON).floor() + 1.0;
        entry.value = if k > control.step_count() as f64 {
            control.min
        } else {
            control.min + k.max(0.0) * control.step
        };
        Ok(entry.value)
    }

    fn entry(&self, name: &str) -> Option<&ControlEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    fn entry_mut(&mut self, name: &str) -> Result<&mut ControlEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| Error::UnknownControl {
                name: name.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trips_control() -> RangeControl {
        RangeControl::new(0.0, 1200.0, 12.0)
    }

    #[test]
    fn validate_rejects_inverted_or_degenerate_ranges() {
        assert!(trips_control().validate().is_ok());
        assert!(RangeControl::new(10.0, 0.0, 1.0).validate().is_err());
        assert!(RangeControl::new(0.0, 10.0, 0.0).validate().is_err());
        assert!(RangeControl::new(0.0, 10.0, -1.0).validate().is_err());
        assert!(RangeControl::new(f64::NAN, 10.0, 1.0).validate().is_err());
        assert!(RangeControl::new(0.0, f64::INFINITY, 1.0).validate().is_err());
    }

    #[test]
    fn clamp_snaps_to_step_grid_within_bounds() {
        let c = trips_control();
        assert_eq!(c.clamp(500.0), 504.0);
        assert_eq!(c.clamp(17.0), 12.0);
        assert_eq!(c.clamp(-50.0), 0.0);
        assert_eq!(c.clamp(5000.0), 1200.0);
    }

    #[test]
    fn clamp_never_exceeds_grid_max_when_max_is_off_grid() {
        let c = RangeControl::new(0.0, 100.0, 12.0);
        assert_eq!(c.grid_max(), 96.0);
        assert_eq!(c.clamp(100.0), 96.0);
    }

    #[test]
    fn clamped_values_are_step_multiples_in_range() {
        let c = trips_control();
        let mut v = -100.0;
        while v < 1400.0 {
            let out = c.clamp(v);
            assert!(c.contains(out), "{out} out of range");
            assert!(c.is_on_grid(out), "{out} off grid");
            v += 7.3;
        }
    }

    #[test]
    fn check_rejects_out_of_range_and_off_step() {
        let c = trips_control();
        assert_eq!(c.check("currentTime", 600.0).unwrap(), 600.0);
        assert_eq!(c.check("currentTime", 0.0).unwrap(), 0.0);
        assert_eq!(c.check("currentTime", 1200.0).unwrap(), 1200.0);
        assert!(matches!(
            c.check("currentTime", 1212.0),
            Err(Error::ControlOutOfRange { .. })
        ));
        assert!(matches!(
            c.check("currentTime", -12.0),
            Err(Error::ControlOutOfRange { .. })
        ));
        assert!(matches!(
            c.check("currentTime", 500.0),
            Err(Error::ControlOffStep { .. })
        ));
        assert!(matches!(
            c.check("currentTime", f64::NAN),
            Err(Error::ControlNotFinite { .. })
        ));
    }

    #[test]
    fn check_returns_exact_grid_value_near_grid() {
        let c = trips_control();
        assert_eq!(c.check("currentTime", 600.000_000_000_1).unwrap(), 600.0);

        let mut values = ControlValues::new();
        values.insert("currentTime", c, 0.0);
        values
            .set("currentTime", 1199.999_999_999_9, ControlPolicy::Reject)
            .unwrap();
        assert_eq!(values.get("currentTime"), Some(1200.0));
    }

    #[test]
    fn non_finite_values_fail_under_both_policies() {
        let mut values = ControlValues::new();
        values.insert("currentTime", trips_control(), 600.0);

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            for policy in [ControlPolicy::Clamp, ControlPolicy::Reject] {
                let err = values.set("currentTime", bad, policy).unwrap_err();
                assert!(
                    matches!(err, Error::ControlNotFinite { ref name, .. } if name == "currentTime"),
                    "{bad} under {policy:?}"
                );
            }
        }
        assert_eq!(values.get("currentTime"), Some(600.0));
    }

    #[test]
    fn values_follow_policy_and_reject_unknown_names() {
        let mut values = ControlValues::new();
        values.insert("trailLength", trips_control(), 600.0);

        assert_eq!(
            values
                .set("trailLength", 1300.0, ControlPolicy::Clamp)
                .unwrap(),
            1200.0
        );
        assert!(values
            .set("trailLength", 1300.0, ControlPolicy::Reject)
            .is_err());
        assert_eq!(values.get("trailLength"), Some(1200.0));

        let err = values
            .set("speed", 1.0, ControlPolicy::Clamp)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownControl { ref name } if name == "speed"));
    }

    #[test]
    fn insert_keeps_in_range_initial_value() {
        let mut values = ControlValues::new();
        values.insert("currentTime", trips_control(), 500.0);
        values.insert("trailLength", trips_control(), 5000.0);
        values.insert("speed", trips_control(), f64::NAN);
        assert_eq!(values.get("currentTime"), Some(500.0));
        assert_eq!(values.get("trailLength"), Some(1200.0));
        assert_eq!(values.get("speed"), Some(0.0));
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn step_forward_moves_off_grid_value_onto_grid() {
        let mut values = ControlValues::new();
        values.insert("currentTime", trips_control(), 500.0);
        assert_eq!(values.step_forward("currentTime").unwrap(), 504.0);
        assert_eq!(values.step_forward("currentTime").unwrap(), 516.0);
    }

    #[test]
    fn step_forward_wraps_past_upper_bound() {
        let mut values = ControlValues::new();
        values.insert("currentTime", trips_control(), 1188.0);
        assert_eq!(values.step_forward("currentTime").unwrap(), 1200.0);
        assert_eq!(values.step_forward("currentTime").unwrap(), 0.0);
        assert_eq!(values.step_forward("currentTime").unwrap(), 12.0);
    }
}
