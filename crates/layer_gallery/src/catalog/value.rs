//! Data records fed to layers and the property values derived from them.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::assets::ImageBasedLighting;
use crate::samples::hex::HexCell;

/// A timestamped position along a trip.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Waypoint {
    /// Longitude/latitude in degrees.
    pub coordinates: DVec2,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
}

/// One item of a layer's data sequence.
///
/// Positions are longitude/latitude pairs in degrees.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Record {
    /// A named point of interest.
    Point { coordinates: DVec2, address: String },
    /// A bare position, used for large synthetic point clouds.
    Position(DVec2),
    /// A source/target pair drawn as an arc or great circle.
    Arc { source: DVec2, target: DVec2 },
    /// An S2 cell token with a normalized value in [0, 1].
    S2Cell { token: String, value: f64 },
    /// A hexagonal grid cell.
    HexCell(HexCell),
    /// A sequence of timestamped waypoints.
    Trip { waypoints: Vec<Waypoint> },
}

impl Record {
    /// Primary position of the record, if it has one.
    pub fn position(&self) -> Option<DVec2> {
        match self {
            Record::Point { coordinates, .. } => Some(*coordinates),
            Record::Position(p) => Some(*p),
            Record::Arc { source, .. } => Some(*source),
            Record::Trip { waypoints } => waypoints.first().map(|w| w.coordinates),
            Record::S2Cell { .. } | Record::HexCell(_) => None,
        }
    }
}

/// A visual property value handed to the rendering engine.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Text(String),
    /// Fixed-length numeric tuples: positions, colors, matrices.
    Vector(Vec<f64>),
    /// A path of `[x, y, t]` vertices.
    Path(Vec<[f64; 3]>),
    Cells(Vec<HexCell>),
    Lighting(ImageBasedLighting),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[f64]> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// A two-component vector from a position.
    pub fn position(p: DVec2) -> Self {
        Value::Vector(vec![p.x, p.y])
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(value: [f64; N]) -> Self {
        Value::Vector(value.to_vec())
    }
}
