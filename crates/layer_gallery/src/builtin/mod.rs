//! The built-in example catalog.
//!
//! Categories appear in menu order: mesh layers, geo layers, then the experimental
//! aggregation layers. Descriptors share the process-wide sample collections from
//! [`crate::samples`]; accessors that draw from the random source are registered with
//! [`ExampleDescriptor::with_randomized_accessor`].
use rand::RngCore;

use crate::catalog::prop::AccessorContext;
use crate::catalog::value::{Record, Value};
use crate::catalog::{Catalog, Category, ExampleDescriptor};
use crate::samples::rand01;

mod geo;
mod grid;
mod mesh;

pub const MESH_LAYERS: &str = "Mesh Layers";
pub const GEO_LAYERS: &str = "Geo Layers";
pub const EXPERIMENTAL_LAYERS: &str = "Experimental Core Layers";

/// Builds the built-in catalog. Prefer [`crate::catalog::catalog`], which builds it once.
pub fn builtin_catalog() -> Catalog {
    Catalog::new()
        .with_category(category(MESH_LAYERS, mesh::examples()))
        .with_category(category(GEO_LAYERS, geo::examples()))
        .with_category(category(EXPERIMENTAL_LAYERS, grid::examples()))
}

fn category(label: &str, examples: Vec<(&'static str, ExampleDescriptor)>) -> Category {
    examples
        .into_iter()
        .fold(Category::new(label), |c, (name, d)| c.with_example(name, d))
}

/// Position of a point-like record.
pub(crate) fn position_of(record: &Record, _ctx: &AccessorContext) -> Option<Value> {
    match record {
        Record::Point { coordinates, .. } => Some(Value::position(*coordinates)),
        Record::Position(p) => Some(Value::position(*p)),
        _ => None,
    }
}

/// An opaque RGB color with random channels.
pub(crate) fn random_color(
    _record: &Record,
    _ctx: &AccessorContext,
    rng: &mut dyn RngCore,
) -> Option<Value> {
    Some(Value::Vector(vec![
        rand01(rng) * 255.0,
        rand01(rng) * 255.0,
        rand01(rng) * 255.0,
    ]))
}

/// A random elevation in [0, 1000).
pub(crate) fn random_elevation(
    _record: &Record,
    _ctx: &AccessorContext,
    rng: &mut dyn RngCore,
) -> Option<Value> {
    Some(Value::Number(rand01(rng) * 1000.0))
}
