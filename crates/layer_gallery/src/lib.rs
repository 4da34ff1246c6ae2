#![forbid(unsafe_code)]
//! layer_gallery: a static catalog of geospatial layer examples for gallery hosts.
//!
//! Modules:
//! - catalog: layer kinds, example descriptors, property accessors, data sources, range
//!   controls, and the category registry
//! - builtin: the built-in mesh, geo, and aggregation examples
//! - samples: seeded synthetic sample data (points, arcs, S2 cells, hex disks, trips)
//! - assets: asset loader registration and image-based lighting environments
//!
//! Rendering is out of scope: a host picks a descriptor from [`catalog::catalog`] and hands
//! it, with any live control values, to its rendering engine.
pub mod assets;
pub mod builtin;
pub mod catalog;
pub mod error;
pub mod samples;

/// Convenient re-exports for common types. Import with `use layer_gallery::prelude::*;`.
pub mod prelude {
    pub use crate::assets::{
        default_loaders, AssetFormat, CubeFace, EnvironmentMap, ImageBasedLighting,
        LoaderRegistry,
    };
    pub use crate::catalog::{
        catalog, Accessor, AccessorContext, Catalog, Category, ControlPolicy, ControlValues,
        DataSource, Determinism, ExampleDescriptor, LayerFamily, LayerKind, Producer, Prop,
        Props, RangeControl, Record, Selection, Value, Waypoint,
    };
    pub use crate::error::{Error, Result};
    pub use crate::samples::{GeoBounds, HexCell, SampleConfig, SampleSet, SF_BOUNDS};
}
