//! Catalog data model: layer kinds, descriptors, property mappings, data sources,
//! interactive controls, and the category registry.
pub mod controls;
pub mod data;
pub mod descriptor;
pub mod kind;
pub mod prop;
pub mod registry;
pub mod selection;
pub mod value;

pub use controls::{ControlPolicy, ControlValues, RangeControl};
pub use data::{DataSource, Producer};
pub use descriptor::ExampleDescriptor;
pub use kind::{LayerFamily, LayerKind};
pub use prop::{Accessor, AccessorContext, Determinism, Prop, Props};
pub use registry::{catalog, Catalog, Category};
pub use selection::Selection;
pub use value::{Record, Value, Waypoint};
