//! Mesh layer examples: simple meshes and glTF scene graphs.
use rand::RngCore;

use crate::assets::ImageBasedLighting;
use crate::builtin::{position_of, random_color};
use crate::catalog::prop::AccessorContext;
use crate::catalog::value::{Record, Value};
use crate::catalog::{DataSource, ExampleDescriptor, LayerKind};
use crate::samples::{self, rand01};

pub const CUBE_MESH_URL: &str = "https://raw.githubusercontent.com/uber-web/loaders.gl/e8e7f724cc1fc1d5882125b13e672e44e5ada14e/modules/ply/test/data/cube_att.ply";
pub const DUCK_URL: &str = "https://raw.githubusercontent.com/KhronosGroup/glTF-Sample-Models/master/2.0/Duck/glTF-Binary/Duck.glb";
pub const DAMAGED_HELMET_URL: &str = "https://raw.githubusercontent.com/KhronosGroup/glTF-Sample-Models/master/2.0/DamagedHelmet/glTF-Binary/DamagedHelmet.glb";

/// Column-major 4x4 transform with random rotation/scale terms in [-2, 2) and a random
/// z translation in [0, 10000).
fn random_transform_matrix(
    _record: &Record,
    _ctx: &AccessorContext,
    rng: &mut dyn RngCore,
) -> Option<Value> {
    let mut m = Vec::with_capacity(16);
    for _ in 0..3 {
        for _ in 0..3 {
            m.push(rand01(rng) * 4.0 - 2.0);
        }
        m.push(0.0);
    }
    m.extend([0.0, 0.0, rand01(rng) * 10000.0, 1.0]);
    Some(Value::Vector(m))
}

fn random_orientation(
    _record: &Record,
    _ctx: &AccessorContext,
    rng: &mut dyn RngCore,
) -> Option<Value> {
    Some(Value::Vector(vec![
        rand01(rng) * 360.0,
        rand01(rng) * 360.0,
        rand01(rng) * 360.0,
    ]))
}

fn random_altitude(
    _record: &Record,
    _ctx: &AccessorContext,
    rng: &mut dyn RngCore,
) -> Option<Value> {
    Some(Value::Vector(vec![0.0, 0.0, rand01(rng) * 10000.0]))
}

fn simple_mesh() -> ExampleDescriptor {
    ExampleDescriptor::new(LayerKind::SimpleMesh, DataSource::Static(samples::points()))
        .with_id("mesh-layer")
        .with_constant("mesh", CUBE_MESH_URL)
        .with_constant("sizeScale", 40.0)
        .with_accessor("getPosition", position_of)
        .with_randomized_accessor("getColor", random_color)
        .with_randomized_accessor("getTransformMatrix", random_transform_matrix)
}

fn scenegraph(id: &str, lighting: &str) -> ExampleDescriptor {
    ExampleDescriptor::new(LayerKind::Scenegraph, DataSource::Static(samples::points()))
        .with_id(id)
        .with_constant("pickable", true)
        .with_constant("sizeScale", 50.0)
        .with_constant("scenegraph", DUCK_URL)
        .with_accessor("getPosition", position_of)
        .with_randomized_accessor("getOrientation", random_orientation)
        .with_randomized_accessor("getTranslation", random_altitude)
        .with_constant("getScale", [1.0, 1.0, 1.0])
        .with_constant("_lighting", lighting)
}

fn scenegraph_pbr_ibl() -> ExampleDescriptor {
    ExampleDescriptor::new(
        LayerKind::Scenegraph,
        DataSource::Static(samples::ten_points()),
    )
    .with_id("scenegraph-layer-pbr-ibl")
    .with_constant("pickable", true)
    .with_constant("sizeScale", 50.0)
    .with_constant("scenegraph", DAMAGED_HELMET_URL)
    .with_accessor("getPosition", position_of)
    .with_constant("getOrientation", [0.0, 0.0, 90.0])
    .with_constant("getTranslation", [0.0, 0.0, 1000.0])
    .with_constant("getScale", [10.0, 10.0, 10.0])
    .with_constant("_lighting", "pbr")
    .with_constant(
        "_imageBasedLightingEnvironment",
        Value::Lighting(ImageBasedLighting::papermill()),
    )
}

pub(crate) fn examples() -> Vec<(&'static str, ExampleDescriptor)> {
    vec![
        ("SimpleMeshLayer", simple_mesh()),
        ("ScenegraphLayer", scenegraph("scenegraph-layer", "flat")),
        ("ScenegraphLayer (PBR)", scenegraph("scenegraph-layer-pbr", "pbr")),
        ("ScenegraphLayer (PBR+IBL)", scenegraph_pbr_ibl()),
    ]
}
