//! Geo layer examples: S2 cells, H3 hexagons, great circles, and trips.
use crate::builtin::random_elevation;
use crate::catalog::prop::AccessorContext;
use crate::catalog::value::{Record, Value};
use crate::catalog::{DataSource, ExampleDescriptor, LayerKind, RangeControl};
use crate::samples::hex::{grid_disk, grid_disk_around, HexCell, SF_ROOT_CELL};
use crate::samples::{self, TRIPS_EPOCH_MS};

/// Disk radius of the H3 cluster example.
pub const CLUSTER_RADIUS: u32 = 6;
/// Disk radius of the H3 hexagon example.
pub const HEXAGON_RADIUS: u32 = 4;

/// Range shared by the trips time controls.
pub const TRIPS_TIME_RANGE: RangeControl = RangeControl {
    min: 0.0,
    max: 1200.0,
    step: 12.0,
};

fn s2_token(record: &Record, _ctx: &AccessorContext) -> Option<Value> {
    match record {
        Record::S2Cell { token, .. } => Some(Value::Text(token.clone())),
        _ => None,
    }
}

fn s2_fill_color(record: &Record, _ctx: &AccessorContext) -> Option<Value> {
    match record {
        Record::S2Cell { value, .. } => Some(Value::Vector(vec![
            value * 255.0,
            (1.0 - value) * 255.0,
            (1.0 - value) * 128.0,
            128.0,
        ])),
        _ => None,
    }
}

fn cluster_hexagons(record: &Record, _ctx: &AccessorContext) -> Option<Value> {
    match record {
        Record::HexCell(cell) => Some(Value::Cells(grid_disk_around(cell, CLUSTER_RADIUS))),
        _ => None,
    }
}

fn hexagon_id(record: &Record, _ctx: &AccessorContext) -> Option<Value> {
    match record {
        Record::HexCell(cell) => Some(Value::Text(cell.to_string())),
        _ => None,
    }
}

/// Red to yellow ramp by position in the data sequence.
fn hexagon_color(_record: &Record, ctx: &AccessorContext) -> Option<Value> {
    Some(Value::Vector(vec![
        255.0,
        ctx.index_or_zero() as f64 * 5.0,
        0.0,
    ]))
}

fn arc_source(record: &Record, _ctx: &AccessorContext) -> Option<Value> {
    match record {
        Record::Arc { source, .. } => Some(Value::position(*source)),
        _ => None,
    }
}

fn arc_target(record: &Record, _ctx: &AccessorContext) -> Option<Value> {
    match record {
        Record::Arc { target, .. } => Some(Value::position(*target)),
        _ => None,
    }
}

/// Waypoints as `[lng, lat, t]` with `t` relative to [`TRIPS_EPOCH_MS`].
fn trip_path(record: &Record, _ctx: &AccessorContext) -> Option<Value> {
    match record {
        Record::Trip { waypoints } => Some(Value::Path(
            waypoints
                .iter()
                .map(|w| {
                    [
                        w.coordinates.x,
                        w.coordinates.y,
                        w.timestamp - TRIPS_EPOCH_MS,
                    ]
                })
                .collect(),
        )),
        _ => None,
    }
}

fn s2() -> ExampleDescriptor {
    ExampleDescriptor::new(LayerKind::S2, DataSource::Static(samples::s2_cells()))
        .with_constant("opacity", 0.6)
        .with_accessor("getS2Token", s2_token)
        .with_accessor("getFillColor", s2_fill_color)
        .with_randomized_accessor("getElevation", random_elevation)
        .with_constant("pickable", true)
}

fn h3_cluster() -> ExampleDescriptor {
    let data = vec![Record::HexCell(HexCell::root(SF_ROOT_CELL))];
    ExampleDescriptor::new(LayerKind::H3Cluster, DataSource::from_records(data))
        .with_accessor("getHexagons", cluster_hexagons)
        .with_constant("getLineWidth", 100.0)
        .with_constant("stroked", true)
        .with_constant("filled", false)
}

fn h3_hexagon() -> ExampleDescriptor {
    let data: Vec<Record> = grid_disk(SF_ROOT_CELL, HEXAGON_RADIUS)
        .into_iter()
        .map(Record::HexCell)
        .collect();
    ExampleDescriptor::new(LayerKind::H3Hexagon, DataSource::from_records(data))
        .with_accessor("getHexagon", hexagon_id)
        .with_accessor("getColor", hexagon_color)
        .with_randomized_accessor("getElevation", random_elevation)
}

fn great_circle() -> ExampleDescriptor {
    ExampleDescriptor::new(
        LayerKind::GreatCircle,
        DataSource::Static(samples::great_circles()),
    )
    .with_id("greatCircleLayer")
    .with_accessor("getSourcePosition", arc_source)
    .with_accessor("getTargetPosition", arc_target)
    .with_constant("getSourceColor", [64.0, 255.0, 0.0])
    .with_constant("getTargetColor", [0.0, 128.0, 200.0])
    .with_constant("widthMinPixels", 5.0)
    .with_constant("pickable", true)
}

fn trips() -> ExampleDescriptor {
    ExampleDescriptor::new(LayerKind::Trips, DataSource::Static(samples::sf_trips()))
        .with_id("trips-layer")
        .with_accessor("getPath", trip_path)
        .with_constant("getColor", [253.0, 128.0, 93.0])
        .with_constant("opacity", 0.8)
        .with_constant("widthMinPixels", 5.0)
        .with_constant("rounded", true)
        .with_constant("trailLength", 600.0)
        .with_constant("currentTime", 500.0)
        .with_control("currentTime", TRIPS_TIME_RANGE)
        .with_control("trailLength", TRIPS_TIME_RANGE)
}

pub(crate) fn examples() -> Vec<(&'static str, ExampleDescriptor)> {
    vec![
        ("S2Layer", s2()),
        ("H3ClusterLayer", h3_cluster()),
        ("H3HexagonLayer", h3_hexagon()),
        ("GreatCircleLayer", great_circle()),
        ("TripsLayer", trips()),
    ]
}
