//! Timestamped trips for the trips layer example.
use glam::DVec2;
use rand::RngCore;

use crate::catalog::value::{Record, Waypoint};
use crate::samples::{rand01, rand_range, GeoBounds};

/// Timestamp origin for sample trips, in milliseconds since the Unix epoch.
/// Paths are expressed relative to it so that times fall in the trips control range.
pub const TRIPS_EPOCH_MS: f64 = 1_554_772_579_000.0;
/// Time between consecutive waypoints, in path time units.
pub const WAYPOINT_INTERVAL: f64 = 10.0;
/// Latest trip start, in path time units after the epoch.
pub const MAX_START_OFFSET: f64 = 600.0;
/// Largest per-waypoint move, in degrees.
const MAX_STEP_DEG: f64 = 0.002;

/// Random-walk trips inside `bounds`.
pub fn generate_trips(
    count: usize,
    waypoints: usize,
    bounds: &GeoBounds,
    rng: &mut dyn RngCore,
) -> Vec<Record> {
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let start = rand01(rng) * MAX_START_OFFSET;
        let mut position = bounds.lerp(rand01(rng), rand01(rng));
        let mut heading = DVec2::new(
            rand_range(rng, -MAX_STEP_DEG, MAX_STEP_DEG),
            rand_range(rng, -MAX_STEP_DEG, MAX_STEP_DEG),
        );

        let mut path = Vec::with_capacity(waypoints);
        for i in 0..waypoints {
            path.push(Waypoint {
                coordinates: position,
                timestamp: TRIPS_EPOCH_MS + start + i as f64 * WAYPOINT_INTERVAL,
            });
            // Mostly keep heading; occasionally turn.
            if rand01(rng) < 0.2 {
                heading = DVec2::new(
                    rand_range(rng, -MAX_STEP_DEG, MAX_STEP_DEG),
                    rand_range(rng, -MAX_STEP_DEG, MAX_STEP_DEG),
                );
            }
            position = bounds.clamp(position + heading);
        }
        out.push(Record::Trip { waypoints: path });
    }
    out
}
