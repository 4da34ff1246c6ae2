//! Source/target pairs for arc and great-circle layers.
use glam::DVec2;
use rand::RngCore;

use crate::catalog::value::Record;
use crate::samples::{rand01, rand_range, GeoBounds};

/// Latitude band for arc targets; keeps endpoints away from the poles.
const TARGET_LAT: (f64, f64) = (-60.0, 70.0);

/// Arcs from random sources inside `origin` to random targets around the globe.
pub fn generate_arcs(count: usize, origin: &GeoBounds, rng: &mut dyn RngCore) -> Vec<Record> {
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let source = origin.lerp(rand01(rng), rand01(rng));
        let target = DVec2::new(
            rand_range(rng, -180.0, 180.0),
            rand_range(rng, TARGET_LAT.0, TARGET_LAT.1),
        );
        out.push(Record::Arc { source, target });
    }
    out
}
