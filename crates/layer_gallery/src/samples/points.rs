//! Point collections: named points of interest and large bare point clouds.
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::catalog::value::Record;
use crate::samples::{rand01, GeoBounds, SF_BOUNDS};

const STREETS: [&str; 8] = [
    "Market St",
    "Mission St",
    "Valencia St",
    "Geary Blvd",
    "Divisadero St",
    "Irving St",
    "Columbus Ave",
    "Folsom St",
];

/// Uniform i.i.d. named points inside `bounds`.
pub fn generate_points(count: usize, bounds: &GeoBounds, rng: &mut dyn RngCore) -> Vec<Record> {
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let u = rand01(rng);
        let v = rand01(rng);
        let street = STREETS[(rng.next_u32() as usize) % STREETS.len()];
        out.push(Record::Point {
            coordinates: bounds.lerp(u, v),
            address: format!("{} {}", 100 + i, street),
        });
    }
    out
}

/// Uniform bare positions over the San Francisco bounds, seeded for repeatability.
pub fn generate_positions(count: usize, seed: u64) -> Vec<Record> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let u = rand01(&mut rng);
        let v = rand01(&mut rng);
        out.push(Record::Position(SF_BOUNDS.lerp(u, v)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_for_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_points(0, &SF_BOUNDS, &mut rng).is_empty());
        assert!(generate_positions(0, 1).is_empty());
    }

    #[test]
    fn count_and_bounds_are_respected() {
        let mut rng = StdRng::seed_from_u64(42);
        let pts = generate_points(200, &SF_BOUNDS, &mut rng);
        assert_eq!(pts.len(), 200);
        for p in &pts {
            assert!(matches!(p, Record::Point { .. }));
            assert!(SF_BOUNDS.contains(p.position().unwrap()));
        }
    }

    #[test]
    fn positions_are_deterministic_for_same_seed() {
        let a = generate_positions(64, 9);
        let b = generate_positions(64, 9);
        let c = generate_positions(64, 10);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().all(|r| matches!(r, Record::Position(_))));
    }
}
