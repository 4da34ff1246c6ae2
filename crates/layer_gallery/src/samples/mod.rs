//! Synthetic sample data for the built-in examples.
//!
//! Every collection is generated from a seeded random source, so equal [`SampleConfig`]s yield
//! equal data. The default collections are generated once per process and shared:
//! - [`points`], [`ten_points`]: named points around San Francisco
//! - [`great_circles`]: source/target pairs from San Francisco to the rest of the world
//! - [`s2_cells`]: S2 cell tokens with normalized values
//! - [`sf_trips`]: timestamped paths for the trips layer
//!
//! Large point clouds ([`points_1m`], [`points_5m`]) are never cached; they are meant to be
//! wrapped in a deferred [`crate::catalog::DataSource`].
use std::sync::{Arc, LazyLock};

use glam::DVec2;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::value::Record;
use crate::error::{Error, Result};

pub mod arcs;
pub mod hex;
pub mod points;
pub mod s2;
pub mod trips;

pub use hex::{grid_disk, HexCell};
pub use points::generate_positions;
pub use trips::TRIPS_EPOCH_MS;

/// Longitude/latitude rectangle, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl GeoBounds {
    pub const fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Maps unit coordinates `u, v` in [0, 1] into the rectangle.
    #[inline]
    pub fn lerp(&self, u: f64, v: f64) -> DVec2 {
        self.min + self.size() * DVec2::new(u, v)
    }

    pub fn clamp(&self, p: DVec2) -> DVec2 {
        p.clamp(self.min, self.max)
    }
}

/// Area covered by the San Francisco sample collections.
pub const SF_BOUNDS: GeoBounds = GeoBounds::new(
    DVec2::new(-122.52, 37.70),
    DVec2::new(-122.35, 37.82),
);

/// Generate a random float in the range [0, 1).
#[inline]
pub fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u32() as f64) / ((u32::MAX as f64) + 1.0)
}

/// Generate a random float in the range [lo, hi).
#[inline]
pub fn rand_range(rng: &mut dyn RngCore, lo: f64, hi: f64) -> f64 {
    lo + rand01(rng) * (hi - lo)
}

/// Sizes and seed for the sample collections.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct SampleConfig {
    /// Base seed; each collection derives its own stream from it.
    pub seed: u64,
    pub point_count: usize,
    pub arc_count: usize,
    pub s2_cell_count: usize,
    pub trip_count: usize,
    pub trip_waypoints: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            seed: 2019,
            point_count: 1000,
            arc_count: 100,
            s2_cell_count: 64,
            trip_count: 50,
            trip_waypoints: 60,
        }
    }
}

impl SampleConfig {
    /// Creates a new [`SampleConfig`] with the specified seed and default sizes.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    pub fn with_point_count(mut self, point_count: usize) -> Self {
        self.point_count = point_count;
        self
    }

    pub fn with_arc_count(mut self, arc_count: usize) -> Self {
        self.arc_count = arc_count;
        self
    }

    pub fn with_s2_cell_count(mut self, s2_cell_count: usize) -> Self {
        self.s2_cell_count = s2_cell_count;
        self
    }

    /// Sets the number of trips and waypoints per trip.
    pub fn with_trips(mut self, trip_count: usize, trip_waypoints: usize) -> Self {
        self.trip_count = trip_count;
        self.trip_waypoints = trip_waypoints;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.point_count < 10 {
            return Err(Error::InvalidConfig("point_count must be >= 10".into()));
        }
        if self.arc_count == 0 {
            return Err(Error::InvalidConfig("arc_count must be > 0".into()));
        }
        if self.s2_cell_count == 0 || self.s2_cell_count > s2::MAX_CELLS {
            return Err(Error::InvalidConfig(format!(
                "s2_cell_count must be in 1..={}",
                s2::MAX_CELLS
            )));
        }
        if self.trip_count == 0 || self.trip_waypoints < 2 {
            return Err(Error::InvalidConfig(
                "trip_count must be > 0 and trip_waypoints >= 2".into(),
            ));
        }
        Ok(())
    }

    fn rng(&self, stream: u64) -> StdRng {
        StdRng::seed_from_u64(self.seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

/// A full set of sample collections generated from one [`SampleConfig`].
#[derive(Clone, Debug)]
pub struct SampleSet {
    pub points: Arc<[Record]>,
    pub great_circles: Arc<[Record]>,
    pub s2_cells: Arc<[Record]>,
    pub sf_trips: Arc<[Record]>,
}

impl SampleSet {
    /// Validates `config` and generates every collection.
    pub fn generate(config: &SampleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &SampleConfig) -> Self {
        let points = points::generate_points(config.point_count, &SF_BOUNDS, &mut config.rng(1));
        let great_circles = arcs::generate_arcs(config.arc_count, &SF_BOUNDS, &mut config.rng(2));
        let s2_cells = s2::generate_cells(config.s2_cell_count, &mut config.rng(3));
        let sf_trips = trips::generate_trips(
            config.trip_count,
            config.trip_waypoints,
            &SF_BOUNDS,
            &mut config.rng(4),
        );

        debug!(
            "Generated samples | points: {} | arcs: {} | s2 cells: {} | trips: {}.",
            points.len(),
            great_circles.len(),
            s2_cells.len(),
            sf_trips.len()
        );

        Self {
            points: points.into(),
            great_circles: great_circles.into(),
            s2_cells: s2_cells.into(),
            sf_trips: sf_trips.into(),
        }
    }

    /// The first ten points, as a new shared collection.
    pub fn ten_points(&self) -> Arc<[Record]> {
        self.points.iter().take(10).cloned().collect()
    }
}

struct DefaultSamples {
    set: SampleSet,
    ten_points: Arc<[Record]>,
}

static DEFAULT_SAMPLES: LazyLock<DefaultSamples> = LazyLock::new(|| {
    // Default sizes always validate.
    let set = SampleSet::build(&SampleConfig::default());
    let ten_points = set.ten_points();
    DefaultSamples { set, ten_points }
});

pub fn points() -> Arc<[Record]> {
    Arc::clone(&DEFAULT_SAMPLES.set.points)
}

pub fn ten_points() -> Arc<[Record]> {
    Arc::clone(&DEFAULT_SAMPLES.ten_points)
}

pub fn great_circles() -> Arc<[Record]> {
    Arc::clone(&DEFAULT_SAMPLES.set.great_circles)
}

pub fn s2_cells() -> Arc<[Record]> {
    Arc::clone(&DEFAULT_SAMPLES.set.s2_cells)
}

pub fn sf_trips() -> Arc<[Record]> {
    Arc::clone(&DEFAULT_SAMPLES.set.sf_trips)
}

/// One million bare positions. Generated on every call.
pub fn points_1m() -> Vec<Record> {
    generate_positions(1_000_000, 0x1_000_000)
}

/// Five million bare positions. Generated on every call.
pub fn points_5m() -> Vec<Record> {
    generate_positions(5_000_000, 0x5_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRng {
        value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    #[test]
    fn rand01_stays_in_half_open_unit_interval() {
        for value in [0, 1, u32::MAX / 2, u32::MAX - 1, u32::MAX] {
            let r = rand01(&mut FixedRng { value });
            assert!((0.0..1.0).contains(&r), "rand01({value}) = {r}");
        }
        assert_eq!(rand01(&mut FixedRng { value: 0 }), 0.0);
    }

    #[test]
    fn rand_range_maps_into_bounds() {
        let lo = rand_range(&mut FixedRng { value: 0 }, 10.0, 20.0);
        let hi = rand_range(&mut FixedRng { value: u32::MAX }, 10.0, 20.0);
        assert_eq!(lo, 10.0);
        assert!(hi < 20.0 && hi > 19.99);
    }

    #[test]
    fn config_validation_rejects_degenerate_sizes() {
        assert!(SampleConfig::default().validate().is_ok());
        assert!(SampleConfig::new(1).with_point_count(3).validate().is_err());
        assert!(SampleConfig::new(1).with_arc_count(0).validate().is_err());
        assert!(SampleConfig::new(1)
            .with_s2_cell_count(s2::MAX_CELLS + 1)
            .validate()
            .is_err());
        assert!(SampleConfig::new(1).with_trips(5, 1).validate().is_err());
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let config = SampleConfig::new(42).with_point_count(20);
        let a = SampleSet::generate(&config).unwrap();
        let b = SampleSet::generate(&config).unwrap();
        assert_eq!(&*a.points, &*b.points);
        assert_eq!(&*a.sf_trips, &*b.sf_trips);

        let c = SampleSet::generate(&SampleConfig::new(43).with_point_count(20)).unwrap();
        assert_ne!(&*a.points, &*c.points);
    }

    #[test]
    fn default_collections_are_shared_and_sized() {
        assert!(Arc::ptr_eq(&points(), &points()));
        assert_eq!(points().len(), SampleConfig::default().point_count);
        assert_eq!(ten_points().len(), 10);
        assert_eq!(&ten_points()[..], &points()[..10]);
        assert_eq!(great_circles().len(), SampleConfig::default().arc_count);
        assert_eq!(s2_cells().len(), SampleConfig::default().s2_cell_count);
        assert_eq!(sf_trips().len(), SampleConfig::default().trip_count);
    }

    #[test]
    fn default_points_fall_inside_sf_bounds() {
        for record in points().iter() {
            let p = record.position().unwrap();
            assert!(SF_BOUNDS.contains(p), "{p:?} outside bounds");
        }
    }
}
