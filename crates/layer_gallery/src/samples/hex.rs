//! Hexagonal cell neighborhoods for the H3 examples.
//!
//! Cells are addressed in axial coordinates `(q, r)` relative to a root cell token. The engine
//! owns the real H3 indexing; these cells carry enough structure for the cluster and hexagon
//! examples (disk sizes, ring order, planar centers for previews).
use std::fmt;

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Resolution-8 root cell over San Francisco used by the H3 examples.
pub const SF_ROOT_CELL: &str = "882830829bfffff";
/// Approximate center of [`SF_ROOT_CELL`], longitude/latitude in degrees.
pub const SF_ROOT_CENTER: DVec2 = DVec2::new(-122.4177, 37.7740);
/// Approximate resolution-8 cell radius, in degrees.
pub const RES8_CELL_SIZE_DEG: f64 = 0.0041;

/// Axial directions, starting east and turning counter-clockwise.
const DIRECTIONS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// A hexagonal cell at axial offset `(q, r)` from a root cell.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexCell {
    pub root: String,
    pub q: i32,
    pub r: i32,
}

impl HexCell {
    pub fn new(root: impl Into<String>, q: i32, r: i32) -> Self {
        Self {
            root: root.into(),
            q,
            r,
        }
    }

    /// The root cell itself.
    pub fn root(token: impl Into<String>) -> Self {
        Self::new(token, 0, 0)
    }

    /// Grid distance in cells. Cells with different roots are not comparable.
    pub fn distance(&self, other: &HexCell) -> Option<u32> {
        if self.root != other.root {
            return None;
        }
        let dq = self.q - other.q;
        let dr = self.r - other.r;
        Some(((dq.abs() + dr.abs() + (dq + dr).abs()) / 2) as u32)
    }

    /// Neighbor in direction `dir` (taken modulo 6).
    pub fn neighbor(&self, dir: usize) -> HexCell {
        let (dq, dr) = DIRECTIONS[dir % 6];
        HexCell::new(self.root.clone(), self.q + dq, self.r + dr)
    }

    /// Planar center of a pointy-top hexagon with circumradius `size`, offset from `origin`.
    pub fn center(&self, origin: DVec2, size: f64) -> DVec2 {
        let sqrt3 = 3f64.sqrt();
        let x = size * (sqrt3 * self.q as f64 + sqrt3 * 0.5 * self.r as f64);
        let y = size * (1.5 * self.r as f64);
        origin + DVec2::new(x, y)
    }

    fn offset(&self, dq: i32, dr: i32, k: i32) -> HexCell {
        HexCell::new(self.root.clone(), self.q + dq * k, self.r + dr * k)
    }
}

impl fmt::Display for HexCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.q == 0 && self.r == 0 {
            f.write_str(&self.root)
        } else {
            write!(f, "{}@{},{}", self.root, self.q, self.r)
        }
    }
}

/// Number of cells within distance `k` of a cell.
pub fn disk_size(k: u32) -> usize {
    let k = k as usize;
    3 * k * (k + 1) + 1
}

/// Cells within distance `k` of `center`: the center first, then ring by ring.
pub fn grid_disk_around(center: &HexCell, k: u32) -> Vec<HexCell> {
    let mut out = Vec::with_capacity(disk_size(k));
    out.push(center.clone());
    for radius in 1..=k as i32 {
        let (sq, sr) = DIRECTIONS[4];
        let mut cell = center.offset(sq, sr, radius);
        for dir in 0..6 {
            for _ in 0..radius {
                out.push(cell.clone());
                cell = cell.neighbor(dir);
            }
        }
    }
    out
}

/// Cells within distance `k` of the root cell `token`.
pub fn grid_disk(token: &str, k: u32) -> Vec<HexCell> {
    grid_disk_around(&HexCell::root(token), k)
}
