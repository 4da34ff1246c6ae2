//! S2 cell tokens for the S2 layer example.
//!
//! Cells are children of one level-8 parent cell over San Francisco. A cell id at level `L`
//! has its lowest set bit at position `2 * (30 - L)`; a token is the id in hex with trailing
//! zeros removed.
use rand::RngCore;

use crate::catalog::value::Record;
use crate::samples::rand01;

/// Level-8 parent cell covering the San Francisco sample area.
pub const SF_PARENT_CELL: u64 = 0x8085_1000_0000_0000;
const PARENT_LEVEL: u32 = 8;
/// Level of the generated child cells.
pub const CHILD_LEVEL: u32 = 12;
/// Number of distinct children at [`CHILD_LEVEL`].
pub const MAX_CELLS: usize = 1 << (2 * (CHILD_LEVEL - PARENT_LEVEL));

#[inline]
fn lsb_for_level(level: u32) -> u64 {
    1u64 << (2 * (30 - level))
}

/// Id of the `k`-th child of `parent` at `child_level`, in Hilbert order.
pub fn child_id(parent: u64, parent_level: u32, child_level: u32, k: u64) -> u64 {
    let base = parent - lsb_for_level(parent_level);
    base + (2 * k + 1) * lsb_for_level(child_level)
}

/// Hex token for a cell id.
pub fn token(id: u64) -> String {
    let hex = format!("{id:016x}");
    let trimmed = hex.trim_end_matches('0');
    if trimmed.is_empty() {
        "X".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// The first `count` child cells of [`SF_PARENT_CELL`], each with a random value in [0, 1).
pub fn generate_cells(count: usize, rng: &mut dyn RngCore) -> Vec<Record> {
    (0..count.min(MAX_CELLS) as u64)
        .map(|k| Record::S2Cell {
            token: token(child_id(SF_PARENT_CELL, PARENT_LEVEL, CHILD_LEVEL, k)),
            value: rand01(rng),
        })
        .collect()
}
