//! Fixed grid presentation ("memories on film").
//!
//! No randomness here: a short rotation table and the aspect cycle repeat
//! down the grid.

use crate::constants::{GRID_ROTATIONS, GRID_STAGGER_MS};
use crate::layout::{animation_delay_ms, compute_aspect, Aspect};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSlot {
    pub rotation_deg: f64,
    pub aspect: Aspect,
    pub delay_ms: f64,
}

pub fn grid_slot(index: usize) -> GridSlot {
    GridSlot {
        rotation_deg: GRID_ROTATIONS[index % GRID_ROTATIONS.len()],
        aspect: compute_aspect(index),
        delay_ms: animation_delay_ms(index, GRID_STAGGER_MS),
    }
}

pub fn grid_layout(count: usize) -> Vec<GridSlot> {
    (0..count).map(grid_slot).collect()
}
