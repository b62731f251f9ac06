//! Per-page-view state that owns the inputs to the layout engine.
//!
//! The session keeps parameters, seed and the drag-to-front bookkeeping. The
//! engine stays pure; every change here is followed by a full recompute
//! through [`PileSession::layout`].

use crate::config::ConfigSnapshot;
use crate::constants::DRAG_Z_START;
use crate::layout::{compute_layout, pile_height_vh, PhotoSlot, ResponsiveWidths};
use crate::params::{ParamKey, PileParams};
use crate::theme::Theme;
use fnv::FnvHashMap;

#[derive(Clone, Debug)]
pub struct PileSession {
    pub params: PileParams,
    seed: i64,
    theme: Theme,
    photo_count: usize,
    // index -> z-index assigned by dragging, cleared on reshuffle
    drag_z: FnvHashMap<usize, i64>,
    // last z handed out; only a new session starts it over
    drag_counter: i64,
}

impl PileSession {
    pub fn new(theme: Theme, photo_count: usize) -> Self {
        Self {
            params: PileParams::default(),
            seed: 0,
            theme,
            photo_count,
            drag_z: FnvHashMap::default(),
            drag_counter: DRAG_Z_START,
        }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn photo_count(&self) -> usize {
        self.photo_count
    }

    /// Replace the photo set size. Drag overrides refer to old indices and are dropped.
    pub fn set_photo_count(&mut self, count: usize) {
        if count != self.photo_count {
            self.photo_count = count;
            self.drag_z.clear();
        }
    }

    /// Advance the seed by the photo count and forget dragged stacking.
    pub fn reshuffle(&mut self) -> i64 {
        self.seed = self.seed.wrapping_add(self.photo_count as i64);
        self.drag_z.clear();
        log::debug!("[session] reshuffle -> seed={}", self.seed);
        self.seed
    }

    /// Lift photo `index` above everything dragged before it.
    pub fn bring_to_front(&mut self, index: usize) -> i64 {
        self.drag_counter += 1;
        self.drag_z.insert(index, self.drag_counter);
        self.drag_counter
    }

    pub fn drag_override(&self, index: usize) -> Option<i64> {
        self.drag_z.get(&index).copied()
    }

    /// Effective z-index for a photo: its drag override, else the hashed stack index.
    pub fn stack_index(&self, index: usize, slot: &PhotoSlot) -> i64 {
        self.drag_override(index).unwrap_or(slot.stack_index)
    }

    pub fn set_param(&mut self, key: ParamKey, value: f64) {
        self.params.set(key, value);
    }

    pub fn apply_slider(&mut self, key: ParamKey, raw: f64) {
        self.params.apply_slider(key, raw);
    }

    pub fn reset_params(&mut self) {
        self.params = PileParams::default();
    }

    pub fn layout(&self) -> Vec<PhotoSlot> {
        compute_layout(self.photo_count, self.theme.offset(), self.seed, &self.params)
    }

    pub fn pile_height_vh(&self) -> f64 {
        pile_height_vh(self.photo_count, &self.params)
    }

    pub fn widths(&self) -> ResponsiveWidths {
        ResponsiveWidths::from_params(&self.params)
    }

    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot::new(self.params, self.seed)
    }

    /// Adopt a saved configuration. Drag overrides belong to the old layout.
    pub fn restore(&mut self, snapshot: &ConfigSnapshot) {
        self.params = snapshot.params;
        self.seed = snapshot.seed;
        self.drag_z.clear();
        log::debug!("[session] restored config seed={}", self.seed);
    }
}
