//! Scatter layout engine.
//!
//! Maps `(index, theme offset, seed, params)` to a [`PhotoSlot`]. Positions
//! come from the R2 sequence, everything that should look random comes from
//! the 32-bit mixer. Nothing here holds state: the same inputs always give a
//! bit-identical slot, which is what reshuffle and saved configs rely on.

use crate::constants::{
    CENTER, LEFT_MAX, LEFT_MIN, MOBILE_BREAKPOINT_PX, MOBILE_SIZE_FACTOR, MOBILE_WIDTH_MAX,
    STACK_LEVELS, TABLET_BREAKPOINT_PX, TABLET_SIZE_FACTOR, TABLET_WIDTH_MAX, TOP_MAX, TOP_MIN,
};
use crate::hash::{mixer_base, unit};
use crate::params::PileParams;
use crate::sequence::r2_point;
use serde::{Serialize, Serializer};
use std::fmt;

/// Frame shape of a print, cycled by photo index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Aspect {
    Portrait45,
    Portrait34,
    Square,
}

impl Aspect {
    pub const CYCLE: [Aspect; 3] = [Aspect::Portrait45, Aspect::Portrait34, Aspect::Square];

    /// CSS `aspect-ratio` value.
    pub fn as_css(self) -> &'static str {
        match self {
            Aspect::Portrait45 => "4/5",
            Aspect::Portrait34 => "3/4",
            Aspect::Square => "1/1",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl Serialize for Aspect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_css())
    }
}

#[inline]
pub fn compute_aspect(index: usize) -> Aspect {
    Aspect::CYCLE[index % Aspect::CYCLE.len()]
}

/// Raw per-photo inputs to the composition step.
///
/// - `qx`, `qy`: R2 base position in `[0, 1)`
/// - `h3`: rotation hash
/// - `h4`: horizontal scatter and stacking hash
/// - `h5`: vertical scatter hash
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhotoHashes {
    pub qx: f64,
    pub qy: f64,
    pub h3: f64,
    pub h4: f64,
    pub h5: f64,
}

pub fn photo_hashes(index: usize, theme_offset: i64, seed: i64) -> PhotoHashes {
    let (qx, qy) = r2_point((index as i64).wrapping_add(seed));
    let base = mixer_base(index, theme_offset, seed);
    PhotoHashes {
        qx,
        qy,
        h3: unit(base),
        h4: unit(base.wrapping_add(1)),
        h5: unit(base.wrapping_add(2)),
    }
}

/// Where and how one photo lies on the pile.
///
/// `left` / `top` are percentages of the pile box, `rotation_deg` is signed
/// degrees and `stack_index` is the hashed z-order in `1..=20`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoSlot {
    pub left: f64,
    pub top: f64,
    pub rotation_deg: f64,
    pub stack_index: i64,
    pub aspect: Aspect,
}

pub fn compute_slot(index: usize, theme_offset: i64, seed: i64, params: &PileParams) -> PhotoSlot {
    let PhotoHashes { qx, qy, h3, h4, h5 } = photo_hashes(index, theme_offset, seed);

    // Base position inside the canvas band
    let x_margin = (100.0 - params.canvas_width) / 2.0;
    let uniform_x = x_margin + qx * params.canvas_width;
    let uniform_y = qy * 100.0;

    let tf = params.tightness / 100.0;
    let tightened_x = uniform_x + (CENTER - uniform_x) * tf;
    let tightened_y = uniform_y + (CENTER - uniform_y) * tf;

    let left = clamp(
        tightened_x + (h4 - 0.5) * params.scatter * 2.0 + params.offset_x,
        LEFT_MIN,
        LEFT_MAX,
    );
    let top = clamp(
        tightened_y + (h5 - 0.5) * params.scatter * 2.0 + params.offset_y,
        TOP_MIN,
        TOP_MAX,
    );

    PhotoSlot {
        left,
        top,
        rotation_deg: (h3 - 0.5) * (params.rotation * 2.0),
        stack_index: (h4 * STACK_LEVELS).floor() as i64 + 1,
        aspect: compute_aspect(index),
    }
}

// max-then-min, so a NaN input lands on a bound instead of leaking through
#[inline]
fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    lo.max(hi.min(v))
}

/// Recompute every slot of the pile in one pass.
pub fn compute_layout(
    count: usize,
    theme_offset: i64,
    seed: i64,
    params: &PileParams,
) -> Vec<PhotoSlot> {
    (0..count)
        .map(|i| compute_slot(i, theme_offset, seed, params))
        .collect()
}

/// Total pile height in viewport-height percent.
#[inline]
pub fn pile_height_vh(count: usize, params: &PileParams) -> f64 {
    count as f64 * params.canvas_height
}

#[inline]
pub fn animation_delay_ms(index: usize, stagger: f64) -> f64 {
    index as f64 * stagger
}

/// Photo widths per breakpoint, in percent of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ResponsiveWidths {
    pub mobile: f64,
    pub tablet: f64,
    pub desktop: f64,
}

impl ResponsiveWidths {
    pub fn from_params(params: &PileParams) -> Self {
        Self {
            mobile: MOBILE_WIDTH_MAX.min(params.photo_size * MOBILE_SIZE_FACTOR),
            tablet: TABLET_WIDTH_MAX.min(params.photo_size * TABLET_SIZE_FACTOR),
            desktop: params.photo_size,
        }
    }

    /// Value for an `<img sizes>` attribute.
    pub fn sizes_attr(&self) -> String {
        format!(
            "(max-width: {MOBILE_BREAKPOINT_PX}px) {}vw, (max-width: {TABLET_BREAKPOINT_PX}px) {}vw, {}vw",
            self.mobile, self.tablet, self.desktop
        )
    }
}
