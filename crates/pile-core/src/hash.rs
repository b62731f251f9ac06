//! Stateless 32-bit bit mixer used for the "looks random" parts of a slot.
//!
//! The R2 sequence places photos evenly; rotation, jitter and stacking must
//! instead look unstructured, so they come from this finalizer. All arithmetic
//! wraps at 32 bits, which keeps the output identical to the browser build.

use crate::constants::{SALT_INDEX, SALT_SEED, SALT_THEME};

const GOLDEN_GAMMA: u32 = 0x9E37_79B9;
const MIX_MUL_1: u32 = 0x21F0_AAAD;
const MIX_MUL_2: u32 = 0x735A_2D97;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Mix a 32-bit value into a well-scrambled 32-bit value.
#[inline]
pub fn splitmix32(value: u32) -> u32 {
    let s = value.wrapping_add(GOLDEN_GAMMA);
    let mut t = s ^ (s >> 16);
    t = t.wrapping_mul(MIX_MUL_1);
    t ^= t >> 15;
    t = t.wrapping_mul(MIX_MUL_2);
    t ^ (t >> 15)
}

/// Map any integer to a float in `[0, 1)`.
///
/// Only the low 32 bits of `value` participate, matching two's-complement
/// truncation of the mixer base.
#[inline]
pub fn unit(value: i64) -> f64 {
    splitmix32(value as u32) as f64 / TWO_POW_32
}

/// Integer fed to the mixer for a photo; `+1` and `+2` give the other hashes.
#[inline]
pub fn mixer_base(index: usize, theme_offset: i64, seed: i64) -> i64 {
    (index as i64)
        .wrapping_mul(SALT_INDEX)
        .wrapping_add(theme_offset.wrapping_mul(SALT_THEME))
        .wrapping_add(seed.wrapping_mul(SALT_SEED))
}
