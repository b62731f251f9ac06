//! R2 low-discrepancy sequence.
//!
//! An additive recurrence on the reciprocals of the plastic constant. Any
//! prefix of the sequence covers the unit square evenly, which matters when
//! only a few dozen photos are on the table.

use crate::constants::{R2_A1, R2_A2, R2_START};

#[inline]
pub fn frac(x: f64) -> f64 {
    x - x.floor()
}

/// The `n`-th point of the sequence, both coordinates in `[0, 1)`.
#[inline]
pub fn r2_point(n: i64) -> (f64, f64) {
    let n = n as f64;
    (frac(R2_START + n * R2_A1), frac(R2_START + n * R2_A2))
}
