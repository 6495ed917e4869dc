// crates/xcorr-core/src/sample.rs

use num_complex::{Complex, Complex64};

use crate::config::{Geometry, NumericMode};

/// One quantized complex input sample.
///
/// Float mode stores the 4-bit level `-7..=7` directly; fixed mode stores the
/// level shifted left by 4 (`-112..=112`, steps of 16).
pub type Sample = Complex<i8>;

/// Largest 4-bit level magnitude.
pub const LEVEL_MAX: i8 = 7;

/// Fixed-point samples are `level << FIXED_SHIFT`.
pub const FIXED_SHIFT: u32 = 4;

/// Inclusive component bound for samples generated under `mode`.
pub fn component_bound(mode: NumericMode) -> i8 {
    match mode {
        NumericMode::Float => LEVEL_MAX,
        NumericMode::Fixed => LEVEL_MAX << FIXED_SHIFT,
    }
}

/// Offset of `(t, f, station, pol)` in a sample buffer.
#[inline]
pub fn sample_index(g: &Geometry, t: usize, f: usize, station: usize, pol: usize) -> usize {
    ((t * g.nfrequency + f) * g.nstation + station) * g.npol + pol
}

#[inline]
pub fn to_c64(s: Sample) -> Complex64 {
    Complex64::new(s.re as f64, s.im as f64)
}
