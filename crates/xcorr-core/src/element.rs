// crates/xcorr-core/src/element.rs

use std::fmt::{Debug, Display};
use std::ops::Neg;

use num_complex::{Complex, Complex64};

use crate::config::ElementKind;

/// Scalar type of a correlation-matrix element.
///
/// Implemented for `f32` (floating results, and fixed-point results carried
/// in float registers) and `i32` (extended-integer accumulation).
pub trait AccumScalar:
    Copy + Default + PartialEq + Debug + Display + Neg<Output = Self> + Send + Sync + 'static
{
    const KIND: ElementKind;

    fn to_f64(self) -> f64;

    /// Convert back from an `f64` accumulator. Integer types round to nearest.
    fn from_f64(v: f64) -> Self;

    /// Round to the nearest integer, ties away from zero.
    fn round_nearest(self) -> Self;

    fn write_le(self, out: &mut Vec<u8>);
}

impl AccumScalar for f32 {
    const KIND: ElementKind = ElementKind::Float32;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn round_nearest(self) -> Self {
        self.round()
    }

    fn write_le(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

impl AccumScalar for i32 {
    const KIND: ElementKind = ElementKind::Int32;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        // `as` saturates at the i32 bounds.
        v.round() as i32
    }

    #[inline]
    fn round_nearest(self) -> Self {
        self
    }

    fn write_le(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

#[inline]
pub fn conj<T: AccumScalar>(v: Complex<T>) -> Complex<T> {
    Complex::new(v.re, -v.im)
}

#[inline]
pub fn to_c64<T: AccumScalar>(v: Complex<T>) -> Complex64 {
    Complex64::new(v.re.to_f64(), v.im.to_f64())
}

#[inline]
pub fn from_c64<T: AccumScalar>(v: Complex64) -> Complex<T> {
    Complex::new(T::from_f64(v.re), T::from_f64(v.im))
}
