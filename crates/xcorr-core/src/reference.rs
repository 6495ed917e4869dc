// crates/xcorr-core/src/reference.rs

use num_complex::{Complex, Complex64};

use crate::config::Geometry;
use crate::element::{from_c64, AccumScalar};
use crate::error::{expect_len, Result};
use crate::layout::index::{for_each_baseline, pol_index};
use crate::sample::{sample_index, to_c64, Sample};

/// Pulsar bin that time sample `t` folds into.
#[inline]
pub fn pulsar_bin(g: &Geometry, t: usize) -> usize {
    t % (g.npulsar + 1)
}

/// One correlator product `in0 * conj(in1)` written out in components.
#[inline]
pub fn cross_product(in0: Sample, in1: Sample) -> Complex64 {
    let a = to_c64(in0);
    let b = to_c64(in1);
    Complex64::new(a.re * b.re + a.im * b.im, a.im * b.re - a.re * b.im)
}

/// CPU cross-correlation of `samples` into a canonical triangular matrix.
///
/// Plane `bin * nfrequency + f` accumulates the time samples of frequency
/// `f` that fold into pulsar bin `bin`. Sums are carried in f64, which is
/// exact for 4-bit inputs at any realistic time length.
pub fn correlate<T: AccumScalar>(g: &Geometry, samples: &[Sample]) -> Result<Vec<Complex<T>>> {
    expect_len("sample buffer", g.sample_len(), samples.len())?;

    let mut out = vec![Complex::<T>::default(); g.canonical_len()];
    for_each_baseline(g, |plane, i, j, k| {
        let bin = plane / g.nfrequency;
        let f = plane % g.nfrequency;
        for p1 in 0..g.npol {
            for p2 in 0..g.npol {
                let mut sum = Complex64::new(0.0, 0.0);
                for t in (0..g.ntime).filter(|&t| pulsar_bin(g, t) == bin) {
                    let in0 = samples[sample_index(g, t, f, i, p1)];
                    let in1 = samples[sample_index(g, t, f, j, p2)];
                    sum += cross_product(in0, in1);
                }
                out[pol_index(g, k, p1, p2)] = from_c64(sum);
            }
        }
    });

    tracing::debug!(elements = out.len(), ntime = g.ntime, "reference correlation done");
    Ok(out)
}
