// crates/xcorr-core/src/swizzle.rs

use crate::config::Geometry;
use crate::error::{Result, XcError};
use crate::sample::{sample_index, Sample};

/// Time samples interleaved per output word.
pub const TIME_DEPTH: usize = 4;

/// Byte offset of component `c` (0 = re, 1 = im) of `(t, f, s, p)` in a
/// swizzled buffer.
#[inline]
pub fn swizzled_index(g: &Geometry, t: usize, f: usize, s: usize, p: usize, c: usize) -> usize {
    ((((t / TIME_DEPTH * g.nfrequency + f) * g.nstation + s) * g.npol + p) * 2 + c) * TIME_DEPTH
        + t % TIME_DEPTH
}

/// Reorder one pipeline block of input for the accelerator: real and
/// imaginary parts separated, and each group of four consecutive time
/// samples packed into one 4-byte word.
///
/// Reads the first `ntime_pipe` time samples of `input`.
pub fn swizzle(g: &Geometry, input: &[Sample]) -> Result<Vec<i8>> {
    let block = g.ntime_pipe * g.nfrequency * g.nstation * g.npol;
    if input.len() < block {
        return Err(XcError::Length {
            what: "swizzle input",
            expected: block,
            got: input.len(),
        });
    }
    if g.ntime_pipe % TIME_DEPTH != 0 {
        return Err(XcError::Validation(format!(
            "ntime_pipe must be a multiple of {TIME_DEPTH}, got {}",
            g.ntime_pipe
        )));
    }

    let mut out = vec![0i8; block * 2];
    for t in 0..g.ntime_pipe {
        for f in 0..g.nfrequency {
            for s in 0..g.nstation {
                for p in 0..g.npol {
                    let v = input[sample_index(g, t, f, s, p)];
                    out[swizzled_index(g, t, f, s, p, 0)] = v.re;
                    out[swizzled_index(g, t, f, s, p, 1)] = v.im;
                }
            }
        }
    }
    tracing::debug!(bytes = out.len(), "input swizzled");
    Ok(out)
}
