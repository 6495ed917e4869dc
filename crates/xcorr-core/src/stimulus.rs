// crates/xcorr-core/src/stimulus.rs

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::NumericMode;
use crate::sample::{Sample, FIXED_SHIFT, LEVEL_MAX};

/// Standard deviation of the underlying Gaussian, in 4-bit levels.
pub const STDDEV: f64 = 2.5;

/// Stand-in for a zero uniform draw: half the smallest non-zero value the
/// 53-bit uniform generator can return.
pub const TINY_UNIFORM: f64 = 0.5 / (1u64 << 53) as f64;

/// Quantized complex Gaussian noise source.
///
/// Owns its RNG so runs are reproducible from the seed alone.
#[derive(Clone, Debug)]
pub struct StimulusGenerator {
    mode: NumericMode,
    rng: StdRng,
}

impl StimulusGenerator {
    pub fn new(mode: NumericMode, seed: u64) -> Self {
        Self {
            mode,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fill `buf` with independent samples.
    pub fn generate(&mut self, buf: &mut [Sample]) {
        for s in buf.iter_mut() {
            let (a, b) = self.gaussian_pair();
            *s = Sample::new(quantize(a, self.mode), quantize(b, self.mode));
        }
        tracing::debug!(samples = buf.len(), mode = ?self.mode, "stimulus generated");
    }

    /// Synthesize one period of `buf.len() / periods` samples and copy it
    /// verbatim into the following periods.
    ///
    /// Samples past the last whole period are generated fresh.
    pub fn generate_replicated(&mut self, buf: &mut [Sample], periods: usize) {
        if periods <= 1 || periods > buf.len() {
            self.generate(buf);
            return;
        }
        let period = buf.len() / periods;
        self.generate(&mut buf[..period]);
        for j in 1..periods {
            buf.copy_within(0..period, j * period);
        }
        let tail = periods * period;
        if tail < buf.len() {
            self.generate(&mut buf[tail..]);
        }
    }

    fn gaussian_pair(&mut self) -> (f64, f64) {
        let u1: f64 = self.rng.gen();
        let u2: f64 = self.rng.gen();
        box_muller(u1, u2)
    }
}

/// Box-Muller: two uniforms in `[0, 1)`, two independent N(0, STDDEV^2) out.
///
/// A zero draw is replaced by [`TINY_UNIFORM`] so the log stays finite.
pub fn box_muller(mut u1: f64, mut u2: f64) -> (f64, f64) {
    if u1 == 0.0 {
        u1 = TINY_UNIFORM;
    }
    if u2 == 0.0 {
        u2 = TINY_UNIFORM;
    }
    let r = STDDEV * (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * PI * u2;
    (r * theta.cos(), r * theta.sin())
}

/// Round to the nearest level, clamp to `±LEVEL_MAX`, and scale for `mode`.
pub fn quantize(x: f64, mode: NumericMode) -> i8 {
    let level = x.round().clamp(-(LEVEL_MAX as f64), LEVEL_MAX as f64) as i8;
    match mode {
        NumericMode::Float => level,
        NumericMode::Fixed => level << FIXED_SHIFT,
    }
}

/// Summary statistics of a sample buffer (both components pooled).
#[derive(Clone, Debug, PartialEq)]
pub struct StimulusStats {
    pub count: usize,
    pub min: i8,
    pub max: i8,
    pub mean: f64,
    /// RMS in 4-bit levels (fixed-point samples are unscaled first).
    pub rms_levels: f64,
    /// Occurrences of each level `-7..=7`, index `level + 7`.
    pub histogram: [u64; 15],
}

impl StimulusStats {
    pub fn of(samples: &[Sample], mode: NumericMode) -> Self {
        let scale = match mode {
            NumericMode::Float => 1,
            NumericMode::Fixed => 1i32 << FIXED_SHIFT,
        };
        let mut min = i8::MAX;
        let mut max = i8::MIN;
        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;
        let mut histogram = [0u64; 15];
        for s in samples {
            for v in [s.re, s.im] {
                min = min.min(v);
                max = max.max(v);
                let level = v as i32 / scale;
                sum += level as f64;
                sum_sq += (level * level) as f64;
                let bin = (level + LEVEL_MAX as i32).clamp(0, 14) as usize;
                histogram[bin] += 1;
            }
        }
        let n = (2 * samples.len()) as f64;
        if samples.is_empty() {
            min = 0;
            max = 0;
        }
        let (mean, rms_levels) = if n > 0.0 {
            (sum / n, (sum_sq / n).sqrt())
        } else {
            (0.0, 0.0)
        };
        Self {
            count: samples.len(),
            min,
            max,
            mean,
            rms_levels,
            histogram,
        }
    }
}
