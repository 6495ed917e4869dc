// crates/xcorr-core/src/check.rs

use std::io::Write;

use num_complex::{Complex, Complex64};

use crate::config::{CorrConfig, ElementKind};
use crate::element::{to_c64, AccumScalar};
use crate::error::{expect_len, Result};
use crate::layout::index::{canonical_baseline, pol_index};
use crate::reference::{cross_product, pulsar_bin};
use crate::sample::{sample_index, Sample};

/// Deviations kept in [`CheckReport::deviations`]; the rest are only counted
/// and written to the diagnostic sink.
pub const RETAINED_DEVIATIONS: usize = 64;

/// How much the check writes beyond the summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Deviation count and max error only.
    Summary,
    /// Every deviating element with both values.
    Deviations,
    /// Deviations plus the per-time-sample products behind each one.
    Products,
}

impl Verbosity {
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Summary,
            1 => Verbosity::Deviations,
            _ => Verbosity::Products,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Deviation {
    pub bin: usize,
    pub i: usize,
    pub j: usize,
    /// Canonical baseline slot including the bin offset.
    pub baseline: usize,
    pub p1: usize,
    pub p2: usize,
    pub index: usize,
    pub reference: Complex64,
    pub computed: Complex64,
    pub error: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CheckReport {
    pub tolerance: f64,
    pub element_kind: ElementKind,
    pub checked: usize,
    pub deviation_count: usize,
    pub max_error: f64,
    /// First [`RETAINED_DEVIATIONS`] deviations, in check order.
    pub deviations: Vec<Deviation>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.deviation_count == 0
    }
}

#[inline]
fn zabs(c: Complex64) -> f64 {
    (c.re * c.re + c.im * c.im).sqrt()
}

/// Relative error of `computed` against `reference`; absolute magnitude of
/// `computed` when the reference is exactly zero.
pub fn element_error(computed: Complex64, reference: Complex64) -> f64 {
    let r = zabs(reference);
    if r == 0.0 {
        zabs(computed)
    } else {
        zabs(reference - computed) / r
    }
}

/// An error exactly at the tolerance is not a deviation.
#[inline]
pub fn is_deviation(error: f64, tolerance: f64) -> bool {
    error > tolerance
}

/// Compare a computed canonical matrix against a reference one, writing the
/// human-readable report to `out` as it goes.
///
/// Under fixed-point mode with standard accumulation the computed matrix is
/// rounded to integers IN PLACE before comparison; callers get the rounded
/// values back. Deviations are reported, never returned as errors; the error
/// paths are a buffer not sized for the geometry and a failing `out`.
pub fn check_result<T: AccumScalar, W: Write>(
    cfg: &CorrConfig,
    computed: &mut [Complex<T>],
    reference: &[Complex<T>],
    verbosity: Verbosity,
    samples: Option<&[Sample]>,
    out: &mut W,
) -> Result<CheckReport> {
    let g = &cfg.geometry;
    expect_len("computed matrix", g.canonical_len(), computed.len())?;
    expect_len("reference matrix", g.canonical_len(), reference.len())?;
    if let Some(s) = samples {
        expect_len("sample buffer", g.sample_len(), s.len())?;
    }

    let tolerance = cfg.tolerance();
    let round = cfg.rounds_before_check();
    let mut report = CheckReport {
        tolerance,
        element_kind: T::KIND,
        checked: 0,
        deviation_count: 0,
        max_error: 0.0,
        deviations: Vec::new(),
    };

    writeln!(out, "Checking result (tolerance == {tolerance:e})...")?;

    for i in 0..g.nstation {
        for j in 0..=i {
            for p1 in 0..g.npol {
                for p2 in 0..g.npol {
                    for bin in 0..g.nbin() {
                        let k = canonical_baseline(g, bin, i, j);
                        let index = pol_index(g, k, p1, p2);

                        if round {
                            let c = computed[index];
                            computed[index] = Complex::new(c.re.round_nearest(), c.im.round_nearest());
                        }

                        let c = to_c64(computed[index]);
                        let r = to_c64(reference[index]);
                        let error = element_error(c, r);
                        report.checked += 1;
                        if error > report.max_error {
                            report.max_error = error;
                        }
                        if !is_deviation(error, tolerance) {
                            continue;
                        }

                        report.deviation_count += 1;
                        tracing::debug!(bin, i, j, p1, p2, index, error, "deviation");
                        let d = Deviation {
                            bin,
                            i,
                            j,
                            baseline: k,
                            p1,
                            p2,
                            index,
                            reference: r,
                            computed: c,
                            error,
                        };
                        if verbosity >= Verbosity::Deviations {
                            write_deviation(out, T::KIND, &d)?;
                            if let (Verbosity::Products, Some(s)) = (verbosity, samples) {
                                write_products(out, cfg, s, &d)?;
                            }
                        }
                        if report.deviations.len() < RETAINED_DEVIATIONS {
                            report.deviations.push(d);
                        }
                    }
                }
            }
        }
    }

    if report.passed() {
        writeln!(out, "Outer product summation successful (max error {:e})", report.max_error)?;
        tracing::info!(checked = report.checked, max_error = report.max_error, tolerance, "check passed");
    } else {
        writeln!(
            out,
            "Outer product summation failed with {} deviations (max error {:e})",
            report.deviation_count, report.max_error
        )?;
        tracing::info!(
            checked = report.checked,
            deviations = report.deviation_count,
            max_error = report.max_error,
            tolerance,
            "check found deviations"
        );
    }
    writeln!(out)?;
    Ok(report)
}

fn write_deviation<W: Write>(out: &mut W, kind: ElementKind, d: &Deviation) -> std::io::Result<()> {
    match kind {
        ElementKind::Float32 => writeln!(
            out,
            "{} {} {} {} {} {} {}     {}  {}  {}  {} ({} {})",
            d.bin,
            d.i,
            d.j,
            d.baseline,
            d.p1,
            d.p2,
            d.index,
            d.reference.re,
            d.computed.re,
            d.reference.im,
            d.computed.im,
            zabs(d.reference),
            zabs(d.computed)
        ),
        ElementKind::Int32 => writeln!(
            out,
            "{:>3} {:>3} {:>3} {:>4} {:>1} {:>1} {:>5}     {:>12}  {:>12}  {:>12}  {:>12} ({} {})",
            d.bin,
            d.i,
            d.j,
            d.baseline,
            d.p1,
            d.p2,
            d.index,
            d.reference.re as i64,
            d.computed.re as i64,
            d.reference.im as i64,
            d.computed.im as i64,
            zabs(d.reference),
            zabs(d.computed)
        ),
    }
}

/// Recompute one baseline/pol pair from raw samples, one line per time sample
/// and a final line with the sum.
fn write_products<W: Write>(out: &mut W, cfg: &CorrConfig, samples: &[Sample], d: &Deviation) -> std::io::Result<()> {
    let g = &cfg.geometry;
    let pulsar = d.bin / g.nfrequency;
    let f = d.bin % g.nfrequency;
    let mut sum = Complex64::new(0.0, 0.0);
    for t in (0..g.ntime).filter(|&t| pulsar_bin(g, t) == pulsar) {
        let in0 = samples[sample_index(g, t, f, d.i, d.p1)];
        let in1 = samples[sample_index(g, t, f, d.j, d.p2)];
        let product = cross_product(in0, in1);
        sum += product;
        writeln!(
            out,
            " {:>4} ({:>4},{:>4}) ({:>4},{:>4}) -> ({:>6}, {:>6})",
            t, in0.re, in0.im, in1.re, in1.im, product.re, product.im
        )?;
    }
    writeln!(out, "                                 ({:>6}, {:>6})", sum.re, sum.im)
}
