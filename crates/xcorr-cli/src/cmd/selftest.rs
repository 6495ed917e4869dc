// crates/xcorr-cli/src/cmd/selftest.rs

use std::io::Write;

use clap::Args;
use num_complex::Complex64;
use xcorr_core::digest::{hex, sample_id};
use xcorr_core::{Sample, StimulusGenerator, Verbosity, VisBuffer};

use super::args::ConfigArgs;

#[derive(Args, Debug)]
pub struct SelftestArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// RNG seed
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// 0 = summary, 1 = list deviations, 2 = also trace per-time products
    #[arg(long, default_value_t = 0)]
    pub verbose: u8,

    /// Corrupt this many evenly spaced elements of the emulated device output
    #[arg(long, default_value_t = 0)]
    pub perturb: usize,

    /// Exit non-zero when any deviation is found
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: SelftestArgs) -> anyhow::Result<()> {
    let cfg = args.config.to_config()?;
    let g = &cfg.geometry;

    let mut samples = vec![Sample::default(); g.sample_len()];
    StimulusGenerator::new(cfg.numeric, args.seed).generate(&mut samples);
    eprintln!("sample_id       = {}", hex(&sample_id(&samples)));

    let reference = VisBuffer::reference(&cfg, &samples)?;

    // Stand-in for the accelerator: same correlation, written in its packed order.
    let mut canonical = reference.clone();
    let n = canonical.len();
    let hits = args.perturb.min(n);
    for h in 0..hits {
        let index = h * n / hits;
        let v = canonical.get(index);
        // Whole-unit offset of at least 1% of |v|, so integer elements move too.
        let delta = (v.norm() * 0.01).max(1.0).ceil();
        canonical.set(index, Complex64::new(v.re + delta, v.im));
    }
    if hits > 0 {
        tracing::warn!(elements = hits, "perturbed device output");
    }

    let mut device = canonical.packed(&cfg)?;
    eprintln!("device_layout   = {:?} ({} elements)", cfg.layout, device.len());

    device.reorder(&cfg)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = device.check(
        &cfg,
        &reference,
        Verbosity::from_level(args.verbose),
        Some(&samples),
        &mut out,
    )?;
    out.flush()?;

    if args.strict && !report.passed() {
        anyhow::bail!("{} deviations (max error {:e})", report.deviation_count, report.max_error);
    }
    Ok(())
}
