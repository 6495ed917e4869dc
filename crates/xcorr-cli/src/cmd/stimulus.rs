// crates/xcorr-cli/src/cmd/stimulus.rs

use clap::Args;
use xcorr_core::digest::{blake3_16, hex, sample_id};
use xcorr_core::sample::LEVEL_MAX;
use xcorr_core::stimulus::StimulusStats;
use xcorr_core::swizzle::swizzle;
use xcorr_core::{Sample, StimulusGenerator};

use super::args::ConfigArgs;

#[derive(Args, Debug)]
pub struct StimulusArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// RNG seed
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Benchmark mode: synthesize one (station, pol) period and replicate it
    /// across every frequency and time sample
    #[arg(long)]
    pub replicate: bool,

    /// Also swizzle the first pipeline block and report its id
    #[arg(long)]
    pub swizzle: bool,
}

pub fn run(args: StimulusArgs) -> anyhow::Result<()> {
    let cfg = args.config.to_config()?;
    let g = &cfg.geometry;

    let mut samples = vec![Sample::default(); g.sample_len()];
    let mut gen = StimulusGenerator::new(cfg.numeric, args.seed);
    if args.replicate {
        gen.generate_replicated(&mut samples, g.nfrequency * g.ntime);
    } else {
        gen.generate(&mut samples);
    }

    let stats = StimulusStats::of(&samples, cfg.numeric);
    println!("--- stimulus ---");
    println!("numeric         = {:?}", cfg.numeric);
    println!("seed            = {}", args.seed);
    println!("samples         = {}", stats.count);
    println!("min             = {}", stats.min);
    println!("max             = {}", stats.max);
    println!("mean_levels     = {:.4}", stats.mean);
    println!("rms_levels      = {:.4}", stats.rms_levels);
    println!("sample_id       = {}", hex(&sample_id(&samples)));

    let total: u64 = stats.histogram.iter().sum();
    println!("--- levels ---");
    for (bin, &count) in stats.histogram.iter().enumerate() {
        let level = bin as i32 - LEVEL_MAX as i32;
        let pct = if total == 0 { 0.0 } else { count as f64 * 100.0 / total as f64 };
        println!("{:>3} count={:<8} ({:.3}%)", level, count, pct);
    }

    if args.swizzle {
        let swz = swizzle(g, &samples)?;
        let bytes: Vec<u8> = swz.iter().map(|&b| b as u8).collect();
        println!("--- swizzle ---");
        println!("bytes           = {}", bytes.len());
        println!("swizzle_id      = {}", hex(&blake3_16(&bytes)));
    }

    Ok(())
}
