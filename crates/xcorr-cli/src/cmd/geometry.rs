// crates/xcorr-cli/src/cmd/geometry.rs

use clap::Args;

use super::args::ConfigArgs;

#[derive(Args, Debug)]
pub struct GeometryArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

pub fn run(args: GeometryArgs) -> anyhow::Result<()> {
    let cfg = args.config.to_config()?;
    let g = &cfg.geometry;

    println!("stations        = {}", g.nstation);
    println!("frequencies     = {}", g.nfrequency);
    println!("pols            = {}", g.npol);
    println!("times           = {} (pipe {})", g.ntime, g.ntime_pipe);
    println!("pulsar_bins     = {}", g.npulsar);
    println!("planes          = {}", g.nbin());
    println!("baselines       = {}", g.baselines());
    println!("samples         = {}", g.sample_len());
    println!("canonical_len   = {}", g.canonical_len());
    println!("tiled_len       = {}", g.tiled_len());
    println!("split_len       = {}", g.split_len());
    println!("dense_len       = {}", g.dense_len());
    println!("packed_len      = {} ({:?})", g.packed_len(cfg.layout), cfg.layout);
    println!("element         = {:?}", cfg.element_kind());
    println!("tolerance       = {:e}", cfg.tolerance());
    Ok(())
}
