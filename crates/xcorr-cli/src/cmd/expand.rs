// crates/xcorr-cli/src/cmd/expand.rs

use clap::Args;
use xcorr_core::digest::hex;
use xcorr_core::layout::index::dense_index;
use xcorr_core::{Sample, StimulusGenerator, VisBuffer};

use super::args::ConfigArgs;

#[derive(Args, Debug)]
pub struct ExpandArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// RNG seed
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Print the dense station x station block of this plane (pol 0, 0)
    #[arg(long)]
    pub show_plane: Option<usize>,
}

pub fn run(args: ExpandArgs) -> anyhow::Result<()> {
    let cfg = args.config.to_config()?;
    let g = &cfg.geometry;

    let mut samples = vec![Sample::default(); g.sample_len()];
    StimulusGenerator::new(cfg.numeric, args.seed).generate(&mut samples);

    let canonical = VisBuffer::reference(&cfg, &samples)?;
    let dense = canonical.expand(&cfg)?;
    let mismatches = dense.hermitian_mismatches(&cfg)?;

    println!("--- expand ---");
    println!("canonical_len   = {}", canonical.len());
    println!("dense_len       = {}", dense.len());
    println!("canonical_id    = {}", hex(&canonical.id()));
    println!("dense_id        = {}", hex(&dense.id()));
    println!("hermitian_bad   = {}", mismatches);

    if let Some(plane) = args.show_plane {
        if plane >= g.nbin() {
            anyhow::bail!("--show-plane {plane} out of range (planes = {})", g.nbin());
        }
        println!("--- plane {plane} (pol 0,0) ---");
        for i in 0..g.nstation {
            let row: Vec<String> = (0..g.nstation)
                .map(|j| {
                    let v = dense.get(dense_index(g, plane, i, j, 0, 0));
                    format!("{:>7}{:+}i", v.re, v.im)
                })
                .collect();
            println!("{}", row.join(" "));
        }
    }

    if mismatches != 0 {
        anyhow::bail!("dense matrix is not Hermitian ({mismatches} entries)");
    }
    Ok(())
}
