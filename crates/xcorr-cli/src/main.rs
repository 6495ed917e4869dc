// crates/xcorr-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod logging;

#[derive(Parser)]
#[command(name = "xcorr-cli")]
#[command(about = "Correlator layout / stimulus / result-check tools", long_about = None)]
pub struct Cli {
    /// Log filter (overridden by RUST_LOG), e.g. "info" or "xcorr_core=debug"
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print buffer sizes for a geometry/layout
    Geometry(cmd::geometry::GeometryArgs),

    /// Generate quantized Gaussian stimulus and report its statistics
    Stimulus(cmd::stimulus::StimulusArgs),

    /// Generate -> reference correlate -> pack -> reorder -> check
    Selftest(cmd::selftest::SelftestArgs),

    /// Expand a reference correlation to a dense matrix and verify Hermitian symmetry
    Expand(cmd::expand::ExpandArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    match cli.cmd {
        Commands::Geometry(args) => cmd::geometry::run(args),
        Commands::Stimulus(args) => cmd::stimulus::run(args),
        Commands::Selftest(args) => cmd::selftest::run(args),
        Commands::Expand(args) => cmd::expand::run(args),
    }
}
