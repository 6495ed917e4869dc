// crates/xcorr-cli/src/cmd/args.rs

use clap::{Args, ValueEnum};
use xcorr_core::defaults::default_geometry;
use xcorr_core::{AccumulationWidth, CorrConfig, Geometry, NumericMode, PackedLayout};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Numeric {
    /// 4-bit levels as floats, f32 results (tolerance 1e-12)
    Float,
    /// 4-bit levels scaled by 16, integer-valued results (tolerance 1e-5)
    Fixed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Accum {
    /// Results carried as f32
    Standard,
    /// Results carried as i32 (fixed-point only)
    Extended,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// Register-tile triangular order
    Tiled,
    /// Real/imag split triangular order
    Split,
}

/// Geometry and mode flags shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[arg(long, default_value_t = default_geometry().nstation)]
    pub stations: usize,

    #[arg(long, default_value_t = default_geometry().nfrequency)]
    pub frequencies: usize,

    #[arg(long, default_value_t = default_geometry().npol)]
    pub pols: usize,

    #[arg(long, default_value_t = default_geometry().ntime)]
    pub times: usize,

    /// Time samples per pipeline block
    #[arg(long, default_value_t = default_geometry().ntime_pipe)]
    pub time_pipe: usize,

    /// Extra pulsar bins (0 = off)
    #[arg(long, default_value_t = 0)]
    pub pulsar_bins: usize,

    #[arg(long, value_enum, default_value_t = Numeric::Float)]
    pub numeric: Numeric,

    #[arg(long, value_enum, default_value_t = Accum::Standard)]
    pub accum: Accum,

    #[arg(long, value_enum, default_value_t = Layout::Tiled)]
    pub layout: Layout,
}

impl ConfigArgs {
    pub fn geometry(&self) -> Geometry {
        Geometry {
            nstation: self.stations,
            nfrequency: self.frequencies,
            npol: self.pols,
            ntime: self.times,
            ntime_pipe: self.time_pipe,
            npulsar: self.pulsar_bins,
        }
    }

    pub fn to_config(&self) -> anyhow::Result<CorrConfig> {
        let numeric = match self.numeric {
            Numeric::Float => NumericMode::Float,
            Numeric::Fixed => NumericMode::Fixed,
        };
        let accumulation = match self.accum {
            Accum::Standard => AccumulationWidth::Standard,
            Accum::Extended => AccumulationWidth::Extended,
        };
        let layout = match self.layout {
            Layout::Tiled => PackedLayout::Tiled,
            Layout::Split => PackedLayout::Split,
        };
        Ok(CorrConfig::new(self.geometry(), numeric, accumulation, layout)?)
    }
}
