// crates/xcorr-core/src/validate.rs

use crate::config::{AccumulationWidth, CorrConfig, NumericMode, PackedLayout};
use crate::error::{XcError, Result};

pub fn validate_config(c: &CorrConfig) -> Result<()> {
    let g = &c.geometry;

    if g.nstation == 0 || g.nfrequency == 0 || g.npol == 0 || g.ntime == 0 || g.ntime_pipe == 0 {
        return Err(XcError::Validation(
            "station, frequency, polarization and time counts must be non-zero".into(),
        ));
    }
    // (N+1)*(N/2) only counts the lower triangle for even N.
    if g.nstation % 2 != 0 {
        return Err(XcError::Validation(format!(
            "nstation must be even, got {}",
            g.nstation
        )));
    }
    // Register tiles pair 2x2 station blocks into four quadrants.
    if c.layout == PackedLayout::Tiled && g.nstation % 4 != 0 {
        return Err(XcError::Validation(format!(
            "tiled layout needs nstation to be a multiple of 4, got {}",
            g.nstation
        )));
    }
    if g.npol > 2 {
        return Err(XcError::Validation(format!("npol must be 1 or 2, got {}", g.npol)));
    }
    if g.ntime % g.ntime_pipe != 0 {
        return Err(XcError::Validation(format!(
            "ntime ({}) must be a multiple of ntime_pipe ({})",
            g.ntime, g.ntime_pipe
        )));
    }
    // Swizzle corner-turns time in groups of 4.
    if g.ntime_pipe % 4 != 0 {
        return Err(XcError::Validation(format!(
            "ntime_pipe must be a multiple of 4, got {}",
            g.ntime_pipe
        )));
    }

    match (c.numeric, c.accumulation) {
        (NumericMode::Float, AccumulationWidth::Extended) => {
            return Err(XcError::Validation(
                "extended-integer accumulation requires fixed-point mode".into(),
            ));
        }
        (NumericMode::Float, AccumulationWidth::Standard)
        | (NumericMode::Fixed, AccumulationWidth::Standard)
        | (NumericMode::Fixed, AccumulationWidth::Extended) => {}
    }

    Ok(())
}
