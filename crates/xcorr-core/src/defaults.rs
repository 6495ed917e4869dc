// crates/xcorr-core/src/defaults.rs

use crate::config::{AccumulationWidth, CorrConfig, Geometry, NumericMode, PackedLayout};

/// Small geometry that exercises every layout path in a few milliseconds.
pub fn default_geometry() -> Geometry {
    Geometry {
        nstation: 16,
        nfrequency: 4,
        npol: 2,
        ntime: 64,
        ntime_pipe: 16,
        npulsar: 0,
    }
}

pub fn default_config() -> CorrConfig {
    // Floating mode with the register-tile output is what the accelerator
    // produces out of the box.
    CorrConfig {
        geometry: default_geometry(),
        numeric: NumericMode::Float,
        accumulation: AccumulationWidth::Standard,
        layout: PackedLayout::Tiled,
    }
}
