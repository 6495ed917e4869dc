// crates/xcorr-core/src/config.rs

use crate::error::Result;
use crate::validate::validate_config;

/// Arithmetic regime of the accelerator being emulated / checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericMode {
    /// 4-bit levels carried as floats; results accumulated in f32.
    Float,
    /// 4-bit levels scaled by 16 and carried as signed bytes.
    Fixed,
}

/// Width of the accelerator accumulator in fixed-point mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccumulationWidth {
    /// Results come back as f32 holding integer values.
    Standard,
    /// Results come back as 32-bit integers.
    Extended,
}

/// Packed order produced by the accelerator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PackedLayout {
    /// 2x2 register-tile quadrants, real plane then imaginary plane.
    Tiled,
    /// Canonical triangular order, real plane then imaginary plane.
    Split,
}

/// Element type used by matrix buffers for a given configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Float32,
    Int32,
}

/// Layout geometry shared by every component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub nstation: usize,
    pub nfrequency: usize,
    pub npol: usize,
    pub ntime: usize,
    /// Time samples per accelerator pipeline block.
    pub ntime_pipe: usize,
    /// Extra pulsar bins; 0 disables binning.
    pub npulsar: usize,
}

impl Geometry {
    /// Frequency planes including pulsar bins: `nfrequency * (npulsar + 1)`.
    #[inline]
    pub fn nbin(&self) -> usize {
        self.nfrequency * (self.npulsar + 1)
    }

    /// Baseline slots per plane in canonical order: `(N+1) * (N/2)`.
    #[inline]
    pub fn baselines(&self) -> usize {
        (self.nstation + 1) * (self.nstation / 2)
    }

    /// Sub-baselines per register-tile quadrant: `(N/2+1) * (N/4)`.
    #[inline]
    pub fn tile_quadrant(&self) -> usize {
        (self.nstation / 2 + 1) * (self.nstation / 4)
    }

    #[inline]
    pub fn npol2(&self) -> usize {
        self.npol * self.npol
    }

    /// Complex elements in a canonical triangular matrix.
    pub fn canonical_len(&self) -> usize {
        self.nbin() * self.baselines() * self.npol2()
    }

    /// Complex elements in a register-tile matrix (includes tile padding).
    pub fn tiled_len(&self) -> usize {
        self.nbin() * 4 * self.tile_quadrant() * self.npol2()
    }

    /// Complex elements in a split real/imag matrix.
    pub fn split_len(&self) -> usize {
        self.canonical_len()
    }

    /// Complex elements in a dense (all ordered pairs) matrix.
    pub fn dense_len(&self) -> usize {
        self.nbin() * self.nstation * self.nstation * self.npol2()
    }

    /// Samples in one full input buffer, laid out `(t, f, station, pol)`.
    pub fn sample_len(&self) -> usize {
        self.ntime * self.nfrequency * self.nstation * self.npol
    }

    /// Packed length of the accelerator output for `layout`.
    pub fn packed_len(&self, layout: PackedLayout) -> usize {
        match layout {
            PackedLayout::Tiled => self.tiled_len(),
            PackedLayout::Split => self.split_len(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CorrConfig {
    pub geometry: Geometry,
    pub numeric: NumericMode,
    pub accumulation: AccumulationWidth,
    pub layout: PackedLayout,
}

impl CorrConfig {
    /// Build a configuration, rejecting geometries the layouts cannot express.
    pub fn new(
        geometry: Geometry,
        numeric: NumericMode,
        accumulation: AccumulationWidth,
        layout: PackedLayout,
    ) -> Result<Self> {
        let cfg = Self {
            geometry,
            numeric,
            accumulation,
            layout,
        };
        validate_config(&cfg)?;
        Ok(cfg)
    }

    pub fn element_kind(&self) -> ElementKind {
        match self.accumulation {
            AccumulationWidth::Standard => ElementKind::Float32,
            AccumulationWidth::Extended => ElementKind::Int32,
        }
    }

    /// Relative error above which an element counts as a deviation.
    pub fn tolerance(&self) -> f64 {
        match self.numeric {
            NumericMode::Float => 1e-12,
            NumericMode::Fixed => 1e-5,
        }
    }

    /// Fixed-point results accumulated in f32 are rounded before comparison.
    pub fn rounds_before_check(&self) -> bool {
        self.numeric == NumericMode::Fixed && self.accumulation == AccumulationWidth::Standard
    }
}
