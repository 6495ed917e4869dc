// crates/xcorr-core/src/matrix.rs

use std::io::Write;

use num_complex::{Complex, Complex64};

use crate::check::{check_result, CheckReport, Verbosity};
use crate::config::{CorrConfig, ElementKind};
use crate::digest::matrix_id;
use crate::element::{from_c64, to_c64};
use crate::error::{Result, XcError};
use crate::expand::{expand_to_vec, hermitian_mismatches};
use crate::layout::{pack, reorder};
use crate::reference::correlate;
use crate::sample::Sample;

/// Matrix buffer tagged with its element type.
///
/// The element type follows the accumulation width of the configuration;
/// every operation dispatches once on the tag and runs the typed kernel.
#[derive(Clone, Debug, PartialEq)]
pub enum VisBuffer {
    Float(Vec<Complex<f32>>),
    Fixed(Vec<Complex<i32>>),
}

impl VisBuffer {
    /// Canonical reference correlation of `samples` in the element type of `cfg`.
    pub fn reference(cfg: &CorrConfig, samples: &[Sample]) -> Result<Self> {
        Ok(match cfg.element_kind() {
            ElementKind::Float32 => VisBuffer::Float(correlate(&cfg.geometry, samples)?),
            ElementKind::Int32 => VisBuffer::Fixed(correlate(&cfg.geometry, samples)?),
        })
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            VisBuffer::Float(_) => ElementKind::Float32,
            VisBuffer::Fixed(_) => ElementKind::Int32,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            VisBuffer::Float(v) => v.len(),
            VisBuffer::Fixed(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Complex64 {
        match self {
            VisBuffer::Float(v) => to_c64(v[index]),
            VisBuffer::Fixed(v) => to_c64(v[index]),
        }
    }

    /// Store `value`, converting to the buffer's element type.
    pub fn set(&mut self, index: usize, value: Complex64) {
        match self {
            VisBuffer::Float(v) => v[index] = from_c64(value),
            VisBuffer::Fixed(v) => v[index] = from_c64(value),
        }
    }

    /// Lay a canonical buffer out in the accelerator order of `cfg`.
    pub fn packed(&self, cfg: &CorrConfig) -> Result<Self> {
        let g = &cfg.geometry;
        Ok(match self {
            VisBuffer::Float(v) => VisBuffer::Float(pack(g, cfg.layout, v)?),
            VisBuffer::Fixed(v) => VisBuffer::Fixed(pack(g, cfg.layout, v)?),
        })
    }

    /// In-place reorder from the accelerator order of `cfg` to canonical.
    pub fn reorder(&mut self, cfg: &CorrConfig) -> Result<()> {
        let g = &cfg.geometry;
        match self {
            VisBuffer::Float(v) => reorder(g, cfg.layout, v),
            VisBuffer::Fixed(v) => reorder(g, cfg.layout, v),
        }
    }

    /// Dense expansion of the canonical prefix of this buffer.
    pub fn expand(&self, cfg: &CorrConfig) -> Result<Self> {
        let g = &cfg.geometry;
        let n = self.canonical_prefix(cfg)?;
        Ok(match self {
            VisBuffer::Float(v) => VisBuffer::Float(expand_to_vec(g, &v[..n])?),
            VisBuffer::Fixed(v) => VisBuffer::Fixed(expand_to_vec(g, &v[..n])?),
        })
    }

    pub fn hermitian_mismatches(&self, cfg: &CorrConfig) -> Result<usize> {
        match self {
            VisBuffer::Float(v) => hermitian_mismatches(&cfg.geometry, v),
            VisBuffer::Fixed(v) => hermitian_mismatches(&cfg.geometry, v),
        }
    }

    /// Check the canonical prefix of this buffer against `reference`.
    ///
    /// May round this buffer in place; see [`check_result`].
    pub fn check<W: Write>(
        &mut self,
        cfg: &CorrConfig,
        reference: &VisBuffer,
        verbosity: Verbosity,
        samples: Option<&[Sample]>,
        out: &mut W,
    ) -> Result<CheckReport> {
        let n = self.canonical_prefix(cfg)?;
        match (self, reference) {
            (VisBuffer::Float(c), VisBuffer::Float(r)) => check_result(cfg, &mut c[..n], r, verbosity, samples, out),
            (VisBuffer::Fixed(c), VisBuffer::Fixed(r)) => check_result(cfg, &mut c[..n], r, verbosity, samples, out),
            (c, r) => Err(XcError::Validation(format!(
                "element type mismatch: computed {:?}, reference {:?}",
                c.kind(),
                r.kind()
            ))),
        }
    }

    pub fn id(&self) -> [u8; 16] {
        match self {
            VisBuffer::Float(v) => matrix_id(v),
            VisBuffer::Fixed(v) => matrix_id(v),
        }
    }

    fn canonical_prefix(&self, cfg: &CorrConfig) -> Result<usize> {
        let n = cfg.geometry.canonical_len();
        if self.len() < n {
            return Err(XcError::Length {
                what: "canonical matrix",
                expected: n,
                got: self.len(),
            });
        }
        Ok(n)
    }
}
