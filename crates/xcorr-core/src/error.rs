// crates/xcorr-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, XcError>;

#[derive(Debug, Error)]
pub enum XcError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("buffer length mismatch for {what}: expected {expected}, got {got}")]
    Length {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// The reorder scratch buffer could not be allocated. The caller's buffer
    /// is left untouched; it is still in the accelerator's packed order.
    #[error("failed to allocate reorder scratch of {elements} elements")]
    ScratchAlloc { elements: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Length gate shared by every buffer-consuming operation.
#[inline]
pub(crate) fn expect_len(what: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(XcError::Length { what, expected, got });
    }
    Ok(())
}
