pub mod error;
pub mod validate;

pub mod config;
pub mod defaults;
pub mod digest;
pub mod element;
pub mod layout;
pub mod matrix;
pub mod sample;

pub mod check;
pub mod expand;
pub mod reference;
pub mod stimulus;
pub mod swizzle;

pub use crate::check::{check_result, CheckReport, Verbosity};
pub use crate::config::{AccumulationWidth, CorrConfig, Geometry, NumericMode, PackedLayout};
pub use crate::element::AccumScalar;
pub use crate::matrix::VisBuffer;
pub use crate::sample::Sample;
pub use crate::stimulus::StimulusGenerator;
