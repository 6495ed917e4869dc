// crates/xcorr-cli/src/cmd/mod.rs

pub mod args;
pub mod expand;
pub mod geometry;
pub mod selftest;
pub mod stimulus;
