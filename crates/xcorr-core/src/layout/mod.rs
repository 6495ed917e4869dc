// crates/xcorr-core/src/layout/mod.rs
//
// Packed matrix orders:
//
//   canonical  ((bin*B + i(i+1)/2 + j)*P + p1)*P + p2, i >= j, interleaved re/im
//   split      same element order, real plane then imaginary plane
//   tiled      ((bin*4*Q + (2ry+rx)*Q + i(i+1)/2 + j)*P + p1)*P + p2 for the
//              2x2 station block (2i+rx, 2j+ry), real plane then imaginary plane
//
// with B = (N+1)*(N/2) baselines and Q = (N/2+1)*(N/4) sub-baselines per
// quadrant. Planar buffers keep the same element count as the interleaved
// buffer: scalar position s lives in element s/2, component s%2.

pub mod index;
pub mod pack;
pub mod reorder;

pub use pack::pack;
pub use reorder::reorder;
