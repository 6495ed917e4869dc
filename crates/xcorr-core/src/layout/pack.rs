// crates/xcorr-core/src/layout/pack.rs

use num_complex::Complex;

use crate::config::{Geometry, PackedLayout};
use crate::element::AccumScalar;
use crate::error::{expect_len, Result};
use crate::layout::index::{for_each_baseline, for_each_tile_slot, planar_set, pol_index};

/// Lay a canonical matrix out the way the accelerator writes it.
///
/// Inverse of [`reorder`](crate::layout::reorder::reorder). Tile padding
/// slots are zero.
pub fn pack<T: AccumScalar>(g: &Geometry, layout: PackedLayout, canonical: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
    expect_len("canonical matrix", g.canonical_len(), canonical.len())?;

    let len = g.packed_len(layout);
    let mut out = vec![Complex::<T>::default(); len];
    match layout {
        PackedLayout::Tiled => {
            for_each_tile_slot(g, |k, l| {
                for p1 in 0..g.npol {
                    for p2 in 0..g.npol {
                        let v = canonical[pol_index(g, k, p1, p2)];
                        let reg_index = pol_index(g, l, p1, p2);
                        planar_set(&mut out, reg_index, v.re);
                        planar_set(&mut out, reg_index + len, v.im);
                    }
                }
            });
        }
        PackedLayout::Split => {
            for_each_baseline(g, |_bin, _i, _j, k| {
                for p1 in 0..g.npol {
                    for p2 in 0..g.npol {
                        let index = pol_index(g, k, p1, p2);
                        let v = canonical[index];
                        planar_set(&mut out, index, v.re);
                        planar_set(&mut out, index + len, v.im);
                    }
                }
            });
        }
    }
    Ok(out)
}
