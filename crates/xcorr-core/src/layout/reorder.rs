// crates/xcorr-core/src/layout/reorder.rs

use num_complex::Complex;

use crate::config::{Geometry, PackedLayout};
use crate::element::AccumScalar;
use crate::error::{expect_len, Result, XcError};
use crate::layout::index::{for_each_baseline, for_each_tile_slot, planar_get, pol_index};

/// Rewrite an accelerator-order matrix into canonical triangular order, in place.
///
/// `buf` must hold exactly `g.packed_len(layout)` elements. On return the
/// first `g.canonical_len()` elements are canonical and interleaved; any
/// remaining elements (tile padding in the tiled layout) are zero.
///
/// Fails only when the scratch buffer cannot be allocated, in which case
/// `buf` is left in its original packed order.
pub fn reorder<T: AccumScalar>(g: &Geometry, layout: PackedLayout, buf: &mut [Complex<T>]) -> Result<()> {
    let len = g.packed_len(layout);
    expect_len("packed matrix", len, buf.len())?;

    let mut scratch = alloc_scratch::<T>(len)?;
    match layout {
        PackedLayout::Tiled => tiled_to_canonical(g, buf, &mut scratch),
        PackedLayout::Split => split_to_canonical(g, buf, &mut scratch),
    }
    buf.copy_from_slice(&scratch);

    tracing::debug!(?layout, elements = len, "reordered to canonical");
    Ok(())
}

fn alloc_scratch<T: AccumScalar>(len: usize) -> Result<Vec<Complex<T>>> {
    let mut v: Vec<Complex<T>> = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| XcError::ScratchAlloc { elements: len })?;
    v.resize(len, Complex::default());
    Ok(v)
}

fn tiled_to_canonical<T: AccumScalar>(g: &Geometry, src: &[Complex<T>], dst: &mut [Complex<T>]) {
    let im_plane = src.len();
    for_each_tile_slot(g, |k, l| {
        for p1 in 0..g.npol {
            for p2 in 0..g.npol {
                let tri_index = pol_index(g, k, p1, p2);
                let reg_index = pol_index(g, l, p1, p2);
                dst[tri_index] = Complex::new(
                    planar_get(src, reg_index),
                    planar_get(src, reg_index + im_plane),
                );
            }
        }
    });
}

fn split_to_canonical<T: AccumScalar>(g: &Geometry, src: &[Complex<T>], dst: &mut [Complex<T>]) {
    let im_plane = src.len();
    for_each_baseline(g, |_bin, _i, _j, k| {
        for p1 in 0..g.npol {
            for p2 in 0..g.npol {
                let index = pol_index(g, k, p1, p2);
                dst[index] = Complex::new(planar_get(src, index), planar_get(src, index + im_plane));
            }
        }
    });
}
