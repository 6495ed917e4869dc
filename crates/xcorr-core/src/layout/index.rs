// crates/xcorr-core/src/layout/index.rs

use num_complex::Complex;

use crate::config::Geometry;

/// Triangular number `i*(i+1)/2`.
#[inline]
pub fn tri(i: usize) -> usize {
    i * (i + 1) / 2
}

/// Canonical baseline slot of station pair `(i, j)`, `i >= j`, in `bin`.
#[inline]
pub fn canonical_baseline(g: &Geometry, bin: usize, i: usize, j: usize) -> usize {
    debug_assert!(i >= j);
    bin * g.baselines() + tri(i) + j
}

/// Expand a baseline slot into an element index for one polarization pair.
#[inline]
pub fn pol_index(g: &Geometry, baseline: usize, p1: usize, p2: usize) -> usize {
    (baseline * g.npol + p1) * g.npol + p2
}

#[inline]
pub fn canonical_index(g: &Geometry, bin: usize, i: usize, j: usize, p1: usize, p2: usize) -> usize {
    pol_index(g, canonical_baseline(g, bin, i, j), p1, p2)
}

#[inline]
pub fn dense_index(g: &Geometry, bin: usize, i: usize, j: usize, p1: usize, p2: usize) -> usize {
    (((bin * g.nstation + i) * g.nstation + j) * g.npol + p1) * g.npol + p2
}

/// Walk every stored baseline `(bin, i, j)`, `i >= j`, with its canonical slot.
pub fn for_each_baseline(g: &Geometry, mut f: impl FnMut(usize, usize, usize, usize)) {
    for bin in 0..g.nbin() {
        for i in 0..g.nstation {
            for j in 0..=i {
                f(bin, i, j, canonical_baseline(g, bin, i, j));
            }
        }
    }
}

/// Walk every register-tile slot that holds a real baseline, yielding
/// `(canonical_slot, tiled_slot)`.
///
/// Diagonal 2x2 blocks (`j == i`) carry one slot above the diagonal,
/// station pair `(2i, 2i+1)`; it is padding and is skipped.
pub fn for_each_tile_slot(g: &Geometry, mut f: impl FnMut(usize, usize)) {
    let q = g.tile_quadrant();
    let b = g.baselines();
    for bin in 0..g.nbin() {
        for i in 0..g.nstation / 2 {
            for rx in 0..2 {
                for j in 0..=i {
                    for ry in 0..2 {
                        let row = 2 * i + rx;
                        let col = 2 * j + ry;
                        if col > row {
                            continue;
                        }
                        let k = bin * b + tri(row) + col;
                        let l = bin * 4 * q + (2 * ry + rx) * q + tri(i) + j;
                        f(k, l);
                    }
                }
            }
        }
    }
}

/// Read scalar `pos` of a buffer viewed as one flat run of scalars.
#[inline]
pub fn planar_get<T: Copy>(buf: &[Complex<T>], pos: usize) -> T {
    let c = &buf[pos / 2];
    if pos % 2 == 0 {
        c.re
    } else {
        c.im
    }
}

#[inline]
pub fn planar_set<T: Copy>(buf: &mut [Complex<T>], pos: usize, v: T) {
    let c = &mut buf[pos / 2];
    if pos % 2 == 0 {
        c.re = v;
    } else {
        c.im = v;
    }
}
