// crates/xcorr-core/tests/reorder_bijection.rs

use num_complex::Complex;
use xcorr_core::error::XcError;
use xcorr_core::layout::index::{canonical_index, tri};
use xcorr_core::layout::{pack, reorder};
use xcorr_core::{Geometry, PackedLayout};

fn geometry() -> Geometry {
    Geometry {
        nstation: 8,
        nfrequency: 2,
        npol: 2,
        ntime: 8,
        ntime_pipe: 4,
        npulsar: 1,
    }
}

/// Every scalar holds its own flat position: element e = (2e, 2e+1).
fn numbered<T: From<i16>>(len: usize) -> Vec<Complex<T>> {
    (0..len)
        .map(|e| Complex::new(T::from((2 * e) as i16), T::from((2 * e + 1) as i16)))
        .collect()
}

fn numbered_i32(len: usize) -> Vec<Complex<i32>> {
    (0..len)
        .map(|e| Complex::new((2 * e) as i32, (2 * e + 1) as i32))
        .collect()
}

#[test]
fn tiled_matches_documented_index_map() {
    let g = geometry();
    let len = g.tiled_len();
    let mut buf: Vec<Complex<f32>> = numbered(len);
    reorder(&g, PackedLayout::Tiled, &mut buf).expect("reorder ok");

    let q = (g.nstation / 2 + 1) * (g.nstation / 4);
    for bin in 0..g.nbin() {
        for i in 0..g.nstation {
            for j in 0..=i {
                let (bi, rx) = (i / 2, i % 2);
                let (bj, ry) = (j / 2, j % 2);
                let l = bin * 4 * q + (2 * ry + rx) * q + tri(bi) + bj;
                for p1 in 0..g.npol {
                    for p2 in 0..g.npol {
                        let reg = (l * g.npol + p1) * g.npol + p2;
                        let want = Complex::new(reg as f32, (reg + len) as f32);
                        let got = buf[canonical_index(&g, bin, i, j, p1, p2)];
                        assert_eq!(got, want, "bin={bin} i={i} j={j} p1={p1} p2={p2}");
                    }
                }
            }
        }
    }
    // Tile padding leaves a zeroed tail past the canonical prefix.
    assert!(buf[g.canonical_len()..].iter().all(|c| *c == Complex::new(0.0, 0.0)));
}

#[test]
fn split_matches_documented_index_map() {
    let g = geometry();
    let len = g.split_len();
    let mut buf = numbered_i32(len);
    reorder(&g, PackedLayout::Split, &mut buf).expect("reorder ok");

    for bin in 0..g.nbin() {
        for i in 0..g.nstation {
            for j in 0..=i {
                for p1 in 0..g.npol {
                    for p2 in 0..g.npol {
                        let k = canonical_index(&g, bin, i, j, p1, p2);
                        assert_eq!(buf[k], Complex::new(k as i32, (k + len) as i32));
                    }
                }
            }
        }
    }
}

#[test]
fn split_reorder_is_a_permutation() {
    let g = geometry();
    let mut buf = numbered_i32(g.split_len());
    let mut before: Vec<i32> = buf.iter().flat_map(|c| [c.re, c.im]).collect();
    reorder(&g, PackedLayout::Split, &mut buf).expect("reorder ok");
    let mut after: Vec<i32> = buf.iter().flat_map(|c| [c.re, c.im]).collect();
    before.sort_unstable();
    after.sort_unstable();
    assert_eq!(before, after);
}

#[test]
fn pack_then_reorder_restores_canonical() {
    let g = geometry();
    // Distinct non-zero values so padding (zero) is distinguishable.
    let canonical: Vec<Complex<i32>> = (0..g.canonical_len())
        .map(|k| Complex::new(k as i32 + 1, -(k as i32) - 1))
        .collect();

    for layout in [PackedLayout::Tiled, PackedLayout::Split] {
        let mut packed = pack(&g, layout, &canonical).expect("pack ok");
        assert_eq!(packed.len(), g.packed_len(layout));

        let mut packed_vals: Vec<i32> = packed
            .iter()
            .flat_map(|c| [c.re, c.im])
            .filter(|&v| v != 0)
            .collect();
        let mut canon_vals: Vec<i32> = canonical.iter().flat_map(|c| [c.re, c.im]).collect();
        packed_vals.sort_unstable();
        canon_vals.sort_unstable();
        assert_eq!(packed_vals, canon_vals, "{layout:?}: multiset differs");

        reorder(&g, layout, &mut packed).expect("reorder ok");
        assert_eq!(&packed[..g.canonical_len()], canonical.as_slice(), "{layout:?}");
    }
}

#[test]
fn tiled_buffer_is_larger_than_canonical() {
    let g = geometry();
    // Per plane: 4*(N/2+1)*(N/4) = N(N+2)/2 vs (N+1)*N/2.
    assert_eq!(g.tiled_len() - g.canonical_len(), g.nbin() * (g.nstation / 2) * g.npol2());
}

#[test]
fn wrong_length_is_rejected_without_touching_buffer() {
    let g = geometry();
    let mut buf: Vec<Complex<f32>> = numbered(g.split_len() - 1);
    let before = buf.clone();
    let err = reorder(&g, PackedLayout::Split, &mut buf).unwrap_err();
    assert!(matches!(err, XcError::Length { .. }), "{err:?}");
    assert_eq!(buf, before);
}
