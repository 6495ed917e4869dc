// crates/xcorr-core/src/expand.rs

use num_complex::Complex;

use crate::config::Geometry;
use crate::element::{conj, AccumScalar};
use crate::error::{expect_len, Result};
use crate::layout::index::{dense_index, for_each_baseline, pol_index};

/// Expand a canonical triangular matrix into a dense one covering every
/// ordered station pair.
///
/// Entry `(f, i, j, p1, p2)` is copied as-is and its conjugate lands at
/// `(f, j, i, p2, p1)`. On the diagonal `i == j, p1 == p2` both writes hit the
/// same slot and the conjugate one lands last.
pub fn expand<T: AccumScalar>(g: &Geometry, dense: &mut [Complex<T>], packed: &[Complex<T>]) -> Result<()> {
    expect_len("dense matrix", g.dense_len(), dense.len())?;
    expect_len("canonical matrix", g.canonical_len(), packed.len())?;

    for_each_baseline(g, |bin, i, j, k| {
        for p1 in 0..g.npol {
            for p2 in 0..g.npol {
                let v = packed[pol_index(g, k, p1, p2)];
                dense[dense_index(g, bin, i, j, p1, p2)] = v;
                dense[dense_index(g, bin, j, i, p2, p1)] = conj(v);
            }
        }
    });

    tracing::debug!(elements = dense.len(), "expanded to dense");
    Ok(())
}

/// Allocating form of [`expand`].
pub fn expand_to_vec<T: AccumScalar>(g: &Geometry, packed: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
    let mut dense = vec![Complex::<T>::default(); g.dense_len()];
    expand(g, &mut dense, packed)?;
    Ok(dense)
}

/// Count dense entries with `M[f,i,j,p1,p2] != conj(M[f,j,i,p2,p1])`.
pub fn hermitian_mismatches<T: AccumScalar>(g: &Geometry, dense: &[Complex<T>]) -> Result<usize> {
    expect_len("dense matrix", g.dense_len(), dense.len())?;

    let mut bad = 0usize;
    for bin in 0..g.nbin() {
        for i in 0..g.nstation {
            for j in 0..g.nstation {
                for p1 in 0..g.npol {
                    for p2 in 0..g.npol {
                        let a = dense[dense_index(g, bin, i, j, p1, p2)];
                        let b = dense[dense_index(g, bin, j, i, p2, p1)];
                        if a != conj(b) {
                            bad += 1;
                        }
                    }
                }
            }
        }
    }
    Ok(bad)
}
