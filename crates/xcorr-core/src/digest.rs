// crates/xcorr-core/src/digest.rs

use num_complex::Complex;

use crate::element::AccumScalar;
use crate::sample::Sample;

pub fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let hash = blake3::hash(bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

/// Fingerprint of a sample buffer (re, im bytes in order).
pub fn sample_id(samples: &[Sample]) -> [u8; 16] {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for s in samples {
        bytes.push(s.re as u8);
        bytes.push(s.im as u8);
    }
    blake3_16(&bytes)
}

/// Fingerprint of a matrix buffer (little-endian re, im per element).
pub fn matrix_id<T: AccumScalar>(m: &[Complex<T>]) -> [u8; 16] {
    let mut bytes = Vec::with_capacity(m.len() * 8);
    for v in m {
        v.re.write_le(&mut bytes);
        v.im.write_le(&mut bytes);
    }
    blake3_16(&bytes)
}

pub fn hex(id: &[u8]) -> String {
    id.iter().map(|b| format!("{b:02x}")).collect()
}
