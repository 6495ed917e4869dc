// crates/xcorr-core/tests/swizzle_order.rs

use xcorr_core::sample::sample_index;
use xcorr_core::swizzle::{swizzle, swizzled_index};
use xcorr_core::{Geometry, NumericMode, Sample, StimulusGenerator};

fn geometry() -> Geometry {
    Geometry {
        nstation: 4,
        nfrequency: 2,
        npol: 2,
        ntime: 16,
        ntime_pipe: 8,
        npulsar: 0,
    }
}

#[test]
fn swizzle_splits_components_and_corner_turns_time() {
    let g = geometry();
    let mut input = vec![Sample::default(); g.sample_len()];
    StimulusGenerator::new(NumericMode::Fixed, 3).generate(&mut input);

    let out = swizzle(&g, &input).expect("swizzle ok");
    assert_eq!(out.len(), 2 * g.ntime_pipe * g.nfrequency * g.nstation * g.npol);

    for t in 0..g.ntime_pipe {
        for f in 0..g.nfrequency {
            for s in 0..g.nstation {
                for p in 0..g.npol {
                    let v = input[sample_index(&g, t, f, s, p)];
                    assert_eq!(out[swizzled_index(&g, t, f, s, p, 0)], v.re);
                    assert_eq!(out[swizzled_index(&g, t, f, s, p, 1)], v.im);
                }
            }
        }
    }
}

#[test]
fn four_consecutive_times_share_a_word() {
    let g = geometry();
    let mut input = vec![Sample::default(); g.sample_len()];
    for t in 0..g.ntime_pipe {
        input[sample_index(&g, t, 1, 2, 0)] = Sample::new(t as i8, -(t as i8));
    }
    let out = swizzle(&g, &input).unwrap();
    let base = swizzled_index(&g, 4, 1, 2, 0, 0);
    assert_eq!(&out[base..base + 4], &[4, 5, 6, 7]);
    let base_im = swizzled_index(&g, 4, 1, 2, 0, 1);
    assert_eq!(base_im, base + 4);
    assert_eq!(&out[base_im..base_im + 4], &[-4, -5, -6, -7]);
}

#[test]
fn input_is_read_in_time_frequency_station_pol_order() {
    let g = Geometry {
        nstation: 3,
        nfrequency: 2,
        npol: 1,
        ntime: 4,
        ntime_pipe: 4,
        npulsar: 0,
    };
    let input: Vec<Sample> = (0..g.sample_len()).map(|k| Sample::new(k as i8, -(k as i8))).collect();
    let out = swizzle(&g, &input).unwrap();
    for t in 0..g.ntime_pipe {
        for f in 0..g.nfrequency {
            for s in 0..g.nstation {
                let k = (t * g.nfrequency + f) * g.nstation + s;
                assert_eq!(sample_index(&g, t, f, s, 0), k);
                assert_eq!(out[swizzled_index(&g, t, f, s, 0, 0)], k as i8);
                assert_eq!(out[swizzled_index(&g, t, f, s, 0, 1)], -(k as i8));
            }
        }
    }
}

#[test]
fn short_input_rejected() {
    let g = geometry();
    let input = vec![Sample::default(); 3];
    assert!(swizzle(&g, &input).is_err());
}
