// crates/xcorr-core/tests/pipeline.rs

use xcorr_core::defaults::default_geometry;
use xcorr_core::{AccumulationWidth, CorrConfig, NumericMode, PackedLayout, Sample, StimulusGenerator, Verbosity, VisBuffer};

fn run(numeric: NumericMode, accumulation: AccumulationWidth, layout: PackedLayout) -> (VisBuffer, VisBuffer) {
    let cfg = CorrConfig::new(default_geometry(), numeric, accumulation, layout).expect("valid config");
    let mut s = vec![Sample::default(); cfg.geometry.sample_len()];
    StimulusGenerator::new(numeric, 0xA11CE).generate(&mut s);

    let reference = VisBuffer::reference(&cfg, &s).unwrap();
    let mut device = reference.packed(&cfg).unwrap();
    assert_eq!(device.len(), cfg.geometry.packed_len(layout));

    device.reorder(&cfg).unwrap();
    let report = device.check(&cfg, &reference, Verbosity::Deviations, Some(&s), &mut std::io::sink()).unwrap();
    assert!(report.passed(), "{numeric:?}/{accumulation:?}/{layout:?}: {report:?}");

    let dense = device.expand(&cfg).unwrap();
    assert_eq!(dense.hermitian_mismatches(&cfg).unwrap(), 0);
    (reference, dense)
}

#[test]
fn every_mode_and_layout_round_trips() {
    for layout in [PackedLayout::Tiled, PackedLayout::Split] {
        run(NumericMode::Float, AccumulationWidth::Standard, layout);
        run(NumericMode::Fixed, AccumulationWidth::Standard, layout);
        run(NumericMode::Fixed, AccumulationWidth::Extended, layout);
    }
}

#[test]
fn layouts_agree_on_the_dense_result() {
    let (_, tiled) = run(NumericMode::Float, AccumulationWidth::Standard, PackedLayout::Tiled);
    let (_, split) = run(NumericMode::Float, AccumulationWidth::Standard, PackedLayout::Split);
    assert_eq!(tiled.id(), split.id());
}

#[test]
fn injected_error_is_caught_after_reorder() {
    let cfg = CorrConfig::new(
        default_geometry(),
        NumericMode::Float,
        AccumulationWidth::Standard,
        PackedLayout::Tiled,
    )
    .unwrap();
    let mut s = vec![Sample::default(); cfg.geometry.sample_len()];
    StimulusGenerator::new(NumericMode::Float, 77).generate(&mut s);
    let reference = VisBuffer::reference(&cfg, &s).unwrap();

    let mut canonical = reference.clone();
    let victim = xcorr_core::layout::index::canonical_index(&cfg.geometry, 2, 9, 4, 1, 0);
    let v = canonical.get(victim);
    canonical.set(victim, num_complex::Complex64::new(v.re + 1.0, v.im));

    let mut device = canonical.packed(&cfg).unwrap();
    device.reorder(&cfg).unwrap();
    let report = device.check(&cfg, &reference, Verbosity::Deviations, None, &mut std::io::sink()).unwrap();
    assert_eq!(report.deviation_count, 1);
    assert_eq!(report.deviations[0].index, victim);
}
