use std::f64::consts::PI;

use super::*;

const EARLY_BLIGHT: [f32; 10] = [0.01, 0.932, 0.01, 0.01, 0.01, 0.01, 0.01, 0.01, 0.01, 0.008];

#[test]
fn slices_follow_category_order() {
    let slices = layout_slices(&EARLY_BLIGHT);
    assert_eq!(slices.len(), shared::CLASS_COUNT);
    assert_eq!(slices[0].label, "Bacterial Spot");
    assert_eq!(slices[1].label, "Early Blight");
    assert_eq!(slices[9].label, "Healthy");
}

#[test]
fn colors_are_stable_across_renders() {
    let first = layout_slices(&EARLY_BLIGHT);
    let second = layout_slices(&EARLY_BLIGHT);
    assert_eq!(first, second);

    for (slice, color) in first.iter().zip(SLICE_COLORS) {
        assert_eq!(slice.color, color);
    }
}

#[test]
fn spans_are_contiguous_and_cover_a_full_turn() {
    let slices = layout_slices(&EARLY_BLIGHT);

    assert!((slices[0].start - (-PI / 2.0)).abs() < 1e-9);
    for pair in slices.windows(2) {
        assert!((pair[0].end - pair[1].start).abs() < 1e-9);
    }

    let total_span: f64 = slices.iter().map(|s| s.end - s.start).sum();
    assert!((total_span - 2.0 * PI).abs() < 1e-9);
}

#[test]
fn spans_are_proportional_to_probability() {
    let slices = layout_slices(&EARLY_BLIGHT);
    let widest = slices
        .iter()
        .max_by(|a, b| a.fraction.partial_cmp(&b.fraction).unwrap())
        .unwrap();
    assert_eq!(widest.label, "Early Blight");
    assert!(widest.fraction > 0.9);
}

#[test]
fn zero_total_yields_zero_spans() {
    let slices = layout_slices(&[0.0; 10]);
    assert_eq!(slices.len(), shared::CLASS_COUNT);
    for slice in &slices {
        assert_eq!(slice.fraction, 0.0);
        assert_eq!(slice.start, slice.end);
    }
}

#[test]
fn surface_starts_without_a_mounted_chart() {
    let surface = ChartSurface::new();
    assert!(!surface.is_mounted());
}
