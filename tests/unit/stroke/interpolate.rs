use super::*;
use crate::glyph::library::GlyphLibrary;
use crate::glyph::model::{StrokeDirection, StrokeKind};

fn straight(n: usize, natural_curve: bool) -> Stroke {
    Stroke {
        id: 1,
        points: (0..n)
            .map(|i| StrokePoint::new(i as f64 * 10.0, i as f64 * 2.0).with_pressure(0.5))
            .collect(),
        kind: StrokeKind::Line,
        direction: StrokeDirection::Right,
        speed: 1.0,
        natural_curve,
    }
}

#[test]
fn zero_progress_is_empty_and_full_progress_is_everything() {
    let s = straight(5, false);
    assert!(interpolate_stroke(&s, 0.0).is_empty());
    assert!(interpolate_stroke(&s, -3.0).is_empty());
    assert_eq!(interpolate_stroke(&s, 1.0), s.points);
    assert_eq!(interpolate_stroke(&s, 7.5), s.points);
}

#[test]
fn empty_stroke_yields_nothing() {
    let s = straight(0, true);
    assert!(interpolate_stroke(&s, 0.5).is_empty());
    assert!(interpolate_stroke(&s, 1.0).is_empty());
}

#[test]
fn midway_appends_a_lerped_point() {
    let mut s = straight(5, false);
    s.points[3].pressure = Some(1.0);
    let out = interpolate_stroke(&s, 0.5);
    assert_eq!(out.len(), 3);
    assert_eq!(&out[..2], &s.points[..2]);
    assert!((out[2].x - 25.0).abs() < 1e-12);
    assert!((out[2].y - 5.0).abs() < 1e-12);
    assert!((out[2].pressure_or_default() - 0.75).abs() < 1e-12);
}

#[test]
fn exact_boundary_adds_no_synthetic_point() {
    let s = straight(4, false);
    let out = interpolate_stroke(&s, 0.5);
    assert_eq!(out, s.points[..2].to_vec());
}

#[test]
fn last_segment_is_not_extrapolated() {
    let s = straight(4, false);
    // target = 3 = n - 1: no next point to blend toward.
    let out = interpolate_stroke(&s, 0.9);
    assert_eq!(out, s.points[..3].to_vec());
}

#[test]
fn earlier_output_is_prefix_of_later_output() {
    let s = straight(7, false);
    let mut prev: Vec<StrokePoint> = Vec::new();
    for step in 0..=100 {
        let p = step as f64 / 100.0;
        let out = interpolate_stroke(&s, p);
        assert!(out.len() >= prev.len(), "count shrank at p={p}");
        let verbatim = ((p * 7.0).floor() as usize).min(7);
        assert_eq!(&out[..verbatim], &s.points[..verbatim]);
        if !prev.is_empty() {
            let keep = prev.len() - 1;
            assert_eq!(&out[..keep], &prev[..keep]);
        }
        prev = out;
    }
}

#[test]
fn natural_curve_smooths_result() {
    let mut s = straight(3, true);
    s.points[1] = StrokePoint::new(10.0, 10.0);
    let out = interpolate_stroke(&s, 1.0);
    assert_eq!(out[0], s.points[0]);
    assert_eq!(out[2], s.points[2]);
    assert!((out[1].x - 12.0).abs() < 1e-12);
    assert!((out[1].y - 10.4).abs() < 1e-12);
}

#[test]
fn cursor_splits_evenly_over_drawable_strokes() {
    let one = GlyphLibrary::builtin().get('1').unwrap();
    assert_eq!(StrokeCursor::for_character(one, 0.0), StrokeCursor::new(0, 0.0));

    let c = StrokeCursor::for_character(one, 0.5);
    assert_eq!(c.index, 1);
    assert!((c.progress - 0.5).abs() < 1e-12);

    let c = StrokeCursor::for_character(one, 0.9);
    assert_eq!(c.index, 2);
    assert!((c.progress - 0.7).abs() < 1e-9);

    let done = StrokeCursor::for_character(one, 1.0);
    assert_eq!(done.index, 3);
    assert_eq!(done.state_of(2), StrokeState::Completed);
}

#[test]
fn cursor_skips_empty_strokes() {
    let mut pattern = GlyphLibrary::builtin().get('1').unwrap().clone();
    pattern.strokes.insert(1, straight(0, false));
    let c = StrokeCursor::for_character(&pattern, 0.5);
    assert_eq!(c.index, 2);
    assert_eq!(c.state_of(1), StrokeState::Completed);
    assert_eq!(c.state_of(2), StrokeState::Current);
    assert_eq!(c.state_of(3), StrokeState::Future);
}

#[test]
fn strokeless_pattern_is_immediately_complete() {
    let space = GlyphLibrary::builtin().get(' ').unwrap();
    assert_eq!(StrokeCursor::for_character(space, 0.3).index, 0);
    assert_eq!(StrokeCursor::complete(space).index, 0);
}
