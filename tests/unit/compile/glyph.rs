use super::*;
use crate::compile::plan::FramePlan;
use crate::foundation::core::Canvas;
use crate::glyph::model::{Stroke, StrokeDirection, StrokeKind};

fn compile(
    pattern: &CharacterPattern,
    cursor: StrokeCursor,
    opts: &GlyphDrawOpts<'_>,
    deco: DecorationTime,
) -> FramePlan {
    let mut list = DrawList::new();
    draw_character(
        &mut list,
        pattern,
        Point::new(100.0, 50.0),
        cursor,
        opts,
        &Palette::default(),
        deco,
    );
    list.into_plan(Canvas::new(300, 200).unwrap(), Rgba8::WHITE)
}

fn lines(plan: &FramePlan, role: OpRole) -> Vec<(Point, Point)> {
    plan.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Line { from, to, role: r, .. } if *r == role => Some((*from, *to)),
            _ => None,
        })
        .collect()
}

#[test]
fn one_mid_second_stroke() {
    let one = GlyphLibrary::builtin().get('1').unwrap();
    let opts = GlyphDrawOpts::new(2.0);
    let plan = compile(one, StrokeCursor::new(1, 0.5), &opts, DecorationTime::ZERO);

    // Stroke 0 whole: 3 points, 2 segments, ending on its authored last point.
    let done = lines(&plan, OpRole::CompletedStroke);
    assert_eq!(done.len(), 2);
    let s0_end = one.strokes[0].points[2];
    assert_eq!(done[1].1, Point::new(100.0 + s0_end.x * 2.0, 50.0 + s0_end.y * 2.0));

    // Stroke 1 through its midpoint: 5 points at 0.5 give two verbatim points plus one between
    // points 2 and 3.
    let active = lines(&plan, OpRole::ActiveStroke);
    assert_eq!(active.len(), 2);
    let (p2, p3) = (one.strokes[1].points[2], one.strokes[1].points[3]);
    let mid = Point::new(
        100.0 + (p2.x + p3.x) / 2.0 * 2.0,
        50.0 + (p2.y + p3.y) / 2.0 * 2.0,
    );
    assert!((active[1].1 - mid).hypot() < 1e-9);

    // Stroke 2 untouched: no segment reaches its points.
    let s2_start = one.strokes[2].points[0];
    let s2_px = Point::new(100.0 + s2_start.x * 2.0, 50.0 + s2_start.y * 2.0);
    assert!(plan.ops.iter().all(|op| match op {
        DrawOp::Line { from, to, .. } => *from != s2_px && *to != s2_px,
        _ => true,
    }));

    // Exactly one pen tip, sitting on the interpolated end.
    assert_eq!(plan.count_role(OpRole::PenTip), 1);
    let tip = plan
        .ops
        .iter()
        .find_map(|op| match op {
            DrawOp::Circle {
                center,
                role: OpRole::PenTip,
                ..
            } => Some(*center),
            _ => None,
        })
        .unwrap();
    assert!((tip - mid).hypot() < 1e-9);
    assert_eq!(plan.count_role(OpRole::Badge), 0);
}

#[test]
fn finished_character_has_no_pen_tip() {
    let one = GlyphLibrary::builtin().get('1').unwrap();
    let plan = compile(
        one,
        StrokeCursor::complete(one),
        &GlyphDrawOpts::new(1.0),
        DecorationTime::ZERO,
    );
    assert_eq!(plan.count_role(OpRole::PenTip), 0);
    assert_eq!(plan.count_role(OpRole::ActiveStroke), 0);
    assert_eq!(plan.count_role(OpRole::CompletedStroke), 2 + 4 + 2);
}

#[test]
fn zero_progress_stroke_draws_nothing_for_it() {
    let one = GlyphLibrary::builtin().get('1').unwrap();
    let plan = compile(
        one,
        StrokeCursor::new(0, 0.0),
        &GlyphDrawOpts::new(1.0),
        DecorationTime::ZERO,
    );
    assert!(plan.ops.is_empty());
}

#[test]
fn guidance_badges_every_stroke_and_points_the_current_one() {
    let one = GlyphLibrary::builtin().get('1').unwrap();
    let opts = GlyphDrawOpts::new(1.0).with_guidance(true);
    let plan = compile(one, StrokeCursor::new(1, 0.5), &opts, DecorationTime::ZERO);

    assert_eq!(plan.count_role(OpRole::Badge), 3);
    assert!(plan.count_role(OpRole::BadgeLabel) >= 3);
    assert_eq!(plan.count_role(OpRole::DirectionArrow), 2);

    let styles: Vec<(PathStyle, Rgba8)> = plan
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Circle {
                style,
                color,
                role: OpRole::Badge,
                ..
            } => Some((*style, *color)),
            _ => None,
        })
        .collect();
    let palette = Palette::default();
    assert_eq!(styles[0], (PathStyle::Fill, palette.badge_done));
    assert_eq!(styles[1], (PathStyle::Fill, palette.pen));
    assert!(matches!(styles[2].0, PathStyle::Stroke { .. }));
    assert_eq!(styles[2].1, palette.badge_future);
}

#[test]
fn degenerate_direction_skips_the_arrow() {
    let still = Stroke {
        id: 1,
        points: vec![StrokePoint::new(5.0, 5.0); 4],
        kind: StrokeKind::Line,
        direction: StrokeDirection::Down,
        speed: 1.0,
        natural_curve: false,
    };
    let pattern = CharacterPattern {
        ch: '.',
        strokes: vec![still],
        width: 10.0,
        height: 30.0,
        baseline: 25.0,
        variations: Default::default(),
    };
    let opts = GlyphDrawOpts::new(1.0).with_guidance(true);
    let plan = compile(&pattern, StrokeCursor::new(0, 0.6), &opts, DecorationTime::ZERO);
    assert_eq!(plan.count_role(OpRole::DirectionArrow), 0);
    assert_eq!(plan.count_role(OpRole::Badge), 1);
    assert_eq!(plan.count_role(OpRole::PenTip), 1);
}

#[test]
fn equal_inputs_give_equal_plans() {
    let a = GlyphLibrary::builtin().get('A').unwrap();
    let opts = GlyphDrawOpts::new(1.5).with_guidance(true);
    let deco = DecorationTime(2.25);
    let x = compile(a, StrokeCursor::new(2, 0.3), &opts, deco);
    let y = compile(a, StrokeCursor::new(2, 0.3), &opts, deco);
    assert_eq!(x.ops, y.ops);
}

#[test]
fn decoration_time_only_touches_overlays() {
    let a = GlyphLibrary::builtin().get('A').unwrap();
    let opts = GlyphDrawOpts::new(1.0).with_guidance(true);
    let x = compile(a, StrokeCursor::new(1, 0.5), &opts, DecorationTime(0.0));
    let y = compile(a, StrokeCursor::new(1, 0.5), &opts, DecorationTime(0.4));
    for role in [OpRole::CompletedStroke, OpRole::ActiveStroke] {
        assert_eq!(lines(&x, role), lines(&y, role));
    }
    assert_ne!(x.ops, y.ops);
}

#[test]
fn completed_ink_override_applies_to_finished_strokes_only() {
    let one = GlyphLibrary::builtin().get('1').unwrap();
    let green = Rgba8::from_hex("#10B981").unwrap();
    let opts = GlyphDrawOpts::new(1.0).with_completed_ink(Some(green));
    let plan = compile(one, StrokeCursor::new(1, 0.5), &opts, DecorationTime::ZERO);
    for op in &plan.ops {
        if let DrawOp::Line { color, role, .. } = op {
            match role {
                OpRole::CompletedStroke => assert_eq!(*color, green),
                OpRole::ActiveStroke => assert_eq!(*color, Palette::default().ink),
                _ => {}
            }
        }
    }
}

#[test]
fn feedback_style_marks_points() {
    let one = GlyphLibrary::builtin().get('1').unwrap();
    let opts = GlyphDrawOpts::new(1.0).with_pressure_style(PressureStyle::Feedback);
    let plan = compile(one, StrokeCursor::complete(one), &opts, DecorationTime::ZERO);
    assert_eq!(plan.count_role(OpRole::PressureMark), 3 + 5 + 3);
}
