use super::*;
use crate::compile::plan::DrawOp;

fn ctx_parts() -> (Palette, DecorationTime) {
    (Palette::default(), DecorationTime::ZERO)
}

#[test]
fn half_written_text_has_one_pen_tip_and_a_cursor() {
    let (palette, deco) = ctx_parts();
    let ctx = DrawCtx::new(GlyphLibrary::builtin(), &palette, deco);
    let mut cache = VariationCache::with_seed(7);
    let mut list = DrawList::new();
    draw_text(
        &mut list,
        &ctx,
        &mut cache,
        "x+1",
        Point::new(20.0, 40.0),
        0.5,
        &TextDrawOpts::new(28.0),
    );
    let count = |role| list.ops().iter().filter(|op| op.role() == role).count();
    assert!(count(OpRole::PenTip) <= 1);
    assert_eq!(count(OpRole::Cursor), 2);
    assert!(count(OpRole::CompletedStroke) > 0);
    assert_eq!(cache.len(), 3);
}

#[test]
fn finished_text_has_no_overlays() {
    let (palette, deco) = ctx_parts();
    let ctx = DrawCtx::new(GlyphLibrary::builtin(), &palette, deco);
    let mut cache = VariationCache::with_seed(7);
    let mut list = DrawList::new();
    draw_text(
        &mut list,
        &ctx,
        &mut cache,
        "x+1",
        Point::ORIGIN,
        1.0,
        &TextDrawOpts::new(28.0),
    );
    for role in [
        OpRole::PenTip,
        OpRole::Cursor,
        OpRole::Badge,
        OpRole::ActiveStroke,
        OpRole::DirectionArrow,
    ] {
        assert!(list.ops().iter().all(|op| op.role() != role), "{role:?}");
    }
}

#[test]
fn redraw_reuses_cached_variations() {
    let (palette, deco) = ctx_parts();
    let ctx = DrawCtx::new(GlyphLibrary::builtin(), &palette, deco);
    let mut cache = VariationCache::new();
    let opts = TextDrawOpts::new(24.0).with_run(3);

    let mut a = DrawList::new();
    draw_text(&mut a, &ctx, &mut cache, "2x=6", Point::ORIGIN, 0.7, &opts);
    let mut b = DrawList::new();
    draw_text(&mut b, &ctx, &mut cache, "2x=6", Point::ORIGIN, 0.7, &opts);
    assert_eq!(a.ops(), b.ops());
    assert_eq!(cache.len(), 4);
}

#[test]
fn unknown_characters_are_skipped_silently() {
    let (palette, deco) = ctx_parts();
    let ctx = DrawCtx::new(GlyphLibrary::builtin(), &palette, deco);
    let mut cache = VariationCache::with_seed(1);
    let mut list = DrawList::new();
    draw_text(
        &mut list,
        &ctx,
        &mut cache,
        "QZ?",
        Point::ORIGIN,
        0.5,
        &TextDrawOpts::new(20.0).with_cursor(false),
    );
    assert!(list.is_empty());
    assert!(cache.is_empty());
}

#[test]
fn wrapped_lines_stack_downward_and_write_in_order() {
    let (palette, deco) = ctx_parts();
    let ctx = DrawCtx::new(GlyphLibrary::builtin(), &palette, deco);
    let mut cache = VariationCache::with_seed(2);
    let mut list = DrawList::new();
    let opts = TextDrawOpts::new(20.0)
        .with_cursor(false)
        .with_guidance(false)
        .with_max_width(Some(60.0));
    draw_text(&mut list, &ctx, &mut cache, "add one to both", Point::ORIGIN, 1.0, &opts);

    let max_y = list
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Line { to, .. } => Some(to.y),
            _ => None,
        })
        .fold(f64::MIN, f64::max);
    assert!(max_y > 35.0, "expected a second line, got max y {max_y}");
    assert_eq!(cache.len(), "addonetoboth".len());
}
