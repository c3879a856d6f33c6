use super::*;

fn layout(text: &str, seed: u64) -> TextLayout {
    let mut cache = VariationCache::with_seed(seed);
    TextLayout::build(text, 0, 30.0, GlyphLibrary::builtin(), &mut cache)
}

#[test]
fn equal_weights_reveal_one_character_at_a_time() {
    // "AB C": the space has no strokes and therefore no duration.
    let w = 3.0 * STROKE_DURATION_UNIT;
    let f = reveal_fractions(&[w, w, 0.0, w], 0.5);
    assert_eq!(f[0], 1.0);
    assert!((f[1] - 0.5).abs() < 1e-9);
    assert_eq!(f[2], 0.0);
    assert_eq!(f[3], 0.0);
}

#[test]
fn layout_reveals_strictly_left_to_right() {
    let mut l = layout("AB C", 3);
    for slot in &mut l.slots {
        if slot.weight > 0.0 {
            slot.weight = 1050.0;
        }
    }
    let r = l.reveal(0.5);
    assert_eq!(r.len(), 4);
    assert_eq!(r[0].local_progress, 1.0);
    assert!((r[1].local_progress - 0.5).abs() < 1e-9);
    assert_eq!(r[2].local_progress, 0.0);
    assert_eq!(r[3].local_progress, 0.0);

    for step in 0..=50 {
        let fr = l.reveal(step as f64 / 50.0);
        for pair in fr.windows(2) {
            if pair[1].local_progress > 0.0 {
                assert_eq!(pair[0].local_progress, 1.0);
            }
        }
    }
}

#[test]
fn zero_total_weight_waits_for_the_end() {
    assert_eq!(reveal_fractions(&[0.0, 0.0], 0.99), vec![0.0, 0.0]);
    assert_eq!(reveal_fractions(&[0.0, 0.0], 1.0), vec![1.0, 1.0]);
    assert!(reveal_fractions(&[], 0.5).is_empty());
}

#[test]
fn progress_is_clamped() {
    let w = [1.0, 2.0];
    assert_eq!(reveal_fractions(&w, -1.0), vec![0.0, 0.0]);
    assert_eq!(reveal_fractions(&w, 4.0), vec![1.0, 1.0]);
}

#[test]
fn weight_scales_with_strokes_and_inverse_stroke_width() {
    let one = GlyphLibrary::builtin().get('1').unwrap();
    let mut v = HandwritingVariation::IDENTITY;
    assert!((char_weight(one, &v) - 1050.0).abs() < 1e-9);
    v.stroke_width = 0.5;
    assert!((char_weight(one, &v) - 2100.0).abs() < 1e-9);
    let space = GlyphLibrary::builtin().get(' ').unwrap();
    assert_eq!(char_weight(space, &v), 0.0);
}

#[test]
fn advances_accumulate_and_unknown_chars_take_fixed_width() {
    let l = layout("1Z1", 9);
    let s = l.slots();
    assert_eq!(s[0].x_offset, 0.0);
    assert!(s[1].pattern.is_none());
    assert_eq!(s[1].weight, 0.0);
    assert!((s[1].advance - UNKNOWN_ADVANCE).abs() < 1e-12);
    assert!((s[1].x_offset - s[0].advance).abs() < 1e-12);
    assert!((s[2].x_offset - (s[0].advance + s[1].advance)).abs() < 1e-12);

    let v = s[0].variation.unwrap();
    let p = s[0].pattern.as_ref().unwrap();
    assert!((s[0].advance - (p.width + CHAR_GAP * v.spacing)).abs() < 1e-12);
    assert!((l.width() - s.iter().map(|c| c.advance).sum::<f64>()).abs() < 1e-12);
}

#[test]
fn reveal_is_stateless_across_calls() {
    let l = layout("x+1=2", 4);
    let a = l.reveal(0.37);
    let _ = l.reveal(0.9);
    let _ = l.reveal(0.1);
    assert_eq!(a, l.reveal(0.37));
}

#[test]
fn same_seed_same_layout() {
    let a = layout("abc", 21);
    let b = layout("abc", 21);
    for (x, y) in a.slots().iter().zip(b.slots()) {
        assert_eq!(x.variation, y.variation);
        assert_eq!(x.x_offset, y.x_offset);
    }
}

#[test]
fn cursor_tracks_last_begun_character() {
    let l = layout("12", 2);
    assert_eq!(l.cursor_x(0.0), 0.0);
    let first_end = l.slots()[0].advance;
    assert!((l.cursor_x(0.01) - first_end).abs() < 1e-12);
    assert!((l.cursor_x(1.0) - l.width()).abs() < 1e-12);
}
