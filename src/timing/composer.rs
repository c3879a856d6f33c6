use crate::foundation::math::clamp01;
use crate::glyph::library::GlyphLibrary;
use crate::glyph::model::CharacterPattern;
use crate::variation::cache::{OccurrenceKey, VariationCache};
use crate::variation::generator::HandwritingVariation;
use crate::variation::transform::apply_variation;

/// Duration units contributed by one drawable stroke at unit stroke width.
pub const STROKE_DURATION_UNIT: f64 = 350.0;
/// Authored glyph box height; a font size of this many pixels draws glyphs at scale 1.
pub const GLYPH_DESIGN_HEIGHT: f64 = 30.0;
/// Gap between characters in glyph units, before spacing variation.
pub const CHAR_GAP: f64 = 5.0;
/// Advance of a character missing from the glyph library, in glyph units.
pub const UNKNOWN_ADVANCE: f64 = 15.0;

/// Pixel scale for a font size.
pub fn scale_for_font_size(font_size: f64) -> f64 {
    font_size / GLYPH_DESIGN_HEIGHT
}

/// Duration weight of one character: drawable strokes times the unit, divided by the
/// variation's stroke-width factor.
pub fn char_weight(pattern: &CharacterPattern, variation: &HandwritingVariation) -> f64 {
    let strokes = pattern.drawable_stroke_count() as f64;
    if strokes == 0.0 || variation.stroke_width <= 0.0 {
        return 0.0;
    }
    strokes * STROKE_DURATION_UNIT / variation.stroke_width
}

/// Split a global reveal fraction across sequential durations.
///
/// Item `i` starts when every earlier item has finished. Items with zero weight count as
/// revealed as soon as the clock reaches their start. With no weight at all, everything flips to
/// revealed at `progress == 1`.
pub fn reveal_fractions(weights: &[f64], progress: f64) -> Vec<f64> {
    let progress = clamp01(progress);
    let total: f64 = weights.iter().map(|w| w.max(0.0)).sum();
    if total <= 0.0 {
        let v = if progress >= 1.0 { 1.0 } else { 0.0 };
        return vec![v; weights.len()];
    }

    let now = progress * total;
    let mut start = 0.0;
    weights
        .iter()
        .map(|w| {
            let w = w.max(0.0);
            let end = start + w;
            let frac = if now >= end {
                1.0
            } else if now < start || w == 0.0 {
                0.0
            } else {
                clamp01((now - start) / w)
            };
            start = end;
            frac
        })
        .collect()
}

/// One laid-out character.
#[derive(Clone, Debug)]
pub struct CharSlot {
    /// Position inside the text, counted in characters.
    pub index: usize,
    /// The character.
    pub ch: char,
    /// Variation-applied pattern; `None` for characters the library lacks.
    pub pattern: Option<CharacterPattern>,
    /// Variation used for this occurrence; `None` for unknown characters.
    pub variation: Option<HandwritingVariation>,
    /// Horizontal offset from the text origin, in pixels.
    pub x_offset: f64,
    /// Horizontal advance in pixels.
    pub advance: f64,
    /// Duration weight (see [`char_weight`]).
    pub weight: f64,
}

/// Reveal state of one character at some global progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharReveal {
    /// Character index.
    pub index: usize,
    /// Fraction of the character drawn, in `[0, 1]`.
    pub local_progress: f64,
    /// Horizontal offset from the text origin, in pixels.
    pub x_offset: f64,
}

/// A string laid out for handwriting: per-character transformed patterns, advances and weights.
///
/// Building consults the variation cache; revealing is a pure function of the layout and a
/// progress value, so callers may scrub freely.
#[derive(Clone, Debug)]
pub struct TextLayout {
    font_size: f64,
    scale: f64,
    slots: Vec<CharSlot>,
}

impl TextLayout {
    /// Lay out `text` as text run `run`, drawing variations from `cache`.
    pub fn build(
        text: &str,
        run: u32,
        font_size: f64,
        library: &GlyphLibrary,
        cache: &mut VariationCache,
    ) -> Self {
        Self::build_from(text, run, 0, font_size, library, cache)
    }

    /// Like [`TextLayout::build`], numbering occurrences from `first_index`.
    ///
    /// Used when one run is split into several lines that must keep distinct occurrence keys.
    pub fn build_from(
        text: &str,
        run: u32,
        first_index: usize,
        font_size: f64,
        library: &GlyphLibrary,
        cache: &mut VariationCache,
    ) -> Self {
        let scale = scale_for_font_size(font_size);
        let mut x = 0.0;
        let mut slots = Vec::with_capacity(text.chars().count());

        for (index, ch) in text.chars().enumerate() {
            let index = first_index + index;
            let slot = match library.get(ch) {
                Some(src) => {
                    let variation = cache.get_or_generate(OccurrenceKey::new(run, ch, index));
                    let pattern = apply_variation(src, &variation);
                    let advance = pattern.width * scale + CHAR_GAP * scale * variation.spacing;
                    CharSlot {
                        index,
                        ch,
                        weight: char_weight(&pattern, &variation),
                        pattern: Some(pattern),
                        variation: Some(variation),
                        x_offset: x,
                        advance,
                    }
                }
                None => CharSlot {
                    index,
                    ch,
                    pattern: None,
                    variation: None,
                    x_offset: x,
                    advance: UNKNOWN_ADVANCE * scale,
                    weight: 0.0,
                },
            };
            x += slot.advance;
            slots.push(slot);
        }

        Self {
            font_size,
            scale,
            slots,
        }
    }

    /// Font size the layout was built for.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Pixel scale applied to glyph units.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Laid-out characters in text order.
    pub fn slots(&self) -> &[CharSlot] {
        &self.slots
    }

    /// Total advance of the text in pixels.
    pub fn width(&self) -> f64 {
        self.slots.iter().map(|s| s.advance).sum()
    }

    /// Sum of every character's duration weight.
    pub fn total_weight(&self) -> f64 {
        self.slots.iter().map(|s| s.weight).sum()
    }

    /// Per-character reveal at global `progress`, recomputed from scratch.
    pub fn reveal(&self, progress: f64) -> Vec<CharReveal> {
        let weights: Vec<f64> = self.slots.iter().map(|s| s.weight).collect();
        reveal_fractions(&weights, progress)
            .into_iter()
            .zip(&self.slots)
            .map(|(local_progress, slot)| CharReveal {
                index: slot.index,
                local_progress,
                x_offset: slot.x_offset,
            })
            .collect()
    }

    /// X of the writing cursor: the trailing edge of the last character the pen has begun.
    pub fn cursor_x(&self, progress: f64) -> f64 {
        self.reveal(progress)
            .iter()
            .zip(&self.slots)
            .rev()
            .find(|(r, s)| r.local_progress > 0.0 && s.weight > 0.0)
            .map(|(_, s)| s.x_offset + s.advance)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timing/composer.rs"]
mod tests;
