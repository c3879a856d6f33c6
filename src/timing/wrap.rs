use crate::foundation::math::clamp01;
use crate::glyph::library::GlyphLibrary;
use crate::timing::composer::{CHAR_GAP, UNKNOWN_ADVANCE, scale_for_font_size};

/// Base distance between wrapped lines, in pixels.
pub const LINE_SPACING: f64 = 35.0;

/// Width of `text` at `font_size` using unvaried glyph advances.
///
/// Wrapping decisions use this so they do not depend on (or consume) random variation.
pub fn measure_text(text: &str, font_size: f64, library: &GlyphLibrary) -> f64 {
    let scale = scale_for_font_size(font_size);
    text.chars()
        .map(|ch| match library.get(ch) {
            Some(p) => p.width * scale + CHAR_GAP * scale,
            None => UNKNOWN_ADVANCE * scale,
        })
        .sum()
}

/// Greedy word wrap: words are packed onto a line until the next one would overflow `max_width`.
///
/// A single word wider than `max_width` still gets a line of its own.
pub fn wrap_words(
    text: &str,
    max_width: f64,
    font_size: f64,
    library: &GlyphLibrary,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split(' ') {
        let candidate = if line.is_empty() {
            format!("{word} ")
        } else {
            format!("{line}{word} ")
        };
        if !line.is_empty() && measure_text(&candidate, font_size, library) > max_width {
            lines.push(line.trim().to_owned());
            line = format!("{word} ");
        } else {
            line = candidate;
        }
    }
    lines.push(line.trim().to_owned());
    lines
}

/// Progress of line `index` when `line_count` lines share a block's `progress` in sequence.
pub fn line_progress(progress: f64, line_count: usize, index: usize) -> f64 {
    clamp01(clamp01(progress) * line_count as f64 - index as f64)
}

/// Vertical offset of line `index`, with a slight irregular drift in spacing.
pub fn line_offset(index: usize) -> f64 {
    let i = index as f64;
    i * (LINE_SPACING + (i * 1.7).sin() * 2.0)
}

#[cfg(test)]
#[path = "../../tests/unit/timing/wrap.rs"]
mod tests;
