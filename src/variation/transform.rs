use crate::glyph::model::{CharacterPattern, StrokePoint};
use crate::variation::generator::HandwritingVariation;

/// Apply `variation` to `pattern`, producing a new pattern. The input is never touched.
///
/// Per point: shear by slant (`x += y * tan(slant)`), uniform scale, then baseline shift; pressure
/// is scaled by `stroke_width` (absent pressure counts as `1.0`). The box width picks up
/// `character_scale * spacing`, the height only `character_scale`.
pub fn apply_variation(
    pattern: &CharacterPattern,
    variation: &HandwritingVariation,
) -> CharacterPattern {
    let shear = variation.slant.to_radians().tan();
    let scale = variation.character_scale;

    let strokes = pattern
        .strokes
        .iter()
        .map(|stroke| {
            let mut out = stroke.clone();
            for p in &mut out.points {
                *p = transform_point(p, shear, scale, variation);
            }
            out
        })
        .collect();

    CharacterPattern {
        ch: pattern.ch,
        strokes,
        width: pattern.width * scale * variation.spacing,
        height: pattern.height * scale,
        baseline: pattern.baseline,
        variations: pattern.variations,
    }
}

fn transform_point(
    p: &StrokePoint,
    shear: f64,
    scale: f64,
    variation: &HandwritingVariation,
) -> StrokePoint {
    let slanted_x = p.x + p.y * shear;
    StrokePoint {
        x: slanted_x * scale,
        y: p.y * scale + variation.baseline_shift,
        pressure: Some(p.pressure_or_default() * variation.stroke_width),
        speed: p.speed,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/variation/transform.rs"]
mod tests;
