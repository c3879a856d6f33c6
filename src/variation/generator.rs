use rand::Rng;

/// Per-occurrence handwriting perturbation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HandwritingVariation {
    /// Pressure/ink-width factor, `0.9..=1.1`.
    pub stroke_width: f64,
    /// Shear angle in degrees, `-15..=15`.
    pub slant: f64,
    /// Horizontal advance factor, `0.9..=1.1`.
    pub spacing: f64,
    /// Vertical offset in glyph units, `-2..=2`.
    pub baseline_shift: f64,
    /// Uniform scale factor, `0.95..=1.05`.
    pub character_scale: f64,
}

impl HandwritingVariation {
    /// The no-op variation: applying it leaves a pattern geometrically unchanged.
    pub const IDENTITY: Self = Self {
        stroke_width: 1.0,
        slant: 0.0,
        spacing: 1.0,
        baseline_shift: 0.0,
        character_scale: 1.0,
    };

    pub(crate) const STROKE_WIDTH_RANGE: (f64, f64) = (0.9, 1.1);
    pub(crate) const SLANT_RANGE: (f64, f64) = (-15.0, 15.0);
    pub(crate) const SPACING_RANGE: (f64, f64) = (0.9, 1.1);
    pub(crate) const BASELINE_SHIFT_RANGE: (f64, f64) = (-2.0, 2.0);
    pub(crate) const CHARACTER_SCALE_RANGE: (f64, f64) = (0.95, 1.05);

    /// Draw a fresh variation from the thread-local RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Draw a fresh variation from `rng`, each field independent and uniform over its range.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        fn draw<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
            rng.gen_range(lo..=hi)
        }

        Self {
            stroke_width: draw(rng, Self::STROKE_WIDTH_RANGE),
            slant: draw(rng, Self::SLANT_RANGE),
            spacing: draw(rng, Self::SPACING_RANGE),
            baseline_shift: draw(rng, Self::BASELINE_SHIFT_RANGE),
            character_scale: draw(rng, Self::CHARACTER_SCALE_RANGE),
        }
    }

    /// `true` when every field lies inside its documented range.
    pub fn is_within_ranges(&self) -> bool {
        fn inside(v: f64, (lo, hi): (f64, f64)) -> bool {
            v >= lo && v <= hi
        }

        inside(self.stroke_width, Self::STROKE_WIDTH_RANGE)
            && inside(self.slant, Self::SLANT_RANGE)
            && inside(self.spacing, Self::SPACING_RANGE)
            && inside(self.baseline_shift, Self::BASELINE_SHIFT_RANGE)
            && inside(self.character_scale, Self::CHARACTER_SCALE_RANGE)
    }
}

impl Default for HandwritingVariation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "../../tests/unit/variation/generator.rs"]
mod tests;
