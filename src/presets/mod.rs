//! Ready-made demo boards: a row of characters written one after another.

use std::str::FromStr;

use crate::compile::board::{draw_grid, draw_guide_lines};
use crate::compile::decoration::DecorationTime;
use crate::compile::palette::Palette;
use crate::compile::plan::{DrawList, FramePlan};
use crate::compile::pressure::{AuthoredPressure, PressureSource, PressureStyle, RadialPressure};
use crate::compile::text::{DrawCtx, TextDrawOpts, draw_layout};
use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::foundation::error::InkscribeError;
use crate::glyph::library::GlyphLibrary;
use crate::timing::composer::{GLYPH_DESIGN_HEIGHT, TextLayout};
use crate::variation::cache::VariationCache;

/// Distance from the baseline to the dashed ascender guide.
pub const GUIDE_LINE_HEIGHT: f64 = 60.0;

/// Ink of the character being written in the practice demos.
pub const DEMO_ACTIVE_INK: Rgba8 = Rgba8::rgb(0x3B, 0x82, 0xF6);
/// Ink of characters and strokes already written in the practice demos.
pub const DEMO_COMPLETED_INK: Rgba8 = Rgba8::rgb(0x10, 0xB9, 0x81);

/// The built-in demos.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetKind {
    /// Letters on ruled lines.
    Alphabet,
    /// A digit sequence.
    Numbers,
    /// Large math symbols.
    Symbols,
    /// Simulated pen pressure made visible.
    Pressure,
    /// Stroke-order badges and direction arrows.
    Guidance,
}

impl FromStr for PresetKind {
    type Err = InkscribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alphabet" => Ok(Self::Alphabet),
            "numbers" => Ok(Self::Numbers),
            "symbols" => Ok(Self::Symbols),
            "pressure" => Ok(Self::Pressure),
            "guidance" => Ok(Self::Guidance),
            other => Err(InkscribeError::validation(format!(
                "unknown preset \"{other}\" (expected alphabet|numbers|symbols|pressure|guidance)"
            ))),
        }
    }
}

/// Configuration of a demo board.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoPreset {
    /// Which demo this started from.
    pub kind: PresetKind,
    /// Characters written left to right.
    pub chars: String,
    /// Glyph scale (design units to pixels).
    pub scale: f64,
    /// Stroke-order guidance on the character being written.
    pub guidance: bool,
    /// Ruled handwriting lines under the row.
    pub guide_lines: bool,
    /// Pressure visualization.
    pub pressure_style: PressureStyle,
    /// Pressure rising away from the canvas center instead of authored pressure.
    pub radial_pressure: bool,
    /// Ink of the character being written; `None` uses the palette ink.
    pub ink: Option<Rgba8>,
    /// Ink of finished strokes; `None` uses `ink`.
    pub completed_ink: Option<Rgba8>,
}

impl DemoPreset {
    fn base(kind: PresetKind, chars: &str, scale: f64) -> Self {
        Self {
            kind,
            chars: chars.to_owned(),
            scale,
            guidance: true,
            guide_lines: false,
            pressure_style: PressureStyle::Ink,
            radial_pressure: false,
            ink: Some(DEMO_ACTIVE_INK),
            completed_ink: Some(DEMO_COMPLETED_INK),
        }
    }

    /// Letters at scale 3 on ruled guide lines.
    pub fn alphabet() -> Self {
        Self {
            guide_lines: true,
            ..Self::base(PresetKind::Alphabet, "ABC", 3.0)
        }
    }

    /// The digits 4 to 9 at scale 2.
    pub fn numbers() -> Self {
        Self::base(PresetKind::Numbers, "456789", 2.0)
    }

    /// Basic operators at scale 4.
    pub fn symbols() -> Self {
        Self::base(PresetKind::Symbols, "+-×÷=", 4.0)
    }

    /// Radial pressure drawn as stroke thickness.
    pub fn pressure() -> Self {
        Self {
            guidance: false,
            pressure_style: PressureStyle::Thickness,
            radial_pressure: true,
            ink: None,
            completed_ink: None,
            ..Self::base(PresetKind::Pressure, "abc", 3.0)
        }
    }

    /// A few characters with stroke-order badges, in the palette ink.
    pub fn guidance() -> Self {
        Self {
            ink: None,
            completed_ink: None,
            ..Self::base(PresetKind::Guidance, "a4+", 4.0)
        }
    }

    /// Default configuration of `kind`.
    pub fn named(kind: PresetKind) -> Self {
        match kind {
            PresetKind::Alphabet => Self::alphabet(),
            PresetKind::Numbers => Self::numbers(),
            PresetKind::Symbols => Self::symbols(),
            PresetKind::Pressure => Self::pressure(),
            PresetKind::Guidance => Self::guidance(),
        }
    }

    /// Builder-style characters.
    pub fn with_chars(mut self, chars: impl Into<String>) -> Self {
        self.chars = chars.into();
        self
    }

    /// Builder-style scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Builder-style guidance toggle.
    pub fn with_guidance(mut self, guidance: bool) -> Self {
        self.guidance = guidance;
        self
    }

    /// Builder-style guide line toggle.
    pub fn with_guide_lines(mut self, guide_lines: bool) -> Self {
        self.guide_lines = guide_lines;
        self
    }

    /// Builder-style pressure visualization.
    pub fn with_pressure_style(mut self, style: PressureStyle) -> Self {
        self.pressure_style = style;
        self
    }

    /// Builder-style ink override.
    pub fn with_ink(mut self, ink: Option<Rgba8>) -> Self {
        self.ink = ink;
        self
    }

    /// Font size matching `scale`.
    pub fn font_size(&self) -> f64 {
        self.scale * GLYPH_DESIGN_HEIGHT
    }

    /// Compile the board with the row revealed up to `progress`.
    ///
    /// The row is centered horizontally with its glyph bottoms on the canvas midline.
    #[tracing::instrument(skip(self, palette, cache), fields(kind = ?self.kind))]
    pub fn compile_frame(
        &self,
        canvas: Canvas,
        palette: &Palette,
        progress: f64,
        cache: &mut VariationCache,
        deco: DecorationTime,
    ) -> FramePlan {
        let library = GlyphLibrary::builtin();
        let ctx = DrawCtx::new(library, palette, deco);
        let mut list = DrawList::new();
        draw_grid(&mut list, canvas, palette);

        let baseline = f64::from(canvas.height) / 2.0;
        if self.guide_lines {
            draw_guide_lines(&mut list, canvas, baseline, GUIDE_LINE_HEIGHT, palette);
        }

        let layout = TextLayout::build(&self.chars, 0, self.font_size(), library, cache);
        let origin = Point::new(
            (f64::from(canvas.width) - layout.width()) / 2.0,
            baseline - GLYPH_DESIGN_HEIGHT * self.scale,
        );

        let radial = RadialPressure::new(canvas.center());
        let pressure: &dyn PressureSource = if self.radial_pressure {
            &radial
        } else {
            &AuthoredPressure
        };
        let opts = TextDrawOpts::new(self.font_size())
            .with_ink(self.ink)
            .with_completed_ink(self.completed_ink)
            .with_guidance(self.guidance)
            .with_cursor(false)
            .with_pressure_style(self.pressure_style)
            .with_pressure(pressure);
        draw_layout(&mut list, &ctx, &layout, origin, progress, &opts);

        list.into_plan(canvas, palette.background)
    }
}

impl Default for DemoPreset {
    fn default() -> Self {
        Self::alphabet()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/presets/mod.rs"]
mod tests;
