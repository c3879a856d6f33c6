use crate::foundation::core::Point;

/// One authored sample of a stroke, in glyph-local units (roughly a 20x30 box per character,
/// y grows downward, baseline near y=25).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokePoint {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Simulated pen pressure in `[0, 1]`; absent means full pressure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    /// Relative drawing speed hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl StrokePoint {
    /// Point with position only.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            pressure: None,
            speed: None,
        }
    }

    /// Builder-style pressure setter.
    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }

    /// Pressure, defaulting to `1.0` when the author left it out.
    pub fn pressure_or_default(&self) -> f64 {
        self.pressure.unwrap_or(1.0)
    }

    /// Position as a `kurbo` point.
    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Geometric family of a stroke. Informational only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeKind {
    /// Straight line.
    Line,
    /// Free curve.
    Curve,
    /// Circular arc.
    Arc,
}

/// Authored pen direction. Semantic only; no math depends on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeDirection {
    /// Pen moves downward.
    Down,
    /// Pen moves upward.
    Up,
    /// Pen moves rightward.
    Right,
    /// Pen moves leftward.
    Left,
    /// Clockwise loop.
    Clockwise,
    /// Counter-clockwise loop.
    Counterclockwise,
}

/// One pen-down to pen-up path. Strokes of a character are drawn strictly in authored order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Authored identifier (1-based in the built-in table).
    pub id: u32,
    /// Ordered samples.
    pub points: Vec<StrokePoint>,
    /// Geometric family.
    pub kind: StrokeKind,
    /// Authored pen direction.
    pub direction: StrokeDirection,
    /// Relative speed multiplier.
    pub speed: f64,
    /// Whether interpolated output gets the light smoothing pass.
    #[serde(default)]
    pub natural_curve: bool,
}

impl Stroke {
    /// `true` when the stroke has no samples and contributes nothing.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Authored variation ranges. Kept as data; the variation generator uses its own fixed ranges.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VariationRanges {
    /// Plausible glyph width range.
    pub width_range: [f64; 2],
    /// Plausible slant range in degrees.
    pub slant_range: [f64; 2],
    /// Plausible spacing factor range.
    pub spacing_range: [f64; 2],
}

impl Default for VariationRanges {
    fn default() -> Self {
        Self {
            width_range: [0.0, 0.0],
            slant_range: [0.0, 0.0],
            spacing_range: [1.0, 1.0],
        }
    }
}

/// Stroke pattern for one character.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CharacterPattern {
    /// The character this pattern draws.
    #[serde(rename = "char")]
    pub ch: char,
    /// Strokes in required drawing order.
    pub strokes: Vec<Stroke>,
    /// Horizontal advance in glyph units.
    pub width: f64,
    /// Glyph box height in glyph units.
    pub height: f64,
    /// Distance from the top of the box to the baseline.
    pub baseline: f64,
    /// Authored variation ranges.
    #[serde(default)]
    pub variations: VariationRanges,
}

impl CharacterPattern {
    /// Number of strokes that actually contain points.
    pub fn drawable_stroke_count(&self) -> usize {
        self.strokes.iter().filter(|s| !s.is_empty()).count()
    }

    pub(crate) fn all_coords_finite(&self) -> bool {
        let dims = [self.width, self.height, self.baseline];
        dims.iter().all(|v| v.is_finite())
            && self.strokes.iter().all(|s| {
                s.speed.is_finite()
                    && s.points.iter().all(|p| {
                        p.x.is_finite()
                            && p.y.is_finite()
                            && p.pressure.is_none_or(f64::is_finite)
                            && p.speed.is_none_or(f64::is_finite)
                    })
            })
    }
}
