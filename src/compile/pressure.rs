use crate::foundation::core::{Point, Rgba8};
use crate::foundation::math::clamp01;
use crate::glyph::model::StrokePoint;

/// Where per-point pen pressure comes from.
///
/// Pressure is simulated, never read from hardware; any `Fn(&StrokePoint, Point) -> f64`
/// closure also works as a source.
pub trait PressureSource {
    /// Pressure for `point`, which lands at canvas position `pos`.
    fn pressure_at(&self, point: &StrokePoint, pos: Point) -> f64;
}

impl<F> PressureSource for F
where
    F: Fn(&StrokePoint, Point) -> f64,
{
    fn pressure_at(&self, point: &StrokePoint, pos: Point) -> f64 {
        self(point, pos)
    }
}

/// The pressure stored on the (variation-scaled) point, `1.0` when absent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AuthoredPressure;

impl PressureSource for AuthoredPressure {
    fn pressure_at(&self, point: &StrokePoint, _pos: Point) -> f64 {
        point.pressure_or_default()
    }
}

/// The same pressure everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantPressure(pub f64);

impl PressureSource for ConstantPressure {
    fn pressure_at(&self, _point: &StrokePoint, _pos: Point) -> f64 {
        self.0
    }
}

/// Pressure rising with distance from a center: `0.3` at the center, `1.0` at `reach` and beyond.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialPressure {
    /// Canvas point of lightest pressure.
    pub center: Point,
    /// Distance at which pressure saturates.
    pub reach: f64,
}

impl RadialPressure {
    /// Default reach in pixels.
    pub const DEFAULT_REACH: f64 = 200.0;

    /// Radial source around `center` with the default reach.
    pub fn new(center: Point) -> Self {
        Self {
            center,
            reach: Self::DEFAULT_REACH,
        }
    }
}

impl PressureSource for RadialPressure {
    fn pressure_at(&self, _point: &StrokePoint, pos: Point) -> f64 {
        if self.reach <= 0.0 {
            return 1.0;
        }
        clamp01(0.3 + pos.distance(self.center) / self.reach * 0.7)
    }
}

/// How pressure is visualized on ink segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureStyle {
    /// Natural ink: width and alpha follow pressure gently.
    #[default]
    Ink,
    /// Width grows strongly with pressure.
    Thickness,
    /// Color shifts from red (light) to green (heavy).
    Heat,
    /// Hue-coded width plus a dot per point sized by pressure.
    Feedback,
    /// Green inside the healthy band, red outside it.
    Detection,
}

/// Position of a segment inside the polyline being drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentCtx {
    /// Segment index (index of its first point).
    pub index: usize,
    /// Number of points in the polyline.
    pub point_count: usize,
    /// Whether the stroke is fully drawn.
    pub completed: bool,
    /// Pressure-free base width in pixels.
    pub base_width: f64,
}

/// Resolved paint of one ink segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentInk {
    /// Line width in pixels.
    pub width: f64,
    /// Color.
    pub color: Rgba8,
    /// Opacity.
    pub opacity: f32,
}

const TOO_LIGHT: f64 = 0.2;
const TOO_HEAVY: f64 = 0.8;
const DETECT_BAD: Rgba8 = Rgba8::rgb(0xEF, 0x44, 0x44);
const DETECT_GOOD: Rgba8 = Rgba8::rgb(0x10, 0xB9, 0x81);

impl PressureStyle {
    /// Paint for a segment starting at a point with `pressure`.
    pub fn segment(self, pressure: f64, seg: SegmentCtx, ink: Rgba8) -> SegmentInk {
        match self {
            Self::Ink => {
                let width = seg.base_width * (0.7 + pressure * 0.6);
                let i = seg.index as f64;
                if seg.completed {
                    SegmentInk {
                        width: width * (1.0 + (i * 0.5).sin() * 0.1),
                        color: ink,
                        opacity: (0.85 + pressure * 0.15) as f32,
                    }
                } else {
                    let tail = (seg.point_count as f64 - 5.0).max(1.0);
                    let fade = (i / tail).min(1.0);
                    SegmentInk {
                        width,
                        color: ink,
                        opacity: (0.7 + pressure * 0.3 * fade) as f32,
                    }
                }
            }
            Self::Thickness => {
                let p = clamp01(pressure);
                SegmentInk {
                    width: 2.0 + p * 12.0,
                    color: ink,
                    opacity: (0.8 + p * 0.2) as f32,
                }
            }
            Self::Heat => {
                let p = clamp01(pressure);
                let intensity = (p * 255.0).floor() as u8;
                SegmentInk {
                    width: 4.0,
                    color: Rgba8::rgb(255 - intensity, intensity, intensity / 2),
                    opacity: (0.7 + p * 0.3) as f32,
                }
            }
            Self::Feedback => {
                let p = clamp01(pressure);
                SegmentInk {
                    width: 3.0 + p * 6.0,
                    color: Rgba8::from_hsl(p * 120.0, 0.7, 0.5),
                    opacity: 1.0,
                }
            }
            Self::Detection => SegmentInk {
                width: 4.0,
                color: if Self::is_out_of_band(pressure) {
                    DETECT_BAD
                } else {
                    DETECT_GOOD
                },
                opacity: 1.0,
            },
        }
    }

    /// Whether each point also gets a pressure dot.
    pub fn marks_points(self) -> bool {
        self == Self::Feedback
    }

    /// Radius of the pressure dot for `pressure`.
    pub fn mark_radius(pressure: f64) -> f64 {
        2.0 + clamp01(pressure) * 4.0
    }

    /// `true` when `pressure` is too light or too heavy for the detection style.
    pub fn is_out_of_band(pressure: f64) -> bool {
        pressure < TOO_LIGHT || pressure > TOO_HEAVY
    }
}

impl std::str::FromStr for PressureStyle {
    type Err = crate::foundation::error::InkscribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ink" => Ok(Self::Ink),
            "thickness" => Ok(Self::Thickness),
            "heat" | "color" => Ok(Self::Heat),
            "feedback" => Ok(Self::Feedback),
            "detection" => Ok(Self::Detection),
            other => Err(crate::foundation::error::InkscribeError::validation(format!(
                "unknown pressure style \"{other}\""
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/pressure.rs"]
mod tests;
