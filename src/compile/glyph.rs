use crate::compile::decoration::DecorationTime;
use crate::compile::palette::Palette;
use crate::compile::plan::{DrawList, DrawOp, OpRole, PathStyle};
use crate::compile::pressure::{AuthoredPressure, PressureSource, PressureStyle, SegmentCtx};
use crate::foundation::core::{BezPath, Point, Rgba8, Vec2};
use crate::glyph::library::GlyphLibrary;
use crate::glyph::model::{CharacterPattern, StrokePoint};
use crate::stroke::interpolate::{StrokeCursor, StrokeState, interpolate_stroke};

/// Per-character drawing options.
#[derive(Clone, Copy)]
pub struct GlyphDrawOpts<'a> {
    /// Pixels per glyph unit.
    pub scale: f64,
    /// Stroke-width factor of the occurrence's variation.
    pub stroke_width: f64,
    /// Ink override; the palette ink is used when `None`.
    pub ink: Option<Rgba8>,
    /// Color for completed strokes; falls back to the ink.
    pub completed_ink: Option<Rgba8>,
    /// Draw stroke-order badges and the direction arrow.
    pub guidance: bool,
    /// Draw the pen tip on the stroke in progress.
    pub pen_tip: bool,
    /// Pressure visualization.
    pub pressure_style: PressureStyle,
    /// Pressure provider.
    pub pressure: &'a dyn PressureSource,
}

impl<'a> GlyphDrawOpts<'a> {
    /// Options at `scale` with authored pressure, pen tip on and guidance off.
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            stroke_width: 1.0,
            ink: None,
            completed_ink: None,
            guidance: false,
            pen_tip: true,
            pressure_style: PressureStyle::Ink,
            pressure: &AuthoredPressure,
        }
    }

    /// Builder-style stroke-width factor.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Builder-style ink override.
    pub fn with_ink(mut self, ink: Option<Rgba8>) -> Self {
        self.ink = ink;
        self
    }

    /// Builder-style completed-stroke color.
    pub fn with_completed_ink(mut self, ink: Option<Rgba8>) -> Self {
        self.completed_ink = ink;
        self
    }

    /// Builder-style guidance toggle.
    pub fn with_guidance(mut self, guidance: bool) -> Self {
        self.guidance = guidance;
        self
    }

    /// Builder-style pen-tip toggle.
    pub fn with_pen_tip(mut self, pen_tip: bool) -> Self {
        self.pen_tip = pen_tip;
        self
    }

    /// Builder-style pressure visualization.
    pub fn with_pressure_style(mut self, style: PressureStyle) -> Self {
        self.pressure_style = style;
        self
    }

    /// Builder-style pressure provider.
    pub fn with_pressure(mut self, pressure: &'a dyn PressureSource) -> Self {
        self.pressure = pressure;
        self
    }

    fn base_width(&self) -> f64 {
        2.5 * self.scale * self.stroke_width
    }
}

impl Default for GlyphDrawOpts<'_> {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Draw one (already transformed) character with its top-left glyph origin at `origin`.
///
/// Strokes before the cursor are drawn whole, the cursor's stroke is drawn up to its progress,
/// later strokes are skipped. Output depends only on the arguments.
pub fn draw_character(
    list: &mut DrawList,
    pattern: &CharacterPattern,
    origin: Point,
    cursor: StrokeCursor,
    opts: &GlyphDrawOpts<'_>,
    palette: &Palette,
    deco: DecorationTime,
) {
    let ink = opts.ink.unwrap_or(palette.ink);
    let completed_ink = opts.completed_ink.unwrap_or(ink);

    for (i, stroke) in pattern.strokes.iter().enumerate() {
        match cursor.state_of(i) {
            StrokeState::Completed => {
                let pts = interpolate_stroke(stroke, 1.0);
                ink_polyline(list, &pts, origin, true, completed_ink, opts);
            }
            StrokeState::Current => {
                let pts = interpolate_stroke(stroke, cursor.progress);
                ink_polyline(list, &pts, origin, false, ink, opts);
                if opts.pen_tip
                    && cursor.progress < 1.0
                    && let Some(last) = pts.last()
                {
                    pen_tip(list, to_canvas(origin, last, opts.scale), opts.scale, palette, deco);
                }
            }
            StrokeState::Future => {}
        }
    }

    if opts.guidance {
        draw_stroke_order(list, pattern, origin, cursor, opts.scale, palette, deco);
    }
}

pub(crate) fn to_canvas(origin: Point, p: &StrokePoint, scale: f64) -> Point {
    Point::new(origin.x + p.x * scale, origin.y + p.y * scale)
}

fn ink_polyline(
    list: &mut DrawList,
    pts: &[StrokePoint],
    origin: Point,
    completed: bool,
    color: Rgba8,
    opts: &GlyphDrawOpts<'_>,
) {
    let role = if completed {
        OpRole::CompletedStroke
    } else {
        OpRole::ActiveStroke
    };

    for (i, pair) in pts.windows(2).enumerate() {
        let from = to_canvas(origin, &pair[0], opts.scale);
        let to = to_canvas(origin, &pair[1], opts.scale);
        let pressure = opts.pressure.pressure_at(&pair[0], from);
        let seg = SegmentCtx {
            index: i,
            point_count: pts.len(),
            completed,
            base_width: opts.base_width(),
        };
        let paint = opts.pressure_style.segment(pressure, seg, color);
        list.push(DrawOp::Line {
            from,
            to,
            width: paint.width,
            color: paint.color,
            opacity: paint.opacity,
            role,
        });
    }

    if opts.pressure_style.marks_points() {
        for p in pts {
            let center = to_canvas(origin, p, opts.scale);
            let pressure = opts.pressure.pressure_at(p, center);
            let seg = SegmentCtx {
                index: 0,
                point_count: pts.len(),
                completed,
                base_width: opts.base_width(),
            };
            list.push(DrawOp::Circle {
                center,
                radius: PressureStyle::mark_radius(pressure),
                style: PathStyle::Fill,
                color: opts.pressure_style.segment(pressure, seg, color).color,
                opacity: 1.0,
                role: OpRole::PressureMark,
            });
        }
    }
}

/// Pen tip with its halo at `at`, pulsing with decoration time.
pub(crate) fn pen_tip(
    list: &mut DrawList,
    at: Point,
    scale: f64,
    palette: &Palette,
    deco: DecorationTime,
) {
    let pulse = deco.pen_pulse();
    list.push(DrawOp::Circle {
        center: at,
        radius: 4.0 * scale,
        style: PathStyle::Fill,
        color: palette.pen,
        opacity: (0.4 * pulse) as f32,
        role: OpRole::PenHalo,
    });
    list.push(DrawOp::Circle {
        center: at,
        radius: 2.0 * scale,
        style: PathStyle::Fill,
        color: palette.pen,
        opacity: (0.9 * pulse) as f32,
        role: OpRole::PenTip,
    });
}

/// Badge center for stroke `i` starting at `start` (canvas pixels).
pub fn badge_center(start: Point, i: usize, scale: f64) -> Point {
    let f = i as f64;
    let dx = ((f * 2.1).sin() * 3.0 + (f * 1.7).cos() * 2.0) * scale;
    let dy = ((f * 1.9).cos() * 3.0 + (f * 2.3).sin() * 2.0) * scale;
    Point::new(start.x + dx, start.y - 18.0 * scale + dy)
}

/// Badge radius for stroke `i`.
pub fn badge_radius(i: usize, scale: f64) -> f64 {
    7.0 * scale * (1.0 + (i as f64 * 3.7).sin() * 0.1)
}

fn draw_stroke_order(
    list: &mut DrawList,
    pattern: &CharacterPattern,
    origin: Point,
    cursor: StrokeCursor,
    scale: f64,
    palette: &Palette,
    deco: DecorationTime,
) {
    for (i, stroke) in pattern.strokes.iter().enumerate() {
        let Some(first) = stroke.points.first() else {
            continue;
        };
        let state = cursor.state_of(i);
        let center = badge_center(to_canvas(origin, first, scale), i, scale);
        let radius = badge_radius(i, scale);

        let (style, color, opacity, label_color) = match state {
            StrokeState::Completed => (PathStyle::Fill, palette.badge_done, 0.7, palette.badge_label),
            StrokeState::Current => (PathStyle::Fill, palette.pen, 1.0, palette.badge_label),
            StrokeState::Future => (
                PathStyle::Stroke {
                    width: 1.5 * scale,
                },
                palette.badge_future,
                0.5,
                palette.badge_future,
            ),
        };
        list.push(DrawOp::Circle {
            center,
            radius,
            style,
            color,
            opacity,
            role: OpRole::Badge,
        });
        list.with_alpha(opacity, |list| {
            badge_label(list, i + 1, center, radius, label_color);
        });

        if state == StrokeState::Current && stroke.points.len() > 1 {
            direction_arrow(list, &stroke.points, origin, scale, palette, deco);
        }
    }
}

/// Writes `number` centered at `center`, drawn with the library's digit strokes.
fn badge_label(list: &mut DrawList, number: usize, center: Point, radius: f64, color: Rgba8) {
    let lib = GlyphLibrary::builtin();
    let digits: Vec<&CharacterPattern> = number
        .to_string()
        .chars()
        .filter_map(|c| lib.get(c))
        .collect();
    if digits.is_empty() {
        return;
    }

    let s = radius * 1.2 / 30.0;
    let total: f64 = digits.iter().map(|d| d.width * s).sum();
    let mut x = center.x - total / 2.0;
    let top = center.y - 15.0 * s;
    let width = (radius * 0.18).max(1.0);

    for d in digits {
        for stroke in &d.strokes {
            let Some(path) = polyline_path(stroke.points.iter().map(|p| {
                Point::new(x + p.x * s, top + p.y * s)
            })) else {
                continue;
            };
            list.push(DrawOp::Path {
                path,
                style: PathStyle::Stroke { width },
                color,
                opacity: 1.0,
                role: OpRole::BadgeLabel,
            });
        }
        x += d.width * s;
    }
}

fn direction_arrow(
    list: &mut DrawList,
    points: &[StrokePoint],
    origin: Point,
    scale: f64,
    palette: &Palette,
    deco: DecorationTime,
) {
    let Some(first) = points.first() else {
        return;
    };
    let end = &points[3.min(points.len() - 1)];
    let d = Vec2::new(end.x - first.x, end.y - first.y);
    let len = d.hypot();
    if len <= f64::EPSILON || !len.is_finite() {
        return;
    }
    let u = d / len;
    let perp = Vec2::new(u.y, -u.x);

    let length = 18.0 * scale;
    let head = 6.0 * scale;
    let bow = deco.arrow_bow();
    let start = to_canvas(origin, first, scale);
    let tip = start + u * length + perp * (bow * length);
    let ctrl = start + u * (length * 0.5) + perp * (bow * length * 0.3);

    let mut shaft = BezPath::new();
    shaft.move_to(start);
    shaft.quad_to(ctrl, tip);
    list.push(DrawOp::Path {
        path: shaft,
        style: PathStyle::Stroke {
            width: 2.5 * scale,
        },
        color: palette.pen,
        opacity: 0.85,
        role: OpRole::DirectionArrow,
    });

    let skew = deco.arrow_skew();
    let mut tri = BezPath::new();
    tri.move_to(tip);
    tri.line_to(tip - u * head + perp * (head * 0.4 + skew));
    tri.line_to(tip - u * head - perp * (head * 0.4 - skew));
    tri.close_path();
    list.push(DrawOp::Path {
        path: tri,
        style: PathStyle::Fill,
        color: palette.pen,
        opacity: 0.85,
        role: OpRole::DirectionArrow,
    });
}

/// Open polyline through `points`; `None` for fewer than two points.
pub(crate) fn polyline_path(points: impl IntoIterator<Item = Point>) -> Option<BezPath> {
    let mut it = points.into_iter();
    let first = it.next()?;
    let mut path = BezPath::new();
    path.move_to(first);
    let mut segments = 0usize;
    for p in it {
        path.line_to(p);
        segments += 1;
    }
    (segments > 0).then_some(path)
}

#[cfg(test)]
#[path = "../../tests/unit/compile/glyph.rs"]
mod tests;
