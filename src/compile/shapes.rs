use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::compile::glyph::polyline_path;
use crate::compile::plan::{DrawList, DrawOp, OpRole, PathStyle};
use crate::compile::text::{DrawCtx, TextDrawOpts, draw_text};
use crate::foundation::core::{BezPath, Point, Rgba8};
use crate::foundation::math::{clamp01, remap01};
use crate::variation::cache::VariationCache;

/// Outline samples of a hand-drawn circle.
pub const CIRCLE_SEGMENTS: usize = 150;
/// Pixels per radius unit written in shape content.
pub const RADIUS_UNIT_PX: f64 = 8.0;
/// Radius used when the content names none.
pub const DEFAULT_RADIUS_PX: f64 = 40.0;
/// Graph axes box.
pub const GRAPH_SIZE: (f64, f64) = (220.0, 160.0);

/// Run id for handwritten label `slot` belonging to run `run`, kept apart from step runs.
pub fn label_run(run: u32, slot: u32) -> u32 {
    0x8000_0000 | (run.wrapping_mul(4).wrapping_add(slot) & 0x7fff_ffff)
}

/// The number following the word `radius` in `content`, if any (`"circle radius 5"` -> 5).
pub fn parse_radius(content: &str) -> Option<u32> {
    let (_, rest) = content.split_once("radius")?;
    let digits: String = rest
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Deterministic hand tremor of circle sample `i`, in pixels.
pub fn circle_tremor(i: usize) -> f64 {
    let f = i as f64;
    (f * 0.3).sin() * 0.8 + (f * 0.7).cos() * 0.6
}

/// A circle step: outline revealed clockwise from the top, then its radius annotated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleShape {
    /// Center in canvas pixels.
    pub center: Point,
    /// Radius in content units; `None` uses the default radius.
    pub units: Option<u32>,
    /// Outline color.
    pub color: Rgba8,
}

impl CircleShape {
    /// Circle described by shape `content` (`"... radius N ..."`).
    pub fn from_content(content: &str, center: Point, color: Rgba8) -> Self {
        Self {
            center,
            units: parse_radius(content),
            color,
        }
    }

    /// Radius in pixels.
    pub fn radius_px(&self) -> f64 {
        self.units
            .map(|n| f64::from(n) * RADIUS_UNIT_PX)
            .unwrap_or(DEFAULT_RADIUS_PX)
    }

    fn sample(&self, i: usize) -> Point {
        let angle = i as f64 / CIRCLE_SEGMENTS as f64 * TAU - FRAC_PI_2;
        let r = self.radius_px() + circle_tremor(i);
        Point::new(self.center.x + angle.cos() * r, self.center.y + angle.sin() * r)
    }

    /// Draw the circle at `progress`; the label is written as text run `label_run(run, 0)`.
    pub fn draw(
        &self,
        list: &mut DrawList,
        ctx: &DrawCtx<'_>,
        cache: &mut VariationCache,
        progress: f64,
        run: u32,
    ) {
        let progress = clamp01(progress);
        let shown = (CIRCLE_SEGMENTS as f64 * progress).floor() as usize;

        if let Some(path) = polyline_path((0..=shown).map(|i| self.sample(i))) {
            list.push(DrawOp::Path {
                path,
                style: PathStyle::Stroke { width: 3.0 },
                color: self.color,
                opacity: 1.0,
                role: OpRole::Shape,
            });
        }

        if progress < 1.0 && shown > 0 {
            list.push(DrawOp::Circle {
                center: self.sample(shown),
                radius: 3.0,
                style: PathStyle::Fill,
                color: ctx.palette.pen,
                opacity: 0.9,
                role: OpRole::PenTip,
            });
        }

        if progress > 0.8 {
            let a = remap01(progress, 0.8, 0.2);
            list.with_alpha(a as f32, |list| self.annotate(list, ctx, cache, a, run));
        }
    }

    fn annotate(
        &self,
        list: &mut DrawList,
        ctx: &DrawCtx<'_>,
        cache: &mut VariationCache,
        a: f64,
        run: u32,
    ) {
        let (x, y) = (self.center.x, self.center.y);
        let r = self.radius_px();

        let mut radius_line = BezPath::new();
        radius_line.move_to(self.center);
        radius_line.quad_to(
            Point::new(x + r * 0.5, y - 5.0),
            Point::new(x + r * a, y + (a * PI).sin() * 2.0),
        );
        let dashed: BezPath = kurbo::dash(radius_line.iter(), 0.0, &[4.0, 6.0]).collect();
        list.push(DrawOp::Path {
            path: dashed,
            style: PathStyle::Stroke { width: 2.0 },
            color: self.color,
            opacity: 1.0,
            role: OpRole::Annotation,
        });
        list.push(DrawOp::Circle {
            center: self.center,
            radius: 2.5,
            style: PathStyle::Fill,
            color: self.color,
            opacity: 1.0,
            role: OpRole::Annotation,
        });

        if a > 0.5 {
            let label = format!("r = {}", self.units.unwrap_or(5));
            let opts = TextDrawOpts::new(18.0).with_run(label_run(run, 0));
            draw_text(
                list,
                ctx,
                cache,
                &label,
                Point::new(x + r + 15.0, y - 5.0),
                remap01(a, 0.5, 0.5),
                &opts,
            );
        }
    }
}

/// A graph step: x and y axes sketched through the center, then labelled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphShape {
    /// Axes crossing point in canvas pixels.
    pub center: Point,
    /// Axis color.
    pub color: Rgba8,
}

impl GraphShape {
    /// Fraction of the axes drawn at step `progress`.
    pub fn axis_progress(progress: f64) -> f64 {
        remap01(progress, 0.05, 0.15)
    }

    /// Draw the axes at `progress`; labels use text runs `label_run(run, 1)` and `(run, 2)`.
    pub fn draw(
        &self,
        list: &mut DrawList,
        ctx: &DrawCtx<'_>,
        cache: &mut VariationCache,
        progress: f64,
        run: u32,
    ) {
        let progress = clamp01(progress);
        if progress <= 0.05 {
            return;
        }
        let ap = Self::axis_progress(progress);
        let (w, h) = GRAPH_SIZE;
        let (x, y) = (self.center.x, self.center.y);
        let steps = (ap * 100.0).floor() as usize;

        let x_axis = std::iter::once(Point::new(x - w / 2.0, y)).chain((0..=steps).map(|i| {
            let f = i as f64;
            Point::new(x - w / 2.0 + w * f / 100.0, y + (f * 0.1).sin() * 0.5)
        }));
        let y_axis = std::iter::once(Point::new(x, y + h / 2.0)).chain((0..=steps).map(|i| {
            let f = i as f64;
            Point::new(x + (f * 0.12).cos() * 0.5, y + h / 2.0 - h * f / 100.0)
        }));
        for path in [polyline_path(x_axis), polyline_path(y_axis)].into_iter().flatten() {
            list.push(DrawOp::Path {
                path,
                style: PathStyle::Stroke { width: 2.5 },
                color: self.color,
                opacity: 1.0,
                role: OpRole::Shape,
            });
        }

        if ap > 0.7 {
            let lp = remap01(ap, 0.7, 0.3);
            let labels = [
                ("x", Point::new(x + w / 2.0 - 15.0, y + 25.0), 1),
                ("y", Point::new(x - 25.0, y - h / 2.0 + 20.0), 2),
            ];
            for (text, at, slot) in labels {
                let opts = TextDrawOpts::new(16.0)
                    .with_run(label_run(run, slot))
                    .with_ink(Some(self.color));
                draw_text(list, ctx, cache, text, at, lp, &opts);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/shapes.rs"]
mod tests;
