use crate::compile::plan::{DrawOp, FramePlan, PathStyle};
use crate::foundation::core::{Affine, BezPath, Point, Rgba8};
use crate::foundation::error::{InkscribeError, InkscribeResult};
use crate::render::backend::{CpuBackendOpts, FrameRGBA, RenderBackend};

/// Tolerance used when flattening circles into paths.
const CIRCLE_TOLERANCE: f64 = 0.1;

/// `vello_cpu` rasterizer. Keeps its pixmap between frames of the same size.
pub struct CpuBackend {
    opts: CpuBackendOpts,
    surface: Option<CpuSurface>,
}

struct CpuSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl CpuBackend {
    /// Backend with `opts`.
    pub fn new(opts: CpuBackendOpts) -> Self {
        Self {
            opts,
            surface: None,
        }
    }

    fn ensure_surface(&mut self, width: u32, height: u32) -> InkscribeResult<&mut CpuSurface> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| InkscribeError::render("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| InkscribeError::render("surface height exceeds u16"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(InkscribeError::render("surface width/height must be > 0"));
        }

        let reuse = self
            .surface
            .as_ref()
            .is_some_and(|s| s.width == width_u16 && s.height == height_u16);
        if !reuse {
            self.surface = Some(CpuSurface {
                width: width_u16,
                height: height_u16,
                pixmap: vello_cpu::Pixmap::new(width_u16, height_u16),
            });
        }
        self.surface
            .as_mut()
            .ok_or_else(|| InkscribeError::render("cpu surface missing"))
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new(CpuBackendOpts::default())
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(skip(self, plan), fields(ops = plan.ops.len()))]
    fn render_plan(&mut self, plan: &FramePlan) -> InkscribeResult<FrameRGBA> {
        let clear = self.opts.clear_override.unwrap_or(plan.background);
        let surface = self.ensure_surface(plan.canvas.width, plan.canvas.height)?;
        clear_pixmap(&mut surface.pixmap, clear.premultiplied());

        let mut ctx = vello_cpu::RenderContext::new(surface.width, surface.height);
        ctx.set_transform(affine_to_cpu(Affine::IDENTITY));
        ctx.set_paint(paint(clear, 1.0));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(surface.width),
            f64::from(surface.height),
        ));
        for op in &plan.ops {
            draw_op(&mut ctx, op);
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut surface.pixmap);

        Ok(FrameRGBA {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data: surface.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, op: &DrawOp) {
    match op {
        DrawOp::Line {
            from,
            to,
            width,
            color,
            opacity,
            role: _,
        } => {
            let mut path = BezPath::new();
            path.move_to(*from);
            path.line_to(*to);
            ctx.set_paint(paint(*color, *opacity));
            ctx.set_stroke(round_stroke(*width));
            ctx.stroke_path(&bezpath_to_cpu(&path));
        }
        DrawOp::Path {
            path,
            style,
            color,
            opacity,
            role: _,
        } => {
            ctx.set_paint(paint(*color, *opacity));
            paint_path(ctx, &bezpath_to_cpu(path), *style);
        }
        DrawOp::Circle {
            center,
            radius,
            style,
            color,
            opacity,
            role: _,
        } => {
            if *radius <= 0.0 {
                return;
            }
            let circle = vello_cpu::kurbo::Circle::new(point_to_cpu(*center), *radius);
            let path = vello_cpu::kurbo::Shape::to_path(&circle, CIRCLE_TOLERANCE);
            ctx.set_paint(paint(*color, *opacity));
            paint_path(ctx, &path, *style);
        }
    }
}

fn paint_path(ctx: &mut vello_cpu::RenderContext, path: &vello_cpu::kurbo::BezPath, style: PathStyle) {
    match style {
        PathStyle::Fill => ctx.fill_path(path),
        PathStyle::Stroke { width } => {
            ctx.set_stroke(round_stroke(width));
            ctx.stroke_path(path);
        }
    }
}

fn paint(color: Rgba8, opacity: f32) -> vello_cpu::peniko::Color {
    let a = (f32::from(color.a) * opacity.clamp(0.0, 1.0)).round() as u8;
    vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, a)
}

fn round_stroke(width: f64) -> vello_cpu::kurbo::Stroke {
    vello_cpu::kurbo::Stroke::new(width.max(0.0))
        .with_caps(vello_cpu::kurbo::Cap::Round)
        .with_join(vello_cpu::kurbo::Join::Round)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
