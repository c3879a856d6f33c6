use crate::compile::palette::Palette;
use crate::compile::plan::{DrawList, DrawOp, OpRole, PathStyle};
use crate::foundation::core::{BezPath, Canvas, Point};

/// Distance between grid lines, in pixels.
pub const GRID_SPACING: f64 = 25.0;
/// Grid line width, in pixels.
pub const GRID_LINE_WIDTH: f64 = 0.5;

/// Board grid covering the canvas, if the palette enables one.
pub fn draw_grid(list: &mut DrawList, canvas: Canvas, palette: &Palette) {
    let Some(color) = palette.grid else {
        return;
    };
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));

    let mut x = 0.0;
    while x <= w {
        list.push(grid_line(Point::new(x, 0.0), Point::new(x, h), color));
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y <= h {
        list.push(grid_line(Point::new(0.0, y), Point::new(w, y), color));
        y += GRID_SPACING;
    }
}

fn grid_line(from: Point, to: Point, color: crate::foundation::core::Rgba8) -> DrawOp {
    DrawOp::Line {
        from,
        to,
        width: GRID_LINE_WIDTH,
        color,
        opacity: 1.0,
        role: OpRole::Grid,
    }
}

/// Ruled handwriting lines: a solid baseline, a dashed ascender line `line_height` above it and a
/// dashed descender line half that far below.
pub fn draw_guide_lines(
    list: &mut DrawList,
    canvas: Canvas,
    baseline_y: f64,
    line_height: f64,
    palette: &Palette,
) {
    let w = f64::from(canvas.width);
    list.push(DrawOp::Line {
        from: Point::new(0.0, baseline_y),
        to: Point::new(w, baseline_y),
        width: 1.0,
        color: palette.guide,
        opacity: 1.0,
        role: OpRole::GuideLine,
    });

    for y in [baseline_y - line_height, baseline_y + line_height / 2.0] {
        let mut line = BezPath::new();
        line.move_to(Point::new(0.0, y));
        line.line_to(Point::new(w, y));
        list.push(DrawOp::Path {
            path: kurbo::dash(line.iter(), 0.0, &[5.0, 5.0]).collect(),
            style: PathStyle::Stroke { width: 1.0 },
            color: palette.guide,
            opacity: 1.0,
            role: OpRole::GuideLine,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/board.rs"]
mod tests;
