pub(crate) mod board;
pub(crate) mod decoration;
pub(crate) mod glyph;
pub(crate) mod palette;
pub(crate) mod plan;
pub(crate) mod pressure;
pub(crate) mod shapes;
pub(crate) mod text;

use crate::compile::board::draw_grid;
use crate::compile::plan::{DrawList, FramePlan};
use crate::compile::text::{DrawCtx, TextDrawOpts, draw_text};
use crate::foundation::core::{Canvas, Point};
use crate::variation::cache::VariationCache;

/// Compile a frame with a single handwritten text run at `origin`.
#[tracing::instrument(skip(ctx, cache, opts), fields(chars = text.chars().count()))]
pub fn compile_text_frame(
    canvas: Canvas,
    ctx: &DrawCtx<'_>,
    cache: &mut VariationCache,
    text: &str,
    origin: Point,
    progress: f64,
    opts: &TextDrawOpts<'_>,
) -> FramePlan {
    let mut list = DrawList::new();
    draw_grid(&mut list, canvas, ctx.palette);
    draw_text(&mut list, ctx, cache, text, origin, progress, opts);
    list.into_plan(canvas, ctx.palette.background)
}
