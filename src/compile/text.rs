use crate::compile::decoration::DecorationTime;
use crate::compile::glyph::{GlyphDrawOpts, draw_character};
use crate::compile::palette::Palette;
use crate::compile::plan::{DrawList, DrawOp, OpRole, PathStyle};
use crate::compile::pressure::{AuthoredPressure, PressureSource, PressureStyle};
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::math::clamp01;
use crate::glyph::library::GlyphLibrary;
use crate::stroke::interpolate::StrokeCursor;
use crate::timing::composer::TextLayout;
use crate::timing::wrap::{line_offset, line_progress, wrap_words};
use crate::variation::cache::VariationCache;

/// Shared, read-only inputs of one compile pass.
#[derive(Clone, Copy)]
pub struct DrawCtx<'a> {
    /// Glyph source.
    pub library: &'a GlyphLibrary,
    /// Resolved colors.
    pub palette: &'a Palette,
    /// Decorative clock.
    pub deco: DecorationTime,
}

impl<'a> DrawCtx<'a> {
    /// Context over `library` and `palette` at decoration time `deco`.
    pub fn new(library: &'a GlyphLibrary, palette: &'a Palette, deco: DecorationTime) -> Self {
        Self {
            library,
            palette,
            deco,
        }
    }
}

/// Options for a handwritten text run.
#[derive(Clone, Copy)]
pub struct TextDrawOpts<'a> {
    /// Font size in pixels; glyphs are drawn at `font_size / 30`.
    pub font_size: f64,
    /// Text run id for occurrence keys.
    pub run: u32,
    /// Ink override.
    pub ink: Option<Rgba8>,
    /// Completed-stroke color override.
    pub completed_ink: Option<Rgba8>,
    /// Stroke-order guidance on the character being written.
    pub guidance: bool,
    /// Blinking writing cursor while the text is incomplete.
    pub cursor: bool,
    /// Wrap words into lines no wider than this.
    pub max_width: Option<f64>,
    /// Pressure visualization.
    pub pressure_style: PressureStyle,
    /// Pressure provider.
    pub pressure: &'a dyn PressureSource,
}

impl<'a> TextDrawOpts<'a> {
    /// Defaults for `font_size`: run 0, guidance and cursor on, no wrapping.
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            run: 0,
            ink: None,
            completed_ink: None,
            guidance: true,
            cursor: true,
            max_width: None,
            pressure_style: PressureStyle::Ink,
            pressure: &AuthoredPressure,
        }
    }

    /// Builder-style run id.
    pub fn with_run(mut self, run: u32) -> Self {
        self.run = run;
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

    /// Builder-style cursor toggle.
    pub fn with_cursor(mut self, cursor: bool) -> Self {
        self.cursor = cursor;
        self
    }

    /// Builder-style wrap width.
    pub fn with_max_width(mut self, max_width: Option<f64>) -> Self {
        self.max_width = max_width;
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
}

/// Handwrite `text` with its top-left at `origin`, revealed up to `progress`.
///
/// With `max_width` set, words wrap onto lines that are written one after another.
pub fn draw_text(
    list: &mut DrawList,
    ctx: &DrawCtx<'_>,
    cache: &mut VariationCache,
    text: &str,
    origin: Point,
    progress: f64,
    opts: &TextDrawOpts<'_>,
) {
    let progress = clamp01(progress);
    let Some(max_width) = opts.max_width else {
        let layout =
            TextLayout::build(text, opts.run, opts.font_size, ctx.library, cache);
        draw_layout(list, ctx, &layout, origin, progress, opts);
        return;
    };

    let lines = wrap_words(text, max_width, opts.font_size, ctx.library);
    let mut first_index = 0;
    for (i, line) in lines.iter().enumerate() {
        let count = line.chars().count();
        if !line.is_empty() {
            let layout = TextLayout::build_from(
                line,
                opts.run,
                first_index,
                opts.font_size,
                ctx.library,
                cache,
            );
            let at = Point::new(origin.x, origin.y + line_offset(i));
            draw_layout(list, ctx, &layout, at, line_progress(progress, lines.len(), i), opts);
        }
        first_index += count + 1;
    }
}

/// Draw an already built layout.
pub fn draw_layout(
    list: &mut DrawList,
    ctx: &DrawCtx<'_>,
    layout: &TextLayout,
    origin: Point,
    progress: f64,
    opts: &TextDrawOpts<'_>,
) {
    let scale = layout.scale();
    for (slot, reveal) in layout.slots().iter().zip(layout.reveal(progress)) {
        let (Some(pattern), Some(variation)) = (&slot.pattern, &slot.variation) else {
            continue;
        };
        if reveal.local_progress <= 0.0 {
            continue;
        }

        let writing = reveal.local_progress < 1.0;
        let gopts = GlyphDrawOpts::new(scale)
            .with_stroke_width(variation.stroke_width)
            .with_ink(opts.ink)
            .with_completed_ink(opts.completed_ink)
            .with_guidance(opts.guidance && writing)
            .with_pressure_style(opts.pressure_style)
            .with_pressure(opts.pressure);
        draw_character(
            list,
            pattern,
            Point::new(origin.x + reveal.x_offset, origin.y),
            StrokeCursor::for_character(pattern, reveal.local_progress),
            &gopts,
            ctx.palette,
            ctx.deco,
        );
    }

    if opts.cursor && progress < 1.0 {
        writing_cursor(list, origin, layout.cursor_x(progress), scale, ctx);
    }
}

fn writing_cursor(list: &mut DrawList, origin: Point, cursor_x: f64, scale: f64, ctx: &DrawCtx<'_>) {
    let x = origin.x + cursor_x + ctx.deco.cursor_jitter();
    let alpha = ctx.deco.cursor_alpha() as f32;
    let bottom = Point::new(x, origin.y + 22.0 * scale);
    list.push(DrawOp::Line {
        from: Point::new(x, origin.y - 8.0 * scale),
        to: bottom,
        width: 2.5,
        color: ctx.palette.pen,
        opacity: alpha,
        role: OpRole::Cursor,
    });
    list.push(DrawOp::Circle {
        center: bottom,
        radius: 1.5,
        style: PathStyle::Fill,
        color: ctx.palette.pen,
        opacity: alpha,
        role: OpRole::Cursor,
    });
}

#[cfg(test)]
#[path = "../../tests/unit/compile/text.rs"]
mod tests;
