//! Inkscribe animates handwriting stroke by stroke.
//!
//! Characters come from an authored glyph library of pen strokes. Every occurrence of a character
//! gets its own small, stable variation, so the same letter never looks stamped. Text is revealed
//! sequentially in pen order and compiled into a backend-agnostic [`FramePlan`], which the
//! [`CpuBackend`] rasterizes into RGBA pixels.
//!
//! - Compile a single text run with [`compile_text_frame`]
//! - Play a step-by-step math [`Solution`] through a [`PlaybackSession`]
//! - Render one of the [`DemoPreset`] boards
//!
//! Time is always an input: nothing here reads a clock, and every frame is a pure function of
//! its arguments plus the variation cache.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod compile;
pub(crate) mod glyph;
pub(crate) mod playback;
pub(crate) mod presets;
pub(crate) mod render;
pub(crate) mod stroke;
pub(crate) mod timing;
pub(crate) mod variation;

pub use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{InkscribeError, InkscribeResult};
pub use crate::foundation::math::{clamp01, lerp, remap01};

pub use crate::glyph::library::GlyphLibrary;
pub use crate::glyph::model::{
    CharacterPattern, Stroke, StrokeDirection, StrokeKind, StrokePoint, VariationRanges,
};

pub use crate::variation::cache::{OccurrenceKey, VariationCache};
pub use crate::variation::generator::HandwritingVariation;
pub use crate::variation::transform::apply_variation;

pub use crate::stroke::interpolate::{StrokeCursor, StrokeState, interpolate_stroke};
pub use crate::stroke::smooth::{SMOOTHING_BIAS, smooth_points};

pub use crate::timing::composer::{
    CHAR_GAP, CharReveal, CharSlot, GLYPH_DESIGN_HEIGHT, STROKE_DURATION_UNIT, TextLayout,
    UNKNOWN_ADVANCE, char_weight, reveal_fractions, scale_for_font_size,
};
pub use crate::timing::wrap::{LINE_SPACING, line_offset, line_progress, measure_text, wrap_words};

pub use crate::compile::board::{GRID_LINE_WIDTH, GRID_SPACING, draw_grid, draw_guide_lines};
pub use crate::compile::compile_text_frame;
pub use crate::compile::decoration::DecorationTime;
pub use crate::compile::glyph::{GlyphDrawOpts, badge_center, badge_radius, draw_character};
pub use crate::compile::palette::{BoardColor, Palette, Theme};
pub use crate::compile::plan::{DrawList, DrawOp, FramePlan, OpRole, PathStyle};
pub use crate::compile::pressure::{
    AuthoredPressure, ConstantPressure, PressureSource, PressureStyle, RadialPressure, SegmentCtx,
    SegmentInk,
};
pub use crate::compile::shapes::{
    CIRCLE_SEGMENTS, CircleShape, DEFAULT_RADIUS_PX, GRAPH_SIZE, GraphShape, RADIUS_UNIT_PX,
    circle_tremor, label_run, parse_radius,
};
pub use crate::compile::text::{DrawCtx, TextDrawOpts, draw_layout, draw_text};

pub use crate::render::backend::{CpuBackendOpts, FrameRGBA, RenderBackend, render_frame};
pub use crate::render::cpu::CpuBackend;

pub use crate::playback::session::{
    EXPLANATION_FONT_SIZE, EXPLANATION_MARGIN, EXPRESSION_FONT_SIZE, PlaybackOpts,
    PlaybackSession, PlaybackState, draw_step,
};
pub use crate::playback::solution::{
    AnimationKind, Position, ProblemType, Solution, SolutionStep, StepAnimation, StepKind,
};

pub use crate::presets::{
    DEMO_ACTIVE_INK, DEMO_COMPLETED_INK, DemoPreset, GUIDE_LINE_HEIGHT, PresetKind,
};
