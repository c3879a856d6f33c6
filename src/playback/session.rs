use std::time::Duration;

use crate::compile::board::draw_grid;
use crate::compile::decoration::DecorationTime;
use crate::compile::palette::Palette;
use crate::compile::plan::{DrawList, FramePlan};
use crate::compile::shapes::{CircleShape, GraphShape};
use crate::compile::text::{DrawCtx, TextDrawOpts, draw_text};
use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{InkscribeError, InkscribeResult};
use crate::foundation::math::clamp01;
use crate::glyph::library::GlyphLibrary;
use crate::playback::solution::{Solution, SolutionStep, StepAnimation, StepKind};
use crate::variation::cache::VariationCache;

/// Font size of expression steps.
pub const EXPRESSION_FONT_SIZE: f64 = 28.0;
/// Font size of explanation steps.
pub const EXPLANATION_FONT_SIZE: f64 = 20.0;
/// Right margin kept free when wrapping explanations.
pub const EXPLANATION_MARGIN: f64 = 50.0;

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing shown yet, clock at zero.
    Idle,
    /// The clock advances on [`PlaybackSession::tick`].
    Playing,
    /// Frozen mid-solution.
    Paused,
    /// Every step fully revealed.
    Completed,
}

/// Session options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackOpts {
    /// Playback speed multiplier; step durations and delays are divided by it.
    pub speed: f64,
    /// Duration in milliseconds of steps that carry no timing.
    pub default_step_ms: f64,
    /// Seed of the variation cache; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl PlaybackOpts {
    /// Builder-style speed.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Builder-style default step duration.
    pub fn with_default_step_ms(mut self, ms: f64) -> Self {
        self.default_step_ms = ms;
        self
    }

    /// Builder-style deterministic seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for PlaybackOpts {
    fn default() -> Self {
        Self {
            speed: 1.0,
            default_step_ms: StepAnimation::DEFAULT_DURATION_MS,
            seed: None,
        }
    }
}

fn check_speed(speed: f64) -> InkscribeResult<()> {
    if speed.is_finite() && speed > 0.0 {
        Ok(())
    } else {
        Err(InkscribeError::validation(format!(
            "playback speed must be finite and > 0, got {speed}"
        )))
    }
}

/// Step-by-step playback of a [`Solution`].
///
/// The session owns the variation cache, so the same step looks the same on every frame until
/// [`reset`](Self::reset). Time only moves through [`tick`](Self::tick); frames are compiled on
/// demand from the current step and progress.
#[derive(Debug)]
pub struct PlaybackSession {
    solution: Solution,
    cache: VariationCache,
    library: &'static GlyphLibrary,
    opts: PlaybackOpts,
    state: PlaybackState,
    step: usize,
    progress: f64,
    clock_ms: f64,
}

impl PlaybackSession {
    /// Idle session over `solution`.
    pub fn new(solution: Solution, opts: PlaybackOpts) -> InkscribeResult<Self> {
        check_speed(opts.speed)?;
        if !(opts.default_step_ms.is_finite() && opts.default_step_ms >= 0.0) {
            return Err(InkscribeError::validation(
                "default step duration must be finite and >= 0",
            ));
        }
        solution.validate()?;
        let cache = opts
            .seed
            .map(VariationCache::with_seed)
            .unwrap_or_default();
        Ok(Self {
            solution,
            cache,
            library: GlyphLibrary::builtin(),
            opts,
            state: PlaybackState::Idle,
            step: 0,
            progress: 0.0,
            clock_ms: 0.0,
        })
    }

    /// The solution being played.
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Lifecycle state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Index of the step being revealed.
    pub fn current_step(&self) -> usize {
        self.step
    }

    /// Reveal progress of the current step in `[0, 1]`.
    pub fn step_progress(&self) -> f64 {
        self.progress
    }

    /// Speed multiplier.
    pub fn speed(&self) -> f64 {
        self.opts.speed
    }

    /// Variations generated so far.
    pub fn cache(&self) -> &VariationCache {
        &self.cache
    }

    /// Replace the solution and start over.
    pub fn set_solution(&mut self, solution: Solution) -> InkscribeResult<()> {
        solution.validate()?;
        self.solution = solution;
        self.reset();
        Ok(())
    }

    fn transition(&mut self, to: PlaybackState) {
        if self.state != to {
            tracing::debug!(from = ?self.state, ?to, step = self.step, "playback state");
            self.state = to;
        }
    }

    /// Start or resume. An empty solution completes immediately; a completed one stays put.
    pub fn play(&mut self) {
        match self.state {
            PlaybackState::Idle | PlaybackState::Paused if self.solution.steps.is_empty() => {
                self.transition(PlaybackState::Completed)
            }
            PlaybackState::Idle | PlaybackState::Paused => self.transition(PlaybackState::Playing),
            PlaybackState::Playing | PlaybackState::Completed => {}
        }
    }

    /// Freeze a playing session.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.transition(PlaybackState::Paused);
        }
    }

    /// Back to the first step at progress 0, with fresh handwriting.
    pub fn reset(&mut self) {
        self.step = 0;
        self.progress = 0.0;
        self.clock_ms = 0.0;
        self.cache.clear();
        self.transition(PlaybackState::Idle);
    }

    /// Effective (delay, duration) of `step` in milliseconds at the current speed.
    fn step_window(&self, step: &SolutionStep) -> (f64, f64) {
        let timing = step.timing();
        let duration = timing.duration_or(self.opts.default_step_ms);
        let delay = timing.delay;
        (delay / self.opts.speed, duration / self.opts.speed)
    }

    /// Advance the clock by `dt` while playing.
    ///
    /// Time left over when a step finishes carries into the next one; the last step finishing
    /// completes the session.
    pub fn tick(&mut self, dt: Duration) {
        if self.state != PlaybackState::Playing {
            return;
        }
        self.clock_ms += dt.as_secs_f64() * 1000.0;

        loop {
            let Some(step) = self.solution.steps.get(self.step) else {
                self.transition(PlaybackState::Completed);
                return;
            };
            let (delay, duration) = self.step_window(step);
            let elapsed = self.clock_ms - delay;
            if elapsed < 0.0 {
                self.progress = 0.0;
                return;
            }
            self.progress = if duration > 0.0 {
                clamp01(elapsed / duration)
            } else {
                1.0
            };
            if self.progress < 1.0 {
                return;
            }

            if self.step + 1 >= self.solution.steps.len() {
                self.progress = 1.0;
                self.transition(PlaybackState::Completed);
                return;
            }
            self.clock_ms -= delay + duration;
            self.step += 1;
            self.progress = 0.0;
            tracing::debug!(step = self.step, "next step");
        }
    }

    /// Jump to `step` at `progress`. Both are clamped; not allowed while playing.
    pub fn seek(&mut self, step: usize, progress: f64) -> InkscribeResult<()> {
        if self.state == PlaybackState::Playing {
            return Err(InkscribeError::playback("cannot seek while playing; pause first"));
        }
        if !progress.is_finite() {
            return Err(InkscribeError::validation("seek progress must be finite"));
        }
        let Some(last) = self.solution.steps.len().checked_sub(1) else {
            return Err(InkscribeError::playback("cannot seek in a solution with no steps"));
        };
        self.step = step.min(last);
        self.progress = clamp01(progress);

        let (delay, duration) = self.step_window(&self.solution.steps[self.step]);
        self.clock_ms = delay + duration * self.progress;
        if self.step == last && self.progress >= 1.0 {
            self.transition(PlaybackState::Completed);
        } else {
            self.transition(PlaybackState::Paused);
        }
        Ok(())
    }

    /// Move to the start of the next step, if there is one.
    pub fn next_step(&mut self) {
        if self.step + 1 < self.solution.steps.len() {
            self.step += 1;
            self.progress = 0.0;
            self.clock_ms = 0.0;
        }
    }

    /// Move to the start of the previous step, if there is one.
    pub fn prev_step(&mut self) {
        if self.step > 0 {
            self.step -= 1;
            self.progress = 0.0;
            self.clock_ms = 0.0;
            if self.state == PlaybackState::Completed {
                self.transition(PlaybackState::Paused);
            }
        }
    }

    /// Change the speed multiplier, keeping the current step progress.
    pub fn set_speed(&mut self, speed: f64) -> InkscribeResult<()> {
        check_speed(speed)?;
        self.clock_ms *= self.opts.speed / speed;
        self.opts.speed = speed;
        Ok(())
    }

    /// Compile the board as it looks now: earlier steps complete, the current one partial.
    #[tracing::instrument(skip(self, palette), fields(step = self.step, progress = self.progress))]
    pub fn compile_frame(
        &mut self,
        canvas: Canvas,
        palette: &Palette,
        deco: DecorationTime,
    ) -> FramePlan {
        let ctx = DrawCtx::new(self.library, palette, deco);
        let mut list = DrawList::new();
        draw_grid(&mut list, canvas, palette);

        let shown = (self.step + 1).min(self.solution.steps.len());
        for (i, step) in self.solution.steps[..shown].iter().enumerate() {
            let progress = if i < self.step { 1.0 } else { self.progress };
            draw_step(&mut list, &ctx, &mut self.cache, canvas, step, i as u32, progress);
        }
        list.into_plan(canvas, palette.background)
    }
}

/// Draw one solution step at `progress`, faded in over the first part of its reveal.
pub fn draw_step(
    list: &mut DrawList,
    ctx: &DrawCtx<'_>,
    cache: &mut VariationCache,
    canvas: Canvas,
    step: &SolutionStep,
    run: u32,
    progress: f64,
) {
    let progress = clamp01(progress);
    if progress <= 0.0 {
        return;
    }
    let ink = step.ink_or(ctx.palette.ink);
    let at: Point = step.position.into();
    let fade = (progress * 1.3).min(1.0) as f32;

    list.with_alpha(fade, |list| match step.kind {
        StepKind::Expression => {
            let opts = TextDrawOpts::new(EXPRESSION_FONT_SIZE)
                .with_run(run)
                .with_ink(Some(ink));
            draw_text(list, ctx, cache, &step.content, at, progress, &opts);
        }
        StepKind::Explanation => {
            let max_width =
                (f64::from(canvas.width) - step.position.x - EXPLANATION_MARGIN).max(1.0);
            let opts = TextDrawOpts::new(EXPLANATION_FONT_SIZE)
                .with_run(run)
                .with_ink(Some(ink))
                .with_max_width(Some(max_width));
            draw_text(list, ctx, cache, &step.content, at, progress, &opts);
        }
        StepKind::Shape if step.content.contains("circle") => {
            CircleShape::from_content(&step.content, at, ink).draw(list, ctx, cache, progress, run);
        }
        StepKind::Shape => {
            tracing::debug!(content = %step.content, "unsupported shape step skipped");
        }
        StepKind::Graph => {
            GraphShape { center: at, color: ink }.draw(list, ctx, cache, progress, run);
        }
    });
}

#[cfg(test)]
#[path = "../../tests/unit/playback/session.rs"]
mod tests;
