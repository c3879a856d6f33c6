use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{InkscribeError, InkscribeResult};

/// Coarse problem category attached by the solver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemType {
    /// Plain arithmetic.
    #[default]
    Arithmetic,
    /// Equations and expressions with unknowns.
    Algebra,
    /// Shapes and measurements.
    Geometry,
    /// Derivatives and integrals.
    Calculus,
}

/// How a step is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// A handwritten math expression on one line.
    Expression,
    /// Handwritten prose, word-wrapped.
    Explanation,
    /// A parametric shape (circle).
    Shape,
    /// Coordinate axes.
    Graph,
}

/// Entrance style hint carried by the solver. Informational.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationKind {
    /// Fade in.
    FadeIn,
    /// Slide in.
    SlideIn,
    /// Draw stroke by stroke.
    Draw,
}

/// Step timing in milliseconds at speed 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StepAnimation {
    /// Time to reveal the step; `None` uses the session's default step duration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Pause before the step starts revealing.
    #[serde(default)]
    pub delay: f64,
    /// Entrance style hint.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AnimationKind>,
}

impl StepAnimation {
    /// Duration used when neither the step nor the session names one.
    pub const DEFAULT_DURATION_MS: f64 = 1000.0;

    /// Duration in milliseconds, `fallback` when the step gives none.
    pub fn duration_or(&self, fallback: f64) -> f64 {
        self.duration.unwrap_or(fallback)
    }
}

/// Top-left anchor of a step on the board, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    /// Horizontal pixel position.
    pub x: f64,
    /// Vertical pixel position.
    pub y: f64,
}

impl From<Position> for Point {
    fn from(p: Position) -> Self {
        Point::new(p.x, p.y)
    }
}

/// One step produced by the solver.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SolutionStep {
    /// Solver-assigned id.
    pub id: String,
    /// Text to write, or shape description.
    pub content: String,
    /// Drawing routine.
    #[serde(rename = "type", alias = "kind")]
    pub kind: StepKind,
    /// Anchor on the board.
    pub position: Position,
    /// Hex ink color; the palette ink is used when absent or unparsable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Timing; defaults apply when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<StepAnimation>,
}

impl SolutionStep {
    /// Step of `kind` writing `content` at (`x`, `y`).
    pub fn new(kind: StepKind, content: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: String::new(),
            content: content.into(),
            kind,
            position: Position { x, y },
            color: None,
            animation: None,
        }
    }

    /// Builder-style color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Builder-style timing in milliseconds.
    pub fn with_timing(mut self, duration_ms: f64, delay_ms: f64) -> Self {
        self.animation = Some(StepAnimation {
            duration: Some(duration_ms),
            delay: delay_ms,
            kind: None,
        });
        self
    }

    /// Timing, with defaults filled in.
    pub fn timing(&self) -> StepAnimation {
        self.animation.unwrap_or_default()
    }

    /// Parsed ink color, falling back to `fallback` (with a warning) when it does not parse.
    pub fn ink_or(&self, fallback: Rgba8) -> Rgba8 {
        let Some(raw) = self.color.as_deref() else {
            return fallback;
        };
        match Rgba8::from_hex(raw) {
            Ok(c) => c,
            Err(err) => {
                tracing::warn!(step = %self.id, color = raw, %err, "unparsable step color, using palette ink");
                fallback
            }
        }
    }
}

/// Ordered steps to animate for one problem.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Solution {
    /// Solver-assigned id.
    #[serde(default)]
    pub id: String,
    /// The problem text as typed.
    #[serde(default)]
    pub problem: String,
    /// Problem category.
    #[serde(default, rename = "problemType", alias = "problem_type")]
    pub problem_type: ProblemType,
    /// Steps in playback order.
    pub steps: Vec<SolutionStep>,
}

impl Solution {
    /// Solution for `problem` with `steps`.
    pub fn new(problem: impl Into<String>, steps: Vec<SolutionStep>) -> Self {
        Self {
            id: String::new(),
            problem: problem.into(),
            problem_type: ProblemType::default(),
            steps,
        }
    }

    /// Decode and validate a solution from JSON.
    pub fn from_json(json: &str) -> InkscribeResult<Self> {
        let solution: Self = serde_json::from_str(json)?;
        solution.validate()?;
        Ok(solution)
    }

    /// Reject non-finite positions and negative or non-finite timings.
    pub fn validate(&self) -> InkscribeResult<()> {
        for (i, step) in self.steps.iter().enumerate() {
            if !step.position.x.is_finite() || !step.position.y.is_finite() {
                return Err(InkscribeError::validation(format!(
                    "step {i} position must be finite"
                )));
            }
            let t = step.timing();
            let duration_ok = t.duration.is_none_or(|d| d.is_finite() && d >= 0.0);
            if !(duration_ok && t.delay.is_finite() && t.delay >= 0.0) {
                return Err(InkscribeError::validation(format!(
                    "step {i} duration/delay must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/solution.rs"]
mod tests;
