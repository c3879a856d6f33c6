use crate::foundation::math::{clamp01, lerp};
use crate::glyph::model::{CharacterPattern, Stroke, StrokePoint};
use crate::stroke::smooth::smooth_points;

/// The revealed prefix of `stroke` at `progress`.
///
/// With `n` points, `target = floor(progress * n)` points are copied verbatim, followed by one
/// point synthesized between `points[target]` and `points[target + 1]` when there is a fractional
/// remainder and a next point exists. Natural-curve strokes get [`smooth_points`] on the result.
///
/// `progress` is clamped to `[0, 1]`; an empty stroke always yields an empty prefix.
pub fn interpolate_stroke(stroke: &Stroke, progress: f64) -> Vec<StrokePoint> {
    let points = &stroke.points;
    let progress = clamp01(progress);
    if points.is_empty() || progress <= 0.0 {
        return Vec::new();
    }

    let revealed = if progress >= 1.0 {
        points.clone()
    } else {
        let n = points.len();
        let scaled = progress * n as f64;
        let target = (scaled.floor() as usize).min(n);
        let remainder = scaled - target as f64;

        let mut out = Vec::with_capacity(target + 1);
        out.extend_from_slice(&points[..target]);
        if target + 1 < n && remainder > 0.0 {
            out.push(between(&points[target], &points[target + 1], remainder));
        }
        out
    };

    if stroke.natural_curve {
        smooth_points(&revealed)
    } else {
        revealed
    }
}

fn between(a: &StrokePoint, b: &StrokePoint, t: f64) -> StrokePoint {
    StrokePoint {
        x: lerp(a.x, b.x, t),
        y: lerp(a.y, b.y, t),
        pressure: Some(lerp(a.pressure_or_default(), b.pressure_or_default(), t)),
        speed: a.speed,
    }
}

/// Where the pen is inside one character: which stroke is being drawn and how far along it.
///
/// Strokes before `index` are complete, strokes after it have not started. An `index` equal to
/// the stroke count means the whole character is complete.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeCursor {
    /// Index of the stroke in progress.
    pub index: usize,
    /// Reveal fraction of that stroke in `[0, 1]`.
    pub progress: f64,
}

/// Drawing state of one stroke relative to a [`StrokeCursor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrokeState {
    /// Fully drawn.
    Completed,
    /// Being drawn.
    Current,
    /// Not started.
    Future,
}

impl StrokeCursor {
    /// Cursor at `index` with `progress`, progress clamped.
    pub fn new(index: usize, progress: f64) -> Self {
        Self {
            index,
            progress: clamp01(progress),
        }
    }

    /// Cursor past the last stroke of `pattern`.
    pub fn complete(pattern: &CharacterPattern) -> Self {
        Self {
            index: pattern.strokes.len(),
            progress: 0.0,
        }
    }

    /// Split a character-level reveal fraction evenly across the strokes that have points.
    ///
    /// Empty strokes take no time; they count as complete once the pen is past them.
    pub fn for_character(pattern: &CharacterPattern, char_progress: f64) -> Self {
        let p = clamp01(char_progress);
        let drawable: Vec<usize> = pattern
            .strokes
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_empty())
            .map(|(i, _)| i)
            .collect();
        if p >= 1.0 || drawable.is_empty() {
            return Self::complete(pattern);
        }

        let scaled = p * drawable.len() as f64;
        let k = (scaled.floor() as usize).min(drawable.len() - 1);
        Self {
            index: drawable[k],
            progress: clamp01(scaled - k as f64),
        }
    }

    /// State of the stroke at `stroke_index`.
    pub fn state_of(&self, stroke_index: usize) -> StrokeState {
        use std::cmp::Ordering;

        match stroke_index.cmp(&self.index) {
            Ordering::Less => StrokeState::Completed,
            Ordering::Equal => StrokeState::Current,
            Ordering::Greater => StrokeState::Future,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/interpolate.rs"]
mod tests;
