use crate::glyph::model::StrokePoint;

/// Weight of the neighbour bias applied to interior points.
pub const SMOOTHING_BIAS: f64 = 0.1;

/// Light Catmull-Rom-style smoothing: every interior point moves by
/// `0.1 * (next - prev)`. Endpoints stay anchored; pressure and speed pass through.
///
/// Sequences shorter than three points are returned unchanged.
pub fn smooth_points(points: &[StrokePoint]) -> Vec<StrokePoint> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity(points.len());
    out.push(points[0]);
    for w in points.windows(3) {
        let (prev, curr, next) = (&w[0], &w[1], &w[2]);
        out.push(StrokePoint {
            x: curr.x + SMOOTHING_BIAS * (next.x - prev.x),
            y: curr.y + SMOOTHING_BIAS * (next.y - prev.y),
            pressure: curr.pressure,
            speed: curr.speed,
        });
    }
    out.push(points[points.len() - 1]);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/smooth.rs"]
mod tests;
