/// Wall-clock input for purely decorative effects, in seconds.
///
/// It modulates alpha, radius and small offsets of overlays (pen tip, arrow, cursor). It never
/// changes which stroke points are drawn, so plans compiled with equal decoration time are
/// identical.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct DecorationTime(pub f64);

impl DecorationTime {
    /// Time zero.
    pub const ZERO: Self = Self(0.0);

    /// Seconds since an arbitrary epoch.
    pub fn seconds(self) -> f64 {
        self.0
    }

    /// Pen-tip alpha factor in `[0.6, 1.0]`.
    pub fn pen_pulse(self) -> f64 {
        0.8 + (self.0 * 10.0).sin() * 0.2
    }

    /// Sideways bow of the direction arrow, as a fraction of its length.
    pub fn arrow_bow(self) -> f64 {
        (self.0 * 3.0).sin() * 0.1
    }

    /// Skew of the arrow head, in pixels.
    pub fn arrow_skew(self) -> f64 {
        (self.0 * 5.0).sin() * 0.1
    }

    /// Writing-cursor alpha in `[0.2, 1.0]`.
    pub fn cursor_alpha(self) -> f64 {
        (self.0 * 8.0).sin() * 0.4 + 0.6
    }

    /// Horizontal jitter of the writing cursor, in pixels.
    pub fn cursor_jitter(self) -> f64 {
        (self.0 * 12.0).sin() * 2.0
    }
}
