use crate::foundation::core::{BezPath, Canvas, Point, Rgba8};

/// Backend-agnostic description of one frame: a background fill followed by draw ops in order.
#[derive(Clone, Debug)]
pub struct FramePlan {
    /// Output size.
    pub canvas: Canvas,
    /// Board color the frame is cleared to.
    pub background: Rgba8,
    /// Draw ops, painted back to front.
    pub ops: Vec<DrawOp>,
}

impl FramePlan {
    /// Number of ops tagged with `role`.
    pub fn count_role(&self, role: OpRole) -> usize {
        self.ops.iter().filter(|op| op.role() == role).count()
    }
}

/// What a draw op depicts. Backends ignore it; tests and tooling use it to inspect plans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpRole {
    /// Board grid line.
    Grid,
    /// Ruled handwriting guide line.
    GuideLine,
    /// Segment of a fully drawn stroke.
    CompletedStroke,
    /// Segment of the stroke being drawn.
    ActiveStroke,
    /// Solid pen-tip dot.
    PenTip,
    /// Soft halo around the pen tip.
    PenHalo,
    /// Stroke-order badge disc.
    Badge,
    /// Stroke number inside a badge.
    BadgeLabel,
    /// Drawing-direction arrow.
    DirectionArrow,
    /// Blinking text cursor.
    Cursor,
    /// Parametric shape outline (circle, axes).
    Shape,
    /// Shape annotation (radius line, center dot).
    Annotation,
    /// Per-point pressure indicator.
    PressureMark,
}

/// How a path or circle is painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathStyle {
    /// Filled interior.
    Fill,
    /// Stroked outline with round caps and joins.
    Stroke {
        /// Line width in pixels.
        width: f64,
    },
}

/// One primitive draw.
///
/// Colors are straight alpha; `opacity` multiplies the color's alpha.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Round-capped line segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Line width in pixels.
        width: f64,
        /// Paint color.
        color: Rgba8,
        /// Opacity multiplier in `[0, 1]`.
        opacity: f32,
        /// What the op depicts.
        role: OpRole,
    },
    /// Arbitrary path.
    Path {
        /// Geometry in canvas pixels.
        path: BezPath,
        /// Fill or stroke.
        style: PathStyle,
        /// Paint color.
        color: Rgba8,
        /// Opacity multiplier in `[0, 1]`.
        opacity: f32,
        /// What the op depicts.
        role: OpRole,
    },
    /// Circle.
    Circle {
        /// Center in canvas pixels.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Fill or stroke.
        style: PathStyle,
        /// Paint color.
        color: Rgba8,
        /// Opacity multiplier in `[0, 1]`.
        opacity: f32,
        /// What the op depicts.
        role: OpRole,
    },
}

impl DrawOp {
    /// Role tag of this op.
    pub fn role(&self) -> OpRole {
        match self {
            Self::Line { role, .. } | Self::Path { role, .. } | Self::Circle { role, .. } => *role,
        }
    }

    /// Opacity multiplier of this op.
    pub fn opacity(&self) -> f32 {
        match self {
            Self::Line { opacity, .. }
            | Self::Path { opacity, .. }
            | Self::Circle { opacity, .. } => *opacity,
        }
    }

    fn opacity_mut(&mut self) -> &mut f32 {
        match self {
            Self::Line { opacity, .. }
            | Self::Path { opacity, .. }
            | Self::Circle { opacity, .. } => opacity,
        }
    }
}

/// Op sink the drawing routines write into.
///
/// Carries a group opacity that is folded into every pushed op, so a whole step can fade in
/// without the routines knowing about it.
#[derive(Clone, Debug)]
pub struct DrawList {
    ops: Vec<DrawOp>,
    alpha: f32,
}

impl DrawList {
    /// Empty list at full opacity.
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            alpha: 1.0,
        }
    }

    /// Append an op, scaling its opacity by the current group opacity.
    ///
    /// Ops that end up fully transparent, or that carry non-finite geometry, are dropped.
    pub fn push(&mut self, mut op: DrawOp) {
        let o = (op.opacity() * self.alpha).clamp(0.0, 1.0);
        if o <= 0.0 || !geometry_is_finite(&op) {
            return;
        }
        *op.opacity_mut() = o;
        self.ops.push(op);
    }

    /// Run `f` with the group opacity multiplied by `alpha`.
    pub fn with_alpha<R>(&mut self, alpha: f32, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.alpha;
        self.alpha = saved * alpha.clamp(0.0, 1.0);
        let out = f(self);
        self.alpha = saved;
        out
    }

    /// Ops pushed so far.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of ops pushed so far.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// `true` when nothing was pushed.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Wrap the ops into a frame plan.
    pub fn into_plan(self, canvas: Canvas, background: Rgba8) -> FramePlan {
        FramePlan {
            canvas,
            background,
            ops: self.ops,
        }
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

fn geometry_is_finite(op: &DrawOp) -> bool {
    fn pt(p: &Point) -> bool {
        p.x.is_finite() && p.y.is_finite()
    }
    match op {
        DrawOp::Line {
            from, to, width, ..
        } => pt(from) && pt(to) && width.is_finite(),
        DrawOp::Path { path, .. } => path.is_finite(),
        DrawOp::Circle { center, radius, .. } => pt(center) && radius.is_finite(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/plan.rs"]
mod tests;
