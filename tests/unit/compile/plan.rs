use super::*;

fn dot(opacity: f32) -> DrawOp {
    DrawOp::Circle {
        center: Point::new(1.0, 1.0),
        radius: 2.0,
        style: PathStyle::Fill,
        color: Rgba8::BLACK,
        opacity,
        role: OpRole::PenTip,
    }
}

#[test]
fn group_alpha_multiplies_and_restores() {
    let mut list = DrawList::new();
    list.with_alpha(0.5, |l| {
        l.push(dot(0.8));
        l.with_alpha(0.5, |l| l.push(dot(1.0)));
    });
    list.push(dot(1.0));
    let o: Vec<f32> = list.ops().iter().map(DrawOp::opacity).collect();
    assert!((o[0] - 0.4).abs() < 1e-6);
    assert!((o[1] - 0.25).abs() < 1e-6);
    assert_eq!(o[2], 1.0);
}

#[test]
fn invisible_and_non_finite_ops_are_dropped() {
    let mut list = DrawList::new();
    list.push(dot(0.0));
    list.with_alpha(0.0, |l| l.push(dot(1.0)));
    list.push(DrawOp::Line {
        from: Point::new(f64::NAN, 0.0),
        to: Point::new(1.0, 1.0),
        width: 1.0,
        color: Rgba8::BLACK,
        opacity: 1.0,
        role: OpRole::DirectionArrow,
    });
    assert!(list.is_empty());
}

#[test]
fn opacity_is_clamped_to_one() {
    let mut list = DrawList::new();
    list.push(dot(1.3));
    assert_eq!(list.ops()[0].opacity(), 1.0);
}

#[test]
fn plan_counts_roles() {
    let mut list = DrawList::new();
    list.push(dot(1.0));
    list.push(dot(1.0));
    let plan = list.into_plan(Canvas::new(4, 4).unwrap(), Rgba8::WHITE);
    assert_eq!(plan.count_role(OpRole::PenTip), 2);
    assert_eq!(plan.count_role(OpRole::Badge), 0);
}
