use super::*;

fn seg(index: usize, point_count: usize, completed: bool) -> SegmentCtx {
    SegmentCtx {
        index,
        point_count,
        completed,
        base_width: 2.5,
    }
}

#[test]
fn authored_pressure_defaults_to_one() {
    let p = StrokePoint::new(0.0, 0.0);
    assert_eq!(AuthoredPressure.pressure_at(&p, Point::ORIGIN), 1.0);
    let p = p.with_pressure(0.4);
    assert_eq!(AuthoredPressure.pressure_at(&p, Point::ORIGIN), 0.4);
    assert_eq!(ConstantPressure(0.7).pressure_at(&p, Point::ORIGIN), 0.7);
}

#[test]
fn radial_pressure_grows_from_center() {
    let r = RadialPressure::new(Point::new(100.0, 100.0));
    let p = StrokePoint::new(0.0, 0.0);
    assert!((r.pressure_at(&p, Point::new(100.0, 100.0)) - 0.3).abs() < 1e-12);
    assert!((r.pressure_at(&p, Point::new(200.0, 100.0)) - 0.65).abs() < 1e-12);
    assert_eq!(r.pressure_at(&p, Point::new(900.0, 100.0)), 1.0);
}

#[test]
fn closures_are_sources() {
    let half = |_: &StrokePoint, pos: Point| if pos.x < 10.0 { 0.5 } else { 1.0 };
    let p = StrokePoint::new(0.0, 0.0);
    assert_eq!(half.pressure_at(&p, Point::new(1.0, 0.0)), 0.5);
    assert_eq!(half.pressure_at(&p, Point::new(11.0, 0.0)), 1.0);
}

#[test]
fn ink_width_and_alpha_follow_pressure() {
    let done = PressureStyle::Ink.segment(1.0, seg(0, 4, true), Rgba8::BLACK);
    assert!((done.width - 2.5 * 1.3).abs() < 1e-12);
    assert!((done.opacity - 1.0).abs() < 1e-6);

    let light = PressureStyle::Ink.segment(0.0, seg(0, 4, true), Rgba8::BLACK);
    assert!((light.width - 2.5 * 0.7).abs() < 1e-12);
    assert!((light.opacity - 0.85).abs() < 1e-6);
}

#[test]
fn active_ink_fades_in_along_the_stroke() {
    let first = PressureStyle::Ink.segment(1.0, seg(0, 10, false), Rgba8::BLACK);
    let late = PressureStyle::Ink.segment(1.0, seg(9, 10, false), Rgba8::BLACK);
    assert!((first.opacity - 0.7).abs() < 1e-6);
    assert!((late.opacity - 1.0).abs() < 1e-6);
}

#[test]
fn demo_styles_map_pressure() {
    let thick = PressureStyle::Thickness.segment(0.5, seg(0, 2, true), Rgba8::BLACK);
    assert_eq!(thick.width, 8.0);

    let heat = PressureStyle::Heat.segment(1.0, seg(0, 2, true), Rgba8::BLACK);
    assert_eq!(heat.color, Rgba8::rgb(0, 255, 127));

    let fb = PressureStyle::Feedback.segment(0.0, seg(0, 2, true), Rgba8::BLACK);
    assert_eq!(fb.width, 3.0);
    assert_eq!(fb.color, Rgba8::from_hsl(0.0, 0.7, 0.5));
    assert!(PressureStyle::Feedback.marks_points());

    let bad = PressureStyle::Detection.segment(0.1, seg(0, 2, true), Rgba8::BLACK);
    let good = PressureStyle::Detection.segment(0.5, seg(0, 2, true), Rgba8::BLACK);
    assert_ne!(bad.color, good.color);
    assert!(PressureStyle::is_out_of_band(0.9));
}

#[test]
fn style_names_parse() {
    assert_eq!("heat".parse::<PressureStyle>().unwrap(), PressureStyle::Heat);
    assert_eq!("Detection".parse::<PressureStyle>().unwrap(), PressureStyle::Detection);
    assert!("smudge".parse::<PressureStyle>().is_err());
}
