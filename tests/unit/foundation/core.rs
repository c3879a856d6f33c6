use super::*;

#[test]
fn canvas_rejects_zero_and_oversized() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    let c = Canvas::new(640, 480).unwrap();
    assert_eq!(c.center(), Point::new(320.0, 240.0));
}

#[test]
fn hex_parses_both_lengths() {
    assert_eq!(Rgba8::from_hex("#FF6B6B").unwrap(), Rgba8::rgb(255, 107, 107));
    assert_eq!(
        Rgba8::from_hex("10b98180").unwrap(),
        Rgba8::rgba(16, 185, 129, 128)
    );
    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#zzzzzz").is_err());
}

#[test]
fn hex_roundtrips_through_serde() {
    let c: Rgba8 = serde_json::from_str("\"#3b82f6\"").unwrap();
    assert_eq!(c, Rgba8::rgb(0x3b, 0x82, 0xf6));
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#3b82f6\"");

    let arr: Rgba8 = serde_json::from_str("[1, 2, 3, 4]").unwrap();
    assert_eq!(arr, Rgba8::rgba(1, 2, 3, 4));
}

#[test]
fn premultiplied_scales_channels() {
    assert_eq!(Rgba8::rgba(255, 255, 255, 0).premultiplied(), [0, 0, 0, 0]);
    assert_eq!(Rgba8::rgba(255, 0, 128, 255).premultiplied(), [255, 0, 128, 255]);
    assert_eq!(Rgba8::rgba(255, 255, 255, 128).premultiplied(), [128, 128, 128, 128]);
}

#[test]
fn hsl_hits_primary_hues() {
    assert_eq!(Rgba8::from_hsl(0.0, 1.0, 0.5), Rgba8::rgb(255, 0, 0));
    assert_eq!(Rgba8::from_hsl(120.0, 1.0, 0.5), Rgba8::rgb(0, 255, 0));
    assert_eq!(Rgba8::from_hsl(240.0, 1.0, 0.5), Rgba8::rgb(0, 0, 255));
    assert_eq!(Rgba8::from_hsl(60.0, 0.0, 1.0), Rgba8::WHITE);
}
