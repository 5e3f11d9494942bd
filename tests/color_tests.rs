// Host-side tests for color parsing and the tuning constants.

mod common;
use common::core::*;

#[test]
fn parses_default_material_color() {
    let c = Color::from_hex(DEFAULT_MATERIAL_COLOR).unwrap();
    assert_eq!(c, Color::new(0xf5, 0x40, 0x2c));
    assert_eq!(c.to_hex(), "#f5402c");
    assert_eq!(c.to_string(), "#f5402c");
}

#[test]
fn parses_short_and_unprefixed_forms() {
    assert_eq!(Color::from_hex("#fff"), Some(Color::new(255, 255, 255)));
    assert_eq!(Color::from_hex("0a0B0c"), Some(Color::new(10, 11, 12)));
    assert_eq!(Color::from_hex("  #102030 "), Some(Color::new(16, 32, 48)));
}

#[test]
fn rejects_malformed_colors() {
    for bad in ["", "#", "#12345", "#1234567", "#gggggg", "red", "#ff00é"] {
        assert_eq!(Color::from_hex(bad), None, "accepted {bad:?}");
    }
}

#[test]
fn srgb_to_linear_endpoints_and_midtone() {
    assert_eq!(srgb_to_linear(0), 0.0);
    assert!((srgb_to_linear(255) - 1.0).abs() < 1e-6);
    // sRGB 50% gray is roughly 21.4% linear
    assert!((srgb_to_linear(128) - 0.2158).abs() < 1e-3);
    let rgba = Color::new(255, 0, 255).to_linear_rgba();
    assert_eq!(rgba[1], 0.0);
    assert_eq!(rgba[3], 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(SECTION_COUNT > 0);
    assert!(SECTION_SPACING > 0.0);
    assert!(SPIN_RATE_Y > SPIN_RATE_X);
    assert!(KICK_DURATION_SEC > 0.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_Z > CAMERA_NEAR);
    assert!(PARTICLE_SIZE > 0.0);
    // Parallax smoothing converges only while 5 * dt < 1 at display rates.
    assert!(PARALLAX_EASING_PER_SEC / 30.0 < 1.0);
    // Toon bands are ordered dark to lit.
    assert!(TOON_BANDS.windows(2).all(|w| w[0] < w[1]));
    assert!(TOON_BANDS.iter().all(|b| (0.0..=1.0).contains(b)));
}
