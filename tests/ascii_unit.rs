//! Unit tests for the conversion stages.
//!
//! These tests verify the individual algorithms through the public API:
//! - Luminance and glyph mapping
//! - Tone mapping
//! - Sobel edge boost
//! - ANSI quantization and color resolution
//! - Output size helpers

use glyphgrid::ascii::*;

fn gradient_grid(width: u32, height: u32) -> PixelGrid {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for _y in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1).max(1)) as u8;
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    PixelGrid::from_rgba(width, height, data).unwrap()
}

// ==================== Luminance Tests ====================

#[test]
fn test_luminance_primaries() {
    assert!((luminance([255.0, 0.0, 0.0]) - 76.245).abs() < 1e-3);
    assert!((luminance([0.0, 255.0, 0.0]) - 149.685).abs() < 1e-3);
    assert!((luminance([0.0, 0.0, 255.0]) - 29.07).abs() < 1e-3);
}

#[test]
fn test_luminance_extremes() {
    assert_eq!(luminance([0.0, 0.0, 0.0]), 0.0);
    assert_eq!(luminance([255.0, 255.0, 255.0]), 255.0);
}

#[test]
fn test_luminance_order() {
    // Green reads brightest, then red, then blue
    let r = luminance([255.0, 0.0, 0.0]);
    let g = luminance([0.0, 255.0, 0.0]);
    let b = luminance([0.0, 0.0, 255.0]);
    assert!(g > r && r > b);
}

// ==================== Glyph Index Tests ====================

#[test]
fn test_glyph_index_in_range_for_all_ramps() {
    for levels in 1..=70 {
        for l in 0..=255 {
            let idx = glyph_index(l as f32, levels);
            assert!(idx < levels, "L={} N={} gave {}", l, levels, idx);
        }
    }
}

#[test]
fn test_glyph_index_endpoints() {
    for levels in 1..=70 {
        assert_eq!(glyph_index(0.0, levels), 0);
        assert_eq!(glyph_index(255.0, levels), levels - 1);
    }
}

#[test]
fn test_glyph_index_monotonic() {
    let mut last = 0;
    for l in 0..=255 {
        let idx = glyph_index(l as f32, 10);
        assert!(idx >= last);
        last = idx;
    }
}

#[test]
fn test_map_to_chars_standard() {
    let ramp = CharSet::Standard.ramp();
    let chars = map_to_chars(&[0.0, 127.0, 255.0], &ramp);
    // 127 / 255 * 9 = 4.48 -> index 4
    assert_eq!(chars, vec![' ', '=', '@']);
}

#[test]
fn test_single_glyph_ramp() {
    let ramp = GlyphRamp::custom("#");
    for l in [0.0, 100.0, 255.0] {
        assert_eq!(map_to_char(l, &ramp), '#');
    }
}

// ==================== Charset Tests ====================

#[test]
fn test_charsets_start_blank_and_are_distinct() {
    for charset in CharSet::ALL {
        assert_eq!(charset.chars()[0], ' ', "{} should start with a space", charset.name());
    }
    assert_eq!(STANDARD_CHARSET.len(), 10);
    assert_eq!(DETAILED_CHARSET.len(), 70);
    assert_ne!(CharSet::Blocks.ramp(), CharSet::Dots.ramp());
}

#[test]
fn test_empty_custom_ramp_falls_back() {
    assert_eq!(GlyphRamp::custom(""), CharSet::Standard.ramp());
    assert!(GlyphRamp::new(Vec::new()).is_err());
}

#[test]
fn test_reversed_twice_is_identity() {
    let ramp = CharSet::Detailed.ramp();
    assert_eq!(ramp.reversed().reversed(), ramp);
    assert_eq!(ramp.reversed().as_slice()[0], '$');
}

// ==================== Tone Mapping Tests ====================

#[test]
fn test_tone_identity() {
    let tone = Tone::default();
    assert!(tone.is_identity());
    for v in 0..=255u8 {
        assert!((tone.adjust(v) - v as f32).abs() < 1e-3, "value {}", v);
    }
}

#[test]
fn test_tone_identity_preserves_luminance() {
    let tone = Tone::new(1.0, 1.0);
    for rgb in [[200u8, 100, 50], [0, 0, 0], [12, 250, 99], [255, 255, 255]] {
        let raw = luminance([rgb[0] as f32, rgb[1] as f32, rgb[2] as f32]);
        let toned = luminance(tone.adjust_rgb(rgb));
        assert!((raw - toned).abs() < 1e-3);
    }
}

#[test]
fn test_tone_contrast_pivots_on_mid_gray() {
    let tone = Tone::new(1.0, 2.0);
    assert!((tone.adjust(0) - 0.0).abs() < 1e-3);
    assert!((tone.adjust(255) - 255.0).abs() < 1e-3);
    // (64/255 - 0.5) * 2 + 0.5 = 0.00196 -> 0.5
    assert!((tone.adjust(64) - 0.5).abs() < 1e-2);
}

#[test]
fn test_tone_brightness_clamps() {
    let tone = Tone::new(2.0, 1.0);
    assert_eq!(tone.adjust(200), 255.0);
    assert!((tone.adjust(100) - 200.0).abs() < 1e-3);
}

// ==================== Edge Detection Tests ====================

#[test]
fn test_edges_uniform_unchanged() {
    let grid = PixelGrid::filled(10, 8, [90, 120, 30, 255]).unwrap();
    assert_eq!(apply_edge_detection(&grid), grid);
}

#[test]
fn test_edges_border_untouched() {
    let grid = gradient_grid(12, 6);
    let out = apply_edge_detection(&grid);
    for x in 0..12 {
        assert_eq!(out.pixel(x, 0), grid.pixel(x, 0));
        assert_eq!(out.pixel(x, 5), grid.pixel(x, 5));
    }
    for y in 0..6 {
        assert_eq!(out.pixel(0, y), grid.pixel(0, y));
        assert_eq!(out.pixel(11, y), grid.pixel(11, y));
    }
}

#[test]
fn test_edges_boost_vertical_step() {
    // Left half 0, right half 200
    let mut data = Vec::new();
    for _y in 0..5 {
        for x in 0..6 {
            let v = if x < 3 { 0 } else { 200 };
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    let grid = PixelGrid::from_rgba(6, 5, data).unwrap();
    let out = apply_edge_detection(&grid);

    // gx at the step is 4 * 200 = 800, boost 400 clamps to 255
    assert_eq!(out.pixel(2, 2), [255, 255, 255, 255]);
    assert_eq!(out.pixel(3, 2), [255, 255, 255, 255]);
    // Away from the step nothing changes
    assert_eq!(out.pixel(1, 2), grid.pixel(1, 2));
    assert_eq!(out.pixel(4, 2), grid.pixel(4, 2));
}

#[test]
fn test_edges_gradient_magnitude_threshold() {
    assert!(gradient_magnitude(&gradient_grid(5, 5), 2, 2) > 0.0);
    assert_eq!(EDGE_THRESHOLD, 50.0);
}

#[test]
fn test_edges_do_not_mutate_input() {
    let grid = gradient_grid(4, 4);
    let copy = grid.clone();
    let _ = apply_edge_detection(&grid);
    assert_eq!(grid, copy);
}

// ==================== Color Tests ====================

#[test]
fn test_ansi_index_corners() {
    assert_eq!(ansi256_index([0.0, 0.0, 0.0]), 16);
    assert_eq!(ansi256_index([255.0, 255.0, 255.0]), 231);
    assert_eq!(ansi256_index([255.0, 0.0, 0.0]), 196);
    assert_eq!(ansi256_index([0.0, 255.0, 0.0]), 46);
    assert_eq!(ansi256_index([0.0, 0.0, 255.0]), 21);
}

#[test]
fn test_ansi_quantization_idempotent() {
    for r in (0..=255).step_by(15) {
        for g in (0..=255).step_by(17) {
            for b in (0..=255).step_by(51) {
                let index = ansi256_index([r as f32, g as f32, b as f32]);
                let approx = ansi256_to_rgb(index);
                let again = ansi256_index([approx.r as f32, approx.g as f32, approx.b as f32]);
                assert_eq!(index, again, "rgb({},{},{})", r, g, b);
            }
        }
    }
}

#[test]
fn test_background_alpha_scenario() {
    let lum = luminance([200.0, 100.0, 50.0]);
    assert!((lum - 124.2).abs() < 1e-3);
    assert!((background_alpha(lum) - 0.146).abs() < 1e-3);
    assert!((background_alpha(255.0) - 0.3).abs() < 1e-6);
    assert_eq!(background_alpha(0.0), 0.0);
}

#[test]
fn test_resolve_per_mode() {
    let rgb = [200.0, 100.0, 50.0];
    let lum = luminance(rgb);
    assert!(resolve_color(ColorMode::Grayscale, rgb, lum).is_none());

    let fg = resolve_color(ColorMode::Rgb, rgb, lum).unwrap();
    assert_eq!(fg.foreground(), Rgb::new(200, 100, 50));
    assert!(fg.background().is_none());

    let full = resolve_color(ColorMode::FullRgb, rgb, lum).unwrap();
    assert_eq!(full.background().map(|bg| (bg.r, bg.g, bg.b)), Some((200, 100, 50)));

    match resolve_color(ColorMode::Ansi256, rgb, lum).unwrap() {
        // levels 4, 2, 1
        CellColor::Ansi256 { index, approx } => {
            assert_eq!(index, 16 + 36 * 4 + 6 * 2 + 1);
            assert_eq!(approx, Rgb::new(204, 102, 51));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_color_mode_names() {
    for mode in ColorMode::ALL {
        assert_eq!(ColorMode::from_name(mode.name()), Some(mode));
    }
    assert!(!ColorMode::Grayscale.is_colored());
    assert!(ColorMode::Ansi256.is_colored());
}

// ==================== Dimension Tests ====================

#[test]
fn test_scale_by_percent() {
    assert_eq!(scale_by_percent(640, 480, 25.0), (160, 60));
    // Small sources hit the minimum
    assert_eq!(scale_by_percent(20, 20, 10.0), (10, 10));
}

#[test]
fn test_fit_width_keeps_aspect() {
    // Square image, 80 columns, glyphs twice as tall as wide
    assert_eq!(fit_width(500, 500, 80), 40);
    assert_eq!(fit_width(0, 500, 80), 10);
}

#[test]
fn test_calculate_dimensions() {
    assert_eq!(calculate_dimensions(640, 480, 80, 60), (80, 30));
    assert_eq!(calculate_dimensions(0, 480, 80, 60), (0, 0));
    // Tall box constraint falls back to the height
    let (w, h) = calculate_dimensions(480, 640, 80, 20);
    assert_eq!(h, 20);
    assert!(w <= 80);
}
