//! Tests for result serialization.
//!
//! Covers the text, ANSI, HTML, JSON and PNG writers through the public
//! `export` API, including file output.

use glyphgrid::ascii::{
    convert_grid, ColorMode, ConversionParameters, ConversionResult, PixelGrid, Rgb,
};
use glyphgrid::export::{
    self, render_png, ExportError, ExportOptions, Format, GlyphBitmap, GlyphRasterizer, PADDING,
};

/// Solid 3x5 block for every glyph except space.
struct SolidGlyphs;

impl GlyphRasterizer for SolidGlyphs {
    fn advance(&self, _px: f32) -> f32 {
        4.0
    }

    fn rasterize(&self, ch: char, _px: f32) -> GlyphBitmap {
        if ch == ' ' {
            return GlyphBitmap::default();
        }
        GlyphBitmap {
            xmin: 0,
            ymin: 0,
            width: 3,
            height: 5,
            coverage: vec![255; 15],
        }
    }
}

fn split_result(mode: ColorMode) -> ConversionResult {
    // Left column white, right column black
    let data = vec![
        255, 255, 255, 255, 0, 0, 0, 255, //
        255, 255, 255, 255, 0, 0, 0, 255,
    ];
    let grid = PixelGrid::from_rgba(2, 2, data).unwrap();
    convert_grid(&grid, &ConversionParameters::new(2, 2).with_color_mode(mode)).unwrap()
}

// ==================== Text Formats ====================

#[test]
fn test_text_is_plain_rows() {
    let result = split_result(ColorMode::Grayscale);
    let text = export::render_string(&result, Format::Text, &ExportOptions::default())
        .unwrap()
        .unwrap();
    assert_eq!(text, "@ \n@ \n");
}

#[test]
fn test_png_has_no_string_form() {
    let result = split_result(ColorMode::Grayscale);
    assert!(export::render_string(&result, Format::Png, &ExportOptions::default())
        .unwrap()
        .is_none());
}

#[test]
fn test_ansi_truecolor_rows() {
    let result = split_result(ColorMode::Rgb);
    let out = export::render_string(&result, Format::Ansi, &ExportOptions::default())
        .unwrap()
        .unwrap();
    let rows: Vec<&str> = out.lines().collect();
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert_eq!(
            row,
            "\x1b[38;2;255;255;255m@\x1b[38;2;0;0;0m \x1b[0m",
            "unexpected row {:?}",
            row
        );
    }
}

#[test]
fn test_html_document_colors() {
    let result = split_result(ColorMode::FullRgb);
    let options = ExportOptions {
        title: "split".to_string(),
        ..ExportOptions::default()
    };
    let html = export::render_string(&result, Format::Html, &options)
        .unwrap()
        .unwrap();
    assert!(html.contains("<title>split - ASCII Art</title>"));
    assert!(html.contains("color:rgb(255,255,255);background:rgba(255,255,255,0.3"));
    assert!(html.contains("color:rgb(0,0,0);background:rgba(0,0,0,0)"));
}

#[test]
fn test_json_shape() {
    let result = split_result(ColorMode::Rgb);
    let json = export::render_string(&result, Format::Json, &ExportOptions::default())
        .unwrap()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["width"], 2);
    assert_eq!(value["height"], 2);
    assert_eq!(value["lines"], serde_json::json!(["@ ", "@ "]));
    assert_eq!(value["colors"][1][0]["kind"], "rgb");
    assert_eq!(value["colors"][1][1]["foreground"]["r"], 0);
}

// ==================== File Output ====================

#[test]
fn test_write_text_and_html_files() {
    let dir = tempfile::tempdir().unwrap();
    let result = split_result(ColorMode::Grayscale);
    let options = ExportOptions::default();

    let txt = dir.path().join("out.txt");
    export::write(&result, Format::Text, &options, &txt).unwrap();
    assert_eq!(std::fs::read_to_string(&txt).unwrap(), "@ \n@ \n");

    let html = dir.path().join("out.html");
    export::write(&result, Format::Html, &options, &html).unwrap();
    assert!(std::fs::read_to_string(&html)
        .unwrap()
        .contains("<pre class=\"ascii-container\">@ \n@ \n</pre>"));
}

#[test]
fn test_write_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("out.txt");
    let err = export::write(
        &split_result(ColorMode::Grayscale),
        Format::Text,
        &ExportOptions::default(),
        &path,
    )
    .unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
}

#[test]
fn test_png_without_font_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = export::write(
        &split_result(ColorMode::Grayscale),
        Format::Png,
        &ExportOptions::default(),
        &dir.path().join("out.png"),
    )
    .unwrap_err();
    assert!(matches!(err, ExportError::MissingFont));
}

#[test]
fn test_png_with_unreadable_font_fails() {
    let dir = tempfile::tempdir().unwrap();
    let font = dir.path().join("font.ttf");
    std::fs::write(&font, b"not a font").unwrap();
    let options = ExportOptions {
        font: Some(font),
        ..ExportOptions::default()
    };
    let err = export::write(
        &split_result(ColorMode::Grayscale),
        Format::Png,
        &options,
        &dir.path().join("out.png"),
    )
    .unwrap_err();
    assert!(matches!(err, ExportError::Font { .. }));
}

// ==================== Raster ====================

#[test]
fn test_render_png_layout() {
    let result = split_result(ColorMode::Rgb);
    let options = ExportOptions {
        font_size: 10.0,
        line_height: 0.8,
        ..ExportOptions::default()
    };
    let img = render_png(&result, &options, &SolidGlyphs);
    // 2 columns of 4px, 2 rows of 8px
    assert_eq!(img.dimensions(), (8 + 2 * PADDING, 16 + 2 * PADDING));

    // First glyph: columns 20..23, rows 23..28 (baseline at 28)
    assert_eq!(img.get_pixel(PADDING + 1, PADDING + 5).0, [255, 255, 255, 255]);
    // The blank cell keeps the background
    assert_eq!(img.get_pixel(PADDING + 5, PADDING + 5).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
}

#[test]
fn test_render_png_custom_colors() {
    let result = split_result(ColorMode::Grayscale);
    let options = ExportOptions {
        font_size: 10.0,
        line_height: 1.0,
        foreground: Rgb::new(10, 20, 30),
        background: Rgb::new(200, 200, 200),
        ..ExportOptions::default()
    };
    let img = render_png(&result, &options, &SolidGlyphs);
    assert_eq!(img.get_pixel(PADDING + 1, PADDING + 7).0, [10, 20, 30, 255]);
    assert_eq!(img.get_pixel(1, 1).0, [200, 200, 200, 255]);
}
