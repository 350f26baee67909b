//! Terminal rendering with ANSI color escapes.

use std::fmt::Write;

use crate::ascii::{CellColor, ConversionResult};

const RESET: &str = "\x1b[0m";

/// Render a result for a terminal.
///
/// Grayscale results are returned as plain text. Colored results use
/// 24-bit escapes for the RGB modes and 256-color escapes for the ANSI
/// mode; each row ends with a reset.
pub fn render_ansi(result: &ConversionResult) -> String {
    if result.colors.is_none() {
        return result.text.clone();
    }

    let mut out = String::with_capacity(result.text.len() * 20);
    for (y, line) in result.lines().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            match result.color_at(x, y) {
                Some(color) => push_escape(&mut out, &color),
                None => out.push_str(RESET),
            }
            out.push(ch);
        }
        out.push_str(RESET);
        out.push('\n');
    }
    out
}

fn push_escape(out: &mut String, color: &CellColor) {
    // Writing to a String never fails
    let _ = match *color {
        CellColor::Ansi256 { index, .. } => write!(out, "\x1b[38;5;{}m", index),
        CellColor::Rgb { foreground: fg } => write!(out, "\x1b[38;2;{};{};{}m", fg.r, fg.g, fg.b),
        CellColor::FullRgb {
            foreground: fg,
            background: bg,
        } => {
            // Terminals have no alpha; blend the background over black
            let blend = |c: u8| (c as f32 * bg.a).round() as u8;
            write!(
                out,
                "\x1b[38;2;{};{};{};48;2;{};{};{}m",
                fg.r,
                fg.g,
                fg.b,
                blend(bg.r),
                blend(bg.g),
                blend(bg.b)
            )
        }
    };
}
