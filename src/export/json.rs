//! JSON export.

use serde::Serialize;

use super::Result;
use crate::ascii::{CellColor, ConversionResult};

#[derive(Serialize)]
struct JsonExport<'a> {
    success: bool,
    width: u32,
    height: u32,
    ascii: &'a str,
    lines: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    colors: Option<&'a Vec<Vec<Option<CellColor>>>>,
}

/// Pretty-printed JSON with the text, its rows and the color grid.
pub fn render_json(result: &ConversionResult) -> Result<String> {
    let export = JsonExport {
        success: true,
        width: result.width,
        height: result.height,
        ascii: &result.text,
        lines: result.lines().collect(),
        colors: result.colors.as_ref(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}
