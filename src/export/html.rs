//! Standalone HTML document export.

use super::ExportOptions;
use crate::ascii::{escape_html, ConversionResult};

/// Wrap the result's markup in a self-contained HTML page with fixed
/// monospace styling.
pub fn render_html_document(result: &ConversionResult, options: &ExportOptions) -> String {
    let fg = options.foreground;
    let bg = options.background;
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - ASCII Art</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            background: #0a0a0a;
            display: flex;
            justify-content: center;
            padding: 40px 20px;
            min-height: 100vh;
        }}
        .ascii-container {{
            background: rgb({bg_r},{bg_g},{bg_b});
            color: rgb({fg_r},{fg_g},{fg_b});
            font-family: 'Courier New', monospace;
            font-size: {font_size}px;
            line-height: {line_height};
            white-space: pre;
            padding: 30px;
            border: 2px solid #333;
            border-radius: 12px;
            overflow: auto;
            max-width: 100%;
        }}
    </style>
</head>
<body>
    <pre class="ascii-container">{markup}</pre>
</body>
</html>
"#,
        title = escape_html(&options.title),
        bg_r = bg.r,
        bg_g = bg.g,
        bg_b = bg.b,
        fg_r = fg.r,
        fg_g = fg.g,
        fg_b = fg.b,
        font_size = options.font_size,
        line_height = options.line_height,
        markup = result.markup,
    )
}
