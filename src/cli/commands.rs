//! Subcommand handlers for convert, listings and config actions.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use thiserror::Error;

use super::args::{ConfigAction, ConvertArgs};
use crate::ascii::{
    self, fit_width, scale_by_percent, CharSet, ConversionParameters, ConversionResult,
    GlyphRamp, PixelSource,
};
use crate::config::{self, Config, ConfigError, ConversionConfig, ExportConfig};
use crate::error::ConvertError;
use crate::export::{self, ExportError, ExportOptions, Format};
use crate::presets::Preset;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{}: {source}", .path.display())]
    Convert { path: PathBuf, source: ConvertError },
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("PNG output requires --output")]
    PngToStdout,
    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),
    #[error("IO error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Parameters from config, then the preset flag, then explicit flags.
///
/// Width and height are left at their configured values; [`output_size`]
/// fills them in once the source dimensions are known.
pub fn style_parameters(
    args: &ConvertArgs,
    config: &ConversionConfig,
) -> Result<ConversionParameters> {
    let mut params = config.to_parameters()?;
    if let Some(preset) = args.preset {
        params = Preset::from(preset).apply(params);
    }
    if let Some(text) = &args.chars {
        params.ramp = GlyphRamp::custom(text);
    } else if let Some(charset) = args.charset {
        params.ramp = CharSet::from(charset).ramp();
    }
    if let Some(color) = args.color {
        params.color_mode = color.into();
    }
    if let Some(brightness) = args.brightness {
        params.brightness = brightness;
    }
    if let Some(contrast) = args.contrast {
        params.contrast = contrast;
    }
    params.inverted |= args.invert;
    params.edge_detection |= args.edges;
    Ok(params)
}

/// Output grid size for a source of `(width, height)` pixels.
pub fn output_size(
    args: &ConvertArgs,
    config: &ConversionConfig,
    source: (u32, u32),
) -> (u32, u32) {
    let (img_w, img_h) = source;
    if let Some(percent) = args.percent {
        return scale_by_percent(img_w, img_h, percent);
    }
    let width = args.width.unwrap_or(config.width).max(1);
    let height = args
        .height
        .or(config.height)
        .unwrap_or_else(|| fit_width(img_w, img_h, width));
    (width, height.max(1))
}

pub fn export_options(
    args: &ConvertArgs,
    config: &ExportConfig,
    title: &str,
) -> Result<ExportOptions> {
    let mut options = config.to_options()?;
    if let Some(font) = &args.font {
        options.font = Some(font.clone());
    }
    if let Some(size) = args.font_size {
        options.font_size = size;
    }
    options.title = title.to_string();
    Ok(options)
}

/// Explicit `--format`, else the output extension, else ANSI for colored
/// terminal output and plain text otherwise.
pub fn output_format(args: &ConvertArgs, params: &ConversionParameters) -> Format {
    if let Some(format) = args.format {
        return format.into();
    }
    if args.inputs.len() == 1 {
        if let Some(format) = args.output.as_deref().and_then(Format::from_path) {
            return format;
        }
    }
    if args.output.is_none() && params.color_mode.is_colored() {
        Format::Ansi
    } else {
        Format::Text
    }
}

fn convert_one(
    path: &Path,
    args: &ConvertArgs,
    config: &ConversionConfig,
    base: &ConversionParameters,
) -> Result<ConversionResult> {
    let wrap = |source: ConvertError| CliError::Convert {
        path: path.to_path_buf(),
        source,
    };
    let img = PixelSource::Path(path.to_path_buf())
        .decode()
        .map_err(wrap)?
        .into_owned();
    let (width, height) = output_size(args, config, (img.width(), img.height()));
    let params = ConversionParameters {
        width,
        height,
        ..base.clone()
    };
    log::info!(
        "Converting {} ({}x{} -> {}x{} cells)",
        path.display(),
        img.width(),
        img.height(),
        width,
        height
    );
    ascii::convert(&PixelSource::Image(img), &params).map_err(wrap)
}

fn title_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ASCII Art".to_string())
}

/// Convert every input (in parallel) and write or print the results in
/// input order.
pub fn run_convert(args: &ConvertArgs, config: &Config) -> Result<()> {
    let base = style_parameters(args, &config.conversion)?;
    let format = output_format(args, &base);
    if format == Format::Png && args.output.is_none() {
        return Err(CliError::PngToStdout);
    }

    let results: Vec<ConversionResult> = args
        .inputs
        .par_iter()
        .map(|path| convert_one(path, args, &config.conversion, &base))
        .collect::<Result<_>>()?;

    let many = args.inputs.len() > 1;
    if many {
        if let Some(dir) = &args.output {
            std::fs::create_dir_all(dir).map_err(|source| CliError::Io {
                path: dir.clone(),
                source,
            })?;
        }
    }

    for (path, result) in args.inputs.iter().zip(&results) {
        let title = title_for(path);
        let options = export_options(args, &config.export, &title)?;
        match &args.output {
            Some(out) => {
                let target = if many {
                    out.join(format!("{}.{}", title, format.extension()))
                } else {
                    out.clone()
                };
                export::write(result, format, &options, &target)?;
            }
            None => {
                if many {
                    println!("==> {} <==", path.display());
                }
                if let Some(text) = export::render_string(result, format, &options)? {
                    print!("{}", text);
                }
            }
        }
    }
    Ok(())
}

/// Print the built-in character sets.
pub fn list_charsets() {
    println!("Available character sets:");
    for charset in CharSet::ALL {
        let chars: String = charset.chars().iter().collect();
        println!("  {:<10} \"{}\"", charset.name(), chars);
    }
    println!();
    println!("Use --charset <name>, or --chars \"<glyphs>\" for a custom ramp.");
}

/// Print the style presets and what they set.
pub fn list_presets() {
    println!("Available presets:");
    for preset in Preset::ALL {
        let style = preset.style();
        println!(
            "  {:<14} charset={} color={} inverted={} brightness={} contrast={}",
            preset.name(),
            style.charset.name(),
            style.color_mode.name(),
            style.inverted,
            style.brightness,
            style.contrast
        );
    }
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, path: Option<&Path>) -> Result<()> {
    let config_path = path
        .map(PathBuf::from)
        .unwrap_or_else(config::default_path);

    match action {
        ConfigAction::Show => {
            let cfg = Config::load(Some(config_path.as_path()))?;
            let conv = &cfg.conversion;
            let params = conv.to_parameters()?;
            let options = cfg.export.to_options()?;

            println!("Current configuration:");
            println!("  Width: {}", conv.width);
            match conv.height {
                Some(h) => println!("  Height: {}", h),
                None => println!("  Height: auto"),
            }
            println!("  Charset: \"{}\"", params.ramp);
            println!("  Color mode: {}", params.color_mode.name());
            println!("  Brightness: {}", params.brightness);
            println!("  Contrast: {}", params.contrast);
            println!("  Inverted: {}", if params.inverted { "yes" } else { "no" });
            println!(
                "  Edge detection: {}",
                if params.edge_detection { "yes" } else { "no" }
            );
            println!("  Font size: {}", options.font_size);
            println!("  Line height: {}", options.line_height);
            match &options.font {
                Some(font) => println!("  Font: {}", font.display()),
                None => println!("  Font: (none)"),
            }
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(CliError::ConfigExists(config_path));
            }

            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).map_err(|source| CliError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }

            std::fs::write(&config_path, config::DEFAULT_CONFIG).map_err(|source| {
                CliError::Io {
                    path: config_path.clone(),
                    source,
                }
            })?;

            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::ColorMode;
    use crate::cli::enums::{CharacterSet, ColorChoice, FormatChoice, PresetChoice};

    fn args() -> ConvertArgs {
        ConvertArgs {
            inputs: vec![PathBuf::from("in.png")],
            ..ConvertArgs::default()
        }
    }

    #[test]
    fn test_style_defaults() {
        let params = style_parameters(&args(), &ConversionConfig::default()).unwrap();
        assert_eq!(params.ramp, GlyphRamp::default());
        assert_eq!(params.color_mode, ColorMode::Grayscale);
        assert!(!params.inverted);
    }

    #[test]
    fn test_flags_override_preset() {
        let args = ConvertArgs {
            preset: Some(PresetChoice::HighContrast),
            contrast: Some(0.8),
            charset: Some(CharacterSet::Binary),
            ..args()
        };
        let params = style_parameters(&args, &ConversionConfig::default()).unwrap();
        assert_eq!(params.brightness, 1.2);
        assert_eq!(params.contrast, 0.8);
        assert_eq!(params.ramp, CharSet::Binary.ramp());
    }

    #[test]
    fn test_flags_override_config() {
        let config = ConversionConfig {
            color_mode: Some("rgb".to_string()),
            charset: Some("blocks".to_string()),
            ..ConversionConfig::default()
        };
        let args = ConvertArgs {
            color: Some(ColorChoice::Ansi),
            chars: Some("ab".to_string()),
            ..args()
        };
        let params = style_parameters(&args, &config).unwrap();
        assert_eq!(params.color_mode, ColorMode::Ansi256);
        assert_eq!(params.ramp.as_slice(), &['a', 'b']);
    }

    #[test]
    fn test_output_size_auto_height() {
        let config = ConversionConfig::default();
        // 200x100 source at 100 columns: 100 / 2 / 2 = 25 rows
        assert_eq!(output_size(&args(), &config, (200, 100)), (100, 25));

        let explicit = ConvertArgs {
            width: Some(30),
            height: Some(7),
            ..args()
        };
        assert_eq!(output_size(&explicit, &config, (200, 100)), (30, 7));
    }

    #[test]
    fn test_output_size_percent() {
        let args = ConvertArgs {
            percent: Some(25.0),
            ..args()
        };
        assert_eq!(
            output_size(&args, &ConversionConfig::default(), (640, 480)),
            (160, 60)
        );
    }

    #[test]
    fn test_output_format_resolution() {
        let plain = ConversionParameters::default();
        let colored = ConversionParameters::default().with_color_mode(ColorMode::Rgb);

        assert_eq!(output_format(&args(), &plain), Format::Text);
        assert_eq!(output_format(&args(), &colored), Format::Ansi);

        let to_file = ConvertArgs {
            output: Some(PathBuf::from("out.json")),
            ..args()
        };
        assert_eq!(output_format(&to_file, &colored), Format::Json);

        let explicit = ConvertArgs {
            format: Some(FormatChoice::Html),
            output: Some(PathBuf::from("out.txt")),
            ..args()
        };
        assert_eq!(output_format(&explicit, &plain), Format::Html);
    }

    #[test]
    fn test_png_to_stdout_rejected() {
        let args = ConvertArgs {
            format: Some(FormatChoice::Png),
            ..args()
        };
        assert!(matches!(
            run_convert(&args, &Config::default()),
            Err(CliError::PngToStdout)
        ));
    }

    #[test]
    fn test_run_convert_writes_directory() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        image::RgbaImage::from_pixel(8, 8, image::Rgba([255, 255, 255, 255]))
            .save(&a)
            .unwrap();
        image::RgbaImage::from_pixel(8, 8, image::Rgba([0, 0, 0, 255]))
            .save(&b)
            .unwrap();

        let out = dir.path().join("out");
        let args = ConvertArgs {
            inputs: vec![a, b],
            width: Some(4),
            height: Some(2),
            output: Some(out.clone()),
            ..ConvertArgs::default()
        };
        run_convert(&args, &Config::default()).unwrap();

        assert_eq!(std::fs::read_to_string(out.join("a.txt")).unwrap(), "@@@@\n@@@@\n");
        assert_eq!(std::fs::read_to_string(out.join("b.txt")).unwrap(), "    \n    \n");
    }

    #[test]
    fn test_run_convert_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let args = ConvertArgs {
            inputs: vec![dir.path().join("missing.png")],
            output: Some(dir.path().join("out.txt")),
            ..ConvertArgs::default()
        };
        let err = run_convert(&args, &Config::default()).unwrap_err();
        assert!(matches!(err, CliError::Convert { .. }));
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn test_config_init_then_exists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        handle_config_action(ConfigAction::Init, Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), config::DEFAULT_CONFIG);

        assert!(matches!(
            handle_config_action(ConfigAction::Init, Some(&path)),
            Err(CliError::ConfigExists(_))
        ));
        handle_config_action(ConfigAction::Show, Some(&path)).unwrap();
    }
}
