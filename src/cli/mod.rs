//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction, ConvertArgs};
pub use commands::{
    export_options, handle_config_action, list_charsets, list_presets, output_format,
    output_size, run_convert, style_parameters, CliError,
};
pub use enums::{CharacterSet, ColorChoice, FormatChoice, PresetChoice};
