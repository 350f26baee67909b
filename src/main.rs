use clap::Parser;

use glyphgrid::cli::{self, Args, CliError, Command};
use glyphgrid::config::Config;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Convert(convert) => {
            let config = match args.config {
                Some(path) => Config::load_from_explicit(path)?,
                None => Config::load(None)?,
            };
            cli::run_convert(&convert, &config)
        }
        Command::Charsets => {
            cli::list_charsets();
            Ok(())
        }
        Command::Presets => {
            cli::list_presets();
            Ok(())
        }
        Command::Config { action } => cli::handle_config_action(action, args.config.as_deref()),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
