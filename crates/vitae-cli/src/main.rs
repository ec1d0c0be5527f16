//! Vitae CLI - Command-line interface for education extraction from CVs.

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use vitae_cli::cli::{ConfigAction, ConfigArgs};
use vitae_cli::commands;
use vitae_cli::{Cli, Command, Config, Formatter};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flags.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> vitae_cli::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };

    // A missing file means defaults; a broken one can still be replaced by `config init --force`
    let replacing = matches!(
        cli.command,
        Command::Config(ConfigArgs {
            action: ConfigAction::Init { force: true, .. }
        })
    );
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) if replacing => {
            warn!("Ignoring unreadable configuration: {}", e);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Extract(args) => commands::execute_extract(args, &config, &formatter),
        Command::Config(args) => commands::execute_config(args, &config, &config_path, &formatter),
    }
}
