//! Command-line interface entry point for `ccrm`

mod args;
mod commands;

use args::{Cli, Command};
use campus_records::config::Config;
use campus_records::info;
use campus_records::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use clap::Parser;
use commands::session::Session;
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    init_logging(&args, &config);

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Menu { no_sample_data } => {
            let mut session = Session::new(!no_sample_data);
            commands::menu::run(&mut session, &config);
        }
        Command::Import { input_file, export } => {
            commands::records::run_import(&input_file, export.as_deref());
        }
        Command::Export {
            output_file,
            import,
        } => {
            if let Some(session) = load_session(import.as_deref()) {
                commands::records::run_export(&session, &output_file);
            }
        }
        Command::Backup => commands::records::run_backup(&config),
        Command::Report {
            format,
            output,
            import,
            top,
        } => {
            if let Some(session) = load_session(import.as_deref()) {
                commands::records::run_report(&session, &format, output.as_deref(), top, &config);
            }
        }
    }
}

/// Apply level, debug, verbose and file sink settings: CLI flags win over config
fn init_logging(args: &Cli, config: &Config) {
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }
    set_level(level);

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }

    let config_log_path =
        (!config.logging.file.is_empty()).then(|| PathBuf::from(&config.logging.file));
    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }
}

/// Sample records, or students imported from `import` when given
fn load_session(import: Option<&std::path::Path>) -> Option<Session> {
    let Some(path) = import else {
        return Some(Session::new(true));
    };
    let mut session = Session::new(false);
    match session.import_students(path) {
        Ok(_) => Some(session),
        Err(e) => {
            eprintln!("✗ Failed to import {}: {e}", path.display());
            None
        }
    }
}
