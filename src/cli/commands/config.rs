//! Config command handler

use crate::args::ConfigSubcommand;
use campus_records::config::Config;
use campus_records::info;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands; exits with status 1 when a change cannot be applied
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let outcome = match subcommand {
        None => Ok(format!("\n=== Configuration ===\n\n{config}")),
        Some(ConfigSubcommand::Get { key: None }) => Ok(config.to_string()),
        Some(ConfigSubcommand::Get { key: Some(key) }) => config
            .get(&key)
            .ok_or_else(|| format!("Unknown config key: '{key}'")),
        Some(ConfigSubcommand::Set { key, value }) => config
            .set(&key, &value)
            .and_then(|()| persist(config))
            .map(|()| format!("✓ Set {key} = {value}")),
        Some(ConfigSubcommand::Unset { key }) => config
            .unset(&key, defaults)
            .and_then(|()| persist(config))
            .map(|()| format!("✓ Reset {key} to default")),
        Some(ConfigSubcommand::Path) => Ok(Config::get_config_file_path().display().to_string()),
        Some(ConfigSubcommand::Reset) => {
            let stdin = io::stdin();
            reset(&mut stdin.lock(), &mut io::stdout())
        }
    };

    match outcome {
        Ok(message) => println!("{message}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn persist(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    info!("Saved config to {}", Config::get_config_file_path().display());
    Ok(())
}

/// Delete the config file after a y/yes confirmation read from `input`
fn reset<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String, String> {
    if !Config::get_config_file_path().exists() {
        return Ok("✓ Config is already at defaults".to_string());
    }
    if !confirm(
        input,
        output,
        "Are you sure you want to reset config to defaults? (y/n): ",
    ) {
        return Ok("✗ Reset cancelled".to_string());
    }
    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    Ok("✓ Config reset to defaults".to_string())
}

fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> bool {
    let _ = write!(output, "{question}");
    let _ = output.flush();
    let mut answer = String::new();
    if input.read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
