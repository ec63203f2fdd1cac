//! CLI entry: the whole life of one invocation, shared by every tool binary.

use crate::cli::output::map_error;
use crate::cli::parse::{parse_args, Cli};
use crate::cli::route::RunContext;
use crate::config::{ConfigLoader, Settings};
use crate::connector::locate_program;
use crate::error::CliError;
use crate::logging::{init_logging, LoggingConfig};
use crate::profile::Profile;
use std::ffi::OsString;
use tracing::{error, info};

/// Run one invocation and return the process exit status.
///
/// 0 for help, version, and every recognized command (including "not found" and
/// "already exists" outcomes); 1 for anything that fails.
pub fn run<I, T>(profile: Profile, args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match parse_args(&profile, args) {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and are not failures
            let _ = e.print();
            return if e.use_stderr() { 1 } else { 0 };
        }
    };

    let settings = match load_settings(&profile, &cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            return 1;
        }
    };

    let logging_config = build_logging_config(&cli, &settings);
    if let Err(e) = init_logging(&logging_config, &profile) {
        eprintln!("Failed to initialize logging: {}", e);
        return 1;
    }

    info!(tool = profile.tool_name, "CLI starting");

    if let Err(e) = locate_program(&settings.ssh_program) {
        error!(program = %settings.ssh_program, "ssh executable not found");
        eprintln!("{}", e);
        return 1;
    }

    let context = match RunContext::new(profile, &settings) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading registry: {}", e);
            eprintln!("{}", map_error(&e));
            return 1;
        }
    };

    // Report invalid commands with the word as typed, so `rm` stays `rm`
    let result = context.execute(&cli.command).map_err(|e| match e {
        CliError::InvalidCommand(name) => {
            CliError::InvalidCommand(cli.typed_command.clone().unwrap_or(name))
        }
        other => other,
    });
    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            0
        }
        Err(e) => {
            eprintln!("{}", map_error(&e));
            1
        }
    }
}

fn load_settings(profile: &Profile, cli: &Cli) -> Result<Settings, CliError> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(profile, path),
        None => ConfigLoader::load(profile),
    }
}

/// Build logging configuration from CLI args and settings.
/// Precedence: CLI flags override the settings file, which overrides defaults.
pub fn build_logging_config(cli: &Cli, settings: &Settings) -> LoggingConfig {
    let mut config = settings.logging.clone();
    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    config
}
