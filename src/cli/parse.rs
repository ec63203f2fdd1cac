//! CLI parse: clap types for the registry tools. No behavior beyond profile-aware parsing.

use crate::profile::{CommandKind, Profile};
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Address book for SSH connections
#[derive(Parser, Debug)]
#[command(version)]
#[command(about = "Keep a list of servers and open ssh sessions to them by name")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file path (overrides the default settings location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand word exactly as typed, aliases included
    #[arg(skip)]
    pub typed_command: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add new server
    Add {
        /// Unique server name
        name: String,
        /// Address passed to ssh
        ip: String,
        /// Login user
        user: String,
    },
    /// Remove server
    #[command(visible_alias = "rm")]
    Remove {
        /// Server name
        name: String,
    },
    /// Connect to server
    Ssh {
        /// Server name
        name: String,
    },
    /// List all configured servers
    #[command(visible_alias = "ls")]
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Anything else: reported as an invalid command
    #[command(external_subcommand)]
    External(Vec<String>),
}

/// Parse argv for a profile. Subcommands the profile disables are hidden from help;
/// if typed anyway the route table treats them as invalid.
pub fn parse_args<I, T>(profile: &Profile, args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = Cli::command()
        .name(profile.tool_name)
        .bin_name(profile.tool_name);
    for kind in CommandKind::ALL {
        if !profile.supports(kind) {
            command = command.mut_subcommand(kind.name(), |sub| sub.hide(true));
        }
    }
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let matches = command.try_get_matches_from(args.iter().cloned())?;
    let mut cli = Cli::from_arg_matches(&matches)?;
    cli.typed_command = typed_subcommand(&args);
    Ok(cli)
}

/// First word after the program name that is neither a flag nor a flag's value
fn typed_subcommand(args: &[OsString]) -> Option<String> {
    let mut words = args.iter().skip(1).map(|w| w.to_string_lossy());
    while let Some(word) = words.next() {
        if word == "--config" || word == "--log-level" {
            words.next();
        } else if !word.starts_with('-') {
            return Some(word.into_owned());
        }
    }
    None
}
