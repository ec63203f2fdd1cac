//! CLI command-name contract for logging and profile gating.

use crate::cli::parse::Commands;
use crate::profile::CommandKind;

/// Command name string for log fields (e.g. "add", "list").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::External(args) => match args.first() {
            Some(name) => format!("external.{}", name),
            None => "external".to_string(),
        },
        other => command_kind(other)
            .map(|kind| kind.name().to_string())
            .unwrap_or_default(),
    }
}

/// Profile-gated kind of a parsed command; `None` for the catch-all.
pub fn command_kind(command: &Commands) -> Option<CommandKind> {
    match command {
        Commands::Add { .. } => Some(CommandKind::Add),
        Commands::Remove { .. } => Some(CommandKind::Remove),
        Commands::Ssh { .. } => Some(CommandKind::Ssh),
        Commands::List { .. } => Some(CommandKind::List),
        Commands::External(_) => None,
    }
}

/// Command word for an invalid command; canonical name for a disabled subcommand
pub fn typed_name(command: &Commands) -> String {
    match command {
        Commands::External(args) => args.first().cloned().unwrap_or_default(),
        other => command_kind(other)
            .map(|kind| kind.name().to_string())
            .unwrap_or_default(),
    }
}
