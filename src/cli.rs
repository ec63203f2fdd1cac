//! CLI domain: entry, parse, route, help, output, and presentation only.
//! No registry logic; a single route table dispatches to the server command service.

mod entry;
mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use entry::{build_logging_config, run};
pub use help::{command_kind, command_name};
pub use output::map_error;
pub use parse::{parse_args, Cli, Commands};
pub use presentation::{
    format_add_outcome, format_connect_not_found, format_list_result_json,
    format_list_result_text, format_remove_outcome,
};
pub use route::RunContext;
