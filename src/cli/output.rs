//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::CliError;

/// Map domain/service errors to a string for CLI output.
/// Keeps route handlers thin; user-facing wording lives on the error types.
pub fn map_error(e: &CliError) -> String {
    e.to_string()
}
