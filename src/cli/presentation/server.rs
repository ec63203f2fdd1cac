//! Server command presentation: confirmations, lookups, and the list table.

use crate::error::StoreError;
use crate::server::{AddOutcome, ListResult, RemoveOutcome};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

pub fn format_add_outcome(outcome: &AddOutcome) -> String {
    match outcome {
        AddOutcome::Created(record) => format!("{} ({}) created!", record.name, record.ip),
        AddOutcome::AlreadyExists(_) => "Server name already exists!".to_string(),
    }
}

pub fn format_remove_outcome(outcome: &RemoveOutcome) -> String {
    match outcome {
        RemoveOutcome::Removed(record) => format!("{} removed!", record.name),
        RemoveOutcome::NotFound(_) => "There is no such server!".to_string(),
    }
}

pub fn format_connect_not_found(_name: &str) -> String {
    "There is no such server".to_string()
}

/// Two-column NAME | IP table, rows in the order given
pub fn format_list_result_text(result: &ListResult) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["NAME", "IP"]);
    for server in &result.servers {
        table.add_row(vec![&server.name, &server.ip]);
    }
    table.to_string()
}

pub fn format_list_result_json(result: &ListResult) -> Result<String, StoreError> {
    serde_json::to_string_pretty(&result.servers).map_err(StoreError::Serialize)
}
