//! CLI presentation: text and json formatters per command family.

mod server;

pub use server::{
    format_add_outcome, format_connect_not_found, format_list_result_json,
    format_list_result_text, format_remove_outcome,
};
