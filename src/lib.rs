//! lssh: an address book for SSH connections
//!
//! Keeps a named list of servers in a JSON file under the user's home directory
//! and hands interactive sessions off to the system `ssh` binary.

pub mod cli;
pub mod config;
pub mod connector;
pub mod error;
pub mod logging;
pub mod profile;
pub mod server;
pub mod store;
