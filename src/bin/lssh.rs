//! lssh: SSH address book with add, remove, ssh, and list.
//!
//! Registry file: `~/.lssh.json`.

use lssh::cli;
use lssh::profile::Profile;
use std::process;

fn main() {
    process::exit(cli::run(Profile::LSSH, std::env::args_os()));
}
