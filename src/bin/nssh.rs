//! nssh: SSH address book without `remove`.
//!
//! Registry file: `~/.nssh.json`.

use lssh::cli;
use lssh::profile::Profile;
use std::process;

fn main() {
    process::exit(cli::run(Profile::NSSH, std::env::args_os()));
}
