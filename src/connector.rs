//! Connector: hands an interactive session off to the system ssh binary.
//!
//! `launch` runs `ssh -t user@ip` as a shell command line with the terminal's stdio inherited
//! and returns at once. The line goes through the platform shell, so stored values are split
//! into words: an ip of `10.0.0.1 -p 2222` reaches ssh as a host plus a port flag.
//! Whether to wait on the returned [`Session`] is up to the caller; its exit status never
//! feeds into the CLI's own exit code.

use crate::error::ConnectError;
use crate::server::ServerRecord;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};

/// Starts sessions for resolved servers
pub trait Launcher {
    fn launch(&self, record: &ServerRecord) -> Result<Session, ConnectError>;
}

/// Handle to a launched session
#[derive(Debug)]
pub struct Session {
    destination: String,
    program: String,
    child: Option<Child>,
}

impl Session {
    /// Session handle with no backing process, for launchers that only record intent
    pub fn without_process(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            program: String::new(),
            child: None,
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn pid(&self) -> Option<u32> {
        self.child.as_ref().map(Child::id)
    }

    /// Block until the session ends. `None` when there is no backing process.
    pub fn wait(mut self) -> Result<Option<ExitStatus>, ConnectError> {
        match self.child.as_mut() {
            Some(child) => child.wait().map(Some).map_err(|e| ConnectError::Wait {
                program: self.program.clone(),
                source: e,
            }),
            None => Ok(None),
        }
    }
}

/// Launcher backed by an ssh executable
#[derive(Debug, Clone)]
pub struct SshLauncher {
    program: String,
}

impl SshLauncher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Command line handed to the shell
    pub fn command_line(&self, record: &ServerRecord) -> String {
        format!("{} -t {}", self.program, record.destination())
    }

    /// Build the shell command that runs ssh for a record
    pub fn command(&self, record: &ServerRecord) -> Command {
        let mut command = shell_command(&self.command_line(record));
        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}

impl Default for SshLauncher {
    fn default() -> Self {
        Self::new("ssh")
    }
}

impl Launcher for SshLauncher {
    fn launch(&self, record: &ServerRecord) -> Result<Session, ConnectError> {
        let child = self
            .command(record)
            .spawn()
            .map_err(|e| ConnectError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;
        tracing::debug!(pid = child.id(), program = %self.program, "ssh spawned");
        Ok(Session {
            destination: record.destination(),
            program: self.program.clone(),
            child: Some(child),
        })
    }
}

#[cfg(unix)]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("/bin/sh");
    command.arg("-c").arg(line);
    command
}

#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(line);
    command
}

/// Resolve `program` to an executable file, searching `PATH` unless it already names a path.
pub fn locate_program(program: &str) -> Result<PathBuf, ConnectError> {
    locate_program_in(program, std::env::var_os("PATH"))
}

/// Same as [`locate_program`] with an explicit search path
pub fn locate_program_in(
    program: &str,
    search_path: Option<OsString>,
) -> Result<PathBuf, ConnectError> {
    let missing = || ConnectError::MissingProgram(program.to_string());
    if program.is_empty() {
        return Err(missing());
    }

    let as_path = Path::new(program);
    if as_path.components().count() > 1 {
        return if is_executable(as_path) {
            Ok(as_path.to_path_buf())
        } else {
            Err(missing())
        };
    }

    let search_path = search_path.ok_or_else(missing)?;
    for dir in std::env::split_paths(&search_path) {
        let candidate = dir.join(program);
        if is_executable(&candidate) {
            return Ok(candidate);
        }
        let suffix = std::env::consts::EXE_SUFFIX;
        if !suffix.is_empty() {
            let candidate = dir.join(format!("{}{}", program, suffix));
            if is_executable(&candidate) {
                return Ok(candidate);
            }
        }
    }
    Err(missing())
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
