//! Tool profiles: one registry CLI, parameterized per installed binary.

/// Subcommands a profile can enable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Add,
    Remove,
    Ssh,
    List,
}

impl CommandKind {
    pub const ALL: [CommandKind; 4] = [
        CommandKind::Add,
        CommandKind::Remove,
        CommandKind::Ssh,
        CommandKind::List,
    ];

    /// Subcommand name as typed on the command line
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Add => "add",
            CommandKind::Remove => "remove",
            CommandKind::Ssh => "ssh",
            CommandKind::List => "list",
        }
    }
}

/// Per-binary parameters: tool name, registry file, and enabled subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    /// Name shown in help output; also names the settings directory
    pub tool_name: &'static str,
    /// Registry file name, resolved against the home directory
    pub registry_file_name: &'static str,
    commands: &'static [CommandKind],
}

impl Profile {
    /// Full-featured profile, registry at `~/.lssh.json`
    pub const LSSH: Profile = Profile {
        tool_name: "lssh",
        registry_file_name: ".lssh.json",
        commands: &[
            CommandKind::Add,
            CommandKind::Remove,
            CommandKind::Ssh,
            CommandKind::List,
        ],
    };

    /// Profile without `remove`, registry at `~/.nssh.json`
    pub const NSSH: Profile = Profile {
        tool_name: "nssh",
        registry_file_name: ".nssh.json",
        commands: &[CommandKind::Add, CommandKind::Ssh, CommandKind::List],
    };

    pub const fn new(
        tool_name: &'static str,
        registry_file_name: &'static str,
        commands: &'static [CommandKind],
    ) -> Self {
        Self {
            tool_name,
            registry_file_name,
            commands,
        }
    }

    pub fn supports(&self, kind: CommandKind) -> bool {
        self.commands.contains(&kind)
    }

    /// Environment variable name under this tool's prefix, e.g. `LSSH_LOG`
    pub fn env_var(&self, suffix: &str) -> String {
        format!("{}_{}", self.env_prefix(), suffix)
    }

    pub fn env_prefix(&self) -> String {
        self.tool_name.to_ascii_uppercase()
    }
}
