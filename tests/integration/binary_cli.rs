//! End-to-end tests: run the built `lssh` / `nssh` binaries against an isolated home.

use crate::integration::{false_program, stderr, stdout, TestEnv};

const LSSH: &str = env!("CARGO_BIN_EXE_lssh");
const NSSH: &str = env!("CARGO_BIN_EXE_nssh");

#[test]
fn test_add_creates_registry_file() {
    let env = TestEnv::new();
    let output = env.run(LSSH, &["add", "web", "10.0.0.1", "deploy"]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "web (10.0.0.1) created!");

    let content = std::fs::read_to_string(env.registry_file("lssh")).unwrap();
    assert_eq!(
        content,
        "[\n    {\n        \"name\": \"web\",\n        \"ip\": \"10.0.0.1\",\n        \"user\": \"deploy\"\n    }\n]"
    );
}

#[test]
fn test_duplicate_add_exits_zero_without_writing() {
    let env = TestEnv::new();
    env.run(LSSH, &["add", "web", "10.0.0.1", "deploy"]);
    let before = std::fs::read_to_string(env.registry_file("lssh")).unwrap();

    let output = env.run(LSSH, &["add", "web", "192.168.1.1", "other"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), "Server name already exists!");

    let after = std::fs::read_to_string(env.registry_file("lssh")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_list_is_sorted_case_sensitive() {
    let env = TestEnv::new();
    for name in ["bob", "Alice", "zeta"] {
        let output = env.run(LSSH, &["add", name, "10.0.0.1", "u"]);
        assert!(output.status.success());
    }

    let output = env.run(LSSH, &["list"]);
    assert!(output.status.success());
    let text = stdout(&output);
    let alice = text.find("Alice").unwrap();
    let bob = text.find("bob").unwrap();
    let zeta = text.find("zeta").unwrap();
    let header = text.find("NAME").unwrap();
    assert!(header < alice && alice < bob && bob < zeta, "{}", text);

    // Alias prints the same table
    let alias = env.run(LSSH, &["ls"]);
    assert_eq!(stdout(&alias), text);
}

#[test]
fn test_list_json() {
    let env = TestEnv::new();
    env.run(LSSH, &["add", "b", "10.0.0.2", "u2"]);
    env.run(LSSH, &["add", "a", "10.0.0.1", "u1"]);

    let output = env.run(LSSH, &["list", "--format", "json"]);
    assert!(output.status.success());
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0]["name"], "a");
    assert_eq!(parsed[1]["user"], "u2");
}

#[test]
fn test_remove_and_rm() {
    let env = TestEnv::new();
    env.run(LSSH, &["add", "web", "10.0.0.1", "deploy"]);
    env.run(LSSH, &["add", "db", "10.0.0.2", "pg"]);

    let output = env.run(LSSH, &["remove", "web"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "web removed!");

    let output = env.run(LSSH, &["rm", "db"]);
    assert_eq!(stdout(&output).trim(), "db removed!");

    let content = std::fs::read_to_string(env.registry_file("lssh")).unwrap();
    assert_eq!(content, "[]");
}

#[test]
fn test_remove_missing_exits_zero() {
    let env = TestEnv::new();
    let output = env.run(LSSH, &["rm", "ghost"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), "There is no such server!");
    assert!(!env.registry_file("lssh").exists());
}

#[test]
fn test_unknown_command_exits_one() {
    let env = TestEnv::new();
    let output = env.run(LSSH, &["frobnicate", "x"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Invalid command: frobnicate"), "{}", err);
    assert!(err.contains("See --help"), "{}", err);
}

#[test]
fn test_nssh_has_no_remove() {
    let env = TestEnv::new();
    env.run(NSSH, &["add", "web", "10.0.0.1", "deploy"]);
    assert!(env.registry_file("nssh").exists());
    assert!(!env.registry_file("lssh").exists());

    let output = env.run(NSSH, &["remove", "web"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid command: remove"));

    let output = env.run(NSSH, &["rm", "web"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid command: rm\n"), "{}", stderr(&output));

    let help = env.run(NSSH, &["--help"]);
    assert!(help.status.success());
    let text = stdout(&help);
    assert!(text.contains("ssh"));
    assert!(!text.contains("Remove server"), "{}", text);
}

#[test]
fn test_ssh_launches_with_tty_flag() {
    let env = TestEnv::new();
    env.run(LSSH, &["add", "web", "10.0.0.1", "deploy"]);

    // The stand-in ssh is echo, which prints its arguments
    let output = env.run(LSSH, &["ssh", "web"]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "-t deploy@10.0.0.1");
}

#[test]
fn test_ssh_unknown_never_launches() {
    let env = TestEnv::new();
    let output = env.run(LSSH, &["ssh", "nowhere"]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert_eq!(text.trim(), "There is no such server");
    assert!(!text.contains("-t"));

    let output = env.run(NSSH, &["ssh", "nowhere"]);
    assert_eq!(stdout(&output).trim(), "There is no such server");
}

#[test]
fn test_failed_session_does_not_change_exit_code() {
    let env = TestEnv::with_ssh(Some(false_program()));
    env.run(LSSH, &["add", "web", "10.0.0.1", "deploy"]);
    let output = env.run(LSSH, &["ssh", "web"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_missing_ssh_exits_before_dispatch() {
    let env = TestEnv::without_ssh();
    let output = env.run(LSSH, &["add", "web", "10.0.0.1", "deploy"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Sorry, this tool requires ssh"));
    assert!(!env.registry_file("lssh").exists(), "no command may run");
}

#[test]
fn test_malformed_registry_is_fatal() {
    let env = TestEnv::new();
    std::fs::write(env.registry_file("lssh"), "[{\"name\": ").unwrap();
    let output = env.run(LSSH, &["list"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Malformed registry"), "{}", err);
    assert!(err.contains(".lssh.json"), "{}", err);
}

#[test]
fn test_version_and_help() {
    let env = TestEnv::new();
    let output = env.run(LSSH, &["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));

    let output = env.run(LSSH, &["--help"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Add new server"));
    assert!(text.contains("Remove server"));
    assert!(text.contains("List all configured servers"));
}

#[test]
fn test_unknown_list_format_is_argument_error() {
    let env = TestEnv::new();
    let output = env.run(LSSH, &["list", "--format", "yaml"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(!err.contains("Configuration error"), "{}", err);
    assert!(err.contains("yaml"), "{}", err);
}

#[test]
fn test_ssh_command_line_goes_through_shell() {
    let env = TestEnv::new();
    env.run(LSSH, &["add", "web", "10.0.0.1   -p   2222", "deploy"]);

    // The shell splits the stored ip into words; echo rejoins them with single spaces
    let output = env.run(LSSH, &["ssh", "web"]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "-t deploy@10.0.0.1 -p 2222");
}

#[test]
fn test_missing_arguments_exit_one() {
    let env = TestEnv::new();
    let output = env.run(LSSH, &["add", "web"]);
    assert_eq!(output.status.code(), Some(1));
}
