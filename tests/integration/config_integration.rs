//! Integration tests for settings resolution through the binaries

use crate::integration::{stderr, stdout, TestEnv};

const LSSH: &str = env!("CARGO_BIN_EXE_lssh");

#[test]
fn test_settings_file_overrides_registry_path() {
    let env = TestEnv::new();
    let custom = env.root().join("servers.json");
    env.write_settings(
        "lssh",
        &format!("registry_path = {:?}\n", custom.to_str().unwrap()),
    );

    let output = env.run(LSSH, &["add", "web", "10.0.0.1", "deploy"]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert!(custom.exists());
    assert!(!env.registry_file("lssh").exists());
}

#[test]
fn test_explicit_config_flag() {
    let env = TestEnv::new();
    let custom = env.root().join("elsewhere.json");
    let settings = env.root().join("alt.toml");
    std::fs::write(
        &settings,
        format!("registry_path = {:?}\n", custom.to_str().unwrap()),
    )
    .unwrap();

    let output = env.run(
        LSSH,
        &["--config", settings.to_str().unwrap(), "add", "db", "10.0.0.2", "pg"],
    );
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert!(custom.exists());
}

#[test]
fn test_missing_explicit_config_is_fatal() {
    let env = TestEnv::new();
    let output = env.run(LSSH, &["--config", "/definitely/not/here.toml", "list"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Settings file not found"));
}

#[test]
fn test_ssh_program_setting_controls_preflight() {
    // No ssh override in the environment and nothing on PATH
    let env = TestEnv::without_ssh();
    let output = env.run(LSSH, &["list"]);
    assert_eq!(output.status.code(), Some(1));

    let echo = crate::integration::test_utils::echo_program();
    env.write_settings(
        "lssh",
        &format!("ssh_program = {:?}\n", echo.to_str().unwrap()),
    );
    let output = env.run(LSSH, &["list"]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert!(stdout(&output).contains("NAME"));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let env = TestEnv::new();
    let output = env
        .command(LSSH)
        .env("LSSH_LOG", "debug")
        .arg("list")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(!stdout(&output).contains("DEBUG"));
    assert!(stderr(&output).contains("DEBUG"), "{}", stderr(&output));
}

#[test]
fn test_quiet_suppresses_logs() {
    let env = TestEnv::new();
    let output = env
        .command(LSSH)
        .env("LSSH_LOG", "debug")
        .args(["--quiet", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stderr(&output).is_empty(), "{}", stderr(&output));
}
