//! Tests for error reporting and CLI flags.

use crate::support::*;

#[test]
fn test_malformed_properties_name_the_line() {
    let t = Test::with_properties(MALFORMED_PROPERTIES);

    let output = t.show();
    assert_failure(&output);
    assert_stderr_contains(&output, "key.properties:2");
    assert_stderr_contains(&output, "badline");
}

#[test]
fn test_malformed_settings_hint() {
    let t = Test::new();
    t.write("keyprops.toml", "this is not valid toml { [ }");

    let output = t.show();
    assert_failure(&output);
    assert_stderr_contains(&output, "keyprops.toml");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::with_properties(FULL_PROPERTIES);

    let output = t
        .cmd()
        .args(["--verbose", "show", "--json"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "signing profile resolved");
    assert!(serde_json::from_slice::<serde_json::Value>(&output.stdout).is_ok());
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "keyprops");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "keyprops");
}
