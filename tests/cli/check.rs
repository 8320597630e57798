//! Tests for the check command.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_check_fails_without_properties() {
    let t = Test::new();

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "missing storePassword, keyAlias, keyPassword");
    assert_stdout_contains(&output, "keyAlias not set");
}

#[test]
fn test_check_fails_without_keystore() {
    let t = Test::with_properties(FULL_PROPERTIES);

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "keystore not found");
    assert_stderr_contains(&output, "upload.jks");
}

#[test]
fn test_check_passes_with_keystore() {
    let t = Test::with_properties(FULL_PROPERTIES);
    t.write("android/app/upload.jks", "keystore bytes");

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "ready to sign");
}

#[test]
fn test_check_treats_empty_password_as_configured() {
    let t = Test::with_properties(
        "storeFile=upload.jks\nstorePassword=\nkeyAlias=upload\nkeyPassword=\n",
    );
    t.write("android/app/upload.jks", "keystore bytes");

    assert_success(&t.check());
}

#[test]
fn test_check_incomplete_hints_interactive_reinit() {
    let t = Test::with_properties("keyAlias=upload\n");

    t.cmd()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing storePassword, keyPassword"))
        .stderr(predicate::str::contains("keyprops init --force --interactive"));
}

#[test]
fn test_check_missing_keystore_has_no_init_hint() {
    let t = Test::with_properties(FULL_PROPERTIES);

    t.cmd()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("keystore not found"))
        .stderr(predicate::str::contains("keyprops init").not());
}
