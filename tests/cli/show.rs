//! Tests for the show command.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_show_without_properties_uses_defaults() {
    let t = Test::new();

    let output = t.show();
    assert_success(&output);
    assert_stdout_contains(&output, "deepocean.keystore (default)");
    assert_stdout_contains(&output, "(not found)");
    assert_stdout_contains(&output, "(unset)");
    assert_stdout_contains(&output, "credentials missing");
}

#[test]
fn test_show_masks_passwords() {
    let t = Test::with_properties(FULL_PROPERTIES);

    let output = t.show();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("upload.jks"));
    assert!(out.contains("********"));
    assert!(!out.contains("store-secret"));
    assert!(!out.contains("key-secret"));
}

#[test]
fn test_show_json_reveal() {
    let t = Test::with_properties(FULL_PROPERTIES);

    let json = t.show_json(true);
    assert_eq!(json["storeFile"], "upload.jks");
    assert_eq!(json["storePassword"], "store-secret");
    assert_eq!(json["keyAlias"], "upload");
    assert_eq!(json["keyPassword"], "key-secret");
}

#[test]
fn test_show_json_masks_by_default() {
    let t = Test::with_properties(FULL_PROPERTIES);

    let json = t.show_json(false);
    assert_eq!(json["storePassword"], "********");
    assert_eq!(json["keyAlias"], "upload");
}

#[test]
fn test_show_json_empty_config() {
    let t = Test::new();

    let json = t.show_json(true);
    assert_eq!(json["storeFile"], "deepocean.keystore");
    assert!(json["storePassword"].is_null());
    assert!(json["keyAlias"].is_null());
    assert!(json["keyPassword"].is_null());
}

#[test]
fn test_show_skips_comments() {
    let t = Test::with_properties(COMMENTED_PROPERTIES);

    let json = t.show_json(true);
    assert_eq!(json["storeFile"], "release.keystore");
    assert_eq!(json["keyAlias"], "release");
    assert!(json["storePassword"].is_null());
}

#[test]
fn test_show_reads_settings_file() {
    let t = Test::new();
    t.write(
        "keyprops.toml",
        "[signing]\nproperties = \"signing/release.properties\"\ndefault_store_file = \"fallback.jks\"\n",
    );
    t.write("signing/release.properties", "keyAlias=from-settings\n");

    let json = t.show_json(true);
    assert_eq!(json["storeFile"], "fallback.jks");
    assert_eq!(json["keyAlias"], "from-settings");
}

#[test]
fn test_show_env_overrides_settings() {
    let t = Test::new();
    t.write("keyprops.toml", "[signing]\ndefault_store_file = \"fallback.jks\"\n");
    t.write("custom.properties", "keyAlias=custom\n");

    let output = t
        .cmd()
        .env("KEYPROPS_PROPERTIES", "custom.properties")
        .env("KEYPROPS_DEFAULT_STORE_FILE", "env.jks")
        .args(["show", "--json", "--reveal"])
        .output()
        .unwrap();
    assert_success(&output);

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["storeFile"], "env.jks");
    assert_eq!(json["keyAlias"], "custom");
}

#[test]
fn test_show_marks_blank_store_file_as_default() {
    let t = Test::with_properties("storeFile=\nkeyAlias=upload\n");

    t.cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("deepocean.keystore (default)"));
}

#[test]
fn test_show_configured_store_file_has_no_default_note() {
    let t = Test::with_properties(FULL_PROPERTIES);

    t.cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("upload.jks"))
        .stdout(predicate::str::contains("(default)").not());
}
