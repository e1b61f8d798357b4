//! Integration tests for the pillbox binary.
//!
//! These tests verify end-to-end behavior including:
//! - Manual and quick add
//! - Take / reset / delete cycles against the store file
//! - Reference lookups and notices
//! - Theme persistence

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// CLI bound to a data directory, with config lookups kept inside it
fn cli(data_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pillbox"));
    cmd.env("XDG_CONFIG_HOME", data_dir.join("config"))
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

/// Medication list as stored under the "meds" key
fn stored_meds(data_dir: &Path) -> Vec<Value> {
    let contents = fs::read_to_string(data_dir.join("store.json")).expect("Failed to read store");
    let store: Value = serde_json::from_str(&contents).expect("Store is not JSON");
    let meds = store["meds"].as_str().expect("meds key missing");
    serde_json::from_str::<Vec<Value>>(meds).expect("meds is not a JSON list")
}

fn id_of(med: &Value) -> String {
    med["id"].as_i64().expect("id is not an integer").to_string()
}

#[test]
fn test_cli_help() {
    Command::new(assert_cmd::cargo::cargo_bin!("pillbox"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Daily medication and supplement tracker",
        ));
}

#[test]
fn test_empty_list() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No medications yet"));

    // Listing alone never creates the store
    assert!(!temp_dir.path().join("store.json").exists());
}

#[test]
fn test_add_persists_record() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir)
        .args(["add", "Vitamin D", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vitamin D  0 / 2"));

    let meds = stored_meds(data_dir);
    assert_eq!(meds.len(), 1);
    assert_eq!(meds[0]["name"], "Vitamin D");
    assert_eq!(meds[0]["dailyCount"], 2);
    assert_eq!(meds[0]["currentCount"], 0);
}

#[test]
fn test_add_rejects_blank_name() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir).args(["add", "Iron", "1"]).assert().success();

    cli(data_dir)
        .args(["add", "   ", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please enter a valid pill name and daily dose",
        ));

    assert_eq!(stored_meds(data_dir).len(), 1);
}

#[test]
fn test_add_rejects_bad_dose() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    for dose in ["0", "two", ""] {
        cli(data_dir)
            .args(["add", "Zinc", dose])
            .assert()
            .failure()
            .stderr(predicate::str::contains("must be 1 or more"));
    }

    assert!(!data_dir.join("store.json").exists());
}

#[test]
fn test_take_until_complete() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir).args(["add", "Vitamin D", "2"]).assert().success();
    let id = id_of(&stored_meds(data_dir)[0]);

    cli(data_dir).args(["take", &id]).assert().success();
    cli(data_dir)
        .args(["take", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 / 2  ✓ done  (info, reset, delete)"));

    cli(data_dir)
        .args(["take", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to take"));

    assert_eq!(stored_meds(data_dir)[0]["currentCount"], 2);
}

#[test]
fn test_reset_and_delete() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir).args(["add", "Omega-3", "3"]).assert().success();
    cli(data_dir).args(["add", "Zinc", "1"]).assert().success();
    let meds = stored_meds(data_dir);
    let omega = id_of(&meds[0]);
    let zinc = id_of(&meds[1]);

    cli(data_dir).args(["take", &omega]).assert().success();
    cli(data_dir).args(["reset", &omega]).assert().success();
    assert_eq!(stored_meds(data_dir)[0]["currentCount"], 0);

    cli(data_dir).args(["delete", &omega]).assert().success();
    let meds = stored_meds(data_dir);
    assert_eq!(meds.len(), 1);
    assert_eq!(id_of(&meds[0]), zinc);
}

#[test]
fn test_unknown_id_is_noop() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir).args(["add", "Iron", "1"]).assert().success();
    let before = stored_meds(data_dir);

    for action in ["take", "reset", "delete", "info"] {
        cli(data_dir).args([action, "12345"]).assert().success();
    }

    assert_eq!(stored_meds(data_dir), before);
}

#[test]
fn test_quick_add_default_preset() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir)
        .args(["quick", "Omega-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Omega-3  0 / 1"));

    let meds = stored_meds(data_dir);
    assert_eq!(meds[0]["name"], "Omega-3");
    assert_eq!(meds[0]["dailyCount"], 1);
}

#[test]
fn test_quick_lists_presets() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .arg("quick")
        .assert()
        .success()
        .stdout(predicate::str::contains("Magnesium × 1"));
}

#[test]
fn test_quick_unknown_preset_fails() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["quick", "Zinc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown preset"));
}

#[test]
fn test_quick_uses_configured_presets() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    let config_dir = data_dir.join("config").join("pillbox");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[[quick_add.presets]]\nname = \"Iron\"\ndose = 2\n",
    )
    .unwrap();

    cli(data_dir).args(["quick", "Iron"]).assert().success();
    assert_eq!(stored_meds(data_dir)[0]["dailyCount"], 2);
}

#[test]
fn test_info_for_known_supplement() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir).args(["add", "Magnesium", "1"]).assert().success();
    let id = id_of(&stored_meds(data_dir)[0]);

    cli(data_dir)
        .args(["info", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("When:   Evening"));
}

#[test]
fn test_unknown_supplement_has_no_learn_more() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir)
        .args(["add", "Zinc", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(take, reset, delete)"));

    let id = id_of(&stored_meds(data_dir)[0]);
    cli(data_dir)
        .args(["info", &id])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Information not available for this supplement.",
        ));
}

#[test]
fn test_about_by_name() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["about", "Iron"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Before a meal (30-60 min before)"));
}

#[test]
fn test_html_list() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir).args(["add", "Vitamin C", "1"]).assert().success();
    let id = id_of(&stored_meds(data_dir)[0]);

    cli(data_dir)
        .args(["list", "--html"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            r#"<div class="pill-item" data-id="{}">"#,
            id
        )))
        .stdout(predicate::str::contains("LEARN MORE"));
}

#[test]
fn test_theme_toggle_persists() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));

    cli(data_dir)
        .args(["theme", "--toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));

    cli(data_dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));
}

#[test]
fn test_theme_and_meds_share_store() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir).args(["theme", "--toggle"]).assert().success();
    cli(data_dir).args(["add", "Iron", "1"]).assert().success();

    let contents = fs::read_to_string(data_dir.join("store.json")).unwrap();
    let store: Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(store["theme"], "dark");
    assert_eq!(stored_meds(data_dir).len(), 1);
}
