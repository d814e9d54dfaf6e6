use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp home
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".hr-diagram").join("config.json")
}

fn builtin_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("stars.json")
}

const BINARY_NAME: &str = "hr-diagram";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Usage"))
        .stdout(contains("set-catalog"));
}

#[test]
/// List should print every built-in star.
fn list_prints_builtin_catalog() {
    let tmp = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("list")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("sol"))
        .stdout(contains("Betelgeuse"))
        .stdout(contains("4.83"));
}

#[test]
/// Show should print the formatted detail sheet.
fn show_prints_detail_sheet() {
    let tmp = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["show", "sol"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Sol"))
        .stdout(contains("Distancia: 8.3 minutos luz"))
        .stdout(contains("Edad: 4.6 mil millones de años"))
        .stdout(contains("Constelación").not());
}

#[test]
/// Show should fail for an id that is not in the catalog.
fn show_unknown_star_fails() {
    let tmp = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["show", "no-such-star"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Unknown star id."));
}

#[test]
/// An unreadable catalog is reported as an error.
fn invalid_catalog_is_rejected() {
    let tmp = temp_home();
    let bad = tmp.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("list")
        .arg("--catalog")
        .arg(&bad)
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Failed to load catalog."));
}

#[test]
/// set-catalog should store the catalog path in the config file.
fn set_catalog_writes_config_file() {
    let tmp = temp_home();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-catalog")
        .arg(builtin_catalog_path())
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Catalog saved."));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("stars.json"));
}

#[test]
/// Reset should delete an existing config file.
fn reset_deletes_config_file() {
    let tmp = temp_home();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Clearing configuration file"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}
