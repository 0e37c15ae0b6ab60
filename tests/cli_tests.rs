//! End-to-end tests of the `weather-presets` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn install(server: &Path, key: &str, metadata: Option<&str>) {
    let dir = server.join("content").join("weather").join(key);
    fs::create_dir_all(&dir).expect("Failed to create preset directory");
    if let Some(text) = metadata {
        fs::write(dir.join("weather.ini"), text).expect("Failed to write weather.ini");
    }
}

fn cmd(server: &Path) -> Command {
    let mut cmd = Command::cargo_bin("weather-presets").expect("binary should build");
    cmd.env_remove("WEATHER_PRESETS_SERVER_PATH")
        .arg("--server-path")
        .arg(server);
    cmd
}

#[test]
fn test_list_text() {
    let temp = TempDir::new().unwrap();
    install(
        temp.path(),
        "custom_storm",
        Some("[LAUNCHER]\nNAME=Custom Storm\n"),
    );

    cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weather Presets (8 presets)"))
        .stdout(predicate::str::contains("custom_storm"))
        .stdout(predicate::str::contains("Custom Storm"))
        .stdout(predicate::str::contains("Heavy Fog"));
}

#[test]
fn test_list_json() {
    let temp = TempDir::new().unwrap();
    install(temp.path(), "3_clear", Some("[LAUNCHER]\nNAME=Blue Sky\n"));

    let output = cmd(temp.path())
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let map = json.as_object().unwrap();
    assert_eq!(map.len(), 7);
    assert_eq!(map["3_clear"], "Blue Sky");
    assert_eq!(map["2_light_fog"], "Light Fog");
}

#[test]
fn test_list_tsv_with_presets_dir_override() {
    let temp = TempDir::new().unwrap();
    let presets = temp.path().join("elsewhere");
    fs::create_dir_all(presets.join("dusk")).unwrap();

    cmd(temp.path())
        .arg("--presets-dir")
        .arg(&presets)
        .args(["list", "-f", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("key\tdisplay_name\n"))
        .stdout(predicate::str::contains("dusk\tdusk\n"));
}

#[test]
fn test_list_malformed_metadata_fails() {
    let temp = TempDir::new().unwrap();
    install(temp.path(), "broken", Some("[LAUNCHER\nNAME=Broken\n"));

    cmd(temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed preset metadata"));
}

#[test]
fn test_show_resolved_and_unresolved() {
    let temp = TempDir::new().unwrap();
    install(temp.path(), "myweather", Some("[LAUNCHER]\nNAME=My Weather\n"));
    install(temp.path(), "plain", None);

    cmd(temp.path())
        .args(["show", "myweather"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name:    My Weather"));

    cmd(temp.path())
        .args(["show", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name:    plain"))
        .stdout(predicate::str::contains("using the preset key"));
}

#[test]
fn test_show_rejects_traversal() {
    let temp = TempDir::new().unwrap();

    cmd(temp.path())
        .args(["show", "../secrets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid preset key"));
}

#[test]
fn test_delete_installed() {
    let temp = TempDir::new().unwrap();
    install(temp.path(), "myweather", Some("[LAUNCHER]\nNAME=My Weather\n"));

    cmd(temp.path())
        .args(["delete", "myweather"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Weather preset successfully deleted!",
        ));

    assert!(!temp
        .path()
        .join("content")
        .join("weather")
        .join("myweather")
        .exists());

    cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("myweather").not());
}

#[test]
fn test_delete_unknown_json() {
    let temp = TempDir::new().unwrap();
    install(temp.path(), "keep", None);

    let output = cmd(temp.path())
        .args(["delete", "nonexistent_key", "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["key"], "nonexistent_key");
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        "Sorry, weather preset could not be deleted. Are you sure it was installed?"
    );
    assert!(temp
        .path()
        .join("content")
        .join("weather")
        .join("keep")
        .is_dir());
}

#[test]
fn test_server_path_from_env() {
    let temp = TempDir::new().unwrap();
    install(temp.path(), "from_env", Some("[LAUNCHER]\nNAME=From Env\n"));

    Command::cargo_bin("weather-presets")
        .unwrap()
        .env("WEATHER_PRESETS_SERVER_PATH", temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("From Env"));
}
