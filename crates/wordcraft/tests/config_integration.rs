//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("WORDCRAFT_GENRE")
        .env_remove("WORDCRAFT_MIN_SCORE")
        .env_remove("WORDCRAFT_LOG_LEVEL");
    cmd
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert_eq!(json["config"]["genre"], "fiction");
    assert_eq!(json["config"]["tone"], "narrative");
    assert_eq!(json["config"]["suggestion_limit"], 10);
    assert_eq!(json["config"]["word_goal"], 2000);
    assert_eq!(json["config"]["max_input_bytes"], 5 * 1024 * 1024);
    assert!(
        json["config"]["config_file"].is_null(),
        "no config file should be reported"
    );
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordcraft.toml"), r#"genre = "romance""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["genre"], "romance");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".wordcraft.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let chapters = tmp.path().join("chapters").join("part-one");
    fs::create_dir_all(&chapters).unwrap();
    fs::write(tmp.path().join("wordcraft.toml"), r#"genre = "fantasy""#).unwrap();

    let json = info_json(&chapters);
    assert_eq!(json["config"]["genre"], "fantasy");
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordcraft.toml"), r#"genre = "romance""#).unwrap();
    fs::write(tmp.path().join("wordcraft.toml"), r#"genre = "mystery""#).unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["genre"], "mystery");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with("wordcraft.toml") && !reported.ends_with(".wordcraft.toml"));
}

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".wordcraft.yaml"),
        "genre: sci-fi\ntone: bleak\naudience: academic\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["genre"], "sci-fi");
    assert_eq!(json["config"]["tone"], "bleak");
    assert_eq!(json["config"]["audience"], "academic");
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".wordcraft.json"),
        r#"{"suggestion_limit": 4, "word_goal": 80000, "min_score": 55}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["suggestion_limit"], 4);
    assert_eq!(json["config"]["word_goal"], 80000);
    assert_eq!(json["config"]["min_score"], 55);
}

// =============================================================================
// Config Precedence
// =============================================================================

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("novel");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join(".wordcraft.toml"), r#"genre = "romance""#).unwrap();
    fs::write(sub_dir.join(".wordcraft.toml"), r#"genre = "mystery""#).unwrap();

    let json = info_json(&sub_dir);
    assert_eq!(json["config"]["genre"], "mystery", "closer config should win");
}

#[test]
fn later_extension_overrides_earlier_in_same_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordcraft.toml"), r#"genre = "romance""#).unwrap();
    fs::write(tmp.path().join(".wordcraft.yaml"), "genre: mystery\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["genre"], "mystery");
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordcraft.toml"), r#"genre = "romance""#).unwrap();
    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, r#"genre = "mystery""#).unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["genre"], "mystery");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with("override.toml"),
        "--config path should be reported: {reported}"
    );
}

#[test]
fn env_var_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordcraft.toml"), r#"genre = "romance""#).unwrap();

    let output = cmd()
        .env("WORDCRAFT_GENRE", "mystery")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["genre"], "mystery");
}

#[test]
fn configured_genre_drives_analysis() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordcraft.toml"), r#"genre = "mystery""#).unwrap();
    fs::write(
        tmp.path().join("draft.txt"),
        "At dawn the truth came to light in the harbor.",
    )
    .unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "analyze", "draft.txt", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["profile"]["genre"], "mystery");
    assert_eq!(json["suggestions"][0]["id"], "cliche-truth came to light");
}

#[test]
fn configured_min_score_gates_readability() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordcraft.toml"), "min_score = 90\n").unwrap();
    let body = format!("{}.", ["planet"; 30].join(" "));
    fs::write(tmp.path().join("draft.txt"), body).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "readability", "draft.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min: 90"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordcraft.toml"), "this is not valid toml [[[").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn invalid_json_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordcraft.json"), "{not valid json}").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn invalid_min_score_type_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordcraft.toml"), "min_score = \"high\"\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".wordcraft.toml"),
        "genre = \"romance\"\nunknown_field = \"should be ignored\"\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["genre"], "romance");
}

// =============================================================================
// Boundary Marker Tests
// =============================================================================

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let src = repo.join("drafts");
    fs::create_dir_all(&src).unwrap();
    fs::write(parent.join(".wordcraft.toml"), r#"genre = "romance""#).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();

    let json = info_json(&src);
    assert_eq!(
        json["config"]["genre"], "fiction",
        "should use default because the boundary stops search"
    );
    assert!(json["config"]["config_file"].is_null());
}

#[test]
fn config_in_same_dir_as_git_is_found() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("drafts");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(repo.join(".wordcraft.toml"), r#"genre = "mystery""#).unwrap();

    let json = info_json(&src);
    assert_eq!(json["config"]["genre"], "mystery");
    assert!(json["config"]["config_file"].as_str().is_some());
}

// =============================================================================
// Logging
// =============================================================================

#[test]
fn log_dir_receives_json_lines() {
    let tmp = TempDir::new().unwrap();
    let logs = tmp.path().join("logs");
    fs::write(tmp.path().join("draft.txt"), "She ran.").unwrap();

    cmd()
        .env("WORDCRAFT_LOG_DIR", &logs)
        .env("RUST_LOG", "debug")
        .args(["-C", tmp.path().to_str().unwrap(), "analyze", "draft.txt", "--json"])
        .assert()
        .success();

    let entries: Vec<_> = fs::read_dir(&logs).unwrap().collect();
    assert!(!entries.is_empty(), "expected a log file in {}", logs.display());
}
