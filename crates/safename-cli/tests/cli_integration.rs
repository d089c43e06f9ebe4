//! Integration tests for the safename binary
//!
//! These tests run the built binary against a temp directory and check the
//! exit status, printed output and resulting file names.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn safename(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_safename"))
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to run safename")
}

/// Empty settings file so the user's own config is never picked up
fn empty_config(dir: &Path) -> String {
    let path = dir.join("settings.json");
    fs::write(&path, "{}").expect("Failed to write config");
    path.to_string_lossy().to_string()
}

#[cfg(unix)]
#[test]
fn test_dry_run_prints_plan() {
    let temp_dir = TempDir::new().unwrap();
    let work = temp_dir.path().join("work");
    fs::create_dir(&work).unwrap();
    fs::write(work.join("what?.txt"), b"").unwrap();
    let config = empty_config(temp_dir.path());

    let output = safename(&["--config", &config, "-n", "what?.txt"], &work);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("what_U3F_.txt>>"), "{}", stdout);
    assert!(stdout.contains("1 files would be renamed"), "{}", stdout);
    assert!(work.join("what?.txt").exists());
}

#[test]
fn test_recursive_rename_and_count() {
    let temp_dir = TempDir::new().unwrap();
    let work = temp_dir.path().join("work");
    fs::create_dir_all(work.join("My Folder")).unwrap();
    fs::write(work.join("My Folder").join("a file.txt"), b"").unwrap();
    let config = empty_config(temp_dir.path());

    let output = safename(&["--config", &config, "-p", "-c", " :_", "-r", "."], &work);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("2 files renamed!"), "{}", stdout);
    assert!(work.join("My_Folder").join("a_file.txt").exists());
}

#[test]
fn test_missing_file_is_a_warning_not_a_failure() {
    let temp_dir = TempDir::new().unwrap();
    let config = empty_config(temp_dir.path());

    let output = safename(&["--config", &config, "nope.txt"], temp_dir.path());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stderr.contains("File <<nope.txt>> does not exist"), "{}", stderr);
    assert!(String::from_utf8_lossy(&output.stdout).contains("0 files renamed!"));
}

#[test]
fn test_json_report() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("x y"), b"").unwrap();
    let config = empty_config(temp_dir.path());

    let output = safename(&["--config", &config, "--json", "-n", "-p", "x y"], temp_dir.path());
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["renamed"], 1);
    assert_eq!(report["dry_run"], true);
    assert_eq!(report["decisions"][0]["outcome"], "renamed");
    assert!(report["decisions"][0]["new_path"]
        .as_str()
        .unwrap()
        .ends_with("x_U20_y"));
}

#[test]
fn test_bad_flag_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = safename(&["--truncate", "0", "x"], temp_dir.path());
    assert!(!output.status.success());
}

#[test]
fn test_default_logging_does_not_repeat_diagnostics() {
    let temp_dir = TempDir::new().unwrap();
    let config = empty_config(temp_dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_safename"))
        .args(["--config", &config, "nope.txt"])
        .current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run safename");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert_eq!(stderr.matches("nope.txt").count(), 1, "{}", stderr);
    assert!(!stderr.contains("WARN"), "{}", stderr);
}

#[test]
fn test_unreadable_config_names_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.json");

    let output = safename(
        &["--config", &missing.to_string_lossy(), "x"],
        temp_dir.path(),
    );
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("absent.json"), "{}", stderr);
}
