use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_faceflow(dir: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_faceflow");
    Command::new(bin)
        .current_dir(dir)
        .env("RUST_LOG", "error")
        .args(args)
        .output()
        .expect("failed to run faceflow binary")
}

#[test]
fn id_prints_the_stored_identifier() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join("settings.json");
    let path = settings.to_str().unwrap();

    let first = run_faceflow(dir.path(), &["--path", path, "id"]);
    let second = run_faceflow(dir.path(), &["--path", path, "id"]);

    assert!(first.status.success());
    let first = String::from_utf8_lossy(&first.stdout).trim().to_string();
    assert_eq!(first.len(), 48);
    assert_eq!(String::from_utf8_lossy(&second.stdout).trim(), first);
}

#[test]
fn failure_is_reported_once() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join("settings.json");
    std::fs::write(&settings, "{ broken").unwrap();

    let output = run_faceflow(dir.path(), &["--path", settings.to_str().unwrap(), "id"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(stderr.matches("is corrupted").count(), 1, "stderr: {}", stderr);
}
