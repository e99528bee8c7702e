use std::path::PathBuf;
use std::process::Command;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_check_clean_menu_succeeds() {
    let bin = env!("CARGO_BIN_EXE_navwalker");

    let output = Command::new(bin)
        .arg("check")
        .arg(fixture("products.yaml"))
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("9 items, no issues"), "stdout:\n{}", stdout);
}

#[test]
fn test_check_reports_dangling_parent_and_cycle() {
    let bin = env!("CARGO_BIN_EXE_navwalker");

    let output = Command::new(bin)
        .arg("check")
        .arg(fixture("broken.toml"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 issue(s)"), "stdout:\n{}", stdout);
    assert!(stdout.contains("item 2 references missing parent 42"));
    assert!(stdout.contains("parent cycle: 3 -> 4"));
}

#[test]
fn test_check_json_output() {
    let bin = env!("CARGO_BIN_EXE_navwalker");

    let output = Command::new(bin)
        .arg("check")
        .arg("--json")
        .arg(fixture("broken.toml"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["items"], 4);
    let issues = report["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0]["kind"], "dangling_parent");
    assert_eq!(issues[1]["kind"], "cycle");
    assert_eq!(issues[1]["ids"], serde_json::json!([3, 4]));
}

#[test]
fn test_check_rejects_unknown_extension() {
    let bin = env!("CARGO_BIN_EXE_navwalker");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.xml");
    std::fs::write(&path, "<menu/>").unwrap();

    let output = Command::new(bin).arg("check").arg(&path).output().unwrap();

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported menu format"), "stderr:\n{}", stderr);
}
