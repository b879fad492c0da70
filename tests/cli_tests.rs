use assert_cmd::Command;
use indoc::indoc;
use std::fs;
use tempfile::TempDir;

const ORDER_SNAPSHOT: &str = indoc! {r#"
    {
      "elements": [
        { "id": "start", "type": "start_event", "x": 0, "y": 0 },
        { "id": "decide", "type": "exclusive_gateway", "x": 100, "y": 0 },
        { "id": "process", "type": "task", "label": "Process Order" },
        { "id": "cancel", "type": "task", "label": "Cancel Order" },
        { "id": "end", "type": "end_event" }
      ],
      "connections": [
        { "id": "f1", "source": "start", "target": "decide" },
        { "id": "f2", "source": "decide", "target": "process" },
        { "id": "f3", "source": "decide", "target": "cancel" },
        { "id": "f4", "source": "process", "target": "end" },
        { "id": "f5", "source": "cancel", "target": "end" }
      ],
      "viewport": { "x": 0, "y": 0, "zoom": 1 }
    }
"#};

fn snapshot_dir() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("order.json");
    fs::write(&path, ORDER_SNAPSHOT).unwrap();
    (dir, path)
}

fn flowscore(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_flowscore"));
    cmd.current_dir(dir.path()).env_remove("FLOWSCORE_CONFIG");
    cmd
}

#[test]
fn test_analyze_json_output() {
    let (dir, path) = snapshot_dir();
    let output = flowscore(&dir)
        .args(["analyze", path.to_str().unwrap(), "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_score"], 83);
    assert_eq!(report["grade"], "B");
    assert_eq!(report["weighted_cfc"], 2);
}

#[test]
fn test_analyze_writes_output_file() {
    let (dir, path) = snapshot_dir();
    let out = dir.path().join("report.json");
    flowscore(&dir)
        .args(["analyze", path.to_str().unwrap(), "-f", "json", "-o"])
        .arg(&out)
        .assert()
        .success();
    let text = fs::read_to_string(out).unwrap();
    assert!(text.contains("\"total_score\": 83"));
}

#[test]
fn test_suggest_lists_structural_advice() {
    let (dir, path) = snapshot_dir();
    let output = flowscore(&dir)
        .args(["suggest", path.to_str().unwrap(), "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let suggestions: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let titles: Vec<&str> = suggestions
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["title"].as_str())
        .collect();
    assert_eq!(titles.first(), Some(&"Close open branches"));
    assert!(titles.contains(&"Assign lanes"));
}

#[test]
fn test_levels_json() {
    let (dir, path) = snapshot_dir();
    let output = flowscore(&dir)
        .args(["levels", path.to_str().unwrap(), "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let levels: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(levels["start"], 0);
    assert_eq!(levels["decide"], 1);
    assert_eq!(levels["end"], 3);
}

#[test]
fn test_missing_snapshot_fails() {
    let dir = TempDir::new().unwrap();
    flowscore(&dir)
        .args(["analyze", "does-not-exist.json"])
        .assert()
        .failure();
}

#[test]
fn test_init_creates_config_once() {
    let dir = TempDir::new().unwrap();
    flowscore(&dir).arg("init").assert().success();
    assert!(dir.path().join(".flowscore.toml").exists());
    flowscore(&dir).arg("init").assert().failure();
    flowscore(&dir).args(["init", "--force"]).assert().success();
}
