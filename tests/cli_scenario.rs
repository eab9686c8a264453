//! Integration tests: run the binary against scenario files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const FRAME: &str = r#"
mouse = { x = 75, y = 20 }
font_advance = 6

[container]
bounds = { x = 0, y = 0, width = 500, height = 140 }

[catalog]
base_index = 200
names = ["Heron", "Rocky", "Beaver"]

[[lines]]
text = "Player: !pets"
bounds = { x = 0, y = 0, width = 500, height = 14 }

[[lines]]
text = "Pets: (3) <img=200><img=201><img=202>"
bounds = { x = 0, y = 14, width = 500, height = 14 }
"#;

/// Scratch directory removed on drop.
struct Scratch(PathBuf);

impl Scratch {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("pethover_cli_{name}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create scratch dir");
        Scratch(dir)
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.0.join(name);
        fs::write(&path, contents).expect("write scratch file");
        path
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn run(scratch: &Scratch, scenario: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pethover"))
        .arg(scenario)
        .arg("--config")
        .arg(scratch.path().join("absent.toml"))
        .arg("--log-file")
        .arg(scratch.path().join("pethover.log"))
        .args(extra)
        .env_remove("PETHOVER_CONFIG")
        .env_remove("PETHOVER_PETS_TOOLTIP")
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn prints_tooltip_for_hovered_pet() {
    let scratch = Scratch::new("hovered");
    let scenario = scratch.write("frame.toml", FRAME);

    let output = run(&scratch, &scenario, &[]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Pet: Rocky");
}

#[test]
fn json_report_contains_hover_details() {
    let scratch = Scratch::new("json");
    let scenario = scratch.write("frame.toml", FRAME);

    let output = run(&scratch, &scenario, &["--json"]);
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["hover"]["name"], "Rocky");
    assert_eq!(report["hover"]["position"], 1);
    assert_eq!(report["mouse"]["y"], 20);
}

#[test]
fn disabled_tooltip_reports_nothing() {
    let scratch = Scratch::new("disabled");
    let scenario = scratch.write("frame.toml", FRAME);

    let output = run(&scratch, &scenario, &["--no-pets-tooltip", "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert!(report["hover"].is_null());
}

#[test]
fn config_file_icon_width_changes_hit() {
    let scratch = Scratch::new("config");
    let scenario = scratch.write("frame.toml", FRAME);
    // 30px icons: (75 - 48) / 30 = 0 -> first pet
    let config = scratch.write("config.toml", "icon_width = 30\n");

    let output = Command::new(env!("CARGO_BIN_EXE_pethover"))
        .arg(&scenario)
        .arg("--config")
        .arg(&config)
        .arg("--log-file")
        .arg(scratch.path().join("pethover.log"))
        .env_remove("PETHOVER_PETS_TOOLTIP")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Pet: Heron");
}

#[test]
fn missing_scenario_fails() {
    let scratch = Scratch::new("missing");
    let output = run(&scratch, &scratch.path().join("nope.toml"), &[]);

    assert!(!output.status.success());
}

#[test]
fn log_file_is_written() {
    let scratch = Scratch::new("logs");
    let scenario = scratch.write("frame.toml", FRAME);

    let output = run(&scratch, &scenario, &[]);
    assert!(output.status.success());

    assert!(scratch.path().join("pethover.log").exists());
}
