use std::path::Path;
use std::process::Output;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn snap_cli(config: &Path, args: &[&str]) -> Output {
    test_bin::get_test_bin("snap-cli")
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("failed to run snap-cli")
}

fn json_stdout(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "snap-cli failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not json")
}

fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("snap.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn classify_extends_left_third_over_the_bottom_middle() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "");

    let output = snap_cli(
        &config,
        &[
            "classify",
            "--pointer",
            "600,750",
            "--screen",
            "0,0,1200,800",
            "--dead-zone",
            "100,100,1000,600",
            "--prior",
            "LeftThird",
        ],
    );
    let value = json_stdout(&output);
    assert_eq!(value["direction"], json!("LeftTwoThirds"));
    assert_eq!(value["frame"]["size"]["width"], json!(800.0));

    let output = snap_cli(
        &config,
        &[
            "classify",
            "--pointer",
            "600,750",
            "--screen",
            "0,0,1200,800",
            "--dead-zone",
            "100,100,1000,600",
        ],
    );
    assert_eq!(json_stdout(&output)["direction"], json!("BottomHalf"));
}

#[test]
fn classify_uses_configured_margins_without_dead_zone() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        &dir,
        "[snapping.margins]\ntop = 100.0\nleft = 100.0\nbottom = 100.0\nright = 100.0\n",
    );

    let output = snap_cli(
        &config,
        &["classify", "--pointer", "50,400", "--screen", "0,0,1200,800"],
    );
    assert_eq!(json_stdout(&output)["direction"], json!("LeftHalf"));

    let output = snap_cli(
        &config,
        &["classify", "--pointer", "150,400", "--screen", "0,0,1200,800"],
    );
    let value = json_stdout(&output);
    assert_eq!(value["direction"], json!("NoAction"));
    assert_eq!(value["frame"], Value::Null);
}

#[test]
fn classify_resets_invalid_margins_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "[snapping.margins]\nleft = -5.0\n");

    let output = snap_cli(
        &config,
        &["classify", "--pointer", "10,400", "--screen", "0,0,1200,800"],
    );
    assert_eq!(json_stdout(&output)["direction"], json!("LeftHalf"));

    let output = snap_cli(
        &config,
        &["classify", "--pointer", "30,400", "--screen", "0,0,1200,800"],
    );
    assert_eq!(json_stdout(&output)["direction"], json!("NoAction"));
}

#[test]
fn classify_reports_no_action_when_snapping_is_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "[snapping]\nenabled = false\n");

    let output = snap_cli(
        &config,
        &["classify", "--pointer", "0,400", "--screen", "0,0,1200,800"],
    );
    assert_eq!(json_stdout(&output)["direction"], json!("NoAction"));
}

#[test]
fn resolve_prints_fraction_and_applied_frame() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "");

    let output = snap_cli(&config, &["resolve", "RightHalf", "--screen", "0,0,1200,800"]);
    let value = json_stdout(&output);
    assert_eq!(
        value["fraction"],
        json!({ "x": 0.5, "y": 0.0, "width": 0.5, "height": 1.0 })
    );
    assert_eq!(value["frame"]["origin"]["x"], json!(600.0));

    let output = snap_cli(&config, &["resolve", "Hide"]);
    let value = json_stdout(&output);
    assert_eq!(value["fraction"], Value::Null);
    assert_eq!(value["frame"], Value::Null);
}

#[test]
fn list_keeps_menu_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "");

    let output = snap_cli(&config, &["list", "--group", "horizontal_thirds"]);
    assert_eq!(
        json_stdout(&output),
        json!([{
            "group": "horizontal_thirds",
            "members": [
                "RightThird",
                "RightTwoThirds",
                "HorizontalCenterThird",
                "LeftTwoThirds",
                "LeftThird"
            ]
        }])
    );

    let output = snap_cli(&config, &["list"]);
    let groups = json_stdout(&output);
    assert_eq!(groups.as_array().map(Vec::len), Some(10));
    assert_eq!(groups[0]["group"], json!("general"));
}

#[test]
fn describe_reports_radial_menu_details() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "");

    let value = json_stdout(&snap_cli(&config, &["describe", "TopRightQuarter"]));
    assert_eq!(value["radial_menu_angle"], json!(45.0));
    assert_eq!(value["has_radial_menu_angle"], json!(true));
    assert_eq!(value["next_preview_direction"], json!("RightHalf"));
    assert_eq!(value["group"], json!("quarters"));

    let value = json_stdout(&snap_cli(&config, &["describe", "NextScreen"]));
    assert_eq!(value["categories"], json!("SCREEN_SWITCH"));
    assert_eq!(value["has_radial_menu_angle"], json!(false));
}

#[test]
fn bad_arguments_fail() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "");

    let output = snap_cli(&config, &["resolve", "left_half"]);
    assert!(!output.status.success());

    let output = snap_cli(
        &config,
        &["classify", "--pointer", "1,2,3", "--screen", "0,0,1200,800"],
    );
    assert!(!output.status.success());

    let missing = dir.path().join("missing.toml");
    let output = snap_cli(
        &missing,
        &["classify", "--pointer", "1,2", "--screen", "0,0,1200,800"],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load config"));
}
