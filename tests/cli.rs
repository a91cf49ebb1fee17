//! Binary-level tests for the labelgen CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn generates_labels_with_explicit_paths() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("mushrooms.txt");
    let output = dir.path().join("labels.ts");
    fs::write(&input, "almond_mushroom\nDEATH_cap\n").unwrap();

    let mut cmd = Command::cargo_bin("labelgen").unwrap();
    cmd.arg(&input).arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Successfully wrote 2 labels to"));

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "export const MUSHROOM_LABELS = [\n  'Almond Mushroom',\n  'Death Cap',\n];\n"
    );
}

#[test]
fn falls_back_to_the_fixed_app_paths() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src/utils")).unwrap();
    fs::write(dir.path().join("src/utils/mushrooms.txt"), "fly_agaric\n").unwrap();

    let mut cmd = Command::cargo_bin("labelgen").unwrap();
    cmd.current_dir(dir.path());

    cmd.assert().success().stdout(predicate::str::contains(
        "Successfully wrote 1 labels to src/utils/labels.ts",
    ));

    assert_eq!(
        fs::read_to_string(dir.path().join("src/utils/labels.ts")).unwrap(),
        "export const MUSHROOM_LABELS = [\n  'Fly Agaric',\n];\n"
    );
}

#[test]
fn reports_missing_input_and_exits_non_zero() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("labelgen").unwrap();
    cmd.current_dir(dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    assert!(!dir.path().join("src/utils/labels.ts").exists());
}
