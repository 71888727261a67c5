// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

use serde_json::Value;

fn steptrack() -> Command {
  let mut cmd = Command::new(cargo::cargo_bin!("steptrack"));
  cmd
    .env("CLICOLOR", "0")
    .env("NO_COLOR", "1")
    .env_remove("RUST_LOG")
    .env_remove("STEPTRACK_CONFIG")
    .env_remove("STEPTRACK_LOG_FILE");
  cmd
}

#[test]
fn test_day_report() {
  steptrack()
    .args(["day", "--weight", "70", "--height", "1.75", "5000,1h30m"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Количество шагов: 5000."))
    .stdout(predicate::str::contains("Дистанция составила 3.25 км."));
}

#[test]
fn test_day_zero_steps_is_logged_not_fatal() {
  steptrack()
    .args(["day", "--weight", "70", "--height", "1.75", "0,1h"])
    .assert()
    .success()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("steps must be positive"));
}

#[test]
fn test_day_negative_weight() {
  steptrack()
    .args(["day", "--weight", "-70", "--height", "1.75", "5000,1h"])
    .assert()
    .success()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("weight must be positive"));
}

#[test]
fn test_training_report() {
  steptrack()
    .args(["training", "--weight", "70", "--height", "1.75", "5000,бег,1h0m"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Тип тренировки: бег"))
    .stdout(predicate::str::contains("Дистанция: 3.94 км."));
}

#[test]
fn test_training_unrecognized_activity_fails() {
  steptrack()
    .args(["training", "--weight", "70", "--height", "1.75", "5000,плавание,1h"])
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("Unrecognized activity: плавание"));
}

/// Like [`steptrack`], but able to feed stdin.
fn steptrack_piped() -> assert_cmd::Command {
  let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("steptrack"));
  cmd
    .env("CLICOLOR", "0")
    .env("NO_COLOR", "1")
    .env_remove("RUST_LOG")
    .env_remove("STEPTRACK_CONFIG")
    .env_remove("STEPTRACK_LOG_FILE");
  cmd
}

#[test]
fn test_training_from_stdin() {
  steptrack_piped()
    .args(["training", "--weight", "70", "--height", "1.75"])
    .write_stdin("5000,бег,1h\n\n  \n6000,ходьба,1h\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("Тип тренировки: бег"))
    .stdout(predicate::str::contains("Тип тренировки: ходьба"));
}

#[test]
fn test_day_from_stdin() {
  steptrack_piped()
    .args(["day", "--weight", "70", "--height", "1.75"])
    .write_stdin("5000,1h30m\n\t\n0,1h\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("Количество шагов: 5000."))
    .stderr(predicate::str::contains("steps must be positive"))
    .stderr(predicate::str::contains("Invalid record format").not());
}

#[test]
fn test_training_json_output() {
  let output = steptrack()
    .args([
      "training",
      "--weight",
      "70",
      "--height",
      "1.75",
      "--format",
      "json",
      "5000,бег,1h",
    ])
    .output()
    .unwrap();

  assert!(output.status.success());
  let stdout = String::from_utf8(output.stdout).unwrap();
  let row: Value = serde_json::from_str(stdout.trim()).unwrap();
  assert_eq!(row["activity"], "бег");
  assert_eq!(row["kind"], "running");
  assert_eq!(row["duration_hours"], 1.0);
}

#[test]
fn test_missing_biometrics() {
  steptrack()
    .args(["training", "--height", "1.75", "5000,бег,1h"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("No weight given"));
}

#[test]
fn test_config_file_supplies_labels_and_biometrics() {
  let temp = tempdir().unwrap();
  let config_path = temp.path().join("steptrack.toml");
  fs::write(
    &config_path,
    r#"
weight_kg = 70.0
height_m = 1.75

[labels]
running = ["run"]
"#,
  )
  .unwrap();

  steptrack()
    .arg("--config")
    .arg(&config_path)
    .args(["training", "5000,Run,1h"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Тип тренировки: Run"));

  steptrack()
    .arg("--config")
    .arg(&config_path)
    .arg("config")
    .assert()
    .success()
    .stdout(predicate::str::contains("weight_kg = 70.0"))
    .stdout(predicate::str::contains("\"run\""));
}

#[test]
fn test_log_file() {
  let temp = tempdir().unwrap();

  steptrack()
    .current_dir(temp.path())
    .env("STEPTRACK_LOG_FILE", "steptrack.log")
    .args(["day", "--weight", "70", "--height", "1.75", "0,1h"])
    .assert()
    .success()
    .stderr(predicate::str::is_empty());

  let log = fs::read_to_string(temp.path().join("steptrack.log")).unwrap();
  assert!(log.contains("steps must be positive"));
}
