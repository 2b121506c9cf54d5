use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn tmp(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name)
}

#[test]
fn missing_arguments_print_usage_and_fail() {
    Command::cargo_bin("chatcast")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn nonexistent_training_file_exits_nonzero() {
    let exp_dir = tmp("cli_exp_bad_path");
    let _ = fs::remove_dir_all(&exp_dir);
    Command::cargo_bin("chatcast")
        .unwrap()
        .args([
            exp_dir.to_str().unwrap(),
            tmp("cli_no_such_train.csv").to_str().unwrap(),
            tmp("cli_no_such_test.csv").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("io error"));
}

/// Full run against the real Prophet backend. Slow: exercises the WASM Stan
/// optimizer on a week of 15-minute data, so it is opt-in.
#[test]
#[ignore = "slow: fits the real Prophet model via the WASM Stan optimizer"]
fn end_to_end_run_with_prophet_backend() {
    let mut train = String::from("interval_et,chats\n");
    for day in ["2024-01-08", "2024-01-09", "2024-01-10", "2024-01-11", "2024-01-12"] {
        for hour in 0..24 {
            for minute in [0, 15, 30, 45] {
                train.push_str(&format!(
                    "{day} {hour:02}:{minute:02}:00,{}\n",
                    1 + (hour % 12) * 2
                ));
            }
        }
    }
    let train_path = tmp("cli_e2e_train.csv");
    fs::write(&train_path, train).unwrap();

    let mut test = String::from("interval_et,chats\n");
    for hour in 0..24 {
        for minute in [0, 15, 30, 45] {
            test.push_str(&format!(
                "2024-01-15 {hour:02}:{minute:02}:00,{}\n",
                1 + (hour % 12) * 2
            ));
        }
    }
    let test_path = tmp("cli_e2e_test.csv");
    fs::write(&test_path, test).unwrap();

    let exp_dir = tmp("cli_e2e_exp");
    let _ = fs::remove_dir_all(&exp_dir);

    Command::cargo_bin("chatcast")
        .unwrap()
        .args([
            exp_dir.to_str().unwrap(),
            train_path.to_str().unwrap(),
            test_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    for artifact in ["args.json", "eval_metrics.json", "test_preds_actuals.csv", "model.json"] {
        assert!(exp_dir.join(artifact).is_file(), "missing {artifact}");
    }
}
