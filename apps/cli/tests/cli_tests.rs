//! CLI 集成测试
//!
//! 覆盖退出码契约：正常完成退出 0，回放前置条件失败与文件缺失
//! 退出非零。长时运行的命令（record / 几何轨迹）不在这里启动。

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn arm_teach() -> Command {
    Command::cargo_bin("arm-teach").unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    arm_teach()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("record"))
        .stdout(predicate::str::contains("replay"))
        .stdout(predicate::str::contains("circle"));
}

#[test]
fn test_status_against_sim_backend() {
    arm_teach()
        .args(["status", "--bus", "sim0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0/6"));
}

#[test]
fn test_replay_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    arm_teach()
        .args(["replay", "--input"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("不存在"));
}

#[test]
fn test_replay_empty_trajectory_fails_before_any_motion() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");

    // 只有表头没有采样
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "# Timestamp, Joint 1, Joint 2, Joint 3, Joint 4, Joint 5, Joint 6").unwrap();
    drop(file);

    arm_teach()
        .args(["replay", "--input"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("没有有效采样"));
}

#[test]
fn test_replay_rejects_out_of_range_speed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("one.txt");

    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "# header").unwrap();
    writeln!(file, "0.000000,0.0000,0.0000,0.0000,0.0000,0.0000,0.0000").unwrap();
    drop(file);

    arm_teach()
        .args(["replay", "--speed", "9.0", "--input"])
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn test_replay_single_sample_completes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("one.txt");

    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "# header").unwrap();
    writeln!(file, "0.000000,1.0000,2.0000,3.0000,4.0000,5.0000,6.0000").unwrap();
    drop(file);

    arm_teach()
        .args(["replay", "--bus", "sim0", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("回放完成"));
}
