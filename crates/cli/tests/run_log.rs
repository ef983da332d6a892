// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![cfg(unix)]

//! Daily log layout produced by the binary.

mod common;

use common::{Workspace, NOW};

#[test]
fn test_fixed_clock_names_file_and_marker() {
    let ws = Workspace::with_main("echo processing\n");

    let output = ws.command(NOW).output().unwrap();
    assert!(output.status.success(), "{:?}", output);

    assert!(ws.path().join("logs").join("2024-03-07.txt").is_file());
    assert_eq!(
        ws.log("2024-03-07.txt"),
        "===== Log for 2024-03-07 =====\n\
         [09:05] Starting main.py\n\
         processing\n\
         [09:05] Finished main.py (exit code 0)\n"
    );
}

#[test]
fn test_two_runs_one_header_two_marker_pairs() {
    let ws = Workspace::with_main("echo run\n");

    ws.command("2024-03-07 09:05:00").output().unwrap();
    ws.command("2024-03-07 17:30:00").output().unwrap();

    let log = ws.log("2024-03-07.txt");
    assert_eq!(log.matches("===== Log for 2024-03-07 =====").count(), 1);
    assert_eq!(log.matches("Starting main.py").count(), 2);
    assert_eq!(log.matches("Finished main.py").count(), 2);

    let starts: Vec<&str> = log.lines().filter(|l| l.contains("Starting")).collect();
    assert_eq!(starts, vec!["[09:05] Starting main.py", "[17:30] Starting main.py"]);
}

#[test]
fn test_missing_log_directory_created_idempotently() {
    let ws = Workspace::with_main("true\n");
    assert!(!ws.path().join("logs").exists());

    let first = ws.command(NOW).output().unwrap();
    let second = ws.command(NOW).output().unwrap();

    assert!(first.status.success());
    assert!(second.status.success());
    assert!(ws.path().join("logs").is_dir());
    assert_eq!(ws.log("2024-03-07.txt").matches("===== Log for").count(), 1);
}

#[test]
fn test_download_profile_layout() {
    let ws = Workspace::with_main("");
    ws.write("gfiledownload.py", "echo moved 3 files\n");

    let output = ws
        .command("2024-03-07 09:05:04")
        .arg("gfiledownload")
        .output()
        .unwrap();
    assert!(output.status.success());

    let log = ws.log("20240307.txt");
    assert!(log.starts_with("===== Log for 20240307 =====\n"));
    assert!(log.contains("[09:05:04] Starting gfiledownload.py\n"));
    assert!(log.contains("moved 3 files\n"));
}

#[test]
fn test_log_dir_and_script_flags() {
    let ws = Workspace::with_main("");
    ws.write("job.sh", "echo custom\n");

    let output = ws
        .command(NOW)
        .args(["--log-dir", "out", "--script", "job.sh"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let log = std::fs::read_to_string(ws.path().join("out").join("2024-03-07.txt")).unwrap();
    assert!(log.contains("[09:05] Starting job.sh\n"));
    assert!(log.contains("custom\n"));
}

#[test]
fn test_stderr_and_stdout_both_captured() {
    let ws = Workspace::with_main("echo to-out\necho to-err >&2\n");

    ws.command(NOW).output().unwrap();

    let log = ws.log("2024-03-07.txt");
    assert!(log.contains("to-out\nto-err\n"), "{}", log);
}

#[test]
fn test_streamed_mode_captures_output() {
    let ws = Workspace::with_main("echo streamed\n");

    let output = ws.command(NOW).arg("--stream").output().unwrap();
    assert!(output.status.success());

    assert_eq!(
        ws.log("2024-03-07.txt"),
        "===== Log for 2024-03-07 =====\n\
         [09:05] Starting main.py\n\
         streamed\n\
         [09:05] Finished main.py (exit code 0)\n"
    );
}

#[test]
fn test_script_args_after_separator() {
    let ws = Workspace::with_main("echo \"got $1\"\n");

    ws.command(NOW).args(["main", "--", "--once"]).output().unwrap();

    assert!(ws.log("2024-03-07.txt").contains("got --once\n"));
}

#[test]
fn test_venv_bin_dir_on_child_path() {
    let ws = Workspace::with_main("echo \"venv=$VIRTUAL_ENV\"\n");
    std::fs::create_dir_all(ws.path().join("venv").join("bin")).unwrap();

    ws.command(NOW).output().unwrap();

    let log = ws.log("2024-03-07.txt");
    let expected = format!("venv={}\n", ws.path().join("venv").display());
    assert!(log.contains(&expected), "{}", log);
}
