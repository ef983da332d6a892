// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rstest::rstest;

#[test]
fn test_header_line() {
    assert_eq!(header_line("2024-03-07"), "===== Log for 2024-03-07 =====");
}

#[rstest]
#[case("09:05", "main.py", "[09:05] Starting main.py")]
#[case("23:59:01", "gfiledownload.py", "[23:59:01] Starting gfiledownload.py")]
fn test_start_marker(#[case] time: &str, #[case] script: &str, #[case] expected: &str) {
    assert_eq!(start_marker(time, script), expected);
}

#[test]
fn test_finish_marker() {
    assert_eq!(
        finish_marker("09:06", "main.py", "exit code 1"),
        "[09:06] Finished main.py (exit code 1)"
    );
}
