// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text of the lines dayrun writes around captured output.

/// Banner written once, as the first line of a new daily log.
pub fn header_line(date_key: &str) -> String {
    format!("===== Log for {} =====", date_key)
}

/// Marker written before the child starts, e.g. `[09:05] Starting main.py`.
pub fn start_marker(time: &str, script: &str) -> String {
    format!("[{}] Starting {}", time, script)
}

/// Marker written after the child is gone.
///
/// `detail` describes how it ended, such as `exit code 0`.
pub fn finish_marker(time: &str, script: &str, detail: &str) -> String {
    format!("[{}] Finished {} ({})", time, script, detail)
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
