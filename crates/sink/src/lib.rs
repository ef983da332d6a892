// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only daily log files.
//!
//! One text file per calendar date, created lazily with a header banner and
//! appended to by every run of that day. Nothing is ever truncated.

mod block;
mod entry;
mod log;

pub use block::RunBlock;
pub use entry::{finish_marker, header_line, start_marker};
pub use log::{ensure_directory, DailyLog, SinkError};

/// Extension used for daily log files.
pub const LOG_EXTENSION: &str = "txt";
