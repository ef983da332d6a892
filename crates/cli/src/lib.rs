// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduled task runner with daily logging.
//!
//! Runs one script under an interpreter (optionally inside a Python virtual
//! environment) and appends a dated banner, start/finish markers and the
//! script's combined output to a per-day log file.

pub mod cli;
pub mod config;
pub mod context;
pub mod env;
pub mod exit;
pub mod invoker;
pub mod logging;
pub mod runner;
pub mod time;
pub mod timestamp;
pub mod venv;

/// Re-exported daily log types from dayrun-sink crate.
pub mod sink {
    pub use dayrun_sink::{DailyLog, RunBlock, SinkError};
}
