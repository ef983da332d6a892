// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-invocation values fixed at startup.

use crate::config::RunnerConfig;
use crate::timestamp::Stamp;
use dayrun_sink::DailyLog;
use std::path::{Path, PathBuf};

/// Paths and timestamps of one run. Built once, never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunContext {
    working_directory: PathBuf,
    log_directory: PathBuf,
    date_string: String,
    time_string: String,
    log_file_path: PathBuf,
}

impl RunContext {
    pub fn new(config: &RunnerConfig, stamp: Stamp) -> Self {
        let log_directory = config.resolved_log_directory();
        let log_file_path = DailyLog::for_date(&log_directory, &stamp.date)
            .path()
            .to_path_buf();
        Self {
            working_directory: config.working_directory.clone(),
            log_directory,
            date_string: stamp.date,
            time_string: stamp.time,
            log_file_path,
        }
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn log_directory(&self) -> &Path {
        &self.log_directory
    }

    pub fn date_string(&self) -> &str {
        &self.date_string
    }

    /// Time of the start marker
    pub fn time_string(&self) -> &str {
        &self.time_string
    }

    pub fn log_file_path(&self) -> &Path {
        &self.log_file_path
    }

    pub fn daily_log(&self) -> DailyLog {
        DailyLog::at(&self.log_file_path)
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
