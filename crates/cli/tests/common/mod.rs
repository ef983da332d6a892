// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for dayrun integration tests.
//!
//! Jobs are shell scripts run with `sh`, so these tests are unix-only.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Fixed instant used by most tests
pub const NOW: &str = "2024-03-07 09:05:00";

/// Get path to dayrun binary
pub fn dayrun_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_dayrun"))
}

/// A working directory holding one job script
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    /// Create a workspace whose `main.py` is `body`, run by `sh`
    pub fn with_main(body: &str) -> Self {
        let ws = Self {
            dir: TempDir::new().unwrap(),
        };
        ws.write("main.py", body);
        ws
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, body: &str) {
        fs::write(self.path().join(name), body).unwrap();
    }

    /// `dayrun` configured for this workspace with a pinned clock
    pub fn command(&self, now: &str) -> Command {
        let mut cmd = Command::new(dayrun_bin());
        cmd.current_dir(self.path())
            .env_remove("DAYRUN_WORKDIR")
            .env_remove("DAYRUN_LOG_DIR")
            .env_remove("DAYRUN_VENV")
            .env_remove("DAYRUN_SCRIPT")
            .env_remove("DAYRUN_STREAM")
            .env_remove("DAYRUN_PROPAGATE_EXIT")
            .env("DAYRUN_INTERPRETER", "sh")
            .env("DAYRUN_NOW", now);
        cmd
    }

    pub fn log(&self, name: &str) -> String {
        fs::read_to_string(self.path().join("logs").join(name)).unwrap()
    }
}
