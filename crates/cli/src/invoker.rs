// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Child process execution with combined output.

use std::ffi::OsString;
use std::fs::File;
use std::path::PathBuf;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;

/// Where the child's combined output goes while it runs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptureMode {
    /// Spool to a temporary file and append the whole run block at the end
    #[default]
    Buffered,
    /// Let the child write straight into the daily log
    Streamed,
}

impl CaptureMode {
    pub fn from_flag(stream: bool) -> Self {
        if stream {
            Self::Streamed
        } else {
            Self::Buffered
        }
    }
}

/// Fully resolved command line and environment for one child
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub working_directory: PathBuf,
    pub env: Vec<(OsString, OsString)>,
    pub env_remove: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>, working_directory: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            working_directory: working_directory.into(),
            ..Self::default()
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn env_remove(mut self, key: impl Into<OsString>) -> Self {
        self.env_remove.push(key.into());
        self
    }

    /// `program arg1 arg2 ...` for diagnostics
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.join(" ")
    }
}

/// How the child ended. Never an error of the wrapper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChildOutcome {
    /// Exited normally with a code
    Exited(i32),
    /// Killed by a signal, no exit code
    Signaled,
    /// Could not be started at all
    SpawnFailed(String),
    /// Started, but waiting on it failed
    WaitFailed(String),
}

impl ChildOutcome {
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Exited(code) => Some(*code),
            _ => None,
        }
    }

    pub fn success(&self) -> bool {
        self.code() == Some(0)
    }

    /// Parenthesized detail for the finish marker
    pub fn describe(&self) -> String {
        match self {
            Self::Exited(code) => format!("exit code {}", code),
            Self::Signaled => "terminated by signal".to_string(),
            Self::SpawnFailed(_) => "failed to start".to_string(),
            Self::WaitFailed(_) => "lost track of process".to_string(),
        }
    }
}

/// Errors preparing the child's output handles
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("failed to duplicate output handle: {0}")]
    Handle(#[source] std::io::Error),
}

/// Runs one child to completion with stdout and stderr sharing a handle
pub struct ProcessInvoker;

impl ProcessInvoker {
    /// Spawn `invocation` with both output streams on `output` and wait.
    ///
    /// Blocks until the child exits; there is no timeout.
    pub async fn run(invocation: &Invocation, output: File) -> Result<ChildOutcome, InvokeError> {
        let stderr = output.try_clone().map_err(InvokeError::Handle)?;

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .current_dir(&invocation.working_directory)
            .stdin(Stdio::null())
            .stdout(Stdio::from(output))
            .stderr(Stdio::from(stderr));
        for key in &invocation.env_remove {
            cmd.env_remove(key);
        }
        for (key, value) in &invocation.env {
            cmd.env(key, value);
        }

        tracing::debug!(command = %invocation.display(), cwd = %invocation.working_directory.display(), "spawning child");

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                tracing::warn!(command = %invocation.display(), error = %e, "failed to start child");
                return Ok(ChildOutcome::SpawnFailed(e.to_string()));
            }
        };

        let outcome = match child.wait().await {
            Ok(status) => match status.code() {
                Some(code) => ChildOutcome::Exited(code),
                None => ChildOutcome::Signaled,
            },
            Err(e) => ChildOutcome::WaitFailed(e.to_string()),
        };
        tracing::debug!(?outcome, "child finished");
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "invoker_tests.rs"]
mod tests;
