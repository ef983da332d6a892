// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The run-and-log sequence.
//!
//! `EnsureLogDir → EnsureHeader → StartMarker → RunChild → FinishMarker`,
//! with no branch on how the child ended.

use crate::config::RunnerConfig;
use crate::context::RunContext;
use crate::env;
use crate::exit::ExitPolicy;
use crate::invoker::{CaptureMode, ChildOutcome, InvokeError, Invocation, ProcessInvoker};
use crate::time::Clock;
use crate::venv::VirtualEnv;
use dayrun_sink::{finish_marker, start_marker, DailyLog, RunBlock, SinkError};
use std::ffi::OsString;
use std::io::{Read, Seek, SeekFrom};
use thiserror::Error;

/// Failures of the wrapper itself. The child's failures are never errors.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error(transparent)]
    Invoke(#[from] InvokeError),

    #[error("failed to spool child output: {0}")]
    Spool(#[source] std::io::Error),

    #[error("cannot build PATH for virtual environment: {0}")]
    SearchPath(#[from] std::env::JoinPathsError),
}

/// What happened during one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub context: RunContext,
    pub outcome: ChildOutcome,
    /// Whether this run started the day's log file
    pub header_written: bool,
    /// Code the wrapper should exit with under its policy
    pub exit_code: i32,
}

pub struct Runner<C: Clock> {
    config: RunnerConfig,
    clock: C,
}

impl<C: Clock> Runner<C> {
    pub fn new(config: RunnerConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run the configured script once, recording it in the daily log
    pub async fn run(&self) -> Result<RunReport, RunError> {
        let formatter = self.config.formatter();
        let context = RunContext::new(&self.config, formatter.stamp(&self.clock));
        let log = context.daily_log();

        log.ensure_directory()?;
        let header_written = log.ensure_header(context.date_string())?;

        let invocation = self.invocation()?;
        let script = self.config.script_name();
        let start = start_marker(context.time_string(), &script);

        tracing::info!(
            log = %context.log_file_path().display(),
            command = %invocation.display(),
            "starting run"
        );

        let outcome = match self.config.capture {
            CaptureMode::Buffered => self.run_buffered(&log, &invocation, &start, &script).await?,
            CaptureMode::Streamed => self.run_streamed(&log, &invocation, &start, &script).await?,
        };

        let exit_code = self.exit_policy().exit_code(&outcome);
        tracing::info!(?outcome, exit_code, "run finished");

        Ok(RunReport {
            context,
            outcome,
            header_written,
            exit_code,
        })
    }

    fn exit_policy(&self) -> ExitPolicy {
        self.config.exit_policy
    }

    /// Resolve interpreter, arguments and environment for the child
    pub fn invocation(&self) -> Result<Invocation, RunError> {
        let venv = match self.config.resolved_venv() {
            Some(root) => {
                let detected = VirtualEnv::detect(&root);
                if detected.is_none() {
                    tracing::warn!(venv = %root.display(), "virtual environment not found, using PATH");
                }
                detected
            }
            None => None,
        };

        let program = match &venv {
            Some(venv) => venv.interpreter(&self.config.interpreter),
            None => self.config.interpreter.clone(),
        };

        let mut invocation = Invocation::new(program, &self.config.working_directory)
            .arg(self.config.resolved_script())
            .args(self.config.script_args.iter().map(OsString::from));
        for (key, value) in env::CHILD_UTF8_ENV {
            invocation = invocation.env(key, value);
        }
        if let Some(venv) = &venv {
            for key in venv.removed_env() {
                invocation = invocation.env_remove(key);
            }
            for (key, value) in venv.activation_env(env::path())? {
                invocation = invocation.env(key, value);
            }
        }
        Ok(invocation)
    }

    /// Spool output, then append start, output and finish as one block
    async fn run_buffered(
        &self,
        log: &DailyLog,
        invocation: &Invocation,
        start: &str,
        script: &str,
    ) -> Result<ChildOutcome, RunError> {
        let mut spool = tempfile::tempfile().map_err(RunError::Spool)?;
        let handle = spool.try_clone().map_err(RunError::Spool)?;
        let outcome = ProcessInvoker::run(invocation, handle).await?;

        let mut output = Vec::new();
        spool
            .seek(SeekFrom::Start(0))
            .and_then(|_| spool.read_to_end(&mut output))
            .map_err(RunError::Spool)?;

        let mut block = RunBlock::new();
        block.push_line(start);
        block.push_bytes(&output);
        if let Some(message) = failure_message(invocation, &outcome) {
            block.push_line(&message);
        }
        block.push_line(&self.finish_line(script, &outcome));
        log.append_block(&block)?;
        Ok(outcome)
    }

    /// Append the start marker, let the child write into the log, then finish
    async fn run_streamed(
        &self,
        log: &DailyLog,
        invocation: &Invocation,
        start: &str,
        script: &str,
    ) -> Result<ChildOutcome, RunError> {
        log.append(start)?;
        let handle = log.open_append()?;
        let outcome = ProcessInvoker::run(invocation, handle).await?;

        log.terminate_line()?;
        if let Some(message) = failure_message(invocation, &outcome) {
            log.append(&message)?;
        }
        log.append(&self.finish_line(script, &outcome))?;
        Ok(outcome)
    }

    fn finish_line(&self, script: &str, outcome: &ChildOutcome) -> String {
        let now = self.config.formatter().time_string(&self.clock.now());
        finish_marker(&now, script, &outcome.describe())
    }
}

/// Text recorded in the log when the child never ran to completion
fn failure_message(invocation: &Invocation, outcome: &ChildOutcome) -> Option<String> {
    match outcome {
        ChildOutcome::SpawnFailed(reason) => Some(format!(
            "failed to start {}: {}",
            invocation.program.display(),
            reason
        )),
        ChildOutcome::WaitFailed(reason) => Some(format!(
            "failed waiting for {}: {}",
            invocation.program.display(),
            reason
        )),
        ChildOutcome::Exited(_) | ChildOutcome::Signaled => None,
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
