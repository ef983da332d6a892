// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.
//!
//! Meant to be invoked by a scheduler with no arguments; every flag has an
//! environment variable so a task entry can stay a bare command.

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::config::{Profile, RunnerConfig};
use crate::exit::ExitPolicy;
use crate::invoker::CaptureMode;
use crate::time::{ClockHandle, FakeClock};
use crate::timestamp::{DateStyle, TimeStyle};

/// Run a script and append its output to a daily log
#[derive(Parser, Debug, Clone)]
#[command(name = "dayrun", version, about = "Run a script and append its output to a daily log")]
pub struct Cli {
    /// Which scheduled script to run
    #[arg(value_enum, default_value_t = Profile::Main)]
    pub profile: Profile,

    /// Directory to run in (default: current directory)
    #[arg(long, env = "DAYRUN_WORKDIR")]
    pub workdir: Option<PathBuf>,

    /// Log directory, relative to the working directory unless absolute
    #[arg(long, env = "DAYRUN_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Virtual environment to activate if it exists
    #[arg(long, env = "DAYRUN_VENV")]
    pub venv: Option<PathBuf>,

    /// Do not activate any virtual environment
    #[arg(long)]
    pub no_venv: bool,

    /// Interpreter to run the script with
    #[arg(long, env = "DAYRUN_INTERPRETER")]
    pub interpreter: Option<PathBuf>,

    /// Script to run, relative to the working directory unless absolute
    #[arg(long, env = "DAYRUN_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Override the profile's date key format
    #[arg(long, value_enum)]
    pub date_style: Option<DateStyle>,

    /// Override the profile's marker time format
    #[arg(long, value_enum)]
    pub time_style: Option<TimeStyle>,

    /// Let the child write straight into the log instead of appending
    /// the whole run at the end
    #[arg(long, env = "DAYRUN_STREAM")]
    pub stream: bool,

    /// Exit with the child's exit code instead of always 0
    #[arg(long, env = "DAYRUN_PROPAGATE_EXIT")]
    pub propagate_exit: bool,

    /// Pin the clock to `YYYY-MM-DD HH:MM:SS`
    #[arg(long, env = "DAYRUN_NOW", hide = true)]
    pub now: Option<String>,

    /// Arguments passed to the script
    #[arg(last = true)]
    pub script_args: Vec<String>,
}

impl Cli {
    /// Build the runner config: profile defaults, then flag overrides.
    ///
    /// A relative `--workdir` resolves against `current_dir`.
    pub fn runner_config(&self, current_dir: &Path) -> RunnerConfig {
        let workdir = match &self.workdir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => current_dir.join(dir),
            None => current_dir.to_path_buf(),
        };

        let mut config = RunnerConfig::for_profile(self.profile, workdir);
        if let Some(dir) = &self.log_dir {
            config.log_directory = dir.clone();
        }
        if self.no_venv {
            config.venv = None;
        } else if let Some(venv) = &self.venv {
            config.venv = Some(venv.clone());
        }
        if let Some(interpreter) = &self.interpreter {
            config.interpreter = interpreter.clone();
        }
        if let Some(script) = &self.script {
            config.script = script.clone();
        }
        if let Some(style) = self.date_style {
            config.date_style = style;
        }
        if let Some(style) = self.time_style {
            config.time_style = style;
        }
        config.script_args = self.script_args.clone();
        config.capture = CaptureMode::from_flag(self.stream);
        config.exit_policy = ExitPolicy::from_flag(self.propagate_exit);
        config
    }

    /// System clock, or a fake one pinned by `--now`
    pub fn clock(&self) -> Result<ClockHandle, chrono::ParseError> {
        match &self.now {
            Some(now) => Ok(ClockHandle::Fake(FakeClock::parse(now)?)),
            None => Ok(ClockHandle::system()),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
