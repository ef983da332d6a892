// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runner configuration and the built-in profiles.
//!
//! There is no configuration file: every default is a constant here, and a
//! [`Profile`] picks between the two wrapper flavours. Flags and environment
//! variables override individual fields.

use crate::exit::ExitPolicy;
use crate::invoker::CaptureMode;
use crate::timestamp::{DateStyle, TimeStyle, TimestampFormatter};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Interpreter used when none is given
pub const DEFAULT_INTERPRETER: &str = "python";
/// Log directory, relative to the working directory
pub const DEFAULT_LOG_DIR: &str = "logs";
/// Virtual environment directory, relative to the working directory
pub const DEFAULT_VENV_DIR: &str = "venv";

/// Named sets of defaults, one per scheduled script
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    /// `main.py`, dated `YYYY-MM-DD`, times `HH:MM`
    #[default]
    Main,
    /// `gfiledownload.py`, dated `YYYYMMDD`, times `HH:MM:SS`
    #[value(name = "gfiledownload")]
    GFileDownload,
}

impl Profile {
    pub fn script(self) -> &'static str {
        match self {
            Self::Main => "main.py",
            Self::GFileDownload => "gfiledownload.py",
        }
    }

    pub fn date_style(self) -> DateStyle {
        match self {
            Self::Main => DateStyle::Dashed,
            Self::GFileDownload => DateStyle::Compact,
        }
    }

    pub fn time_style(self) -> TimeStyle {
        match self {
            Self::Main => TimeStyle::Minutes,
            Self::GFileDownload => TimeStyle::Seconds,
        }
    }
}

/// Everything one run needs, resolved up front
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunnerConfig {
    pub profile: Profile,

    /// Directory the child runs in; relative paths below resolve against it
    pub working_directory: PathBuf,

    pub log_directory: PathBuf,

    /// Virtual environment to activate, if present on disk
    pub venv: Option<PathBuf>,

    pub interpreter: PathBuf,

    pub script: PathBuf,

    /// Extra arguments passed after the script
    pub script_args: Vec<String>,

    pub date_style: DateStyle,
    pub time_style: TimeStyle,
    pub capture: CaptureMode,
    pub exit_policy: ExitPolicy,
}

impl RunnerConfig {
    /// Defaults of `profile`, rooted at `working_directory`
    pub fn for_profile(profile: Profile, working_directory: impl Into<PathBuf>) -> Self {
        Self {
            profile,
            working_directory: working_directory.into(),
            log_directory: PathBuf::from(DEFAULT_LOG_DIR),
            venv: Some(PathBuf::from(DEFAULT_VENV_DIR)),
            interpreter: PathBuf::from(DEFAULT_INTERPRETER),
            script: PathBuf::from(profile.script()),
            script_args: Vec::new(),
            date_style: profile.date_style(),
            time_style: profile.time_style(),
            capture: CaptureMode::default(),
            exit_policy: ExitPolicy::default(),
        }
    }

    pub fn formatter(&self) -> TimestampFormatter {
        TimestampFormatter::new(self.date_style, self.time_style)
    }

    /// Log directory, absolute or joined onto the working directory
    pub fn resolved_log_directory(&self) -> PathBuf {
        self.resolve(&self.log_directory)
    }

    pub fn resolved_venv(&self) -> Option<PathBuf> {
        self.venv.as_deref().map(|v| self.resolve(v))
    }

    pub fn resolved_script(&self) -> PathBuf {
        self.resolve(&self.script)
    }

    /// Script name as it appears in markers, e.g. `main.py`
    pub fn script_name(&self) -> String {
        self.script
            .file_name()
            .unwrap_or(self.script.as_os_str())
            .to_string_lossy()
            .into_owned()
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_directory.join(path)
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
