// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Python virtual environment activation without a shell.
//!
//! Does what `activate` does for the child only: resolve the interpreter
//! inside the venv, set `VIRTUAL_ENV`, prepend the venv's binary directory
//! to `PATH` and drop `PYTHONHOME`.

use crate::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[cfg(windows)]
const BIN_DIR: &str = "Scripts";
#[cfg(not(windows))]
const BIN_DIR: &str = "bin";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualEnv {
    root: PathBuf,
}

impl VirtualEnv {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The venv at `root`, if that directory exists
    pub fn detect(root: &Path) -> Option<Self> {
        root.is_dir().then(|| Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `Scripts` on Windows, `bin` elsewhere
    pub fn bin_dir(&self) -> PathBuf {
        self.root.join(BIN_DIR)
    }

    /// Resolve a bare interpreter name inside the venv.
    ///
    /// Paths with a directory component are returned unchanged, as is a bare
    /// name with no matching file in the venv.
    pub fn interpreter(&self, name: &Path) -> PathBuf {
        if name.components().count() != 1 {
            return name.to_path_buf();
        }
        let candidate = self.bin_dir().join(executable_name(name));
        if candidate.is_file() {
            candidate
        } else {
            tracing::warn!(
                interpreter = %name.display(),
                venv = %self.root.display(),
                "interpreter not found in virtual environment, using PATH"
            );
            name.to_path_buf()
        }
    }

    /// `PATH` with the venv's binary directory in front of `current`
    pub fn search_path(
        &self,
        current: Option<OsString>,
    ) -> Result<OsString, std::env::JoinPathsError> {
        let mut dirs = vec![self.bin_dir()];
        if let Some(current) = current {
            dirs.extend(std::env::split_paths(&current));
        }
        std::env::join_paths(dirs)
    }

    /// Variables to set on the child, given the inherited `PATH`
    pub fn activation_env(
        &self,
        current_path: Option<OsString>,
    ) -> Result<Vec<(OsString, OsString)>, std::env::JoinPathsError> {
        Ok(vec![
            (
                OsString::from(env::VIRTUAL_ENV),
                self.root.clone().into_os_string(),
            ),
            (OsString::from(env::PATH), self.search_path(current_path)?),
        ])
    }

    /// Variables to remove from the child
    pub fn removed_env(&self) -> Vec<OsString> {
        vec![OsString::from(env::PYTHONHOME)]
    }
}

#[cfg(windows)]
fn executable_name(name: &Path) -> PathBuf {
    if name.extension().is_some() {
        name.to_path_buf()
    } else {
        name.with_extension("exe")
    }
}

#[cfg(not(windows))]
fn executable_name(name: &Path) -> PathBuf {
    name.to_path_buf()
}

#[cfg(test)]
#[path = "venv_tests.rs"]
mod tests;
