// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! Every variable dayrun reads, or sets for the child, is named here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::ffi::OsString;

/// Variables set on every child so Python speaks UTF-8 regardless of the
/// console code page.
pub const CHILD_UTF8_ENV: [(&str, &str); 2] = [(PYTHONUTF8, "1"), (PYTHONIOENCODING, "utf-8")];

/// `DAYRUN_LOG` — Diagnostic filter directive for dayrun's own stderr output.
pub fn log_filter() -> Option<String> {
    std::env::var(names::DAYRUN_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// `PATH` — Search path inherited by the child.
pub fn path() -> Option<OsString> {
    std::env::var_os(names::PATH)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
