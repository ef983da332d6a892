// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostics for dayrun itself, on stderr.
//!
//! Kept apart from the daily log, which only ever holds banners, markers
//! and the child's output.

use crate::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `DAYRUN_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Parse `directive`, falling back to [`DEFAULT_FILTER`].
///
/// Returns the rejected directive alongside the fallback so it can be
/// reported once logging is up.
pub fn build_filter(directive: Option<&str>) -> (EnvFilter, Option<String>) {
    match directive {
        Some(d) => match EnvFilter::try_new(d) {
            Ok(filter) => (filter, None),
            Err(_) => (EnvFilter::new(DEFAULT_FILTER), Some(d.to_string())),
        },
        None => (EnvFilter::new(DEFAULT_FILTER), None),
    }
}

/// Install the stderr subscriber. Safe to call more than once.
pub fn init() {
    let directive = env::log_filter();
    let (filter, rejected) = build_filter(directive.as_deref());

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .is_ok();

    if let (true, Some(rejected)) = (installed, rejected) {
        tracing::warn!(directive = %rejected, "ignoring invalid {}", env::DAYRUN_LOG);
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
