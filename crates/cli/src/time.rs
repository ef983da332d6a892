// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Time abstraction for deterministic testing.
//!
//! This module provides a `Clock` trait reading local wall-clock time and a
//! `FakeClock` implementation that lets tests pin and advance that time.

use chrono::{DateTime, Local, NaiveDateTime};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Format accepted by [`FakeClock::parse`]
pub const FAKE_CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Clock trait for time abstraction
pub trait Clock: Send + Sync {
    /// Current local wall-clock time, without a zone offset
    fn now(&self) -> NaiveDateTime;
}

/// Real clock using the system's local time zone
#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone, Debug)]
pub struct FakeClock {
    /// Wall-clock time as milliseconds since the naive epoch
    current_millis: Arc<AtomicI64>,
}

impl FakeClock {
    /// Create a fake clock reading `start`
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current_millis: Arc::new(AtomicI64::new(start.and_utc().timestamp_millis())),
        }
    }

    /// Create a fake clock from `YYYY-MM-DD HH:MM:SS`
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s.trim(), FAKE_CLOCK_FORMAT).map(Self::new)
    }

    /// Advance time by a duration
    pub fn advance(&self, duration: Duration) {
        self.current_millis
            .fetch_add(duration.as_millis() as i64, Ordering::SeqCst);
    }

    /// Advance time by seconds
    pub fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }

    /// Set absolute time
    pub fn set(&self, at: NaiveDateTime) {
        self.current_millis
            .store(at.and_utc().timestamp_millis(), Ordering::SeqCst);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> NaiveDateTime {
        DateTime::from_timestamp_millis(self.current_millis.load(Ordering::SeqCst))
            .map(|dt| dt.naive_utc())
            .unwrap_or_default()
    }
}

/// Clock handle that can be either real or fake
#[derive(Clone, Debug)]
pub enum ClockHandle {
    System(SystemClock),
    Fake(FakeClock),
}

impl ClockHandle {
    /// Create a system clock handle
    pub fn system() -> Self {
        Self::System(SystemClock)
    }

    /// Create a fake clock handle pinned at `at`
    pub fn fake_at(at: NaiveDateTime) -> Self {
        Self::Fake(FakeClock::new(at))
    }

    /// Get as fake clock for manipulation (returns None for system clock)
    pub fn as_fake(&self) -> Option<&FakeClock> {
        match self {
            Self::Fake(f) => Some(f),
            Self::System(_) => None,
        }
    }

    /// Check if this is a fake clock
    pub fn is_fake(&self) -> bool {
        matches!(self, Self::Fake(_))
    }
}

impl Clock for ClockHandle {
    fn now(&self) -> NaiveDateTime {
        match self {
            Self::System(c) => c.now(),
            Self::Fake(c) => c.now(),
        }
    }
}

impl Default for ClockHandle {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
