// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Date keys and time strings for log file names and markers.
//!
//! Formatting works on chrono's numeric fields with zero padding and a
//! 24-hour clock, so the output never depends on the system locale and
//! lexical order always matches chronological order.

use crate::time::Clock;
use chrono::NaiveDateTime;
use clap::ValueEnum;

/// How the date key (and log file name) is written
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DateStyle {
    /// `YYYY-MM-DD`
    #[default]
    Dashed,
    /// `YYYYMMDD`
    Compact,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            Self::Dashed => "%Y-%m-%d",
            Self::Compact => "%Y%m%d",
        }
    }
}

/// How times in markers are written
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TimeStyle {
    /// `HH:MM`
    #[default]
    Minutes,
    /// `HH:MM:SS`
    Seconds,
}

impl TimeStyle {
    fn pattern(self) -> &'static str {
        match self {
            Self::Minutes => "%H:%M",
            Self::Seconds => "%H:%M:%S",
        }
    }
}

/// Date and time strings taken from one clock reading
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stamp {
    pub date: String,
    pub time: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimestampFormatter {
    date_style: DateStyle,
    time_style: TimeStyle,
}

impl TimestampFormatter {
    pub fn new(date_style: DateStyle, time_style: TimeStyle) -> Self {
        Self {
            date_style,
            time_style,
        }
    }

    pub fn date_string(&self, at: &NaiveDateTime) -> String {
        at.format(self.date_style.pattern()).to_string()
    }

    pub fn time_string(&self, at: &NaiveDateTime) -> String {
        at.format(self.time_style.pattern()).to_string()
    }

    pub fn stamp_at(&self, at: &NaiveDateTime) -> Stamp {
        Stamp {
            date: self.date_string(at),
            time: self.time_string(at),
        }
    }

    /// Read `clock` once and format both strings from that reading
    pub fn stamp(&self, clock: &dyn Clock) -> Stamp {
        self.stamp_at(&clock.now())
    }
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
