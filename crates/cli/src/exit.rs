// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exit status of the wrapper itself.

use crate::invoker::ChildOutcome;

/// Exit codes used by dayrun
pub mod exit_codes {
    /// Run completed (or child status suppressed)
    pub const SUCCESS: i32 = 0;
    /// The wrapper could not record the run, or child died from a signal
    pub const ERROR: i32 = 1;
    /// The child could not be started
    pub const SPAWN_FAILED: i32 = 127;
}

/// What the wrapper reports to its scheduler once the child is done
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExitPolicy {
    /// Always exit 0; the child's status is only visible in the log
    #[default]
    Suppress,
    /// Exit with the child's code
    Propagate,
}

impl ExitPolicy {
    pub fn from_flag(propagate: bool) -> Self {
        if propagate {
            Self::Propagate
        } else {
            Self::Suppress
        }
    }

    pub fn exit_code(self, outcome: &ChildOutcome) -> i32 {
        match self {
            Self::Suppress => exit_codes::SUCCESS,
            Self::Propagate => match outcome {
                ChildOutcome::Exited(code) => *code,
                ChildOutcome::Signaled | ChildOutcome::WaitFailed(_) => exit_codes::ERROR,
                ChildOutcome::SpawnFailed(_) => exit_codes::SPAWN_FAILED,
            },
        }
    }
}

#[cfg(test)]
#[path = "exit_tests.rs"]
mod tests;
