// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory run block, appended to the daily log in a single write.

/// Lines and raw output of one run, assembled before it reaches the log.
///
/// Lines always start at the beginning of a line: if raw output left the
/// buffer mid-line, a newline is inserted first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunBlock {
    buf: Vec<u8>,
}

impl RunBlock {
    /// Create an empty block
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Push a line; a trailing newline is added
    pub fn push_line(&mut self, line: &str) {
        self.terminate_line();
        self.buf.extend_from_slice(line.as_bytes());
        self.buf.push(b'\n');
    }

    /// Push raw bytes verbatim
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Insert a newline if the block currently ends mid-line
    pub fn terminate_line(&mut self) {
        if self.buf.last().is_some_and(|b| *b != b'\n') {
            self.buf.push(b'\n');
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[cfg(test)]
#[path = "block_tests.rs"]
mod tests;
