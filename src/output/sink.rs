#![forbid(unsafe_code)]

//! Output sinks
//!
//! An [`OutputSink`] accepts raw text and reports whether it is attached to
//! an interactive terminal. The spinner and the console write exclusively
//! through this trait.

use crate::config::Interactivity;
use std::io::{self, IsTerminal, Write};
use std::sync::{Mutex, MutexGuard};

/// Destination for terminal text
pub trait OutputSink: Send + Sync {
    /// Writes `text` as-is, with no trailing newline
    fn write_str(&self, text: &str) -> io::Result<()>;

    /// Whether the sink is attached to an interactive terminal
    fn is_interactive(&self) -> bool;

    /// Writes `text` followed by a newline
    fn write_line(&self, text: &str) -> io::Result<()> {
        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        line.push('\n');
        self.write_str(&line)
    }
}

/// Sink writing to the process's standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink {
    interactivity: Interactivity,
}

impl StdoutSink {
    /// Creates a sink that detects interactivity from stdout
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink whose interactivity is forced by `interactivity`
    pub fn with_interactivity(interactivity: Interactivity) -> Self {
        StdoutSink { interactivity }
    }
}

impl OutputSink for StdoutSink {
    fn write_str(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn is_interactive(&self) -> bool {
        match self.interactivity {
            Interactivity::Always => true,
            Interactivity::Never => false,
            Interactivity::Auto => io::stdout().is_terminal(),
        }
    }
}

/// In-memory sink that records everything written to it
///
/// Useful for asserting on exact output in tests.
#[derive(Debug, Default)]
pub struct BufferSink {
    buffer: Mutex<String>,
    interactive: bool,
}

impl BufferSink {
    /// Creates an empty sink reporting the given interactivity
    pub fn new(interactive: bool) -> Self {
        BufferSink {
            buffer: Mutex::new(String::new()),
            interactive,
        }
    }

    /// Returns a copy of everything written so far
    pub fn contents(&self) -> String {
        self.lock().clone()
    }

    /// Returns everything written so far and empties the buffer
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, String> {
        // A panic while holding the lock can only leave a partially appended
        // string behind, which is still valid to read.
        self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl OutputSink for BufferSink {
    fn write_str(&self, text: &str) -> io::Result<()> {
        self.lock().push_str(text);
        Ok(())
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
