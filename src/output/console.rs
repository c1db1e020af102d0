#![forbid(unsafe_code)]

//! Console logging wrappers
//!
//! One call writes one line. Success and error lines are colored; info lines
//! are written as-is.

use super::sink::OutputSink;
use crate::style::codes::{CLEAR_SCREEN, HIDE_CURSOR, SHOW_CURSOR};
use crate::style::text::{green, red};
use std::io;
use std::sync::Arc;

/// Line-oriented writer over an [`OutputSink`]
#[derive(Clone)]
pub struct Console {
    sink: Arc<dyn OutputSink>,
}

impl Console {
    /// Creates a console writing to `sink`
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Console { sink }
    }

    /// Writes `text` as a single line
    pub fn print(&self, text: &str) -> io::Result<()> {
        self.sink.write_line(text)
    }

    /// Writes an informational line in standard text
    pub fn info(&self, text: &str) -> io::Result<()> {
        self.print(text)
    }

    /// Writes a success line in green
    pub fn success(&self, text: &str) -> io::Result<()> {
        self.print(&green(text))
    }

    /// Writes an error line in red
    pub fn error(&self, text: &str) -> io::Result<()> {
        self.print(&red(text))
    }

    /// Erases the viewport and scrollback
    pub fn clear(&self) -> io::Result<()> {
        self.sink.write_str(CLEAR_SCREEN)
    }

    pub fn hide_cursor(&self) -> io::Result<()> {
        self.print(HIDE_CURSOR)
    }

    pub fn show_cursor(&self) -> io::Result<()> {
        self.print(SHOW_CURSOR)
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("interactive", &self.sink.is_interactive())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::BufferSink;

    fn console(interactive: bool) -> (Console, Arc<BufferSink>) {
        let sink = Arc::new(BufferSink::new(interactive));
        (Console::new(sink.clone()), sink)
    }

    #[test]
    fn test_info_writes_plain_line() {
        let (console, sink) = console(false);
        console.info("hello").unwrap();
        assert_eq!(sink.contents(), "hello\n");
    }

    #[test]
    fn test_success_writes_green_line() {
        let (console, sink) = console(false);
        console.success("done").unwrap();
        assert_eq!(sink.contents(), "\x1b[32mdone\x1b[37m\n");
    }

    #[test]
    fn test_error_writes_red_line() {
        let (console, sink) = console(false);
        console.error("boom").unwrap();
        assert_eq!(sink.contents(), "\x1b[31mboom\x1b[37m\n");
    }

    #[test]
    fn test_cursor_codes_written_as_lines() {
        let (console, sink) = console(true);
        console.hide_cursor().unwrap();
        console.show_cursor().unwrap();
        assert_eq!(sink.contents(), "\x1b[?25l\n\x1b[?25h\n");
    }

    #[test]
    fn test_clear_on_terminal() {
        let (console, sink) = console(true);
        console.clear().unwrap();
        assert_eq!(sink.contents(), CLEAR_SCREEN);
    }

    #[test]
    fn test_clear_writes_off_terminal() {
        let (console, sink) = console(false);
        console.clear().unwrap();
        assert_eq!(sink.contents(), "\x1b[2J\x1b[3J\x1b[H");
    }
}
