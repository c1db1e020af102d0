#![forbid(unsafe_code)]

//! clikit: terminal styling, a single-line spinner and command dispatch
//!
//! The crate is a thin layer over ANSI escape codes and a string-keyed table
//! of async actions. Terminal output and timers are reached through the
//! [`output::OutputSink`] and [`spinner::Clock`] capabilities so every piece
//! can be driven by fakes in tests.

pub mod cli;
pub mod config;
pub mod output;
pub mod spinner;
pub mod style;

pub use cli::{ActionError, CommandRegistry, Dispatch, Program};
pub use config::Config;
pub use output::{BufferSink, Console, OutputSink, StdoutSink};
pub use spinner::{Clock, ManualClock, Spinner, SpinnerStyle, TokioClock};
