//! Terminal output: the sink capability and the console logging wrappers

pub mod console;
pub mod sink;

pub use console::Console;
pub use sink::{BufferSink, OutputSink, StdoutSink};
