//! Command registration and single-token dispatch

pub mod program;
pub mod registry;

pub use program::Program;
pub use registry::{ActionError, ActionFuture, CommandRegistry, Dispatch, NOT_FOUND_MESSAGE};
