#![forbid(unsafe_code)]

//! Command table
//!
//! Maps a command name to a zero-argument async action. Only the first
//! process argument is consulted, and it must match a registered name
//! exactly.

use crate::output::Console;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Error produced by a command action
pub type ActionError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Future returned by a command action
pub type ActionFuture = Pin<Box<dyn Future<Output = Result<(), ActionError>> + Send + 'static>>;

type Action = Arc<dyn Fn() -> ActionFuture + Send + Sync>;

/// Line printed when no registered command matches
pub const NOT_FOUND_MESSAGE: &str = "Command not found";

/// Which path a dispatch took
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The named action ran to completion
    Ran(String),
    /// Nothing matched; the not-found line was printed
    NotFound,
}

/// Registered commands, keyed by name
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Action>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `action` under `name`
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn register<F, Fut>(&mut self, name: impl Into<String>, action: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), ActionError>> + Send + 'static,
    {
        let name = name.into();
        log::debug!("registered command '{}'", name);
        let action: Action = Arc::new(move || Box::pin(action()) as ActionFuture);
        self.commands.insert(name, action);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered command names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Runs the action named by `args[0]`
    ///
    /// `args` excludes the program name. An empty list or an unknown name
    /// prints [`NOT_FOUND_MESSAGE`] and returns [`Dispatch::NotFound`]. An
    /// action's error is returned as-is.
    pub async fn dispatch<S: AsRef<str>>(
        &self,
        console: &Console,
        args: &[S],
    ) -> Result<Dispatch, ActionError> {
        let requested: Option<&str> = args.first().map(|arg| arg.as_ref());
        let Some((name, action)) =
            requested.and_then(|name| self.commands.get_key_value(name))
        else {
            log::debug!("no command registered for {:?}", requested);
            console.info(NOT_FOUND_MESSAGE)?;
            return Ok(Dispatch::NotFound);
        };

        log::debug!("dispatching command '{}'", name);
        let name = name.clone();
        let future = action();
        future.await?;
        Ok(Dispatch::Ran(name))
    }

    /// Dispatches on the current process's arguments
    pub async fn dispatch_env(&self, console: &Console) -> Result<Dispatch, ActionError> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        self.dispatch(console, &args).await
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}
