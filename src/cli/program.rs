//! Program context
//!
//! [`Program`] owns the console, the spinner and the command table that
//! would otherwise be process-wide state. Build one per process (or per
//! test) and dispatch through it.

use super::registry::{ActionError, CommandRegistry, Dispatch};
use crate::config::Config;
use crate::output::{Console, OutputSink, StdoutSink};
use crate::spinner::{Clock, Spinner, SpinnerError, SpinnerStyle, TokioClock};
use std::future::Future;
use std::sync::Arc;

#[derive(Debug)]
pub struct Program {
    console: Console,
    spinner: Spinner,
    commands: CommandRegistry,
}

impl Program {
    pub fn new(sink: Arc<dyn OutputSink>, clock: Arc<dyn Clock>, style: SpinnerStyle) -> Self {
        Program {
            console: Console::new(Arc::clone(&sink)),
            spinner: Spinner::new(sink, clock, style),
            commands: CommandRegistry::new(),
        }
    }

    /// Builds a program writing to stdout and ticking on the tokio runtime
    pub fn from_config(config: &Config) -> Result<Self, SpinnerError> {
        let style = SpinnerStyle::from_settings(&config.spinner)?;
        let sink = StdoutSink::with_interactivity(config.output.interactive);
        Ok(Self::new(Arc::new(sink), Arc::new(TokioClock::new()), style))
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    /// The spinner; clone it to drive the animation from inside an action
    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    pub fn register<F, Fut>(&mut self, name: impl Into<String>, action: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), ActionError>> + Send + 'static,
    {
        self.commands.register(name, action);
    }

    pub async fn dispatch<S: AsRef<str>>(&self, args: &[S]) -> Result<Dispatch, ActionError> {
        self.commands.dispatch(&self.console, args).await
    }

    /// Dispatches on the process arguments
    pub async fn run(&self) -> Result<Dispatch, ActionError> {
        self.commands.dispatch_env(&self.console).await
    }
}
