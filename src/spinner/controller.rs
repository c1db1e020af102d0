//! Spinner controller
//!
//! The spinner is either idle (no timer) or running (one timer, one frame
//! index). Starting while running cancels the old timer before the new one is
//! created, so two animations never share the line.

use super::clock::{Clock, ClockError, TimerHandle};
use crate::config::SpinnerSettings;
use crate::config::settings::{DEFAULT_FRAMES, DEFAULT_INTERVAL_MS};
use crate::output::OutputSink;
use crate::style::codes::CARRIAGE_RETURN;
use crate::style::text::aqua;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpinnerError {
    #[error("failed to write spinner frame: {0}")]
    Write(#[from] io::Error),

    #[error(transparent)]
    Clock(#[from] ClockError),

    #[error("a spinner needs at least one frame")]
    EmptyFrames,

    #[error("spinner interval must be greater than zero")]
    ZeroInterval,
}

/// Frames and period of an animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerStyle {
    frames: Arc<[String]>,
    interval: Duration,
}

impl SpinnerStyle {
    pub fn new(frames: Vec<String>, interval: Duration) -> Result<Self, SpinnerError> {
        if frames.is_empty() {
            return Err(SpinnerError::EmptyFrames);
        }
        if interval.is_zero() {
            return Err(SpinnerError::ZeroInterval);
        }
        Ok(SpinnerStyle {
            frames: frames.into(),
            interval,
        })
    }

    pub fn from_settings(settings: &SpinnerSettings) -> Result<Self, SpinnerError> {
        Self::new(settings.frames.clone(), settings.interval())
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for SpinnerStyle {
    fn default() -> Self {
        SpinnerStyle {
            frames: DEFAULT_FRAMES.iter().map(|f| f.to_string()).collect(),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}

/// Per-run render state, owned by the timer callback
struct FrameRenderer {
    sink: Arc<dyn OutputSink>,
    frames: Arc<[String]>,
    label: String,
    index: usize,
}

impl FrameRenderer {
    fn render(&mut self) -> io::Result<()> {
        if self.index >= self.frames.len() {
            self.index = 0;
        }

        let glyph = aqua(&self.frames[self.index]);
        let mut line =
            String::with_capacity(CARRIAGE_RETURN.len() + glyph.len() + 1 + self.label.len());
        line.push_str(CARRIAGE_RETURN);
        line.push_str(&glyph);
        line.push(' ');
        line.push_str(&self.label);

        let written = self.sink.write_str(&line);
        self.index = (self.index + 1) % self.frames.len();
        written
    }
}

/// Animated single-line spinner
///
/// Writes go through the [`OutputSink`]; ticks come from the [`Clock`].
/// On a non-interactive sink `start` prints the label once and never
/// schedules a timer.
///
/// Clones share the same timer slot, so a clone handed to a command action
/// controls the same animation. The timer is cancelled when the last clone
/// is dropped.
#[derive(Clone)]
pub struct Spinner {
    sink: Arc<dyn OutputSink>,
    clock: Arc<dyn Clock>,
    style: SpinnerStyle,
    timer: Arc<Mutex<Option<TimerHandle>>>,
}

impl Spinner {
    pub fn new(sink: Arc<dyn OutputSink>, clock: Arc<dyn Clock>, style: SpinnerStyle) -> Self {
        Spinner {
            sink,
            clock,
            style,
            timer: Arc::new(Mutex::new(None)),
        }
    }

    pub fn style(&self) -> &SpinnerStyle {
        &self.style
    }

    /// Whether a timer is currently active
    pub fn is_running(&self) -> bool {
        self.slot().is_some()
    }

    /// Starts animating `label` from the first frame
    ///
    /// Renders once immediately, then once per interval. Any animation
    /// already running is cancelled first.
    pub fn start(&self, label: &str) -> Result<(), SpinnerError> {
        if !self.sink.is_interactive() {
            self.sink.write_line(label)?;
            return Ok(());
        }

        let mut slot = self.slot();
        if let Some(previous) = slot.take() {
            previous.cancel();
        }

        let mut renderer = FrameRenderer {
            sink: Arc::clone(&self.sink),
            frames: Arc::clone(&self.style.frames),
            label: label.to_string(),
            index: 0,
        };
        renderer.render()?;

        let timer = self.clock.schedule_repeating(
            self.style.interval,
            Box::new(move || {
                if let Err(e) = renderer.render() {
                    log::debug!("spinner frame write failed: {}", e);
                }
            }),
        )?;
        log::trace!("spinner started, interval {:?}", self.style.interval);
        *slot = Some(timer);
        Ok(())
    }

    /// Cancels the animation
    ///
    /// The last frame stays on screen. Safe to call when idle.
    pub fn stop(&self) {
        let previous = self.slot().take();
        if let Some(timer) = previous {
            timer.cancel();
            log::trace!("spinner stopped");
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<TimerHandle>> {
        self.timer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for Spinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spinner")
            .field("style", &self.style)
            .field("running", &self.is_running())
            .finish()
    }
}
