//! Single-line animated spinner and the timer capability that drives it

pub mod clock;
pub mod controller;

pub use clock::{Clock, ClockError, ManualClock, TimerHandle, TokioClock};
pub use controller::{Spinner, SpinnerError, SpinnerStyle};
