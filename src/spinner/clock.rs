#![forbid(unsafe_code)]

//! Repeating timers
//!
//! A [`Clock`] schedules a callback to run every `period` until the returned
//! [`TimerHandle`] is cancelled or dropped. The first call happens one period
//! after scheduling, never immediately.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::time::{Instant, MissedTickBehavior};

/// Callback invoked on every timer tick
pub type Tick = Box<dyn FnMut() + Send + 'static>;

#[derive(Debug, Error)]
pub enum ClockError {
    #[error("no tokio runtime is available to drive the timer")]
    NoRuntime,
}

/// Schedules repeating callbacks
pub trait Clock: Send + Sync {
    fn schedule_repeating(&self, period: Duration, tick: Tick) -> Result<TimerHandle, ClockError>;
}

/// Ownership of an active repeating timer
///
/// Cancelling consumes the handle. Dropping it cancels as well, so at most
/// one owner can ever keep a timer alive.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl TimerHandle {
    /// Wraps the action that stops the timer
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        TimerHandle {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Clock backed by tokio interval tasks
///
/// Each schedule spawns one task; cancelling aborts it. Aborting does not wait
/// for a tick that is already running, so cancellation is only immediate on a
/// current-thread runtime, where no tick can run while the canceller does. On
/// a multi-thread runtime a tick in flight on another worker may still complete
/// after `cancel` returns.
#[derive(Debug, Clone, Default)]
pub struct TokioClock {
    handle: Option<Handle>,
}

impl TokioClock {
    /// Creates a clock that spawns onto the runtime current at schedule time
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock that always spawns onto `handle`
    pub fn with_handle(handle: Handle) -> Self {
        TokioClock {
            handle: Some(handle),
        }
    }
}

impl Clock for TokioClock {
    fn schedule_repeating(
        &self,
        period: Duration,
        mut tick: Tick,
    ) -> Result<TimerHandle, ClockError> {
        let handle = match &self.handle {
            Some(handle) => handle.clone(),
            None => Handle::try_current().map_err(|_| ClockError::NoRuntime)?,
        };

        let first_tick = Instant::now() + period;
        let task = handle.spawn(async move {
            let mut interval = tokio::time::interval_at(first_tick, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                tick();
            }
        });

        Ok(TimerHandle::new(move || task.abort()))
    }
}

struct ManualTimer {
    id: u64,
    period: Duration,
    tick: Arc<Mutex<Tick>>,
}

/// Clock that only ticks when told to
///
/// [`ManualClock::fire`] runs every active callback once, in scheduling order.
/// Callbacks run without the timer list locked, so a callback may schedule or
/// cancel timers on the same clock. A timer cancelled mid-fire is skipped; one
/// scheduled mid-fire first runs on the next fire.
#[derive(Clone, Default)]
pub struct ManualClock {
    timers: Arc<Mutex<Vec<ManualTimer>>>,
    next_id: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every active timer callback once
    pub fn fire(&self) {
        let snapshot: Vec<(u64, Arc<Mutex<Tick>>)> = self
            .lock()
            .iter()
            .map(|timer| (timer.id, Arc::clone(&timer.tick)))
            .collect();

        for (id, tick) in snapshot {
            if !self.is_active(id) {
                continue;
            }
            let mut tick = tick.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let tick: &mut Tick = &mut tick;
            tick();
        }
    }

    /// Runs every active timer callback `times` times
    pub fn fire_n(&self, times: usize) {
        for _ in 0..times {
            self.fire();
        }
    }

    /// Number of timers scheduled and not yet cancelled
    pub fn active_timers(&self) -> usize {
        self.lock().len()
    }

    /// Periods of the active timers, in scheduling order
    pub fn periods(&self) -> Vec<Duration> {
        self.lock().iter().map(|t| t.period).collect()
    }

    fn is_active(&self, id: u64) -> bool {
        self.lock().iter().any(|timer| timer.id == id)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ManualTimer>> {
        self.timers.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Clock for ManualClock {
    fn schedule_repeating(&self, period: Duration, tick: Tick) -> Result<TimerHandle, ClockError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().push(ManualTimer {
            id,
            period,
            tick: Arc::new(Mutex::new(tick)),
        });

        let clock = self.clone();
        Ok(TimerHandle::new(move || {
            clock.lock().retain(|timer| timer.id != id);
        }))
    }
}

impl std::fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualClock")
            .field("active_timers", &self.active_timers())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (Arc<AtomicUsize>, Tick) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = count.clone();
        (
            count,
            Box::new(move || {
                inner.fetch_add(1, Ordering::SeqCst);
            }),
        )
    }

    #[test]
    fn test_manual_clock_fires_active_timers() {
        let clock = ManualClock::new();
        let (count, tick) = counter();
        let _handle = clock
            .schedule_repeating(Duration::from_millis(100), tick)
            .unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 0);
        clock.fire_n(3);
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert_eq!(clock.periods(), vec![Duration::from_millis(100)]);
    }

    #[test]
    fn test_cancel_removes_timer() {
        let clock = ManualClock::new();
        let (count, tick) = counter();
        let handle = clock
            .schedule_repeating(Duration::from_millis(100), tick)
            .unwrap();
        handle.cancel();

        clock.fire();
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn test_tick_can_schedule_on_same_clock() {
        let clock = ManualClock::new();
        let spawned: Arc<Mutex<Vec<TimerHandle>>> = Arc::default();
        let (inner_count, inner_tick) = counter();
        let mut inner_tick = Some(inner_tick);

        let scheduler = clock.clone();
        let handles = spawned.clone();
        let _outer = clock
            .schedule_repeating(
                Duration::from_millis(100),
                Box::new(move || {
                    if let Some(tick) = inner_tick.take() {
                        let handle = scheduler
                            .schedule_repeating(Duration::from_millis(50), tick)
                            .unwrap();
                        handles.lock().unwrap().push(handle);
                    }
                }),
            )
            .unwrap();

        clock.fire();
        assert_eq!(clock.active_timers(), 2);
        assert_eq!(inner_count.load(Ordering::SeqCst), 0);

        clock.fire();
        assert_eq!(inner_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_tick_can_cancel_later_timer() {
        let clock = ManualClock::new();
        let victim: Arc<Mutex<Option<TimerHandle>>> = Arc::default();

        let slot = victim.clone();
        let _canceller = clock
            .schedule_repeating(
                Duration::from_millis(100),
                Box::new(move || {
                    if let Some(handle) = slot.lock().unwrap().take() {
                        handle.cancel();
                    }
                }),
            )
            .unwrap();
        let (count, tick) = counter();
        *victim.lock().unwrap() =
            Some(clock.schedule_repeating(Duration::from_millis(100), tick).unwrap());

        clock.fire();
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(clock.active_timers(), 1);
    }

    #[test]
    fn test_drop_cancels_timer() {
        let clock = ManualClock::new();
        let (_count, tick) = counter();
        {
            let _handle = clock.schedule_repeating(Duration::from_secs(1), tick).unwrap();
            assert_eq!(clock.active_timers(), 1);
        }
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn test_tokio_clock_without_runtime() {
        let (_count, tick) = counter();
        let result = TokioClock::new().schedule_repeating(Duration::from_millis(10), tick);
        assert!(matches!(result, Err(ClockError::NoRuntime)));
    }

    #[test]
    fn test_tokio_clock_with_handle_outside_runtime_context() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();
        let clock = TokioClock::with_handle(runtime.handle().clone());

        let (count, tick) = counter();
        let handle = clock
            .schedule_repeating(Duration::from_millis(100), tick)
            .unwrap();

        runtime.block_on(async { tokio::time::sleep(Duration::from_millis(350)).await });
        assert_eq!(count.load(Ordering::SeqCst), 3);

        handle.cancel();
        runtime.block_on(async { tokio::time::sleep(Duration::from_millis(300)).await });
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_clock_ticks_each_period() {
        let (count, tick) = counter();
        let handle = TokioClock::new()
            .schedule_repeating(Duration::from_millis(100), tick)
            .unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        handle.cancel();
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
