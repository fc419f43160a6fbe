//! Treatment-progress percentage counter.
//!
//! A cooperative, cancelable counter that advances an integer
//! percentage from 0 to 100, one step per fixed 30 ms period. It is
//! purely informational (display panels read it) and never drives
//! the geometric transform, which runs on its own clock.
//!
//! The counter is poll-driven: the session calls [`ProgressTimer::poll`]
//! from its frame tick, and late polls catch up (a 90 ms gap yields one
//! emission that jumps three steps). Cancellation permanently ends the
//! current run; a poll that races a cancel is a guaranteed no-op
//! because the run state it would have read is already gone.

use web_time::{Duration, Instant};

/// Fixed emission period of the counter.
pub const TICK_PERIOD: Duration = Duration::from_millis(30);

/// Terminal percentage.
const MAX_PERCENT: u64 = 100;

/// Bookkeeping for one live counting run.
#[derive(Debug, Clone, Copy)]
struct Run {
    started: Instant,
    emitted: u64,
}

/// Cooperative, cancelable 0-100 percentage counter.
#[derive(Debug, Clone, Default)]
pub struct ProgressTimer {
    run: Option<Run>,
    percent: u8,
}

impl ProgressTimer {
    /// Create an idle timer at 0%.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a fresh run from 0%. Any previous run is discarded.
    pub fn start(&mut self, now: Instant) {
        self.run = Some(Run {
            started: now,
            emitted: 0,
        });
        self.percent = 0;
    }

    /// Permanently cancel the current run, if any. Subsequent polls
    /// emit nothing until the next [`start`](Self::start).
    pub fn cancel(&mut self) {
        if self.run.take().is_some() {
            log::debug!("progress timer canceled at {}%", self.percent);
        }
    }

    /// Advance the counter to `now` and return the newly reached
    /// percentage, or `None` when no whole period has elapsed since
    /// the last emission (or the timer is idle, canceled, or already
    /// terminal at 100).
    pub fn poll(&mut self, now: Instant) -> Option<u8> {
        let run = self.run.as_mut()?;
        let elapsed = now.saturating_duration_since(run.started);
        let due =
            (elapsed.as_millis() / TICK_PERIOD.as_millis()) as u64;
        let due = due.min(MAX_PERCENT);
        if due <= run.emitted {
            return None;
        }
        run.emitted = due;
        self.percent = due as u8;
        if due >= MAX_PERCENT {
            // Terminal: 100 is emitted exactly once, then the run ends
            self.run = None;
        }
        Some(self.percent)
    }

    /// Latest published percentage.
    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Whether a run is currently counting.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, ticks: u64) -> Instant {
        start + TICK_PERIOD * ticks as u32
    }

    #[test]
    fn emits_exactly_one_hundred_increments() {
        let start = Instant::now();
        let mut timer = ProgressTimer::new();
        timer.start(start);

        let mut emissions = Vec::new();
        for k in 1..=150 {
            if let Some(p) = timer.poll(at(start, k)) {
                emissions.push(p);
            }
        }

        assert_eq!(emissions.len(), 100);
        assert_eq!(emissions.first().copied(), Some(1));
        assert_eq!(emissions.last().copied(), Some(100));
        assert!(emissions.iter().all(|&p| p <= 100));
        assert!(!timer.is_running());
        assert_eq!(timer.percent(), 100);
    }

    #[test]
    fn sub_period_polls_emit_nothing() {
        let start = Instant::now();
        let mut timer = ProgressTimer::new();
        timer.start(start);

        assert_eq!(timer.poll(start), None);
        assert_eq!(timer.poll(start + Duration::from_millis(29)), None);
        assert_eq!(timer.poll(start + Duration::from_millis(30)), Some(1));
        // Polling the same instant again is quiet
        assert_eq!(timer.poll(start + Duration::from_millis(30)), None);
    }

    #[test]
    fn late_polls_catch_up() {
        let start = Instant::now();
        let mut timer = ProgressTimer::new();
        timer.start(start);

        assert_eq!(timer.poll(start + Duration::from_millis(95)), Some(3));
        assert_eq!(timer.percent(), 3);
    }

    #[test]
    fn cancel_stops_emission_permanently() {
        let start = Instant::now();
        let mut timer = ProgressTimer::new();
        timer.start(start);

        assert_eq!(timer.poll(at(start, 5)), Some(5));
        timer.cancel();
        assert!(!timer.is_running());

        // Ten more periods of silence after the cancel
        for k in 6..16 {
            assert_eq!(timer.poll(at(start, k)), None);
        }
        assert_eq!(timer.percent(), 5);
    }

    #[test]
    fn cancel_when_idle_is_a_no_op() {
        let mut timer = ProgressTimer::new();
        timer.cancel();
        assert_eq!(timer.poll(Instant::now()), None);
        assert_eq!(timer.percent(), 0);
    }

    #[test]
    fn restart_resets_to_zero() {
        let start = Instant::now();
        let mut timer = ProgressTimer::new();
        timer.start(start);
        assert_eq!(timer.poll(at(start, 40)), Some(40));

        let restart = at(start, 41);
        timer.start(restart);
        assert_eq!(timer.percent(), 0);
        assert_eq!(timer.poll(at(restart, 1)), Some(1));
    }

    #[test]
    fn terminal_at_one_hundred_is_idempotent() {
        let start = Instant::now();
        let mut timer = ProgressTimer::new();
        timer.start(start);

        assert_eq!(timer.poll(at(start, 500)), Some(100));
        assert_eq!(timer.poll(at(start, 501)), None);
        assert_eq!(timer.poll(at(start, 1000)), None);
        assert_eq!(timer.percent(), 100);
    }
}
