//! The arch-offset transform clock.
//!
//! Drives the lower arch from its misaligned pose to the aligned pose
//! over a wall-clock duration scaled by the animation-speed setting.
//! Sampling is side-effect-free and may be called redundantly; the
//! session samples once per frame. This clock is independent of the
//! treatment-progress percentage counter: the 3D scene reads the
//! eased fraction here while display panels read the counter.

use web_time::{Duration, Instant};

use super::easing::Easing;
use crate::scene::ArchOffset;

/// Correction duration at the neutral speed factor of 1.0.
const BASE_DURATION: Duration = Duration::from_millis(2000);

/// Lifecycle of the alignment transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformPhase {
    /// No correction has been triggered.
    #[default]
    NotStarted,
    /// The lower arch is moving toward the aligned pose.
    InProgress,
    /// The lower arch has reached the aligned pose.
    Complete,
}

/// Interpolates the lower arch offset from a start pose to the aligned
/// pose over a wall-clock duration.
#[derive(Debug, Clone)]
pub struct TransformAnimator {
    phase: TransformPhase,
    from: ArchOffset,
    started: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl TransformAnimator {
    /// Create an idle animator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: TransformPhase::NotStarted,
            from: ArchOffset::ZERO,
            started: None,
            duration: BASE_DURATION,
            easing: Easing::default(),
        }
    }

    /// Correction duration for an animation-speed slider position.
    ///
    /// `speed_factor = 0.5 + speed/100 * 1.5`, so the duration ranges
    /// from 4000 ms at speed 0 down to 1000 ms at speed 100 and is
    /// strictly decreasing in between.
    #[must_use]
    pub fn duration_for_speed(speed_setting: f32) -> Duration {
        let speed_factor =
            0.5 + (speed_setting.clamp(0.0, 100.0) / 100.0) * 1.5;
        Duration::from_secs_f64(
            BASE_DURATION.as_secs_f64() / f64::from(speed_factor),
        )
    }

    /// Begin (or re-begin) the correction toward the aligned pose.
    ///
    /// `initial` is the variant's misaligned offset. Re-triggering
    /// while a correction is already in flight continues from the
    /// currently sampled offset rather than snapping back to
    /// `initial`, preserving spring-like continuity.
    pub fn start(
        &mut self,
        initial: ArchOffset,
        speed_setting: f32,
        now: Instant,
    ) {
        let from = if self.phase == TransformPhase::InProgress {
            self.sample(now)
        } else {
            initial
        };
        self.from = from;
        self.started = Some(now);
        self.duration = Self::duration_for_speed(speed_setting);
        self.phase = TransformPhase::InProgress;
        log::debug!(
            "transform started: from ({:.2}, {:.2}) over {:?}",
            from.depth,
            from.lateral,
            self.duration
        );
    }

    /// Raw progress fraction in [0, 1] (before easing).
    #[must_use]
    pub fn progress_fraction(&self, now: Instant) -> f32 {
        match (self.phase, self.started) {
            (TransformPhase::NotStarted, _) | (_, None) => 0.0,
            (TransformPhase::Complete, _) => 1.0,
            (TransformPhase::InProgress, Some(started)) => {
                let elapsed = now.saturating_duration_since(started);
                if self.duration.is_zero() {
                    return 1.0;
                }
                (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
            }
        }
    }

    /// Current offset sample. Monotonic from the start pose to exactly
    /// [`ArchOffset::ZERO`], never overshooting.
    #[must_use]
    pub fn sample(&self, now: Instant) -> ArchOffset {
        let eased = self.easing.evaluate(self.progress_fraction(now));
        self.from.lerp(ArchOffset::ZERO, eased)
    }

    /// Advance phase bookkeeping; returns the phase after the update.
    pub fn update(&mut self, now: Instant) -> TransformPhase {
        if self.phase == TransformPhase::InProgress
            && self.progress_fraction(now) >= 1.0
        {
            self.phase = TransformPhase::Complete;
            log::debug!("transform complete");
        }
        self.phase
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TransformPhase {
        self.phase
    }

    /// Whether a correction is currently in flight.
    #[must_use]
    pub fn is_transforming(&self) -> bool {
        self.phase == TransformPhase::InProgress
    }

    /// Return to the idle state (selection/variant change).
    pub fn reset(&mut self) {
        self.phase = TransformPhase::NotStarted;
        self.from = ArchOffset::ZERO;
        self.started = None;
    }
}

impl Default for TransformAnimator {
    fn default() -> Self {
        Self::new()
    }
}
