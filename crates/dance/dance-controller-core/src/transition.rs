//! Switch modes and the delayed pause that follows a cross-fade.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwitchMode {
    /// Snap to the next pose and stay paused.
    Instant,
    /// Cross-fade into the next pose, pausing once the fade has run.
    Smooth,
}

impl SwitchMode {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Instant => "instant",
            Self::Smooth => "smooth",
        }
    }
}

/// Countdown armed by a smooth switch. Cancelled by any later switch or start.
#[derive(Clone, Debug, PartialEq)]
pub struct SettleTimer {
    target: String,
    duration: Duration,
    elapsed: Duration,
}

impl SettleTimer {
    pub fn new(target: impl Into<String>, duration: Duration) -> Self {
        Self {
            target: target.into(),
            duration,
            elapsed: Duration::ZERO,
        }
    }

    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }

    /// Advance by `dt`; returns true once the full duration has passed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.is_finished()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
