use std::time::{Duration, Instant};

/// Time allowed to answer one question.
pub const COUNTDOWN_DURATION: Duration = Duration::from_millis(15_000);

/// How often the event loop wakes up to advance the countdown.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

const FULL_RGB: (u8, u8, u8) = (0x51, 0xcb, 0x00);
const EMPTY_RED: u8 = 0xff;

/// Handle to a running countdown.
///
/// Returned by [`Countdown::start`]. Once cancelled it never expires, so a
/// stale handle can't end a round that is already over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    started_at: Instant,
    duration: Duration,
    cancelled: bool,
}

impl Countdown {
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            started_at: now,
            duration,
            cancelled: false,
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_active(&self) -> bool {
        !self.cancelled
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.duration
            .saturating_sub(now.saturating_duration_since(self.started_at))
    }

    /// Remaining share of the duration, from 1.0 down to 0.0.
    pub fn fraction_remaining(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        self.remaining(now).as_secs_f64() / self.duration.as_secs_f64()
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.is_active() && self.remaining(now).is_zero()
    }
}

/// Bar colour for a remaining fraction: `#51cb00` when full, `#ff0000` when empty.
pub fn bar_color(fraction: f64) -> (u8, u8, u8) {
    let fraction = fraction.clamp(0.0, 1.0);
    let (full_red, full_green, blue) = FULL_RGB;

    let red = f64::from(full_red) + f64::from(EMPTY_RED - full_red) * (1.0 - fraction);
    let green = f64::from(full_green) * fraction;

    (red.round() as u8, green.round() as u8, blue)
}
