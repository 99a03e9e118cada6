#![forbid(unsafe_code)]

//! Repeating poll timer.
//!
//! Provides [`PollTimer`], a repeating interval timer with explicit
//! start/stop lifecycle for components that poll (order status refresh, OTP
//! resend countdowns). The timer never touches a clock or spawns threads;
//! the host loop feeds it elapsed time via [`PollTimer::tick`] and acts on
//! the returned fire count. Components stop the timer on unmount.
//!
//! # Example
//!
//! ```rust
//! use storegrid_core::poll::PollTimer;
//! use std::time::Duration;
//!
//! let mut timer = PollTimer::new(Duration::from_secs(30));
//! timer.start();
//!
//! assert_eq!(timer.tick(Duration::from_secs(29)), 0);
//! assert_eq!(timer.tick(Duration::from_secs(2)), 1); // fires once, carries 1s
//! assert_eq!(timer.tick(Duration::from_secs(89)), 3);
//! ```

use std::time::Duration;

/// A repeating interval timer driven by explicit ticks.
#[derive(Debug, Clone)]
pub struct PollTimer {
    interval: Duration,
    accumulated: Duration,
    running: bool,
}

impl PollTimer {
    /// Creates a timer with the given interval, initially stopped.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
            running: false,
        }
    }

    /// Returns the firing interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns whether the timer is currently running.
    #[must_use]
    pub const fn running(&self) -> bool {
        self.running
    }

    /// Time remaining until the next fire, assuming the timer keeps running.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.accumulated)
    }

    /// Starts the timer.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stops (pauses) the timer. Accumulated time is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Toggles between running and stopped.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Discards accumulated time. Does not change running state.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }

    /// Sets a new interval and discards accumulated time.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
        self.accumulated = Duration::ZERO;
    }

    /// Advances the timer by `delta` and returns how many intervals fired.
    ///
    /// Returns 0 when stopped or when the interval is zero. Time beyond the
    /// last fire is carried over into the next tick.
    pub fn tick(&mut self, delta: Duration) -> u32 {
        if !self.running || self.interval.is_zero() {
            return 0;
        }
        self.accumulated = self.accumulated.saturating_add(delta);
        if self.accumulated < self.interval {
            return 0;
        }
        let interval = self.interval.as_nanos();
        let fires = self.accumulated.as_nanos() / interval;
        let carry = self.accumulated.as_nanos() % interval;
        // Carry fits in u64 nanos because it is strictly below the interval.
        self.accumulated = Duration::from_nanos(carry as u64);
        u32::try_from(fires).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_timer_never_fires() {
        let mut timer = PollTimer::new(Duration::from_secs(1));
        assert_eq!(timer.tick(Duration::from_secs(100)), 0);
        assert!(!timer.running());
    }

    #[test]
    fn fires_once_per_interval() {
        let mut timer = PollTimer::new(Duration::from_secs(10));
        timer.start();
        assert_eq!(timer.tick(Duration::from_secs(9)), 0);
        assert_eq!(timer.tick(Duration::from_secs(1)), 1);
        assert_eq!(timer.tick(Duration::from_secs(10)), 1);
    }

    #[test]
    fn large_delta_fires_multiple_times_with_carry() {
        let mut timer = PollTimer::new(Duration::from_secs(10));
        timer.start();
        assert_eq!(timer.tick(Duration::from_secs(35)), 3);
        assert_eq!(timer.remaining(), Duration::from_secs(5));
        assert_eq!(timer.tick(Duration::from_secs(5)), 1);
    }

    #[test]
    fn stop_pauses_and_keeps_accumulated_time() {
        let mut timer = PollTimer::new(Duration::from_secs(10));
        timer.start();
        timer.tick(Duration::from_secs(7));
        timer.stop();
        assert_eq!(timer.tick(Duration::from_secs(100)), 0);
        timer.start();
        assert_eq!(timer.tick(Duration::from_secs(3)), 1);
    }

    #[test]
    fn reset_discards_progress() {
        let mut timer = PollTimer::new(Duration::from_secs(10));
        timer.start();
        timer.tick(Duration::from_secs(9));
        timer.reset();
        assert_eq!(timer.tick(Duration::from_secs(9)), 0);
    }

    #[test]
    fn set_interval_restarts_accumulation() {
        let mut timer = PollTimer::new(Duration::from_secs(10));
        timer.start();
        timer.tick(Duration::from_secs(9));
        timer.set_interval(Duration::from_secs(5));
        assert_eq!(timer.interval(), Duration::from_secs(5));
        assert_eq!(timer.tick(Duration::from_secs(4)), 0);
        assert_eq!(timer.tick(Duration::from_secs(1)), 1);
    }

    #[test]
    fn zero_interval_is_inert() {
        let mut timer = PollTimer::new(Duration::ZERO);
        timer.start();
        assert_eq!(timer.tick(Duration::from_secs(1)), 0);
    }

    #[test]
    fn toggle_flips_running_state() {
        let mut timer = PollTimer::new(Duration::from_secs(1));
        timer.toggle();
        assert!(timer.running());
        timer.toggle();
        assert!(!timer.running());
    }
}
