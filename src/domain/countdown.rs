use std::time::{Duration, Instant};

/// Visible phase countdown.
///
/// Remaining time is derived from the instant the countdown was last
/// resumed, so ticking more or less often never changes the result.
#[derive(Debug, Clone)]
pub struct Countdown {
    /// Full length of the current phase
    total: Duration,
    /// Remaining time as of `running_since` (or now, when paused)
    remaining: Duration,
    /// When the countdown was last started (not set while paused)
    running_since: Option<Instant>,
}

impl Countdown {
    pub fn new(total: Duration) -> Self {
        Self {
            total,
            remaining: total,
            running_since: None,
        }
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        match self.running_since {
            Some(since) => self
                .remaining
                .saturating_sub(now.saturating_duration_since(since)),
            None => self.remaining,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }

    /// Start or resume. An expired countdown starts over from the full length.
    pub fn start(&mut self, now: Instant) {
        if self.is_running() {
            return;
        }
        if self.remaining.is_zero() {
            self.remaining = self.total;
        }
        self.running_since = Some(now);
    }

    /// Pause and bank the time that has run since the last start
    pub fn pause(&mut self, now: Instant) {
        if self.is_running() {
            self.remaining = self.remaining(now);
            self.running_since = None;
        }
    }

    /// Toggle between running and paused
    pub fn toggle(&mut self, now: Instant) {
        if self.is_running() {
            self.pause(now);
        } else {
            self.start(now);
        }
    }

    /// Reset to a new full length, running or paused
    pub fn restart(&mut self, total: Duration, now: Instant, run: bool) {
        self.total = total;
        self.remaining = total;
        self.running_since = if run { Some(now) } else { None };
    }

    /// Returns true exactly once: on the first tick at or past the deadline
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_running() && self.is_expired(now) {
            self.remaining = Duration::ZERO;
            self.running_since = None;
            return true;
        }
        false
    }

    /// Fraction of the phase that has elapsed (0.0 to 1.0)
    pub fn progress_ratio(&self, now: Instant) -> f64 {
        let total = self.total.as_secs_f64();
        if total == 0.0 {
            return 1.0;
        }
        let elapsed = total - self.remaining(now).as_secs_f64();
        (elapsed / total).clamp(0.0, 1.0)
    }
}

/// Format a duration as "MM:SS", rounding partial seconds up
pub fn format_mm_ss(duration: Duration) -> String {
    let mut secs = duration.as_secs();
    if duration.subsec_nanos() > 0 {
        secs += 1;
    }
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
