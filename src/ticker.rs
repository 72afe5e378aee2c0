use std::time::Duration;

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Get tick duration
pub fn tick_duration(tick_ms: u64) -> Duration {
    Duration::from_millis(tick_ms)
}

/// Time left until the next tick is due, given when the last one ran
pub fn poll_timeout(tick_rate: Duration, since_last_tick: Duration) -> Duration {
    tick_rate.saturating_sub(since_last_tick)
}
