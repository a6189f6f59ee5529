// Time module - injectable clock so document timestamps are testable

/// Source of unix-millisecond timestamps.
pub trait Clock: Send + Sync {
    fn unix_millis(&self) -> i64;
}

/// Wall clock backed by chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let first = clock.unix_millis();
        let second = clock.unix_millis();
        assert!(second >= first);
        // Sanity bound: after 2020-01-01.
        assert!(first > 1_577_836_800_000);
    }
}
