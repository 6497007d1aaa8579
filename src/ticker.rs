use std::time::Duration;

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 100;

/// How long a notice banner stays on screen, in milliseconds
pub const NOTICE_MS: u64 = 3000;

/// How long a deleted row lingers while fading, in milliseconds
pub const FADE_MS: u64 = 300;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Get notice lifetime
pub fn notice_duration() -> Duration {
    Duration::from_millis(NOTICE_MS)
}

/// Get fading-row lifetime
pub fn fade_duration() -> Duration {
    Duration::from_millis(FADE_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(100));
    }

    #[test]
    fn test_notice_outlives_fade() {
        assert!(notice_duration() > fade_duration());
    }
}
