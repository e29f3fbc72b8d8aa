use std::time::Duration;

/// Get tick duration for the configured interval
pub fn tick_duration(tick_ms: u64) -> Duration {
    Duration::from_millis(tick_ms.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        assert_eq!(tick_duration(250), Duration::from_millis(250));
        assert_eq!(tick_duration(0), Duration::from_millis(1));
    }
}
