use std::time::SystemTime;
use std::time::UNIX_EPOCH;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Index of today's quote within a set of `count` quotes.
///
/// Quotes rotate in id order, one per calendar day (UTC), with no repeats
/// until the set is exhausted, then wrap. Deterministic: every process
/// replica picks the same quote on the same day.
pub fn daily_index(now: SystemTime, count: u64) -> u64 {
    debug_assert!(count > 0);
    let days = now
        .duration_since(UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs()
        / SECONDS_PER_DAY;
    days % count
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn day(n: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(n * SECONDS_PER_DAY + 3600)
    }

    #[test]
    fn stable_within_a_day() {
        let morning = day(20_000);
        let evening = day(20_000) + Duration::from_secs(20 * 3600);
        assert!(daily_index(morning, 7) == daily_index(evening, 7));
    }

    #[test]
    fn advances_across_days() {
        assert!(daily_index(day(10), 7) != daily_index(day(11), 7));
    }

    #[test]
    fn wraps_after_exhaustion() {
        assert!(daily_index(day(0), 3) == daily_index(day(3), 3));
    }

    #[test]
    fn single_quote_always_chosen() {
        assert!(daily_index(day(123), 1) == 0);
    }
}
