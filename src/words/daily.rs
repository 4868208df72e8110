//! Daily Puzzle Index
//!
//! Everyone playing the daily round on the same calendar day gets the same
//! answer. The day number is days since the Unix epoch minus a fixed launch
//! offset, wrapped into the answer table.

use chrono::Utc;

/// Days between the Unix epoch and the first daily puzzle.
const LAUNCH_DAY_OFFSET: i64 = 18797;

const SECONDS_PER_DAY: i64 = 86_400;

/// Daily answer index for the given Unix timestamp.
///
/// Days before launch clamp to index 0. The index passes through
/// unchanged while it still fits the table; only once it runs past
/// `count - 1` does it wrap, with `count - 1` as the divisor. The
/// boundary day therefore keeps the table's last index, and the wrapped
/// schedule restarts at 1, never revisiting index 0.
#[must_use]
pub fn daily_index_for(unix_secs: i64, answer_count: u32) -> u32 {
    if answer_count <= 1 {
        return 0;
    }
    let days = unix_secs / SECONDS_PER_DAY - LAUNCH_DAY_OFFSET;
    let last = i64::from(answer_count - 1);
    if days < 0 {
        0
    } else if days <= last {
        days as u32
    } else {
        (days % last) as u32
    }
}

/// Daily answer index for the current wall-clock day.
#[must_use]
pub fn daily_index_today(answer_count: u32) -> u32 {
    daily_index_for(Utc::now().timestamp(), answer_count)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_day_is_index_zero() {
        let launch = LAUNCH_DAY_OFFSET * SECONDS_PER_DAY;
        assert_eq!(daily_index_for(launch, 200), 0);
        // Any second of the launch day maps to the same index
        assert_eq!(daily_index_for(launch + 86_399, 200), 0);
    }

    #[test]
    fn index_advances_once_per_day() {
        let launch = LAUNCH_DAY_OFFSET * SECONDS_PER_DAY;
        assert_eq!(daily_index_for(launch + SECONDS_PER_DAY, 200), 1);
        assert_eq!(daily_index_for(launch + 10 * SECONDS_PER_DAY, 200), 10);
    }

    #[test]
    fn pre_launch_clamps_to_zero() {
        assert_eq!(daily_index_for(0, 200), 0);
        assert_eq!(daily_index_for((LAUNCH_DAY_OFFSET - 5) * SECONDS_PER_DAY, 200), 0);
    }

    #[test]
    fn boundary_day_keeps_the_last_index() {
        let launch = LAUNCH_DAY_OFFSET * SECONDS_PER_DAY;
        let count = 200u32;
        let boundary = launch + i64::from(count - 1) * SECONDS_PER_DAY;
        // Day count-1 still fits the table and must not wrap early
        assert_eq!(daily_index_for(boundary, count), 199);
    }

    #[test]
    fn index_wraps_past_count_minus_one() {
        let launch = LAUNCH_DAY_OFFSET * SECONDS_PER_DAY;
        let count = 200u32;
        let past = launch + i64::from(count) * SECONDS_PER_DAY;
        // 200 % 199 == 1: the wrapped schedule restarts at 1, not 0
        assert_eq!(daily_index_for(past, count), 1);
        assert_eq!(daily_index_for(past + SECONDS_PER_DAY, count), 2);
    }

    #[test]
    fn degenerate_tables() {
        assert_eq!(daily_index_for(i64::MAX / 2, 0), 0);
        assert_eq!(daily_index_for(i64::MAX / 2, 1), 0);
    }
}
