//! Scoring module - line-clear points, levels and gravity speed
//!
//! Points are a flat table with no level multiplier. Level is derived from
//! cumulative lines and never stored independently.

use tracing::warn;

use crate::types::{
    BASE_GRAVITY_MS, GRAVITY_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_GRAVITY_MS,
};

/// Points for clearing `lines` rows in one lock.
///
/// A single lock can complete at most four rows; anything larger scores 0.
pub fn score_for(lines: usize) -> u32 {
    match LINE_SCORES.get(lines) {
        Some(&points) => points,
        None => {
            warn!(lines, "line count outside scoring table");
            0
        }
    }
}

/// Level for a cumulative line total (1-based).
pub fn level_for(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval in milliseconds for a level.
///
/// This is host policy: the engine itself never reads a clock.
pub fn gravity_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(GRAVITY_STEP_MS);
    BASE_GRAVITY_MS
        .saturating_sub(speedup)
        .max(MIN_GRAVITY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores() {
        assert_eq!(score_for(0), 0);
        assert_eq!(score_for(1), 100);
        assert_eq!(score_for(2), 300);
        assert_eq!(score_for(3), 500);
        assert_eq!(score_for(4), 800);
    }

    #[test]
    fn test_out_of_table_scores_nothing() {
        assert_eq!(score_for(5), 0);
        assert_eq!(score_for(20), 0);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(level_for(0), 1);
        assert_eq!(level_for(9), 1);
        assert_eq!(level_for(10), 2);
        assert_eq!(level_for(29), 3);
        assert_eq!(level_for(100), 11);
    }

    #[test]
    fn test_gravity_intervals() {
        assert_eq!(gravity_interval_ms(1), 800);
        assert_eq!(gravity_interval_ms(2), 740);
        assert_eq!(gravity_interval_ms(5), 560);
        assert_eq!(gravity_interval_ms(10), 260);
        assert_eq!(gravity_interval_ms(11), 200);
        assert_eq!(gravity_interval_ms(50), 200);
        assert_eq!(gravity_interval_ms(u32::MAX), 200);
    }

    #[test]
    fn test_level_zero_is_treated_as_first_level() {
        assert_eq!(gravity_interval_ms(0), 800);
    }
}
