//! Scoring and speed curves - plain table lookups.

use crate::types::{
    DROP_INTERVALS, DROP_INTERVAL_FLOOR_MS, HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_SCORES,
    SOFT_DROP_POINTS,
};

/// Points for clearing `lines` rows at once on `level` (0-based).
///
/// Clears larger than four rows can only come from hand-built boards; they
/// score as a four-row clear.
pub fn line_score(lines: usize, level: u32) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)].saturating_mul(level.saturating_add(1))
}

/// Level reached after `total_lines` cleared lines.
pub fn level_for_lines(start_level: u32, total_lines: u32) -> u32 {
    start_level.saturating_add(total_lines / LINES_PER_LEVEL)
}

/// Gravity interval for a level (milliseconds per row).
pub fn drop_interval_ms(level: u32) -> u32 {
    DROP_INTERVALS
        .get(level as usize)
        .copied()
        .unwrap_or(DROP_INTERVAL_FLOOR_MS)
}

/// Points for dropping a piece `cells` rows by hand.
pub fn drop_score(cells: u32, hard: bool) -> u32 {
    let per_cell = if hard {
        HARD_DROP_POINTS
    } else {
        SOFT_DROP_POINTS
    };
    cells.saturating_mul(per_cell)
}
