//! Scoring - flat per-line award
//!
//! One settle event awards points for the rows it completed; there is no
//! combo, level, or drop bonus in this ruleset.

/// Points per cleared row
pub const POINTS_PER_LINE: u32 = 10;

/// Score delta for clearing `lines` rows in a single settle event
pub fn line_clear_score(lines: usize) -> u32 {
    lines as u32 * POINTS_PER_LINE
}
