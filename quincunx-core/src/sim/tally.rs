//! Landing tally
//!
//! Per-row counts of balls that completed their fall. The renderer draws
//! each row as a right-justified bar, so a count can never usefully exceed
//! the display width - increments past that cap are dropped. There is no
//! reset; the tally is monotone for the process lifetime.

use crate::framebuffer::{HEIGHT, WIDTH};

/// Maximum visual stack depth per row
pub const MAX_DEPTH: u8 = WIDTH as u8;

/// Saturating per-row landing counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingTally {
    depths: [u8; HEIGHT],
}

impl Default for LandingTally {
    fn default() -> Self {
        Self::new()
    }
}

impl LandingTally {
    /// Create an empty tally
    pub const fn new() -> Self {
        Self {
            depths: [0; HEIGHT],
        }
    }

    /// Record one landing on `row`
    ///
    /// Saturates at the display width; out-of-range rows are ignored.
    pub fn record(&mut self, row: u8) {
        if let Some(depth) = self.depths.get_mut(row as usize) {
            if *depth < MAX_DEPTH {
                *depth += 1;
            }
        }
    }

    /// Stack depth of one row (out-of-range rows read as empty)
    pub fn depth(&self, row: usize) -> u8 {
        self.depths.get(row).copied().unwrap_or(0)
    }

    /// Sum of all recorded landings (saturation drops excluded)
    pub fn total(&self) -> u32 {
        self.depths.iter().map(|&d| d as u32).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_accumulate_per_row() {
        let mut tally = LandingTally::new();
        tally.record(10);
        tally.record(10);
        tally.record(11);

        assert_eq!(tally.depth(10), 2);
        assert_eq!(tally.depth(11), 1);
        assert_eq!(tally.depth(12), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn depth_saturates_at_display_width() {
        let mut tally = LandingTally::new();
        for _ in 0..(MAX_DEPTH as u32 + 40) {
            tally.record(5);
        }
        assert_eq!(tally.depth(5), MAX_DEPTH);
        assert_eq!(tally.total(), MAX_DEPTH as u32);
    }

    #[test]
    fn out_of_range_rows_are_ignored() {
        let mut tally = LandingTally::new();
        tally.record(HEIGHT as u8);
        tally.record(u8::MAX);
        assert_eq!(tally.total(), 0);
    }
}
