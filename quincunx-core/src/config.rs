//! Simulation parameters
//!
//! All tuning is compile-time: the firmware builds one `SimParams` and never
//! changes it. Tests construct custom parameter sets to pin down exact
//! trajectories.

use crate::framebuffer::{HEIGHT, WIDTH};

/// Parameters of the simulated board
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimParams {
    /// Column where newly dropped balls appear
    pub start_x: i32,
    /// Row where newly dropped balls appear (vertical center of the display)
    pub start_y: i32,
    /// Column where balls come to rest
    pub final_x: i32,
    /// Vertical displacement applied per pin crossing, in pixels
    pub vertical_deflection: f32,
    /// Chance (0-100) that a deflection goes downward (larger y)
    pub down_percent: u32,
    /// Column of the first virtual pin
    pub pin_start_x: i32,
    /// Number of pin levels a ball passes on its way across
    pub num_pin_levels: u8,
    /// Horizontal spacing between consecutive pin levels
    pub pin_x_increment: i32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            start_x: 0,
            start_y: (HEIGHT / 2) as i32,
            final_x: (WIDTH - 1) as i32,
            vertical_deflection: 3.0,
            down_percent: 50,
            pin_start_x: 10,
            num_pin_levels: 11,
            pin_x_increment: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_display_geometry() {
        let params = SimParams::default();
        assert_eq!(params.start_y, 32);
        assert_eq!(params.final_x, 127);
        // Last pin sits well inside the display
        let last_pin_x =
            params.pin_start_x + (params.num_pin_levels as i32 - 1) * params.pin_x_increment;
        assert!(last_pin_x < params.final_x);
    }
}
