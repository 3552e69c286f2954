//! Per-ball physics
//!
//! A ball advances exactly one column per tick. While pin levels remain, the
//! first pin whose column has been reached or passed deflects the ball up or
//! down by one Bernoulli draw - at most one deflection per tick, even if the
//! ball overshot several pin columns. Vertical position is kept as a float
//! for smooth accumulation and only rounded to a pixel row when drawn or
//! landed.

use rand_core::RngCore;

use crate::config::SimParams;
use crate::framebuffer::{round_to_row, HEIGHT};

/// State of one ball slot
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ball {
    x: i32,
    y: f32,
    pin_level: u8,
    active: bool,
}

impl Ball {
    /// An unused slot; created at boot, recycled after landing
    pub const fn inactive() -> Self {
        Self {
            x: 0,
            y: 0.0,
            pin_level: 0,
            active: false,
        }
    }

    /// A freshly dropped ball at the board's start position
    pub fn released(params: &SimParams) -> Self {
        Self {
            x: params.start_x,
            y: params.start_y as f32,
            pin_level: 0,
            active: true,
        }
    }

    /// Current column
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Current sub-pixel vertical position
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Next pin level this ball will cross (0-based)
    pub fn pin_level(&self) -> u8 {
        self.pin_level
    }

    /// Whether the ball is mid-flight
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance the ball by one frame tick
    ///
    /// No-op on inactive slots. Returns the landing row when the ball
    /// reaches the final column and comes to rest this tick.
    pub fn advance<R: RngCore>(&mut self, params: &SimParams, rng: &mut R) -> Option<u8> {
        if !self.active {
            return None;
        }

        self.x += 1;

        if self.pin_level < params.num_pin_levels {
            let pin_x = params.pin_start_x + self.pin_level as i32 * params.pin_x_increment;
            if self.x >= pin_x {
                let down = rng.next_u32() % 100 < params.down_percent;
                let deflection = if down {
                    params.vertical_deflection
                } else {
                    -params.vertical_deflection
                };
                self.y += deflection;

                if self.y < 0.0 {
                    self.y = 0.0;
                }
                if self.y >= HEIGHT as f32 {
                    self.y = (HEIGHT - 1) as f32;
                }

                self.pin_level += 1;
            }
        }

        if self.x >= params.final_x {
            self.x = params.final_x;
            self.active = false;
            return Some(round_to_row(self.y));
        }

        None
    }
}
