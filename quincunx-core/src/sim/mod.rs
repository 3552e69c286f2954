//! Galton board simulation
//!
//! A fixed pool of balls advances one column per frame tick. Each ball is
//! randomly deflected up or down as it crosses the virtual pin levels and,
//! on reaching the final column, lands in the per-row tally that the
//! simulation view renders as right-justified stack bars.

pub mod ball;
pub mod board;
pub mod tally;

pub use ball::Ball;
pub use board::{GaltonBoard, MAX_BALLS};
pub use tally::LandingTally;
