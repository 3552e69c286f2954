//! Board-agnostic core logic for the Quincunx Galton board simulator
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Page-organized monochrome framebuffer with bitmap text rendering
//! - Ball physics across discretized pin levels
//! - Fixed-capacity ball pool with circular slot reuse
//! - Landing tally (the stacked-bar histogram data)
//! - Button debounce logic
//! - Two-screen view state machine and view renderers

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod framebuffer;
pub mod input;
pub mod sim;
pub mod view;
