//! Button debounce
//!
//! Level-triggered sampling against a monotonic microsecond clock: a press
//! is reported only when the input reads pressed and the debounce window has
//! elapsed since the last reported press. A button held down re-fires once
//! per window. The caller owns the raw pin read (active-low on the board)
//! and the clock; this stays pure and host-testable.

/// Minimum time between reported presses, in microseconds (200 ms)
pub const DEBOUNCE_DELAY_US: u64 = 200 * 1000;

/// Debounce state for one button
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebouncedButton {
    last_press_us: u64,
}

impl DebouncedButton {
    /// Create a button with no press recorded
    ///
    /// Presses inside the first debounce window after boot are swallowed;
    /// nobody reaches the button that fast.
    pub const fn new() -> Self {
        Self { last_press_us: 0 }
    }

    /// Sample the button
    ///
    /// `pressed` is the already-inverted level read (true = held down),
    /// `now_us` the current monotonic clock. Returns true and records the
    /// timestamp only when this sample counts as a new press.
    pub fn poll(&mut self, pressed: bool, now_us: u64) -> bool {
        if now_us.wrapping_sub(self.last_press_us) > DEBOUNCE_DELAY_US && pressed {
            self.last_press_us = now_us;
            return true;
        }
        false
    }
}
