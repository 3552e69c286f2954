//! Quincunx - Galton board simulator firmware
//!
//! Firmware for the BitDogLab (RP2040): a Galton board simulation rendered
//! live on the onboard 128x64 SSD1306 OLED. Button A drops a ball, button B
//! toggles between the live board and the total-dropped tally screen.
//!
//! Everything runs on a single cooperative loop at a fixed frame cadence;
//! the frame ticker is the only suspension point.

#![no_std]
#![no_main]

mod ssd1306;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::{Duration, Instant, Ticker, Timer};
use rand_core::SeedableRng;
use rand_pcg::Pcg32;
use {defmt_rtt as _, panic_probe as _};

use quincunx_core::config::SimParams;
use quincunx_core::framebuffer::Framebuffer;
use quincunx_core::input::DebouncedButton;
use quincunx_core::sim::GaltonBoard;
use quincunx_core::view::{self, View};

use crate::ssd1306::Ssd1306;

bind_interrupts!(struct Irqs {
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

/// Frame interval in milliseconds; drives the animation speed
const FRAME_INTERVAL_MS: u64 = 20;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Quincunx firmware starting...");

    let p = embassy_rp::init(Default::default());

    // OLED on I2C1 (GPIO14 = SDA, GPIO15 = SCL)
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c::Config::default());
    let mut display = Ssd1306::new(i2c);

    if display.init().await.is_err() {
        // No display means nothing to show; park here for good
        error!("Display initialization failed, halting");
        loop {
            Timer::after_secs(1).await;
        }
    }
    info!("OLED initialized");

    // Buttons are active-low with internal pull-ups
    let drop_pin = Input::new(p.PIN_6, Pull::Up);
    let switch_pin = Input::new(p.PIN_5, Pull::Up);
    let mut drop_button = DebouncedButton::new();
    let mut switch_button = DebouncedButton::new();

    // Seed the deflection source once from the uptime clock
    let mut rng = Pcg32::seed_from_u64(Instant::now().as_micros());

    let mut board = GaltonBoard::new(SimParams::default());
    let mut current_view = View::default();
    let mut fb = Framebuffer::new();

    let mut ticker = Ticker::every(Duration::from_millis(FRAME_INTERVAL_MS));
    info!("Entering main loop");

    loop {
        let now_us = Instant::now().as_micros();

        if switch_button.poll(switch_pin.is_low(), now_us) {
            current_view = current_view.toggled();
            debug!("Switched to {:?}", current_view);
        }

        match current_view {
            View::Simulation => {
                if drop_button.poll(drop_pin.is_low(), now_us) {
                    board.spawn();
                    debug!("Ball dropped, {} in flight", board.active_count());
                }
                board.tick_all(&mut rng);
                view::draw_simulation(&mut fb, &board);
            }
            View::Tally => {
                // No simulation state changes on this screen
                view::draw_tally(&mut fb, board.total_dropped());
            }
        }

        if display.flush(fb.as_bytes()).await.is_err() {
            warn!("Display flush failed");
        }

        ticker.next().await;
    }
}
