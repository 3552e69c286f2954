//! Screen views
//!
//! Two screens share the display: the live simulation and the total-dropped
//! tally. The switch button toggles between them unconditionally; there is
//! no terminal state. Renderers paint a full frame into the framebuffer and
//! leave flushing to the caller.

use core::fmt::Write;

use heapless::String;

use crate::framebuffer::{round_to_row, Framebuffer, GLYPH_WIDTH, HEIGHT, WIDTH};
use crate::sim::GaltonBoard;

/// Which screen is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum View {
    /// Live board: falling balls plus the landed stacks
    #[default]
    Simulation,
    /// Total-dropped counter as text
    Tally,
}

impl View {
    /// The other screen; a debounced switch press applies this
    pub fn toggled(self) -> Self {
        match self {
            View::Simulation => View::Tally,
            View::Tally => View::Simulation,
        }
    }
}

/// Paint the simulation view: landed stacks and in-flight balls
pub fn draw_simulation(fb: &mut Framebuffer, board: &GaltonBoard) {
    fb.clear();

    // Landed balls stack rightward-in from the final column
    for y in 0..HEIGHT {
        let depth = board.tally().depth(y) as i32;
        if depth > 0 {
            fb.draw_hline(WIDTH as i32 - depth, y as i32, depth, true);
        }
    }

    for ball in board.slots().iter().filter(|b| b.is_active()) {
        fb.set_pixel(ball.x(), round_to_row(ball.y()) as i32, true);
    }
}

/// Paint the tally view: the "TOTAL" label and the centered counter
pub fn draw_tally(fb: &mut Framebuffer, total_dropped: u32) {
    fb.clear();
    fb.draw_string(16, 16, "TOTAL");

    let mut text: String<10> = String::new();
    // u32 always fits in 10 digits
    let _ = write!(text, "{}", total_dropped);

    let text_width = (text.len() * GLYPH_WIDTH) as i32;
    let x = ((WIDTH as i32 - text_width) / 2).max(0);
    fb.draw_string(x, 32, &text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimParams;
    use crate::framebuffer::font;
    use rand_core::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn toggle_alternates_starting_from_simulation() {
        let view = View::default();
        assert_eq!(view, View::Simulation);
        assert_eq!(view.toggled(), View::Tally);
        assert_eq!(view.toggled().toggled(), View::Simulation);
    }

    #[test]
    fn tally_count_is_centered() {
        let mut fb = Framebuffer::new();
        draw_tally(&mut fb, 123);

        // "123" is 24 px wide: centered at x = (128 - 24) / 2 = 52, y = 32
        // (page 4)
        let page = 4 * WIDTH;
        assert_eq!(&fb.as_bytes()[page + 52..page + 60], font::glyph('1'));
        assert_eq!(&fb.as_bytes()[page + 60..page + 68], font::glyph('2'));
        assert_eq!(&fb.as_bytes()[page + 68..page + 76], font::glyph('3'));
        // Nothing left of the centered text
        assert!(fb.as_bytes()[page..page + 52].iter().all(|&b| b == 0));
    }

    #[test]
    fn tally_label_sits_on_page_two() {
        let mut fb = Framebuffer::new();
        draw_tally(&mut fb, 0);

        let page = 2 * WIDTH;
        assert_eq!(&fb.as_bytes()[page + 16..page + 24], font::glyph('T'));
        assert_eq!(&fb.as_bytes()[page + 48..page + 56], font::glyph('L'));
    }

    #[test]
    fn simulation_view_shows_stacks_right_justified() {
        let params = SimParams::default();
        let mut board = GaltonBoard::new(params);
        let mut rng = Pcg32::seed_from_u64(11);

        board.spawn();
        while board.active_count() > 0 {
            board.tick_all(&mut rng);
        }

        let mut fb = Framebuffer::new();
        draw_simulation(&mut fb, &board);

        // Exactly one landed ball: one pixel lit, in the final column
        let row = (0..HEIGHT).find(|&y| board.tally().depth(y) == 1).unwrap();
        assert!(fb.pixel(WIDTH as i32 - 1, row as i32));
        let lit: usize = (0..WIDTH as i32)
            .flat_map(|x| (0..HEIGHT as i32).map(move |y| (x, y)))
            .filter(|&(x, y)| fb.pixel(x, y))
            .count();
        assert_eq!(lit, 1);
    }

    #[test]
    fn simulation_view_shows_in_flight_balls() {
        let params = SimParams::default();
        let mut board = GaltonBoard::new(params);
        let mut rng = Pcg32::seed_from_u64(5);

        board.spawn();
        board.tick_all(&mut rng);

        let mut fb = Framebuffer::new();
        draw_simulation(&mut fb, &board);

        let ball = &board.slots()[0];
        assert!(ball.is_active());
        assert!(fb.pixel(ball.x(), round_to_row(ball.y()) as i32));
    }
}
