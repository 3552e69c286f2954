//! Monochrome page-organized framebuffer
//!
//! One bit per pixel, bits for a column grouped into 8-row pages the way the
//! SSD1306 lays out its display RAM. The buffer is an owned fixed-size array,
//! so construction cannot fail and `flush` never sees a missing buffer.
//!
//! All pixel operations are best-effort: out-of-range coordinates are
//! silently ignored rather than reported.

pub mod font;

/// Display width in pixels
pub const WIDTH: usize = 128;

/// Display height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// Width of one font glyph in pixels
pub const GLYPH_WIDTH: usize = 8;

/// Total buffer size in bytes
pub const BUFFER_LEN: usize = WIDTH * PAGES;

/// Round a sub-pixel vertical position to a display row
///
/// Half-up rounding, clamped into `0..HEIGHT`. Shared by ball landing,
/// ball rendering and any other float-to-pixel conversion so they all
/// agree on the same row.
pub fn round_to_row(y: f32) -> u8 {
    let row = (y + 0.5) as i32;
    row.clamp(0, HEIGHT as i32 - 1) as u8
}

/// Bit-packed frame buffer (page-major: `buf[page * WIDTH + x]`)
#[derive(Clone)]
pub struct Framebuffer {
    buf: [u8; BUFFER_LEN],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a new, all-dark framebuffer
    pub const fn new() -> Self {
        Self {
            buf: [0; BUFFER_LEN],
        }
    }

    /// Zero the buffer (takes effect on the display at the next flush)
    pub fn clear(&mut self) {
        self.buf.fill(0);
    }

    /// Set or clear a single pixel; out-of-range coordinates are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if x < 0 || x >= WIDTH as i32 || y < 0 || y >= HEIGHT as i32 {
            return;
        }

        let page = (y / 8) as usize;
        let byte_idx = page * WIDTH + x as usize;
        let bit = 1u8 << (y % 8);

        if on {
            self.buf[byte_idx] |= bit;
        } else {
            self.buf[byte_idx] &= !bit;
        }
    }

    /// Read a pixel back; out-of-range coordinates read as dark
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= WIDTH as i32 || y < 0 || y >= HEIGHT as i32 {
            return false;
        }

        let page = (y / 8) as usize;
        let byte_idx = page * WIDTH + x as usize;
        self.buf[byte_idx] & (1 << (y % 8)) != 0
    }

    /// Draw a vertical line; the off-screen portion is clipped
    pub fn draw_vline(&mut self, x: i32, y_start: i32, height: i32, on: bool) {
        if x < 0 || x >= WIDTH as i32 {
            return;
        }
        for y in y_start..y_start + height {
            self.set_pixel(x, y, on);
        }
    }

    /// Draw a horizontal line; the off-screen portion is clipped
    pub fn draw_hline(&mut self, x_start: i32, y: i32, width: i32, on: bool) {
        if y < 0 || y >= HEIGHT as i32 {
            return;
        }
        for x in x_start..x_start + width {
            self.set_pixel(x, y, on);
        }
    }

    /// Draw a string of 8x8 glyphs starting at `(x, y)`
    ///
    /// `y` must be page-aligned (a multiple of 8); otherwise this is a
    /// no-op. Drawing stops once fewer than 8 columns remain on the row -
    /// text never wraps. Characters outside the font render as blanks.
    pub fn draw_string(&mut self, x: i32, y: i32, text: &str) {
        if y < 0 || y % 8 != 0 {
            return;
        }

        let mut current_x = x;
        for ch in text.chars() {
            if current_x > (WIDTH - GLYPH_WIDTH) as i32 {
                break;
            }
            self.draw_char(current_x, y, ch);
            current_x += GLYPH_WIDTH as i32;
        }
    }

    /// Blit one glyph into the page at `(x, y)`; `y` must be page-aligned
    fn draw_char(&mut self, x: i32, y: i32, ch: char) {
        if x < 0
            || x > (WIDTH - GLYPH_WIDTH) as i32
            || y < 0
            || y > (HEIGHT - 8) as i32
            || y % 8 != 0
        {
            return;
        }

        let glyph = font::glyph(ch);
        let page = (y / 8) as usize;
        let start = page * WIDTH + x as usize;
        self.buf[start..start + GLYPH_WIDTH].copy_from_slice(glyph);
    }

    /// Raw page-major buffer contents, for transmission to the display
    pub fn as_bytes(&self) -> &[u8; BUFFER_LEN] {
        &self.buf
    }
}
