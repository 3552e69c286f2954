//! Bitmap font table
//!
//! 8x8 cells holding a 5x7 glyph, stored column-major with bit 0 as the top
//! row of the page, so a glyph can be blitted straight into a page-aligned
//! row of the framebuffer. Covers uppercase letters, digits and the colon;
//! everything else maps to the blank glyph at index 0.

/// Number of glyphs in the table
pub const GLYPH_COUNT: usize = 38;

/// Glyph bit patterns: blank, `A`-`Z`, `0`-`9`, `:`
pub static FONT_8X8: [[u8; 8]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // blank
    [0x00, 0x7E, 0x11, 0x11, 0x11, 0x7E, 0x00, 0x00], // A
    [0x00, 0x7F, 0x49, 0x49, 0x49, 0x36, 0x00, 0x00], // B
    [0x00, 0x3E, 0x41, 0x41, 0x41, 0x22, 0x00, 0x00], // C
    [0x00, 0x7F, 0x41, 0x41, 0x22, 0x1C, 0x00, 0x00], // D
    [0x00, 0x7F, 0x49, 0x49, 0x49, 0x41, 0x00, 0x00], // E
    [0x00, 0x7F, 0x09, 0x09, 0x09, 0x01, 0x00, 0x00], // F
    [0x00, 0x3E, 0x41, 0x49, 0x49, 0x7A, 0x00, 0x00], // G
    [0x00, 0x7F, 0x08, 0x08, 0x08, 0x7F, 0x00, 0x00], // H
    [0x00, 0x00, 0x41, 0x7F, 0x41, 0x00, 0x00, 0x00], // I
    [0x00, 0x20, 0x40, 0x41, 0x3F, 0x01, 0x00, 0x00], // J
    [0x00, 0x7F, 0x08, 0x14, 0x22, 0x41, 0x00, 0x00], // K
    [0x00, 0x7F, 0x40, 0x40, 0x40, 0x40, 0x00, 0x00], // L
    [0x00, 0x7F, 0x02, 0x0C, 0x02, 0x7F, 0x00, 0x00], // M
    [0x00, 0x7F, 0x04, 0x08, 0x10, 0x7F, 0x00, 0x00], // N
    [0x00, 0x3E, 0x41, 0x41, 0x41, 0x3E, 0x00, 0x00], // O
    [0x00, 0x7F, 0x09, 0x09, 0x09, 0x06, 0x00, 0x00], // P
    [0x00, 0x3E, 0x41, 0x51, 0x21, 0x5E, 0x00, 0x00], // Q
    [0x00, 0x7F, 0x09, 0x19, 0x29, 0x46, 0x00, 0x00], // R
    [0x00, 0x46, 0x49, 0x49, 0x49, 0x31, 0x00, 0x00], // S
    [0x00, 0x01, 0x01, 0x7F, 0x01, 0x01, 0x00, 0x00], // T
    [0x00, 0x3F, 0x40, 0x40, 0x40, 0x3F, 0x00, 0x00], // U
    [0x00, 0x1F, 0x20, 0x40, 0x20, 0x1F, 0x00, 0x00], // V
    [0x00, 0x3F, 0x40, 0x38, 0x40, 0x3F, 0x00, 0x00], // W
    [0x00, 0x63, 0x14, 0x08, 0x14, 0x63, 0x00, 0x00], // X
    [0x00, 0x07, 0x08, 0x70, 0x08, 0x07, 0x00, 0x00], // Y
    [0x00, 0x61, 0x51, 0x49, 0x45, 0x43, 0x00, 0x00], // Z
    [0x00, 0x3E, 0x51, 0x49, 0x45, 0x3E, 0x00, 0x00], // 0
    [0x00, 0x00, 0x42, 0x7F, 0x40, 0x00, 0x00, 0x00], // 1
    [0x00, 0x42, 0x61, 0x51, 0x49, 0x46, 0x00, 0x00], // 2
    [0x00, 0x21, 0x41, 0x45, 0x4B, 0x31, 0x00, 0x00], // 3
    [0x00, 0x18, 0x14, 0x12, 0x7F, 0x10, 0x00, 0x00], // 4
    [0x00, 0x27, 0x45, 0x45, 0x45, 0x39, 0x00, 0x00], // 5
    [0x00, 0x3C, 0x4A, 0x49, 0x49, 0x30, 0x00, 0x00], // 6
    [0x00, 0x01, 0x71, 0x09, 0x05, 0x03, 0x00, 0x00], // 7
    [0x00, 0x36, 0x49, 0x49, 0x49, 0x36, 0x00, 0x00], // 8
    [0x00, 0x06, 0x49, 0x49, 0x29, 0x1E, 0x00, 0x00], // 9
    [0x00, 0x00, 0x36, 0x36, 0x00, 0x00, 0x00, 0x00], // :
];

/// Look up the glyph for a character
///
/// Lowercase letters map to their uppercase glyphs; anything outside the
/// table renders as the blank glyph.
pub fn glyph(ch: char) -> &'static [u8; 8] {
    let ch = ch.to_ascii_uppercase();
    let index = match ch {
        'A'..='Z' => ch as usize - 'A' as usize + 1,
        '0'..='9' => ch as usize - '0' as usize + 27,
        ':' => 37,
        _ => 0,
    };
    &FONT_8X8[index]
}
