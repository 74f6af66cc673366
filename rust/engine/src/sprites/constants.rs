// rust/engine/src/sprites/constants.rs
#![forbid(unsafe_code)]

/// Glyphs are 3 pixels wide and 3 pixels tall.
pub const GLYPH_W: usize = 3;
pub const GLYPH_H: usize = 3;

/// One packed byte per pixel row.
pub const BYTES_PER_GLYPH: usize = GLYPH_H;

/// Declared `(width, height)` prefix of the packed sprite sheet.
pub const SPRITE_HEADER: [u8; 2] = [GLYPH_W as u8, 8];
pub const SPRITE_HEADER_LEN: usize = SPRITE_HEADER.len();

pub const GLYPH_COUNT: usize = 64;

pub const CELLS_PER_PIECE: usize = 4;
pub const ORIENTATION_COUNT: usize = 4;
pub const SHAPE_COUNT: usize = 7;

/**
 * Style header layout:
 * - bits [0:1] format tag
 * - bits [2:7] immediate glyph id (single-glyph styles only)
 */
pub const STYLE_FORMAT_BITS: u32 = 2;
pub const STYLE_FORMAT_MASK: u8 = (1 << STYLE_FORMAT_BITS) - 1;
pub const STYLE_HEADER_LEN: usize = 1;

/// Low two bits of a glyph id select the member of its rotation family.
pub const ROTATION_MASK: u8 = 0b11;

/// First id that belongs to a rotation family; everything below is a plain fill.
pub const ROTATION_FAMILY_START: u8 = 0x08;

// Glyph ids must fit beside the format tag in a single header byte.
const _: () = assert!(GLYPH_COUNT <= 1 << (8 - STYLE_FORMAT_BITS));
const _: () = assert!(ORIENTATION_COUNT == (ROTATION_MASK as usize) + 1);
