// rust/engine/src/sprites/header.rs
#![forbid(unsafe_code)]

use crate::error::{SpriteError, SpriteResult};
use crate::sprites::constants::{
    CELLS_PER_PIECE, GLYPH_COUNT, ORIENTATION_COUNT, SHAPE_COUNT, STYLE_FORMAT_BITS,
    STYLE_FORMAT_MASK, STYLE_HEADER_LEN,
};
use crate::sprites::glyphs::Glyph;

/// Format tag stored in bits [0:1] of a style table's first byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StyleFormat {
    /// Whole piece drawn with the glyph packed into the header byte.
    SingleGlyph = 0,
    /// Reserved tag; no style uses it.
    PerCellNoRotation = 1,
    /// One glyph per (shape, cell); orientation is added to the glyph's low bits.
    PerCellWithRotation = 2,
    /// One glyph per (shape, orientation, cell), used as-is.
    PerOrientationAndCell = 3,
}

impl StyleFormat {
    /// Decode the two tag bits. Upper bits are ignored.
    #[inline]
    pub const fn from_bits(byte: u8) -> Self {
        match byte & STYLE_FORMAT_MASK {
            0 => StyleFormat::SingleGlyph,
            1 => StyleFormat::PerCellNoRotation,
            2 => StyleFormat::PerCellWithRotation,
            _ => StyleFormat::PerOrientationAndCell,
        }
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Exact byte length of a table in this format, header included.
    /// None for the reserved format.
    pub const fn table_len(self) -> Option<usize> {
        match self {
            StyleFormat::SingleGlyph => Some(STYLE_HEADER_LEN),
            StyleFormat::PerCellNoRotation => None,
            StyleFormat::PerCellWithRotation => {
                Some(STYLE_HEADER_LEN + CELLS_PER_PIECE * SHAPE_COUNT)
            }
            StyleFormat::PerOrientationAndCell => {
                Some(STYLE_HEADER_LEN + CELLS_PER_PIECE * ORIENTATION_COUNT * SHAPE_COUNT)
            }
        }
    }
}

/// Decoded first byte of a style table.
///
/// `payload` is the raw bits [2:7]; it only names a glyph when
/// `format == SingleGlyph`. Use `single_glyph()` rather than reading it directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleHeader {
    pub format: StyleFormat,
    pub payload: u8,
}

impl StyleHeader {
    pub const fn single_glyph(self) -> Option<Glyph> {
        match self.format {
            StyleFormat::SingleGlyph => Glyph::from_id(self.payload),
            _ => None,
        }
    }
}

/// Pack `glyph` into a single-glyph style header.
#[inline]
pub const fn encode_single_glyph_header(glyph: Glyph) -> u8 {
    StyleFormat::SingleGlyph.bits() | (glyph.id() << STYLE_FORMAT_BITS)
}

/// Checked variant of `encode_single_glyph_header` for raw ids.
pub fn encode_single_glyph_header_id(id: u8) -> SpriteResult<u8> {
    if id as usize >= GLYPH_COUNT {
        return Err(SpriteError::GlyphIdOutOfRange { id });
    }
    Ok(StyleFormat::SingleGlyph.bits() | (id << STYLE_FORMAT_BITS))
}

/// Header byte for table formats that carry no immediate payload.
#[inline]
pub const fn encode_table_header(format: StyleFormat) -> u8 {
    format.bits()
}

/// Split a header byte into its format tag and payload bits.
#[inline]
pub const fn decode_header(byte: u8) -> StyleHeader {
    StyleHeader {
        format: StyleFormat::from_bits(byte),
        payload: byte >> STYLE_FORMAT_BITS,
    }
}
