// rust/engine/src/sprites/resolve.rs
#![forbid(unsafe_code)]

use tracing::warn;

use crate::error::{SpriteError, SpriteResult};
use crate::sprites::constants::{
    CELLS_PER_PIECE, ORIENTATION_COUNT, ROTATION_MASK, STYLE_HEADER_LEN,
};
use crate::sprites::glyphs::Glyph;
use crate::sprites::header::StyleFormat;
use crate::sprites::pieces::{Kind, Orientation};
use crate::sprites::styles::{StyleTable, VisualStyle};

/// Turn a raw glyph id by `orientation` quarter turns inside its rotation family.
///
/// The upper six bits (family) are kept; the low two bits cycle clockwise.
#[inline]
pub const fn rotate_glyph_id(raw: u8, orientation: Orientation) -> u8 {
    (raw & !ROTATION_MASK) | (raw.wrapping_add(orientation.index() as u8) & ROTATION_MASK)
}

/// Byte offset of (kind, cell) in a per-cell table.
#[inline]
pub const fn per_cell_offset(kind: Kind, cell: usize) -> usize {
    STYLE_HEADER_LEN + CELLS_PER_PIECE * kind.index() + cell
}

/// Byte offset of (kind, orientation, cell) in a per-orientation table.
#[inline]
pub const fn per_orientation_offset(kind: Kind, orientation: Orientation, cell: usize) -> usize {
    STYLE_HEADER_LEN
        + CELLS_PER_PIECE * ORIENTATION_COUNT * kind.index()
        + CELLS_PER_PIECE * orientation.index()
        + cell
}

impl StyleTable<'_> {
    /// Glyph to draw for cell `cell` of `kind` at `orientation`.
    ///
    /// Errors:
    /// - `CellIndexOutOfRange` when `cell >= 4`, for every format
    /// - `UnsupportedFormat` for the reserved per-cell-no-rotation tag
    pub fn resolve(
        &self,
        kind: Kind,
        orientation: Orientation,
        cell: usize,
    ) -> SpriteResult<Glyph> {
        if cell >= CELLS_PER_PIECE {
            return Err(SpriteError::CellIndexOutOfRange { cell });
        }

        let id = match *self {
            StyleTable::SingleGlyph(glyph) => return Ok(glyph),
            StyleTable::PerCellWithRotation(data) => {
                let raw = read_glyph_byte(data, per_cell_offset(kind, cell))?;
                rotate_glyph_id(raw, orientation)
            }
            StyleTable::PerOrientationAndCell(data) => {
                read_glyph_byte(data, per_orientation_offset(kind, orientation, cell))?
            }
            StyleTable::Unsupported(format) => {
                warn!(?format, "resolve on unsupported style format");
                return Err(SpriteError::UnsupportedFormat { format });
            }
        };

        Glyph::from_id(id).ok_or(SpriteError::GlyphIdOutOfRange { id })
    }

    /// All four cells of `kind` at `orientation`, in cell order.
    pub fn resolve_piece(
        &self,
        kind: Kind,
        orientation: Orientation,
    ) -> SpriteResult<[Glyph; CELLS_PER_PIECE]> {
        let mut out = [Glyph::EMPTY; CELLS_PER_PIECE];
        for (cell, slot) in out.iter_mut().enumerate() {
            *slot = self.resolve(kind, orientation, cell)?;
        }
        Ok(out)
    }
}

// Tables are length-checked on decode; this only guards hand-built variants.
fn read_glyph_byte(data: &[u8], offset: usize) -> SpriteResult<u8> {
    data.get(offset).copied().ok_or_else(|| {
        let format = StyleFormat::from_bits(data.first().copied().unwrap_or_default());
        SpriteError::TableLength {
            format,
            expected: format.table_len().unwrap_or(offset + 1),
            actual: data.len(),
        }
    })
}

/// One-shot lookup: decode `style`'s table and resolve a single cell.
///
/// Callers drawing many cells should decode once with `VisualStyle::table()`
/// and call `StyleTable::resolve` instead.
pub fn resolve(
    style: VisualStyle,
    kind: Kind,
    orientation: Orientation,
    cell: usize,
) -> SpriteResult<Glyph> {
    style.table()?.resolve(kind, orientation, cell)
}
