// rust/engine/src/sprites/raster.rs
#![forbid(unsafe_code)]

use crate::error::SpriteResult;
use crate::sprites::constants::{GLYPH_H, GLYPH_W};
use crate::sprites::glyphs::glyph_bitmap;
use crate::sprites::pieces::{Kind, Orientation, cells};
use crate::sprites::styles::StyleTable;

/// Cells per side of the largest rotation box (the I piece).
pub const PIECE_BOX: usize = 4;
pub const PIECE_PX_W: usize = PIECE_BOX * GLYPH_W;
pub const PIECE_PX_H: usize = PIECE_BOX * GLYPH_H;

/// Monochrome pixels of one piece inside its rotation box, row-major: px[y][x].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceBitmap {
    px: [[bool; PIECE_PX_W]; PIECE_PX_H],
    /// Side of the square, in cells, that covers every drawn cell.
    box_cells: usize,
}

impl PieceBitmap {
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.px
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    pub fn lit_count(&self) -> usize {
        self.px.iter().flatten().filter(|&&p| p).count()
    }

    /// Pixel rows covering the piece's own rotation box.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        let side = self.box_cells * GLYPH_W;
        self.px[..self.box_cells * GLYPH_H]
            .iter()
            .map(move |row| &row[..side])
    }

    /// `#` for lit pixels, `.` for dark ones, one line per pixel row.
    pub fn render_ascii(&self) -> String {
        let mut s = String::new();
        for row in self.rows() {
            s.extend(row.iter().map(|&p| if p { '#' } else { '.' }));
            s.push('\n');
        }
        s
    }
}

/// Resolve every cell of `kind` at `orientation` and blit the glyphs.
///
/// Cell (x, y) of the rotation box lands at pixel (3x, 3y).
pub fn rasterize(
    table: &StyleTable<'_>,
    kind: Kind,
    orientation: Orientation,
) -> SpriteResult<PieceBitmap> {
    let glyphs = table.resolve_piece(kind, orientation)?;
    let offsets = cells(kind, orientation);

    let mut px = [[false; PIECE_PX_W]; PIECE_PX_H];
    let mut side = 0usize;
    for (&(dx, dy), &glyph) in offsets.iter().zip(glyphs.iter()) {
        // Rotation boxes are at most 4x4; still guard bounds.
        if dx < 0 || dy < 0 || dx as usize >= PIECE_BOX || dy as usize >= PIECE_BOX {
            continue;
        }
        let (cx, cy) = (dx as usize, dy as usize);
        side = side.max(cx + 1).max(cy + 1);

        let bitmap = glyph_bitmap(glyph);
        for (r, bits) in bitmap.iter().enumerate() {
            for (c, &on) in bits.iter().enumerate() {
                px[cy * GLYPH_H + r][cx * GLYPH_W + c] = on;
            }
        }
    }

    Ok(PieceBitmap {
        px,
        box_cells: side,
    })
}
