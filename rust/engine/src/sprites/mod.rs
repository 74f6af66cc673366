// rust/engine/src/sprites/mod.rs
#![forbid(unsafe_code)]

mod constants;
mod glyphs;
mod header;
mod pieces;
mod raster;
mod resolve;
mod styles;

/**
 * Glyph sheet, style tables and the resolver that maps a piece cell to a glyph.
 *
 * Callers decode a `VisualStyle` into a `StyleTable` once and resolve cells
 * against it; table offsets and rotation math are exposed for tooling.
 */
pub use constants::{
    BYTES_PER_GLYPH, CELLS_PER_PIECE, GLYPH_COUNT, GLYPH_H, GLYPH_W, ORIENTATION_COUNT,
    ROTATION_FAMILY_START, ROTATION_MASK, SHAPE_COUNT, SPRITE_HEADER, SPRITE_HEADER_LEN,
    STYLE_FORMAT_BITS, STYLE_FORMAT_MASK, STYLE_HEADER_LEN,
};
pub use glyphs::{
    BEVELLED_FAMILIES, BLOCK_SPRITES, Glyph, edge_midpoints, family_is_bitmap_turn,
    family_rotates_clockwise, glyph_bitmap, glyph_bitmap_by_id, glyph_rows, turn_rows_cw,
};
pub use header::{
    StyleFormat, StyleHeader, decode_header, encode_single_glyph_header,
    encode_single_glyph_header_id, encode_table_header,
};
pub use pieces::{Kind, Orientation, cells};
pub use raster::{PIECE_BOX, PIECE_PX_H, PIECE_PX_W, PieceBitmap, rasterize};
pub use resolve::{per_cell_offset, per_orientation_offset, resolve, rotate_glyph_id};
pub use styles::{STYLE_COUNT, StyleTable, VisualStyle};
