// rust/engine/src/lib.rs
#![forbid(unsafe_code)]

pub mod error;
pub mod sprites;

pub use error::{SpriteError, SpriteResult};
pub use sprites::{
    BLOCK_SPRITES, CELLS_PER_PIECE, GLYPH_COUNT, Glyph, Kind, ORIENTATION_COUNT, Orientation,
    PieceBitmap, SHAPE_COUNT, StyleFormat, StyleHeader, StyleTable, VisualStyle, cells,
    decode_header, encode_single_glyph_header, glyph_bitmap, rasterize, resolve,
};
