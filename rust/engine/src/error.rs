// rust/engine/src/error.rs
#![forbid(unsafe_code)]

use thiserror::Error;

use crate::sprites::StyleFormat;

/// Every failure the sprite engine can report.
///
/// Misuse (bad cell index, foreign table bytes, unimplemented format) is
/// reported the same way in debug and release builds.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SpriteError {
    #[error("cell index {cell} out of range (pieces have 4 cells)")]
    CellIndexOutOfRange { cell: usize },

    #[error("glyph id {id:#04x} out of range (catalog holds 64 glyphs)")]
    GlyphIdOutOfRange { id: u8 },

    #[error("shape index {index} out of range (7 piece shapes)")]
    ShapeIndexOutOfRange { index: usize },

    #[error("orientation {index} out of range (4 orientations)")]
    OrientationOutOfRange { index: usize },

    #[error("style format {format:?} is not supported")]
    UnsupportedFormat { format: StyleFormat },

    #[error("{format:?} table must be {expected} bytes, got {actual}")]
    TableLength {
        format: StyleFormat,
        expected: usize,
        actual: usize,
    },

    #[error("style table is empty (missing header byte)")]
    EmptyTable,

    #[error("unknown visual style '{name}'")]
    UnknownStyle { name: String },

    #[error("unknown piece '{name}' (expected one of I, O, T, S, Z, J, L)")]
    UnknownPiece { name: String },
}

pub type SpriteResult<T> = Result<T, SpriteError>;
