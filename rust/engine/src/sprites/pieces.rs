// rust/engine/src/sprites/pieces.rs
#![forbid(unsafe_code)]

use std::fmt;

use crate::error::{SpriteError, SpriteResult};
use crate::sprites::constants::{CELLS_PER_PIECE, ORIENTATION_COUNT, SHAPE_COUNT};

/// Piece shapes, in the row order used by every per-piece style table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Kind {
    pub fn all() -> &'static [Kind] {
        use Kind::*;
        &[I, O, T, S, Z, J, L]
    }

    /// Strict 0..7 table row.
    #[inline]
    pub const fn index(self) -> usize {
        use Kind::*;
        match self {
            I => 0,
            O => 1,
            T => 2,
            S => 3,
            Z => 4,
            J => 5,
            L => 6,
        }
    }

    /// Inverse of `index()`.
    pub fn from_index(index: usize) -> SpriteResult<Self> {
        Kind::all()
            .get(index)
            .copied()
            .ok_or(SpriteError::ShapeIndexOutOfRange { index })
    }

    pub fn letter(self) -> char {
        use Kind::*;
        match self {
            I => 'I',
            O => 'O',
            T => 'T',
            S => 'S',
            Z => 'Z',
            J => 'J',
            L => 'L',
        }
    }

    pub fn from_letter(s: &str) -> SpriteResult<Self> {
        let mut chars = s.trim().chars();
        let found = match (chars.next(), chars.next()) {
            (Some(c), None) => Kind::all()
                .iter()
                .copied()
                .find(|k| k.letter() == c.to_ascii_uppercase()),
            _ => None,
        };
        found.ok_or_else(|| SpriteError::UnknownPiece { name: s.to_string() })
    }

    /// Side of the square box the piece rotates in.
    #[inline]
    fn box_size(self) -> i32 {
        match self {
            Kind::I => 4,
            Kind::O => 2,
            _ => 3,
        }
    }

    /// Spawn layout as (dx, dy) offsets inside the rotation box, y pointing down.
    fn spawn_cells(self) -> [(i32, i32); CELLS_PER_PIECE] {
        use Kind::*;
        match self {
            I => [(0, 1), (1, 1), (2, 1), (3, 1)],
            O => [(0, 0), (1, 0), (0, 1), (1, 1)],
            T => [(1, 0), (0, 1), (1, 1), (2, 1)],
            S => [(1, 0), (2, 0), (0, 1), (1, 1)],
            Z => [(0, 0), (1, 0), (1, 1), (2, 1)],
            J => [(0, 0), (0, 1), (1, 1), (2, 1)],
            L => [(2, 0), (0, 1), (1, 1), (2, 1)],
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

const _: () = assert!(Kind::L.index() + 1 == SHAPE_COUNT);

/// Rotation state of a piece, numbered clockwise from spawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Orientation {
    pub fn all() -> &'static [Orientation] {
        use Orientation::*;
        &[North, East, South, West]
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    pub fn from_index(index: usize) -> SpriteResult<Self> {
        Orientation::all()
            .get(index)
            .copied()
            .ok_or(SpriteError::OrientationOutOfRange { index })
    }

    pub fn rotate_cw(self) -> Self {
        Orientation::all()[(self.index() + 1) % ORIENTATION_COUNT]
    }

    pub fn rotate_ccw(self) -> Self {
        Orientation::all()[(self.index() + ORIENTATION_COUNT - 1) % ORIENTATION_COUNT]
    }
}

/// Occupied cells of `kind` at `orientation`, as (dx, dy) inside the rotation box.
///
/// IMPORTANT:
/// - Entry `i` is the same block of the piece in every orientation; the
///   per-cell style tables are authored against this numbering.
/// - Each step clockwise maps (x, y) to (n - 1 - y, x) for box size n.
pub fn cells(kind: Kind, orientation: Orientation) -> [(i32, i32); CELLS_PER_PIECE] {
    let n = kind.box_size();
    let mut out = kind.spawn_cells();
    for _ in 0..orientation.index() {
        for c in out.iter_mut() {
            *c = (n - 1 - c.1, c.0);
        }
    }
    out
}
