// rust/engine/src/sprites/glyphs.rs
#![forbid(unsafe_code)]

/*
Glyph catalog
-------------
64 monochrome 3x3 block glyphs packed one byte per pixel row. Bit 2 of a row
byte is the leftmost column, bit 0 the rightmost.

Ids from 0x08 upward come in rotation families of 4: the low two bits pick a
quarter turn, numbered clockwise. Style tables rely on this to rotate a glyph
by adding the piece orientation to its low bits, so the layout is checked at
compile time (see `family_rotates_clockwise`).

Family names follow the sprite sheet they were drawn on, not the edge they
open toward; e.g. `TronSquareCapN` is open on its west edge.
*/

use crate::error::{SpriteError, SpriteResult};
use crate::sprites::constants::{
    BYTES_PER_GLYPH, GLYPH_COUNT, GLYPH_H, GLYPH_W, ROTATION_FAMILY_START, ROTATION_MASK,
    SPRITE_HEADER, SPRITE_HEADER_LEN,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Glyph {
    SolidBlack = 0x00,
    SolidWhite = 0x01,
    Donut = 0x02,
    CenterDot = 0x03,
    X = 0x04,
    O = 0x05,
    Plus = 0x06,
    Corners = 0x07,

    TronSquareCapN = 0x08,
    TronSquareCapE = 0x09,
    TronSquareCapS = 0x0A,
    TronSquareCapW = 0x0B,

    TronSquareCornerNw = 0x0C,
    TronSquareCornerNe = 0x0D,
    TronSquareCornerSe = 0x0E,
    TronSquareCornerSw = 0x0F,

    TronSquareNs = 0x10,
    TronSquareEw = 0x11,
    TronSquareSn = 0x12,
    TronSquareWe = 0x13,

    TronSquareTeeN = 0x14,
    TronSquareTeeE = 0x15,
    TronSquareTeeS = 0x16,
    TronSquareTeeW = 0x17,

    TronAngledCapN = 0x18,
    TronAngledCapE = 0x19,
    TronAngledCapS = 0x1A,
    TronAngledCapW = 0x1B,

    TronAngledCornerNw = 0x1C,
    TronAngledCornerNe = 0x1D,
    TronAngledCornerSe = 0x1E,
    TronAngledCornerSw = 0x1F,

    SimpleDitherCapN = 0x20,
    SimpleDitherCapE = 0x21,
    SimpleDitherCapS = 0x22,
    SimpleDitherCapW = 0x23,

    SimpleDitherCornerNw = 0x24,
    SimpleDitherCornerNe = 0x25,
    SimpleDitherCornerSe = 0x26,
    SimpleDitherCornerSw = 0x27,

    ShadedDitherLargeCapNw = 0x28,
    ShadedDitherLargeCapNe = 0x29,
    ShadedDitherLargeCapSe = 0x2A,
    ShadedDitherLargeCapSw = 0x2B,

    ShadedDitherMediumCapNw = 0x2C,
    ShadedDitherMediumCapNe = 0x2D,
    ShadedDitherMediumCapSe = 0x2E,
    ShadedDitherMediumCapSw = 0x2F,

    LineCapN = 0x30,
    LineCapE = 0x31,
    LineCapS = 0x32,
    LineCapW = 0x33,

    LineCornerNe = 0x34,
    LineCornerSe = 0x35,
    LineCornerSw = 0x36,
    LineCornerNw = 0x37,

    LineTeeN = 0x38,
    LineTeeE = 0x39,
    LineTeeS = 0x3A,
    LineTeeW = 0x3B,

    LineStraightNs = 0x3C,
    LineStraightEw = 0x3D,
    LineStraightSn = 0x3E,
    LineStraightWe = 0x3F,
}

impl Glyph {
    pub const EMPTY: Glyph = Glyph::SolidBlack;

    // Small shaded caps reuse the simple dither corners.
    pub const SHADED_DITHER_SMALL_CAP_NW: Glyph = Glyph::SimpleDitherCornerNw;
    pub const SHADED_DITHER_SMALL_CAP_NE: Glyph = Glyph::SimpleDitherCornerNe;
    pub const SHADED_DITHER_SMALL_CAP_SE: Glyph = Glyph::SimpleDitherCornerSe;
    pub const SHADED_DITHER_SMALL_CAP_SW: Glyph = Glyph::SimpleDitherCornerSw;

    /// Every glyph, indexed by id.
    #[rustfmt::skip]
    pub const ALL: [Glyph; GLYPH_COUNT] = {
        use Glyph::*;
        [
            SolidBlack, SolidWhite, Donut, CenterDot,
            X, O, Plus, Corners,
            TronSquareCapN, TronSquareCapE, TronSquareCapS, TronSquareCapW,
            TronSquareCornerNw, TronSquareCornerNe, TronSquareCornerSe, TronSquareCornerSw,
            TronSquareNs, TronSquareEw, TronSquareSn, TronSquareWe,
            TronSquareTeeN, TronSquareTeeE, TronSquareTeeS, TronSquareTeeW,
            TronAngledCapN, TronAngledCapE, TronAngledCapS, TronAngledCapW,
            TronAngledCornerNw, TronAngledCornerNe, TronAngledCornerSe, TronAngledCornerSw,
            SimpleDitherCapN, SimpleDitherCapE, SimpleDitherCapS, SimpleDitherCapW,
            SimpleDitherCornerNw, SimpleDitherCornerNe, SimpleDitherCornerSe, SimpleDitherCornerSw,
            ShadedDitherLargeCapNw, ShadedDitherLargeCapNe, ShadedDitherLargeCapSe, ShadedDitherLargeCapSw,
            ShadedDitherMediumCapNw, ShadedDitherMediumCapNe, ShadedDitherMediumCapSe, ShadedDitherMediumCapSw,
            LineCapN, LineCapE, LineCapS, LineCapW,
            LineCornerNe, LineCornerSe, LineCornerSw, LineCornerNw,
            LineTeeN, LineTeeE, LineTeeS, LineTeeW,
            LineStraightNs, LineStraightEw, LineStraightSn, LineStraightWe,
        ]
    };

    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Inverse of `id()`. Returns None for ids outside the catalog.
    #[inline]
    pub const fn from_id(id: u8) -> Option<Glyph> {
        if (id as usize) < GLYPH_COUNT {
            Some(Glyph::ALL[id as usize])
        } else {
            None
        }
    }

    /// Same family, turned `quarter_turns` steps clockwise.
    ///
    /// Only meaningful for ids at or above `ROTATION_FAMILY_START`; plain
    /// fills below it are not grouped by rotation.
    #[inline]
    pub const fn rotated(self, quarter_turns: u8) -> Glyph {
        let id = self.id();
        let turned = (id & !ROTATION_MASK) | (id.wrapping_add(quarter_turns) & ROTATION_MASK);
        Glyph::ALL[turned as usize]
    }

    pub const fn is_rotation_family(self) -> bool {
        self.id() >= ROTATION_FAMILY_START
    }
}

const _: () = {
    let mut i = 0;
    while i < GLYPH_COUNT {
        assert!(Glyph::ALL[i] as usize == i);
        i += 1;
    }
};

const ___: u8 = 0b000;
const __O: u8 = 0b001;
const _O_: u8 = 0b010;
const _OO: u8 = 0b011;
const O__: u8 = 0b100;
const O_O: u8 = 0b101;
const OO_: u8 = 0b110;
const OOO: u8 = 0b111;

/// Packed sprite sheet: `[width, height]` then 3 row bytes per glyph, in id order.
#[rustfmt::skip]
pub const BLOCK_SPRITES: &[u8] = &[
    // width, height
    3, 8,

    // [0x00] SolidBlack
    ___, ___, ___,
    // [0x01] SolidWhite
    OOO, OOO, OOO,
    // [0x02] Donut
    OOO, O_O, OOO,
    // [0x03] CenterDot
    ___, _O_, ___,
    // [0x04] X
    O_O, _O_, O_O,
    // [0x05] O
    _O_, O_O, _O_,
    // [0x06] Plus
    _O_, OOO, _O_,
    // [0x07] Corners
    O_O, ___, O_O,
    // [0x08] TronSquareCapN
    OOO, __O, OOO,
    // [0x09] TronSquareCapE
    O_O, O_O, OOO,
    // [0x0A] TronSquareCapS
    OOO, O__, OOO,
    // [0x0B] TronSquareCapW
    OOO, O_O, O_O,
    // [0x0C] TronSquareCornerNw
    OOO, __O, O_O,
    // [0x0D] TronSquareCornerNe
    O_O, __O, OOO,
    // [0x0E] TronSquareCornerSe
    O_O, O__, OOO,
    // [0x0F] TronSquareCornerSw
    OOO, O__, O_O,
    // [0x10] TronSquareNs
    OOO, ___, OOO,
    // [0x11] TronSquareEw
    O_O, O_O, O_O,
    // [0x12] TronSquareSn
    OOO, ___, OOO,
    // [0x13] TronSquareWe
    O_O, O_O, O_O,
    // [0x14] TronSquareTeeN
    O_O, O__, O_O,
    // [0x15] TronSquareTeeE
    OOO, ___, O_O,
    // [0x16] TronSquareTeeS
    O_O, __O, O_O,
    // [0x17] TronSquareTeeW
    O_O, ___, OOO,
    // [0x18] TronAngledCapN
    OO_, __O, OOO,
    // [0x19] TronAngledCapE
    O_O, O_O, _OO,
    // [0x1A] TronAngledCapS
    OOO, O__, _OO,
    // [0x1B] TronAngledCapW
    OO_, O_O, O_O,
    // [0x1C] TronAngledCornerNw
    OO_, __O, O_O,
    // [0x1D] TronAngledCornerNe
    O_O, __O, OOO,
    // [0x1E] TronAngledCornerSe
    O_O, O__, _OO,
    // [0x1F] TronAngledCornerSw
    OOO, O__, O_O,
    // [0x20] SimpleDitherCapN
    _OO, O_O, _OO,
    // [0x21] SimpleDitherCapE
    _O_, O_O, OOO,
    // [0x22] SimpleDitherCapS
    OO_, O_O, OO_,
    // [0x23] SimpleDitherCapW
    OOO, O_O, _O_,
    // [0x24] SimpleDitherCornerNw
    _OO, O_O, _O_,
    // [0x25] SimpleDitherCornerNe
    _O_, O_O, _OO,
    // [0x26] SimpleDitherCornerSe
    _O_, O_O, OO_,
    // [0x27] SimpleDitherCornerSw
    OO_, O_O, _O_,
    // [0x28] ShadedDitherLargeCapNw
    OOO, O_O, _OO,
    // [0x29] ShadedDitherLargeCapNe
    _OO, O_O, OOO,
    // [0x2A] ShadedDitherLargeCapSe
    OO_, O_O, OOO,
    // [0x2B] ShadedDitherLargeCapSw
    OOO, O_O, OO_,
    // [0x2C] ShadedDitherMediumCapNw
    OOO, _OO, O_O,
    // [0x2D] ShadedDitherMediumCapNe
    O_O, _OO, OOO,
    // [0x2E] ShadedDitherMediumCapSe
    O_O, OO_, OOO,
    // [0x2F] ShadedDitherMediumCapSw
    OOO, OO_, O_O,
    // [0x30] LineCapN
    ___, OO_, ___,
    // [0x31] LineCapE
    _O_, _O_, ___,
    // [0x32] LineCapS
    ___, _OO, ___,
    // [0x33] LineCapW
    ___, _O_, _O_,
    // [0x34] LineCornerNe
    _O_, OO_, ___,
    // [0x35] LineCornerSe
    _O_, _OO, ___,
    // [0x36] LineCornerSw
    ___, _OO, _O_,
    // [0x37] LineCornerNw
    ___, OO_, _O_,
    // [0x38] LineTeeN
    _O_, _OO, _O_,
    // [0x39] LineTeeE
    ___, OOO, _O_,
    // [0x3A] LineTeeS
    _O_, OO_, _O_,
    // [0x3B] LineTeeW
    _O_, OOO, ___,
    // [0x3C] LineStraightNs
    ___, OOO, ___,
    // [0x3D] LineStraightEw
    _O_, _O_, _O_,
    // [0x3E] LineStraightSn
    ___, OOO, ___,
    // [0x3F] LineStraightWe
    _O_, _O_, _O_,
];

const _: () = assert!(BLOCK_SPRITES.len() == GLYPH_COUNT * BYTES_PER_GLYPH + SPRITE_HEADER_LEN);
const _: () = assert!(BLOCK_SPRITES[0] == SPRITE_HEADER[0] && BLOCK_SPRITES[1] == SPRITE_HEADER[1]);

/// Packed row bytes of `glyph`, top row first.
#[inline]
pub const fn glyph_rows(glyph: Glyph) -> [u8; GLYPH_H] {
    let at = SPRITE_HEADER_LEN + glyph.id() as usize * BYTES_PER_GLYPH;
    [BLOCK_SPRITES[at], BLOCK_SPRITES[at + 1], BLOCK_SPRITES[at + 2]]
}

/// Pixel grid of `glyph` as `m[row][col]`; true means lit.
pub fn glyph_bitmap(glyph: Glyph) -> [[bool; GLYPH_W]; GLYPH_H] {
    let rows = glyph_rows(glyph);
    let mut m = [[false; GLYPH_W]; GLYPH_H];
    for (r, &bits) in rows.iter().enumerate() {
        for (c, px) in m[r].iter_mut().enumerate() {
            *px = bits & (1 << (GLYPH_W - 1 - c)) != 0;
        }
    }
    m
}

/// Checked variant of `glyph_bitmap` for raw ids coming from outside the catalog.
pub fn glyph_bitmap_by_id(id: u8) -> SpriteResult<[[bool; GLYPH_W]; GLYPH_H]> {
    Glyph::from_id(id)
        .map(glyph_bitmap)
        .ok_or(SpriteError::GlyphIdOutOfRange { id })
}

/// Edge-midpoint pixels of `glyph` as [north, east, south, west].
pub const fn edge_midpoints(glyph: Glyph) -> [bool; 4] {
    let [top, mid, bottom] = glyph_rows(glyph);
    [
        top & _O_ != 0,
        mid & __O != 0,
        bottom & _O_ != 0,
        mid & O__ != 0,
    ]
}

/// True when each member of the family starting at `base` is the previous one
/// turned a quarter clockwise, judged by its edge midpoints (north moves to east).
pub const fn family_rotates_clockwise(base: u8) -> bool {
    if base & ROTATION_MASK != 0 || base as usize + 4 > GLYPH_COUNT {
        return false;
    }
    let mut k = 0u8;
    while k < 4 {
        let (Some(a), Some(b)) = (Glyph::from_id(base + k), Glyph::from_id(base + (k + 1) % 4))
        else {
            return false;
        };
        let a = edge_midpoints(a);
        let b = edge_midpoints(b);
        let mut d = 0;
        while d < 4 {
            if a[d] != b[(d + 1) % 4] {
                return false;
            }
            d += 1;
        }
        k += 1;
    }
    true
}

/// Row bytes turned a quarter clockwise: pixel `(r, c)` comes from `(2 - c, r)`.
pub const fn turn_rows_cw(rows: [u8; GLYPH_H]) -> [u8; GLYPH_H] {
    let mut out = [0u8; GLYPH_H];
    let mut r = 0;
    while r < GLYPH_H {
        let mut c = 0;
        while c < GLYPH_W {
            if rows[GLYPH_H - 1 - c] & (1 << (GLYPH_W - 1 - r)) != 0 {
                out[r] |= 1 << (GLYPH_W - 1 - c);
            }
            c += 1;
        }
        r += 1;
    }
    out
}

/// Families that keep a bevel on a fixed side; only their edges turn.
pub const BEVELLED_FAMILIES: [Glyph; 2] = [Glyph::TronAngledCapN, Glyph::TronAngledCornerNw];

/// Stricter than `family_rotates_clockwise`: every member must be the previous
/// one's full bitmap turned a quarter clockwise.
pub const fn family_is_bitmap_turn(base: u8) -> bool {
    if base & ROTATION_MASK != 0 || base as usize + 4 > GLYPH_COUNT {
        return false;
    }
    let mut k = 0u8;
    while k < 4 {
        let (Some(a), Some(b)) = (Glyph::from_id(base + k), Glyph::from_id(base + (k + 1) % 4))
        else {
            return false;
        };
        let turned = turn_rows_cw(glyph_rows(a));
        let want = glyph_rows(b);
        let mut r = 0;
        while r < GLYPH_H {
            if turned[r] != want[r] {
                return false;
            }
            r += 1;
        }
        k += 1;
    }
    true
}

const fn is_bevelled(base: u8) -> bool {
    let mut i = 0;
    while i < BEVELLED_FAMILIES.len() {
        if BEVELLED_FAMILIES[i].id() == base {
            return true;
        }
        i += 1;
    }
    false
}

const _: () = {
    let mut base = ROTATION_FAMILY_START;
    while (base as usize) < GLYPH_COUNT {
        assert!(family_rotates_clockwise(base));
        assert!(is_bevelled(base) || family_is_bitmap_turn(base));
        base += 4;
    }
};
