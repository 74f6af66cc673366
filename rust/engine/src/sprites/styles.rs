// rust/engine/src/sprites/styles.rs
#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::{SpriteError, SpriteResult};
use crate::sprites::constants::{GLYPH_COUNT, STYLE_HEADER_LEN};
use crate::sprites::glyphs::Glyph;
use crate::sprites::glyphs::Glyph as G;
use crate::sprites::header::{
    StyleFormat, decode_header, encode_single_glyph_header, encode_table_header,
};

/// Named rendering themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisualStyle {
    Solid,
    Donut,
    Dot,
    X,
    O,
    Plus,
    Corners,
    TronSquare,
    TronAngled,
    Line,
    SimpleDither,
    ShadedDither,
}

pub const STYLE_COUNT: usize = 12;

impl VisualStyle {
    pub fn all() -> &'static [VisualStyle] {
        use VisualStyle::*;
        &[
            Solid,
            Donut,
            Dot,
            X,
            O,
            Plus,
            Corners,
            TronSquare,
            TronAngled,
            Line,
            SimpleDither,
            ShadedDither,
        ]
    }

    /// Display name for menus and logs.
    pub fn name(self) -> &'static str {
        STYLE_NAMES[self as usize]
    }

    /// Raw table bytes, header first.
    pub fn data(self) -> &'static [u8] {
        STYLE_DATA[self as usize]
    }

    /// Decoded view of `data()`; decode once and keep it for repeated lookups.
    pub fn table(self) -> SpriteResult<StyleTable<'static>> {
        StyleTable::decode(self.data())
    }
}

impl fmt::Display for VisualStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for VisualStyle {
    type Err = SpriteError;

    /// Accepts display names ("Tron Angled") and identifiers ("tron_angled",
    /// "TronAngled"), ignoring case and separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        VisualStyle::all()
            .iter()
            .copied()
            .find(|style| {
                normalize_name(style.name()) == wanted
                    || normalize_name(&format!("{style:?}")) == wanted
            })
            .ok_or_else(|| SpriteError::UnknownStyle { name: s.to_string() })
    }
}

/// A style table decoded from its header byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleTable<'a> {
    SingleGlyph(Glyph),
    /// Full table bytes, header included.
    PerCellWithRotation(&'a [u8]),
    /// Full table bytes, header included.
    PerOrientationAndCell(&'a [u8]),
    /// Tag reserved in the header but never implemented.
    Unsupported(StyleFormat),
}

impl<'a> StyleTable<'a> {
    /// Validate `data` against the format its header declares.
    ///
    /// - Length must match the format exactly.
    /// - Every glyph byte must name a catalog glyph.
    pub fn decode(data: &'a [u8]) -> SpriteResult<Self> {
        let &first = data.first().ok_or(SpriteError::EmptyTable)?;
        let header = decode_header(first);
        trace!(format = ?header.format, len = data.len(), "decoding style table");

        let expected = match header.format.table_len() {
            Some(n) => n,
            None => return Ok(StyleTable::Unsupported(header.format)),
        };
        if data.len() != expected {
            return Err(SpriteError::TableLength {
                format: header.format,
                expected,
                actual: data.len(),
            });
        }
        if let Some(id) = first_invalid_glyph(data) {
            return Err(SpriteError::GlyphIdOutOfRange { id });
        }

        Ok(match header.format {
            StyleFormat::SingleGlyph => StyleTable::SingleGlyph(
                header
                    .single_glyph()
                    .ok_or(SpriteError::GlyphIdOutOfRange { id: header.payload })?,
            ),
            StyleFormat::PerCellWithRotation => StyleTable::PerCellWithRotation(data),
            StyleFormat::PerOrientationAndCell => StyleTable::PerOrientationAndCell(data),
            StyleFormat::PerCellNoRotation => StyleTable::Unsupported(header.format),
        })
    }

    pub fn format(&self) -> StyleFormat {
        match self {
            StyleTable::SingleGlyph(_) => StyleFormat::SingleGlyph,
            StyleTable::PerCellWithRotation(_) => StyleFormat::PerCellWithRotation,
            StyleTable::PerOrientationAndCell(_) => StyleFormat::PerOrientationAndCell,
            StyleTable::Unsupported(format) => *format,
        }
    }
}

/// First body byte that is not a catalog glyph id.
const fn first_invalid_glyph(data: &[u8]) -> Option<u8> {
    let mut i = STYLE_HEADER_LEN;
    while i < data.len() {
        if data[i] as usize >= GLYPH_COUNT {
            return Some(data[i]);
        }
        i += 1;
    }
    None
}

/// Length matches the header's format and every glyph byte is in range.
const fn table_is_well_formed(data: &[u8]) -> bool {
    if data.is_empty() {
        return false;
    }
    let format = decode_header(data[0]).format;
    match format.table_len() {
        Some(n) => n == data.len() && first_invalid_glyph(data).is_none(),
        None => false,
    }
}

const STYLE_NAMES: [&str; STYLE_COUNT] = [
    "Solid",
    "Donut",
    "Dot",
    "X",
    "O",
    "Plus",
    "Corners",
    "Tron",
    "Tron Angled",
    "Line",
    "Dither",
    "Shaded",
];

const STYLE_DATA: [&[u8]; STYLE_COUNT] = [
    &[encode_single_glyph_header(G::SolidWhite)],
    &[encode_single_glyph_header(G::Donut)],
    &[encode_single_glyph_header(G::CenterDot)],
    &[encode_single_glyph_header(G::X)],
    &[encode_single_glyph_header(G::O)],
    &[encode_single_glyph_header(G::Plus)],
    &[encode_single_glyph_header(G::Corners)],
    STYLE_TRON_SQUARE,
    STYLE_TRON_ANGLED,
    STYLE_LINE,
    STYLE_SIMPLE_DITHER,
    STYLE_SHADED_DITHER,
];

const _: () = {
    let mut i = 0;
    while i < STYLE_COUNT {
        assert!(table_is_well_formed(STYLE_DATA[i]));
        i += 1;
    }
};
const _: () = assert!(VisualStyle::ShadedDither as usize + 1 == STYLE_COUNT);

/*
Line-art tables: one row per shape (I O T S Z J L), one glyph per cell at
orientation North. Each glyph is open toward exactly the neighbours its cell
has; the resolver turns it with the piece.

Dither tables: per shape, one row of 4 cells per orientation (N E S W).
Straight and tee cells of the simple dither use Donut, which has no rotation
family. Shaded dither keeps its light in the top-left corner of the screen, so
a cell's shade depends on where it sits after rotation:
- 1 neighbour: large cap, 2: medium cap, 3: small cap
- the cap's corner is the quadrant of the piece's box the cell falls in
*/

#[rustfmt::skip]
const STYLE_TRON_SQUARE: &[u8] = &[
    encode_table_header(StyleFormat::PerCellWithRotation),
    // I
    G::TronSquareCapS as u8, G::TronSquareNs as u8, G::TronSquareNs as u8, G::TronSquareCapN as u8,
    // O
    G::TronSquareCornerSw as u8, G::TronSquareCornerNw as u8, G::TronSquareCornerSe as u8, G::TronSquareCornerNe as u8,
    // T
    G::TronSquareCapW as u8, G::TronSquareCapS as u8, G::TronSquareTeeW as u8, G::TronSquareCapN as u8,
    // S
    G::TronSquareCornerSw as u8, G::TronSquareCapN as u8, G::TronSquareCapS as u8, G::TronSquareCornerNe as u8,
    // Z
    G::TronSquareCapS as u8, G::TronSquareCornerNw as u8, G::TronSquareCornerSe as u8, G::TronSquareCapN as u8,
    // J
    G::TronSquareCapW as u8, G::TronSquareCornerSe as u8, G::TronSquareNs as u8, G::TronSquareCapN as u8,
    // L
    G::TronSquareCapW as u8, G::TronSquareCapS as u8, G::TronSquareNs as u8, G::TronSquareCornerNe as u8,
];

#[rustfmt::skip]
const STYLE_TRON_ANGLED: &[u8] = &[
    encode_table_header(StyleFormat::PerCellWithRotation),
    // I
    G::TronAngledCapS as u8, G::TronSquareNs as u8, G::TronSquareNs as u8, G::TronAngledCapN as u8,
    // O
    G::TronAngledCornerSw as u8, G::TronAngledCornerNw as u8, G::TronAngledCornerSe as u8, G::TronAngledCornerNe as u8,
    // T
    G::TronAngledCapW as u8, G::TronAngledCapS as u8, G::TronSquareTeeW as u8, G::TronAngledCapN as u8,
    // S
    G::TronAngledCornerSw as u8, G::TronAngledCapN as u8, G::TronAngledCapS as u8, G::TronAngledCornerNe as u8,
    // Z
    G::TronAngledCapS as u8, G::TronAngledCornerNw as u8, G::TronAngledCornerSe as u8, G::TronAngledCapN as u8,
    // J
    G::TronAngledCapW as u8, G::TronAngledCornerSe as u8, G::TronSquareNs as u8, G::TronAngledCapN as u8,
    // L
    G::TronAngledCapW as u8, G::TronAngledCapS as u8, G::TronSquareNs as u8, G::TronAngledCornerNe as u8,
];

#[rustfmt::skip]
const STYLE_LINE: &[u8] = &[
    encode_table_header(StyleFormat::PerCellWithRotation),
    // I
    G::LineCapS as u8, G::LineStraightNs as u8, G::LineStraightNs as u8, G::LineCapN as u8,
    // O
    G::LineCornerSw as u8, G::LineCornerNw as u8, G::LineCornerSe as u8, G::LineCornerNe as u8,
    // T
    G::LineCapW as u8, G::LineCapS as u8, G::LineTeeW as u8, G::LineCapN as u8,
    // S
    G::LineCornerSw as u8, G::LineCapN as u8, G::LineCapS as u8, G::LineCornerNe as u8,
    // Z
    G::LineCapS as u8, G::LineCornerNw as u8, G::LineCornerSe as u8, G::LineCapN as u8,
    // J
    G::LineCapW as u8, G::LineCornerSe as u8, G::LineStraightNs as u8, G::LineCapN as u8,
    // L
    G::LineCapW as u8, G::LineCapS as u8, G::LineStraightNs as u8, G::LineCornerNe as u8,
];

#[rustfmt::skip]
const STYLE_SIMPLE_DITHER: &[u8] = &[
    encode_table_header(StyleFormat::PerOrientationAndCell),
    // I N
    G::SimpleDitherCapN as u8, G::Donut as u8, G::Donut as u8, G::SimpleDitherCapS as u8,
    // I E
    G::SimpleDitherCapE as u8, G::Donut as u8, G::Donut as u8, G::SimpleDitherCapW as u8,
    // I S
    G::SimpleDitherCapS as u8, G::Donut as u8, G::Donut as u8, G::SimpleDitherCapN as u8,
    // I W
    G::SimpleDitherCapW as u8, G::Donut as u8, G::Donut as u8, G::SimpleDitherCapE as u8,
    // O N
    G::SimpleDitherCornerNe as u8, G::SimpleDitherCornerSe as u8, G::SimpleDitherCornerNw as u8, G::SimpleDitherCornerSw as u8,
    // O E
    G::SimpleDitherCornerSe as u8, G::SimpleDitherCornerSw as u8, G::SimpleDitherCornerNe as u8, G::SimpleDitherCornerNw as u8,
    // O S
    G::SimpleDitherCornerSw as u8, G::SimpleDitherCornerNw as u8, G::SimpleDitherCornerSe as u8, G::SimpleDitherCornerNe as u8,
    // O W
    G::SimpleDitherCornerNw as u8, G::SimpleDitherCornerNe as u8, G::SimpleDitherCornerSw as u8, G::SimpleDitherCornerSe as u8,
    // T N
    G::SimpleDitherCapE as u8, G::SimpleDitherCapN as u8, G::Donut as u8, G::SimpleDitherCapS as u8,
    // T E
    G::SimpleDitherCapS as u8, G::SimpleDitherCapE as u8, G::Donut as u8, G::SimpleDitherCapW as u8,
    // T S
    G::SimpleDitherCapW as u8, G::SimpleDitherCapS as u8, G::Donut as u8, G::SimpleDitherCapN as u8,
    // T W
    G::SimpleDitherCapN as u8, G::SimpleDitherCapW as u8, G::Donut as u8, G::SimpleDitherCapE as u8,
    // S N
    G::SimpleDitherCornerNe as u8, G::SimpleDitherCapS as u8, G::SimpleDitherCapN as u8, G::SimpleDitherCornerSw as u8,
    // S E
    G::SimpleDitherCornerSe as u8, G::SimpleDitherCapW as u8, G::SimpleDitherCapE as u8, G::SimpleDitherCornerNw as u8,
    // S S
    G::SimpleDitherCornerSw as u8, G::SimpleDitherCapN as u8, G::SimpleDitherCapS as u8, G::SimpleDitherCornerNe as u8,
    // S W
    G::SimpleDitherCornerNw as u8, G::SimpleDitherCapE as u8, G::SimpleDitherCapW as u8, G::SimpleDitherCornerSe as u8,
    // Z N
    G::SimpleDitherCapN as u8, G::SimpleDitherCornerSe as u8, G::SimpleDitherCornerNw as u8, G::SimpleDitherCapS as u8,
    // Z E
    G::SimpleDitherCapE as u8, G::SimpleDitherCornerSw as u8, G::SimpleDitherCornerNe as u8, G::SimpleDitherCapW as u8,
    // Z S
    G::SimpleDitherCapS as u8, G::SimpleDitherCornerNw as u8, G::SimpleDitherCornerSe as u8, G::SimpleDitherCapN as u8,
    // Z W
    G::SimpleDitherCapW as u8, G::SimpleDitherCornerNe as u8, G::SimpleDitherCornerSw as u8, G::SimpleDitherCapE as u8,
    // J N
    G::SimpleDitherCapE as u8, G::SimpleDitherCornerNw as u8, G::Donut as u8, G::SimpleDitherCapS as u8,
    // J E
    G::SimpleDitherCapS as u8, G::SimpleDitherCornerNe as u8, G::Donut as u8, G::SimpleDitherCapW as u8,
    // J S
    G::SimpleDitherCapW as u8, G::SimpleDitherCornerSe as u8, G::Donut as u8, G::SimpleDitherCapN as u8,
    // J W
    G::SimpleDitherCapN as u8, G::SimpleDitherCornerSw as u8, G::Donut as u8, G::SimpleDitherCapE as u8,
    // L N
    G::SimpleDitherCapE as u8, G::SimpleDitherCapN as u8, G::Donut as u8, G::SimpleDitherCornerSw as u8,
    // L E
    G::SimpleDitherCapS as u8, G::SimpleDitherCapE as u8, G::Donut as u8, G::SimpleDitherCornerNw as u8,
    // L S
    G::SimpleDitherCapW as u8, G::SimpleDitherCapS as u8, G::Donut as u8, G::SimpleDitherCornerNe as u8,
    // L W
    G::SimpleDitherCapN as u8, G::SimpleDitherCapW as u8, G::Donut as u8, G::SimpleDitherCornerSe as u8,
];

#[rustfmt::skip]
const STYLE_SHADED_DITHER: &[u8] = &[
    encode_table_header(StyleFormat::PerOrientationAndCell),
    // I N
    G::ShadedDitherLargeCapNw as u8, G::ShadedDitherMediumCapNw as u8, G::ShadedDitherMediumCapNe as u8, G::ShadedDitherLargeCapNe as u8,
    // I E
    G::ShadedDitherLargeCapNw as u8, G::ShadedDitherMediumCapNw as u8, G::ShadedDitherMediumCapSw as u8, G::ShadedDitherLargeCapSw as u8,
    // I S
    G::ShadedDitherLargeCapNe as u8, G::ShadedDitherMediumCapNe as u8, G::ShadedDitherMediumCapNw as u8, G::ShadedDitherLargeCapNw as u8,
    // I W
    G::ShadedDitherLargeCapSw as u8, G::ShadedDitherMediumCapSw as u8, G::ShadedDitherMediumCapNw as u8, G::ShadedDitherLargeCapNw as u8,
    // O N
    G::ShadedDitherMediumCapNw as u8, G::ShadedDitherMediumCapNe as u8, G::ShadedDitherMediumCapSw as u8, G::ShadedDitherMediumCapSe as u8,
    // O E
    G::ShadedDitherMediumCapNe as u8, G::ShadedDitherMediumCapSe as u8, G::ShadedDitherMediumCapNw as u8, G::ShadedDitherMediumCapSw as u8,
    // O S
    G::ShadedDitherMediumCapSe as u8, G::ShadedDitherMediumCapSw as u8, G::ShadedDitherMediumCapNe as u8, G::ShadedDitherMediumCapNw as u8,
    // O W
    G::ShadedDitherMediumCapSw as u8, G::ShadedDitherMediumCapNw as u8, G::ShadedDitherMediumCapSe as u8, G::ShadedDitherMediumCapNe as u8,
    // T N
    G::ShadedDitherLargeCapNw as u8, G::ShadedDitherLargeCapSw as u8, G::SimpleDitherCornerSw as u8, G::ShadedDitherLargeCapSe as u8,
    // T E
    G::ShadedDitherLargeCapNe as u8, G::ShadedDitherLargeCapNw as u8, G::SimpleDitherCornerNw as u8, G::ShadedDitherLargeCapSw as u8,
    // T S
    G::ShadedDitherLargeCapSw as u8, G::ShadedDitherLargeCapNe as u8, G::SimpleDitherCornerNw as u8, G::ShadedDitherLargeCapNw as u8,
    // T W
    G::ShadedDitherLargeCapNw as u8, G::ShadedDitherLargeCapSe as u8, G::SimpleDitherCornerNe as u8, G::ShadedDitherLargeCapNe as u8,
    // S N
    G::ShadedDitherMediumCapNw as u8, G::ShadedDitherLargeCapNe as u8, G::ShadedDitherLargeCapSw as u8, G::ShadedDitherMediumCapSw as u8,
    // S E
    G::ShadedDitherMediumCapNe as u8, G::ShadedDitherLargeCapSe as u8, G::ShadedDitherLargeCapNw as u8, G::ShadedDitherMediumCapNw as u8,
    // S S
    G::ShadedDitherMediumCapSw as u8, G::ShadedDitherLargeCapSw as u8, G::ShadedDitherLargeCapNe as u8, G::ShadedDitherMediumCapNw as u8,
    // S W
    G::ShadedDitherMediumCapNw as u8, G::ShadedDitherLargeCapNw as u8, G::ShadedDitherLargeCapSe as u8, G::ShadedDitherMediumCapNe as u8,
    // Z N
    G::ShadedDitherLargeCapNw as u8, G::ShadedDitherMediumCapNw as u8, G::ShadedDitherMediumCapSw as u8, G::ShadedDitherLargeCapSe as u8,
    // Z E
    G::ShadedDitherLargeCapNe as u8, G::ShadedDitherMediumCapNe as u8, G::ShadedDitherMediumCapNw as u8, G::ShadedDitherLargeCapSw as u8,
    // Z S
    G::ShadedDitherLargeCapSe as u8, G::ShadedDitherMediumCapSw as u8, G::ShadedDitherMediumCapNw as u8, G::ShadedDitherLargeCapNw as u8,
    // Z W
    G::ShadedDitherLargeCapSw as u8, G::ShadedDitherMediumCapNw as u8, G::ShadedDitherMediumCapNe as u8, G::ShadedDitherLargeCapNe as u8,
    // J N
    G::ShadedDitherLargeCapNw as u8, G::ShadedDitherMediumCapSw as u8, G::ShadedDitherMediumCapSw as u8, G::ShadedDitherLargeCapSe as u8,
    // J E
    G::ShadedDitherLargeCapNe as u8, G::ShadedDitherMediumCapNw as u8, G::ShadedDitherMediumCapNw as u8, G::ShadedDitherLargeCapSw as u8,
    // J S
    G::ShadedDitherLargeCapSe as u8, G::ShadedDitherMediumCapNe as u8, G::ShadedDitherMediumCapNw as u8, G::ShadedDitherLargeCapNw as u8,
    // J W
    G::ShadedDitherLargeCapSw as u8, G::ShadedDitherMediumCapSe as u8, G::ShadedDitherMediumCapNe as u8, G::ShadedDitherLargeCapNe as u8,
    // L N
    G::ShadedDitherLargeCapNe as u8, G::ShadedDitherLargeCapSw as u8, G::ShadedDitherMediumCapSw as u8, G::ShadedDitherMediumCapSe as u8,
    // L E
    G::ShadedDitherLargeCapSe as u8, G::ShadedDitherLargeCapNw as u8, G::ShadedDitherMediumCapNw as u8, G::ShadedDitherMediumCapSw as u8,
    // L S
    G::ShadedDitherLargeCapSw as u8, G::ShadedDitherLargeCapNe as u8, G::ShadedDitherMediumCapNw as u8, G::ShadedDitherMediumCapNw as u8,
    // L W
    G::ShadedDitherLargeCapNw as u8, G::ShadedDitherLargeCapSe as u8, G::ShadedDitherMediumCapNe as u8, G::ShadedDitherMediumCapNe as u8,
];
