// rust/engine/tests/style_header_codec.rs
#![forbid(unsafe_code)]

/**
 * Style header codec tests.
 *
 * What is locked in:
 * - Bit layout: tag in bits [0:1], glyph id in bits [2:7].
 * - Encode/decode round-trip for every catalog glyph.
 * - Decoding never sign-extends and only trusts the payload for single-glyph headers.
 * - Exact table lengths per format (header included).
 */
use proptest::prelude::*;

use block_sprites::sprites::{
    STYLE_FORMAT_MASK, encode_single_glyph_header_id, encode_table_header,
};
use block_sprites::{
    GLYPH_COUNT, Glyph, SpriteError, StyleFormat, decode_header, encode_single_glyph_header,
};

#[test]
fn single_glyph_roundtrip_for_every_glyph() {
    for &g in Glyph::ALL.iter() {
        let byte = encode_single_glyph_header(g);
        let h = decode_header(byte);
        assert_eq!(h.format, StyleFormat::SingleGlyph);
        assert_eq!(h.payload, g.id());
        assert_eq!(h.single_glyph(), Some(g));
    }
}

#[test]
fn known_header_bytes() {
    assert_eq!(encode_single_glyph_header(Glyph::SolidWhite), 0b0000_0100);
    assert_eq!(encode_single_glyph_header(Glyph::LineStraightWe), 0b1111_1100);
    assert_eq!(encode_table_header(StyleFormat::PerCellWithRotation), 0b10);
    assert_eq!(encode_table_header(StyleFormat::PerOrientationAndCell), 0b11);
}

#[test]
fn checked_encode_rejects_ids_that_do_not_fit() {
    assert_eq!(encode_single_glyph_header_id(63), Ok(0xFC));
    assert_eq!(
        encode_single_glyph_header_id(GLYPH_COUNT as u8),
        Err(SpriteError::GlyphIdOutOfRange { id: 64 })
    );
}

#[test]
fn payload_is_not_a_glyph_for_table_formats() {
    let h = decode_header(0b0001_0111);
    assert_eq!(h.format, StyleFormat::PerOrientationAndCell);
    assert_eq!(h.payload, 0b101);
    assert_eq!(h.single_glyph(), None);

    let reserved = decode_header(0x01);
    assert_eq!(reserved.format, StyleFormat::PerCellNoRotation);
    assert_eq!(reserved.single_glyph(), None);
}

#[test]
fn table_lengths_per_format() {
    assert_eq!(StyleFormat::SingleGlyph.table_len(), Some(1));
    assert_eq!(StyleFormat::PerCellNoRotation.table_len(), None);
    assert_eq!(StyleFormat::PerCellWithRotation.table_len(), Some(1 + 4 * 7));
    assert_eq!(StyleFormat::PerOrientationAndCell.table_len(), Some(1 + 4 * 4 * 7));
}

proptest! {
    #[test]
    fn decode_splits_any_byte_without_sign_extension(byte in any::<u8>()) {
        let h = decode_header(byte);
        prop_assert_eq!(h.format.bits(), byte & STYLE_FORMAT_MASK);
        prop_assert_eq!(h.payload, byte >> 2);
        prop_assert!(h.payload < 64);
        prop_assert_eq!(h.format.bits() | (h.payload << 2), byte);
    }

    #[test]
    fn checked_encode_agrees_with_typed_encode(id in 0u8..64) {
        let g = Glyph::from_id(id).unwrap();
        prop_assert_eq!(encode_single_glyph_header_id(id), Ok(encode_single_glyph_header(g)));
    }
}
