// rust/engine/tests/resolver_invariants_prop.rs
#![forbid(unsafe_code)]

/**
 * Property/invariant tests for the style resolver.
 *
 * Invariants covered:
 * - Rotation law for per-cell tables: the family (upper 6 bits) of the raw
 *   entry is kept and its low 2 bits advance by the orientation, mod 4.
 * - Per-orientation tables return the byte at the documented offset untouched.
 * - Resolving is referentially transparent: same inputs, same glyph.
 * - Every resolved glyph id fits in 6 bits.
 */
use proptest::prelude::*;

use block_sprites::sprites::{per_cell_offset, per_orientation_offset};
use block_sprites::{CELLS_PER_PIECE, Kind, Orientation, StyleTable, VisualStyle};

fn kind_strategy() -> impl Strategy<Value = Kind> {
    (0usize..7).prop_map(|i| Kind::from_index(i).unwrap())
}

fn orientation_strategy() -> impl Strategy<Value = Orientation> {
    (0usize..4).prop_map(|i| Orientation::from_index(i).unwrap())
}

fn style_strategy() -> impl Strategy<Value = VisualStyle> {
    prop::sample::select(VisualStyle::all().to_vec())
}

proptest! {
    #[test]
    fn per_cell_tables_follow_the_rotation_law(
        style in prop::sample::select(vec![
            VisualStyle::TronSquare,
            VisualStyle::TronAngled,
            VisualStyle::Line,
        ]),
        kind in kind_strategy(),
        orientation in orientation_strategy(),
        cell in 0usize..CELLS_PER_PIECE,
    ) {
        let data = style.data();
        let raw = data[per_cell_offset(kind, cell)];
        let g = style.table().unwrap().resolve(kind, orientation, cell).unwrap();
        let k = orientation.index() as u8;

        prop_assert_eq!(g.id() & !0b11, raw & !0b11);
        prop_assert_eq!(g.id() & 0b11, ((raw & 0b11) + k) % 4);
    }

    #[test]
    fn per_orientation_tables_are_read_verbatim(
        style in prop::sample::select(vec![
            VisualStyle::SimpleDither,
            VisualStyle::ShadedDither,
        ]),
        kind in kind_strategy(),
        orientation in orientation_strategy(),
        cell in 0usize..CELLS_PER_PIECE,
    ) {
        let data = style.data();
        let raw = data[per_orientation_offset(kind, orientation, cell)];
        let g = style.table().unwrap().resolve(kind, orientation, cell).unwrap();
        prop_assert_eq!(g.id(), raw);
    }

    #[test]
    fn resolve_is_pure_and_stays_in_the_catalog(
        style in style_strategy(),
        kind in kind_strategy(),
        orientation in orientation_strategy(),
        cell in 0usize..CELLS_PER_PIECE,
    ) {
        let table = style.table().unwrap();
        let a = table.resolve(kind, orientation, cell).unwrap();
        let b = block_sprites::resolve(style, kind, orientation, cell).unwrap();
        prop_assert_eq!(a, b);
        prop_assert!(a.id() <= 63);
    }

    #[test]
    fn single_glyph_tables_built_from_any_glyph_ignore_inputs(
        id in 0u8..64,
        kind in kind_strategy(),
        orientation in orientation_strategy(),
        cell in 0usize..CELLS_PER_PIECE,
    ) {
        let header = [block_sprites::sprites::encode_single_glyph_header_id(id).unwrap()];
        let table = StyleTable::decode(&header).unwrap();
        prop_assert_eq!(table.resolve(kind, orientation, cell).unwrap().id(), id);
    }

    #[test]
    fn cell_indices_past_three_always_fail(
        style in style_strategy(),
        kind in kind_strategy(),
        orientation in orientation_strategy(),
        cell in CELLS_PER_PIECE..usize::MAX,
    ) {
        prop_assert!(block_sprites::resolve(style, kind, orientation, cell).is_err());
    }
}
