// rust/engine/tests/piece_raster.rs
#![forbid(unsafe_code)]

/**
 * Piece geometry and rasterizer tests.
 *
 * What is tested:
 * - Shape/orientation numbering and parsing helpers.
 * - `cells()` keeps cell identity across quarter turns and returns to spawn after four.
 * - `rasterize()` blits each resolved glyph at its cell's 3x3 slot.
 */
use block_sprites::sprites::PIECE_BOX;
use block_sprites::{
    Glyph, Kind, Orientation, SHAPE_COUNT, SpriteError, VisualStyle, cells, glyph_bitmap,
    rasterize,
};

#[test]
fn kind_indices_follow_table_order() {
    let letters: String = Kind::all().iter().map(|k| k.letter()).collect();
    assert_eq!(letters, "IOTSZJL");
    for (i, &k) in Kind::all().iter().enumerate() {
        assert_eq!(k.index(), i);
        assert_eq!(Kind::from_index(i), Ok(k));
    }
    assert_eq!(
        Kind::from_index(SHAPE_COUNT),
        Err(SpriteError::ShapeIndexOutOfRange { index: 7 })
    );
}

#[test]
fn kind_parses_from_a_single_letter() {
    assert_eq!(Kind::from_letter("t"), Ok(Kind::T));
    assert_eq!(Kind::from_letter(" L "), Ok(Kind::L));
    assert!(matches!(Kind::from_letter("TT"), Err(SpriteError::UnknownPiece { .. })));
    assert!(matches!(Kind::from_letter("Q"), Err(SpriteError::UnknownPiece { .. })));
}

#[test]
fn orientation_turns_wrap_around() {
    assert_eq!(Orientation::default(), Orientation::North);
    assert_eq!(Orientation::West.rotate_cw(), Orientation::North);
    assert_eq!(Orientation::North.rotate_ccw(), Orientation::West);
    for &o in Orientation::all() {
        assert_eq!(o.rotate_cw().rotate_ccw(), o);
        assert_eq!(Orientation::from_index(o.index()), Ok(o));
    }
    assert_eq!(
        Orientation::from_index(4),
        Err(SpriteError::OrientationOutOfRange { index: 4 })
    );
}

#[test]
fn cells_turn_clockwise_and_keep_their_box() {
    // T: stem cell 0 points up at spawn and right after one clockwise turn.
    assert_eq!(cells(Kind::T, Orientation::North)[0], (1, 0));
    assert_eq!(cells(Kind::T, Orientation::East)[0], (2, 1));
    // O does not move, its cells just trade places.
    assert_eq!(cells(Kind::O, Orientation::East), [(1, 0), (1, 1), (0, 0), (0, 1)]);

    for &kind in Kind::all() {
        let mut o = Orientation::North;
        for _ in 0..4 {
            for (x, y) in cells(kind, o) {
                assert!((0..PIECE_BOX as i32).contains(&x));
                assert!((0..PIECE_BOX as i32).contains(&y));
            }
            o = o.rotate_cw();
        }
        assert_eq!(o, Orientation::North);
    }
}

#[test]
fn solid_o_piece_lights_a_six_by_six_square() {
    let table = VisualStyle::Solid.table().unwrap();
    let bm = rasterize(&table, Kind::O, Orientation::North).unwrap();

    assert_eq!(bm.lit_count(), 36);
    assert_eq!(bm.render_ascii(), "######\n".repeat(6));
    assert!(bm.get(5, 5));
    assert!(!bm.get(6, 0));
    assert!(!bm.get(100, 100));
}

#[test]
fn raster_slots_match_resolved_glyphs() {
    for &style in VisualStyle::all() {
        let table = style.table().unwrap();
        for &kind in Kind::all() {
            for &o in Orientation::all() {
                let bm = rasterize(&table, kind, o).unwrap();
                let glyphs = table.resolve_piece(kind, o).unwrap();
                for (&(x, y), g) in cells(kind, o).iter().zip(glyphs) {
                    let want = glyph_bitmap(g);
                    for (r, row) in want.iter().enumerate() {
                        for (c, &on) in row.iter().enumerate() {
                            let px = bm.get(x as usize * 3 + c, y as usize * 3 + r);
                            assert_eq!(px, on, "{style:?} {kind:?} {o:?}");
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn line_i_piece_renders_as_one_stroke() {
    let table = VisualStyle::Line.table().unwrap();
    let bm = rasterize(&table, Kind::I, Orientation::North).unwrap();
    let art = bm.render_ascii();
    let lines: Vec<&str> = art.lines().collect();

    assert_eq!(lines.len(), 12);
    // Row 4 is the middle pixel row of the I piece's cells: a stroke from the
    // first cell's centre to the last cell's centre.
    assert_eq!(lines[4], ".##########.");
    assert_eq!(bm.lit_count(), 10);
}

#[test]
fn x_style_uses_the_x_glyph_in_every_slot() {
    let table = VisualStyle::X.table().unwrap();
    let bm = rasterize(&table, Kind::S, Orientation::South).unwrap();
    let lit_per_glyph = glyph_bitmap(Glyph::X).iter().flatten().filter(|&&p| p).count();
    assert_eq!(bm.lit_count(), 4 * lit_per_glyph);
}
