//! End-to-end coverage of the game-facing drawing and print API.

use retroscreen::types::{Color, SCREEN_COLS, SCREEN_ROWS};
use retroscreen::Engine;

#[test]
fn print_returns_col_plus_len_minus_one_for_plain_text() {
    let mut engine = Engine::without_flash_ticker();
    for (row, col, text) in [(0, 0, "a"), (5, 3, "hello"), (SCREEN_ROWS - 1, 10, "xyz")] {
        let end = engine.print(row, col, text);
        assert_eq!(end, col + text.len() as i32 - 1);
        for (i, ch) in text.chars().enumerate() {
            let cell = engine.cell(row, col + i as i32).unwrap();
            assert_eq!(cell.character, ch);
            assert_eq!(cell.pen, Color::BLACK);
            assert_eq!(cell.paper, Color::WHITE);
        }
    }
}

#[test]
fn printed_cells_carry_the_current_attributes() {
    let mut engine = Engine::without_flash_ticker();
    engine.set_pen(Color::YELLOW);
    engine.set_paper(Color::BLUE);
    engine.set_invert(true);
    engine.set_flash(true);
    engine.print(2, 2, "A");

    let cell = engine.cell(2, 2).unwrap();
    assert_eq!(cell.pen, Color::YELLOW);
    assert_eq!(cell.paper, Color::BLUE);
    assert!(cell.invert);
    assert!(cell.flash);
    // Inverted draw: the glyph's set bits are painted with the paper colour.
    // 'A' has a set bit at (3, 1) in its 8x8 block.
    assert_eq!(engine.pixel(2 * 8 + 3, 2 * 8 + 1), Color::BLUE);
}

#[test]
fn print_beyond_the_right_edge_skips_but_advances() {
    let mut engine = Engine::without_flash_ticker();
    let end = engine.print(0, SCREEN_COLS - 1, "abc");
    assert_eq!(end, SCREEN_COLS + 1);
    assert_eq!(engine.cell(0, SCREEN_COLS - 1).unwrap().character, 'a');
    assert!(engine.cell(0, SCREEN_COLS).is_none());
}

#[test]
fn registered_graphic_glyph_paints_its_exact_bitmap() {
    let mut engine = Engine::without_flash_ticker();
    engine
        .set_graphic_glyph(
            'a',
            &[
                "00011000", "00011000", "00111100", "00011000", "00011000", "00011000",
                "00111100", "01100110",
            ],
        )
        .unwrap();

    engine.set_pen(Color::RED);
    engine.set_paper(Color::CYAN);
    engine.print(0, 0, "\u{00ac}a");

    let expected: [u8; 8] = [0x18, 0x18, 0x3C, 0x18, 0x18, 0x18, 0x3C, 0x66];
    for (y, bits) in expected.iter().enumerate() {
        for x in 0..8 {
            let want = if bits & (0x80 >> x) != 0 {
                Color::RED
            } else {
                Color::CYAN
            };
            assert_eq!(engine.pixel(x, y as i32), want, "pixel ({x},{y})");
        }
    }
}

#[test]
fn transparent_paper_only_paints_the_set_bits() {
    let mut engine = Engine::without_flash_ticker();
    engine.clear(Color::GREEN);
    engine
        .set_graphic_glyph('b', &["10000000", "00000000", "00000000", "00000000",
            "00000000", "00000000", "00000000", "00000001"])
        .unwrap();

    engine.set_pen(Color::BLACK);
    engine.set_paper(Color::TRANSPARENT);
    engine.print(0, 0, "\u{00ac}b");

    assert_eq!(engine.pixel(0, 0), Color::BLACK);
    assert_eq!(engine.pixel(7, 7), Color::BLACK);
    assert_eq!(engine.pixel(3, 3), Color::GREEN);
}

#[test]
fn invalid_glyph_registrations_are_rejected() {
    let mut engine = Engine::without_flash_ticker();
    assert!(engine.set_graphic_glyph('A', &["00000000"; 8]).is_err());
    assert!(engine.set_graphic_glyph('a', &["00000000"; 6]).is_err());
    assert!(engine.set_graphic_glyph('a', &["0000200x"; 8]).is_err());
}

#[test]
fn clear_wipes_ad_hoc_drawings_and_resets_attributes() {
    let mut engine = Engine::without_flash_ticker();
    engine.set_pen(Color::RED);
    engine.line(0, 0, 479, 319);
    engine.print(3, 3, "junk");

    engine.clear(Color::YELLOW);

    assert_eq!(engine.pixel(100, 66), Color::YELLOW);
    let cell = engine.cell(3, 3).unwrap();
    assert_eq!(cell.character, ' ');
    assert_eq!(cell.paper, Color::YELLOW);
    assert!(!cell.flash);
    assert!(!cell.invert);
}

#[test]
fn cell_and_pixel_queries_outside_bounds_are_benign() {
    let engine = Engine::without_flash_ticker();
    assert!(engine.cell(-1, 0).is_none());
    assert!(engine.cell(0, -1).is_none());
    assert!(engine.cell(SCREEN_ROWS, 0).is_none());
    assert_eq!(engine.pixel(-5, -5), Color::BLACK);
    assert_eq!(engine.pixel(9999, 0), Color::BLACK);
}
