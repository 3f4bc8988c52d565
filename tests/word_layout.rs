//! Host-level tests for the shipped word layouts.

use word_clock::phrase::Phrase;
use word_clock::shared_constants::GRID_CELL_COUNT;
use word_clock::word_layout::{GRID_13X11, GRID_13X11_MIRRORED, LedRange, WordLayout};

const EXPECTED_13X11: [(Phrase, u16, u16); 31] = [
    (Phrase::It, 1, 2),
    (Phrase::Is, 4, 6),
    (Phrase::Zero, 8, 11),
    (Phrase::ZeroOClock, 14, 16),
    (Phrase::Twenty, 18, 24),
    (Phrase::Five, 28, 31),
    (Phrase::Ten, 32, 35),
    (Phrase::Fifteen, 28, 35),
    (Phrase::Three, 40, 43),
    (Phrase::Four, 44, 47),
    (Phrase::Quarter, 44, 50),
    (Phrase::ThreeQuarters, 40, 50),
    (Phrase::To, 54, 56),
    (Phrase::Past, 57, 60),
    (Phrase::At, 62, 63),
    (Phrase::Half, 66, 69),
    (Phrase::HourTwo, 71, 74),
    (Phrase::HourOneShort, 73, 75),
    (Phrase::HourOne, 73, 76),
    (Phrase::Midnight, 79, 89),
    (Phrase::HourEight, 86, 89),
    (Phrase::HourThree, 93, 96),
    (Phrase::HourSix, 97, 101),
    (Phrase::HourFour, 105, 108),
    (Phrase::HourSeven, 109, 114),
    (Phrase::HourEleven, 118, 120),
    (Phrase::HourFive, 120, 123),
    (Phrase::HourTwelve, 124, 128),
    (Phrase::HourTen, 131, 134),
    (Phrase::HourNine, 134, 137),
    (Phrase::OClock, 139, 141),
];

#[test]
fn grid_13x11_matches_expected() {
    for (phrase, first, last) in EXPECTED_13X11 {
        assert_eq!(GRID_13X11.range(phrase), LedRange::new(first, last), "{phrase:?}");
    }
    assert_eq!(GRID_13X11.minute_dots(), &[130, 0, 12, 142]);
    assert_eq!(GRID_13X11.cell_count(), GRID_CELL_COUNT);
}

#[test]
fn every_range_is_inside_the_face() {
    for layout in [&GRID_13X11, &GRID_13X11_MIRRORED] {
        for phrase in Phrase::ALL {
            let range = layout.range(phrase);
            assert!(range.first() <= range.last());
            assert!(usize::from(range.last()) < layout.cell_count());
        }
        for &dot in layout.minute_dots() {
            assert!(usize::from(dot) < layout.cell_count());
        }
    }
}

#[test]
fn mirrored_reverses_each_row() {
    assert_eq!(GRID_13X11_MIRRORED.range(Phrase::It), LedRange::new(10, 11));
    assert_eq!(GRID_13X11_MIRRORED.range(Phrase::Twenty), LedRange::new(14, 20));
    assert_eq!(GRID_13X11_MIRRORED.range(Phrase::OClock), LedRange::new(131, 133));
    assert_eq!(GRID_13X11_MIRRORED.minute_dots(), &[142, 12, 0, 130]);
    for phrase in Phrase::ALL {
        assert_eq!(
            GRID_13X11_MIRRORED.range(phrase).len(),
            GRID_13X11.range(phrase).len(),
            "{phrase:?}"
        );
    }
}

#[test]
fn mirrored_merges_the_four_slots() {
    assert_eq!(GRID_13X11_MIRRORED.range(Phrase::HourFour), LedRange::new(112, 115));
    assert_eq!(
        GRID_13X11_MIRRORED.range(Phrase::Four),
        GRID_13X11_MIRRORED.range(Phrase::HourFour)
    );
}

#[test]
fn minute_dot_past_last_is_none() {
    assert_eq!(GRID_13X11.minute_dot(0), Some(130));
    assert_eq!(GRID_13X11.minute_dot(3), Some(142));
    assert_eq!(GRID_13X11.minute_dot(4), None);
}

#[test]
fn custom_layout_builds_from_table() {
    // A 5x2 toy face whose every word is one cell and whose dots sit in the corners
    let mut table = [(Phrase::It, 0_u16, 0_u16); 31];
    for (row, phrase) in table.iter_mut().zip(Phrase::ALL) {
        *row = (phrase, 1, 1);
    }
    let layout: WordLayout<10> = WordLayout::new(table, [0, 4, 5, 9]);
    assert_eq!(layout.range(Phrase::OClock), LedRange::new(1, 1));
    assert_eq!(layout.cell_count(), 10);

    let flipped = layout.flip_h::<5>();
    assert_eq!(flipped.range(Phrase::OClock), LedRange::new(3, 3));
    assert_eq!(flipped.minute_dots(), &[4, 0, 9, 5]);
}

#[test]
#[should_panic(expected = "minute dot inside a word")]
fn dot_inside_word_is_rejected() {
    let _ = GRID_13X11.with_minute_dots([130, 0, 12, 1]);
}

#[test]
#[should_panic(expected = "table rows must follow Phrase::ALL order")]
fn out_of_order_table_is_rejected() {
    let mut table = EXPECTED_13X11;
    table.swap(0, 1);
    let _: WordLayout<GRID_CELL_COUNT> = WordLayout::new(table, [130, 0, 12, 142]);
}

#[test]
fn led_range_contains_both_ends() {
    let range = LedRange::new(66, 69);
    assert!(range.contains(66) && range.contains(69));
    assert!(!range.contains(65) && !range.contains(70));
    assert_eq!(range.len(), 4);
    assert_eq!(range.indexes(), 66..=69);
}
