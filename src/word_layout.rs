//! A fully const module that tells which LED cells each word of the clock face occupies.
//!
//! See [`WordLayout`] for the shipped faces and for how to derive a rewired variant.

use core::ops::RangeInclusive;

use crate::phrase::{PHRASE_COUNT, Phrase};
use crate::shared_constants::{GRID_CELL_COUNT, GRID_COLUMNS, MINUTE_DOT_COUNT};

/// An inclusive run of LED indexes, `first..=last`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedRange {
    first: u16,
    last: u16,
}

impl LedRange {
    #[must_use]
    pub const fn new(first: u16, last: u16) -> Self {
        assert!(first <= last, "range must not be reversed");
        Self { first, last }
    }

    #[must_use]
    pub const fn first(&self) -> u16 {
        self.first
    }

    #[must_use]
    pub const fn last(&self) -> u16 {
        self.last
    }

    /// Number of cells in the range (never zero).
    #[must_use]
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "first <= last is checked by the constructor"
    )]
    pub const fn len(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    #[must_use]
    pub const fn contains(&self, index: u16) -> bool {
        self.first <= index && index <= self.last
    }

    /// The LED indexes covered, ready for slice access.
    #[must_use]
    pub fn indexes(&self) -> RangeInclusive<usize> {
        usize::from(self.first)..=usize::from(self.last)
    }
}

/// A fully const table mapping every [`Phrase`] to the LEDs it lights, plus the
/// four minute dots. `N` is the number of cells the face occupies on the strip.
///
/// # Examples
///
/// ```rust
/// use word_clock::phrase::Phrase;
/// use word_clock::word_layout::{GRID_13X11, GRID_13X11_MIRRORED};
///
/// // The mirrored wiring reverses each 13-cell row...
/// const _: () = assert!(GRID_13X11.range(Phrase::It).first() == 1);
/// const _: () = assert!(GRID_13X11_MIRRORED.range(Phrase::It).first() == 10);
///
/// // ...and has a single slot for both "four" words.
/// assert_eq!(
///     GRID_13X11_MIRRORED.range(Phrase::Four),
///     GRID_13X11_MIRRORED.range(Phrase::HourFour)
/// );
/// assert_ne!(GRID_13X11.range(Phrase::Four), GRID_13X11.range(Phrase::HourFour));
/// ```
///
/// Compile-time validation catches configuration errors:
///
/// ```compile_fail
/// # use word_clock::word_layout::{GRID_13X11, WordLayout};
/// // Minute dot 200 does not exist on a 143-cell face - caught at compile time
/// const INVALID: WordLayout<143> = GRID_13X11.with_minute_dots([130, 0, 12, 200]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordLayout<const N: usize> {
    ranges: [LedRange; PHRASE_COUNT],
    minute_dots: [u16; MINUTE_DOT_COUNT],
}

impl<const N: usize> WordLayout<N> {
    /// Constructor: one `(phrase, first, last)` row per phrase, in [`Phrase::ALL`] order,
    /// and the minute dots in lighting order.
    ///
    /// Panics (at compile time when used in a `const`) if a phrase is missing or out of
    /// order, if a range or dot falls outside `0..N`, if two dots share a cell, or if a
    /// dot sits inside a word. Word ranges may overlap each other.
    #[must_use]
    pub const fn new(
        table: [(Phrase, u16, u16); PHRASE_COUNT],
        minute_dots: [u16; MINUTE_DOT_COUNT],
    ) -> Self {
        let mut ranges = [LedRange::new(0, 0); PHRASE_COUNT];
        let mut i = 0;
        while i < PHRASE_COUNT {
            let (phrase, first, last) = table[i];
            assert!(phrase.index() == i, "table rows must follow Phrase::ALL order");
            ranges[i] = LedRange::new(first, last);
            i += 1;
        }
        Self::validated(ranges, minute_dots)
    }

    const fn validated(
        ranges: [LedRange; PHRASE_COUNT],
        minute_dots: [u16; MINUTE_DOT_COUNT],
    ) -> Self {
        assert!(N > 0, "N must be positive");
        assert!(N <= u16::MAX as usize, "cell indexes must fit in u16");

        let mut i = 0;
        while i < PHRASE_COUNT {
            assert!(ranges[i].first <= ranges[i].last, "range must not be reversed");
            assert!((ranges[i].last as usize) < N, "word range out of bounds");
            i += 1;
        }

        let mut dot = 0;
        while dot < MINUTE_DOT_COUNT {
            let index = minute_dots[dot];
            assert!((index as usize) < N, "minute dot out of bounds");

            let mut other = 0;
            while other < dot {
                assert!(minute_dots[other] != index, "duplicate minute dot");
                other += 1;
            }

            let mut word = 0;
            while word < PHRASE_COUNT {
                assert!(!ranges[word].contains(index), "minute dot inside a word");
                word += 1;
            }
            dot += 1;
        }

        Self {
            ranges,
            minute_dots,
        }
    }

    /// Cells lit by `phrase`.
    #[must_use]
    pub const fn range(&self, phrase: Phrase) -> LedRange {
        self.ranges[phrase.index()]
    }

    /// Cell of minute dot `dot` (0 lights first). `None` past the last dot.
    #[must_use]
    pub const fn minute_dot(&self, dot: usize) -> Option<u16> {
        if dot < MINUTE_DOT_COUNT {
            Some(self.minute_dots[dot])
        } else {
            None
        }
    }

    #[must_use]
    pub const fn minute_dots(&self) -> &[u16; MINUTE_DOT_COUNT] {
        &self.minute_dots
    }

    /// Number of cells on the face.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        N
    }

    /// Same words, minute dots moved.
    #[must_use]
    pub const fn with_minute_dots(self, minute_dots: [u16; MINUTE_DOT_COUNT]) -> Self {
        Self::validated(self.ranges, minute_dots)
    }

    /// Wire `phrase` to the cells of `owner`, for faces that print one word for both.
    #[must_use]
    pub const fn share_slot(self, phrase: Phrase, owner: Phrase) -> Self {
        let mut ranges = self.ranges;
        ranges[phrase.index()] = ranges[owner.index()];
        Self::validated(ranges, self.minute_dots)
    }

    /// Mirror every row of a `W`-wide face: the strip enters each row from the other side.
    ///
    /// ```text
    /// W = 5:   before        after
    ///          0 [1 2] 3 4    0 1 [2 3] 4
    /// ```
    ///
    /// Panics if `W` does not divide `N` or a word spans two rows.
    #[must_use]
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        clippy::cast_possible_truncation,
        reason = "Indexes are < N <= u16::MAX, checked by validated()"
    )]
    pub const fn flip_h<const W: usize>(self) -> Self {
        assert!(W > 0 && N % W == 0, "W must divide N");

        let mut ranges = self.ranges;
        let mut i = 0;
        while i < PHRASE_COUNT {
            let first = self.ranges[i].first as usize;
            let last = self.ranges[i].last as usize;
            let row_start = first - first % W;
            assert!(last - last % W == row_start, "word spans two rows");
            ranges[i] = LedRange::new(
                (row_start + (W - 1 - last % W)) as u16,
                (row_start + (W - 1 - first % W)) as u16,
            );
            i += 1;
        }

        let mut minute_dots = self.minute_dots;
        let mut dot = 0;
        while dot < MINUTE_DOT_COUNT {
            let index = self.minute_dots[dot] as usize;
            let row_start = index - index % W;
            minute_dots[dot] = (row_start + (W - 1 - index % W)) as u16;
            dot += 1;
        }

        Self::validated(ranges, minute_dots)
    }

    /// Const equality helper for const assertions.
    #[must_use]
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < PHRASE_COUNT {
            if self.ranges[i].first != other.ranges[i].first
                || self.ranges[i].last != other.ranges[i].last
            {
                return false;
            }
            i += 1;
        }
        let mut dot = 0;
        while dot < MINUTE_DOT_COUNT {
            if self.minute_dots[dot] != other.minute_dots[dot] {
                return false;
            }
            dot += 1;
        }
        true
    }
}

/// The 13×11 face wired from the top-left cell; the first and last column hold only
/// the minute dots in the first and last row.
///
/// Letters in strip order:
///
/// ```text
/// dot  E S · I S T · N U L L  dot     row 1
///      · U H R · Z W A N Z I G ·      row 2
///      ...
/// dot  Z E H N E U N · U H R  dot     row 11
/// ```
///
/// Dots light bottom-left, top-left, top-right, bottom-right.
pub const GRID_13X11: WordLayout<GRID_CELL_COUNT> = WordLayout::new(
    [
        // row 1
        (Phrase::It, 1, 2),
        (Phrase::Is, 4, 6),
        (Phrase::Zero, 8, 11),
        // row 2
        (Phrase::ZeroOClock, 14, 16),
        (Phrase::Twenty, 18, 24),
        // row 3
        (Phrase::Five, 28, 31),
        (Phrase::Ten, 32, 35),
        (Phrase::Fifteen, 28, 35),
        // row 4
        (Phrase::Three, 40, 43),
        (Phrase::Four, 44, 47),
        (Phrase::Quarter, 44, 50),
        (Phrase::ThreeQuarters, 40, 50),
        // row 5
        (Phrase::To, 54, 56),
        (Phrase::Past, 57, 60),
        (Phrase::At, 62, 63),
        // row 6
        (Phrase::Half, 66, 69),
        (Phrase::HourTwo, 71, 74),
        (Phrase::HourOneShort, 73, 75),
        (Phrase::HourOne, 73, 76),
        // row 7
        (Phrase::Midnight, 79, 89),
        (Phrase::HourEight, 86, 89),
        // row 8
        (Phrase::HourThree, 93, 96),
        (Phrase::HourSix, 97, 101),
        // row 9
        (Phrase::HourFour, 105, 108),
        (Phrase::HourSeven, 109, 114),
        // row 10
        (Phrase::HourEleven, 118, 120),
        (Phrase::HourFive, 120, 123),
        (Phrase::HourTwelve, 124, 128),
        // row 11
        (Phrase::HourTen, 131, 134),
        (Phrase::HourNine, 134, 137),
        (Phrase::OClock, 139, 141),
    ],
    [130, 0, 12, 142],
);

/// The same letters wired from the top-right cell. This wiring lights a single VIER slot
/// for both words, so [`Phrase::Four`] shares the hour-four cells.
pub const GRID_13X11_MIRRORED: WordLayout<GRID_CELL_COUNT> = GRID_13X11
    .flip_h::<GRID_COLUMNS>()
    .share_slot(Phrase::Four, Phrase::HourFour);

const _: () = assert!(
    GRID_13X11
        .flip_h::<GRID_COLUMNS>()
        .flip_h::<GRID_COLUMNS>()
        .equals(&GRID_13X11)
);
