//! Decides which words and minute dots describe a time of day.
//!
//! See [`decide`].

use crate::phrase::{Phrase, PhraseSet};
use crate::shared_constants::{
    HOURS_PER_DAY, HOURS_PER_DIAL, MINUTE_DOT_COUNT, MINUTES_PER_BAND, MINUTES_PER_HOUR,
};
use crate::style::StyleConfig;

/// "NULL UHR" covers :00 through :24.
const ZERO_WORD_BANDS: u8 = 5;

/// How many of the four minute dots are lit. Dot `i` is lit iff `i < count`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinuteDots(u8);

impl MinuteDots {
    /// Dots for `minute`: one per minute past the last 5-minute boundary.
    #[must_use]
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "Remainder picks the minutes inside the band"
    )]
    pub const fn for_minute(minute: u8) -> Self {
        Self(minute % MINUTES_PER_BAND)
    }

    #[must_use]
    pub const fn count(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn is_lit(self, dot: usize) -> bool {
        dot < self.count()
    }

    /// Indexes of the lit dots, dot 0 first.
    pub fn lit(self) -> impl Iterator<Item = usize> {
        (0..MINUTE_DOT_COUNT).take(self.count())
    }
}

/// What the face shows for one time of day.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decision {
    pub phrases: PhraseSet,
    pub dots: MinuteDots,
}

/// Choose the words and minute dots for `hour:minute`.
///
/// Pure and total: `hour` is taken mod 24 and `minute` mod 60 first, and every input
/// names at least one word. Special cases are checked before the 5-minute ladder:
/// "MITTERNACHT" (0:00-0:04), then "NULL UHR" (hour 0 or 12, up to :24).
///
/// # Example
///
/// ```rust
/// use word_clock::decision::decide;
/// use word_clock::phrase::{Phrase, PhraseSet};
/// use word_clock::style::StyleConfig;
///
/// // 9:47 -> "ES IST DREIVIERTEL ZEHN" and two dots
/// let style = StyleConfig { use_quarter_to: false, ..StyleConfig::DEFAULT };
/// let decision = decide(9, 47, &style);
/// let expected: PhraseSet = [Phrase::It, Phrase::Is, Phrase::ThreeQuarters, Phrase::HourTen]
///     .into_iter()
///     .collect();
/// assert_eq!(decision.phrases, expected);
/// assert_eq!(decision.dots.count(), 2);
/// ```
#[must_use]
#[expect(
    clippy::integer_division_remainder_used,
    clippy::arithmetic_side_effects,
    reason = "Operands are reduced mod 24 / mod 60 first; nothing can overflow"
)]
pub fn decide(hour: u8, minute: u8, style: &StyleConfig) -> Decision {
    let hour24 = hour % HOURS_PER_DAY;
    let hour12 = hour24 % HOURS_PER_DIAL;
    let hour_next = (hour24 + 1) % HOURS_PER_DIAL;
    let minute = minute % MINUTES_PER_HOUR;

    let mut phrases = PhraseSet::new();
    if style.show_it_is {
        phrases.insert(Phrase::It);
        phrases.insert(Phrase::Is);
    }

    if style.use_midnight_word && hour24 == 0 && minute < MINUTES_PER_BAND {
        phrases.insert(Phrase::Midnight);
    } else if style.use_zero_word && hour12 == 0 && minute < ZERO_WORD_BANDS * MINUTES_PER_BAND {
        zero_hour(&mut phrases, minute / MINUTES_PER_BAND);
    } else {
        ladder(&mut phrases, minute / MINUTES_PER_BAND, hour12, hour_next, style);
    }

    Decision {
        phrases,
        dots: MinuteDots::for_minute(minute),
    }
}

/// "NULL UHR", "NULL UHR FÜNF", ... "NULL UHR ZWANZIG".
fn zero_hour(phrases: &mut PhraseSet, band: u8) {
    phrases.insert(Phrase::Zero);
    phrases.insert(Phrase::ZeroOClock);
    match band {
        0 => {}
        1 => phrases.insert(Phrase::Five),
        2 => phrases.insert(Phrase::Ten),
        3 => phrases.insert(Phrase::Fifteen),
        _ => phrases.insert(Phrase::Twenty),
    }
}

/// The twelve 5-minute bands of an ordinary hour.
fn ladder(phrases: &mut PhraseSet, band: u8, hour: u8, hour_next: u8, style: &StyleConfig) {
    let named_hour = match band {
        // :00 "EIN UHR", not "EINS UHR"
        0 => {
            phrases.insert(Phrase::OClock);
            if hour == 1 {
                phrases.insert(Phrase::HourOneShort);
                return;
            }
            hour
        }
        // :05 "FÜNF NACH"
        1 => {
            phrases.insert(Phrase::Five);
            phrases.insert(Phrase::Past);
            hour
        }
        // :10 "ZEHN NACH"
        2 => {
            phrases.insert(Phrase::Ten);
            phrases.insert(Phrase::Past);
            hour
        }
        // :15 "VIERTEL NACH <hour>" or "VIERTEL <next>"
        3 => {
            phrases.insert(Phrase::Quarter);
            if style.use_quarter_to {
                phrases.insert(Phrase::Past);
                hour
            } else {
                hour_next
            }
        }
        // :20 "ZWANZIG NACH <hour>" or "ZEHN VOR HALB <next>"
        4 => {
            if style.use_twenty_to {
                phrases.insert(Phrase::Twenty);
                phrases.insert(Phrase::Past);
                hour
            } else {
                phrases.insert(Phrase::Ten);
                phrases.insert(Phrase::To);
                phrases.insert(Phrase::Half);
                hour_next
            }
        }
        // :25 "FÜNF VOR HALB"
        5 => {
            phrases.insert(Phrase::Five);
            phrases.insert(Phrase::To);
            phrases.insert(Phrase::Half);
            hour_next
        }
        // :30 "HALB"
        6 => {
            phrases.insert(Phrase::Half);
            hour_next
        }
        // :35 "FÜNF NACH HALB"
        7 => {
            phrases.insert(Phrase::Five);
            phrases.insert(Phrase::Past);
            phrases.insert(Phrase::Half);
            hour_next
        }
        // :40 "ZWANZIG VOR" or "ZEHN NACH HALB"
        8 => {
            if style.use_twenty_to {
                phrases.insert(Phrase::Twenty);
                phrases.insert(Phrase::To);
            } else {
                phrases.insert(Phrase::Ten);
                phrases.insert(Phrase::Past);
                phrases.insert(Phrase::Half);
            }
            hour_next
        }
        // :45 "VIERTEL VOR" or "DREIVIERTEL"
        9 => {
            if style.use_quarter_to {
                phrases.insert(Phrase::Quarter);
                phrases.insert(Phrase::To);
            } else {
                phrases.insert(Phrase::ThreeQuarters);
            }
            hour_next
        }
        // :50 "ZEHN VOR"
        10 => {
            phrases.insert(Phrase::Ten);
            phrases.insert(Phrase::To);
            hour_next
        }
        // :55 "FÜNF VOR"
        _ => {
            phrases.insert(Phrase::Five);
            phrases.insert(Phrase::To);
            hour_next
        }
    };
    phrases.insert(Phrase::hour(named_hour));
}
