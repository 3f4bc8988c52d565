//! The words printed on the clock face.
//!
//! Both shipped faces share one vocabulary; only the cells each [`Phrase`] occupies differ
//! (see [`WordLayout`](crate::word_layout::WordLayout)).

/// One word (or idiom) on the clock face.
///
/// The doc comment of each variant is the German text it lights up.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Phrase {
    /// ES
    It = 0,
    /// IST
    Is,
    /// NULL
    Zero,
    /// UHR (after NULL)
    ZeroOClock,
    /// ZWANZIG
    Twenty,
    /// FÜNF (minutes)
    Five,
    /// ZEHN (minutes)
    Ten,
    /// FÜNFZEHN
    Fifteen,
    /// DREI (inside DREIVIERTEL)
    Three,
    /// VIER (inside DREIVIERTEL)
    Four,
    /// VIERTEL
    Quarter,
    /// DREIVIERTEL
    ThreeQuarters,
    /// VOR
    To,
    /// NACH
    Past,
    /// UM
    At,
    /// HALB
    Half,
    /// ZWEI
    HourTwo,
    /// EIN, only used as "EIN UHR"
    HourOneShort,
    /// EINS
    HourOne,
    /// MITTERNACHT
    Midnight,
    /// ACHT
    HourEight,
    /// DREI
    HourThree,
    /// SECHS
    HourSix,
    /// VIER
    HourFour,
    /// SIEBEN
    HourSeven,
    /// ELF
    HourEleven,
    /// FÜNF
    HourFive,
    /// ZWÖLF
    HourTwelve,
    /// ZEHN
    HourTen,
    /// NEUN
    HourNine,
    /// UHR (full hour)
    OClock,
}

/// Number of phrases in the vocabulary.
pub const PHRASE_COUNT: usize = Phrase::ALL.len();

impl Phrase {
    /// Every phrase, in discriminant order.
    pub const ALL: [Self; 31] = [
        Self::It,
        Self::Is,
        Self::Zero,
        Self::ZeroOClock,
        Self::Twenty,
        Self::Five,
        Self::Ten,
        Self::Fifteen,
        Self::Three,
        Self::Four,
        Self::Quarter,
        Self::ThreeQuarters,
        Self::To,
        Self::Past,
        Self::At,
        Self::Half,
        Self::HourTwo,
        Self::HourOneShort,
        Self::HourOne,
        Self::Midnight,
        Self::HourEight,
        Self::HourThree,
        Self::HourSix,
        Self::HourFour,
        Self::HourSeven,
        Self::HourEleven,
        Self::HourFive,
        Self::HourTwelve,
        Self::HourTen,
        Self::HourNine,
        Self::OClock,
    ];

    /// Position of this phrase in [`Phrase::ALL`] and in layout tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The phrase naming an hour on the 12-hour dial (0 names twelve).
    ///
    /// Hours past 11 wrap, so callers may pass a 24-hour value.
    #[must_use]
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "Modulo folds the hour onto the dial"
    )]
    pub const fn hour(hour: u8) -> Self {
        match hour % 12 {
            0 => Self::HourTwelve,
            1 => Self::HourOne,
            2 => Self::HourTwo,
            3 => Self::HourThree,
            4 => Self::HourFour,
            5 => Self::HourFive,
            6 => Self::HourSix,
            7 => Self::HourSeven,
            8 => Self::HourEight,
            9 => Self::HourNine,
            10 => Self::HourTen,
            _ => Self::HourEleven,
        }
    }
}

/// A set of phrases, stored as one bit per [`Phrase`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PhraseSet(u32);

const _: () = assert!(PHRASE_COUNT <= u32::BITS as usize, "PhraseSet needs one bit per phrase");

impl PhraseSet {
    /// The empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a phrase. Adding a phrase twice is a no-op.
    pub const fn insert(&mut self, phrase: Phrase) {
        self.0 |= 1 << phrase.index();
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub const fn with(mut self, phrase: Phrase) -> Self {
        self.insert(phrase);
        self
    }

    #[must_use]
    pub const fn contains(&self, phrase: Phrase) -> bool {
        self.0 & (1 << phrase.index()) != 0
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Phrases in the set, in discriminant order.
    pub fn iter(&self) -> impl Iterator<Item = Phrase> + '_ {
        Phrase::ALL
            .into_iter()
            .filter(move |&phrase| self.contains(phrase))
    }
}

impl FromIterator<Phrase> for PhraseSet {
    fn from_iter<I: IntoIterator<Item = Phrase>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}
