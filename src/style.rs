/// Phrasing choices the decision engine reads on every call.
///
/// Built from [`WordClockSettings::style`](crate::settings::WordClockSettings::style);
/// the defaults match a fresh install.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Each toggle is an independent user setting"
)]
pub struct StyleConfig {
    /// Always light "ES IST".
    pub show_it_is: bool,
    /// "MITTERNACHT" for 0:00 to 0:04.
    pub use_midnight_word: bool,
    /// "NULL UHR ..." up to 0:24 (and 12:24) instead of naming twelve.
    pub use_zero_word: bool,
    /// "VIERTEL NACH / VIERTEL VOR" instead of "VIERTEL <next>" and "DREIVIERTEL".
    pub use_quarter_to: bool,
    /// "ZWANZIG NACH / ZWANZIG VOR" instead of "ZEHN VOR / ZEHN NACH HALB".
    pub use_twenty_to: bool,
}

impl StyleConfig {
    /// Every toggle on.
    pub const DEFAULT: Self = Self {
        show_it_is: true,
        use_midnight_word: true,
        use_zero_word: true,
        use_quarter_to: true,
        use_twenty_to: true,
    };
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
