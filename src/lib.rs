//! A German word clock: turns the time of day into the set of letter LEDs to keep lit.
//!
//! [`decision::decide`] picks the words, [`mask::Mask`] maps them onto a
//! [`word_layout::WordLayout`], and [`usermod::WordClockUsermod`] plugs the result into a
//! host LED firmware by blanking every unlit cell of each outgoing frame.
#![cfg_attr(not(test), no_std)]

pub mod decision;
mod error;
pub mod mask;
pub mod phrase;
pub mod settings;
pub mod shared_constants;
pub mod style;
pub mod usermod;
pub mod word_clock;
pub mod word_layout;

// Re-export commonly used items
pub use decision::{Decision, MinuteDots, decide};
pub use error::{Error, Result};
pub use mask::Mask;
pub use phrase::{Phrase, PhraseSet};
pub use settings::{SettingValue, SettingsMap, SettingsStore, WordClockSettings};
pub use style::StyleConfig;
pub use usermod::{Usermod, WORD_CLOCK_NAME, WordClockUsermod};
pub use word_clock::{Rgb, WordClock};
pub use word_layout::{GRID_13X11, GRID_13X11_MIRRORED, LedRange, WordLayout};
