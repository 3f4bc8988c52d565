//! Persisted word-clock settings and the flat key/value contract the host stores them with.
//!
//! The host loads the settings once at boot (and again whenever the user saves them),
//! asks [`WordClockSettings::read_from`] whether every key was present, and re-persists
//! the defaults via [`WordClockSettings::write_to`] if not.

use heapless::LinearMap;
use serde::{Deserialize, Serialize};

use crate::style::StyleConfig;
use crate::{Error, Result};

pub const KEY_ACTIVE: &str = "active";
pub const KEY_LED_OFFSET: &str = "ledOffset";
pub const KEY_IT_IS: &str = "itIs";
pub const KEY_MIDNIGHT: &str = "midnight";
pub const KEY_NULL: &str = "null";
pub const KEY_QUARTER_TO: &str = "quarterTo";
pub const KEY_TWENTY_TO: &str = "twentyTo";
pub const KEY_TEST_MODE: &str = "testMode";

/// Every recognized key, in the order they are written.
pub const SETTING_KEYS: [&str; 8] = [
    KEY_ACTIVE,
    KEY_LED_OFFSET,
    KEY_IT_IS,
    KEY_MIDNIGHT,
    KEY_NULL,
    KEY_QUARTER_TO,
    KEY_TWENTY_TO,
    KEY_TEST_MODE,
];

/// Number of recognized keys.
pub const SETTING_COUNT: usize = SETTING_KEYS.len();

/// A primitive settings value.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingValue {
    Bool(bool),
    Int(i32),
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

/// Host-side storage for the flat key/value settings section.
pub trait SettingsStore {
    /// The stored value, `None` if the key is absent.
    fn get(&self, key: &str) -> Option<SettingValue>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot hold another key.
    fn set(&mut self, key: &'static str, value: SettingValue) -> Result<()>;
}

/// A fixed-capacity in-memory [`SettingsStore`], large enough for every recognized key.
#[derive(Debug, Clone, Default)]
pub struct SettingsMap(LinearMap<&'static str, SettingValue, SETTING_COUNT>);

impl SettingsMap {
    #[must_use]
    pub const fn new() -> Self {
        Self(LinearMap::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop `key`; returns the value it held.
    pub fn remove(&mut self, key: &str) -> Option<SettingValue> {
        self.0.remove(key)
    }
}

impl SettingsStore for SettingsMap {
    fn get(&self, key: &str) -> Option<SettingValue> {
        self.0.get(key).copied()
    }

    fn set(&mut self, key: &'static str, value: SettingValue) -> Result<()> {
        self.0
            .insert(key, value)
            .map(|_| ())
            .map_err(|_| Error::SettingsStoreFull)
    }
}

/// Everything the user can configure, with the boot defaults.
///
/// Serializes to the same flat keys as [`SettingsStore`]; missing keys deserialize to
/// their default.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Each toggle is an independent user setting"
)]
pub struct WordClockSettings {
    /// When false the overlay never blanks a cell.
    pub active: bool,
    /// Number of strip LEDs before the first cell of the face.
    ///
    /// Narrowed to `u16`: a negative or larger stored value is rejected with
    /// [`Error::SettingOutOfRange`] and the offset keeps its previous value.
    #[serde(rename = "ledOffset")]
    pub led_offset: u16,
    #[serde(rename = "itIs")]
    pub show_it_is: bool,
    #[serde(rename = "midnight")]
    pub use_midnight_word: bool,
    #[serde(rename = "null")]
    pub use_zero_word: bool,
    #[serde(rename = "quarterTo")]
    pub use_quarter_to: bool,
    #[serde(rename = "twentyTo")]
    pub use_twenty_to: bool,
    /// Advance one simulated minute per poll instead of following the wall clock.
    #[serde(rename = "testMode")]
    pub test_mode: bool,
}

impl WordClockSettings {
    pub const DEFAULT: Self = Self {
        active: true,
        led_offset: 0,
        show_it_is: StyleConfig::DEFAULT.show_it_is,
        use_midnight_word: StyleConfig::DEFAULT.use_midnight_word,
        use_zero_word: StyleConfig::DEFAULT.use_zero_word,
        use_quarter_to: StyleConfig::DEFAULT.use_quarter_to,
        use_twenty_to: StyleConfig::DEFAULT.use_twenty_to,
        test_mode: false,
    };

    /// The phrasing toggles, as the decision engine sees them.
    #[must_use]
    pub const fn style(&self) -> StyleConfig {
        StyleConfig {
            show_it_is: self.show_it_is,
            use_midnight_word: self.use_midnight_word,
            use_zero_word: self.use_zero_word,
            use_quarter_to: self.use_quarter_to,
            use_twenty_to: self.use_twenty_to,
        }
    }

    /// Current value of `key`, `None` for unknown keys.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<SettingValue> {
        let value = match key {
            KEY_ACTIVE => self.active.into(),
            KEY_LED_OFFSET => i32::from(self.led_offset).into(),
            KEY_IT_IS => self.show_it_is.into(),
            KEY_MIDNIGHT => self.use_midnight_word.into(),
            KEY_NULL => self.use_zero_word.into(),
            KEY_QUARTER_TO => self.use_quarter_to.into(),
            KEY_TWENTY_TO => self.use_twenty_to.into(),
            KEY_TEST_MODE => self.test_mode.into(),
            _ => return None,
        };
        Some(value)
    }

    /// Set one setting from the host UI or a settings file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSettingKey`] for keys not in [`SETTING_KEYS`],
    /// [`Error::SettingTypeMismatch`] when a flag gets a number or vice versa, and
    /// [`Error::SettingOutOfRange`] for an LED offset outside `0..=u16::MAX`. The
    /// setting keeps its value on error.
    pub fn apply(&mut self, key: &str, value: SettingValue) -> Result<()> {
        let (key, flag) = match key {
            KEY_ACTIVE => (KEY_ACTIVE, &mut self.active),
            KEY_IT_IS => (KEY_IT_IS, &mut self.show_it_is),
            KEY_MIDNIGHT => (KEY_MIDNIGHT, &mut self.use_midnight_word),
            KEY_NULL => (KEY_NULL, &mut self.use_zero_word),
            KEY_QUARTER_TO => (KEY_QUARTER_TO, &mut self.use_quarter_to),
            KEY_TWENTY_TO => (KEY_TWENTY_TO, &mut self.use_twenty_to),
            KEY_TEST_MODE => (KEY_TEST_MODE, &mut self.test_mode),
            KEY_LED_OFFSET => {
                let SettingValue::Int(offset) = value else {
                    return Err(Error::SettingTypeMismatch {
                        key: KEY_LED_OFFSET,
                    });
                };
                self.led_offset = u16::try_from(offset).map_err(|_| Error::SettingOutOfRange {
                    key: KEY_LED_OFFSET,
                })?;
                return Ok(());
            }
            _ => return Err(Error::UnknownSettingKey),
        };

        let SettingValue::Bool(on) = value else {
            return Err(Error::SettingTypeMismatch { key });
        };
        *flag = on;
        Ok(())
    }

    /// Load every recognized key present in `store`.
    ///
    /// Returns `true` only if every key was present and accepted. Missing or rejected
    /// keys keep their current value, so the host should write the settings back when
    /// this returns `false`.
    pub fn read_from(&mut self, store: &dyn SettingsStore) -> bool {
        let mut complete = true;
        for key in SETTING_KEYS {
            let Some(value) = store.get(key) else {
                complete = false;
                continue;
            };
            if let Err(_error) = self.apply(key, value) {
                #[cfg(feature = "defmt")]
                defmt::warn!("word clock: ignoring setting {}: {}", key, _error);
                complete = false;
            }
        }
        complete
    }

    /// Write every recognized key to `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if `store` rejects a key.
    pub fn write_to(&self, store: &mut dyn SettingsStore) -> Result<()> {
        for key in SETTING_KEYS {
            if let Some(value) = self.get(key) {
                store.set(key, value)?;
            }
        }
        Ok(())
    }
}

impl Default for WordClockSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}
