//! The plugin surface the host LED firmware drives, and the word clock's implementation.
//!
//! See [`WordClockUsermod`].

use embassy_time::Instant;
use time::Time;

use crate::Result;
use crate::settings::{
    KEY_IT_IS, KEY_LED_OFFSET, KEY_MIDNIGHT, KEY_NULL, KEY_QUARTER_TO, KEY_TWENTY_TO,
    SettingValue, SettingsStore, WordClockSettings,
};
use crate::word_clock::{Rgb, WordClock};
use crate::word_layout::WordLayout;

/// Name under which the word clock registers with the host and stores its settings.
pub const WORD_CLOCK_NAME: &str = "WordClockUsermod";

/// Help text the host settings page shows next to each key.
pub const CONFIG_HINTS: [(&str, &str); 6] = [
    (KEY_LED_OFFSET, "Number of LEDs before the letters"),
    (KEY_IT_IS, "Show \"Es ist\""),
    (KEY_MIDNIGHT, "\"Mitternacht\" instead of \"zwölf\""),
    (KEY_NULL, "\"Null Uhr\" instead of \"zwölf\""),
    (KEY_QUARTER_TO, "\"Viertel vor\" instead of \"Dreiviertel\""),
    (KEY_TWENTY_TO, "\"Zwanzig vor\" instead of \"zehn nach halb\""),
];

/// Lifecycle hooks a host calls on each registered plugin.
///
/// All hooks run on the host's main loop, one at a time. The trait is object safe so a
/// host can keep its plugins in one `&mut dyn Usermod` registry.
pub trait Usermod {
    /// Unique name in the host's plugin registry.
    fn name(&self) -> &'static str;

    /// Called once at boot, after [`read_from_config`](Usermod::read_from_config).
    fn setup(&mut self) {}

    /// Called every time the network (re)connects.
    fn connected(&mut self) {}

    /// Called continuously from the main loop.
    fn tick(&mut self, now: Instant, local_time: Time);

    /// Write the plugin's settings section.
    ///
    /// # Errors
    ///
    /// Returns an error if `store` rejects a key.
    fn add_to_config(&self, store: &mut dyn SettingsStore) -> Result<()>;

    /// Read the plugin's settings section. Returns `false` if it was incomplete, in which
    /// case the host saves the current values back.
    fn read_from_config(&mut self, store: &dyn SettingsStore) -> bool;

    /// `(key, hint)` pairs for the host settings page.
    fn config_hints(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Called after effects have colored `frame` and before it is pushed to the strip.
    fn handle_overlay_draw(&self, frame: &mut [Rgb]);
}

/// The word clock as a host plugin: owns the settings and the [`WordClock`] state.
///
/// # Example
///
/// ```rust
/// use embassy_time::Instant;
/// use time::Time;
/// use word_clock::settings::{SettingValue, SettingsMap, SettingsStore};
/// use word_clock::usermod::{Usermod, WordClockUsermod};
/// use word_clock::word_clock::Rgb;
/// use word_clock::word_layout::GRID_13X11;
///
/// let mut usermod = WordClockUsermod::new(&GRID_13X11);
///
/// // The strip has 2 LEDs in front of the face
/// let mut config = SettingsMap::new();
/// usermod.add_to_config(&mut config)?;
/// config.set("ledOffset", SettingValue::Int(2))?;
/// assert!(usermod.read_from_config(&config));
/// usermod.setup();
///
/// usermod.tick(Instant::from_millis(0), Time::from_hms(8, 30, 0).expect("valid time"));
/// let mut frame = [Rgb::new(9, 9, 9); 145];
/// usermod.handle_overlay_draw(&mut frame);
/// assert_eq!(frame[0], Rgb::new(9, 9, 9)); // in front of the face
/// assert_eq!(frame[2 + 66], Rgb::new(9, 9, 9)); // H of HALB
/// assert_eq!(frame[2 + 3], Rgb::default());
/// # Ok::<(), word_clock::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct WordClockUsermod<const N: usize> {
    clock: WordClock<N>,
    settings: WordClockSettings,
}

impl<const N: usize> WordClockUsermod<N> {
    /// A plugin with default settings for the face described by `layout`.
    #[must_use]
    pub const fn new(layout: &'static WordLayout<N>) -> Self {
        Self {
            clock: WordClock::new(layout),
            settings: WordClockSettings::DEFAULT,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &WordClockSettings {
        &self.settings
    }

    #[must_use]
    pub const fn clock(&self) -> &WordClock<N> {
        &self.clock
    }

    /// Change one setting at runtime (for example from the host UI). The next
    /// [`tick`](Usermod::tick) redraws with the new value.
    ///
    /// # Errors
    ///
    /// See [`WordClockSettings::apply`].
    pub fn apply_setting(&mut self, key: &str, value: SettingValue) -> Result<()> {
        let was_test_mode = self.settings.test_mode;
        self.settings.apply(key, value)?;
        if was_test_mode != self.settings.test_mode {
            #[cfg(feature = "defmt")]
            defmt::info!("word clock: test mode {}", self.settings.test_mode);
        }
        self.clock.invalidate();
        Ok(())
    }
}

impl<const N: usize> Usermod for WordClockUsermod<N> {
    fn name(&self) -> &'static str {
        WORD_CLOCK_NAME
    }

    fn tick(&mut self, now: Instant, local_time: Time) {
        self.clock.tick(now, local_time, &self.settings);
    }

    fn add_to_config(&self, store: &mut dyn SettingsStore) -> Result<()> {
        self.settings.write_to(store)
    }

    fn read_from_config(&mut self, store: &dyn SettingsStore) -> bool {
        let complete = self.settings.read_from(store);
        if !complete {
            #[cfg(feature = "defmt")]
            defmt::info!("word clock: settings incomplete, defaults will be saved");
        }
        self.clock.invalidate();
        complete
    }

    fn config_hints(&self) -> &'static [(&'static str, &'static str)] {
        &CONFIG_HINTS
    }

    fn handle_overlay_draw(&self, frame: &mut [Rgb]) {
        if self.settings.active {
            self.clock.overlay(frame, self.settings.led_offset);
        }
    }
}
