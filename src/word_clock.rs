//! Runtime state of one word clock: polls the time, rebuilds the mask when the minute
//! changes, and blanks unlit cells in each outgoing frame.
//!
//! See [`WordClock`] for the polling contract.

use embassy_time::{Duration, Instant};
use smart_leds::RGB8;
use time::Time;

use crate::decision::{Decision, MinuteDots, decide};
use crate::mask::Mask;
use crate::phrase::PhraseSet;
use crate::settings::WordClockSettings;
use crate::shared_constants::{CYCLE_TIME, HOURS_PER_DAY, MINUTES_PER_HOUR, TEST_MODE_CYCLE_TIME};
use crate::style::StyleConfig;
use crate::word_layout::WordLayout;

/// RGB color representation re-exported from `smart_leds`.
pub type Rgb = RGB8;

/// Word clock state for a face of `N` cells.
///
/// The host calls [`tick`](WordClock::tick) from its main loop as often as it likes; the
/// clock samples the time at most once per [`CYCLE_TIME`] (or [`TEST_MODE_CYCLE_TIME`])
/// and rebuilds its mask only when the minute differs from the last one it processed.
/// Before every frame is pushed, [`overlay`](WordClock::overlay) turns off the cells the
/// mask leaves dark.
///
/// # Example
///
/// ```rust
/// use embassy_time::{Duration, Instant};
/// use time::Time;
/// use word_clock::settings::WordClockSettings;
/// use word_clock::word_clock::{Rgb, WordClock};
/// use word_clock::word_layout::GRID_13X11;
///
/// let mut clock = WordClock::new(&GRID_13X11);
/// let settings = WordClockSettings::DEFAULT;
/// let start = Instant::from_millis(0);
///
/// // 14:16 -> "ES IST VIERTEL NACH ZWEI" and one dot
/// let time = Time::from_hms(14, 16, 0)?;
/// assert!(clock.tick(start, time, &settings));
/// // Same minute again, even after the poll interval: nothing to rebuild
/// assert!(!clock.tick(start + Duration::from_secs(6), time, &settings));
///
/// let mut frame = [Rgb::new(255, 255, 255); 143];
/// clock.overlay(&mut frame, settings.led_offset);
/// assert_eq!(frame[1], Rgb::new(255, 255, 255)); // E of ES
/// assert_eq!(frame[3], Rgb::default());
/// # Ok::<(), time::error::ComponentRange>(())
/// ```
#[derive(Debug, Clone)]
pub struct WordClock<const N: usize> {
    layout: &'static WordLayout<N>,
    last_minute: Option<u8>,
    last_tick: Option<Instant>,
    simulated_hour: u8,
    simulated_minute: u8,
    decision: Decision,
    mask: Mask<N>,
}

impl<const N: usize> WordClock<N> {
    /// A clock that has never been updated; its mask is all dark.
    #[must_use]
    pub const fn new(layout: &'static WordLayout<N>) -> Self {
        Self {
            layout,
            last_minute: None,
            last_tick: None,
            simulated_hour: 0,
            simulated_minute: 0,
            decision: Decision {
                phrases: PhraseSet::new(),
                dots: MinuteDots::for_minute(0),
            },
            mask: Mask::dark(),
        }
    }

    /// Poll the clock. Returns `true` if the mask was rebuilt.
    ///
    /// `local_time` is ignored in test mode, where each poll advances a simulated clock
    /// by one minute starting from the last wall-clock time seen. `settings` is read on
    /// every call.
    pub fn tick(&mut self, now: Instant, local_time: Time, settings: &WordClockSettings) -> bool {
        let cycle_time = Self::cycle_time(settings);
        if self
            .last_tick
            .is_some_and(|last_tick| now.saturating_duration_since(last_tick) <= cycle_time)
        {
            return false;
        }
        self.last_tick = Some(now);

        let (hour, minute) = if settings.test_mode {
            self.advance_simulated()
        } else {
            self.simulated_hour = local_time.hour();
            self.simulated_minute = local_time.minute();
            (self.simulated_hour, self.simulated_minute)
        };

        if self.last_minute == Some(minute) {
            return false;
        }
        self.refresh(hour, minute, &settings.style());
        true
    }

    /// Rebuild the decision and mask for `hour:minute` unconditionally.
    ///
    /// The new mask is built completely before it replaces the old one.
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "Stored minute is normalized like decide() normalizes it"
    )]
    pub fn refresh(&mut self, hour: u8, minute: u8, style: &StyleConfig) {
        let decision = decide(hour, minute, style);
        let mask = Mask::composite(&decision, self.layout);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "word clock: {=u8}:{=u8} -> {} words, {} dots, {} cells lit",
            hour,
            minute,
            decision.phrases.len(),
            decision.dots.count(),
            mask.lit_count()
        );

        self.decision = decision;
        self.mask = mask;
        self.last_minute = Some(minute % MINUTES_PER_HOUR);
    }

    /// Forget the last processed minute and poll time so the next [`tick`](Self::tick)
    /// rebuilds the mask. Call after the settings change.
    pub const fn invalidate(&mut self) {
        self.last_minute = None;
        self.last_tick = None;
    }

    /// Turn off every pixel of `frame` whose cell is dark. Cell `i` is pixel
    /// `i + led_offset`; pixels past the end of `frame` are skipped.
    pub fn overlay(&self, frame: &mut [Rgb], led_offset: u16) {
        let led_offset = usize::from(led_offset);
        for cell in self.mask.dark_cells() {
            if let Some(pixel) = cell
                .checked_add(led_offset)
                .and_then(|index| frame.get_mut(index))
            {
                *pixel = Rgb::default();
            }
        }
    }

    #[must_use]
    pub const fn mask(&self) -> &Mask<N> {
        &self.mask
    }

    #[must_use]
    pub const fn decision(&self) -> &Decision {
        &self.decision
    }

    #[must_use]
    pub const fn layout(&self) -> &'static WordLayout<N> {
        self.layout
    }

    /// The minute the current mask was built for, `None` before the first update.
    #[must_use]
    pub const fn last_minute(&self) -> Option<u8> {
        self.last_minute
    }

    const fn cycle_time(settings: &WordClockSettings) -> Duration {
        if settings.test_mode {
            TEST_MODE_CYCLE_TIME
        } else {
            CYCLE_TIME
        }
    }

    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        reason = "Values stay below 60 and 24"
    )]
    const fn advance_simulated(&mut self) -> (u8, u8) {
        self.simulated_minute += 1;
        if self.simulated_minute >= MINUTES_PER_HOUR {
            self.simulated_minute = 0;
            self.simulated_hour = (self.simulated_hour + 1) % HOURS_PER_DAY;
        }
        (self.simulated_hour, self.simulated_minute)
    }
}
