//! Visual and audible feedback traits

use crate::config::{CHIME_NOTES_HZ, CHIME_NOTE_MS};
use crate::matrix::Pixel;

/// Square-wave tone output (buzzer)
///
/// All calls block until the sound has finished.
pub trait TonePlayer {
    /// Play `frequency_hz` for about `duration_ms`
    ///
    /// A frequency of 0 silences the output and returns immediately.
    fn play_tone(&mut self, frequency_hz: u32, duration_ms: u32);

    /// Ascending three-note chime
    fn play_success_chime(&mut self) {
        for freq in CHIME_NOTES_HZ {
            self.play_tone(freq, CHIME_NOTE_MS);
        }
    }

    /// Descending three-note chime
    fn play_failure_chime(&mut self) {
        for freq in CHIME_NOTES_HZ.iter().rev() {
            self.play_tone(*freq, CHIME_NOTE_MS);
        }
    }
}

/// Canned LED matrix states
///
/// Every call writes a full frame before returning.
pub trait PatternDisplay {
    /// Light every cell with one color
    fn solid_fill(&mut self, color: Pixel);

    /// Red diagonal cross on a dark background
    fn cross(&mut self);

    /// Turn the whole matrix off
    fn off(&mut self);

    /// Flash the cross `times` times
    ///
    /// Blocks for the whole sequence.
    fn blink_cross(&mut self, times: u8);
}

/// Status LED color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusColor {
    #[default]
    Off,
    Red,
    Green,
    Blue,
}

impl StatusColor {
    /// Which of the (red, green, blue) lines are on
    pub const fn channels(self) -> (bool, bool, bool) {
        match self {
            StatusColor::Off => (false, false, false),
            StatusColor::Red => (true, false, false),
            StatusColor::Green => (false, true, false),
            StatusColor::Blue => (false, false, true),
        }
    }
}

/// Tri-color status LED
pub trait StatusIndicator {
    /// Show a color
    fn set(&mut self, color: StatusColor);

    /// Currently shown color
    fn color(&self) -> StatusColor;
}
