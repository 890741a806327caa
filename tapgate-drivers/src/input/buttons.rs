//! Two-button input
//!
//! Buttons are wired to ground with the internal pull-up enabled, so a
//! pressed button reads low. Reads are raw; debouncing is left to the
//! caller's timing.

use tapgate_core::traits::{Channel, ChannelInput};
use tapgate_hal::gpio::ActiveLevel;
use tapgate_hal::InputPin;

/// Channel A and channel B buttons
pub struct ButtonPair<A, B> {
    a: A,
    b: B,
    a_level: ActiveLevel,
    b_level: ActiveLevel,
}

impl<A: InputPin, B: InputPin> ButtonPair<A, B> {
    /// Create a pair of active-low buttons
    pub fn new(a: A, b: B) -> Self {
        Self::with_levels(a, ActiveLevel::Low, b, ActiveLevel::Low)
    }

    /// Create a pair with explicit active levels
    pub fn with_levels(a: A, a_level: ActiveLevel, b: B, b_level: ActiveLevel) -> Self {
        Self {
            a,
            b,
            a_level,
            b_level,
        }
    }
}

impl<A: InputPin, B: InputPin> ChannelInput for ButtonPair<A, B> {
    fn is_pressed(&mut self, channel: Channel) -> bool {
        match channel {
            Channel::A => self.a_level.is_asserted(self.a.is_high()),
            Channel::B => self.b_level.is_asserted(self.b.is_high()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LevelPin {
        high: bool,
    }

    impl InputPin for LevelPin {
        fn is_high(&self) -> bool {
            self.high
        }
    }

    fn pin(high: bool) -> LevelPin {
        LevelPin { high }
    }

    #[test]
    fn test_low_reads_as_pressed() {
        let mut buttons = ButtonPair::new(pin(false), pin(true));
        assert!(buttons.is_pressed(Channel::A));
        assert!(!buttons.is_pressed(Channel::B));
        assert!(buttons.any_pressed());
    }

    #[test]
    fn test_released_pair() {
        let mut buttons = ButtonPair::new(pin(true), pin(true));
        assert!(!buttons.is_pressed(Channel::A));
        assert!(!buttons.is_pressed(Channel::B));
        assert!(!buttons.any_pressed());
    }

    #[test]
    fn test_active_high_channel() {
        let mut buttons =
            ButtonPair::with_levels(pin(true), ActiveLevel::High, pin(true), ActiveLevel::Low);
        assert!(buttons.is_pressed(Channel::A));
        assert!(!buttons.is_pressed(Channel::B));
    }
}
