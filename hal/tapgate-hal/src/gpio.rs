//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Pin level as seen by a button, LED or buzzer
///
/// Buttons wired to ground with a pull-up read low when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Asserted when the pin is high
    #[default]
    High,
    /// Asserted when the pin is low
    Low,
}

impl ActiveLevel {
    /// Level for a pin marked inverted (`!`) in the node config
    pub const fn from_inverted(inverted: bool) -> Self {
        if inverted {
            ActiveLevel::Low
        } else {
            ActiveLevel::High
        }
    }

    /// Convert a raw pin level into the logical asserted state
    pub fn is_asserted(self, pin_high: bool) -> bool {
        match self {
            ActiveLevel::High => pin_high,
            ActiveLevel::Low => !pin_high,
        }
    }

    /// Pin level that asserts (`true`) or releases (`false`) the signal
    pub fn pin_level(self, asserted: bool) -> bool {
        self.is_asserted(asserted)
    }
}
