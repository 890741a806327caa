//! Hardware configuration types
//!
//! Pin assignment for every logical I/O role of the node. The LED matrix
//! data line is not listed: it is driven by PIO and fixed by the board.

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an active-low input with pull-up (button to ground)
    pub const fn button(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }
}

/// Tri-color status LED pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusLedConfig {
    pub red: PinConfig,
    pub green: PinConfig,
    pub blue: PinConfig,
}

/// Pin assignment for the whole node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NodeConfig {
    /// First combination button
    pub channel_a: PinConfig,
    /// Second combination button
    pub channel_b: PinConfig,
    /// Status LED
    pub status_led: StatusLedConfig,
    /// Buzzer output
    pub buzzer: PinConfig,
}

impl Default for NodeConfig {
    /// BitDogLab-style wiring
    fn default() -> Self {
        Self {
            channel_a: PinConfig::button(5),
            channel_b: PinConfig::button(6),
            status_led: StatusLedConfig {
                red: PinConfig::new(13),
                green: PinConfig::new(11),
                blue: PinConfig::new(12),
            },
            buzzer: PinConfig::new(10),
        }
    }
}

impl NodeConfig {
    /// Every assigned pin with its role name
    pub fn assignments(&self) -> [(&'static str, u8); 6] {
        [
            ("channel_a", self.channel_a.pin),
            ("channel_b", self.channel_b.pin),
            ("status_red", self.status_led.red.pin),
            ("status_green", self.status_led.green.pin),
            ("status_blue", self.status_led.blue.pin),
            ("buzzer", self.buzzer.pin),
        ]
    }

    /// Find the first pin assigned to two roles
    ///
    /// Returns the pin and the second role that claimed it.
    pub fn find_conflict(&self) -> Option<(u8, &'static str)> {
        let pins = self.assignments();
        for (i, (_, pin)) in pins.iter().enumerate() {
            if let Some((role, _)) = pins[i + 1..].iter().find(|(_, p)| p == pin) {
                return Some((*pin, role));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wiring() {
        let config = NodeConfig::default();
        assert_eq!(config.channel_a.pin, 5);
        assert_eq!(config.channel_b.pin, 6);
        assert!(config.channel_a.inverted && config.channel_a.pull_up);
        assert_eq!(config.status_led.red.pin, 13);
        assert_eq!(config.status_led.green.pin, 11);
        assert_eq!(config.status_led.blue.pin, 12);
        assert_eq!(config.buzzer.pin, 10);
        assert_eq!(config.find_conflict(), None);
    }

    #[test]
    fn test_conflict_detected() {
        let mut config = NodeConfig::default();
        config.buzzer = PinConfig::new(5);
        assert_eq!(config.find_conflict(), Some((5, "buzzer")));
    }
}
