//! Tri-color status LED
//!
//! Three discrete LEDs (or one common-cathode RGB part) on separate GPIOs.

use tapgate_core::traits::{StatusColor, StatusIndicator};
use tapgate_hal::gpio::ActiveLevel;
use tapgate_hal::OutputPin;

/// RGB status LED on three output pins
pub struct RgbStatusLed<R, G, B> {
    red: R,
    green: G,
    blue: B,
    /// Active level of the red, green and blue pins
    levels: [ActiveLevel; 3],
    color: StatusColor,
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> RgbStatusLed<R, G, B> {
    /// Create an active-high status LED, initially off
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self::with_levels(red, green, blue, [ActiveLevel::High; 3])
    }

    /// Create a status LED with a per-pin active level, initially off
    pub fn with_levels(red: R, green: G, blue: B, levels: [ActiveLevel; 3]) -> Self {
        let mut led = Self {
            red,
            green,
            blue,
            levels,
            color: StatusColor::Off,
        };
        led.set(StatusColor::Off);
        led
    }
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> StatusIndicator for RgbStatusLed<R, G, B> {
    fn set(&mut self, color: StatusColor) {
        let (r, g, b) = color.channels();
        let [lr, lg, lb] = self.levels;
        self.red.set_state(lr.pin_level(r));
        self.green.set_state(lg.pin_level(g));
        self.blue.set_state(lb.pin_level(b));
        self.color = color;
    }

    fn color(&self) -> StatusColor {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: true }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn levels<R: OutputPin, G: OutputPin, B: OutputPin>(
        led: &RgbStatusLed<R, G, B>,
    ) -> (bool, bool, bool) {
        (
            led.red.is_set_high(),
            led.green.is_set_high(),
            led.blue.is_set_high(),
        )
    }

    #[test]
    fn test_starts_off() {
        let led = RgbStatusLed::new(MockPin::new(), MockPin::new(), MockPin::new());
        assert_eq!(led.color(), StatusColor::Off);
        assert_eq!(levels(&led), (false, false, false));
    }

    #[test]
    fn test_one_channel_per_color() {
        let mut led = RgbStatusLed::new(MockPin::new(), MockPin::new(), MockPin::new());

        led.set(StatusColor::Red);
        assert_eq!(levels(&led), (true, false, false));

        led.set(StatusColor::Green);
        assert_eq!(levels(&led), (false, true, false));
        assert_eq!(led.color(), StatusColor::Green);

        led.set(StatusColor::Blue);
        assert_eq!(levels(&led), (false, false, true));

        led.set(StatusColor::Off);
        assert_eq!(levels(&led), (false, false, false));
    }

    #[test]
    fn test_active_low_led() {
        let mut led = RgbStatusLed::with_levels(
            MockPin::new(),
            MockPin::new(),
            MockPin::new(),
            [ActiveLevel::Low; 3],
        );
        assert_eq!(levels(&led), (true, true, true));

        led.set(StatusColor::Red);
        assert_eq!(levels(&led), (false, true, true));
    }

    #[test]
    fn test_mixed_levels_per_pin() {
        // Only green is wired active-low
        let mut led = RgbStatusLed::with_levels(
            MockPin::new(),
            MockPin::new(),
            MockPin::new(),
            [ActiveLevel::High, ActiveLevel::Low, ActiveLevel::High],
        );
        assert_eq!(levels(&led), (false, true, false));

        led.set(StatusColor::Green);
        assert_eq!(levels(&led), (false, false, false));

        led.set(StatusColor::Red);
        assert_eq!(levels(&led), (true, true, false));
    }
}
