//! Square-wave buzzer output
//!
//! Bit-bangs a passive buzzer on a plain GPIO: high for half a period, low
//! for the other half. Timing is only as good as the delay source.

use embedded_hal::delay::DelayNs;
use tapgate_core::traits::TonePlayer;
use tapgate_hal::OutputPin;

/// Full periods that fit in `duration_ms` at `frequency_hz`
///
/// Both the period and the cycle count truncate, so the tone can come out
/// slightly short. Returns 0 for frequencies of 0 or above 1 MHz, and
/// saturates at `u32::MAX` cycles.
pub const fn tone_cycles(frequency_hz: u32, duration_ms: u32) -> u32 {
    if frequency_hz == 0 {
        return 0;
    }
    let period_us = 1_000_000 / frequency_hz;
    if period_us == 0 {
        return 0;
    }
    let cycles = duration_ms as u64 * 1000 / period_us as u64;
    if cycles > u32::MAX as u64 {
        u32::MAX
    } else {
        cycles as u32
    }
}

/// Buzzer driven by a GPIO pin
pub struct ToneGenerator<P, D> {
    pin: P,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> ToneGenerator<P, D> {
    /// Create a tone generator with the buzzer silent
    pub fn new(pin: P, delay: D) -> Self {
        let mut tone = Self { pin, delay };
        tone.pin.set_low();
        tone
    }

    /// Get the buzzer pin
    pub fn pin(&self) -> &P {
        &self.pin
    }
}

impl<P: OutputPin, D: DelayNs> TonePlayer for ToneGenerator<P, D> {
    fn play_tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        let cycles = tone_cycles(frequency_hz, duration_ms);
        if cycles == 0 {
            self.pin.set_low();
            return;
        }

        let half_period_us = 1_000_000 / frequency_hz / 2;
        for _ in 0..cycles {
            self.pin.set_high();
            self.delay.delay_us(half_period_us);
            self.pin.set_low();
            self.delay.delay_us(half_period_us);
        }
    }
}
