//! Combination lock check
//!
//! One [`CombinationLock::check`] call is one attempt cycle. It blocks for
//! the whole attempt: sampling, feedback and (when the limit has been hit)
//! the lockout cooldown.
//!
//! Sampling is plain polling. A press shorter than one poll interval can be
//! missed, and a button held past the post-press hold is counted again.

use embedded_hal::delay::DelayNs;

use super::events::LockEvent;
use super::machine::{AttemptCounter, CheckOutcome, LockState};
use super::tally::PressTally;
use crate::config::LockConfig;
use crate::matrix::Pixel;
use crate::traits::{Channel, ChannelInput, PatternDisplay, StatusColor, StatusIndicator, TonePlayer};

/// Two-button combination lock
///
/// Owns its feedback devices and the failed-attempt counter, so the
/// counter survives from one check to the next without global state.
pub struct CombinationLock<I, T, P, S, D> {
    inputs: I,
    tone: T,
    display: P,
    status: S,
    delay: D,
    config: LockConfig,
    attempts: AttemptCounter,
}

impl<I, T, P, S, D> CombinationLock<I, T, P, S, D>
where
    I: ChannelInput,
    T: TonePlayer,
    P: PatternDisplay,
    S: StatusIndicator,
    D: DelayNs,
{
    /// Create a new lock with no failed attempts
    pub fn new(inputs: I, tone: T, display: P, status: S, delay: D, config: LockConfig) -> Self {
        Self {
            inputs,
            tone,
            display,
            status,
            delay,
            attempts: AttemptCounter::new(config.max_failed_attempts),
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &LockConfig {
        &self.config
    }

    /// Current lock state
    pub fn state(&self) -> LockState {
        self.attempts.state()
    }

    /// Failed attempts since the last success or lockout
    pub fn failed_attempts(&self) -> u8 {
        self.attempts.failed()
    }

    /// Failed attempts that trigger the lockout
    pub fn attempt_limit(&self) -> u8 {
        self.attempts.limit()
    }

    /// Run one attempt cycle
    ///
    /// When the failure limit has been reached, this call is spent in the
    /// lockout cooldown and returns `Rejected` without sampling.
    pub fn check(&mut self) -> CheckOutcome {
        if !self.attempts.state().allows_sampling() {
            self.run_lockout();
            return CheckOutcome::Rejected;
        }

        let tally = self.sample();

        if tally.matches(&self.config.combination) {
            self.attempts.apply(LockEvent::Accepted);
            CheckOutcome::Accepted
        } else {
            self.attempts.apply(LockEvent::Rejected);
            self.signal_failure();
            CheckOutcome::Rejected
        }
    }

    /// Idle visuals: red status, red cross
    pub fn show_idle(&mut self) {
        self.status.set(StatusColor::Red);
        self.display.cross();
    }

    /// Poll the buttons until the sample window is full
    fn sample(&mut self) -> PressTally {
        let mut tally = PressTally::new();
        let press_tone = self.config.press_tone;

        while !tally.is_complete(self.config.presses_per_attempt) {
            // Both channels are read on every poll, even once the window
            // filled on channel A.
            for channel in Channel::ALL {
                if self.inputs.is_pressed(channel) {
                    tally.record(channel);
                    self.tone
                        .play_tone(press_tone.frequency_hz, press_tone.duration_ms);
                    self.delay.delay_ms(self.config.debounce_ms);
                }
            }
            self.delay.delay_ms(self.config.poll_interval_ms);
        }

        tally
    }

    /// Rejected attempt: red status, blinking cross, falling chime
    fn signal_failure(&mut self) {
        self.status.set(StatusColor::Red);
        self.display.blink_cross(self.config.failure_blinks);
        self.tone.play_failure_chime();
    }

    /// Blue matrix for the whole cooldown, then back to idle
    fn run_lockout(&mut self) {
        self.status.set(StatusColor::Red);
        self.display.solid_fill(Pixel::BLUE);
        self.delay.delay_ms(self.config.lockout_ms);
        self.attempts.apply(LockEvent::CooldownElapsed);
        self.show_idle();
    }

    /// Mutable access to the button inputs
    pub fn inputs_mut(&mut self) -> &mut I {
        &mut self.inputs
    }

    /// Mutable access to the tone output
    pub fn tone_mut(&mut self) -> &mut T {
        &mut self.tone
    }

    /// Mutable access to the matrix
    pub fn display_mut(&mut self) -> &mut P {
        &mut self.display
    }

    /// Mutable access to the status LED
    pub fn status_mut(&mut self) -> &mut S {
        &mut self.status
    }

    /// Mutable access to the delay source
    pub fn delay_mut(&mut self) -> &mut D {
        &mut self.delay
    }
}
