//! Access node cycle
//!
//! Wraps a [`CombinationLock`] with the idle, success and failure
//! follow-ups that make up the node's main loop.

use embedded_hal::delay::DelayNs;

use crate::lock::{CheckOutcome, CombinationLock};
use crate::matrix::Pixel;
use crate::traits::{ChannelInput, PatternDisplay, StatusColor, StatusIndicator, TonePlayer};

/// Result of one cycle, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Outcome of the check
    pub outcome: CheckOutcome,
    /// Failed attempts after the check
    pub failed_attempts: u8,
    /// The next check will be a lockout
    pub locked_out: bool,
}

/// The access-control node
pub struct AccessNode<I, T, P, S, D> {
    lock: CombinationLock<I, T, P, S, D>,
}

impl<I, T, P, S, D> AccessNode<I, T, P, S, D>
where
    I: ChannelInput,
    T: TonePlayer,
    P: PatternDisplay,
    S: StatusIndicator,
    D: DelayNs,
{
    pub fn new(lock: CombinationLock<I, T, P, S, D>) -> Self {
        Self { lock }
    }

    /// Show the idle state
    pub fn boot(&mut self) {
        self.lock.show_idle();
    }

    /// Run one check and its follow-up
    ///
    /// After a success the node stays green until either button is
    /// pressed, then returns to idle.
    pub fn run_cycle(&mut self) -> CycleReport {
        let outcome = self.lock.check();

        if outcome.is_accepted() {
            self.lock.status_mut().set(StatusColor::Green);
            self.lock.display_mut().solid_fill(Pixel::GREEN);
            self.lock.tone_mut().play_success_chime();
            self.wait_for_press();
        }
        self.lock.show_idle();

        CycleReport {
            outcome,
            failed_attempts: self.lock.failed_attempts(),
            locked_out: !self.lock.state().allows_sampling(),
        }
    }

    fn wait_for_press(&mut self) {
        let poll_ms = self.lock.config().poll_interval_ms;
        while !self.lock.inputs_mut().any_pressed() {
            self.lock.delay_mut().delay_ms(poll_ms);
        }
    }

    /// Get the wrapped lock
    pub fn lock(&self) -> &CombinationLock<I, T, P, S, D> {
        &self.lock
    }

    /// Get the wrapped lock mutably
    pub fn lock_mut(&mut self) -> &mut CombinationLock<I, T, P, S, D> {
        &mut self.lock
    }
}
