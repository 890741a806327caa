//! Lock state machine
//!
//! The only state that outlives a single check is the failed-attempt
//! count. The lock state is derived from it: reaching the limit means the
//! next check runs the lockout instead of sampling.

use super::events::LockEvent;

/// Lock states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockState {
    /// Ready to sample a new attempt
    Sampling,
    /// Too many failures; the next check runs the cooldown
    LockedOut,
}

impl LockState {
    /// Check if this state samples the buttons
    pub fn allows_sampling(&self) -> bool {
        matches!(self, LockState::Sampling)
    }
}

/// Result of one check, as seen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CheckOutcome {
    /// Combination matched
    Accepted,
    /// Combination did not match, or the check was spent in lockout
    Rejected,
}

impl CheckOutcome {
    /// Check if access was granted
    pub fn is_accepted(&self) -> bool {
        matches!(self, CheckOutcome::Accepted)
    }
}

/// Failed-attempt counter
///
/// Holds a value in `0..=limit`. Reaching `limit` locks the node out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AttemptCounter {
    failed: u8,
    limit: u8,
}

impl AttemptCounter {
    /// Create a counter with no failures
    pub const fn new(limit: u8) -> Self {
        Self { failed: 0, limit }
    }

    /// Failed attempts since the last success or lockout
    pub fn failed(&self) -> u8 {
        self.failed
    }

    /// Failures that trigger a lockout
    pub fn limit(&self) -> u8 {
        self.limit
    }

    /// Current lock state
    pub fn state(&self) -> LockState {
        if self.failed >= self.limit {
            LockState::LockedOut
        } else {
            LockState::Sampling
        }
    }

    /// Process an event and return the resulting state
    ///
    /// Events that do not apply to the current state are ignored.
    pub fn apply(&mut self, event: LockEvent) -> LockState {
        use LockEvent::*;
        use LockState::*;

        match (self.state(), event) {
            (Sampling, Accepted) => self.failed = 0,
            (Sampling, Rejected) => self.failed = self.failed.saturating_add(1).min(self.limit),
            (LockedOut, CooldownElapsed) => self.failed = 0,
            _ => {}
        }

        self.state()
    }
}
