//! Events that change the attempt counter

/// Events that can trigger lock state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockEvent {
    /// Sampled presses matched the combination
    Accepted,
    /// Sampled presses did not match
    Rejected,
    /// Lockout cooldown finished
    CooldownElapsed,
}
