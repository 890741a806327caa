//! Per-attempt press counts

use crate::config::Combination;
use crate::traits::Channel;

/// Presses counted during one attempt
///
/// Created fresh for every check and dropped after evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressTally {
    channel_a: u8,
    channel_b: u8,
    total: u8,
}

impl PressTally {
    /// Empty tally
    pub const fn new() -> Self {
        Self {
            channel_a: 0,
            channel_b: 0,
            total: 0,
        }
    }

    /// Count one press
    pub fn record(&mut self, channel: Channel) {
        match channel {
            Channel::A => self.channel_a = self.channel_a.saturating_add(1),
            Channel::B => self.channel_b = self.channel_b.saturating_add(1),
        }
        self.total = self.total.saturating_add(1);
    }

    /// Presses on one channel
    pub fn count(&self, channel: Channel) -> u8 {
        match channel {
            Channel::A => self.channel_a,
            Channel::B => self.channel_b,
        }
    }

    /// Presses on both channels
    pub fn total(&self) -> u8 {
        self.total
    }

    /// Check if the sample window is full
    pub fn is_complete(&self, presses_per_attempt: u8) -> bool {
        self.total >= presses_per_attempt
    }

    /// Check the per-channel totals against a combination
    ///
    /// Press order is not considered.
    pub fn matches(&self, combination: &Combination) -> bool {
        self.channel_a == combination.channel_a && self.channel_b == combination.channel_b
    }
}
