//! Combination lock
//!
//! The lock samples two buttons until a fixed number of presses has been
//! counted, compares the per-button totals with the combination and keeps
//! a failed-attempt counter that triggers a timed lockout.

pub mod combination;
pub mod events;
pub mod machine;
pub mod tally;

pub use combination::CombinationLock;
pub use events::LockEvent;
pub use machine::{AttemptCounter, CheckOutcome, LockState};
pub use tally::PressTally;
