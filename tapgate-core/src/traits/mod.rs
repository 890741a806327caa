//! Collaborator traits
//!
//! These traits define the interface between the lock logic and the
//! hardware drivers. `tapgate-drivers` implements them over HAL pins.

pub mod feedback;
pub mod input;

pub use feedback::{PatternDisplay, StatusColor, StatusIndicator, TonePlayer};
pub use input::{Channel, ChannelInput};
