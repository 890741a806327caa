//! Button inputs

/// One of the two combination buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    A,
    B,
}

impl Channel {
    /// Both channels in poll order
    pub const ALL: [Channel; 2] = [Channel::A, Channel::B];
}

/// Source of button state
///
/// Reads are raw level samples; there is no edge detection or debouncing
/// behind this trait.
pub trait ChannelInput {
    /// Check if the button on `channel` is held down right now
    fn is_pressed(&mut self, channel: Channel) -> bool;

    /// Check if either button is held down
    ///
    /// Always samples both channels.
    fn any_pressed(&mut self) -> bool {
        let a = self.is_pressed(Channel::A);
        let b = self.is_pressed(Channel::B);
        a || b
    }
}
