//! Pixel color

/// One LED's color
///
/// Stored in wire order (green, red, blue), which is what the LED expects
/// on the data line. Construct with [`Pixel::rgb`] to avoid mixing up the
/// channel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pixel {
    pub g: u8,
    pub r: u8,
    pub b: u8,
}

impl Pixel {
    /// All channels off
    pub const OFF: Self = Self::rgb(0, 0, 0);

    /// Full green (access granted)
    pub const GREEN: Self = Self::rgb(0, 255, 0);

    /// Full red (alert cross)
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Full blue (lockout)
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Create a pixel from red, green and blue components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { g, r, b }
    }

    /// Bytes in transmission order
    pub const fn wire_bytes(&self) -> [u8; 3] {
        [self.g, self.r, self.b]
    }

    /// Check if every channel is zero
    pub const fn is_off(&self) -> bool {
        self.g == 0 && self.r == 0 && self.b == 0
    }
}
