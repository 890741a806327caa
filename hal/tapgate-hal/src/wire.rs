//! Single-wire LED data line
//!
//! Addressable LEDs (WS2812 and friends) clock themselves from a single data
//! line: every bit is a high pulse whose width encodes 0 or 1. The chip HAL
//! owns the bit timing; drivers only hand it bytes in wire order.

/// Byte sink for a self-clocked LED data line
///
/// Bytes go out MSB first, in the order they are queued.
pub trait PixelWire {
    /// Queue one byte for transmission
    ///
    /// Blocks while the transmit queue is full.
    fn put_blocking(&mut self, byte: u8);

    /// Block until every queued byte has been shifted out
    ///
    /// The line is left idle (low) afterwards.
    fn flush(&mut self);
}
