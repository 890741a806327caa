//! WS2812 pixel driver
//!
//! Owns the frame buffer for the 5x5 matrix and pushes it over a
//! [`PixelWire`]. Setting pixels only touches the buffer; nothing reaches
//! the LEDs until [`PixelDriver::write`].

use embedded_hal::delay::DelayNs;
use tapgate_core::config::FRAME_RESET_US;
use tapgate_core::matrix::{Coordinate, Pixel, PixelBuffer, PixelIndex};
use tapgate_hal::PixelWire;

/// Frame buffer plus data line
pub struct PixelDriver<W, D> {
    wire: W,
    delay: D,
    buffer: PixelBuffer,
}

impl<W: PixelWire, D: DelayNs> PixelDriver<W, D> {
    /// Take the data line and start from a dark buffer
    ///
    /// Nothing is transmitted until the first `write`.
    pub fn new(wire: W, delay: D) -> Self {
        Self {
            wire,
            delay,
            buffer: PixelBuffer::new(),
        }
    }

    /// Set one pixel by strip position
    pub fn set_pixel(&mut self, index: PixelIndex, r: u8, g: u8, b: u8) {
        self.buffer.set(index, Pixel::rgb(r, g, b));
    }

    /// Set one pixel by matrix position
    pub fn set_pixel_xy(&mut self, at: Coordinate, r: u8, g: u8, b: u8) {
        self.set_pixel(at.index(), r, g, b);
    }

    /// Read one pixel back from the buffer
    pub fn pixel(&self, index: PixelIndex) -> Pixel {
        self.buffer.get(index)
    }

    /// Set every pixel
    pub fn fill(&mut self, color: Pixel) {
        self.buffer.fill(color);
    }

    /// Turn every pixel off (buffer only)
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Get the frame buffer
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Send the whole buffer and latch it
    ///
    /// Returns after the last bit and the reset gap, so later buffer
    /// changes never leak into this frame.
    pub fn write(&mut self) {
        for byte in self.buffer.wire_bytes() {
            self.wire.put_blocking(byte);
        }
        self.wire.flush();
        self.delay.delay_us(FRAME_RESET_US);
    }

    /// Blocking hold using the driver's delay
    pub fn hold_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Release the data line and delay
    pub fn release(self) -> (W, D) {
        (self.wire, self.delay)
    }
}
