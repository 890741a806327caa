//! Canned matrix patterns

use embedded_hal::delay::DelayNs;
use tapgate_core::config::BLINK_HOLD_MS;
use tapgate_core::matrix::{Pixel, CROSS};
use tapgate_core::traits::PatternDisplay;
use tapgate_hal::PixelWire;

use super::PixelDriver;

/// Color of the idle/alert cross
const CROSS_COLOR: Pixel = Pixel::RED;

/// Pattern display over a [`PixelDriver`]
pub struct PatternRenderer<W, D> {
    driver: PixelDriver<W, D>,
}

impl<W: PixelWire, D: DelayNs> PatternRenderer<W, D> {
    pub fn new(driver: PixelDriver<W, D>) -> Self {
        Self { driver }
    }

    /// Get the underlying driver
    pub fn driver(&self) -> &PixelDriver<W, D> {
        &self.driver
    }

    /// Get the underlying driver mutably
    pub fn driver_mut(&mut self) -> &mut PixelDriver<W, D> {
        &mut self.driver
    }

    /// Take the underlying driver back
    pub fn into_driver(self) -> PixelDriver<W, D> {
        self.driver
    }
}

impl<W: PixelWire, D: DelayNs> PatternDisplay for PatternRenderer<W, D> {
    fn solid_fill(&mut self, color: Pixel) {
        self.driver.fill(color);
        self.driver.write();
    }

    fn cross(&mut self) {
        self.driver.clear();
        for at in CROSS {
            self.driver
                .set_pixel_xy(at, CROSS_COLOR.r, CROSS_COLOR.g, CROSS_COLOR.b);
        }
        self.driver.write();
    }

    fn off(&mut self) {
        self.driver.clear();
        self.driver.write();
    }

    fn blink_cross(&mut self, times: u8) {
        for _ in 0..times {
            self.cross();
            self.driver.hold_ms(BLINK_HOLD_MS);
            self.off();
            self.driver.hold_ms(BLINK_HOLD_MS);
        }
    }
}
