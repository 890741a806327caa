//! LED matrix drivers

mod neopixel;
mod pattern;

pub use neopixel::PixelDriver;
pub use pattern::PatternRenderer;
