//! LED matrix model
//!
//! A 5x5 grid of addressable LEDs wired as one folded strip. This module
//! holds the pure data side: pixel colors, the coordinate-to-strip mapping
//! and the frame buffer. Transmission lives in `tapgate-drivers`.

pub mod buffer;
pub mod layout;
pub mod pixel;

pub use buffer::PixelBuffer;
pub use layout::{Coordinate, PixelIndex, CROSS, MATRIX_HEIGHT, MATRIX_WIDTH, PIXEL_COUNT};
pub use pixel::Pixel;
