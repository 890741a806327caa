//! Frame buffer

use super::layout::{PixelIndex, PIXEL_COUNT};
use super::pixel::Pixel;

/// Colors for every LED on the strip, in strip order
///
/// Starts all off and never changes size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    cells: [Pixel; PIXEL_COUNT],
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelBuffer {
    /// Create a buffer with every pixel off
    pub const fn new() -> Self {
        Self {
            cells: [Pixel::OFF; PIXEL_COUNT],
        }
    }

    /// Set one pixel
    pub fn set(&mut self, index: PixelIndex, pixel: Pixel) {
        self.cells[index.get()] = pixel;
    }

    /// Get one pixel
    pub fn get(&self, index: PixelIndex) -> Pixel {
        self.cells[index.get()]
    }

    /// Set every pixel to the same color
    pub fn fill(&mut self, pixel: Pixel) {
        self.cells = [pixel; PIXEL_COUNT];
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(Pixel::OFF);
    }

    /// Pixels in strip order
    pub fn pixels(&self) -> &[Pixel; PIXEL_COUNT] {
        &self.cells
    }

    /// Number of pixels that are not off
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|p| !p.is_off()).count()
    }

    /// Frame bytes in transmission order (G, R, B per pixel)
    pub fn wire_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().flat_map(|p| p.wire_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(i: usize) -> PixelIndex {
        PixelIndex::new(i).unwrap()
    }

    #[test]
    fn test_new_buffer_is_dark() {
        let buf = PixelBuffer::new();
        assert!(buf.pixels().iter().all(|p| *p == Pixel::OFF));
        assert_eq!(buf.lit_count(), 0);
    }

    #[test]
    fn test_set_only_touches_one_cell() {
        let mut buf = PixelBuffer::new();
        buf.set(idx(7), Pixel::rgb(10, 20, 30));

        assert_eq!(buf.get(idx(7)), Pixel::rgb(10, 20, 30));
        for i in PixelIndex::all().filter(|i| i.get() != 7) {
            assert_eq!(buf.get(i), Pixel::OFF);
        }
    }

    #[test]
    fn test_fill_and_clear() {
        let mut buf = PixelBuffer::new();
        buf.fill(Pixel::BLUE);
        assert_eq!(buf.lit_count(), PIXEL_COUNT);

        buf.clear();
        assert_eq!(buf.lit_count(), 0);
    }

    #[test]
    fn test_wire_bytes_layout() {
        let mut buf = PixelBuffer::new();
        buf.set(idx(0), Pixel::rgb(1, 2, 3));
        buf.set(idx(24), Pixel::rgb(4, 5, 6));

        let mut bytes = [0u8; PIXEL_COUNT * 3];
        for (slot, b) in bytes.iter_mut().zip(buf.wire_bytes()) {
            *slot = b;
        }
        assert_eq!(buf.wire_bytes().count(), PIXEL_COUNT * 3);
        assert_eq!(&bytes[0..3], &[2, 1, 3]);
        assert_eq!(&bytes[72..75], &[5, 4, 6]);
        assert!(bytes[3..72].iter().all(|&b| b == 0));
    }
}
