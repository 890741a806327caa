//! Serpentine matrix layout
//!
//! The matrix is one LED strip folded into rows. Even rows run left to
//! right, odd rows run right to left:
//!
//! ```text
//! y=0:   0  1  2  3  4  →
//! y=1:   9  8  7  6  5  ←
//! y=2:  10 11 12 13 14  →
//! y=3:  19 18 17 16 15  ←
//! y=4:  20 21 22 23 24  →
//! ```
//!
//! [`Coordinate`] and [`PixelIndex`] can only hold in-range values, so the
//! buffer never sees an out-of-range cell.

/// Matrix width in pixels
pub const MATRIX_WIDTH: usize = 5;

/// Matrix height in pixels
pub const MATRIX_HEIGHT: usize = 5;

/// Total number of pixels on the strip
pub const PIXEL_COUNT: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// Position along the LED strip, always in `0..PIXEL_COUNT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelIndex(u8);

impl PixelIndex {
    /// Create an index, or `None` if it is past the end of the strip
    pub const fn new(index: usize) -> Option<Self> {
        if index < PIXEL_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Get the raw strip position
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every index in strip order
    pub fn all() -> impl Iterator<Item = PixelIndex> {
        (0..PIXEL_COUNT as u8).map(PixelIndex)
    }
}

/// Logical grid position, always inside the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coordinate {
    x: u8,
    y: u8,
}

impl Coordinate {
    /// Create a coordinate, or `None` if it falls outside the grid
    pub const fn new(x: usize, y: usize) -> Option<Self> {
        if x < MATRIX_WIDTH && y < MATRIX_HEIGHT {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Column (0 = left)
    pub const fn x(&self) -> usize {
        self.x as usize
    }

    /// Row (0 = first row on the strip)
    pub const fn y(&self) -> usize {
        self.y as usize
    }

    /// Strip position of this cell
    pub const fn index(&self) -> PixelIndex {
        PixelIndex(serpentine_index(self.x(), self.y()) as u8)
    }

    /// Iterate over every cell, row by row
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..MATRIX_HEIGHT as u8)
            .flat_map(|y| (0..MATRIX_WIDTH as u8).map(move |x| Coordinate { x, y }))
    }
}

/// Map a grid position to its strip position
///
/// Callers must pass `x < MATRIX_WIDTH` and `y < MATRIX_HEIGHT`; use
/// [`Coordinate::index`] for a checked version.
pub const fn serpentine_index(x: usize, y: usize) -> usize {
    if y % 2 == 0 {
        y * MATRIX_WIDTH + x
    } else {
        y * MATRIX_WIDTH + (MATRIX_WIDTH - 1 - x)
    }
}

const fn cell(x: u8, y: u8) -> Coordinate {
    Coordinate { x, y }
}

/// Cells of both diagonals, main diagonal first
///
/// The center (2,2) belongs to both diagonals and appears twice; setting it
/// twice still lights a single cell.
pub const CROSS: [Coordinate; 10] = [
    cell(0, 0),
    cell(1, 1),
    cell(2, 2),
    cell(3, 3),
    cell(4, 4),
    cell(0, 4),
    cell(1, 3),
    cell(2, 2),
    cell(3, 1),
    cell(4, 0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_serpentine_examples() {
        assert_eq!(Coordinate::new(0, 0).unwrap().index().get(), 0);
        assert_eq!(Coordinate::new(4, 0).unwrap().index().get(), 4);
        assert_eq!(Coordinate::new(4, 1).unwrap().index().get(), 5);
        assert_eq!(Coordinate::new(0, 1).unwrap().index().get(), 9);
        assert_eq!(Coordinate::new(2, 2).unwrap().index().get(), 12);
        assert_eq!(Coordinate::new(4, 4).unwrap().index().get(), 24);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(Coordinate::new(5, 0).is_none());
        assert!(Coordinate::new(0, 5).is_none());
        assert!(PixelIndex::new(PIXEL_COUNT).is_none());
        assert!(PixelIndex::new(PIXEL_COUNT - 1).is_some());
    }

    #[test]
    fn test_mapping_is_a_permutation() {
        let mut seen = [false; PIXEL_COUNT];
        for c in Coordinate::all() {
            let i = c.index().get();
            assert!(!seen[i], "index {} mapped twice", i);
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(PixelIndex::all().count(), PIXEL_COUNT);
    }

    #[test]
    fn test_cross_cells() {
        for c in CROSS {
            assert!(c.x() == c.y() || c.x() + c.y() == MATRIX_WIDTH - 1);
        }
    }

    proptest! {
        #[test]
        fn prop_even_rows_left_to_right(x in 0usize..MATRIX_WIDTH, row in 0usize..3) {
            let y = row * 2;
            let c = Coordinate::new(x, y).unwrap();
            prop_assert_eq!(c.index().get(), y * 5 + x);
        }

        #[test]
        fn prop_odd_rows_right_to_left(x in 0usize..MATRIX_WIDTH, row in 0usize..2) {
            let y = row * 2 + 1;
            let c = Coordinate::new(x, y).unwrap();
            prop_assert_eq!(c.index().get(), y * 5 + (4 - x));
        }

        #[test]
        fn prop_coordinate_bounds(x in 0usize..16, y in 0usize..16) {
            let c = Coordinate::new(x, y);
            prop_assert_eq!(c.is_some(), x < MATRIX_WIDTH && y < MATRIX_HEIGHT);
        }
    }
}
