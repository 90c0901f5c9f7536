//! Collision map lookups.
//!
//! The map is a row-major grid of collision types, one per world pixel.
//! `0` is free space; any other value is a collision type. World y points
//! up while row 0 is the top of the map, so lookups flip y.

use thiserror::Error;

/// Collision map construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// Buffer length does not match the declared size.
    #[error("collision map is {width}x{height} but has {actual} cells")]
    SizeMismatch {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// Cells supplied
        actual: usize,
    },
}

/// Per-pixel collision types of a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionMap {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl CollisionMap {
    /// Wraps a row-major buffer, top row first.
    ///
    /// # Errors
    ///
    /// Returns `WorldError::SizeMismatch` if `cells` is not `width * height` long.
    pub fn new(width: usize, height: usize, cells: Vec<u32>) -> Result<Self, WorldError> {
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(WorldError::SizeMismatch {
                width,
                height,
                actual: cells.len(),
            });
        }
        Ok(Self { width, height, cells })
    }

    /// Parses an ASCII sketch: `.` or space is free, any other character is
    /// collision type 1. Rows are listed top first and must be equally long.
    ///
    /// # Errors
    ///
    /// Returns `WorldError::SizeMismatch` on ragged rows.
    pub fn from_ascii(text: &str) -> Result<Self, WorldError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|row| !row.is_empty())
            .collect();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let cells: Vec<u32> = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(|c| u32::from(!matches!(c, '.' | ' ')))
            .collect();
        Self::new(width, rows.len(), cells)
    }

    /// Map width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Map height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Collision type at world position `(x, y)`, rounded to the nearest
    /// pixel. Anything outside the map is free.
    #[must_use]
    pub fn collides_with(&self, x: f32, y: f32) -> u32 {
        let (column, row_from_bottom) = (x.round(), y.round());
        if !(column >= 0.0 && row_from_bottom >= 0.0) {
            return 0;
        }
        let (column, row_from_bottom) = (column as usize, row_from_bottom as usize);
        if column >= self.width || row_from_bottom >= self.height {
            return 0;
        }
        let row = self.height - 1 - row_from_bottom;
        self.cells[row * self.width + column]
    }

    /// First collision type along a vertical line from `y` down to
    /// `y - height + 1`, or 0 if the line is free.
    #[must_use]
    pub fn collides_with_vertical_line(&self, x: f32, y: f32, height: f32) -> u32 {
        let mut i = 0.0;
        while i < height {
            let collision = self.collides_with(x, y - i);
            if collision != 0 {
                return collision;
            }
            i += 1.0;
        }
        0
    }

    /// Walks down from `y` one pixel at a time until it hits a collision or
    /// reaches `y <= 0`, and returns that y.
    #[must_use]
    pub fn ground_below(&self, x: f32, y: f32) -> f32 {
        let mut y = y;
        while y > 0.0 && self.collides_with(x, y) == 0 {
            y -= 1.0;
        }
        y
    }
}
