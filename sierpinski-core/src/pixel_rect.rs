use serde::{Deserialize, Serialize};

/// Rectangle of canvas cells (always u32 coordinates, half-open on the far edges).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Create new pixel rectangle
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering the cells `[x_start, x_end) × [y_start, y_end)`.
    /// Inverted ranges collapse to an empty rectangle.
    pub fn from_ranges(x_start: u32, x_end: u32, y_start: u32, y_end: u32) -> Self {
        Self {
            x: x_start,
            y: y_start,
            width: x_end.saturating_sub(x_start),
            height: y_end.saturating_sub(y_start),
        }
    }

    /// Calculate area in cells
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// One past the last column.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// One past the last row.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}
