//! Square grid of removal-iteration codes.

use crate::{FractalError, PixelRect};
use serde::{Deserialize, Serialize};

/// `pixels × pixels` grid of cells stored row-major.
///
/// A cell value of 0 means the cell was never removed; `n > 0` means it was
/// first removed at iteration `n`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCanvas")]
pub struct Canvas {
    pixels: u32,
    cells: Vec<u8>,
}

/// Wire form of [`Canvas`], checked before it becomes one.
#[derive(Deserialize)]
struct RawCanvas {
    pixels: u32,
    cells: Vec<u8>,
}

impl TryFrom<RawCanvas> for Canvas {
    type Error = FractalError;

    fn try_from(raw: RawCanvas) -> Result<Self, Self::Error> {
        let side = raw.pixels as usize;
        let expected = side.checked_mul(side).ok_or_else(|| {
            FractalError::invalid_argument("pixels", format!("{} is too large", raw.pixels))
        })?;
        if raw.cells.len() != expected {
            return Err(FractalError::invalid_argument(
                "cells",
                format!(
                    "a {0}x{0} canvas needs {expected} cells, got {1}",
                    raw.pixels,
                    raw.cells.len()
                ),
            ));
        }
        Ok(Self {
            pixels: raw.pixels,
            cells: raw.cells,
        })
    }
}

impl Canvas {
    /// All-zero canvas.
    pub fn new(pixels: u32) -> Self {
        let side = pixels as usize;
        Self {
            pixels,
            cells: vec![0; side * side],
        }
    }

    /// Side length in cells.
    pub fn pixels(&self) -> u32 {
        self.pixels
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.pixels as usize, self.pixels as usize)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of column `x`, row `y`.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.pixels as usize + x as usize
    }

    pub fn get(&self, row: u32, col: u32) -> Option<u8> {
        if row >= self.pixels || col >= self.pixels {
            return None;
        }
        Some(self.cells[self.index_of(col, row)])
    }

    pub fn row(&self, row: u32) -> Option<&[u8]> {
        if row >= self.pixels {
            return None;
        }
        let start = self.index_of(0, row);
        Some(&self.cells[start..start + self.pixels as usize])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks() rejects a zero size; an empty canvas has no rows either way.
        self.cells.chunks(self.pixels.max(1) as usize)
    }

    /// Write `value` at flat index `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn set_index(&mut self, index: usize, value: u8) {
        self.cells[index] = value;
    }

    /// Write `value` into every cell of `rect`. The rect must lie inside the canvas.
    pub fn fill_rect(&mut self, rect: &PixelRect, value: u8) {
        debug_assert!(rect.right() <= self.pixels && rect.bottom() <= self.pixels);
        if rect.is_empty() {
            return;
        }
        for y in rect.y..rect.bottom() {
            let start = self.index_of(rect.x, y);
            self.cells[start..start + rect.width as usize].fill(value);
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.cells
    }

    /// Largest value on the canvas (0 for an empty or untouched canvas).
    pub fn max_value(&self) -> u8 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Number of cells holding each value.
    pub fn histogram(&self) -> [u64; 256] {
        let mut counts = [0u64; 256];
        for &value in &self.cells {
            counts[value as usize] += 1;
        }
        counts
    }

    pub fn count(&self, value: u8) -> u64 {
        self.cells.iter().filter(|&&v| v == value).count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_all_zero() {
        let canvas = Canvas::new(7);
        assert_eq!(canvas.shape(), (7, 7));
        assert_eq!(canvas.len(), 49);
        assert!(canvas.as_slice().iter().all(|&v| v == 0));
        assert_eq!(canvas.max_value(), 0);
    }

    #[test]
    fn zero_sized_canvas() {
        let canvas = Canvas::new(0);
        assert!(canvas.is_empty());
        assert_eq!(canvas.shape(), (0, 0));
        assert_eq!(canvas.rows().count(), 0);
        assert_eq!(canvas.get(0, 0), None);
    }

    #[test]
    fn fill_rect_touches_only_the_rect() {
        let mut canvas = Canvas::new(5);
        canvas.fill_rect(&PixelRect::new(1, 2, 3, 2), 4);

        assert_eq!(canvas.count(4), 6);
        assert_eq!(canvas.get(2, 1), Some(4)); // row 2, col 1
        assert_eq!(canvas.get(3, 3), Some(4));
        assert_eq!(canvas.get(1, 1), Some(0));
        assert_eq!(canvas.get(2, 4), Some(0));
        assert_eq!(canvas.row(3), Some(&[0, 4, 4, 4, 0][..]));
    }

    #[test]
    fn set_index_is_row_major() {
        let mut canvas = Canvas::new(4);
        let idx = canvas.index_of(3, 1);
        assert_eq!(idx, 7);
        canvas.set_index(idx, 9);
        assert_eq!(canvas.get(1, 3), Some(9));
    }

    #[test]
    fn histogram_counts_every_cell() {
        let mut canvas = Canvas::new(3);
        canvas.set_index(0, 1);
        canvas.set_index(4, 2);
        canvas.set_index(8, 2);

        let hist = canvas.histogram();
        assert_eq!(hist[0], 6);
        assert_eq!(hist[1], 1);
        assert_eq!(hist[2], 2);
        assert_eq!(hist.iter().sum::<u64>(), 9);
        assert_eq!(canvas.max_value(), 2);
    }

    #[test]
    fn rows_iterates_in_order() {
        let mut canvas = Canvas::new(2);
        canvas.set_index(2, 5);
        let rows: Vec<_> = canvas.rows().collect();
        assert_eq!(rows, vec![&[0, 0][..], &[5, 0][..]]);
    }

    #[test]
    fn deserialize_checks_cell_count() {
        let err = serde_json::from_str::<Canvas>(r#"{"pixels":3,"cells":[]}"#).unwrap_err();
        assert!(err.to_string().contains("needs 9 cells, got 0"), "{err}");

        let short = serde_json::from_str::<Canvas>(r#"{"pixels":2,"cells":[0,1,2]}"#);
        assert!(short.is_err());
    }

    #[test]
    fn deserialize_accepts_matching_cells() {
        let canvas: Canvas = serde_json::from_str(r#"{"pixels":2,"cells":[0,1,2,3]}"#).unwrap();
        assert_eq!(canvas.shape(), (2, 2));
        assert_eq!(canvas.get(1, 1), Some(3));

        let empty: Canvas = serde_json::from_str(r#"{"pixels":0,"cells":[]}"#).unwrap();
        assert!(empty.is_empty());
    }
}
