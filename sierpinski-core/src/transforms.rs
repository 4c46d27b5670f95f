//! Mapping from canvas cells into the frame of the spanning triangle.
//!
//! The canvas spans `[0, pixels)` on both axes (x = column, y = row, y down)
//! and a cell is represented by its center `(x + 0.5, y + 0.5)`. The spanning
//! triangle has apex `A = (pixels / 2, 0)` and base corners `B = (0, pixels)`,
//! `C = (pixels, pixels)`. Every point is `A + u·(B − A) + v·(C − A)`; for cell
//! centers `u` and `v` are rationals over `4 · pixels`, so they are kept as
//! integer numerators and never rounded.

use serde::{Deserialize, Serialize};

/// Affine coordinates `(u, v)` of a point, as numerators over
/// [`TriangleFrame::denom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrianglePoint {
    pub u: i64,
    pub v: i64,
}

impl TrianglePoint {
    pub fn new(u: i64, v: i64) -> Self {
        Self { u, v }
    }
}

/// The spanning triangle of a `pixels × pixels` canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriangleFrame {
    pixels: u32,
}

impl TriangleFrame {
    pub fn new(pixels: u32) -> Self {
        Self { pixels }
    }

    /// Common denominator of `u` and `v`.
    pub fn denom(&self) -> i64 {
        4 * self.pixels as i64
    }

    /// Coordinates of the center of the cell at column `x`, row `y`.
    pub fn locate(&self, x: u32, y: u32) -> TrianglePoint {
        let (x, y, p) = (x as i64, y as i64, self.pixels as i64);
        TrianglePoint {
            u: 2 * y - 4 * x + 2 * p - 1,
            v: 2 * y + 4 * x + 3 - 2 * p,
        }
    }

    /// Barycentric sign test: all three weights `u`, `v`, `1 − u − v` are
    /// non-negative. Points on an edge count as inside.
    pub fn contains(&self, point: &TrianglePoint) -> bool {
        point.u >= 0 && point.v >= 0 && point.u + point.v <= self.denom()
    }
}
