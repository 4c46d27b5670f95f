//! Sierpiński carpet: every square splits into a 3×3 grid and loses its center.

use crate::worklist::{self, Grid, Region, Removal, Split};
use crate::Renderer;
use sierpinski_core::{
    validate_iterations, Canvas, FractalConfig, FractalError, FractalKind, PixelRect,
};

/// Run of cells `start..end` along one axis of a square.
///
/// Scaled to the square, the center of cell `i` sits at
/// `(first + step · (i − start)) / (2 · pixels)`, with every numerator below
/// `2 · pixels` while the run holds more than one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Axis {
    start: u32,
    end: u32,
    first: u64,
    step: u64,
}

impl Axis {
    /// Whole canvas: center of cell `i` is `(2i + 1) / (2 · pixels)`.
    fn whole(pixels: u32) -> Self {
        Self {
            start: 0,
            end: pixels,
            first: 1,
            step: 2,
        }
    }

    fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    fn numerator(&self, index: u32) -> u64 {
        self.first + self.step * (index - self.start) as u64
    }

    /// First cell whose numerator is at least `threshold`, or `end`.
    fn first_at_or_above(&self, threshold: u64) -> u32 {
        if threshold <= self.first {
            return self.start;
        }
        let offset = (threshold - self.first).div_ceil(self.step);
        (self.start as u64).saturating_add(offset).min(self.end as u64) as u32
    }

    /// Split into the cells whose next ternary digit is 0, 1 and 2.
    ///
    /// A center exactly on a third boundary takes the upper digit.
    fn thirds(&self, denom: u64) -> [Axis; 3] {
        let mut bounds = [self.start, self.end, self.end, self.end];
        for digit in 1..3u64 {
            let threshold = (digit * denom).div_ceil(3);
            let i = digit as usize;
            bounds[i] = self.first_at_or_above(threshold).max(bounds[i - 1]);
        }

        let step = self.step.saturating_mul(3);
        std::array::from_fn(|digit| {
            let (start, end) = (bounds[digit], bounds[digit + 1]);
            let first = if start < end {
                3 * self.numerator(start) - digit as u64 * denom
            } else {
                0
            };
            Axis {
                start,
                end,
                first,
                step,
            }
        })
    }
}

/// Square region: the product of a column run and a row run.
#[derive(Clone, Debug)]
struct Square {
    x: Axis,
    y: Axis,
}

impl Square {
    fn whole(pixels: u32) -> Self {
        Self {
            x: Axis::whole(pixels),
            y: Axis::whole(pixels),
        }
    }

    fn cells(&self) -> PixelRect {
        PixelRect::from_ranges(self.x.start, self.x.end, self.y.start, self.y.end)
    }
}

impl Region for Square {
    fn split(self, grid: Grid) -> Split<Self> {
        let denom = 2 * grid.pixels as u64;
        let cols = self.x.thirds(denom);
        let rows = self.y.thirds(denom);

        let mut children = Vec::with_capacity(8);
        for (j, y) in rows.iter().enumerate() {
            for (i, x) in cols.iter().enumerate() {
                if (i, j) != (1, 1) && !x.is_empty() && !y.is_empty() {
                    children.push(Square { x: *x, y: *y });
                }
            }
        }

        Split {
            removal: Removal::Rect(Square { x: cols[1], y: rows[1] }.cells()),
            children,
        }
    }
}

/// Renderer for the Sierpiński carpet.
#[derive(Clone, Copy, Debug, Default)]
pub struct CarpetRenderer;

impl Renderer for CarpetRenderer {
    fn kind(&self) -> FractalKind {
        FractalKind::Carpet
    }

    fn render(&self, config: &FractalConfig) -> Result<Canvas, FractalError> {
        let iterations = validate_iterations(config.iterations)?;
        log::info!(
            "rendering carpet: {}px, {} iterations",
            config.pixels,
            iterations
        );

        let grid = Grid {
            pixels: config.pixels,
            parallel: config.parallel,
        };
        let root = (config.pixels > 0).then(|| Square::whole(config.pixels));
        Ok(worklist::run(
            Canvas::new(config.pixels),
            root,
            iterations,
            grid,
        ))
    }
}

/// Draw a Sierpiński carpet of `iterations` rounds on a `pixels × pixels` canvas.
///
/// Cells still in the carpet hold 0; cells removed in round `n` hold `n`.
/// Fails with [`FractalError::InvalidArgument`] when `iterations >= 256`.
pub fn carpet(pixels: u32, iterations: u32) -> Result<Canvas, FractalError> {
    CarpetRenderer.render(&FractalConfig::new(pixels, iterations))
}
