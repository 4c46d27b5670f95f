//! Sierpiński gasket: every triangle splits at its edge midpoints and loses
//! the central inverted triangle.
//!
//! Each cell carries its affine coordinates relative to the triangle that
//! owns it. A split doubles them and shifts by one corner, all in integers,
//! so deep iterations classify cells exactly.

use crate::worklist::{self, Grid, Region, Removal, Split};
use crate::Renderer;
use rayon::prelude::*;
use sierpinski_core::{
    validate_iterations, Canvas, FractalConfig, FractalError, FractalKind, TriangleFrame,
    TrianglePoint,
};

/// Regions with at least this many cells classify them on the rayon pool.
const PARALLEL_MIN_CELLS: usize = 4096;

/// Child slot a cell falls into when its triangle is split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Part {
    CornerA,
    CornerB,
    CornerC,
    Center,
}

/// A cell together with its position inside the triangle that owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cell {
    index: usize,
    point: TrianglePoint,
}

/// Triangle region: the cells it owns, each located in the region's own
/// affine frame.
///
/// Membership is only computed against the outer triangle once; after that
/// each split hands every cell to exactly one child, so cells on shared edges
/// can't be lost or counted twice.
#[derive(Clone, Debug)]
struct TriangleRegion {
    cells: Vec<Cell>,
}

impl TriangleRegion {
    /// Cells of a `pixels` canvas whose centers pass the barycentric test
    /// against the spanning triangle.
    fn spanning(grid: Grid) -> Self {
        let frame = TriangleFrame::new(grid.pixels);
        let side = grid.pixels as usize;

        let row_cells = move |y: u32| {
            (0..grid.pixels).filter_map(move |x| {
                let point = frame.locate(x, y);
                frame.contains(&point).then_some(Cell {
                    index: y as usize * side + x as usize,
                    point,
                })
            })
        };

        let cells = if grid.parallel {
            (0..grid.pixels)
                .into_par_iter()
                .flat_map_iter(row_cells)
                .collect()
        } else {
            (0..grid.pixels).flat_map(row_cells).collect()
        };

        Self { cells }
    }
}

/// Decides which child a point belongs to and maps it into that child's frame.
///
/// With `(u, v)` over `denom`, the corner at `A` holds `u + v < 1/2`, the
/// corner at `B` holds `u > 1/2` and the corner at `C` holds `v > 1/2`. Points
/// on a midline go to the center.
fn classify(point: TrianglePoint, denom: i64) -> (Part, TrianglePoint) {
    let TrianglePoint { u, v } = point;
    if 2 * (u + v) < denom {
        (Part::CornerA, TrianglePoint::new(2 * u, 2 * v))
    } else if 2 * u > denom {
        (Part::CornerB, TrianglePoint::new(2 * u - denom, 2 * v))
    } else if 2 * v > denom {
        (Part::CornerC, TrianglePoint::new(2 * u, 2 * v - denom))
    } else {
        (Part::Center, point)
    }
}

impl Region for TriangleRegion {
    fn split(self, grid: Grid) -> Split<Self> {
        let denom = TriangleFrame::new(grid.pixels).denom();
        let part_of = |cell: &Cell| {
            let (part, point) = classify(cell.point, denom);
            (
                part,
                Cell {
                    index: cell.index,
                    point,
                },
            )
        };

        let parallel = grid.parallel && self.cells.len() >= PARALLEL_MIN_CELLS;
        let parts: Vec<(Part, Cell)> = if parallel {
            self.cells.par_iter().map(part_of).collect()
        } else {
            self.cells.iter().map(part_of).collect()
        };

        let mut buckets: [Vec<Cell>; 3] = Default::default();
        let mut removed = Vec::new();
        for (part, cell) in parts {
            match part {
                Part::Center => removed.push(cell.index),
                corner => buckets[corner as usize].push(cell),
            }
        }

        let children = buckets
            .into_iter()
            .filter(|cells| !cells.is_empty())
            .map(|cells| TriangleRegion { cells })
            .collect();

        Split {
            removal: Removal::Cells(removed),
            children,
        }
    }
}

/// Renderer for the Sierpiński gasket.
#[derive(Clone, Copy, Debug, Default)]
pub struct GasketRenderer;

impl Renderer for GasketRenderer {
    fn kind(&self) -> FractalKind {
        FractalKind::Gasket
    }

    fn render(&self, config: &FractalConfig) -> Result<Canvas, FractalError> {
        let iterations = validate_iterations(config.iterations)?;
        log::info!(
            "rendering gasket: {}px, {} iterations",
            config.pixels,
            iterations
        );

        let grid = Grid {
            pixels: config.pixels,
            parallel: config.parallel,
        };
        let root = (config.pixels > 0 && iterations > 0).then(|| TriangleRegion::spanning(grid));
        Ok(worklist::run(
            Canvas::new(config.pixels),
            root,
            iterations,
            grid,
        ))
    }
}

/// Draw a Sierpiński gasket of `iterations` rounds on a `pixels × pixels` canvas.
///
/// The gasket's outer triangle has its apex at the top center and its base on
/// the bottom edge. Cells still in the gasket, or outside the outer triangle,
/// hold 0; cells removed in round `n` hold `n`.
/// Fails with [`FractalError::InvalidArgument`] when `iterations >= 256`.
pub fn gasket(pixels: u32, iterations: u32) -> Result<Canvas, FractalError> {
    GasketRenderer.render(&FractalConfig::new(pixels, iterations))
}
