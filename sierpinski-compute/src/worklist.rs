//! Depth-by-depth driver shared by both rasterizers.
//!
//! Each depth takes the regions still active after the previous depth, splits
//! every one of them independently, writes the removed cells, and keeps the
//! surviving children for the next depth. Regions that hold no cell are never
//! queued, so the worklist is bounded by the number of canvas cells.

use rayon::prelude::*;
use sierpinski_core::{Canvas, PixelRect};

/// Minimum number of regions at one depth before splitting goes to the pool.
const PARALLEL_MIN_REGIONS: usize = 16;

/// Canvas facts every region needs while splitting.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Grid {
    pub pixels: u32,
    pub parallel: bool,
}

/// Cells taken out of a region at the current depth.
#[derive(Debug)]
pub(crate) enum Removal {
    Rect(PixelRect),
    Cells(Vec<usize>),
}

impl Removal {
    /// Write `iteration` into every removed cell and return how many there were.
    fn apply(&self, canvas: &mut Canvas, iteration: u8) -> u64 {
        match self {
            Removal::Rect(rect) => {
                canvas.fill_rect(rect, iteration);
                rect.area()
            }
            Removal::Cells(cells) => {
                for &index in cells {
                    debug_assert_eq!(canvas.as_slice()[index], 0, "cell removed twice");
                    canvas.set_index(index, iteration);
                }
                cells.len() as u64
            }
        }
    }
}

/// Result of splitting one region.
pub(crate) struct Split<R> {
    pub removal: Removal,
    /// Non-empty children that stay in the fractal.
    pub children: Vec<R>,
}

/// A region of the canvas that is still part of the fractal.
pub(crate) trait Region: Send + Sized {
    fn split(self, grid: Grid) -> Split<Self>;
}

/// Run `iterations` depths starting from `root` and return the filled canvas.
pub(crate) fn run<R: Region>(
    mut canvas: Canvas,
    root: Option<R>,
    iterations: u8,
    grid: Grid,
) -> Canvas {
    let mut active: Vec<R> = root.into_iter().collect();

    for iteration in 1..=iterations {
        if active.is_empty() {
            log::debug!("depth {iteration}: no regions left, stopping early");
            break;
        }

        let region_count = active.len();
        let splits: Vec<Split<R>> = if grid.parallel && region_count >= PARALLEL_MIN_REGIONS {
            active.into_par_iter().map(|r| r.split(grid)).collect()
        } else {
            active.into_iter().map(|r| r.split(grid)).collect()
        };

        let mut next = Vec::with_capacity(splits.len() * 3);
        let mut removed = 0u64;
        for split in splits {
            removed += split.removal.apply(&mut canvas, iteration);
            next.extend(split.children);
        }

        log::debug!(
            "depth {iteration}: split {region_count} regions, removed {removed} cells, {} remain active",
            next.len()
        );
        active = next;
    }

    canvas
}
