pub mod canvas;
pub mod config;
pub mod error;
pub mod pixel_rect;
pub mod stats;
pub mod transforms;

pub use canvas::Canvas;
pub use config::{
    validate_iterations, FractalConfig, FractalKind, DEFAULT_ITERATIONS, DEFAULT_PIXELS,
    MAX_ITERATIONS,
};
pub use error::FractalError;
pub use pixel_rect::PixelRect;
pub use stats::CanvasStats;
pub use transforms::{TriangleFrame, TrianglePoint};
