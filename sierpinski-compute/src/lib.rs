//! Sierpiński gasket and carpet rasterizers.
//!
//! Both fractals are drawn by a per-depth worklist of regions: at each depth
//! every region still in the fractal is split, its removed part is written
//! with the depth number, and the surviving parts carry on to the next depth.

pub mod carpet;
pub mod gasket;
pub mod renderer_factory;
pub mod renderer_trait;
mod worklist;

pub use carpet::{carpet, CarpetRenderer};
pub use gasket::{gasket, GasketRenderer};
pub use renderer_factory::{create_renderer, render, renderer_for};
pub use renderer_trait::Renderer;

// Re-export core types for convenience
pub use sierpinski_core::*;
