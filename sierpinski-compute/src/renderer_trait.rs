use sierpinski_core::{Canvas, FractalConfig, FractalError, FractalKind};

/// Rasterizes one kind of fractal onto a fresh canvas.
///
/// Implementations are stateless; every call allocates and returns its own
/// canvas, so one renderer can be shared across threads.
pub trait Renderer: Send + Sync {
    fn kind(&self) -> FractalKind;

    /// Validate `config` and draw the fractal. Invalid arguments are rejected
    /// before the canvas is allocated.
    fn render(&self, config: &FractalConfig) -> Result<Canvas, FractalError>;
}
