use crate::{CarpetRenderer, GasketRenderer, Renderer};
use sierpinski_core::{Canvas, FractalConfig, FractalError, FractalKind};

/// Renderer for a fractal kind.
pub fn renderer_for(kind: FractalKind) -> Box<dyn Renderer> {
    match kind {
        FractalKind::Gasket => Box::new(GasketRenderer),
        FractalKind::Carpet => Box::new(CarpetRenderer),
    }
}

/// Create a renderer by ID
pub fn create_renderer(renderer_id: &str) -> Option<Box<dyn Renderer>> {
    FractalKind::from_id(renderer_id).map(renderer_for)
}

/// Draw `kind` with `config`.
pub fn render(kind: FractalKind, config: &FractalConfig) -> Result<Canvas, FractalError> {
    renderer_for(kind).render(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_renderer_by_id() {
        for kind in FractalKind::ALL {
            let renderer = create_renderer(kind.id()).unwrap();
            assert_eq!(renderer.kind(), kind);
        }
        assert!(create_renderer("test_image").is_none());
    }

    #[test]
    fn render_dispatches_on_kind() {
        let config = FractalConfig::new(27, 1);
        let carpet = render(FractalKind::Carpet, &config).unwrap();
        let gasket = render(FractalKind::Gasket, &config).unwrap();
        assert_eq!(carpet.count(1), 81);
        assert_ne!(carpet, gasket);
    }
}
