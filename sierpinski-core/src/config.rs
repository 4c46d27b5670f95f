//! Fractal configuration.
//!
//! Holds the render parameters shared by both rasterizers and the registry of
//! fractal kinds that callers select by id.

use crate::FractalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canvas side length used when none is given.
pub const DEFAULT_PIXELS: u32 = 800;
/// Iteration depth used when none is given.
pub const DEFAULT_ITERATIONS: u32 = 5;
/// Largest iteration depth whose codes fit in a `u8` cell (0 is reserved).
pub const MAX_ITERATIONS: u32 = u8::MAX as u32;

/// Which Sierpiński fractal to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FractalKind {
    /// Triangle subdivision into four, removing the central inverted triangle.
    Gasket,
    /// Square subdivision into nine, removing the central square.
    Carpet,
}

impl FractalKind {
    pub const ALL: [FractalKind; 2] = [FractalKind::Gasket, FractalKind::Carpet];

    /// Unique identifier (matches renderer ID in compute layer)
    pub fn id(&self) -> &'static str {
        match self {
            FractalKind::Gasket => "gasket",
            FractalKind::Carpet => "carpet",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FractalKind::Gasket => "Sierpiński Gasket",
            FractalKind::Carpet => "Sierpiński Carpet",
        }
    }

    /// Look up a fractal kind by ID.
    pub fn from_id(id: &str) -> Option<FractalKind> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FractalKind {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| {
            FractalError::invalid_argument("kind", format!("unknown fractal `{s}`"))
        })
    }
}

/// Render parameters. Missing JSON fields fall back to the defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalConfig {
    /// Canvas side length in cells.
    pub pixels: u32,
    /// Number of subdivision rounds; must stay below 256.
    pub iterations: u32,
    /// Split regions on the rayon pool. Output is identical either way.
    pub parallel: bool,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            pixels: DEFAULT_PIXELS,
            iterations: DEFAULT_ITERATIONS,
            parallel: true,
        }
    }
}

impl FractalConfig {
    pub fn new(pixels: u32, iterations: u32) -> Self {
        Self {
            pixels,
            iterations,
            ..Self::default()
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<(), FractalError> {
        validate_iterations(self.iterations).map(|_| ())
    }

    /// Parse a JSON document such as `{"pixels": 500, "iterations": 6}`.
    pub fn from_json(json: &str) -> Result<Self, FractalError> {
        let config: FractalConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Check an iteration depth and narrow it to the cell type.
pub fn validate_iterations(iterations: u32) -> Result<u8, FractalError> {
    u8::try_from(iterations).map_err(|_| {
        FractalError::invalid_argument(
            "iterations",
            format!("must be at most {MAX_ITERATIONS}, got {iterations}"),
        )
    })
}
