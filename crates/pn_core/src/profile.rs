use serde::{Deserialize, Serialize};

use crate::{GridSize, NoiseParameters, Seed};

/// Everything needed to regenerate a field: the serializable unit a
/// front-end saves and restores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorProfile {
    /// Human-readable name for this profile.
    pub name: String,
    /// Seed for the permutation table.
    pub seed: Seed,
    /// Output resolution.
    pub grid: GridSize,
    /// Fractal noise parameters.
    pub params: NoiseParameters,
}

impl Default for GeneratorProfile {
    fn default() -> Self {
        Self {
            name: "Untitled".to_string(),
            seed: Seed(42),
            grid: GridSize::default(),
            params: NoiseParameters::default(),
        }
    }
}

impl GeneratorProfile {
    pub fn new(name: impl Into<String>, seed: Seed, grid: GridSize, params: NoiseParameters) -> Self {
        Self {
            name: name.into(),
            seed,
            grid,
            params,
        }
    }
}
