use serde::{Deserialize, Serialize};

use crate::ConfigurationError;

/// Seed for permutation-table construction.
///
/// The seed fully determines the table, and therefore the field for a
/// given parameter set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed(pub u64);

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive range of values a front-end should offer for a parameter.
///
/// Purely advisory: the generator accepts values outside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
}

impl ParameterRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Fractal noise parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseParameters {
    /// Size of the sampled window in lattice units.
    pub scale: f64,
    /// Number of layered octaves.
    pub octaves: u32,
    /// Amplitude multiplier applied after each octave.
    pub persistence: f64,
    /// Frequency multiplier applied after each octave.
    pub lacunarity: f64,
}

impl Default for NoiseParameters {
    fn default() -> Self {
        Self {
            scale: 10.0,
            octaves: 3,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

impl NoiseParameters {
    pub const SCALE_RANGE: ParameterRange = ParameterRange::new(1.0, 50.0);
    pub const OCTAVES_RANGE: ParameterRange = ParameterRange::new(1.0, 6.0);
    pub const PERSISTENCE_RANGE: ParameterRange = ParameterRange::new(0.1, 1.0);
    pub const LACUNARITY_RANGE: ParameterRange = ParameterRange::new(1.0, 4.0);

    pub fn new(scale: f64, octaves: u32, persistence: f64, lacunarity: f64) -> Self {
        Self {
            scale,
            octaves,
            persistence,
            lacunarity,
        }
    }

    /// Restore every parameter to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check every field against its documented domain.
    ///
    /// Generation never calls this; it exists for callers that want to
    /// refuse degenerate input instead of rendering it.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigurationError::InvalidParameter {
                field: "scale",
                constraint: "finite and > 0",
                value: self.scale,
            });
        }
        if self.octaves == 0 {
            return Err(ConfigurationError::InvalidParameter {
                field: "octaves",
                constraint: ">= 1",
                value: f64::from(self.octaves),
            });
        }
        if !(self.persistence > 0.0 && self.persistence <= 1.0) {
            return Err(ConfigurationError::InvalidParameter {
                field: "persistence",
                constraint: "in (0, 1]",
                value: self.persistence,
            });
        }
        if !(self.lacunarity.is_finite() && self.lacunarity >= 1.0) {
            return Err(ConfigurationError::InvalidParameter {
                field: "lacunarity",
                constraint: "finite and >= 1",
                value: self.lacunarity,
            });
        }
        Ok(())
    }

    /// Names of parameters that fall outside their suggested UI range.
    pub fn outside_suggested_ranges(&self) -> Vec<&'static str> {
        let checks = [
            ("scale", Self::SCALE_RANGE, self.scale),
            ("octaves", Self::OCTAVES_RANGE, f64::from(self.octaves)),
            ("persistence", Self::PERSISTENCE_RANGE, self.persistence),
            ("lacunarity", Self::LACUNARITY_RANGE, self.lacunarity),
        ];

        checks
            .into_iter()
            .filter(|(_, range, value)| !range.contains(*value))
            .map(|(name, _, _)| name)
            .collect()
    }
}
