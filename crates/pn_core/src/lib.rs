pub mod coords;
pub mod error;
pub mod noise;
pub mod params;
pub mod profile;

pub use coords::{GridSize, LatticeCell};
pub use error::ConfigurationError;
pub use noise::NoiseSampler;
pub use params::{NoiseParameters, ParameterRange, Seed};
pub use profile::GeneratorProfile;
