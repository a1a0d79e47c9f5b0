//! Command-line argument parsing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pn_core::{GeneratorProfile, Seed};
use pn_persistence::load_profile;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "perlin_studio")]
#[command(about = "Fractal Perlin noise field generator", long_about = None)]
pub struct Args {
    /// Load settings from a saved profile before applying overrides
    #[arg(long, value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Permutation seed (random in [0, 10000) when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Field width in samples
    #[arg(long)]
    pub width: Option<usize>,

    /// Field height in samples
    #[arg(long)]
    pub height: Option<usize>,

    /// Size of the sampled window in lattice units
    #[arg(long)]
    pub scale: Option<f64>,

    /// Number of octaves
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Amplitude multiplier per octave
    #[arg(long)]
    pub persistence: Option<f64>,

    /// Frequency multiplier per octave
    #[arg(long)]
    pub lacunarity: Option<f64>,

    /// Name stored in a saved profile
    #[arg(long)]
    pub name: Option<String>,

    /// Reject out-of-domain parameters instead of rendering them
    #[arg(long)]
    pub strict: bool,

    /// Spread rows across all cores
    #[arg(long)]
    pub parallel: bool,

    /// Write a grayscale PNG of the field
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the raw field as RON
    #[arg(long, value_name = "PATH")]
    pub field_out: Option<PathBuf>,

    /// Save the resolved settings as a profile
    #[arg(long, value_name = "PATH")]
    pub save_profile: Option<PathBuf>,
}

impl Args {
    /// Build the generator profile: saved profile (or defaults), then
    /// command-line overrides on top.
    pub fn resolve_profile(&self) -> Result<GeneratorProfile> {
        let mut profile = match &self.profile {
            Some(path) => load_profile(path)
                .with_context(|| format!("failed to load profile {}", path.display()))?,
            None => GeneratorProfile {
                seed: pn_noise::random_seed(),
                ..GeneratorProfile::default()
            },
        };

        if let Some(seed) = self.seed {
            profile.seed = Seed(seed);
        }
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(width) = self.width {
            profile.grid.width = width;
        }
        if let Some(height) = self.height {
            profile.grid.height = height;
        }
        if let Some(scale) = self.scale {
            profile.params.scale = scale;
        }
        if let Some(octaves) = self.octaves {
            profile.params.octaves = octaves;
        }
        if let Some(persistence) = self.persistence {
            profile.params.persistence = persistence;
        }
        if let Some(lacunarity) = self.lacunarity {
            profile.params.lacunarity = lacunarity;
        }

        Ok(profile)
    }
}
