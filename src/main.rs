mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use pn_core::GeneratorProfile;
use pn_noise::{
    generate_field, new_seed, theoretical_amplitude, visualization::field_to_rgba, NoiseField,
    OctaveCompositor, PerlinNoise,
};
use pn_persistence::{save_field, save_profile};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::Args;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let profile = args.resolve_profile()?;

    if args.strict {
        profile.grid.validate()?;
        profile.params.validate()?;
    }
    for name in profile.params.outside_suggested_ranges() {
        warn!(parameter = name, "value outside the usual range");
    }

    let field = generate(&profile, args.parallel)?;
    report(&profile, &field);

    if let Some(path) = &args.output {
        let (width, height) = (u32::try_from(field.width)?, u32::try_from(field.height)?);
        let image = image::RgbaImage::from_raw(width, height, field_to_rgba(&field))
            .context("pixel buffer does not match field size")?;
        image
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Saved image to {}", path.display());
    }

    if let Some(path) = &args.field_out {
        save_field(path, &field).with_context(|| format!("failed to write {}", path.display()))?;
        info!("Saved field to {}", path.display());
    }

    if let Some(path) = &args.save_profile {
        save_profile(path, &profile)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Saved profile to {}", path.display());
    }

    Ok(())
}

fn generate(profile: &GeneratorProfile, parallel: bool) -> Result<NoiseField> {
    let table = new_seed(Some(profile.seed));
    let grid = profile.grid;

    info!(
        "Generating {}x{} field with seed {}...",
        grid.width, grid.height, profile.seed
    );

    if parallel {
        let compositor = OctaveCompositor::new(profile.params);
        Ok(compositor.generate_parallel(&PerlinNoise::new(&table), grid)?)
    } else {
        Ok(generate_field(&table, &profile.params, grid.width, grid.height)?)
    }
}

fn report(profile: &GeneratorProfile, field: &NoiseField) {
    let (min, max) = field.min_max().unwrap_or((0.0, 0.0));
    info!(
        "Field ready: min {:.4}, max {:.4}, mean {:.4} (octave weight {:.4})",
        min,
        max,
        field.mean(),
        theoretical_amplitude(&profile.params)
    );
}
