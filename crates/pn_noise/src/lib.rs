//! 2D Perlin noise kernel.
//!
//! A seed builds a [`PermutationTable`]; [`generate_field`] layers Perlin
//! octaves over a grid using that table. Everything here is a pure function
//! of its inputs apart from [`random_seed`].

pub mod field;
pub mod gradient;
pub mod lattice;
pub mod octave;
pub mod perlin;
pub mod permutation;
pub mod visualization;

use pn_core::{ConfigurationError, GridSize, NoiseParameters, Seed};
use rand::Rng;

pub use field::NoiseField;
pub use octave::{theoretical_amplitude, OctaveCompositor, OctaveSchedule};
pub use perlin::PerlinNoise;
pub use permutation::PermutationTable;

/// Upper bound (exclusive) for seeds drawn by [`random_seed`].
pub const RANDOM_SEED_LIMIT: u64 = 10_000;

/// Draw a fresh seed in `[0, RANDOM_SEED_LIMIT)` from the thread-local RNG.
pub fn random_seed() -> Seed {
    Seed(rand::thread_rng().gen_range(0..RANDOM_SEED_LIMIT))
}

/// Build the permutation table for `seed`, drawing a random seed if none
/// is given.
pub fn new_seed(seed: Option<Seed>) -> PermutationTable {
    let seed = seed.unwrap_or_else(random_seed);
    tracing::debug!(seed = seed.0, "new permutation table");
    PermutationTable::build(seed)
}

/// Generate a `width x height` fractal Perlin field.
///
/// Parameters are not range-checked: degenerate values such as zero
/// octaves or zero persistence produce well-defined fields. Only an empty
/// or unrepresentably large grid is rejected.
pub fn generate_field(
    table: &PermutationTable,
    params: &NoiseParameters,
    width: usize,
    height: usize,
) -> Result<NoiseField, ConfigurationError> {
    let grid = GridSize::new(width, height);

    tracing::debug!(
        width,
        height,
        scale = params.scale,
        octaves = params.octaves,
        persistence = params.persistence,
        lacunarity = params.lacunarity,
        "generating field"
    );

    let compositor = OctaveCompositor::new(*params);
    compositor.generate(&PerlinNoise::new(table), grid)
}
