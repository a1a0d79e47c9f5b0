use pn_core::{ConfigurationError, GridSize, NoiseParameters, NoiseSampler};
use rayon::prelude::*;

use crate::field::NoiseField;

/// Sequence of `(amplitude, frequency)` pairs, one per octave.
///
/// Every cell of a field reads the same schedule, so the pair used at
/// octave `k` never depends on which cell (or thread) is being evaluated.
#[derive(Clone, Debug)]
pub struct OctaveSchedule {
    remaining: u32,
    amplitude: f64,
    frequency: f64,
    persistence: f64,
    lacunarity: f64,
}

impl OctaveSchedule {
    pub fn new(params: &NoiseParameters) -> Self {
        Self {
            remaining: params.octaves,
            amplitude: 1.0,
            frequency: 1.0,
            persistence: params.persistence,
            lacunarity: params.lacunarity,
        }
    }
}

impl Iterator for OctaveSchedule {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let current = (self.amplitude, self.frequency);
        self.amplitude *= self.persistence;
        self.frequency *= self.lacunarity;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

/// Sum of octave amplitudes, `1 + p + p^2 + ...` over `octaves` terms.
///
/// The magnitude of a generated field is roughly bounded by this value.
pub fn theoretical_amplitude(params: &NoiseParameters) -> f64 {
    OctaveSchedule::new(params).map(|(amplitude, _)| amplitude).sum()
}

/// Layers a sampler over a grid at growing frequency and shrinking
/// amplitude.
#[derive(Clone, Copy, Debug)]
pub struct OctaveCompositor {
    params: NoiseParameters,
}

impl OctaveCompositor {
    pub fn new(params: NoiseParameters) -> Self {
        Self { params }
    }

    pub fn schedule(&self) -> OctaveSchedule {
        OctaveSchedule::new(&self.params)
    }

    /// Spacing between samples along each axis. The grid covers
    /// `[0, scale)`; the far edge is excluded so fields tile cleanly.
    fn steps(&self, grid: GridSize) -> (f64, f64) {
        (
            self.params.scale / grid.width as f64,
            self.params.scale / grid.height as f64,
        )
    }

    /// Generate a field one octave at a time.
    ///
    /// Fails only when `grid` has a zero dimension or too many cells.
    pub fn generate<S: NoiseSampler + ?Sized>(
        &self,
        sampler: &S,
        grid: GridSize,
    ) -> Result<NoiseField, ConfigurationError> {
        let mut field = NoiseField::zeros(grid)?;
        let (step_x, step_y) = self.steps(grid);

        for (octave, (amplitude, frequency)) in self.schedule().enumerate() {
            tracing::trace!(octave, amplitude, frequency, "accumulating octave");

            for (y, row) in field.data.chunks_mut(grid.width.max(1)).enumerate() {
                let py = y as f64 * step_y;
                for (x, cell) in row.iter_mut().enumerate() {
                    let px = x as f64 * step_x;
                    *cell += amplitude * sampler.sample(px * frequency, py * frequency);
                }
            }
        }

        Ok(field)
    }

    /// Generate a field with rows spread across the rayon pool.
    ///
    /// Each cell still sums its octaves in order, so the result is
    /// bit-identical to [`generate`](Self::generate).
    pub fn generate_parallel<S: NoiseSampler + ?Sized>(
        &self,
        sampler: &S,
        grid: GridSize,
    ) -> Result<NoiseField, ConfigurationError> {
        let mut field = NoiseField::zeros(grid)?;
        let (step_x, step_y) = self.steps(grid);
        let schedule: Vec<(f64, f64)> = self.schedule().collect();

        field
            .data
            .par_chunks_mut(grid.width.max(1))
            .enumerate()
            .for_each(|(y, row)| {
                let py = y as f64 * step_y;
                for (x, cell) in row.iter_mut().enumerate() {
                    let px = x as f64 * step_x;
                    for &(amplitude, frequency) in &schedule {
                        *cell += amplitude * sampler.sample(px * frequency, py * frequency);
                    }
                }
            });

        Ok(field)
    }
}
