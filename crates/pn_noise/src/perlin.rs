use pn_core::{LatticeCell, NoiseSampler};

use crate::gradient::dot;
use crate::lattice::{fade, lerp};
use crate::permutation::PermutationTable;

/// Single-octave 2D gradient noise at `(x, y)`.
///
/// Output is continuous with a continuous first derivative across lattice
/// boundaries, and lies in roughly [-1.0, 1.0] (never outside [-2.0, 2.0]).
pub fn sample(x: f64, y: f64, table: &PermutationTable) -> f64 {
    let cell = LatticeCell::containing(x, y);
    let xf = x - cell.x as f64;
    let yf = y - cell.y as f64;

    let u = fade(xf);
    let v = fade(yf);

    let x1 = cell.x.wrapping_add(1);
    let y1 = cell.y.wrapping_add(1);

    let n00 = dot(table.hash(cell.x, cell.y), xf, yf);
    let n01 = dot(table.hash(cell.x, y1), xf, yf - 1.0);
    let n11 = dot(table.hash(x1, y1), xf - 1.0, yf - 1.0);
    let n10 = dot(table.hash(x1, cell.y), xf - 1.0, yf);

    let bottom = lerp(n00, n10, u);
    let top = lerp(n01, n11, u);
    lerp(bottom, top, v)
}

/// Perlin noise sampler over a borrowed permutation table.
#[derive(Clone, Copy, Debug)]
pub struct PerlinNoise<'a> {
    table: &'a PermutationTable,
}

impl<'a> PerlinNoise<'a> {
    pub fn new(table: &'a PermutationTable) -> Self {
        Self { table }
    }
}

impl NoiseSampler for PerlinNoise<'_> {
    fn sample(&self, x: f64, y: f64) -> f64 {
        sample(x, y, self.table)
    }

    fn name(&self) -> &'static str {
        "Perlin"
    }
}
