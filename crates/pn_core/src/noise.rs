/// Trait for single-octave noise samplers.
///
/// A sampler maps continuous 2D coordinates to a scalar. Implementations
/// must be pure: the same coordinates always yield the same value for the
/// lifetime of the sampler.
///
/// The trait is object-safe and `Send + Sync` so a sampler can be shared
/// read-only across worker threads while a field is generated.
pub trait NoiseSampler: Send + Sync {
    /// Sample the noise function at the given coordinates.
    ///
    /// # Arguments
    /// * `x` - Lattice-space X coordinate
    /// * `y` - Lattice-space Y coordinate
    ///
    /// # Returns
    /// A noise value, roughly in the range [-1.0, 1.0].
    fn sample(&self, x: f64, y: f64) -> f64;

    /// Returns the name of this sampler for debugging.
    fn name(&self) -> &'static str {
        "NoiseSampler"
    }
}
