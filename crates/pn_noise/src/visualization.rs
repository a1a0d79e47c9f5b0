//! Color conversion helpers for handing a field to a renderer.

use crate::field::NoiseField;

/// Convert a value to an opaque gray RGBA pixel.
///
/// `value` is mapped linearly from `[min, max]` to `[0, 255]` and clamped.
/// A degenerate range maps everything to black.
pub fn grayscale_to_rgba(value: f64, min: f64, max: f64) -> [u8; 4] {
    let span = max - min;
    let normalized = if span > 0.0 {
        ((value - min) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let gray = (normalized * 255.0) as u8;
    [gray, gray, gray, 255]
}

/// Row-major RGBA8 buffer for the whole field, stretched to its own range.
pub fn field_to_rgba(field: &NoiseField) -> Vec<u8> {
    let (min, max) = field.min_max().unwrap_or((0.0, 0.0));
    field
        .data
        .iter()
        .flat_map(|&v| grayscale_to_rgba(v, min, max))
        .collect()
}
