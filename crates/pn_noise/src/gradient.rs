//! Gradient selection for the 2D lattice.
//!
//! Eight hash buckets map onto the four diagonal gradients, each of which
//! appears twice. The duplicated entries are kept so the lookup depends only
//! on the low three bits of the hash.

/// Dot product of the gradient chosen by `hash` with the offset `(dx, dy)`.
#[inline]
pub fn dot(hash: u8, dx: f64, dy: f64) -> f64 {
    match hash & 7 {
        0 => dx + dy,
        1 => -dx + dy,
        2 => dx - dy,
        3 => -dx - dy,
        4 => dy + dx,
        5 => -dy + dx,
        6 => dy - dx,
        _ => -dy - dx,
    }
}
