use pn_core::{ConfigurationError, GridSize};
use serde::{Deserialize, Serialize};

/// A generated noise field.
///
/// Values are stored row-major (`data[y * width + x]`) and are not
/// normalized; see [`NoiseField::normalized`] for a [0, 1] copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseField {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f64>,
}

impl NoiseField {
    /// All-zero field of the given size.
    pub fn zeros(grid: GridSize) -> Result<Self, ConfigurationError> {
        grid.validate()?;
        Ok(Self {
            width: grid.width,
            height: grid.height,
            data: vec![0.0; grid.width * grid.height],
        })
    }

    /// Wrap existing row-major data. Returns `None` on a length mismatch.
    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> Option<Self> {
        if width.checked_mul(height) != Some(data.len()) {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.width + x]
    }

    pub fn row(&self, y: usize) -> &[f64] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.width.max(1))
    }

    /// Smallest and largest value, or `None` for an empty field.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.data.iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    /// Copy rescaled so the minimum maps to 0 and the maximum to 1.
    /// A constant field maps to all zeros.
    pub fn normalized(&self) -> Self {
        let (min, max) = self.min_max().unwrap_or((0.0, 0.0));
        let span = max - min;
        let data = self
            .data
            .iter()
            .map(|&v| if span > 0.0 { (v - min) / span } else { 0.0 })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_field() -> NoiseField {
        NoiseField::from_vec(3, 2, vec![-1.0, 0.0, 1.0, 0.5, -0.5, 3.0]).unwrap()
    }

    #[test]
    fn indexing_is_row_major() {
        let field = sample_field();
        assert_eq!(field.get(2, 0), 1.0);
        assert_eq!(field.get(0, 1), 0.5);
        assert_eq!(field.row(1), &[0.5, -0.5, 3.0]);
        assert_eq!(field.rows().count(), 2);
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(NoiseField::from_vec(2, 2, vec![0.0; 3]).is_none());
        assert!(NoiseField::from_vec(usize::MAX, 2, Vec::new()).is_none());
    }

    #[test]
    fn zeros_rejects_unrepresentable_grid() {
        let err = NoiseField::zeros(GridSize::new(usize::MAX, usize::MAX)).unwrap_err();
        assert_eq!(err.field(), "grid");
        assert!(NoiseField::zeros(GridSize::new(0, 3)).is_err());
    }

    #[test]
    fn statistics() {
        let field = sample_field();
        assert_eq!(field.min_max(), Some((-1.0, 3.0)));
        assert!((field.mean() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn normalized_spans_unit_interval() {
        let norm = sample_field().normalized();
        assert_eq!(norm.min_max(), Some((0.0, 1.0)));
        assert_eq!(norm.get(1, 0), 0.25);
    }

    #[test]
    fn constant_field_normalizes_to_zero() {
        let field = NoiseField::zeros(GridSize::new(4, 3)).unwrap();
        assert_eq!(field.data.len(), 12);
        assert!(field.normalized().data.iter().all(|&v| v == 0.0));
    }
}
