use thiserror::Error;

/// Rejected generator configuration.
///
/// Carries the offending field and the constraint it broke so a front-end
/// can point the user at the right control.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("grid {axis} must be positive, got {value}")]
    EmptyGrid { axis: &'static str, value: usize },

    #[error("grid {width}x{height} has more cells than fit in memory")]
    GridTooLarge { width: usize, height: usize },

    #[error("parameter `{field}` must be {constraint}, got {value}")]
    InvalidParameter {
        field: &'static str,
        constraint: &'static str,
        value: f64,
    },
}

impl ConfigurationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyGrid { axis, .. } => *axis,
            Self::GridTooLarge { .. } => "grid",
            Self::InvalidParameter { field, .. } => *field,
        }
    }
}
