//! Standardization Error Types

use ndarray::ShapeError;
use thiserror::Error;

/// Errors during high-level quantity standardization
#[derive(Debug, Error)]
pub enum StandardizeError {
    /// No quantities were supplied
    #[error("No quantities to standardize")]
    EmptyInput,

    /// A quantity holds no samples
    #[error("Quantity '{name}' has no samples")]
    EmptyQuantity { name: String },

    /// Quantity shape differs from the first quantity
    #[error("Quantity '{name}' has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        name: String,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    /// Zero standard deviation after rescaling
    #[error("Quantity '{name}' has zero variance and cannot be standardized")]
    DegenerateQuantity { name: String },

    /// Mean or standard deviation is NaN or infinite
    #[error("Quantity '{name}' has non-finite statistics (mean={mean}, std_dev={std_dev})")]
    NonFiniteStatistic {
        name: String,
        mean: f64,
        std_dev: f64,
    },

    /// Stacking the standardized quantities failed
    #[error("Failed to stack standardized quantities: {0}")]
    Stack(#[from] ShapeError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}
