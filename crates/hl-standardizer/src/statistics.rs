//! Quantity Statistics

use ndarray::{ArrayBase, Data, Dimension};

/// Signed maximum over every element.
///
/// Any NaN sample makes the result NaN, so a corrupted quantity is never
/// silently bucketed by its finite part. Empty input yields `-inf`.
pub fn max_value<S, D>(values: &ArrayBase<S, D>) -> f64
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    values.iter().copied().fold(f64::NEG_INFINITY, |acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.max(v)
        }
    })
}

/// First and second moments of a quantity, over all of its elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityMoments {
    /// Mean value
    pub mean: f64,
    /// Population standard deviation (ddof = 0)
    pub std_dev: f64,
}

impl QuantityMoments {
    /// Compute moments, or `None` when there are no samples
    pub fn compute<S, D>(values: &ArrayBase<S, D>) -> Option<Self>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let mean = values.mean()?;
        let std_dev = values.std(0.0);
        Some(Self { mean, std_dev })
    }

    /// Zero spread, standardizing would divide by zero
    pub fn is_degenerate(&self) -> bool {
        self.std_dev == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.mean.is_finite() && self.std_dev.is_finite()
    }
}
