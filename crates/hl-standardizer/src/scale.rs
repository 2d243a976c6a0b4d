//! Magnitude Scale Detection
//!
//! Some high-level quantities come out of reconstruction in MeV-based units
//! with very large magnitudes: splitting scales and ECF1 sit around TeV
//! (1e6 MeV), ECF2 around TeV^2 and ECF3 around TeV^3. The exponent is
//! divided off before moments are computed.

use ndarray::{ArrayBase, DataMut, Dimension};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound (inclusive) of the unscaled bucket
const UNIT_CEILING: f64 = 1e5;
/// Upper bound (inclusive) of the TeV bucket
const MEGA_CEILING: f64 = 1e11;
/// Upper bound (inclusive) of the TeV^2 bucket
const TERA_CEILING: f64 = 1e17;

/// Exponent class of a quantity, chosen from its maximum value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleBucket {
    /// `max <= 1e5`, left as is
    Unit,
    /// `1e5 < max <= 1e11`, divided by 1e6
    Mega,
    /// `1e11 < max <= 1e17`, divided by 1e12
    Tera,
    /// `max > 1e17`, divided by 1e18
    Exa,
}

impl ScaleBucket {
    /// Pick the bucket for a quantity whose maximum is `max`.
    ///
    /// A NaN maximum fails every comparison and lands in `Unit`.
    pub fn detect(max: f64) -> Self {
        if max > TERA_CEILING {
            ScaleBucket::Exa
        } else if max > MEGA_CEILING {
            ScaleBucket::Tera
        } else if max > UNIT_CEILING {
            ScaleBucket::Mega
        } else {
            ScaleBucket::Unit
        }
    }

    /// Power-of-ten divisor applied to every sample
    pub fn divisor(self) -> f64 {
        match self {
            ScaleBucket::Unit => 1.0,
            ScaleBucket::Mega => 1e6,
            ScaleBucket::Tera => 1e12,
            ScaleBucket::Exa => 1e18,
        }
    }

    /// Divide `values` in place by this bucket's divisor
    pub fn rescale<S, D>(self, values: &mut ArrayBase<S, D>)
    where
        S: DataMut<Elem = f64>,
        D: Dimension,
    {
        if self == ScaleBucket::Unit {
            return;
        }
        let divisor = self.divisor();
        values.mapv_inplace(|v| v / divisor);
    }
}

impl fmt::Display for ScaleBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScaleBucket::Unit => "unit",
            ScaleBucket::Mega => "1e6",
            ScaleBucket::Tera => "1e12",
            ScaleBucket::Exa => "1e18",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_bucket_thresholds() {
        assert_eq!(ScaleBucket::detect(3.0), ScaleBucket::Unit);
        assert_eq!(ScaleBucket::detect(-1e9), ScaleBucket::Unit);
        assert_eq!(ScaleBucket::detect(5e6), ScaleBucket::Mega);
        assert_eq!(ScaleBucket::detect(5e12), ScaleBucket::Tera);
        assert_eq!(ScaleBucket::detect(5e18), ScaleBucket::Exa);
    }

    #[test]
    fn test_bucket_boundaries() {
        // Lower edge is exclusive, upper edge inclusive
        assert_eq!(ScaleBucket::detect(1e5), ScaleBucket::Unit);
        assert_eq!(ScaleBucket::detect(1e11), ScaleBucket::Mega);
        assert_eq!(ScaleBucket::detect(1e17), ScaleBucket::Tera);
        assert_eq!(ScaleBucket::detect(1e17 * (1.0 + f64::EPSILON)), ScaleBucket::Exa);
    }

    #[test]
    fn test_non_finite_maximum() {
        assert_eq!(ScaleBucket::detect(f64::NAN), ScaleBucket::Unit);
        assert_eq!(ScaleBucket::detect(f64::INFINITY), ScaleBucket::Exa);
        assert_eq!(ScaleBucket::detect(f64::NEG_INFINITY), ScaleBucket::Unit);
    }

    #[test]
    fn test_rescale_divides() {
        let mut values = array![1e7, 2e7, 3e7];
        ScaleBucket::Mega.rescale(&mut values);
        assert_eq!(values, array![10.0, 20.0, 30.0]);

        let mut untouched = array![1.5, 2.5];
        ScaleBucket::Unit.rescale(&mut untouched);
        assert_eq!(untouched, array![1.5, 2.5]);
    }
}
