//! High-Level Quantity Standardization

use crate::config::{DegeneratePolicy, StandardizerConfig};
use crate::error::StandardizeError;
use crate::quantities::HighLevelQuantities;
use crate::scale::ScaleBucket;
use crate::statistics::{max_value, QuantityMoments};
use crate::validator;
use ndarray::{ArrayD, ArrayViewD, Axis};
use serde::Serialize;
use tracing::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// What was done to one quantity during a call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantityStats {
    /// Quantity name
    pub name: String,
    /// Detected exponent class
    pub bucket: ScaleBucket,
    /// Maximum before rescaling
    pub max: f64,
    /// Mean after rescaling
    pub mean: f64,
    /// Population standard deviation after rescaling
    pub std_dev: f64,
}

/// Stacked output together with per-quantity statistics
#[derive(Debug, Clone)]
pub struct StandardizedFeatures {
    /// Shape `S + (k,)`, slice `i` on the last axis is quantity `i`
    pub features: ArrayD<f64>,
    /// One entry per quantity, in input order
    pub stats: Vec<QuantityStats>,
}

impl StandardizedFeatures {
    /// Feature names in trailing-axis order
    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.stats.iter().map(|s| s.name.as_str())
    }

    /// Standardized samples of quantity `index`
    pub fn column(&self, index: usize) -> Option<ArrayViewD<'_, f64>> {
        let axis = Axis(self.features.ndim() - 1);
        (index < self.features.len_of(axis)).then(|| self.features.index_axis(axis, index))
    }

    /// Standardized samples of the named quantity
    pub fn column_by_name(&self, name: &str) -> Option<ArrayViewD<'_, f64>> {
        let index = self.stats.iter().position(|s| s.name == name)?;
        self.column(index)
    }

    pub fn into_array(self) -> ArrayD<f64> {
        self.features
    }
}

/// Per-call standardizer for high-level quantities.
///
/// Statistics are computed fresh from each call's input; nothing is carried
/// between calls, so running it on its own output re-standardizes rather than
/// returning the input unchanged.
#[derive(Debug, Clone, Default)]
pub struct Standardizer {
    config: StandardizerConfig,
}

impl Standardizer {
    /// Create a standardizer with the given config
    pub fn new(config: StandardizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StandardizerConfig {
        &self.config
    }

    /// Rescale, standardize and stack every quantity.
    ///
    /// The caller's arrays are left untouched.
    pub fn standardize(&self, quantities: &HighLevelQuantities) -> Result<ArrayD<f64>, StandardizeError> {
        self.standardize_with_report(quantities)
            .map(StandardizedFeatures::into_array)
    }

    /// Like [`standardize`](Self::standardize), also returning the bucket and
    /// moments chosen for each quantity
    pub fn standardize_with_report(
        &self,
        quantities: &HighLevelQuantities,
    ) -> Result<StandardizedFeatures, StandardizeError> {
        let shape = validator::validate(quantities)?;
        let trailing = Axis(shape.len());

        let columns = self.standardize_all(quantities)?;
        let views: Vec<ArrayViewD<'_, f64>> = columns.iter().map(|(values, _)| values.view()).collect();
        let features = ndarray::stack(trailing, &views)?;

        info!(
            "Standardized {} quantities into shape {:?}",
            columns.len(),
            features.shape()
        );

        let stats = columns.into_iter().map(|(_, stats)| stats).collect();
        Ok(StandardizedFeatures { features, stats })
    }

    fn standardize_all(
        &self,
        quantities: &HighLevelQuantities,
    ) -> Result<Vec<(ArrayD<f64>, QuantityStats)>, StandardizeError> {
        if self.config.parallel {
            #[cfg(feature = "parallel")]
            {
                return quantities
                    .entries()
                    .par_iter()
                    .map(|(name, values)| self.standardize_one(name, values))
                    .collect();
            }

            #[cfg(not(feature = "parallel"))]
            debug!("Parallel standardization requested without the `parallel` feature, running sequentially");
        }

        quantities
            .iter()
            .map(|(name, values)| self.standardize_one(name, values))
            .collect()
    }

    fn standardize_one(
        &self,
        name: &str,
        values: &ArrayD<f64>,
    ) -> Result<(ArrayD<f64>, QuantityStats), StandardizeError> {
        let max = max_value(values);
        let bucket = ScaleBucket::detect(max);

        let mut scaled = values.to_owned();
        bucket.rescale(&mut scaled);

        let moments = QuantityMoments::compute(&scaled).ok_or_else(|| StandardizeError::EmptyQuantity {
            name: name.to_string(),
        })?;
        self.check_moments(name, &moments)?;

        debug!(
            "Quantity '{}': max={}, bucket={}, mean={}, std_dev={}",
            name, max, bucket, moments.mean, moments.std_dev
        );

        let QuantityMoments { mean, std_dev } = moments;
        scaled.mapv_inplace(|v| (v - mean) / std_dev);

        Ok((
            scaled,
            QuantityStats {
                name: name.to_string(),
                bucket,
                max,
                mean,
                std_dev,
            },
        ))
    }

    fn check_moments(&self, name: &str, moments: &QuantityMoments) -> Result<(), StandardizeError> {
        match self.config.degenerate_policy {
            DegeneratePolicy::Strict => {
                if !moments.is_finite() {
                    return Err(StandardizeError::NonFiniteStatistic {
                        name: name.to_string(),
                        mean: moments.mean,
                        std_dev: moments.std_dev,
                    });
                }
                if moments.is_degenerate() {
                    return Err(StandardizeError::DegenerateQuantity {
                        name: name.to_string(),
                    });
                }
            }
            DegeneratePolicy::Propagate => {
                if moments.is_degenerate() || !moments.is_finite() {
                    warn!(
                        "Quantity '{}' has mean={}, std_dev={}; output will contain NaN or Inf",
                        name, moments.mean, moments.std_dev
                    );
                }
            }
        }
        Ok(())
    }
}

/// Standardize high-level quantities with the default (strict, sequential)
/// configuration.
///
/// Each quantity is divided by the power of ten matching its maximum, then
/// shifted to zero mean and scaled to unit population standard deviation.
/// The results are stacked along a new trailing axis in input order.
pub fn standardize_high_level(quantities: &HighLevelQuantities) -> Result<ArrayD<f64>, StandardizeError> {
    Standardizer::default().standardize(quantities)
}
