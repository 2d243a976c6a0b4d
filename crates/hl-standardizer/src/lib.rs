//! High-Level Quantity Standardizer
//!
//! Prepares per-jet high-level quantities for ML inputs: each quantity is
//! rescaled by a power of ten chosen from its maximum, standardized to zero
//! mean and unit population standard deviation, and stacked along a new
//! trailing axis in input order.

mod config;
mod error;
mod quantities;
mod scale;
mod standardizer;
mod statistics;
mod validator;

pub use self::config::{DegeneratePolicy, StandardizerConfig};
pub use error::StandardizeError;
pub use quantities::HighLevelQuantities;
pub use scale::ScaleBucket;
pub use standardizer::{standardize_high_level, QuantityStats, StandardizedFeatures, Standardizer};
pub use statistics::{max_value, QuantityMoments};
pub use validator::validate;
