//! Standardizer configuration

use crate::error::StandardizeError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do with a quantity whose statistics cannot standardize it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Reject zero-variance or non-finite quantities with an error
    #[default]
    Strict,
    /// Divide anyway and let NaN/Inf flow into the output
    Propagate,
}

/// Standardizer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardizerConfig {
    /// Handling of zero-variance and non-finite quantities
    pub degenerate_policy: DegeneratePolicy,

    /// Standardize quantities on the rayon pool (needs the `parallel` feature)
    pub parallel: bool,
}

impl StandardizerConfig {
    /// Prefix for environment overrides, e.g. `HL_STANDARDIZER_PARALLEL=true`
    pub const ENV_PREFIX: &'static str = "HL_STANDARDIZER";

    /// Load configuration from defaults, an optional file, then environment.
    ///
    /// The file format follows its extension (toml, json, yaml, ...).
    pub fn load(path: Option<&Path>) -> Result<Self, StandardizeError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path));
        }

        let settings = builder
            .add_source(::config::Environment::with_prefix(Self::ENV_PREFIX).try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
