//! Resolution configuration

use crate::error::{SpecimenError, SpecimenResult};
use serde::Deserialize;

/// Settings for resolving requests through a graph
///
/// Every field has a default, so a TOML document only needs the keys it
/// overrides:
///
/// ```toml
/// max_resolution_depth = 16
/// log_filter = "specimen_kernel=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Nested resolutions allowed before a request is declined
    pub max_resolution_depth: usize,
    /// `tracing_subscriber::EnvFilter` directive used when no `RUST_LOG` is set
    pub log_filter: String,
}

impl GraphConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With maximum resolution depth
    #[inline]
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_resolution_depth = depth;
        self
    }

    /// With log filter directive
    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Parse and validate a TOML document
    ///
    /// # Errors
    /// Returns [`SpecimenError::Config`] on malformed TOML, unknown keys or
    /// invalid values
    pub fn from_toml_str(source: &str) -> SpecimenResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| SpecimenError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns [`SpecimenError::Config`] if the depth is zero or the filter is blank
    pub fn validate(&self) -> SpecimenResult<()> {
        if self.max_resolution_depth == 0 {
            return Err(SpecimenError::Config(
                "max_resolution_depth must be at least 1".to_string(),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(SpecimenError::Config("log_filter must not be blank".to_string()));
        }
        Ok(())
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_resolution_depth: 64,
            log_filter: "warn".to_string(),
        }
    }
}
