//! Resolution context over a root builder

use crate::builder::{SharedBuilder, SpecimenContext};
use crate::config::GraphConfig;
use crate::error::{SpecimenError, SpecimenResult};
use crate::request::Request;
use crate::specimen::{Outcome, Specimen};
use std::cell::Cell;

/// [`SpecimenContext`] that resolves every request through one root builder
///
/// Tracks nesting depth, so create one per resolution rather than sharing it
/// between threads. The graph itself can be shared freely.
#[derive(Debug)]
pub struct ResolutionContext {
    root: SharedBuilder,
    config: GraphConfig,
    depth: Cell<usize>,
}

impl ResolutionContext {
    /// Context over `root` with default configuration
    #[inline]
    #[must_use]
    pub fn new(root: SharedBuilder) -> Self {
        Self::with_config(root, GraphConfig::default())
    }

    /// Context over `root` with `config`
    #[inline]
    #[must_use]
    pub fn with_config(root: SharedBuilder, config: GraphConfig) -> Self {
        Self {
            root,
            config,
            depth: Cell::new(0),
        }
    }

    /// The root builder
    #[inline]
    #[must_use]
    pub fn root(&self) -> &SharedBuilder {
        &self.root
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of resolutions currently in progress
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Resolve `request`, treating a decline as an error
    ///
    /// # Errors
    /// Returns [`SpecimenError::NoSpecimen`] if the graph declined
    pub fn resolve_required(&self, request: &Request) -> SpecimenResult<Specimen> {
        self.resolve(request)
            .into_specimen()
            .ok_or_else(|| SpecimenError::NoSpecimen {
                request: request.to_string(),
            })
    }
}

impl SpecimenContext for ResolutionContext {
    fn resolve(&self, request: &Request) -> Outcome {
        let depth = self.depth.get();
        if depth >= self.config.max_resolution_depth {
            tracing::warn!(
                %request,
                max_depth = self.config.max_resolution_depth,
                "resolution depth exceeded, declining"
            );
            return Outcome::NoSpecimen;
        }
        if depth == 0 {
            tracing::debug!(%request, "resolving");
        }

        self.depth.set(depth + 1);
        let outcome = self.root.create(request, self);
        self.depth.set(depth);
        outcome
    }
}
