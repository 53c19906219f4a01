//! Error types for the specimen kernel
//!
//! Declining a request is not an error: it is reported as
//! [`Outcome::NoSpecimen`](crate::Outcome::NoSpecimen). The variants here cover
//! programming errors at graph construction, failed graph edits, invalid
//! configuration and a top-level resolution that produced nothing.

use crate::node::MarkerRole;

/// Main specimen kernel error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecimenError {
    /// A required argument was absent or unusable
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// The graph declined a top-level request
    #[error("no specimen could be created for request {request}")]
    NoSpecimen {
        /// Rendered request
        request: String,
    },

    /// A graph edit targeted a marker role that is not in the graph
    #[error("no marker node with role {role} found in graph")]
    MarkerNotFound {
        /// The role that was searched for
        role: MarkerRole,
    },

    /// Configuration could not be parsed or failed validation
    #[error("configuration error: {0}")]
    Config(String),
}

impl SpecimenError {
    /// Create an invalid argument error
    #[inline]
    #[must_use]
    pub fn invalid_argument(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }

    /// Check if error is a construction-time programming error
    #[inline]
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Result alias for kernel operations
pub type SpecimenResult<T> = Result<T, SpecimenError>;
