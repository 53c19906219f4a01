//! Builder and context contracts
//!
//! Provides the [`SpecimenBuilder`] trait every producer implements, leaf or
//! composite, and the [`SpecimenContext`] trait builders use to resolve nested
//! requests back through the active graph.

use crate::node::BuilderNode;
use crate::request::Request;
use crate::specimen::{Outcome, Specimen};
use std::fmt;
use std::sync::Arc;

/// Produces specimens for requests
///
/// # Contract
/// - `create` returns [`Outcome::NoSpecimen`] for requests it does not handle
/// - Nested values are obtained through `context`, never by calling into the
///   graph directly
pub trait SpecimenBuilder: Send + Sync + fmt::Debug {
    /// Create a specimen for `request`, or decline
    fn create(&self, request: &Request, context: &dyn SpecimenContext) -> Outcome;

    /// View this builder as a graph node
    ///
    /// Leaf builders keep the default. Graph walkers use this to descend into
    /// children without knowing concrete builder types.
    fn as_node(&self) -> Option<&BuilderNode> {
        None
    }
}

/// Resolves nested requests through the active builder graph
pub trait SpecimenContext {
    /// Resolve `request`, or decline
    fn resolve(&self, request: &Request) -> Outcome;
}

/// Shared handle to a builder
///
/// Graph nodes own their children through these handles; recomposing a node
/// reuses them instead of copying subtrees.
pub type SharedBuilder = Arc<dyn SpecimenBuilder>;

/// Wrap a builder in a [`SharedBuilder`]
#[inline]
#[must_use]
pub fn shared<B: SpecimenBuilder + 'static>(builder: B) -> SharedBuilder {
    Arc::new(builder)
}

/// Builder that returns the same specimen for every request
#[derive(Debug, Clone)]
pub struct FixedBuilder {
    specimen: Specimen,
}

impl FixedBuilder {
    /// Create from a value
    #[inline]
    #[must_use]
    pub fn new<T: std::any::Any + Send + Sync>(value: T) -> Self {
        Self {
            specimen: Specimen::new(value),
        }
    }

    /// Create from an existing specimen
    #[inline]
    #[must_use]
    pub fn from_specimen(specimen: Specimen) -> Self {
        Self { specimen }
    }

    /// The specimen handed out
    #[inline]
    #[must_use]
    pub fn specimen(&self) -> &Specimen {
        &self.specimen
    }
}

impl SpecimenBuilder for FixedBuilder {
    fn create(&self, _request: &Request, _context: &dyn SpecimenContext) -> Outcome {
        Outcome::Created(self.specimen.clone())
    }
}

/// Builder backed by a closure
pub struct FnBuilder<F> {
    label: &'static str,
    create: F,
}

impl<F> FnBuilder<F>
where
    F: Fn(&Request, &dyn SpecimenContext) -> Outcome + Send + Sync,
{
    /// Create with a label used in debug output
    #[inline]
    #[must_use]
    pub fn new(label: &'static str, create: F) -> Self {
        Self { label, create }
    }
}

impl<F> fmt::Debug for FnBuilder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnBuilder")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl<F> SpecimenBuilder for FnBuilder<F>
where
    F: Fn(&Request, &dyn SpecimenContext) -> Outcome + Send + Sync,
{
    fn create(&self, request: &Request, context: &dyn SpecimenContext) -> Outcome {
        (self.create)(request, context)
    }
}
