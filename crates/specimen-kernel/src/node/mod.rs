//! Builder graph nodes
//!
//! A [`BuilderNode`] is a builder that also owns an ordered list of child
//! builders. Every node kind answers the same three questions:
//!
//! - `create`: produce a specimen from its children per the kind's policy
//! - `children`: which builders it holds, in order
//! - `compose`: the same kind of node rebuilt around new children
//!
//! Nodes are immutable. `compose` returns a new node and shares the child
//! handles it was given; the receiver is left as it was.

mod composite;
mod filtering;
mod marker;

pub use composite::CompositeBuilder;
pub use filtering::FilteringBuilder;
pub use marker::{MarkerNode, MarkerRole};

use crate::builder::{SharedBuilder, SpecimenBuilder, SpecimenContext};
use crate::request::Request;
use crate::specimen::Outcome;
use std::iter::FusedIterator;
use std::sync::Arc;

/// Closed set of node kinds
#[derive(Debug, Clone)]
pub enum BuilderNode {
    /// Try children in order, first success wins
    Composite(CompositeBuilder),

    /// Single-child anchor identified by its role
    Marker(MarkerNode),

    /// Single child guarded by a request specification
    Filtering(FilteringBuilder),
}

/// Discriminant of a [`BuilderNode`], including the marker role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// [`BuilderNode::Composite`]
    Composite,
    /// [`BuilderNode::Marker`] with its role
    Marker(MarkerRole),
    /// [`BuilderNode::Filtering`]
    Filtering,
}

impl BuilderNode {
    /// Kind of this node
    #[inline]
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Composite(_) => NodeKind::Composite,
            Self::Marker(marker) => NodeKind::Marker(marker.role()),
            Self::Filtering(_) => NodeKind::Filtering,
        }
    }

    /// Immediate children in stored order
    #[inline]
    #[must_use]
    pub fn children(&self) -> Children<'_> {
        match self {
            Self::Composite(composite) => composite.children(),
            Self::Marker(marker) => marker.children(),
            Self::Filtering(filtering) => filtering.children(),
        }
    }

    /// Rebuild this node around `builders`, keeping its kind
    ///
    /// Single-child kinds collapse `builders` with
    /// [`CompositeBuilder::compose_if_multiple`] first, so any number of
    /// builders is accepted.
    #[must_use]
    pub fn compose<I>(&self, builders: I) -> BuilderNode
    where
        I: IntoIterator<Item = SharedBuilder>,
    {
        match self {
            Self::Composite(composite) => Self::Composite(composite.compose(builders)),
            Self::Marker(marker) => Self::Marker(marker.compose(builders)),
            Self::Filtering(filtering) => Self::Filtering(filtering.compose(builders)),
        }
    }

    /// Borrow as a composite
    #[inline]
    #[must_use]
    pub fn as_composite(&self) -> Option<&CompositeBuilder> {
        match self {
            Self::Composite(composite) => Some(composite),
            _ => None,
        }
    }

    /// Borrow as a marker
    #[inline]
    #[must_use]
    pub fn as_marker(&self) -> Option<&MarkerNode> {
        match self {
            Self::Marker(marker) => Some(marker),
            _ => None,
        }
    }

    /// Borrow as a filtering node
    #[inline]
    #[must_use]
    pub fn as_filtering(&self) -> Option<&FilteringBuilder> {
        match self {
            Self::Filtering(filtering) => Some(filtering),
            _ => None,
        }
    }

    /// Move into a shared builder handle
    #[inline]
    #[must_use]
    pub fn into_shared(self) -> SharedBuilder {
        Arc::new(self)
    }
}

impl SpecimenBuilder for BuilderNode {
    fn create(&self, request: &Request, context: &dyn SpecimenContext) -> Outcome {
        match self {
            Self::Composite(composite) => composite.create(request, context),
            Self::Marker(marker) => marker.create(request, context),
            Self::Filtering(filtering) => filtering.create(request, context),
        }
    }

    fn as_node(&self) -> Option<&BuilderNode> {
        Some(self)
    }
}

impl From<CompositeBuilder> for BuilderNode {
    fn from(composite: CompositeBuilder) -> Self {
        Self::Composite(composite)
    }
}

impl From<MarkerNode> for BuilderNode {
    fn from(marker: MarkerNode) -> Self {
        Self::Marker(marker)
    }
}

impl From<FilteringBuilder> for BuilderNode {
    fn from(filtering: FilteringBuilder) -> Self {
        Self::Filtering(filtering)
    }
}

/// Iterator over the immediate children of a node
///
/// Borrowing, allocation-free and cheap to clone, so a sequence can be
/// restarted by cloning it before iteration.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    inner: std::slice::Iter<'a, SharedBuilder>,
}

impl<'a> Children<'a> {
    #[inline]
    pub(crate) fn new(builders: &'a [SharedBuilder]) -> Self {
        Self {
            inner: builders.iter(),
        }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = &'a SharedBuilder;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Children<'_> {}

impl FusedIterator for Children<'_> {}
