//! Composite builder: the ordered "first success wins" combinator

use super::{BuilderNode, Children};
use crate::builder::{SharedBuilder, SpecimenContext};
use crate::request::Request;
use crate::specimen::Outcome;
use std::sync::Arc;

/// Ordered sequence of builders tried in turn
///
/// # Characteristics
/// - The first `Created` outcome is returned as-is
/// - Declines only when every child declines
/// - An empty composite always declines and serves as the no-op builder
#[derive(Debug, Clone)]
pub struct CompositeBuilder {
    builders: Arc<[SharedBuilder]>,
}

impl CompositeBuilder {
    /// Create from builders, keeping their order
    #[must_use]
    pub fn new<I>(builders: I) -> Self
    where
        I: IntoIterator<Item = SharedBuilder>,
    {
        Self {
            builders: builders.into_iter().collect::<Vec<_>>().into(),
        }
    }

    /// Composite with no children
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Collapse `builders` into a single builder
    ///
    /// - none: an empty composite
    /// - one: that builder, unwrapped
    /// - several: a composite of them, in order
    #[must_use]
    pub fn compose_if_multiple<I>(builders: I) -> SharedBuilder
    where
        I: IntoIterator<Item = SharedBuilder>,
    {
        let mut iter = builders.into_iter();
        let Some(first) = iter.next() else {
            return BuilderNode::from(Self::empty()).into_shared();
        };
        let Some(second) = iter.next() else {
            return first;
        };

        let all = [first, second].into_iter().chain(iter);
        BuilderNode::from(Self::new(all)).into_shared()
    }

    /// Children in stored order
    #[inline]
    #[must_use]
    pub fn builders(&self) -> &[SharedBuilder] {
        &self.builders
    }

    /// Number of children
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Check if there are no children
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Immediate children
    #[inline]
    #[must_use]
    pub fn children(&self) -> Children<'_> {
        Children::new(&self.builders)
    }

    /// New composite over `builders`
    #[inline]
    #[must_use]
    pub fn compose<I>(&self, builders: I) -> Self
    where
        I: IntoIterator<Item = SharedBuilder>,
    {
        Self::new(builders)
    }

    /// Try each child in order
    pub fn create(&self, request: &Request, context: &dyn SpecimenContext) -> Outcome {
        for builder in self.builders.iter() {
            let outcome = builder.create(request, context);
            if outcome.is_created() {
                return outcome;
            }
        }

        tracing::trace!(%request, children = self.builders.len(), "composite declined request");
        Outcome::NoSpecimen
    }
}

impl Default for CompositeBuilder {
    fn default() -> Self {
        Self::empty()
    }
}
