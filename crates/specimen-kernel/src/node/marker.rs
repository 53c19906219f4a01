//! Marker nodes
//!
//! A marker wraps exactly one builder and is otherwise transparent. Its only
//! job is to give graph-editing code a stable, identifiable place to find and
//! swap a subtree, e.g. the builders a user registered up front, without
//! rebuilding the rest of the graph by hand.

use super::{BuilderNode, Children, CompositeBuilder};
use crate::builder::{SharedBuilder, SpecimenContext};
use crate::error::{SpecimenError, SpecimenResult};
use crate::request::Request;
use crate::specimen::Outcome;
use std::fmt;
use std::sync::Arc;

/// Named position a marker occupies in the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerRole {
    /// Builders registered explicitly before any others
    PredefinedBuilders,

    /// User customizations, tried first
    Customizations,

    /// The built-in engine
    Engine,

    /// Last-chance builders for requests nothing else handled
    ResidueCollectors,

    /// Root that behaviors decorate
    BehaviorRoot,
}

impl MarkerRole {
    /// Stable lowercase name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PredefinedBuilders => "predefined_builders",
            Self::Customizations => "customizations",
            Self::Engine => "engine",
            Self::ResidueCollectors => "residue_collectors",
            Self::BehaviorRoot => "behavior_root",
        }
    }
}

impl fmt::Display for MarkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-child node identified by its [`MarkerRole`]
///
/// # Invariants
/// - Always exactly one child
/// - `create` is a verbatim pass-through to that child
#[derive(Debug, Clone)]
pub struct MarkerNode {
    role: MarkerRole,
    builder: [SharedBuilder; 1],
}

impl MarkerNode {
    /// Wrap `builder` under `role`
    #[inline]
    #[must_use]
    pub fn new(role: MarkerRole, builder: SharedBuilder) -> Self {
        Self {
            role,
            builder: [builder],
        }
    }

    /// Wrap an optional builder, failing fast when it is absent
    ///
    /// # Errors
    /// Returns [`SpecimenError::InvalidArgument`] if `builder` is `None`
    pub fn try_new(role: MarkerRole, builder: Option<SharedBuilder>) -> SpecimenResult<Self> {
        builder
            .map(|builder| Self::new(role, builder))
            .ok_or_else(|| {
                SpecimenError::invalid_argument("builder", format!("{role} marker requires a builder"))
            })
    }

    /// Marker for the predefined builders role
    #[inline]
    #[must_use]
    pub fn predefined_builders(builder: SharedBuilder) -> Self {
        Self::new(MarkerRole::PredefinedBuilders, builder)
    }

    /// Role of this marker
    #[inline]
    #[must_use]
    pub fn role(&self) -> MarkerRole {
        self.role
    }

    /// The wrapped builder
    #[inline]
    #[must_use]
    pub fn builder(&self) -> &SharedBuilder {
        &self.builder[0]
    }

    /// Single-element sequence holding the wrapped builder
    #[inline]
    #[must_use]
    pub fn children(&self) -> Children<'_> {
        Children::new(&self.builder)
    }

    /// New marker with the same role around `builders`, collapsed to one
    #[must_use]
    pub fn compose<I>(&self, builders: I) -> Self
    where
        I: IntoIterator<Item = SharedBuilder>,
    {
        Self::new(self.role, CompositeBuilder::compose_if_multiple(builders))
    }

    /// The builders this marker holds, with a wrapped composite flattened
    ///
    /// An empty composite yields no builders.
    #[must_use]
    pub fn contents(&self) -> Vec<SharedBuilder> {
        match self.builder().as_node().and_then(BuilderNode::as_composite) {
            Some(composite) => composite.builders().to_vec(),
            None => vec![Arc::clone(self.builder())],
        }
    }

    /// New marker with `builder` tried before the current contents
    #[must_use]
    pub fn with_prepended(&self, builder: SharedBuilder) -> Self {
        self.compose(std::iter::once(builder).chain(self.contents()))
    }

    /// New marker with `builder` tried after the current contents
    #[must_use]
    pub fn with_appended(&self, builder: SharedBuilder) -> Self {
        self.compose(self.contents().into_iter().chain(std::iter::once(builder)))
    }

    /// Delegate to the wrapped builder
    #[inline]
    pub fn create(&self, request: &Request, context: &dyn SpecimenContext) -> Outcome {
        self.builder().create(request, context)
    }
}
