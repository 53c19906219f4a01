//! Canonical root graph assembly
//!
//! ```text
//! Marker(BehaviorRoot)
//! └── Composite
//!     ├── Marker(Customizations)
//!     ├── Marker(PredefinedBuilders)
//!     ├── Marker(Engine)
//!     └── Marker(ResidueCollectors)
//! ```
//!
//! Each marker holds its builders collapsed with
//! [`CompositeBuilder::compose_if_multiple`], so an empty section is an empty
//! composite and a single builder sits directly under its marker.

use crate::builder::SharedBuilder;
use crate::node::{BuilderNode, CompositeBuilder, MarkerNode, MarkerRole};

/// Collects builders per section and assembles the root graph
#[derive(Debug, Default, Clone)]
pub struct GraphLayout {
    customizations: Vec<SharedBuilder>,
    predefined: Vec<SharedBuilder>,
    engine: Vec<SharedBuilder>,
    residue_collectors: Vec<SharedBuilder>,
}

impl GraphLayout {
    /// Empty layout
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a customization
    #[must_use]
    pub fn with_customization(mut self, builder: SharedBuilder) -> Self {
        self.customizations.push(builder);
        self
    }

    /// Add a predefined builder
    #[must_use]
    pub fn with_predefined(mut self, builder: SharedBuilder) -> Self {
        self.predefined.push(builder);
        self
    }

    /// Add an engine builder
    #[must_use]
    pub fn with_engine(mut self, builder: SharedBuilder) -> Self {
        self.engine.push(builder);
        self
    }

    /// Add a residue collector
    #[must_use]
    pub fn with_residue_collector(mut self, builder: SharedBuilder) -> Self {
        self.residue_collectors.push(builder);
        self
    }

    /// Assemble the root graph
    #[must_use]
    pub fn build(self) -> BuilderNode {
        let section = |role, builders: Vec<SharedBuilder>| {
            BuilderNode::from(MarkerNode::new(
                role,
                CompositeBuilder::compose_if_multiple(builders),
            ))
            .into_shared()
        };

        let sections = CompositeBuilder::new(vec![
            section(MarkerRole::Customizations, self.customizations),
            section(MarkerRole::PredefinedBuilders, self.predefined),
            section(MarkerRole::Engine, self.engine),
            section(MarkerRole::ResidueCollectors, self.residue_collectors),
        ]);

        BuilderNode::from(MarkerNode::new(
            MarkerRole::BehaviorRoot,
            BuilderNode::from(sections).into_shared(),
        ))
    }
}
