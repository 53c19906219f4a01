//! Specimen Kernel
//!
//! Composable builder graphs for test-data generation.
//!
//! # Core Concepts
//!
//! - [`SpecimenBuilder`]: produces a specimen for a [`Request`] or declines
//! - [`SpecimenContext`]: resolves nested requests back through the graph
//! - [`BuilderNode`]: a builder that exposes and can recompose its children
//! - [`CompositeBuilder`]: ordered "first success wins" combinator
//! - [`MarkerNode`]: single-child anchor that graph edits can target by role
//! - [`FilteringBuilder`]: single child guarded by a [`RequestSpecification`]
//! - [`ResolutionContext`]: depth-limited context over a root builder
//!
//! # Example
//!
//! ```rust
//! use specimen_kernel::{
//!     shared, FixedBuilder, GraphLayout, MarkerRole, Request, ResolutionContext,
//! };
//!
//! let root = GraphLayout::new()
//!     .with_predefined(shared(FixedBuilder::new(7_u32)))
//!     .build();
//!
//! // Swap the predefined builders without touching the other sections
//! let root = root
//!     .replace_marker_contents(
//!         MarkerRole::PredefinedBuilders,
//!         vec![shared(FixedBuilder::new(11_u32))],
//!     )
//!     .unwrap();
//!
//! let context = ResolutionContext::new(root.into_shared());
//! let value = context.resolve_required(&Request::of::<u32>()).unwrap();
//! assert_eq!(value.downcast_ref::<u32>(), Some(&11));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod builder;
mod config;
mod context;
mod error;
mod graph;
mod layout;
pub mod logging;
mod node;
mod request;
mod specification;
mod specimen;

// Re-exports
pub use builder::{shared, FixedBuilder, FnBuilder, SharedBuilder, SpecimenBuilder, SpecimenContext};
pub use config::GraphConfig;
pub use context::ResolutionContext;
pub use error::{SpecimenError, SpecimenResult};
pub use graph::Descendants;
pub use layout::GraphLayout;
pub use node::{
    BuilderNode, Children, CompositeBuilder, FilteringBuilder, MarkerNode, MarkerRole, NodeKind,
};
pub use request::{Request, TypeToken};
pub use specification::{
    AndSpecification, ExactRequestSpecification, FnSpecification, InverseSpecification,
    OrSpecification, RequestSpecification, SharedSpecification, TypeSpecification,
};
pub use specimen::{Outcome, Specimen};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
