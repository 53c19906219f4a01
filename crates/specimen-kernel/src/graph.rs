//! Graph queries and persistent rewrites
//!
//! Walks descend through children that are themselves nodes (see
//! [`SpecimenBuilder::as_node`](crate::SpecimenBuilder::as_node)); leaf
//! builders end a branch. Rewrites rebuild only the path from the root to each
//! replaced node. Every other subtree keeps its original `Arc` handle.

use crate::builder::SharedBuilder;
use crate::error::{SpecimenError, SpecimenResult};
use crate::node::{BuilderNode, MarkerNode, MarkerRole};
use std::sync::Arc;

impl BuilderNode {
    /// Pre-order iterator over this node and every node below it
    #[inline]
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First node, in pre-order, matching `predicate`
    pub fn find_first<P>(&self, predicate: P) -> Option<&BuilderNode>
    where
        P: Fn(&BuilderNode) -> bool,
    {
        self.descendants().find(|node| predicate(node))
    }

    /// First marker with `role`
    #[must_use]
    pub fn find_marker(&self, role: MarkerRole) -> Option<&MarkerNode> {
        self.descendants()
            .filter_map(BuilderNode::as_marker)
            .find(|marker| marker.role() == role)
    }

    /// Rebuild the graph with every node matching `when` replaced by `with`
    ///
    /// Matched nodes are not searched further. If nothing matches, the result
    /// is a clone of `self` sharing all children.
    #[must_use]
    pub fn replace_nodes<W, P>(&self, with: W, when: P) -> BuilderNode
    where
        W: Fn(&BuilderNode) -> BuilderNode,
        P: Fn(&BuilderNode) -> bool,
    {
        self.rewrite(&with, &when).unwrap_or_else(|| self.clone())
    }

    /// Replace the contents of every marker with `role`
    ///
    /// # Errors
    /// Returns [`SpecimenError::MarkerNotFound`] if the graph has no such marker
    pub fn replace_marker_contents<I>(&self, role: MarkerRole, builders: I) -> SpecimenResult<BuilderNode>
    where
        I: IntoIterator<Item = SharedBuilder>,
    {
        if self.find_marker(role).is_none() {
            return Err(SpecimenError::MarkerNotFound { role });
        }

        let builders: Vec<SharedBuilder> = builders.into_iter().collect();
        tracing::debug!(%role, builders = builders.len(), "replacing marker contents");

        Ok(self.replace_nodes(
            |node| node.compose(builders.iter().cloned()),
            |node| is_marker(node, role),
        ))
    }

    /// Add `builder` in front of the contents of every marker with `role`
    ///
    /// # Errors
    /// Returns [`SpecimenError::MarkerNotFound`] if the graph has no such marker
    pub fn prepend_to_marker(&self, role: MarkerRole, builder: &SharedBuilder) -> SpecimenResult<BuilderNode> {
        self.edit_markers(role, |marker| marker.with_prepended(Arc::clone(builder)))
    }

    /// Add `builder` after the contents of every marker with `role`
    ///
    /// # Errors
    /// Returns [`SpecimenError::MarkerNotFound`] if the graph has no such marker
    pub fn append_to_marker(&self, role: MarkerRole, builder: &SharedBuilder) -> SpecimenResult<BuilderNode> {
        self.edit_markers(role, |marker| marker.with_appended(Arc::clone(builder)))
    }

    /// Structural equality
    ///
    /// Nodes must match in kind, marker role, specification handle and arity;
    /// leaf builders must be the same allocation.
    #[must_use]
    pub fn graph_equals(&self, other: &BuilderNode) -> bool {
        if self.kind() != other.kind() {
            return false;
        }
        if let (Self::Filtering(a), Self::Filtering(b)) = (self, other) {
            if !Arc::ptr_eq(a.specification(), b.specification()) {
                return false;
            }
        }

        let (ours, theirs) = (self.children(), other.children());
        if ours.len() != theirs.len() {
            return false;
        }

        ours.zip(theirs)
            .all(|(a, b)| match (a.as_node(), b.as_node()) {
                (Some(a), Some(b)) => a.graph_equals(b),
                (None, None) => Arc::ptr_eq(a, b),
                _ => false,
            })
    }

    fn edit_markers<F>(&self, role: MarkerRole, edit: F) -> SpecimenResult<BuilderNode>
    where
        F: Fn(&MarkerNode) -> MarkerNode,
    {
        if self.find_marker(role).is_none() {
            return Err(SpecimenError::MarkerNotFound { role });
        }

        tracing::debug!(%role, "editing marker contents");
        Ok(self.replace_nodes(
            |node| match node {
                Self::Marker(marker) => Self::Marker(edit(marker)),
                other => other.clone(),
            },
            |node| is_marker(node, role),
        ))
    }

    /// `None` when nothing under `self` matched
    fn rewrite(
        &self,
        with: &dyn Fn(&BuilderNode) -> BuilderNode,
        when: &dyn Fn(&BuilderNode) -> bool,
    ) -> Option<BuilderNode> {
        if when(self) {
            return Some(with(self));
        }

        let mut changed = false;
        let children: Vec<SharedBuilder> = self
            .children()
            .map(|child| match child.as_node().and_then(|node| node.rewrite(with, when)) {
                Some(replacement) => {
                    changed = true;
                    replacement.into_shared()
                }
                None => Arc::clone(child),
            })
            .collect();

        changed.then(|| self.compose(children))
    }
}

fn is_marker(node: &BuilderNode, role: MarkerRole) -> bool {
    node.as_marker().is_some_and(|marker| marker.role() == role)
}

/// Pre-order iterator over the nodes of a graph
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a BuilderNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a BuilderNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack
            .extend(node.children().rev().filter_map(|child| child.as_node()));
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{shared, FixedBuilder};
    use crate::node::{CompositeBuilder, NodeKind};

    fn leaf(value: u32) -> SharedBuilder {
        shared(FixedBuilder::new(value))
    }

    fn marker(role: MarkerRole, builder: SharedBuilder) -> SharedBuilder {
        BuilderNode::from(MarkerNode::new(role, builder)).into_shared()
    }

    #[test]
    fn descendants_are_pre_order() {
        let root = BuilderNode::from(CompositeBuilder::new(vec![
            marker(MarkerRole::Customizations, leaf(1)),
            leaf(2),
            marker(
                MarkerRole::Engine,
                marker(MarkerRole::PredefinedBuilders, leaf(3)),
            ),
        ]));

        let kinds: Vec<NodeKind> = root.descendants().map(BuilderNode::kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Composite,
                NodeKind::Marker(MarkerRole::Customizations),
                NodeKind::Marker(MarkerRole::Engine),
                NodeKind::Marker(MarkerRole::PredefinedBuilders),
            ]
        );
    }

    #[test]
    fn find_marker_buried_deep() {
        let b = leaf(7);
        let root = BuilderNode::from(MarkerNode::new(
            MarkerRole::BehaviorRoot,
            BuilderNode::from(CompositeBuilder::new(vec![
                leaf(1),
                marker(MarkerRole::PredefinedBuilders, Arc::clone(&b)),
            ]))
            .into_shared(),
        ));

        let found = root
            .find_marker(MarkerRole::PredefinedBuilders)
            .expect("marker present");
        assert!(Arc::ptr_eq(found.builder(), &b));
        assert!(root.find_marker(MarkerRole::ResidueCollectors).is_none());
    }

    #[test]
    fn replace_nodes_without_match_is_identical() {
        let root = BuilderNode::from(CompositeBuilder::new(vec![leaf(1), leaf(2)]));
        let rewritten = root.replace_nodes(|node| node.clone(), |_| false);
        assert!(rewritten.graph_equals(&root));
    }

    #[test]
    fn replace_marker_contents_missing_role() {
        let root = BuilderNode::from(CompositeBuilder::new(vec![leaf(1)]));
        let err = root
            .replace_marker_contents(MarkerRole::Engine, vec![leaf(2)])
            .unwrap_err();
        assert_eq!(err, SpecimenError::MarkerNotFound { role: MarkerRole::Engine });
    }

    #[test]
    fn graph_equals_distinguishes_roles_and_leaves() {
        let shared_leaf = leaf(1);
        let a = BuilderNode::from(MarkerNode::new(MarkerRole::Engine, Arc::clone(&shared_leaf)));
        let b = BuilderNode::from(MarkerNode::new(MarkerRole::Engine, Arc::clone(&shared_leaf)));
        let c = BuilderNode::from(MarkerNode::new(MarkerRole::Customizations, Arc::clone(&shared_leaf)));
        let d = BuilderNode::from(MarkerNode::new(MarkerRole::Engine, leaf(1)));

        assert!(a.graph_equals(&b));
        assert!(!a.graph_equals(&c));
        assert!(!a.graph_equals(&d));
    }
}
