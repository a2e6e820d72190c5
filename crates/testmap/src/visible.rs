//! The visible projection of the graph and the collapse/expand machinery.
//!
//! [`VisibleSet`] owns per-view copies of the model's nodes and links, so
//! display recoloring never touches [`GraphModel`]. Structural invariants
//! maintained by every operation here:
//!
//! - a node is visible iff it is a root or was revealed by a visible,
//!   non-collapsed ancestor;
//! - a visible link has both endpoints visible;
//! - no id appears twice.

use testmap_graph::{Graph, LinkKey, NodeIdSet};

use crate::error::{Error, Result};
use crate::model::{GraphModel, Node};

/// Display tag of a visible node. `Base` is the structural default; the
/// highlight overlay flips visible nodes between `Visited` and `Unvisited`
/// and clearing the overlay returns everything to `Base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeDisplay {
    #[default]
    Base,
    Visited,
    Unvisited,
}

/// Display tag of a visible link. `Base` renders as the link's own `tag`,
/// so clearing a highlight is a plain reset instead of a cached-previous-
/// value restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkDisplay {
    #[default]
    Base,
    Visited,
}

#[derive(Debug, Clone)]
pub struct NodeView {
    pub id: String,
    pub name: String,
    pub expandable: bool,
    pub display: NodeDisplay,
}

impl NodeView {
    fn from_model(node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            expandable: node.is_expandable(),
            display: NodeDisplay::Base,
        }
    }

    /// The string tag the drawing surface keys markers/colors on.
    pub fn render_tag(&self) -> &'static str {
        match self.display {
            NodeDisplay::Base => "node",
            NodeDisplay::Visited => "visited",
            NodeDisplay::Unvisited => "unvisited",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LinkView {
    pub key: LinkKey,
    pub tag: String,
    pub display: LinkDisplay,
}

impl LinkView {
    pub fn render_tag(&self) -> &str {
        match self.display {
            LinkDisplay::Base => &self.tag,
            LinkDisplay::Visited => "visited",
        }
    }
}

/// Outcome of a node click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Expanded,
    Collapsed,
    /// The node has no child nodes; nothing changed.
    Leaf,
}

/// Currently displayed subset of nodes/links, derived from the model plus
/// the per-id collapse flags. Fully reconstructible at any time via
/// [`VisibleSet::reveal_from_roots`].
#[derive(Debug, Clone, Default)]
pub struct VisibleSet {
    graph: Graph<NodeView, LinkView>,
    // Ids the user opened this session. A branch revealed for the first
    // time defaults to collapsed; one the user already opened keeps its
    // expanded state across re-collapse cycles of an ancestor.
    expanded_by_user: NodeIdSet,
}

impl VisibleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the initial projection: roots, then the subtree of every
    /// non-collapsed node, then the root-level links. Also the
    /// reconstruction operation for the whole visible state.
    pub fn reveal_from_roots(&mut self, model: &mut GraphModel) {
        self.graph.clear();
        self.expanded_by_user.clear();

        let roots = model.roots();
        for id in &roots {
            if let Some(node) = model.node(id) {
                self.graph.set_node(id.clone(), NodeView::from_model(node));
            }
        }
        let mut seen = NodeIdSet::default();
        for id in &roots {
            if model.node(id).is_some_and(Node::is_expandable) && !model.is_collapsed(id) {
                self.reveal_children(model, id, false, &mut seen);
            }
        }
        self.bind_root_links(model);

        tracing::debug!(
            nodes = self.graph.node_count(),
            links = self.graph.link_count(),
            "visible set revealed from roots"
        );
    }

    /// Expands or collapses one node. Validation happens before any
    /// mutation: an id the model does not know, or one that is not
    /// currently visible, leaves the set untouched.
    pub fn toggle(&mut self, model: &mut GraphModel, id: &str) -> Result<Toggle> {
        let node = model.lookup(id)?;
        if !self.graph.has_node(id) {
            return Err(Error::not_found(id));
        }
        if !node.is_expandable() {
            return Ok(Toggle::Leaf);
        }

        if model.is_collapsed(id) {
            model.set_collapsed(id, false);
            self.expanded_by_user.insert(id.to_string());
            let mut seen = NodeIdSet::default();
            self.reveal_children(model, id, true, &mut seen);
            self.bind_root_links(model);
            tracing::debug!(id, nodes = self.graph.node_count(), "expanded");
            Ok(Toggle::Expanded)
        } else {
            let removed = self.descendant_closure(model, id);
            self.graph.remove_nodes(&removed);
            model.set_collapsed(id, true);
            tracing::debug!(id, removed = removed.len(), "collapsed");
            Ok(Toggle::Collapsed)
        }
    }

    // Reveals the direct children of `id`, then recurses into children that
    // are (still) expanded. With `mark_new_collapsed`, a branch seen for
    // the first time this session is forced collapsed so expansion
    // discloses one level at a time. `seen` bounds the walk on non-tree
    // child relations, same as the closure walk below.
    fn reveal_children(
        &mut self,
        model: &mut GraphModel,
        id: &str,
        mark_new_collapsed: bool,
        seen: &mut NodeIdSet,
    ) {
        if !seen.insert(id.to_string()) {
            return;
        }
        let Some(children) = model.node(id).map(|n| n.children.clone()) else {
            return;
        };

        for child_id in &children.nodes {
            if self.graph.has_node(child_id) {
                continue;
            }
            let Some(child) = model.node(child_id) else {
                continue;
            };
            let expandable = child.is_expandable();
            self.graph
                .set_node(child_id.clone(), NodeView::from_model(child));
            if mark_new_collapsed && expandable && !self.expanded_by_user.contains(child_id) {
                model.set_collapsed(child_id, true);
            }
        }

        for link in &children.links {
            self.add_link(link.key.clone(), link.tag.clone());
        }

        for child_id in &children.nodes {
            if model.node(child_id).is_some_and(Node::is_expandable)
                && !model.is_collapsed(child_id)
            {
                self.reveal_children(model, child_id, mark_new_collapsed, seen);
            }
        }
    }

    // Root-level links bind as soon as both endpoints are visible, which
    // may only happen after an expansion. Re-checking them here keeps the
    // live set identical to a fresh reveal from the same model.
    fn bind_root_links(&mut self, model: &GraphModel) {
        let pending: Vec<(LinkKey, String)> = model
            .root_links()
            .filter(|(key, _)| !self.graph.has_link(&key.source, &key.target))
            .map(|(key, tag)| (key.clone(), tag.to_string()))
            .collect();
        for (key, tag) in pending {
            self.add_link(key, tag);
        }
    }

    // Links only join the set when both endpoints are already in it, which
    // keeps the endpoint invariant unconditional.
    fn add_link(&mut self, key: LinkKey, tag: String) {
        if self.graph.has_link(&key.source, &key.target) {
            return;
        }
        if !self.graph.has_node(&key.source) || !self.graph.has_node(&key.target) {
            return;
        }
        self.graph.set_link(
            key.clone(),
            LinkView {
                key,
                tag,
                display: LinkDisplay::Base,
            },
        );
    }

    // Transitive closure of `id`'s descendants among currently visible
    // nodes. Already-collapsed subtrees are absent from the set, so the
    // walk stops at them naturally; unrelated branches are never entered.
    fn descendant_closure(&self, model: &GraphModel, id: &str) -> NodeIdSet {
        let mut out = NodeIdSet::default();
        let mut stack: Vec<String> = model
            .node(id)
            .map(|n| n.children.nodes.clone())
            .unwrap_or_default();

        while let Some(next) = stack.pop() {
            if !self.graph.has_node(&next) || !out.insert(next.clone()) {
                continue;
            }
            if let Some(node) = model.node(&next) {
                stack.extend(node.children.nodes.iter().cloned());
            }
        }
        out
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.graph.has_node(id)
    }

    pub fn contains_link(&self, source: &str, target: &str) -> bool {
        self.graph.has_link(source, target)
    }

    pub fn node(&self, id: &str) -> Option<&NodeView> {
        self.graph.node(id)
    }

    pub fn link(&self, source: &str, target: &str) -> Option<&LinkView> {
        self.graph.link(source, target)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn link_count(&self) -> usize {
        self.graph.link_count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeView> {
        self.graph.node_labels()
    }

    pub fn links(&self) -> impl Iterator<Item = &LinkView> {
        self.graph.links().map(|(_, view)| view)
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.graph.node_ids()
    }

    /// Ordered copies of the visible arrays for a renderer re-bind.
    pub fn snapshot(&self) -> (Vec<NodeView>, Vec<LinkView>) {
        (
            self.graph.node_labels().cloned().collect(),
            self.graph.links().map(|(_, view)| view.clone()).collect(),
        )
    }

    pub(crate) fn graph_mut(&mut self) -> &mut Graph<NodeView, LinkView> {
        &mut self.graph
    }
}
