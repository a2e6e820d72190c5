//! Canonical graph model: the full node/link universe.
//!
//! The model is loaded once from [`MapData`](crate::data::MapData) and owns
//! the collapse tree. Its shape never changes afterwards; the only state the
//! rest of the engine mutates through it is each node's `collapsed` flag,
//! which is kept per id so a branch remembers whether the user opened it
//! even while an ancestor hides it.

use testmap_graph::{Graph, LinkKey};

use crate::data::MapData;
use crate::error::{Error, Result};

/// A link listed under a node's `children`, revealed when that node expands.
#[derive(Debug, Clone)]
pub struct ChildLink {
    pub key: LinkKey,
    pub tag: String,
}

#[derive(Debug, Clone, Default)]
pub struct Children {
    pub nodes: Vec<String>,
    pub links: Vec<ChildLink>,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub children: Children,
    pub collapsed: bool,
}

impl Node {
    /// A node with no child nodes never toggles; children-only links without
    /// child nodes are treated the same way (nothing to reveal).
    pub fn is_expandable(&self) -> bool {
        !self.children.nodes.is_empty()
    }
}

/// Full universe plus the `id -> Node` index, built once at load.
///
/// Every id referenced anywhere (root links, `children.nodes`,
/// `children.links`) is resolved during [`GraphModel::load`]; lookups after
/// a successful load cannot dangle.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    graph: Graph<Node, String>,
}

impl GraphModel {
    pub fn load(data: &MapData) -> Result<Self> {
        let mut graph: Graph<Node, String> = Graph::new();

        for node in &data.nodes {
            if graph.has_node(&node.id) {
                tracing::debug!(id = %node.id, "duplicate node dropped");
                continue;
            }
            let children = Children {
                nodes: node.children.nodes.clone(),
                links: node
                    .children
                    .links
                    .iter()
                    .map(|l| ChildLink {
                        key: LinkKey::new(l.source.clone(), l.target.clone()),
                        tag: l.tag.clone(),
                    })
                    .collect(),
            };
            graph.set_node(
                node.id.clone(),
                Node {
                    id: node.id.clone(),
                    name: node.name.clone(),
                    children,
                    collapsed: node.collapsed,
                },
            );
        }

        for link in &data.links {
            if graph.has_link(&link.source, &link.target) {
                tracing::debug!(source = %link.source, target = %link.target, "duplicate link dropped");
                continue;
            }
            graph.set_link(
                LinkKey::new(link.source.clone(), link.target.clone()),
                link.tag.clone(),
            );
        }

        let model = Self { graph };
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        for (key, _) in self.graph.links() {
            for endpoint in [&key.source, &key.target] {
                if !self.graph.has_node(endpoint) {
                    return Err(Error::malformed(endpoint, format!("link {key}")));
                }
            }
        }
        for (id, node) in self.graph.nodes() {
            for child in &node.children.nodes {
                if !self.graph.has_node(child) {
                    return Err(Error::malformed(child, format!("children of `{id}`")));
                }
            }
            for link in &node.children.links {
                for endpoint in [&link.key.source, &link.key.target] {
                    if !self.graph.has_node(endpoint) {
                        return Err(Error::malformed(
                            endpoint,
                            format!("child link {} of `{id}`", link.key),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn lookup(&self, id: &str) -> Result<&Node> {
        self.graph.node(id).ok_or_else(|| Error::not_found(id))
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.graph.node(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Root-level links (the report's top `links` array).
    pub fn root_links(&self) -> impl Iterator<Item = (&LinkKey, &str)> {
        self.graph.links().map(|(key, tag)| (key, tag.as_str()))
    }

    /// Roots: nodes no other node lists as a child, in input order.
    pub fn roots(&self) -> Vec<String> {
        let mut referenced = testmap_graph::NodeIdSet::default();
        for (_, node) in self.graph.nodes() {
            for child in &node.children.nodes {
                referenced.insert(child.clone());
            }
        }
        self.graph
            .nodes()
            .filter(|(id, _)| !referenced.contains(*id))
            .map(|(id, _)| id.to_string())
            .collect()
    }

    pub fn is_collapsed(&self, id: &str) -> bool {
        self.graph.node(id).is_some_and(|n| n.collapsed)
    }

    pub(crate) fn set_collapsed(&mut self, id: &str, collapsed: bool) {
        if let Some(node) = self.graph.node_mut(id) {
            node.collapsed = collapsed;
        }
    }
}
