//! Graph container APIs used by `testmap`.
//!
//! Nodes and links live in identity-keyed ordered maps, so iteration order is
//! the insertion order the renderer saw last time, while removal is direct
//! and order-independent. Removing a set of nodes never leaves a dangling
//! link behind: links are dropped in the same pass.

use rustc_hash::FxBuildHasher;
use std::fmt;

type IndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;

/// Hash set keyed by node id, shared with callers that collect removal sets.
pub type NodeIdSet = hashbrown::HashSet<String, FxBuildHasher>;

/// Identity of a link: the ordered pair of endpoint node ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkKey {
    pub source: String,
    pub target: String,
}

impl LinkKey {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Synthetic string id, `"{source}/{target}"`.
    pub fn id(&self) -> String {
        format!("{}/{}", self.source, self.target)
    }

    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

impl fmt::Display for LinkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.source, self.target)
    }
}

// Lets lookups borrow both endpoints instead of allocating a key.
#[derive(Clone, Copy, Hash)]
struct LinkKeyRef<'a> {
    source: &'a str,
    target: &'a str,
}

impl indexmap::Equivalent<LinkKey> for LinkKeyRef<'_> {
    fn equivalent(&self, key: &LinkKey) -> bool {
        key.source == self.source && key.target == self.target
    }
}

/// Ordered node/link collection with `O(1)` membership by id.
///
/// `N` and `L` are the node and link labels. The container knows nothing
/// about collapse trees or display state; it only guarantees identity,
/// ordering, and that a removed node takes its incident links with it.
pub struct Graph<N, L> {
    nodes: IndexMap<String, N>,
    links: IndexMap<LinkKey, L>,
}

impl<N, L> Default for Graph<N, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, L> Graph<N, L> {
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::default(),
            links: IndexMap::default(),
        }
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Inserts or replaces a node label. Replacing keeps the original
    /// insertion position.
    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        self.nodes.insert(id.into(), label);
        self
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.nodes.get_mut(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (&str, &N)> {
        self.nodes.iter().map(|(id, label)| (id.as_str(), label))
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.keys().cloned().collect()
    }

    pub fn node_labels(&self) -> impl Iterator<Item = &N> {
        self.nodes.values()
    }

    pub fn for_each_node_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&str, &mut N),
    {
        for (id, label) in &mut self.nodes {
            f(id, label);
        }
    }

    pub fn has_link(&self, source: &str, target: &str) -> bool {
        self.links.contains_key(&LinkKeyRef { source, target })
    }

    pub fn set_link(&mut self, key: LinkKey, label: L) -> &mut Self {
        self.links.insert(key, label);
        self
    }

    pub fn link(&self, source: &str, target: &str) -> Option<&L> {
        self.links.get(&LinkKeyRef { source, target })
    }

    pub fn link_mut(&mut self, source: &str, target: &str) -> Option<&mut L> {
        self.links.get_mut(&LinkKeyRef { source, target })
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn links(&self) -> impl Iterator<Item = (&LinkKey, &L)> {
        self.links.iter()
    }

    pub fn link_keys(&self) -> Vec<LinkKey> {
        self.links.keys().cloned().collect()
    }

    pub fn for_each_link_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&LinkKey, &mut L),
    {
        for (key, label) in &mut self.links {
            f(key, label);
        }
    }

    /// Removes one node and every link touching it. Returns `false` if the
    /// id was not present.
    pub fn remove_node(&mut self, id: &str) -> bool {
        if self.nodes.shift_remove(id).is_none() {
            return false;
        }
        self.links.retain(|key, _| !key.touches(id));
        true
    }

    /// Removes a whole id set in one pass, plus every link with an endpoint
    /// in the set. Returns the number of nodes actually removed.
    pub fn remove_nodes(&mut self, ids: &NodeIdSet) -> usize {
        let before = self.nodes.len();
        self.nodes.retain(|id, _| !ids.contains(id));
        let removed = before - self.nodes.len();
        if removed > 0 {
            self.links
                .retain(|key, _| !ids.contains(&key.source) && !ids.contains(&key.target));
        }
        removed
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.links.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<N: fmt::Debug, L: fmt::Debug> fmt::Debug for Graph<N, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes)
            .field("links", &self.links)
            .finish()
    }
}

impl<N: Clone, L: Clone> Clone for Graph<N, L> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            links: self.links.clone(),
        }
    }
}
