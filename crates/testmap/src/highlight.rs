//! Path-highlight overlay.
//!
//! Recolors the visible projection from a set of selected test paths. Pure
//! display-state mutation: applying a selection never adds or removes view
//! records and never touches the canonical model, so it is idempotent and
//! safe to reapply after any structural change.

use rustc_hash::FxBuildHasher;

use crate::data::TestPath;
use crate::visible::{LinkDisplay, NodeDisplay, VisibleSet};

type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Applies `paths` to the visible set, or clears the overlay when `paths`
/// is empty.
///
/// Path ids that are currently hidden are valid and simply have no effect
/// until the subtree is expanded; a path link colors only when it is in the
/// visible link set.
pub fn apply(visible: &mut VisibleSet, paths: &[TestPath]) {
    if paths.is_empty() {
        clear(visible);
        return;
    }

    let mut node_ids: HashSet<&str> = HashSet::default();
    let mut link_ids: HashSet<String> = HashSet::default();
    for path in paths {
        for id in &path.path.nodes {
            node_ids.insert(id.as_str());
        }
        for link in &path.path.links {
            link_ids.insert(format!("{}/{}", link.source, link.target));
        }
    }

    let graph = visible.graph_mut();
    graph.for_each_node_mut(|id, view| {
        view.display = if node_ids.contains(id) {
            NodeDisplay::Visited
        } else {
            NodeDisplay::Unvisited
        };
    });
    graph.for_each_link_mut(|key, view| {
        view.display = if link_ids.contains(&key.id()) {
            LinkDisplay::Visited
        } else {
            LinkDisplay::Base
        };
    });

    tracing::debug!(
        paths = paths.len(),
        nodes = node_ids.len(),
        links = link_ids.len(),
        "highlight applied"
    );
}

/// Resets every visible display tag to its structural default.
pub fn clear(visible: &mut VisibleSet) {
    let graph = visible.graph_mut();
    graph.for_each_node_mut(|_, view| view.display = NodeDisplay::Base);
    graph.for_each_link_mut(|_, view| view.display = LinkDisplay::Base);
}
