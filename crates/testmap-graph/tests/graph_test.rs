use testmap_graph::{Graph, LinkKey, NodeIdSet};

fn sample() -> Graph<u32, &'static str> {
    let mut g: Graph<u32, &'static str> = Graph::new();
    g.set_node("a", 1);
    g.set_node("b", 2);
    g.set_node("c", 3);
    g.set_link(LinkKey::new("a", "b"), "ab");
    g.set_link(LinkKey::new("b", "c"), "bc");
    g.set_link(LinkKey::new("a", "c"), "ac");
    g
}

#[test]
fn iteration_follows_insertion_order() {
    let g = sample();
    let ids: Vec<&str> = g.nodes().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);

    let keys: Vec<String> = g.links().map(|(k, _)| k.id()).collect();
    assert_eq!(keys, vec!["a/b", "b/c", "a/c"]);
}

#[test]
fn replacing_a_node_keeps_its_position() {
    let mut g = sample();
    g.set_node("a", 9);
    assert_eq!(g.node("a"), Some(&9));
    assert_eq!(g.node_count(), 3);
    let ids: Vec<&str> = g.nodes().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn link_lookup_by_endpoints() {
    let g = sample();
    assert!(g.has_link("a", "b"));
    assert!(!g.has_link("b", "a"));
    assert_eq!(g.link("b", "c"), Some(&"bc"));
    assert_eq!(g.link("c", "b"), None);
}

#[test]
fn link_key_id_joins_endpoints_with_slash() {
    let key = LinkKey::new("suite/a", "case");
    assert_eq!(key.id(), "suite/a/case");
    assert!(key.touches("suite/a"));
    assert!(key.touches("case"));
    assert!(!key.touches("suite"));
}

#[test]
fn removing_a_node_drops_incident_links() {
    let mut g = sample();
    assert!(g.remove_node("b"));
    assert!(!g.has_node("b"));
    assert_eq!(g.link_count(), 1);
    assert!(g.has_link("a", "c"));

    assert!(!g.remove_node("b"));
}

#[test]
fn remove_nodes_is_a_single_pass_over_the_set() {
    let mut g = sample();
    let mut ids = NodeIdSet::default();
    ids.insert("b".to_string());
    ids.insert("c".to_string());
    ids.insert("not-there".to_string());

    assert_eq!(g.remove_nodes(&ids), 2);
    assert_eq!(g.node_count(), 1);
    assert_eq!(g.link_count(), 0);
    assert!(g.has_node("a"));
}

#[test]
fn remove_nodes_with_disjoint_set_is_a_no_op() {
    let mut g = sample();
    let mut ids = NodeIdSet::default();
    ids.insert("x".to_string());

    assert_eq!(g.remove_nodes(&ids), 0);
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.link_count(), 3);
}

#[test]
fn for_each_link_mut_visits_every_label() {
    let mut g: Graph<(), u32> = Graph::new();
    g.set_node("a", ());
    g.set_node("b", ());
    g.set_link(LinkKey::new("a", "b"), 0);
    g.set_link(LinkKey::new("b", "a"), 0);

    g.for_each_link_mut(|_, label| *label += 1);
    assert_eq!(g.link("a", "b"), Some(&1));
    assert_eq!(g.link("b", "a"), Some(&1));
}
