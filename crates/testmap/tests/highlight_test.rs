use testmap::data::{ChildrenData, LinkData, MapData, NodeData, PathLink, PathSpec, TestPath};
use testmap::{GraphModel, NodeDisplay, VisibleSet, highlight};

fn node(id: &str, children: &[&str], links: &[(&str, &str)], collapsed: bool) -> NodeData {
    NodeData {
        id: id.to_string(),
        name: id.to_string(),
        children: ChildrenData {
            nodes: children.iter().map(|s| s.to_string()).collect(),
            links: links
                .iter()
                .map(|(s, t)| LinkData {
                    source: s.to_string(),
                    target: t.to_string(),
                    tag: "link".to_string(),
                })
                .collect(),
        },
        collapsed,
    }
}

fn path(test: &str, nodes: &[&str], links: &[(&str, &str)]) -> TestPath {
    TestPath {
        test: test.to_string(),
        path: PathSpec {
            nodes: nodes.iter().map(|s| s.to_string()).collect(),
            links: links
                .iter()
                .map(|(s, t)| PathLink {
                    source: s.to_string(),
                    target: t.to_string(),
                })
                .collect(),
        },
    }
}

/// A -> B -> C chain with B initially collapsed (C hidden at load).
fn chain() -> (GraphModel, VisibleSet) {
    let data = MapData {
        nodes: vec![
            node("A", &["B"], &[("A", "B")], false),
            node("B", &["C"], &[("B", "C")], true),
            node("C", &[], &[], false),
        ],
        links: vec![],
    };
    let mut model = GraphModel::load(&data).unwrap();
    let mut visible = VisibleSet::new();
    visible.reveal_from_roots(&mut model);
    (model, visible)
}

fn render_tags(visible: &VisibleSet) -> (Vec<(String, String)>, Vec<(String, String)>) {
    (
        visible
            .nodes()
            .map(|n| (n.id.clone(), n.render_tag().to_string()))
            .collect(),
        visible
            .links()
            .map(|l| (l.key.id(), l.render_tag().to_string()))
            .collect(),
    )
}

#[test]
fn hidden_path_ids_have_no_visible_effect() {
    let (_, mut visible) = chain();
    let paths = vec![path("t1", &["A", "C"], &[("A", "C")])];

    highlight::apply(&mut visible, &paths);

    assert_eq!(visible.node("A").unwrap().display, NodeDisplay::Visited);
    assert_eq!(visible.node("B").unwrap().display, NodeDisplay::Unvisited);
    // The A->C link is not in the visible link set, so nothing colors.
    assert!(visible.links().all(|l| l.render_tag() != "visited"));
}

#[test]
fn apply_is_idempotent() {
    let (_, mut visible) = chain();
    let paths = vec![path("t1", &["A", "B"], &[("A", "B")])];

    highlight::apply(&mut visible, &paths);
    let once = render_tags(&visible);
    highlight::apply(&mut visible, &paths);
    assert_eq!(render_tags(&visible), once);
}

#[test]
fn empty_selection_restores_every_tag() {
    let (_, mut visible) = chain();
    let before = render_tags(&visible);

    highlight::apply(&mut visible, &[path("t1", &["A"], &[("A", "B")])]);
    highlight::apply(&mut visible, &[]);

    assert_eq!(render_tags(&visible), before);
}

#[test]
fn base_links_restore_their_own_tag() {
    // A non-default link tag must come back exactly after a highlight cycle.
    let data = MapData {
        nodes: vec![node("A", &[], &[], false), node("B", &[], &[], false)],
        links: vec![LinkData {
            source: "A".to_string(),
            target: "B".to_string(),
            tag: "module".to_string(),
        }],
    };
    let mut model = GraphModel::load(&data).unwrap();
    let mut visible = VisibleSet::new();
    visible.reveal_from_roots(&mut model);
    assert_eq!(visible.link("A", "B").unwrap().render_tag(), "module");

    highlight::apply(&mut visible, &[path("t1", &["A", "B"], &[("A", "B")])]);
    assert_eq!(visible.link("A", "B").unwrap().render_tag(), "visited");

    highlight::apply(&mut visible, &[]);
    assert_eq!(visible.link("A", "B").unwrap().render_tag(), "module");
}

#[test]
fn union_over_multiple_paths() {
    let (mut model, mut visible) = chain();
    visible.toggle(&mut model, "B").unwrap();

    let paths = vec![
        path("t1", &["A", "B"], &[("A", "B")]),
        path("t2", &["B", "C"], &[("B", "C")]),
    ];
    highlight::apply(&mut visible, &paths);

    assert!(visible.nodes().all(|n| n.render_tag() == "visited"));
    assert!(visible.links().all(|l| l.render_tag() == "visited"));
}

#[test]
fn reapply_after_expansion_colors_new_records() {
    let (mut model, mut visible) = chain();
    let paths = vec![path("t1", &["A", "B", "C"], &[("A", "B"), ("B", "C")])];
    highlight::apply(&mut visible, &paths);

    visible.toggle(&mut model, "B").unwrap();
    // Newly revealed records start at their structural default.
    assert_eq!(visible.node("C").unwrap().render_tag(), "node");
    assert_eq!(visible.link("B", "C").unwrap().render_tag(), "link");

    highlight::apply(&mut visible, &paths);
    assert_eq!(visible.node("C").unwrap().render_tag(), "visited");
    assert_eq!(visible.link("B", "C").unwrap().render_tag(), "visited");
}

#[test]
fn apply_never_changes_the_visible_shape() {
    let (_, mut visible) = chain();
    let nodes_before = visible.node_count();
    let links_before = visible.link_count();

    highlight::apply(&mut visible, &[path("t1", &["A", "C", "ghost"], &[])]);
    assert_eq!(visible.node_count(), nodes_before);
    assert_eq!(visible.link_count(), links_before);
}
