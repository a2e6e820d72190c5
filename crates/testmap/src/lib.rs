#![forbid(unsafe_code)]

//! Interactive test-map chart engine (headless).
//!
//! The map report shows a test/module dependency graph: clicking a node
//! expands or collapses its subtree, and checking entries in the test list
//! highlights the paths those tests took through the graph. This crate is
//! the interaction core behind that page:
//!
//! - [`model::GraphModel`] — the canonical node/link universe and the
//!   collapse tree, validated at load;
//! - [`visible::VisibleSet`] — the currently displayed projection and the
//!   expand/collapse state machine;
//! - [`highlight`] — the path overlay, a pure display-state recolor;
//! - [`chart::MapChart`] — the controller wiring events to the pieces above
//!   and to a [`render::Renderer`].
//!
//! Force layout, SVG drawing and drag live behind the renderer trait; the
//! engine never reads or writes positions.

pub mod chart;
pub mod data;
pub mod error;
pub mod highlight;
pub mod model;
pub mod render;
pub mod visible;

pub use testmap_graph as graph;

pub use chart::MapChart;
pub use data::{MapData, TestPath, paths_from_json};
pub use error::{Error, Result};
pub use model::GraphModel;
pub use render::{NullRenderer, Renderer};
pub use visible::{LinkDisplay, LinkView, NodeDisplay, NodeView, Toggle, VisibleSet};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
