//! Chart controller: owns the model, the visible projection, the active
//! selection and the renderer, and sequences the event flow.
//!
//! Every handler runs to completion before the next event: a node click is
//! toggle, then reapply the last selection (so highlighting survives the
//! structural change), then one redraw. The selection list talks to the
//! chart through [`MapChart::select_tests`] instead of an ambient global.

use crate::data::{MapData, TestPath};
use crate::error::Result;
use crate::highlight;
use crate::model::GraphModel;
use crate::render::Renderer;
use crate::visible::{Toggle, VisibleSet};

pub struct MapChart<R: Renderer> {
    model: GraphModel,
    visible: VisibleSet,
    paths: Vec<TestPath>,
    selection: Vec<TestPath>,
    renderer: R,
}

impl<R: Renderer> MapChart<R> {
    /// Loads the universe, reveals the initial projection and issues the
    /// first redraw. `paths` is the test list offered for selection.
    pub fn new(data: &MapData, paths: Vec<TestPath>, renderer: R) -> Result<Self> {
        let mut model = GraphModel::load(data)?;
        let mut visible = VisibleSet::new();
        visible.reveal_from_roots(&mut model);

        let mut chart = Self {
            model,
            visible,
            paths,
            selection: Vec::new(),
            renderer,
        };
        chart.redraw();
        Ok(chart)
    }

    /// Click handler for a node primitive. A leaf click changes nothing and
    /// skips the redraw; an unknown or hidden id is reported and leaves the
    /// chart untouched.
    pub fn node_click(&mut self, id: &str) -> Result<Toggle> {
        let outcome = self
            .visible
            .toggle(&mut self.model, id)
            .inspect_err(|err| tracing::warn!(id, %err, "node click ignored"))?;
        if outcome == Toggle::Leaf {
            return Ok(outcome);
        }
        highlight::apply(&mut self.visible, &self.selection);
        self.redraw();
        Ok(outcome)
    }

    /// Recomputes the selection from the currently checked test names.
    /// Unknown names are skipped with a warning. Returns the number of
    /// active paths.
    pub fn select_tests(&mut self, tests: &[&str]) -> usize {
        let mut selection = Vec::new();
        for name in tests {
            match self.paths.iter().find(|p| p.test == *name) {
                Some(path) => selection.push(path.clone()),
                None => tracing::warn!(test = %name, "unknown test skipped"),
            }
        }
        self.select_paths(selection)
    }

    /// Wholesale selection replacement for callers that own the list UI.
    pub fn select_paths(&mut self, paths: Vec<TestPath>) -> usize {
        self.selection = paths;
        highlight::apply(&mut self.visible, &self.selection);
        self.redraw();
        self.selection.len()
    }

    pub fn clear_selection(&mut self) {
        self.select_paths(Vec::new());
    }

    fn redraw(&mut self) {
        let (nodes, links) = self.visible.snapshot();
        self.renderer.redraw(&nodes, &links);
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    pub fn selection(&self) -> &[TestPath] {
        &self.selection
    }

    pub fn available_paths(&self) -> &[TestPath] {
        &self.paths
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
