//! Boundary to the external layout/drawing surface.
//!
//! The engine drives the surface through [`Renderer::redraw`] only; layout
//! physics, SVG markers, drag handling and node positions all live on the
//! other side of this trait. Positions are keyed by node id over there and
//! survive re-binds, which is why the view records carry no coordinates.

use crate::visible::{LinkView, NodeView};

pub trait Renderer {
    /// Full re-bind of the surface to the given ordered arrays. Must be
    /// idempotent and re-entrant: primitives for ids no longer present are
    /// released, ids already bound keep their drawing state.
    fn redraw(&mut self, nodes: &[NodeView], links: &[LinkView]);
}

/// Renderer that draws nothing. Useful for headless runs of the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn redraw(&mut self, _nodes: &[NodeView], _links: &[LinkView]) {}
}
