//! Renderers that produce embedded-view placeholders.

use tracing::warn;

use crate::context::RenderContext;
use crate::fragment::Fragment;
use crate::node::{EmbeddedEntry, Node};
use crate::theme::StyleTheme;

use super::registry::{NodeRenderer, RendererRegistry};

/// Renders any node without a dedicated renderer as one empty embedded view.
/// Never fails, and siblings keep rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackRenderer;

impl NodeRenderer<Node> for FallbackRenderer {
    fn render<T: StyleTheme>(
        &self,
        node: &Node,
        _registry: &RendererRegistry,
        ctx: RenderContext<'_, T>,
    ) -> Vec<Fragment<T::Font>> {
        warn!(
            kind = %node.kind(),
            depth = ctx.depth(),
            "no renderer for node, emitting empty view"
        );
        vec![Fragment::empty_view()]
    }
}

/// Asks the context's view provider for the entry's view.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedEntryRenderer;

impl NodeRenderer<EmbeddedEntry> for EmbeddedEntryRenderer {
    fn render<T: StyleTheme>(
        &self,
        node: &EmbeddedEntry,
        _registry: &RendererRegistry,
        ctx: RenderContext<'_, T>,
    ) -> Vec<Fragment<T::Font>> {
        vec![Fragment::EmbeddedView {
            handle: ctx.views().view_for(node),
        }]
    }
}
