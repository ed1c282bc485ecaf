//! Renderer registry - the single dispatch point.
//!
//! Every per-kind renderer receives its statically typed payload from the
//! exhaustive `match` in [`RendererRegistry::render`], so a renderer can never
//! be handed a node of the wrong kind.

use tracing::trace;

use crate::context::RenderContext;
use crate::fragment::Fragment;
use crate::node::Node;
use crate::theme::StyleTheme;

use super::blocks::{HeadingRenderer, ParagraphRenderer, QuoteRenderer};
use super::fallback::{EmbeddedEntryRenderer, FallbackRenderer};
use super::link::HyperlinkRenderer;
use super::list::{ListItemRenderer, OrderedListRenderer, UnorderedListRenderer};
use super::text::TextRenderer;

/// Renders one node kind.
///
/// `N` is the payload type of the kind. Renderers recurse into children
/// through the registry, passing a context derived from `ctx`.
pub trait NodeRenderer<N: ?Sized> {
    fn render<T: StyleTheme>(
        &self,
        node: &N,
        registry: &RendererRegistry,
        ctx: RenderContext<'_, T>,
    ) -> Vec<Fragment<T::Font>>;
}

/// Renderer responsible for a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RendererKind {
    Document,
    Heading,
    Paragraph,
    Text,
    OrderedList,
    UnorderedList,
    ListItem,
    Hyperlink,
    Quote,
    EmbeddedEntry,
    /// Empty rendering for kinds without a dedicated renderer.
    Fallback,
}

/// Maps a node to the renderer for its kind. Total over every kind.
pub fn renderer_for(node: &Node) -> RendererKind {
    match node {
        Node::Document(_) => RendererKind::Document,
        Node::Heading(_) => RendererKind::Heading,
        Node::Paragraph(_) => RendererKind::Paragraph,
        Node::Text(_) => RendererKind::Text,
        Node::OrderedList(_) => RendererKind::OrderedList,
        Node::UnorderedList(_) => RendererKind::UnorderedList,
        Node::ListItem(_) => RendererKind::ListItem,
        Node::Hyperlink(_) => RendererKind::Hyperlink,
        Node::Quote(_) => RendererKind::Quote,
        Node::EmbeddedEntry(_) => RendererKind::EmbeddedEntry,
        Node::Unsupported => RendererKind::Fallback,
    }
}

/// Stateless dispatcher from nodes to their renderers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RendererRegistry;

impl RendererRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Renders one node with the renderer for its kind.
    pub fn render<T: StyleTheme>(
        &self,
        node: &Node,
        ctx: RenderContext<'_, T>,
    ) -> Vec<Fragment<T::Font>> {
        trace!(renderer = ?renderer_for(node), depth = ctx.depth(), "dispatch");

        match node {
            Node::Text(text) => TextRenderer.render(text, self, ctx),
            Node::Heading(heading) => HeadingRenderer.render(heading, self, ctx),
            Node::Paragraph(paragraph) => ParagraphRenderer.render(paragraph, self, ctx),
            Node::OrderedList(list) => OrderedListRenderer.render(list, self, ctx),
            Node::UnorderedList(list) => UnorderedListRenderer.render(list, self, ctx),
            Node::ListItem(item) => ListItemRenderer.render(item, self, ctx),
            Node::Hyperlink(link) => HyperlinkRenderer.render(link, self, ctx),
            Node::Quote(quote) => QuoteRenderer.render(quote, self, ctx),
            Node::EmbeddedEntry(entry) => EmbeddedEntryRenderer.render(entry, self, ctx),
            // Validation rejects nested documents; reaching one here means the
            // registry was driven directly. Render its children in place.
            Node::Document(document) => self.render_children(&document.children, ctx),
            Node::Unsupported => FallbackRenderer.render(node, self, ctx),
        }
    }

    /// Renders `children` in order with a context one level deeper than `ctx`,
    /// concatenating their fragments.
    pub fn render_children<T: StyleTheme>(
        &self,
        children: &[Node],
        ctx: RenderContext<'_, T>,
    ) -> Vec<Fragment<T::Font>> {
        let child_ctx = ctx.descend();
        children
            .iter()
            .flat_map(|child| self.render(child, child_ctx))
            .collect()
    }
}
