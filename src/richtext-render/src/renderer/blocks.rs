//! Block-level composite renderers: heading, paragraph and quote.
//!
//! Each renders its children in order and then appends one line break,
//! regardless of what the next sibling is.

use crate::context::RenderContext;
use crate::fragment::Fragment;
use crate::node::{Heading, Node, Paragraph, Quote};
use crate::theme::{StyleTheme, TextRole};

use super::registry::{NodeRenderer, RendererRegistry};

/// Renders `children` with `ctx` and terminates the block with a line break
/// emitted in `block_ctx`.
fn render_block<T: StyleTheme>(
    children: &[Node],
    registry: &RendererRegistry,
    ctx: RenderContext<'_, T>,
    block_ctx: RenderContext<'_, T>,
) -> Vec<Fragment<T::Font>> {
    let mut fragments = registry.render_children(children, ctx);
    fragments.push(block_ctx.line_break());
    fragments
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingRenderer;

impl NodeRenderer<Heading> for HeadingRenderer {
    fn render<T: StyleTheme>(
        &self,
        node: &Heading,
        registry: &RendererRegistry,
        ctx: RenderContext<'_, T>,
    ) -> Vec<Fragment<T::Font>> {
        let heading_ctx = ctx.with_role(TextRole::Heading(node.level));
        render_block(&node.children, registry, heading_ctx, ctx)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphRenderer;

impl NodeRenderer<Paragraph> for ParagraphRenderer {
    fn render<T: StyleTheme>(
        &self,
        node: &Paragraph,
        registry: &RendererRegistry,
        ctx: RenderContext<'_, T>,
    ) -> Vec<Fragment<T::Font>> {
        render_block(&node.children, registry, ctx, ctx)
    }
}

/// Renders quote children like a paragraph, in the quote role.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteRenderer;

impl NodeRenderer<Quote> for QuoteRenderer {
    fn render<T: StyleTheme>(
        &self,
        node: &Quote,
        registry: &RendererRegistry,
        ctx: RenderContext<'_, T>,
    ) -> Vec<Fragment<T::Font>> {
        let quote_ctx = ctx.with_role(TextRole::Quote);
        render_block(&node.children, registry, quote_ctx, ctx)
    }
}
