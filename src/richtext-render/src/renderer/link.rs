//! Hyperlink renderer.

use tracing::trace;

use crate::context::RenderContext;
use crate::fragment::{Fragment, StyledTextRun};
use crate::node::Hyperlink;
use crate::theme::{FontVariant, StyleTheme, TextRole};

use super::registry::{NodeRenderer, RendererRegistry};

/// Merges a link's rendered children into a single run carrying the link
/// target.
///
/// Only text runs take part in the merge: the text is concatenated and the
/// font of the first run is kept. Embedded views are dropped, since a link
/// cannot span a non-text region. The output is always exactly one fragment;
/// a link with no text yields an empty run in the theme's link font.
#[derive(Debug, Clone, Copy, Default)]
pub struct HyperlinkRenderer;

impl NodeRenderer<Hyperlink> for HyperlinkRenderer {
    fn render<T: StyleTheme>(
        &self,
        node: &Hyperlink,
        registry: &RendererRegistry,
        ctx: RenderContext<'_, T>,
    ) -> Vec<Fragment<T::Font>> {
        let rendered = registry.render_children(&node.children, ctx.with_role(TextRole::Link));

        let mut merged: Option<StyledTextRun<T::Font>> = None;
        for fragment in rendered {
            match fragment {
                Fragment::Text(run) => match merged.as_mut() {
                    Some(head) => head.text.push_str(&run.text),
                    None => merged = Some(run),
                },
                Fragment::EmbeddedView { .. } => {
                    trace!(uri = %node.uri, "dropping embedded view from link");
                }
            }
        }

        let indent = ctx.paragraph_indent();
        let run = match merged {
            Some(run) => StyledTextRun::new(run.text, run.font, indent),
            None => StyledTextRun::new(
                String::new(),
                ctx.theme().font_for(FontVariant::Regular, TextRole::Link),
                indent,
            ),
        };

        vec![Fragment::Text(run.with_link(node.uri.clone()))]
    }
}
