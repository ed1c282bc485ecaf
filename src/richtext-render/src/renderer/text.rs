//! Leaf text renderer.

use crate::context::RenderContext;
use crate::fragment::Fragment;
use crate::node::Text;
use crate::theme::{FontVariant, StyleTheme, TextRole};

use super::registry::{NodeRenderer, RendererRegistry};

/// Emits exactly one styled run per text node. Never recurses.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl NodeRenderer<Text> for TextRenderer {
    fn render<T: StyleTheme>(
        &self,
        node: &Text,
        _registry: &RendererRegistry,
        ctx: RenderContext<'_, T>,
    ) -> Vec<Fragment<T::Font>> {
        vec![Fragment::text(
            node.value.clone(),
            resolve_font(node, &ctx),
            ctx.paragraph_indent(),
        )]
    }
}

/// Font for a text run: the variant chosen by its marks, in the context's role.
/// Unmarked body text always gets the theme's base font.
pub fn resolve_font<T: StyleTheme>(text: &Text, ctx: &RenderContext<'_, T>) -> T::Font {
    let theme = ctx.theme();
    match (FontVariant::from_marks(&text.marks), ctx.role()) {
        (FontVariant::Regular, TextRole::Body) => theme.base_font(),
        (variant, role) => theme.font_for(variant, role),
    }
}
