//! # List Renderers
//!
//! Ordered and unordered lists render their items one indentation level
//! deeper than themselves and tell each item, through the context, which kind
//! of list it belongs to and its 1-based position. Lists emit no line break of
//! their own; each item ends with one.
//!
//! An item writes a prefix fragment before each direct child. The first prefix
//! is the marker (`"3. "` or `"• "`) whatever the child's kind, later ones are
//! blank padding of the same width so continuation content lines up. Nested
//! lists after the first child get no prefix since they carry their own
//! markers.

use unicode_width::UnicodeWidthStr;

use crate::context::{ListKind, ListMarker, RenderContext};
use crate::fragment::Fragment;
use crate::node::{ListItem, Node, OrderedList, UnorderedList};
use crate::theme::{FontVariant, StyleTheme, TextRole};

use super::registry::{NodeRenderer, RendererRegistry};

// ============================================================
// CONSTANTS
// ============================================================

/// Bullet characters by depth level
const BULLETS: [&str; 4] = ["•", "◦", "▪", "▸"];

// ============================================================
// HELPER FUNCTIONS
// ============================================================

/// Get the bullet character for a given depth level.
///
/// The last bullet repeats for deeper lists.
#[inline]
fn get_bullet(depth: usize) -> &'static str {
    BULLETS[depth.min(BULLETS.len() - 1)]
}

/// Format an ordered list marker (e.g., "1. ", "2. ")
fn format_ordered_marker(number: usize) -> String {
    format!("{}. ", number)
}

/// Format an unordered list marker with bullet
fn format_unordered_marker(depth: usize) -> String {
    format!("{} ", get_bullet(depth))
}

/// Blank padding as wide as `marker`.
fn continuation_indent(marker: &str) -> String {
    " ".repeat(marker.width())
}

/// Marker text for an item. `indent_level` is the item's own level, so the
/// outermost list's items are at level 1 and use the first bullet.
fn marker_label(marker: ListMarker, indent_level: usize) -> String {
    match marker.kind {
        ListKind::Ordered => format_ordered_marker(marker.ordinal),
        ListKind::Unordered => format_unordered_marker(indent_level.saturating_sub(1)),
    }
}

// ============================================================
// LISTS
// ============================================================

fn render_list<T: StyleTheme>(
    kind: ListKind,
    children: &[Node],
    registry: &RendererRegistry,
    ctx: RenderContext<'_, T>,
) -> Vec<Fragment<T::Font>> {
    let item_ctx = ctx.indented().descend();
    let mut ordinal = 0;
    let mut fragments = Vec::new();

    for child in children {
        let marker = match child {
            Node::ListItem(_) => {
                ordinal += 1;
                Some(ListMarker { kind, ordinal })
            }
            _ => None,
        };
        fragments.extend(registry.render(child, item_ctx.with_list_marker(marker)));
    }

    fragments
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedListRenderer;

impl NodeRenderer<OrderedList> for OrderedListRenderer {
    fn render<T: StyleTheme>(
        &self,
        node: &OrderedList,
        registry: &RendererRegistry,
        ctx: RenderContext<'_, T>,
    ) -> Vec<Fragment<T::Font>> {
        render_list(ListKind::Ordered, &node.children, registry, ctx)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnorderedListRenderer;

impl NodeRenderer<UnorderedList> for UnorderedListRenderer {
    fn render<T: StyleTheme>(
        &self,
        node: &UnorderedList,
        registry: &RendererRegistry,
        ctx: RenderContext<'_, T>,
    ) -> Vec<Fragment<T::Font>> {
        render_list(ListKind::Unordered, &node.children, registry, ctx)
    }
}

// ============================================================
// LIST ITEM
// ============================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct ListItemRenderer;

impl NodeRenderer<ListItem> for ListItemRenderer {
    fn render<T: StyleTheme>(
        &self,
        node: &ListItem,
        registry: &RendererRegistry,
        ctx: RenderContext<'_, T>,
    ) -> Vec<Fragment<T::Font>> {
        let marker_font = ctx
            .theme()
            .font_for(FontVariant::Regular, TextRole::ListMarker);
        let indent = ctx.paragraph_indent();
        let label = ctx
            .list_marker()
            .map(|marker| marker_label(marker, ctx.indent_level()));

        let content_ctx = ctx.with_list_marker(None);
        let mut fragments = Vec::new();

        for (index, child) in node.children.iter().enumerate() {
            // The first child always carries the marker, even a nested list.
            if index == 0 || !child.is_list() {
                let prefix = match &label {
                    Some(label) if index == 0 => label.clone(),
                    Some(label) => continuation_indent(label),
                    // Item outside any list: number its children.
                    None => format_ordered_marker(index + 1),
                };
                fragments.push(Fragment::text(prefix, marker_font.clone(), indent));
            }
            fragments.extend(registry.render(child, content_ctx.descend()));
        }

        fragments.push(ctx.line_break());
        fragments
    }
}
