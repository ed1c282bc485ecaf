//! Render context threaded through the traversal.
//!
//! [`RenderContext`] is a small `Copy` value. A renderer that needs a different
//! context for its children derives a new one (`indented`, `with_role`, ...)
//! and hands it down; its own value, and therefore every sibling's, is never
//! touched.

use std::fmt;

use crate::fragment::{Fragment, ViewHandle};
use crate::node::EmbeddedEntry;
use crate::theme::{StyleTheme, TextRole};

// ============================================================
// VIEW PROVIDER
// ============================================================

/// Supplies view handles for embedded entries.
pub trait ViewProvider {
    fn view_for(&self, entry: &EmbeddedEntry) -> Option<ViewHandle>;
}

/// Provider that has no views; every embedded entry renders without a handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoViews;

impl ViewProvider for NoViews {
    fn view_for(&self, _entry: &EmbeddedEntry) -> Option<ViewHandle> {
        None
    }
}

impl<F> ViewProvider for F
where
    F: Fn(&EmbeddedEntry) -> Option<ViewHandle>,
{
    fn view_for(&self, entry: &EmbeddedEntry) -> Option<ViewHandle> {
        self(entry)
    }
}

// ============================================================
// LIST MARKER
// ============================================================

/// Type of list (ordered or unordered)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

/// Marker information handed by a list to one of its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub kind: ListKind,
    /// 1-based position of the item within its list.
    pub ordinal: usize,
}

// ============================================================
// RENDER CONTEXT
// ============================================================

/// Immutable state for one step of the traversal.
pub struct RenderContext<'a, T: ?Sized> {
    theme: &'a T,
    views: &'a dyn ViewProvider,
    indent_level: usize,
    role: TextRole,
    list: Option<ListMarker>,
    depth: usize,
}

impl<T: ?Sized> Clone for RenderContext<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for RenderContext<'_, T> {}

impl<T: ?Sized> fmt::Debug for RenderContext<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("theme", &"<StyleTheme>")
            .field("indent_level", &self.indent_level)
            .field("role", &self.role)
            .field("list", &self.list)
            .field("depth", &self.depth)
            .finish()
    }
}

impl<'a, T: ?Sized> RenderContext<'a, T> {
    /// Base context: indent level zero, body role, no enclosing list.
    pub fn new(theme: &'a T, views: &'a dyn ViewProvider) -> Self {
        Self {
            theme,
            views,
            indent_level: 0,
            role: TextRole::Body,
            list: None,
            depth: 0,
        }
    }

    pub fn theme(&self) -> &'a T {
        self.theme
    }

    pub fn views(&self) -> &'a dyn ViewProvider {
        self.views
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    pub fn role(&self) -> TextRole {
        self.role
    }

    /// Marker of the directly enclosing list, if the current node is a list item.
    pub fn list_marker(&self) -> Option<ListMarker> {
        self.list
    }

    /// Structural depth of the node being rendered (root children are 0).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Context one indentation level deeper.
    #[must_use]
    pub fn indented(self) -> Self {
        Self {
            indent_level: self.indent_level + 1,
            ..self
        }
    }

    #[must_use]
    pub fn with_role(self, role: TextRole) -> Self {
        Self { role, ..self }
    }

    #[must_use]
    pub fn with_list_marker(self, list: Option<ListMarker>) -> Self {
        Self { list, ..self }
    }

    /// Context for the children of the node being rendered.
    #[must_use]
    pub(crate) fn descend(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }
}

impl<T: StyleTheme + ?Sized> RenderContext<'_, T> {
    /// Paragraph indent for runs emitted in this context.
    pub fn paragraph_indent(&self) -> f32 {
        self.indent_level as f32 * self.theme.indentation_multiplier()
    }

    /// Line-break fragment in the theme's base font.
    pub fn line_break(&self) -> Fragment<T::Font> {
        Fragment::line_break(self.theme.base_font(), self.paragraph_indent())
    }
}
