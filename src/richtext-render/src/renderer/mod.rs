//! Document Renderer - main entry point for rendering.
//!
//! This module provides [`DocumentRenderer`] and [`render_document`] for
//! turning a document tree into an ordered list of styled fragments.
//!
//! # Architecture
//!
//! The driver validates the tree, builds the base context and hands each
//! top-level child to the [`RendererRegistry`], which dispatches to one
//! renderer per node kind:
//! - `TextRenderer` for text runs (the only leaf that emits text)
//! - `HeadingRenderer`, `ParagraphRenderer`, `QuoteRenderer` for blocks
//! - `OrderedListRenderer`, `UnorderedListRenderer`, `ListItemRenderer` for lists
//! - `HyperlinkRenderer` for links
//! - `EmbeddedEntryRenderer` and `FallbackRenderer` for views and unknown kinds
//!
//! # Example
//!
//! ```rust,ignore
//! use richtext_render::{DocumentRenderer, Node, TerminalTheme};
//!
//! let renderer = DocumentRenderer::new(TerminalTheme::default());
//! let doc = Node::document(vec![Node::paragraph(vec![Node::text("Hello")])]);
//! let fragments = renderer.render(&doc)?;
//! ```

mod blocks;
mod fallback;
mod link;
mod list;
mod registry;
mod text;


use std::sync::Arc;

use tracing::{debug, warn};

use crate::context::{NoViews, RenderContext, ViewProvider};
use crate::error::{RenderError, RenderResult};
use crate::fragment::Fragment;
use crate::node::{Document, Node};
use crate::theme::StyleTheme;
use crate::validate::{DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH, validate_children};

pub use self::blocks::{HeadingRenderer, ParagraphRenderer, QuoteRenderer};
pub use self::fallback::{EmbeddedEntryRenderer, FallbackRenderer};
pub use self::link::HyperlinkRenderer;
pub use self::list::{ListItemRenderer, OrderedListRenderer, UnorderedListRenderer};
pub use self::registry::{NodeRenderer, RendererKind, RendererRegistry, renderer_for};
pub use self::text::{TextRenderer, resolve_font};

// ============================================================
// RenderOptions
// ============================================================

/// Limits applied to every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Deepest nesting accepted below the document root. Values above
    /// [`MAX_SUPPORTED_DEPTH`] are clamped.
    pub max_depth: usize,
}

impl RenderOptions {
    /// Depth limit actually enforced.
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.min(MAX_SUPPORTED_DEPTH)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

// ============================================================
// DocumentRenderer
// ============================================================

/// Renders document trees with a fixed theme.
///
/// Holds no per-render state, so one renderer can serve concurrent renders
/// from several threads when the theme is `Sync`.
#[derive(Clone)]
pub struct DocumentRenderer<T> {
    theme: Arc<T>,
    views: Arc<dyn ViewProvider + Send + Sync>,
    options: RenderOptions,
    registry: RendererRegistry,
}

impl<T> std::fmt::Debug for DocumentRenderer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentRenderer")
            .field("theme", &"<StyleTheme>")
            .field("options", &self.options)
            .finish()
    }
}

impl<T: StyleTheme> DocumentRenderer<T> {
    /// Creates a renderer with default options and no embedded views.
    pub fn new(theme: T) -> Self {
        Self::with_shared_theme(Arc::new(theme))
    }

    /// Creates a renderer around a theme shared with other owners.
    pub fn with_shared_theme(theme: Arc<T>) -> Self {
        Self {
            theme,
            views: Arc::new(NoViews),
            options: RenderOptions::default(),
            registry: RendererRegistry::new(),
        }
    }

    /// Sets the provider used for embedded entries.
    #[must_use]
    pub fn with_views(mut self, views: impl ViewProvider + Send + Sync + 'static) -> Self {
        self.views = Arc::new(views);
        self
    }

    #[must_use]
    pub fn with_options(self, options: RenderOptions) -> Self {
        self.with_max_depth(options.max_depth)
    }

    /// Sets the depth limit, clamped to [`MAX_SUPPORTED_DEPTH`].
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        if max_depth > MAX_SUPPORTED_DEPTH {
            warn!(
                requested = max_depth,
                limit = MAX_SUPPORTED_DEPTH,
                "max_depth above supported ceiling, clamping"
            );
        }
        self.options.max_depth = max_depth.min(MAX_SUPPORTED_DEPTH);
        self
    }

    pub fn theme(&self) -> &T {
        &self.theme
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Renders a document root.
    ///
    /// Returns [`RenderError::NotADocument`] if `root` is any other kind.
    pub fn render(&self, root: &Node) -> RenderResult<Vec<Fragment<T::Font>>> {
        let Node::Document(document) = root else {
            return Err(RenderError::NotADocument { kind: root.kind() });
        };
        self.render_document(document)
    }

    /// Renders a document. The tree is validated first; on error nothing is
    /// rendered.
    pub fn render_document(&self, document: &Document) -> RenderResult<Vec<Fragment<T::Font>>> {
        render_validated(
            document,
            self.theme.as_ref(),
            self.views.as_ref(),
            self.options,
            &self.registry,
        )
    }
}

/// Renders `root` with `theme`, default options and no embedded views.
pub fn render_document<T: StyleTheme>(
    root: &Node,
    theme: &T,
) -> RenderResult<Vec<Fragment<T::Font>>> {
    let Node::Document(document) = root else {
        return Err(RenderError::NotADocument { kind: root.kind() });
    };
    render_validated(
        document,
        theme,
        &NoViews,
        RenderOptions::default(),
        &RendererRegistry::new(),
    )
}

fn render_validated<T: StyleTheme>(
    document: &Document,
    theme: &T,
    views: &dyn ViewProvider,
    options: RenderOptions,
    registry: &RendererRegistry,
) -> RenderResult<Vec<Fragment<T::Font>>> {
    let stats = validate_children(&document.children, options.effective_max_depth())?;
    debug!(
        children = document.children.len(),
        nodes = stats.nodes,
        max_depth = stats.max_depth,
        "Rendering document"
    );

    let ctx = RenderContext::new(theme, views);
    let fragments: Vec<_> = document
        .children
        .iter()
        .flat_map(|child| registry.render(child, ctx))
        .collect();

    debug!(fragments = fragments.len(), "Rendered document");
    Ok(fragments)
}
