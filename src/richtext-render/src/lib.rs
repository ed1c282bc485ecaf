//! # Rich Text Render
//!
//! Turns a structured rich-text document tree into an ordered list of styled
//! fragments: text runs carrying a font, a paragraph indent and an optional
//! link, plus placeholders for embedded views.
//!
//! ## Features
//!
//! - **Headings** (H1-H6), paragraphs and quotes with role-specific fonts
//! - **Marks**: bold, italic, bold-italic and code resolve to font variants
//! - **Lists**: ordered and unordered, nested, with markers and indentation
//! - **Links** merged into a single run carrying the target
//! - **Embedded entries** resolved through a [`ViewProvider`]
//! - Unknown node kinds degrade to an empty view without stopping the render
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    DocumentRenderer                         │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │ StyleTheme  │  │  validate   │  │    ViewProvider     │  │
//! │  └──────┬──────┘  └──────┬──────┘  └──────────┬──────────┘  │
//! └─────────┼────────────────┼───────────────────┼──────────────┘
//!           │                │                   │
//! ┌─────────▼────────────────▼───────────────────▼──────────────┐
//! │                    RendererRegistry                         │
//! │   Text · Heading · Paragraph · Quote · Lists · Hyperlink    │
//! │              EmbeddedEntry · Fallback                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use richtext_render::{DocumentRenderer, Node, TerminalTheme, plain_text};
//!
//! let doc = Node::document(vec![
//!     Node::heading(1, vec![Node::text("Title")]),
//!     Node::unordered_list(vec![Node::list_item(vec![Node::text("item")])]),
//! ]);
//! let fragments = DocumentRenderer::new(TerminalTheme::default()).render(&doc)?;
//! assert_eq!(plain_text(&fragments), "Title\n• item\n");
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod fragment;
pub mod node;
pub mod renderer;
pub mod theme;
pub mod validate;

pub use config::{ConfigError, ConfigResult, RenderConfig};
pub use context::{ListKind, ListMarker, NoViews, RenderContext, ViewProvider};
pub use error::{RenderError, RenderResult};
pub use fragment::{Fragment, StyledTextRun, ViewHandle, plain_text};
pub use node::{Mark, Node, NodeKind};
pub use renderer::{DocumentRenderer, RenderOptions, RendererRegistry, render_document};
pub use theme::{FontVariant, StyleTheme, TerminalTheme, TextRole};
pub use validate::{TreeStats, validate_document};
