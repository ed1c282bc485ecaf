//! Document node model.
//!
//! A document is an ordered, acyclic tree rooted at [`Node::Document`]. Every
//! kind except the leaves owns an ordered (possibly empty) list of children,
//! and child order is preserved in the rendered output.
//!
//! The model derives serde so trees can be built from JSON or TOML fixtures.
//! Nodes are internally tagged by `kind`; any unknown tag deserialises to
//! [`Node::Unsupported`].
//!
//! ```json
//! { "kind": "paragraph", "children": [
//!     { "kind": "text", "value": "hello", "marks": ["bold"] }
//! ] }
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================
// MARKS
// ============================================================

/// Inline style annotation on a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Code,
}

/// Set of marks active on a text run.
pub type MarkSet = BTreeSet<Mark>;

// ============================================================
// NODE
// ============================================================

/// One element of the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Root of the tree. Never appears as a descendant.
    Document(Document),
    Heading(Heading),
    Paragraph(Paragraph),
    /// Leaf text run.
    Text(Text),
    OrderedList(OrderedList),
    UnorderedList(UnorderedList),
    ListItem(ListItem),
    Hyperlink(Hyperlink),
    Quote(Quote),
    /// Reference to an entry rendered outside the engine.
    EmbeddedEntry(EmbeddedEntry),
    /// Any node kind the engine does not know about.
    #[serde(other)]
    Unsupported,
}

/// Kind tag of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
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
    Unsupported,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Heading => "heading",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Text => "text",
            NodeKind::OrderedList => "ordered_list",
            NodeKind::UnorderedList => "unordered_list",
            NodeKind::ListItem => "list_item",
            NodeKind::Hyperlink => "hyperlink",
            NodeKind::Quote => "quote",
            NodeKind::EmbeddedEntry => "embedded_entry",
            NodeKind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level, 1 (largest) through 6.
    pub level: u8,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
    #[serde(default)]
    pub marks: MarkSet,
}

impl Text {
    /// Check whether the run carries the given mark.
    #[inline]
    pub fn has_mark(&self, mark: Mark) -> bool {
        self.marks.contains(&mark)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderedList {
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnorderedList {
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hyperlink {
    pub uri: String,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedEntry {
    /// Identifier of the referenced entry.
    pub target: String,
}

impl Node {
    /// Returns the kind tag of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Document(_) => NodeKind::Document,
            Node::Heading(_) => NodeKind::Heading,
            Node::Paragraph(_) => NodeKind::Paragraph,
            Node::Text(_) => NodeKind::Text,
            Node::OrderedList(_) => NodeKind::OrderedList,
            Node::UnorderedList(_) => NodeKind::UnorderedList,
            Node::ListItem(_) => NodeKind::ListItem,
            Node::Hyperlink(_) => NodeKind::Hyperlink,
            Node::Quote(_) => NodeKind::Quote,
            Node::EmbeddedEntry(_) => NodeKind::EmbeddedEntry,
            Node::Unsupported => NodeKind::Unsupported,
        }
    }

    /// Returns the ordered children of this node. Leaves return an empty slice.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document(n) => &n.children,
            Node::Heading(n) => &n.children,
            Node::Paragraph(n) => &n.children,
            Node::OrderedList(n) => &n.children,
            Node::UnorderedList(n) => &n.children,
            Node::ListItem(n) => &n.children,
            Node::Hyperlink(n) => &n.children,
            Node::Quote(n) => &n.children,
            Node::Text(_) | Node::EmbeddedEntry(_) | Node::Unsupported => &[],
        }
    }

    /// Check if this node is a list (ordered or unordered).
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, Node::OrderedList(_) | Node::UnorderedList(_))
    }

    // ============================================================
    // Constructors
    // ============================================================

    pub fn document(children: Vec<Node>) -> Self {
        Node::Document(Document { children })
    }

    pub fn heading(level: u8, children: Vec<Node>) -> Self {
        Node::Heading(Heading { level, children })
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(Paragraph { children })
    }

    /// Plain text run with no marks.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
            marks: MarkSet::new(),
        })
    }

    /// Text run carrying the given marks.
    pub fn marked_text(value: impl Into<String>, marks: impl IntoIterator<Item = Mark>) -> Self {
        Node::Text(Text {
            value: value.into(),
            marks: marks.into_iter().collect(),
        })
    }

    pub fn ordered_list(children: Vec<Node>) -> Self {
        Node::OrderedList(OrderedList { children })
    }

    pub fn unordered_list(children: Vec<Node>) -> Self {
        Node::UnorderedList(UnorderedList { children })
    }

    pub fn list_item(children: Vec<Node>) -> Self {
        Node::ListItem(ListItem { children })
    }

    pub fn hyperlink(uri: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Hyperlink(Hyperlink {
            uri: uri.into(),
            children,
        })
    }

    pub fn quote(children: Vec<Node>) -> Self {
        Node::Quote(Quote { children })
    }

    pub fn embedded_entry(target: impl Into<String>) -> Self {
        Node::EmbeddedEntry(EmbeddedEntry {
            target: target.into(),
        })
    }
}
