//! Style theme capability consumed by the renderers.
//!
//! The engine never computes font geometry. It picks a [`FontVariant`] from a
//! run's marks, pairs it with the [`TextRole`] of the enclosing block, and asks
//! the theme for the matching font handle. Font resolution is total: every
//! variant/role pair must map to some font.

mod terminal;

pub use terminal::TerminalTheme;

use ratatui::style::Color;

use crate::node::{Mark, MarkSet};

/// Font variant selected from a text run's marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontVariant {
    Regular,
    Bold,
    Italic,
    BoldItalic,
    Monospace,
}

impl FontVariant {
    /// Selects the variant for a set of marks.
    ///
    /// Precedence is fixed: bold+italic, bold, italic, code, regular. Only
    /// bold and italic combine; `code` is ignored when either is present.
    pub fn from_marks(marks: &MarkSet) -> Self {
        let bold = marks.contains(&Mark::Bold);
        let italic = marks.contains(&Mark::Italic);
        if bold && italic {
            FontVariant::BoldItalic
        } else if bold {
            FontVariant::Bold
        } else if italic {
            FontVariant::Italic
        } else if marks.contains(&Mark::Code) {
            FontVariant::Monospace
        } else {
            FontVariant::Regular
        }
    }
}

/// Block role of the text being styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextRole {
    /// Ordinary body text.
    #[default]
    Body,
    /// Text inside a heading of the given level (1-6).
    Heading(u8),
    /// Text inside a quote.
    Quote,
    /// Text inside a hyperlink.
    Link,
    /// List item prefix (numeral or bullet).
    ListMarker,
}

/// Theme capability required by the renderers.
///
/// Implementations must be deterministic, and `font_for(FontVariant::Regular,
/// TextRole::Body)` must equal `base_font()`.
pub trait StyleTheme {
    /// Opaque font handle carried by styled text runs.
    type Font: Clone + PartialEq + std::fmt::Debug;

    /// Font for unmarked body text.
    fn base_font(&self) -> Self::Font;

    /// Font for a variant within a block role.
    fn font_for(&self, variant: FontVariant, role: TextRole) -> Self::Font;

    /// Paragraph indent added per nesting level.
    fn indentation_multiplier(&self) -> f32;

    /// Text colour. Reserved: the engine does not apply it yet.
    fn text_color(&self) -> Option<Color> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(list: &[Mark]) -> MarkSet {
        list.iter().copied().collect()
    }

    #[test]
    fn test_variant_precedence() {
        assert_eq!(FontVariant::from_marks(&marks(&[])), FontVariant::Regular);
        assert_eq!(
            FontVariant::from_marks(&marks(&[Mark::Bold])),
            FontVariant::Bold
        );
        assert_eq!(
            FontVariant::from_marks(&marks(&[Mark::Italic])),
            FontVariant::Italic
        );
        assert_eq!(
            FontVariant::from_marks(&marks(&[Mark::Bold, Mark::Italic])),
            FontVariant::BoldItalic
        );
        assert_eq!(
            FontVariant::from_marks(&marks(&[Mark::Code])),
            FontVariant::Monospace
        );
    }

    #[test]
    fn test_code_loses_to_bold_and_italic() {
        assert_eq!(
            FontVariant::from_marks(&marks(&[Mark::Code, Mark::Bold])),
            FontVariant::Bold
        );
        assert_eq!(
            FontVariant::from_marks(&marks(&[Mark::Code, Mark::Italic])),
            FontVariant::Italic
        );
        assert_eq!(
            FontVariant::from_marks(&marks(&[Mark::Code, Mark::Bold, Mark::Italic])),
            FontVariant::BoldItalic
        );
    }

    #[test]
    fn test_underline_does_not_change_variant() {
        assert_eq!(
            FontVariant::from_marks(&marks(&[Mark::Underline])),
            FontVariant::Regular
        );
    }
}
