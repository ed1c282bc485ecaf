//! Terminal theme backed by ratatui styles.
//!
//! The font handle is a ratatui [`Style`]. Variant styles (bold, italic,
//! code) are patched over the style of the block role, so a bold run inside
//! a heading keeps the heading's attributes and gains the bold ones.
//!
//! # Example
//!
//! ```rust,ignore
//! use richtext_render::theme::TerminalTheme;
//!
//! let theme = TerminalTheme::light()
//!     .with_indentation_multiplier(4.0)
//!     .with_link_text(Style::default().fg(Color::Blue));
//! ```

use ratatui::style::{Color, Modifier, Style};

use super::{FontVariant, StyleTheme, TextRole};

// ============================================================
// PALETTE
// ============================================================

/// Primary green - headings and accents
const PRIMARY: Color = Color::Rgb(0, 255, 163); // #00FFA3

/// Light green - secondary headings
const SECONDARY: Color = Color::Rgb(100, 255, 180); // #64FFB4

/// Mid green - links
const LINK: Color = Color::Rgb(0, 200, 130); // #00C882

/// Primary text
const TEXT: Color = Color::Rgb(255, 255, 255); // #FFFFFF

/// Dimmed text
const TEXT_DIM: Color = Color::Rgb(130, 154, 177); // #829AB1

/// Muted text
const TEXT_MUTED: Color = Color::Rgb(72, 101, 129); // #486581

/// Code foreground
const CODE_FG: Color = Color::Rgb(125, 249, 255); // #7DF9FF

/// Code background
const CODE_BG: Color = Color::Rgb(27, 40, 56); // #1B2838

/// Default paragraph indent per nesting level.
const DEFAULT_INDENTATION_MULTIPLIER: f32 = 2.0;

// ============================================================
// THEME
// ============================================================

/// Ratatui-style theme for rich-text rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalTheme {
    // ============================================================
    // Headings (H1-H6)
    // ============================================================
    /// Style for H1 headings (largest)
    pub h1: Style,
    pub h2: Style,
    pub h3: Style,
    pub h4: Style,
    pub h5: Style,
    /// Style for H6 headings (smallest)
    pub h6: Style,

    // ============================================================
    // Text Styles
    // ============================================================
    /// Base style for body text
    pub text: Style,
    pub bold: Style,
    pub italic: Style,
    /// Style for `code` marked runs
    pub code_inline: Style,

    // ============================================================
    // Blocks
    // ============================================================
    pub quote_text: Style,
    pub link_text: Style,
    /// Style for list numerals and bullets
    pub list_marker: Style,

    // ============================================================
    // Layout
    // ============================================================
    pub text_color: Color,
    pub indentation_multiplier: f32,
}

impl Default for TerminalTheme {
    fn default() -> Self {
        Self {
            h1: Style::default()
                .fg(PRIMARY)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            h2: Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            h3: Style::default()
                .fg(SECONDARY)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            h4: Style::default()
                .fg(SECONDARY)
                .add_modifier(Modifier::ITALIC),
            h5: Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC),
            h6: Style::default()
                .fg(TEXT_MUTED)
                .add_modifier(Modifier::ITALIC),
            text: Style::default().fg(TEXT),
            bold: Style::default().add_modifier(Modifier::BOLD),
            italic: Style::default().add_modifier(Modifier::ITALIC),
            code_inline: Style::default().fg(CODE_FG).bg(CODE_BG),
            quote_text: Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC),
            link_text: Style::default()
                .fg(LINK)
                .add_modifier(Modifier::UNDERLINED),
            list_marker: Style::default().fg(PRIMARY),
            text_color: TEXT,
            indentation_multiplier: DEFAULT_INDENTATION_MULTIPLIER,
        }
    }
}

impl TerminalTheme {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The "dark" theme (same as default).
    pub fn dark() -> Self {
        Self::default()
    }

    /// The "light" theme.
    pub fn light() -> Self {
        Self {
            h1: Style::default()
                .fg(Color::Rgb(0, 100, 70))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            h2: Style::default()
                .fg(Color::Rgb(0, 100, 70))
                .add_modifier(Modifier::BOLD),
            h3: Style::default()
                .fg(Color::Rgb(0, 80, 60))
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            h4: Style::default()
                .fg(Color::Rgb(0, 80, 60))
                .add_modifier(Modifier::ITALIC),
            h5: Style::default()
                .fg(Color::Rgb(80, 80, 80))
                .add_modifier(Modifier::ITALIC),
            h6: Style::default()
                .fg(Color::Rgb(120, 120, 120))
                .add_modifier(Modifier::ITALIC),
            text: Style::default().fg(Color::Rgb(30, 30, 30)),
            bold: Style::default().add_modifier(Modifier::BOLD),
            italic: Style::default().add_modifier(Modifier::ITALIC),
            code_inline: Style::default()
                .fg(Color::Rgb(0, 80, 60))
                .bg(Color::Rgb(235, 235, 235)),
            quote_text: Style::default()
                .fg(Color::Rgb(80, 80, 80))
                .add_modifier(Modifier::ITALIC),
            link_text: Style::default()
                .fg(Color::Rgb(50, 100, 200))
                .add_modifier(Modifier::UNDERLINED),
            list_marker: Style::default().fg(Color::Rgb(0, 100, 70)),
            text_color: Color::Rgb(30, 30, 30),
            indentation_multiplier: DEFAULT_INDENTATION_MULTIPLIER,
        }
    }

    /// Names accepted by [`TerminalTheme::from_name`].
    pub const PRESETS: [&'static str; 2] = ["dark", "light"];

    /// Look up a preset by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    // ============================================================
    // Builder Methods
    // ============================================================

    /// Sets the style for one heading level. Levels outside 1-6 are ignored.
    #[must_use]
    pub fn with_heading(mut self, level: u8, style: Style) -> Self {
        match level {
            1 => self.h1 = style,
            2 => self.h2 = style,
            3 => self.h3 = style,
            4 => self.h4 = style,
            5 => self.h5 = style,
            6 => self.h6 = style,
            _ => {}
        }
        self
    }

    #[must_use]
    pub fn with_text(mut self, style: Style) -> Self {
        self.text = style;
        self
    }

    #[must_use]
    pub fn with_bold(mut self, style: Style) -> Self {
        self.bold = style;
        self
    }

    #[must_use]
    pub fn with_italic(mut self, style: Style) -> Self {
        self.italic = style;
        self
    }

    #[must_use]
    pub fn with_code_inline(mut self, style: Style) -> Self {
        self.code_inline = style;
        self
    }

    #[must_use]
    pub fn with_quote_text(mut self, style: Style) -> Self {
        self.quote_text = style;
        self
    }

    #[must_use]
    pub fn with_link_text(mut self, style: Style) -> Self {
        self.link_text = style;
        self
    }

    #[must_use]
    pub fn with_list_marker(mut self, style: Style) -> Self {
        self.list_marker = style;
        self
    }

    /// Sets the text colour and the foreground of the base text style.
    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self.text = self.text.fg(color);
        self
    }

    /// Sets the foreground of every heading level.
    #[must_use]
    pub fn with_heading_color(mut self, color: Color) -> Self {
        for style in [
            &mut self.h1,
            &mut self.h2,
            &mut self.h3,
            &mut self.h4,
            &mut self.h5,
            &mut self.h6,
        ] {
            *style = style.fg(color);
        }
        self
    }

    #[must_use]
    pub fn with_indentation_multiplier(mut self, multiplier: f32) -> Self {
        self.indentation_multiplier = multiplier;
        self
    }

    // ============================================================
    // Utility Methods
    // ============================================================

    /// Returns the heading style for the given level (1-6).
    ///
    /// Levels outside the valid range are clamped.
    #[must_use]
    pub fn header_style(&self, level: u8) -> Style {
        match level {
            0 | 1 => self.h1,
            2 => self.h2,
            3 => self.h3,
            4 => self.h4,
            5 => self.h5,
            _ => self.h6,
        }
    }

    /// Style of a block role before any variant is applied.
    fn role_style(&self, role: TextRole) -> Style {
        match role {
            TextRole::Body => self.text,
            TextRole::Heading(level) => self.text.patch(self.header_style(level)),
            TextRole::Quote => self.text.patch(self.quote_text),
            TextRole::Link => self.text.patch(self.link_text),
            TextRole::ListMarker => self.text.patch(self.list_marker),
        }
    }
}

impl StyleTheme for TerminalTheme {
    type Font = Style;

    fn base_font(&self) -> Style {
        self.text
    }

    fn font_for(&self, variant: FontVariant, role: TextRole) -> Style {
        let base = self.role_style(role);
        match variant {
            FontVariant::Regular => base,
            FontVariant::Bold => base.patch(self.bold),
            FontVariant::Italic => base.patch(self.italic),
            FontVariant::BoldItalic => base.patch(self.bold).patch(self.italic),
            FontVariant::Monospace => base.patch(self.code_inline),
        }
    }

    fn indentation_multiplier(&self) -> f32 {
        self.indentation_multiplier
    }

    fn text_color(&self) -> Option<Color> {
        Some(self.text_color)
    }
}
