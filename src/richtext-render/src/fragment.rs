//! Render output fragments.
//!
//! A render produces an ordered `Vec<Fragment>` with no implicit grouping.
//! Presentation layers turn [`StyledTextRun`]s into native rich text and
//! substitute [`Fragment::EmbeddedView`] placeholders with real views.

use std::fmt;

/// Text of a line-break fragment.
pub const LINE_BREAK: &str = "\n";

/// Opaque reference to a view supplied by a [`crate::ViewProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewHandle(String);

impl ViewHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A run of text sharing one font and paragraph indent.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledTextRun<F> {
    pub text: String,
    pub font: F,
    pub paragraph_indent: f32,
    /// Link target covering the whole run.
    pub link: Option<String>,
}

impl<F> StyledTextRun<F> {
    pub fn new(text: impl Into<String>, font: F, paragraph_indent: f32) -> Self {
        Self {
            text: text.into(),
            font,
            paragraph_indent,
            link: None,
        }
    }

    #[must_use]
    pub fn with_link(mut self, uri: impl Into<String>) -> Self {
        self.link = Some(uri.into());
        self
    }

    #[inline]
    pub fn is_line_break(&self) -> bool {
        self.text == LINE_BREAK
    }
}

/// One unit of rendered output.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment<F> {
    Text(StyledTextRun<F>),
    /// Placeholder for a view embedded at this position.
    EmbeddedView { handle: Option<ViewHandle> },
}

impl<F> Fragment<F> {
    pub fn text(text: impl Into<String>, font: F, paragraph_indent: f32) -> Self {
        Fragment::Text(StyledTextRun::new(text, font, paragraph_indent))
    }

    pub fn line_break(font: F, paragraph_indent: f32) -> Self {
        Fragment::text(LINE_BREAK, font, paragraph_indent)
    }

    /// Embedded view with no handle, as produced by the fallback renderer.
    pub fn empty_view() -> Self {
        Fragment::EmbeddedView { handle: None }
    }

    pub fn as_text(&self) -> Option<&StyledTextRun<F>> {
        match self {
            Fragment::Text(run) => Some(run),
            Fragment::EmbeddedView { .. } => None,
        }
    }

    pub fn into_text(self) -> Option<StyledTextRun<F>> {
        match self {
            Fragment::Text(run) => Some(run),
            Fragment::EmbeddedView { .. } => None,
        }
    }

    #[inline]
    pub fn is_line_break(&self) -> bool {
        self.as_text().is_some_and(StyledTextRun::is_line_break)
    }

    #[inline]
    pub fn is_embedded_view(&self) -> bool {
        matches!(self, Fragment::EmbeddedView { .. })
    }
}

/// Concatenates the text of every run, skipping embedded views.
pub fn plain_text<F>(fragments: &[Fragment<F>]) -> String {
    fragments
        .iter()
        .filter_map(Fragment::as_text)
        .map(|run| run.text.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_break_detection() {
        let br: Fragment<()> = Fragment::line_break((), 0.0);
        assert!(br.is_line_break());
        assert!(!Fragment::text("x", (), 0.0).is_line_break());
        assert!(!Fragment::<()>::empty_view().is_line_break());
    }

    #[test]
    fn test_plain_text_skips_views() {
        let fragments = vec![
            Fragment::text("a", (), 0.0),
            Fragment::EmbeddedView {
                handle: Some(ViewHandle::new("v")),
            },
            Fragment::text("b", (), 0.0),
            Fragment::line_break((), 0.0),
        ];
        assert_eq!(plain_text(&fragments), "ab\n");
    }

    #[test]
    fn test_with_link() {
        let run = StyledTextRun::new("a", (), 1.0).with_link("https://x");
        assert_eq!(run.link.as_deref(), Some("https://x"));
        assert_eq!(run.paragraph_indent, 1.0);
    }
}
