use pretty_assertions::assert_eq;
use ratatui::style::{Color, Modifier};
use richtext_render::node::EmbeddedEntry;
use richtext_render::validate::MAX_SUPPORTED_DEPTH;
use richtext_render::{
    ConfigError, DocumentRenderer, FontVariant, Fragment, Node, RenderConfig, RenderError,
    StyleTheme, StyledTextRun, TerminalTheme, TextRole, ViewHandle, plain_text, render_document,
};
use serde_json::json;

const ARTICLE: &str = include_str!("fixtures/article.json");
const NESTED_DOCUMENT: &str = include_str!("fixtures/nested_document.json");
const RENDER_TOML: &str = include_str!("fixtures/render.toml");

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn article() -> Node {
    serde_json::from_str(ARTICLE).unwrap()
}

fn find_run<'a, F>(fragments: &'a [Fragment<F>], text: &str) -> &'a StyledTextRun<F> {
    fragments
        .iter()
        .filter_map(Fragment::as_text)
        .find(|run| run.text == text)
        .unwrap_or_else(|| panic!("no run with text {text:?}"))
}

#[test]
fn test_article_plain_text() {
    init_tracing();
    let fragments = render_document(&article(), &TerminalTheme::default()).unwrap();
    assert_eq!(
        plain_text(&fragments),
        "Release notes\n\
         This release ships with docs.\n\
         • Faster rendering\n\
         • Nested lists1. first\n\
         2. second\n\
         \n\
         Ship it.\n\
         \n\
         End\n"
    );
}

#[test]
fn test_article_fonts_and_links() {
    let theme = TerminalTheme::default();
    let fragments = render_document(&article(), &theme).unwrap();

    let heading = find_run(&fragments, "Release notes");
    assert_eq!(heading.font, theme.font_for(FontVariant::Regular, TextRole::Heading(1)));

    let bold = find_run(&fragments, "ships");
    assert!(bold.font.add_modifier.contains(Modifier::BOLD));
    assert_eq!(bold.link, None);

    let link = find_run(&fragments, "docs");
    assert_eq!(link.link.as_deref(), Some("https://example.com/docs"));
    assert_eq!(link.font, theme.font_for(FontVariant::Regular, TextRole::Link));

    let quote = find_run(&fragments, "Ship it.");
    assert_eq!(quote.font, theme.font_for(FontVariant::Italic, TextRole::Quote));

    assert_eq!(find_run(&fragments, "End").font, theme.base_font());
}

#[test]
fn test_article_indentation() {
    let theme = TerminalTheme::default().with_indentation_multiplier(2.0);
    let fragments = render_document(&article(), &theme).unwrap();

    assert_eq!(find_run(&fragments, "This release ").paragraph_indent, 0.0);
    assert_eq!(find_run(&fragments, "Faster rendering").paragraph_indent, 2.0);
    assert_eq!(find_run(&fragments, "first").paragraph_indent, 4.0);
    assert_eq!(find_run(&fragments, "1. ").paragraph_indent, 4.0);
    assert_eq!(find_run(&fragments, "End").paragraph_indent, 0.0);
}

#[test]
fn test_article_embedded_views() {
    let views = |entry: &EmbeddedEntry| {
        (entry.target == "chart-1").then(|| ViewHandle::new("chart-view"))
    };
    let renderer = DocumentRenderer::new(TerminalTheme::default()).with_views(views);
    let fragments = renderer.render(&article()).unwrap();

    let views: Vec<_> = fragments
        .iter()
        .filter_map(|fragment| match fragment {
            Fragment::EmbeddedView { handle } => Some(handle.clone()),
            Fragment::Text(_) => None,
        })
        .collect();
    // The entry resolves; the unknown table kind stays empty.
    assert_eq!(views, vec![Some(ViewHandle::new("chart-view")), None]);
}

#[test]
fn test_nested_document_fixture_is_rejected() {
    let doc: Node = serde_json::from_str(NESTED_DOCUMENT).unwrap();
    let err = render_document(&doc, &TerminalTheme::default()).unwrap_err();
    assert_eq!(err, RenderError::NestedDocument { path: vec![1, 0] });
}

#[test]
fn test_render_from_config() {
    init_tracing();
    let config = RenderConfig::from_toml_str(RENDER_TOML).unwrap();
    let renderer =
        DocumentRenderer::new(config.theme().unwrap()).with_options(config.options().unwrap());

    let fragments = renderer.render(&article()).unwrap();
    assert_eq!(find_run(&fragments, "first").paragraph_indent, 6.0);
    assert_eq!(find_run(&fragments, "docs").font.fg, Some(Color::Rgb(0x32, 0x64, 0xC8)));
    assert_eq!(renderer.theme().text_color, TerminalTheme::light().text_color);
}

#[test]
fn test_config_depth_limit_applies() {
    let config = RenderConfig::from_toml_str("[render]\nmax_depth = 2\n").unwrap();
    let renderer =
        DocumentRenderer::new(config.theme().unwrap()).with_options(config.options().unwrap());
    assert_eq!(
        renderer.render(&article()).unwrap_err(),
        RenderError::TooDeep { depth: 3, limit: 2 }
    );
}

#[test]
fn test_config_rejects_depth_above_ceiling() {
    let config = RenderConfig::from_toml_str("[render]\nmax_depth = 5000\n").unwrap();
    let err = config.options().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "render.max_depth"));
    assert!(err.to_string().contains(&MAX_SUPPORTED_DEPTH.to_string()));
}

#[test]
fn test_deep_tree_fails_cleanly_with_large_requested_limit() {
    let mut node = Node::text("deep");
    for _ in 0..4_000 {
        node = Node::quote(vec![node]);
    }
    let doc = Node::document(vec![node]);

    let renderer = DocumentRenderer::new(TerminalTheme::default()).with_max_depth(5_000);
    assert_eq!(
        renderer.render(&doc).unwrap_err(),
        RenderError::TooDeep {
            depth: MAX_SUPPORTED_DEPTH + 1,
            limit: MAX_SUPPORTED_DEPTH
        }
    );
    // Dropping the tree recurses once per level.
    std::mem::forget(doc);
}

#[test]
fn test_tree_built_with_json_macro() {
    let doc: Node = serde_json::from_value(json!({
        "kind": "document",
        "children": [
            { "kind": "ordered_list", "children": [
                { "kind": "list_item", "children": [
                    { "kind": "paragraph", "children": [{ "kind": "text", "value": "step one" }] },
                    { "kind": "paragraph", "children": [
                        { "kind": "text", "value": "details", "marks": ["code"] }
                    ] }
                ] },
                { "kind": "list_item", "children": [{ "kind": "text", "value": "step two" }] }
            ] }
        ]
    }))
    .unwrap();

    let theme = TerminalTheme::default();
    let fragments = render_document(&doc, &theme).unwrap();
    assert_eq!(plain_text(&fragments), "1. step one\n   details\n\n2. step two\n");
    assert_eq!(
        find_run(&fragments, "details").font,
        theme.font_for(FontVariant::Monospace, TextRole::Body)
    );
}

#[test]
fn test_non_document_root() {
    let err = render_document(&Node::text("loose"), &TerminalTheme::default()).unwrap_err();
    assert!(matches!(err, RenderError::NotADocument { .. }));
    assert_eq!(err.to_string(), "Expected a document root, found text");
}
