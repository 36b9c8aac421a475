//! End-to-end flows over the public surface: a settings preview applied to
//! a fresh document, the site CSS lifecycle, and the font-size baseline
//! round trip.

use simpread_style::{
    BlockKind, CustomSettings, Document, MemoryDom, StyleMutator, VerifyKind, MARKDOWN_DEFAULTS,
    SITE_CSS_ID,
};

fn settings_fixture() -> CustomSettings {
    serde_json::from_str(
        r##"{
            "title": { "fontSize": "1.3em", "fontFamily": "Georgia" },
            "desc":  { "color": "#999" },
            "art":   { "lineHeight": "1.8" },
            "pre":   {},
            "code":  { "fontSize": "" },
            "css":   ".simpread-theme-root { background: #fbfbfb; }"
        }"##,
    )
    .unwrap()
}

#[test]
fn test_preview_writes_every_block_once() {
    let mut mutator = StyleMutator::new(MemoryDom::new());
    let settings = settings_fixture();

    mutator.preview(&settings);
    // Re-applying must update in place, never duplicate.
    mutator.preview(&settings);

    let dom = mutator.into_document();
    for kind in [
        BlockKind::Title,
        BlockKind::Desc,
        BlockKind::Art,
        BlockKind::Pre,
        BlockKind::Code,
        BlockKind::Css,
    ] {
        assert_eq!(dom.block_count(kind.node_id()), 1, "one node for {}", kind);
    }

    assert_eq!(
        dom.style_block("simpread-custom-title").unwrap(),
        "sr-rd-title {font-family: Georgia;font-size: 1.3em;}"
    );
    assert_eq!(
        dom.style_block("simpread-custom-art").unwrap(),
        "sr-rd-content *, sr-rd-content p, sr-rd-content div {line-height: 1.8;}"
    );
    // Empty bags still produce their (empty-bodied) block.
    assert_eq!(
        dom.style_block("simpread-custom-pre").unwrap(),
        "sr-rd-content pre {}"
    );
    // Empty values are skipped, not rendered.
    assert_eq!(
        dom.style_block("simpread-custom-code").unwrap(),
        "sr-rd-content pre code, sr-rd-content pre code * {}"
    );
    assert_eq!(
        dom.style_block("simpread-custom-css").unwrap(),
        ".simpread-theme-root { background: #fbfbfb; }"
    );
}

#[test]
fn test_preview_with_empty_css_writes_empty_block() {
    let mut mutator = StyleMutator::new(MemoryDom::new());
    let settings = CustomSettings::default();

    mutator.preview(&settings);

    // Unlike the site CSS toggle, the preview's css write is
    // unconditional: an empty override is an empty block, not a removal.
    let dom = mutator.into_document();
    assert_eq!(dom.style_block("simpread-custom-css"), Some(String::new()));
}

#[test]
fn test_site_css_lifecycle() {
    let mut mutator = StyleMutator::new(MemoryDom::new());

    mutator.site_css("body{color:red}");
    mutator.site_css("body{color:green}");
    assert_eq!(mutator.document().block_count(SITE_CSS_ID), 1);

    mutator.site_css("");
    assert_eq!(mutator.document().style_block(SITE_CSS_ID), None);
}

#[test]
fn test_focus_tint_then_opacity_adjustment() {
    let mut mutator = StyleMutator::new(MemoryDom::new());

    let applied = mutator.background_color("rgba(235, 235, 235, 0.901961)", 90.0);
    assert_eq!(applied, "rgba(235, 235, 235, 0.9)");

    let adjusted = mutator.opacity(50.0);
    assert_eq!(adjusted, Some("rgba(235, 235, 235, 0.5)".to_string()));
}

#[test]
fn test_opacity_on_untinted_document_is_noop() {
    let mut mutator = StyleMutator::new(MemoryDom::new());
    assert_eq!(mutator.opacity(50.0), None);
    assert!(mutator.into_document().blocks().is_empty());
}

#[test]
fn test_font_size_round_trip_preserves_baseline() {
    let mut dom = MemoryDom::new();
    dom.set_attr("html", "style", "color:blue");
    let mut mutator = StyleMutator::new(dom);

    mutator.font_size("70%");
    mutator.font_size("62.5%");
    mutator.font_size("");

    assert_eq!(
        mutator.document().attr("html", "style").unwrap(),
        "color:blue"
    );
}

#[test]
fn test_markdown_defaults_installed_once() {
    let mut mutator = StyleMutator::new(MemoryDom::new());
    mutator.markdown_defaults();
    mutator.markdown_defaults();

    let dom = mutator.into_document();
    assert_eq!(dom.block_count(BlockKind::Markdown.node_id()), 1);
    assert_eq!(
        dom.style_block(BlockKind::Markdown.node_id()).unwrap(),
        MARKDOWN_DEFAULTS
    );
}

#[test]
fn test_predicate_tracks_fixture() {
    let settings = settings_fixture();
    assert!(settings.is_customized(VerifyKind::Theme));
    assert!(settings.is_customized(VerifyKind::FontSize));
    assert!(settings.is_customized(VerifyKind::Custom));

    let blank = CustomSettings::default();
    assert!(!blank.is_customized(VerifyKind::Theme));
    assert!(!blank.is_customized(VerifyKind::FontSize));
    assert!(!blank.is_customized(VerifyKind::Layout));
}
