//! Integration tests for the page-layout rendering path.

use pagemark::{
    render_document, wrap_document, BBox, Color, Document, Element, Font, Page, PageMode,
    RenderOptions,
};

fn sample_document() -> Document {
    let mut doc = Document::new();

    let mut page = Page::new(612.0, 792.0);
    page.add_element(Element::rect(
        BBox::new(50.0, 50.0, 550.0, 52.0),
        Color::rgb(40, 40, 40),
        Color::Transparent,
        1.0,
    ));
    page.add_element(Element::text(
        BBox::new(10.0, 20.0, 100.0, 40.0),
        "Invoice #42",
        Font::new("Helvetica", 12.0).bold(),
        Color::BLACK,
    ));
    page.add_element(Element::image(
        BBox::new(400.0, 30.0, 560.0, 120.0),
        Some(vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
    ));
    doc.add_page(page);

    doc
}

#[test]
fn test_absolute_layout_positions() {
    let output = render_document(&sample_document(), &RenderOptions::default()).unwrap();

    // Text baseline correction: top = 20 - 12*0.8 = 10.4
    assert!(output.html.contains("left:10px;top:10.4px;"));
    // Rect sized from its bbox
    assert!(output.html.contains("width:500px;height:2px;"));
    // Image inlined as a data URI
    assert!(output.html.contains("data:image/png;base64,"));
}

#[test]
fn test_stacking_is_explicit() {
    let output = render_document(&sample_document(), &RenderOptions::default()).unwrap();

    // The rect is emitted before the text, yet stacking is carried by
    // z-index values, not emission order
    let rect_pos = output.html.find("z-index:1;").unwrap();
    let text_pos = output.html.find("z-index:10;").unwrap();
    let image_pos = output.html.find("z-index:5;").unwrap();
    assert!(rect_pos < text_pos);
    assert!(rect_pos < image_pos);
}

#[test]
fn test_full_document_shell() {
    let output = render_document(&sample_document(), &RenderOptions::default()).unwrap();
    let full = output.full_document.expect("page path wraps the document");

    assert!(full.starts_with("<!DOCTYPE html>"));
    assert!(full.contains("<html lang=\"en\">"));
    assert!(full.contains("<meta name=\"viewport\""));
    assert!(full.contains("<title></title>"));
    assert!(full.contains(&output.html));
}

#[test]
fn test_wrap_document_direct() {
    let full = wrap_document("<p>x</p>", ".x{}");
    assert!(full.contains("<style>\n.x{}\n</style>"));
    assert!(full.contains("<body>\n<p>x</p>\n</body>"));
}

#[test]
fn test_empty_page_renders_sized_container() {
    let mut doc = Document::new();
    doc.add_page(Page::new(320.0, 240.0));

    let output = render_document(&doc, &RenderOptions::default()).unwrap();
    assert_eq!(
        output.html,
        "<div class=\"page\" style=\"position:relative;width:320px;height:240px;\">\n</div>"
    );
}

#[test]
fn test_semantic_mode_flows_text_only() {
    let options = RenderOptions::new().with_mode(PageMode::Semantic);
    let output = render_document(&sample_document(), &options).unwrap();

    assert!(output.html.contains("<section class=\"page-semantic\">"));
    assert!(output.html.contains("<p class=\"t\">Invoice #42</p>"));
    assert!(!output.html.contains("z-index"));
    assert!(!output.html.contains("<img"));
}

#[test]
fn test_scale_factor() {
    let options = RenderOptions::new().with_scale(2.0);
    let output = render_document(&sample_document(), &options).unwrap();

    assert!(output.html.contains("width:1224px;height:1584px;"));
    assert!(output.html.contains("left:20px;"));
}

#[test]
fn test_unsupported_primitives_surface_warnings() {
    let mut doc = Document::new();
    let mut page = Page::new(100.0, 100.0);
    page.add_element(Element::Unsupported {
        kind: "bezier".to_string(),
    });
    doc.add_page(page);
    let mut second = Page::new(100.0, 100.0);
    second.add_element(Element::Unsupported {
        kind: "clip".to_string(),
    });
    doc.add_page(second);

    let output = render_document(&doc, &RenderOptions::default()).unwrap();
    assert_eq!(
        output.warnings,
        vec![
            "page 1: unsupported primitive 'bezier' dropped".to_string(),
            "page 2: unsupported primitive 'clip' dropped".to_string(),
        ]
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let doc = sample_document();
    let options = RenderOptions::default();

    let first = render_document(&doc, &options).unwrap();
    let second = render_document(&doc, &options).unwrap();
    assert_eq!(first.full_document, second.full_document);
    assert_eq!(first.html, second.html);
    assert_eq!(first.css, second.css);
    assert_eq!(first.warnings, second.warnings);
}

#[test]
fn test_model_json_roundtrip() {
    let doc = sample_document();
    let json = serde_json::to_string(&doc).unwrap();
    let back: Document = serde_json::from_str(&json).unwrap();

    let options = RenderOptions::default();
    let a = render_document(&doc, &options).unwrap();
    let b = render_document(&back, &options).unwrap();
    assert_eq!(a.html, b.html);
}

#[test]
fn test_color_canonical_form_property() {
    use pagemark::{RawColor, RawComponent};
    use regex::Regex;

    let canonical = Regex::new(r"^(transparent|#[0-9A-F]{6})$").unwrap();

    let inputs: Vec<Option<RawColor>> = vec![
        None,
        Some(RawColor::Scalar(-7)),
        Some(RawColor::Scalar(i64::MAX)),
        Some(RawColor::Components(vec![])),
        Some(RawColor::Components(vec![RawComponent::Float(0.5)])),
        Some(RawColor::Components(vec![
            RawComponent::Float(0.25),
            RawComponent::Float(0.5),
            RawComponent::Float(0.75),
        ])),
        Some(RawColor::Components(vec![
            RawComponent::Int(300),
            RawComponent::Int(-300),
            RawComponent::Int(128),
        ])),
        Some(RawColor::Components(vec![
            RawComponent::Float(f64::NAN),
            RawComponent::Float(f64::INFINITY),
            RawComponent::Float(f64::NEG_INFINITY),
        ])),
        Some(RawColor::Components(vec![
            RawComponent::Float(1.0),
            RawComponent::Float(1.0),
            RawComponent::Float(1.0),
            RawComponent::Int(0),
        ])),
    ];

    for input in &inputs {
        let resolved = Color::resolve(input.as_ref());
        let rendered = resolved.to_string();
        assert!(
            canonical.is_match(&rendered),
            "non-canonical color {:?} from {:?}",
            rendered,
            input
        );
        // Purity: same input, same output
        assert_eq!(resolved, Color::resolve(input.as_ref()));
    }
}
