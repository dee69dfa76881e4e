//! Absolute-position and semantic page rendering.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use html_escape::encode_text;
use log::debug;

use crate::model::{BBox, Element, Font, Page};
use crate::style::{border_declaration, format_px, Color};

use super::{PageMode, RenderOptions};

/// Baseline correction applied to text tops: extractors report the span's
/// top edge while CSS positions the line box, so the box is nudged up by a
/// fixed fraction of the font size.
const BASELINE_FACTOR: f64 = 0.8;

/// Line-height multiplier for text spans.
const LINE_HEIGHT_FACTOR: f64 = 1.1;

/// Displayed-dimension cap for inline images, in CSS pixels. Keeps one
/// oversized decorative image from dominating the page.
const IMAGE_CAP_PX: f64 = 300.0;

/// Explicit paint priorities. Elements are emitted in extraction order;
/// visual stacking is guaranteed solely by these values.
const Z_RECT: u32 = 1;
const Z_IMAGE: u32 = 5;
const Z_TEXT: u32 = 10;

/// Fixed page-class rule; independent of page content.
const PAGE_CSS: &str = ".page{background:white;box-shadow:0 0 8px rgba(0,0,0,.06);margin:16px auto;}";

/// Fixed semantic-mode rules.
const SEMANTIC_CSS: &str =
    ".page-semantic{max-width:900px;margin:24px auto;padding:24px;background:#fff} .t{margin:0 0 4px;}";

/// Renders one page's ordered primitive list into positioned markup.
pub struct PageRenderer {
    options: RenderOptions,
}

impl PageRenderer {
    /// Create a page renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render one page into `(markup fragment, style fragment)`.
    ///
    /// `page_number` is 1-indexed and only used to label warnings. Dropped
    /// primitives are reported through `warnings`; nothing here fails.
    pub fn render_page(
        &self,
        page: &Page,
        page_number: usize,
        warnings: &mut Vec<String>,
    ) -> (String, &'static str) {
        match self.options.mode {
            PageMode::Absolute => self.render_absolute(page, page_number, warnings),
            PageMode::Semantic => self.render_semantic(page),
        }
    }

    fn render_absolute(
        &self,
        page: &Page,
        page_number: usize,
        warnings: &mut Vec<String>,
    ) -> (String, &'static str) {
        let scale = self.options.scale;
        let mut html = vec![format!(
            "<div class=\"page\" style=\"position:relative;width:{}px;height:{}px;\">",
            format_px(page.width * scale),
            format_px(page.height * scale)
        )];

        for element in &page.elements {
            match element {
                Element::Text {
                    bbox,
                    text,
                    font,
                    color,
                } => html.push(self.text_div(bbox, text, font, color)),
                Element::Rect {
                    bbox,
                    stroke,
                    fill,
                    thickness,
                } => html.push(self.rect_div(bbox, stroke, fill, *thickness)),
                Element::Image { bbox, data } => {
                    // A byteless image is an extraction failure; skip it and
                    // let the rest of the page render
                    if let Some(data) = data {
                        html.push(self.image_tag(bbox, data));
                    } else {
                        debug!("page {}: image without bitmap bytes skipped", page_number);
                    }
                }
                Element::Unsupported { kind } => {
                    warnings.push(format!(
                        "page {}: unsupported primitive '{}' dropped",
                        page_number, kind
                    ));
                }
            }
        }

        html.push("</div>".to_string());
        (html.join("\n"), PAGE_CSS)
    }

    fn text_div(&self, bbox: &BBox, text: &str, font: &Font, color: &Color) -> String {
        let scale = self.options.scale;
        let size = font.size * scale;
        let weight = if font.bold { "font-weight:bold;" } else { "" };

        let style = format!(
            "position:absolute;left:{}px;top:{}px;font-family:{};font-size:{}px;{}color:{};line-height:{}px;white-space:pre;z-index:{};",
            format_px(bbox.x0 * scale),
            format_px(bbox.y0 * scale - size * BASELINE_FACTOR),
            font.name,
            format_px(size),
            weight,
            color,
            format_px(size * LINE_HEIGHT_FACTOR),
            Z_TEXT,
        );

        format!("<div style=\"{}\">{}</div>", style, encode_text(text))
    }

    fn rect_div(&self, bbox: &BBox, stroke: &Color, fill: &Color, thickness: f64) -> String {
        let scale = self.options.scale;
        let mut style = format!(
            "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;background:{};z-index:{};",
            format_px(bbox.x0 * scale),
            format_px(bbox.y0 * scale),
            format_px(bbox.width() * scale),
            format_px(bbox.height() * scale),
            fill,
            Z_RECT,
        );

        let border = border_declaration(stroke, thickness, scale);
        if border != "none" {
            style.push_str(&format!("border:{};", border));
        }

        format!("<div style=\"{}\"></div>", style)
    }

    fn image_tag(&self, bbox: &BBox, data: &[u8]) -> String {
        let scale = self.options.scale;
        let width = bbox.width() * scale;
        let height = bbox.height() * scale;

        let mut style = format!(
            "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;object-fit:contain;z-index:{};",
            format_px(bbox.x0 * scale),
            format_px(bbox.y0 * scale),
            format_px(width),
            format_px(height),
            Z_IMAGE,
        );

        // Cap the displayed box; the top-left position is unchanged
        if width > IMAGE_CAP_PX || height > IMAGE_CAP_PX {
            style.push_str("max-width:300px;max-height:300px;");
        }

        format!(
            "<img style=\"{}\" src=\"data:{};base64,{}\"/>",
            style,
            sniff_mime(data),
            BASE64.encode(data)
        )
    }

    fn render_semantic(&self, page: &Page) -> (String, &'static str) {
        let mut lines = vec!["<section class=\"page-semantic\">".to_string()];

        for element in &page.elements {
            if let Element::Text { text, .. } = element {
                if !text.trim().is_empty() {
                    lines.push(format!("<p class=\"t\">{}</p>", encode_text(text)));
                }
            }
        }

        lines.push("</section>".to_string());
        (lines.join("\n"), SEMANTIC_CSS)
    }
}

/// Detect an image MIME type from magic bytes; extractors emit PNG when
/// re-encoding, so that is the default for unrecognized payloads.
fn sniff_mime(data: &[u8]) -> &'static str {
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        "image/gif"
    } else if data.starts_with(b"BM") {
        "image/bmp"
    } else if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "image/png"
    }
}
