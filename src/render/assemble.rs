//! Document assembly: per-unit fragments into a complete response payload.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Document, Sheet};

use super::{PageRenderer, RenderOptions, SheetRenderer};

/// The assembled markup payload.
///
/// `assets` is reserved for a future externalized-asset protocol; the
/// current design always inlines images and leaves it empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HtmlOutput {
    /// Complete wrapped document; set on the page-layout path only
    pub full_document: Option<String>,

    /// Unwrapped markup fragment
    pub html: String,

    /// Stylesheet text accompanying the fragment
    pub css: String,

    /// Externalized asset descriptors (reserved, always empty)
    pub assets: Vec<Asset>,

    /// Non-fatal warnings gathered during rendering
    pub warnings: Vec<String>,
}

/// Descriptor for an externalized asset (reserved).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Asset name, unique within one conversion
    pub name: String,

    /// MIME type
    pub mime_type: String,

    /// Raw payload
    #[serde(skip_serializing, default)]
    pub data: Vec<u8>,
}

/// Render every page of an extracted document and wrap the result.
///
/// Fragments and style fragments are concatenated in page order. Style
/// fragments are not deduplicated; the repeated page-class rules are
/// harmless because CSS rule repetition is idempotent.
pub fn render_document(doc: &Document, options: &RenderOptions) -> Result<HtmlOutput> {
    let renderer = PageRenderer::new(options.clone());
    let mut warnings = Vec::new();
    let mut fragments = Vec::with_capacity(doc.pages.len());
    let mut styles = Vec::with_capacity(doc.pages.len());

    for (index, page) in doc.pages.iter().enumerate() {
        let (html, css) = renderer.render_page(page, index + 1, &mut warnings);
        fragments.push(html);
        styles.push(css);
    }

    let html = fragments.join("\n");
    let css = styles.join("\n");
    let full_document = wrap_document(&html, &css);

    Ok(HtmlOutput {
        full_document: Some(full_document),
        html,
        css,
        assets: Vec::new(),
        warnings,
    })
}

/// Render a spreadsheet grid. The sheet path returns only the fragment and
/// stylesheet, never a wrapped document.
pub fn render_sheet(sheet: &Sheet) -> Result<HtmlOutput> {
    let (html, css) = SheetRenderer::new(sheet).render();

    Ok(HtmlOutput {
        full_document: None,
        html,
        css: css.to_string(),
        assets: Vec::new(),
        warnings: Vec::new(),
    })
}

/// Wrap a markup fragment and stylesheet in a minimal document shell.
pub fn wrap_document(html: &str, css: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title></title>\n\
         <style>\n{}\n</style>\n\
         </head>\n\
         <body>\n{}\n</body>\n\
         </html>\n",
        css, html
    )
}
