//! # pagemark
//!
//! Visually faithful HTML synthesis from extracted document layouts.
//!
//! This library takes a structured description of a visual document — a
//! page of positioned text/shape/image primitives extracted from a PDF, or
//! a spreadsheet grid with merged regions and cell styling — and renders it
//! into an HTML fragment plus stylesheet text. Binary decoding of PDF/XLSX
//! files is an external collaborator's job; the serde-backed model in
//! [`model`] is the sole contract with it.
//!
//! ## Quick Start
//!
//! ```
//! use pagemark::{render_document, Document, Page, RenderOptions};
//!
//! fn main() -> pagemark::Result<()> {
//!     let mut doc = Document::new();
//!     doc.add_page(Page::letter());
//!
//!     let output = render_document(&doc, &RenderOptions::default())?;
//!     println!("{}", output.full_document.unwrap());
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! - **Pure transform**: no I/O, no shared state, no concurrency; rendering
//!   the same model twice yields byte-identical output.
//! - **Degrade locally**: malformed colors resolve to safe defaults,
//!   byteless images are omitted, unsupported primitives become non-fatal
//!   warnings; nothing in the core fails a whole conversion.
//! - **Explicit stacking**: elements are emitted in extraction order, but
//!   visual order is guaranteed solely by per-kind z-index values.

pub mod error;
pub mod model;
pub mod render;
pub mod style;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    BBox, Cell, CellAlignment, CellBorders, CellFont, Document, Element, Font, MergeRegion, Page,
    Sheet, SheetCell,
};
pub use render::{
    render_document, render_sheet, wrap_document, Asset, HtmlOutput, PageMode, PageRenderer,
    RenderOptions, SheetRenderer,
};
pub use style::{border_declaration, css_thickness, Color, RawColor, RawComponent};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_start_path() {
        let mut doc = Document::new();
        doc.add_page(Page::letter());

        let output = render_document(&doc, &RenderOptions::default()).unwrap();
        assert!(output.full_document.is_some());
        assert!(output.html.contains("width:612px;height:792px;"));
    }

    #[test]
    fn test_sheet_path() {
        let mut sheet = Sheet::new(vec![10.0, 10.0], 1);
        sheet.set_cell(1, 1, Cell::text("hello"));

        let output = render_sheet(&sheet).unwrap();
        assert!(output.html.contains(">hello</td>"));
    }
}
