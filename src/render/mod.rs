//! Rendering module: layout model to HTML fragments and stylesheet text.

mod assemble;
mod options;
mod page;
mod table;

pub use assemble::{render_document, render_sheet, wrap_document, Asset, HtmlOutput};
pub use options::{PageMode, RenderOptions};
pub use page::PageRenderer;
pub use table::SheetRenderer;
