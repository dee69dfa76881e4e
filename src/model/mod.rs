//! Layout model types.
//!
//! This module defines the intermediate representation produced by an
//! external document extractor (PDF page primitives or a spreadsheet grid)
//! and consumed exactly once by the renderers. The model is serde-backed so
//! it can cross a process boundary as JSON; it is never mutated after
//! construction.

mod document;
mod element;
mod sheet;

pub use document::{Document, Page};
pub use element::{BBox, Element, Font};
pub use sheet::{Cell, CellAlignment, CellBorders, CellFont, MergeRegion, Sheet, SheetCell};
