//! Spreadsheet grid types.

use crate::style::Color;
use serde::{Deserialize, Serialize};

/// An extracted spreadsheet grid with merged regions and cell styling.
///
/// Coordinates are 1-indexed, matching the spreadsheet convention. Cells
/// absent from `cells` render as empty unstyled cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sheet {
    /// Column widths in spreadsheet width units, in column order
    pub columns: Vec<f64>,

    /// Number of rows (1..=rows are rendered)
    pub rows: u32,

    /// Populated cells
    pub cells: Vec<SheetCell>,

    /// Merged regions; registration order decides precedence on overlap
    #[serde(default)]
    pub merges: Vec<MergeRegion>,
}

impl Sheet {
    /// Create a sheet with the given column widths and row count.
    pub fn new(columns: Vec<f64>, rows: u32) -> Self {
        Self {
            columns,
            rows,
            cells: Vec::new(),
            merges: Vec::new(),
        }
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Add a cell at a 1-indexed position.
    pub fn set_cell(&mut self, row: u32, col: u32, cell: Cell) {
        self.cells.push(SheetCell { row, col, cell });
    }

    /// Register a merge region.
    pub fn add_merge(&mut self, merge: MergeRegion) {
        self.merges.push(merge);
    }
}

/// A cell together with its 1-indexed grid position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetCell {
    /// Row (1-indexed)
    pub row: u32,

    /// Column (1-indexed)
    pub col: u32,

    /// Cell value and styling
    pub cell: Cell,
}

/// A single spreadsheet cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Display text; empty string for blank cells
    #[serde(default)]
    pub value: String,

    /// Background fill
    #[serde(default)]
    pub fill: Option<Color>,

    /// Font styling
    #[serde(default)]
    pub font: Option<CellFont>,

    /// Alignment
    #[serde(default)]
    pub alignment: Option<CellAlignment>,

    /// Per-edge border presence
    #[serde(default)]
    pub borders: CellBorders,
}

impl Cell {
    /// Create a cell holding plain text.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// Set the fill color and return self.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Set the font and return self.
    pub fn with_font(mut self, font: CellFont) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the alignment and return self.
    pub fn with_alignment(mut self, alignment: CellAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set the borders and return self.
    pub fn with_borders(mut self, borders: CellBorders) -> Self {
        self.borders = borders;
        self
    }
}

/// Font styling for a cell. Every field independently optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CellFont {
    /// Text color
    #[serde(default)]
    pub color: Option<Color>,

    /// Bold flag
    #[serde(default)]
    pub bold: bool,

    /// Font size in points
    #[serde(default)]
    pub size: Option<f64>,

    /// Font family name
    #[serde(default)]
    pub name: Option<String>,
}

/// Cell alignment. Horizontal values pass through to `text-align`;
/// vertical values map `center` to `middle` and pass the rest through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CellAlignment {
    #[serde(default)]
    pub horizontal: Option<String>,

    #[serde(default)]
    pub vertical: Option<String>,

    #[serde(default)]
    pub wrap_text: bool,
}

/// Per-edge border presence flags. Edge style/width/color are not
/// distinguished; a present edge renders as a fixed 1px solid black rule.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CellBorders {
    #[serde(default)]
    pub left: bool,

    #[serde(default)]
    pub right: bool,

    #[serde(default)]
    pub top: bool,

    #[serde(default)]
    pub bottom: bool,
}

impl CellBorders {
    /// Borders on all four edges.
    pub fn all() -> Self {
        Self {
            left: true,
            right: true,
            top: true,
            bottom: true,
        }
    }

    /// Check whether any edge is present.
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// A rectangular group of cells rendered as one cell.
///
/// `(row, col)` is the anchor (top-left member); spans are at least 1. The
/// other cells in the region are not independently rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRegion {
    /// Anchor row (1-indexed)
    pub row: u32,

    /// Anchor column (1-indexed)
    pub col: u32,

    /// Rows spanned (>= 1)
    pub rowspan: u32,

    /// Columns spanned (>= 1)
    pub colspan: u32,
}

impl MergeRegion {
    /// Create a new merge region anchored at `(row, col)`.
    pub fn new(row: u32, col: u32, rowspan: u32, colspan: u32) -> Self {
        Self {
            row,
            col,
            rowspan: rowspan.max(1),
            colspan: colspan.max(1),
        }
    }

    /// Check whether the region covers a 1-indexed position.
    pub fn covers(&self, row: u32, col: u32) -> bool {
        row >= self.row
            && row < self.row + self.rowspan
            && col >= self.col
            && col < self.col + self.colspan
    }

    /// Check whether a position is the region's anchor.
    pub fn is_anchor(&self, row: u32, col: u32) -> bool {
        self.row == row && self.col == col
    }
}
