//! Merged-cell table reconstruction for spreadsheet grids.

use std::collections::HashMap;

use html_escape::encode_text;
use log::warn;

use crate::model::{Cell, MergeRegion, Sheet};

/// Spreadsheet width unit to CSS pixels.
const WIDTH_UNIT_OFFSET: f64 = 0.72;
const WIDTH_UNIT_FACTOR: f64 = 7.0;

/// Fixed sheet-class rule.
const SHEET_CSS: &str = ".sheet{border-collapse:collapse} .sheet td{padding:4px;border:1px solid #ddd}";

/// Renders a spreadsheet grid plus merge regions into one table.
pub struct SheetRenderer<'a> {
    sheet: &'a Sheet,
    cells: HashMap<(u32, u32), &'a Cell>,
    coverage: CoverageIndex,
}

impl<'a> SheetRenderer<'a> {
    /// Create a renderer for one sheet. Builds the merge coverage index up
    /// front so the per-cell walk stays O(1) per position.
    pub fn new(sheet: &'a Sheet) -> Self {
        let cells = sheet
            .cells
            .iter()
            .map(|sc| ((sc.row, sc.col), &sc.cell))
            .collect();

        Self {
            sheet,
            cells,
            coverage: CoverageIndex::build(&sheet.merges),
        }
    }

    /// Render the sheet into `(markup fragment, style fragment)`.
    pub fn render(&self) -> (String, &'static str) {
        let max_col = self.max_col();
        let mut html = vec!["<table class=\"sheet\">".to_string(), "<colgroup>".to_string()];

        for width in &self.sheet.columns {
            html.push(format!("<col style=\"width:{}px\">", column_px(*width)));
        }
        html.push("</colgroup>".to_string());

        for r in 1..=self.sheet.rows {
            html.push("<tr>".to_string());
            let mut c = 1u32;
            while c <= max_col {
                match self.coverage.region_at(r, c) {
                    // Covered by a merge but not its anchor: nothing here
                    Some(region) if !region.is_anchor(r, c) => {
                        c += 1;
                    }
                    Some(region) => {
                        html.push(self.cell_td(r, c, region.rowspan, region.colspan));
                        c += region.colspan;
                    }
                    None => {
                        html.push(self.cell_td(r, c, 1, 1));
                        c += 1;
                    }
                }
            }
            html.push("</tr>".to_string());
        }

        html.push("</table>".to_string());
        (html.join("\n"), SHEET_CSS)
    }

    fn max_col(&self) -> u32 {
        let from_cells = self
            .sheet
            .cells
            .iter()
            .map(|sc| sc.col)
            .max()
            .unwrap_or(0);
        (self.sheet.columns.len() as u32).max(from_cells)
    }

    fn cell_td(&self, row: u32, col: u32, rowspan: u32, colspan: u32) -> String {
        static EMPTY: Cell = Cell {
            value: String::new(),
            fill: None,
            font: None,
            alignment: None,
            borders: crate::model::CellBorders {
                left: false,
                right: false,
                top: false,
                bottom: false,
            },
        };

        let cell = self.cells.get(&(row, col)).copied().unwrap_or(&EMPTY);

        let mut attrs = Vec::new();
        if rowspan > 1 {
            attrs.push(format!("rowspan=\"{}\"", rowspan));
        }
        if colspan > 1 {
            attrs.push(format!("colspan=\"{}\"", colspan));
        }
        attrs.push(format!("style=\"{}\"", cell_style(cell)));

        format!(
            "<td {}>{}</td>",
            attrs.join(" "),
            encode_text(&cell.value)
        )
    }
}

/// Compose one style declaration from a cell's independently optional
/// styling pieces.
fn cell_style(cell: &Cell) -> String {
    let mut parts = Vec::new();

    if let Some(fill) = &cell.fill {
        parts.push(format!("background:{}", fill));
    }

    if let Some(font) = &cell.font {
        if let Some(color) = &font.color {
            parts.push(format!("color:{}", color));
        }
        if font.bold {
            parts.push("font-weight:bold".to_string());
        }
        if let Some(size) = font.size {
            parts.push(format!("font-size:{}px", size.trunc() as i64));
        }
        if let Some(name) = &font.name {
            parts.push(format!("font-family:'{}'", name));
        }
    }

    if let Some(alignment) = &cell.alignment {
        if let Some(horizontal) = &alignment.horizontal {
            parts.push(format!("text-align:{}", horizontal));
        }
        if let Some(vertical) = &alignment.vertical {
            let mapped = if vertical == "center" { "middle" } else { vertical };
            parts.push(format!("vertical-align:{}", mapped));
        }
        if alignment.wrap_text {
            parts.push("white-space:normal".to_string());
        }
    }

    // Edge style/width/color are not distinguished; any declared edge
    // renders as a fixed hairline
    for (present, edge) in [
        (cell.borders.left, "left"),
        (cell.borders.right, "right"),
        (cell.borders.top, "top"),
        (cell.borders.bottom, "bottom"),
    ] {
        if present {
            parts.push(format!("border-{}:1px solid #000", edge));
        }
    }

    parts.join(";")
}

/// Convert a spreadsheet column width unit to CSS pixels.
fn column_px(width: f64) -> i64 {
    ((width + WIDTH_UNIT_OFFSET) * WIDTH_UNIT_FACTOR).round() as i64
}

/// Precomputed merge coverage: every covered `(row, col)` maps to the
/// region that claims it. On overlap the first-registered region wins.
struct CoverageIndex {
    regions: Vec<MergeRegion>,
    covered: HashMap<(u32, u32), usize>,
}

impl CoverageIndex {
    fn build(merges: &[MergeRegion]) -> Self {
        use std::collections::hash_map::Entry;

        let mut covered = HashMap::new();

        for (id, merge) in merges.iter().enumerate() {
            let mut collided = false;
            for r in merge.row..merge.row + merge.rowspan {
                for c in merge.col..merge.col + merge.colspan {
                    match covered.entry((r, c)) {
                        Entry::Occupied(_) => collided = true,
                        Entry::Vacant(vacant) => {
                            vacant.insert(id);
                        }
                    }
                }
            }
            if collided {
                warn!(
                    "merge region at ({}, {}) overlaps an earlier region; earlier region wins",
                    merge.row, merge.col
                );
            }
        }

        Self {
            regions: merges.to_vec(),
            covered,
        }
    }

    fn region_at(&self, row: u32, col: u32) -> Option<&MergeRegion> {
        self.covered.get(&(row, col)).map(|id| &self.regions[*id])
    }
}
