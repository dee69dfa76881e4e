//! Page primitives.

use crate::style::Color;
use serde::{Deserialize, Serialize};

/// Bounding box `(x0, y0, x1, y1)` in page-space coordinates.
///
/// The intended invariant is `x1 >= x0, y1 >= y0`, but extractors do not
/// enforce it; `width`/`height` clamp inverted boxes to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BBox {
    /// Create a new bounding box.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box width, clamped to zero for inverted boxes.
    pub fn width(&self) -> f64 {
        (self.x1 - self.x0).max(0.0)
    }

    /// Box height, clamped to zero for inverted boxes.
    pub fn height(&self) -> f64 {
        (self.y1 - self.y0).max(0.0)
    }
}

/// Font attributes attached to a text primitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Font {
    /// Font family name as reported by the extractor
    pub name: String,

    /// Font size in points (> 0)
    pub size: f64,

    /// Whether the face is bold
    #[serde(default)]
    pub bold: bool,
}

impl Font {
    /// Create a new font description.
    pub fn new(name: impl Into<String>, size: f64) -> Self {
        Self {
            name: name.into(),
            size,
            bold: false,
        }
    }

    /// Set the bold flag and return self.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// A page primitive.
///
/// An explicit tagged union validated at construction: a variant carries
/// exactly the fields its kind needs, so a "missing field for this variant"
/// defect cannot be represented.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A positioned text span
    Text {
        /// Bounding box in page space
        bbox: BBox,
        /// Span text, whitespace significant
        text: String,
        /// Font attributes
        font: Font,
        /// Resolved text color
        color: Color,
    },

    /// A rectangle or straightened line
    Rect {
        /// Bounding box in page space
        bbox: BBox,
        /// Resolved stroke color
        stroke: Color,
        /// Resolved fill color
        fill: Color,
        /// Stroke thickness in page-space units (>= 0)
        thickness: f64,
    },

    /// An embedded raster image
    Image {
        /// Bounding box in page space
        bbox: BBox,
        /// Raw bitmap bytes; `None` when extraction failed, in which case
        /// the renderer omits the element and renders the rest of the page
        #[serde(default)]
        data: Option<Vec<u8>>,
    },

    /// A primitive the extractor recognized but cannot express (curve,
    /// clipping path, ...). Renders nothing; surfaces a non-fatal warning.
    Unsupported {
        /// Extractor-reported primitive kind
        kind: String,
    },
}

impl Element {
    /// Create a text element.
    pub fn text(bbox: BBox, text: impl Into<String>, font: Font, color: Color) -> Self {
        Element::Text {
            bbox,
            text: text.into(),
            font,
            color,
        }
    }

    /// Create a rect element.
    pub fn rect(bbox: BBox, stroke: Color, fill: Color, thickness: f64) -> Self {
        Element::Rect {
            bbox,
            stroke,
            fill,
            thickness,
        }
    }

    /// Create an image element.
    pub fn image(bbox: BBox, data: Option<Vec<u8>>) -> Self {
        Element::Image { bbox, data }
    }

    /// Check if this element is a text span.
    pub fn is_text(&self) -> bool {
        matches!(self, Element::Text { .. })
    }

    /// Check if this element is an image.
    pub fn is_image(&self) -> bool {
        matches!(self, Element::Image { .. })
    }
}
