//! Border declaration synthesis from stroke color and thickness.

use super::{format_px, Color};

/// Luminance threshold above which a stroke renders dotted. Near-white
/// hairline rules are a common PDF table artifact; rendering them dotted
/// keeps dark grid lines visible without letting the artifacts dominate.
const DOTTED_LUMINANCE: f64 = 230.0;

/// Clamp bounds for mapped stroke thickness, in CSS pixels.
const MIN_THICKNESS: f64 = 0.2;
const MAX_THICKNESS: f64 = 3.0;

/// Fallback thickness for strokes reported without a width.
const DEFAULT_THICKNESS: f64 = 0.5;

/// Map a page-space stroke thickness to CSS pixels.
///
/// A missing or zero thickness maps to 0.5 directly, skipping the clamp;
/// everything else goes through `thickness * scale * 0.75` clamped to
/// 0.2..=3.0 so hairlines stay visible and heavy strokes stay subdued.
pub fn css_thickness(thickness: f64, scale: f64) -> f64 {
    if thickness == 0.0 {
        return DEFAULT_THICKNESS;
    }
    (thickness * scale * 0.75).clamp(MIN_THICKNESS, MAX_THICKNESS)
}

/// Derive a CSS border declaration from a stroke color and raw thickness.
///
/// A transparent stroke short-circuits to `none`. Otherwise the style is
/// `solid` for strokes with luminance at most 230 and `dotted` above, and
/// the result reads `<thickness>px <style> <hex>`. Pure; never fails.
pub fn border_declaration(stroke: &Color, thickness: f64, scale: f64) -> String {
    if stroke.is_transparent() {
        return "none".to_string();
    }

    let px = css_thickness(thickness, scale);
    let style = if stroke.luminance() <= DOTTED_LUMINANCE {
        "solid"
    } else {
        "dotted"
    };

    format!("{}px {} {}", format_px(px), style, stroke)
}
