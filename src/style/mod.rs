//! Pure style helpers: color normalization and border synthesis.

mod border;
mod color;

pub use border::{border_declaration, css_thickness};
pub use color::{Color, RawColor, RawComponent};

/// Format a pixel quantity for a CSS declaration: round to two decimals and
/// drop the fraction when it is whole, so `20 - 12*0.8` prints as `10.4`
/// rather than a float-noise tail.
pub(crate) fn format_px(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}
