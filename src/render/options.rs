//! Rendering options and configuration.

/// Options for rendering a page layout.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Scale factor from page-space units to CSS pixels
    pub scale: f64,

    /// Page rendering mode
    pub mode: PageMode,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scale factor.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the page rendering mode.
    pub fn with_mode(mut self, mode: PageMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            mode: PageMode::Absolute,
        }
    }
}

/// How page primitives are laid out in the output markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageMode {
    /// Every primitive becomes an absolutely positioned box anchored at the
    /// page's top-left origin; pixel-faithful
    #[default]
    Absolute,

    /// Lossy reflow fallback: only non-blank text, as flowed paragraph
    /// blocks; shapes and images are discarded
    Semantic,
}
