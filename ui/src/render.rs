//! Logo rendering.
use crate::catalog::Catalog;
use crate::constants::{DEFAULT_LOGO_COLOR, SVG_NAMESPACE};
use crate::types::{ColorMode, LogoDescriptor, LogoVariant, LogoWidth, SvgElement, Theme};
use crate::Result;

// *********************
// *** Fill Strategy ***
// *********************

/// Sets the fill of a rendered logo.
pub trait FillStrategy {
    /// Applies the fill to the root `<svg>` element.
    fn apply_fill(&self, root: SvgElement, theme: Option<&Theme>) -> SvgElement;
}

impl FillStrategy for ColorMode {
    fn apply_fill(&self, mut root: SvgElement, theme: Option<&Theme>) -> SvgElement {
        match self {
            Self::ThemeColored => {
                let fill = theme
                    .and_then(|theme| theme.logo_color())
                    .unwrap_or(DEFAULT_LOGO_COLOR);

                root.set_attribute("fill", fill);
                root
            }

            Self::Preserved => root,
        }
    }
}

// **************
// *** Render ***
// **************

/// Inputs to a render besides the logo.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderOptions {
    /// Width of the `<svg>`.
    /// Left unset when `None` so the container determines the size.
    pub width: Option<LogoWidth>,

    pub theme: Option<Theme>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: impl Into<LogoWidth>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }
}

/// Renders a built-in logo.
pub fn render(variant: LogoVariant, options: &RenderOptions) -> SvgElement {
    tracing::debug!(%variant);
    render_descriptor(variant.descriptor(), options)
}

/// Renders the logo stored under `key`.
///
/// # Errors
/// + [`Error::UnknownVariant`](crate::Error::UnknownVariant) if the key is not in the catalog.
pub fn render_key(catalog: &Catalog, key: &str, options: &RenderOptions) -> Result<SvgElement> {
    let logo = catalog.get(key)?;
    tracing::debug!(%key);
    Ok(render_descriptor(logo, options))
}

/// Renders a logo as an `<svg>` element.
pub fn render_descriptor(logo: &LogoDescriptor, options: &RenderOptions) -> SvgElement {
    let mut root = SvgElement::new("svg")
        .with_attribute("xmlns", SVG_NAMESPACE)
        .with_attribute("viewBox", logo.view_box().as_str());

    if let Some(width) = options.width.as_ref() {
        root.set_attribute("width", width.to_string());
    }

    root.push_child(logo.content().group().clone());
    logo.color_mode().apply_fill(root, options.theme.as_ref())
}

#[cfg(test)]
#[path = "./render_test.rs"]
mod render_test;
