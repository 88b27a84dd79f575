//! Logo variants and descriptors.
use super::svg::SvgFragment;
use super::view_box::ViewBox;
use crate::{catalog, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ******************
// *** Color Mode ***
// ******************

/// How a logo's fill is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// Fill with the theme's logo color.
    ThemeColored,

    /// Keep the artwork's own colors.
    #[default]
    Preserved,
}

impl ColorMode {
    pub fn use_theme_color(&self) -> bool {
        matches!(self, Self::ThemeColored)
    }
}

impl From<bool> for ColorMode {
    fn from(use_theme_color: bool) -> Self {
        if use_theme_color {
            Self::ThemeColored
        } else {
            Self::Preserved
        }
    }
}

// ********************
// *** Logo Variant ***
// ********************

/// Built-in logos.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoVariant {
    Minio,

    #[default]
    Custom,

    Demo,
}

impl LogoVariant {
    pub const ALL: [Self; 3] = [Self::Minio, Self::Custom, Self::Demo];

    /// Catalog key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minio => "minio",
            Self::Custom => "custom",
            Self::Demo => "demo",
        }
    }

    /// Built-in descriptor of the variant.
    pub fn descriptor(&self) -> &'static LogoDescriptor {
        catalog::builtin(*self)
    }
}

impl FromStr for LogoVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| Error::unknown_variant(s))
    }
}

impl fmt::Display for LogoVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ***********************
// *** Logo Descriptor ***
// ***********************

/// Artwork and color policy of a logo.
#[derive(Clone, Debug, PartialEq)]
pub struct LogoDescriptor {
    view_box: ViewBox,
    color_mode: ColorMode,
    content: SvgFragment,
}

impl LogoDescriptor {
    pub fn new(content: SvgFragment, view_box: ViewBox, color_mode: ColorMode) -> Self {
        Self {
            view_box,
            color_mode,
            content,
        }
    }

    /// Creates a descriptor from the inner markup of an `<svg>` element.
    ///
    /// # Arguments
    /// 1. Everything between `<svg>` and `</svg>`.
    /// 2. The `viewBox` of the source `<svg>`, e.g. `"0 0 375 112.5"`.
    /// 3. Whether the theme color replaces the artwork's colors.
    ///
    /// # Errors
    /// + [`Error::InvalidMarkup`] if the markup is not well-formed.
    /// + [`Error::InvalidViewBox`] if the view box is malformed.
    ///
    /// # Examples
    /// ```
    /// use themed_logo_ui::LogoDescriptor;
    ///
    /// let logo = LogoDescriptor::from_markup(
    ///     r##"<path fill="#FF5733" d="M10,10 L50,10 L50,50 L10,50 Z"/>
    ///     <circle fill="#33FF57" cx="30" cy="30" r="15"/>"##,
    ///     "0 0 60 60",
    ///     false,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!("0 0 60 60", logo.view_box().as_str());
    /// ```
    pub fn from_markup(
        markup: impl Into<String>,
        view_box: impl Into<String>,
        use_theme_color: bool,
    ) -> Result<Self> {
        let view_box = ViewBox::parse(view_box)?;
        let content = SvgFragment::parse(markup)?;
        Ok(Self::new(content, view_box, use_theme_color.into()))
    }

    pub fn view_box(&self) -> &ViewBox {
        &self.view_box
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn use_theme_color(&self) -> bool {
        self.color_mode.use_theme_color()
    }

    pub fn content(&self) -> &SvgFragment {
        &self.content
    }
}

/// Creates a logo that keeps its own colors.
/// Shorthand for [`LogoDescriptor::from_markup`] with `use_theme_color` unset.
pub fn create_logo_variant(
    markup: impl Into<String>,
    view_box: impl Into<String>,
) -> Result<LogoDescriptor> {
    LogoDescriptor::from_markup(markup, view_box, false)
}

// ******************
// *** Logo Width ***
// ******************

/// Rendered width of a logo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogoWidth {
    /// User units, e.g. `120`.
    Number(f64),

    /// CSS length, e.g. `"8rem"` or `"100%"`.
    Length(String),
}

impl From<u32> for LogoWidth {
    fn from(width: u32) -> Self {
        Self::Number(width.into())
    }
}

impl From<f64> for LogoWidth {
    fn from(width: f64) -> Self {
        Self::Number(width)
    }
}

impl From<&str> for LogoWidth {
    fn from(width: &str) -> Self {
        Self::Length(width.to_string())
    }
}

impl From<String> for LogoWidth {
    fn from(width: String) -> Self {
        Self::Length(width)
    }
}

impl fmt::Display for LogoWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(width) => write!(f, "{width}"),
            Self::Length(width) => f.write_str(width),
        }
    }
}

#[cfg(test)]
#[path = "./logo_test.rs"]
mod logo_test;
