//! SVG `viewBox` attribute.
use crate::{Error, Result};
use std::fmt;
use std::result::Result as StdResult;
use std::str::FromStr;

/// A `viewBox` of the form `min-x min-y width height`.
///
/// The source text is kept so the rendered attribute matches the catalog entry exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewBox {
    source: String,
    min_x: f64,
    min_y: f64,
    width: f64,
    height: f64,
}

impl ViewBox {
    /// Parses a `viewBox` value.
    /// Numbers may be separated by whitespace, commas, or both.
    ///
    /// # Errors
    /// + [`Error::InvalidViewBox`] if the value does not hold exactly four finite numbers,
    /// or if the width or height is negative.
    pub fn parse(view_box: impl Into<String>) -> Result<Self> {
        let source = view_box.into();
        let values = source
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<f64>())
            .collect::<StdResult<Vec<_>, _>>()
            .map_err(|_| Error::invalid_view_box(source.as_str()))?;

        let [min_x, min_y, width, height] = values[..] else {
            return Err(Error::invalid_view_box(source));
        };

        if !values.iter().all(|value| value.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(Error::invalid_view_box(source));
        }

        Ok(Self {
            source,
            min_x,
            min_y,
            width,
            height,
        })
    }

    /// The value as originally written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Width over height.
    ///
    /// # Returns
    /// `None` if the height is zero.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.height == 0.0 {
            None
        } else {
            Some(self.width / self.height)
        }
    }
}

impl FromStr for ViewBox {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
#[path = "./view_box_test.rs"]
mod view_box_test;
