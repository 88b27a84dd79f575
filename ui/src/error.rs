//! Errors and results.
use std::result::Result as StdResult;
use thiserror::Error;

// *************
// *** Error ***
// *************

#[derive(Error, Debug)]
pub enum Error {
    /// The requested key is not in the catalog.
    #[error("logo variant `{0}` does not exist")]
    UnknownVariant(String),

    /// Logo markup is not a well-formed SVG fragment.
    #[error("invalid logo markup: {0}")]
    InvalidMarkup(String),

    /// `viewBox` is not four numbers with a non-negative size.
    #[error("invalid view box `{0}`")]
    InvalidViewBox(String),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn unknown_variant(key: impl Into<String>) -> Self {
        Self::UnknownVariant(key.into())
    }

    pub fn invalid_markup(msg: impl Into<String>) -> Self {
        Self::InvalidMarkup(msg.into())
    }

    pub fn invalid_view_box(view_box: impl Into<String>) -> Self {
        Self::InvalidViewBox(view_box.into())
    }
}

// **************
// *** Result ***
// **************

pub type Result<T = ()> = StdResult<T, Error>;

#[cfg(test)]
#[path = "./error_test.rs"]
mod error_test;
