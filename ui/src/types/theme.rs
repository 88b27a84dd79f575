//! Theme values read by logos.
use crate::Result;
use serde::{Deserialize, Serialize};

/// Theme settings used when rendering logos.
/// Serialized with camel case keys, e.g. `{ "logoColor": "#C51C3F" }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    logo_color: Option<String>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logo_color(color: impl Into<String>) -> Self {
        Self {
            logo_color: Some(color.into()),
        }
    }

    /// Fill for theme colored logos, if set.
    pub fn logo_color(&self) -> Option<&str> {
        self.logo_color.as_deref()
    }

    pub fn set_logo_color(&mut self, color: Option<String>) {
        self.logo_color = color;
    }

    /// Parses a theme from JSON.
    /// Unknown keys are ignored so full theme documents can be passed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
#[path = "./theme_test.rs"]
mod theme_test;
