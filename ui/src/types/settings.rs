//! Logo settings.
use super::{LogoVariant, LogoWidth, SvgElement, Theme};
use crate::render::{render, RenderOptions};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Which logo to show and how, as stored in an application's settings.
///
/// ```json
/// { "variant": "minio", "width": 120, "theme": { "logoColor": "#081C42" } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogoSettings {
    #[serde(default)]
    pub variant: LogoVariant,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<LogoWidth>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl LogoSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width.clone(),
            theme: self.theme.clone(),
        }
    }

    /// Renders the configured logo.
    pub fn render(&self) -> SvgElement {
        render(self.variant, &self.render_options())
    }
}

#[cfg(test)]
#[path = "./settings_test.rs"]
mod settings_test;
