//! # Themed Logo UI
//!
//! Renders the predefined logo artwork as SVG, optionally filled with a theme color.
pub mod catalog;
pub mod components;
pub mod constants;
pub mod error;
pub mod render;
pub mod types;

// Re-exports
pub use catalog::Catalog;
pub use components::ThemedLogo;
pub use error::{Error, Result};
pub use render::{render, render_descriptor, render_key, FillStrategy, RenderOptions};
pub use types::{ColorMode, LogoDescriptor, LogoSettings, LogoVariant, LogoWidth, Theme};
