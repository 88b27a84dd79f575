//! Logo data types.
pub mod logo;
pub mod settings;
pub mod svg;
pub mod theme;
pub mod view_box;

// Re-exports
pub use logo::{create_logo_variant, ColorMode, LogoDescriptor, LogoVariant, LogoWidth};
pub use settings::LogoSettings;
pub use svg::{SvgElement, SvgFragment, SvgNode};
pub use theme::Theme;
pub use view_box::ViewBox;
