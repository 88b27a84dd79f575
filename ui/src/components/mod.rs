//! UI Components
pub mod themed_logo;

// Re-exports
pub use themed_logo::{ThemedLogo, ThemedLogoProps};
