//! Constant values.

/// Fill used for theme colored logos when the theme does not set `logoColor`.
pub const DEFAULT_LOGO_COLOR: &str = "#C51C3F";

/// SVG XML namespace.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// XLink namespace, used by `xlink:href` references.
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
