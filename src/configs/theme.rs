/// localStorage key holding the persisted preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on the document element that the stylesheet keys the palette off.
pub const THEME_ATTRIBUTE: &str = "data-theme";
