mod logging;
mod theme;

pub use logging::LogSettings;
pub use theme::{ THEME_ATTRIBUTE, THEME_STORAGE_KEY };
