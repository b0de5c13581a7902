#[cfg(target_arch = "wasm32")]
mod browser;
mod structured_data;
mod theme_controller;
mod theme_state;
mod use_theme;

pub use structured_data::{ person_schema, script_payload, PersonSchema };
pub use use_theme::use_theme_provider;
pub use theme_controller::{ PreferenceStore, PresentationMarker, ThemeController };
pub use theme_state::{ Theme, ThemeState };
