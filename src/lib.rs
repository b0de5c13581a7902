mod views;
mod components;
mod content;
mod utils;
mod routes;
mod configs;
mod error;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::{ LogSettings, THEME_ATTRIBUTE, THEME_STORAGE_KEY };
pub use crate::error::ThemeError;
