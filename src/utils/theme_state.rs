use std::fmt::{ Display, Formatter };
use std::str::FromStr;

use crate::error::ThemeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only the exact strings `"light"` and `"dark"` are themes.
impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::InvalidStoredValue(other.to_string())),
        }
    }
}

/// The page-wide theme. Starts provisional (light, not yet read from
/// storage); only `ThemeController::initialize` hands out an initialized
/// state, and nothing turns the flag back off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ThemeState {
    value: Theme,
    initialized: bool,
}

impl ThemeState {
    pub fn provisional() -> Self {
        Self::default()
    }

    pub(crate) fn initialized(value: Theme) -> Self {
        Self { value, initialized: true }
    }

    pub fn value(&self) -> Theme {
        self.value
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_dark(&self) -> bool {
        self.value.is_dark()
    }

    pub fn toggled(self) -> Self {
        Self { value: self.value.toggle(), ..self }
    }
}
