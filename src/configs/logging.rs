use std::str::FromStr;

pub const LOG_LEVEL_VAR: &str = "PORTFOLIO_LOG";

const DEFAULT_LEVEL: log::Level = log::Level::Info;

/// Log level picked at startup, before any logger exists.
#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    pub level: log::Level,
    /// A configured value that did not parse, kept so it can be reported once
    /// the logger is up.
    pub rejected: Option<String>,
}

impl LogSettings {
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Self { level: DEFAULT_LEVEL, rejected: None },
            Some(value) =>
                match log::Level::from_str(value) {
                    Ok(level) => Self { level, rejected: None },
                    Err(_) => Self { level: DEFAULT_LEVEL, rejected: Some(value.to_string()) },
                }
        }
    }

    /// Native builds read the environment (after `.env` is loaded); wasm has
    /// no environment, so the value is baked in at compile time.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let raw = std::env::var(LOG_LEVEL_VAR).ok();
            Self::resolve(raw.as_deref())
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::resolve(option_env!("PORTFOLIO_LOG"))
        }
    }

    pub fn report(&self) {
        if let Some(value) = &self.rejected {
            log::warn!("{}={:?} is not a log level, using {}", LOG_LEVEL_VAR, value, self.level);
        }
        log::debug!("Logging at {}", self.level);
    }
}
