use crate::configs::{ THEME_ATTRIBUTE, THEME_STORAGE_KEY };
use crate::error::ThemeError;
use crate::utils::{ Theme, ThemeState };

/// Key-value storage that outlives the page session.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The document-level attribute the stylesheet matches on.
pub trait PresentationMarker {
    fn mark(&self, attribute: &str, value: &str) -> Result<(), ThemeError>;
}

/// Keeps the theme in sync with storage and the document. Either
/// collaborator may be missing (native builds, SSR), in which case the
/// matching side of every operation is skipped.
pub struct ThemeController {
    store: Option<Box<dyn PreferenceStore>>,
    marker: Option<Box<dyn PresentationMarker>>,
}

impl ThemeController {
    pub fn new(
        store: Option<Box<dyn PreferenceStore>>,
        marker: Option<Box<dyn PresentationMarker>>
    ) -> Self {
        Self { store, marker }
    }

    /// No storage, no document.
    pub fn detached() -> Self {
        Self::new(None, None)
    }

    /// Binds to `localStorage` and the document element when running in a
    /// browser. Anything that cannot be reached is left out.
    pub fn from_environment() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            use crate::utils::browser::{ DocumentRoot, LocalStorage };

            let store = LocalStorage::open()
                .map_err(|e| log::debug!("Theme will not persist: {}", e))
                .ok()
                .map(|s| Box::new(s) as Box<dyn PreferenceStore>);
            let marker = DocumentRoot::open()
                .map_err(|e| log::debug!("Theme marker disabled: {}", e))
                .ok()
                .map(|m| Box::new(m) as Box<dyn PresentationMarker>);
            Self::new(store, marker)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::detached()
        }
    }

    /// Reads the persisted preference. Missing, unreadable and malformed
    /// values all resolve to the default theme.
    pub fn initialize(&self) -> ThemeState {
        let value = match self.stored_theme() {
            Ok(Some(theme)) => {
                log::debug!("Restored theme {}", theme);
                theme
            }
            Ok(None) => {
                log::debug!("No stored theme, using {}", Theme::default());
                Theme::default()
            }
            Err(e) => {
                log::debug!("Ignoring stored theme: {}", e);
                Theme::default()
            }
        };

        ThemeState::initialized(value)
    }

    fn stored_theme(&self) -> Result<Option<Theme>, ThemeError> {
        let Some(store) = &self.store else {
            return Ok(None);
        };

        store
            .load(THEME_STORAGE_KEY)?
            .map(|raw| raw.parse::<Theme>())
            .transpose()
    }

    /// Marks the document and persists the value. A provisional state is
    /// ignored so the default can never overwrite a preference that has not
    /// been read yet.
    pub fn apply_theme(&self, state: ThemeState) {
        if !state.is_initialized() {
            log::trace!("Skipping provisional theme {}", state.value());
            return;
        }

        let value = state.value().as_str();

        if let Some(marker) = &self.marker {
            if let Err(e) = marker.mark(THEME_ATTRIBUTE, value) {
                log::warn!("Failed to mark document with theme {}: {}", value, e);
            }
        }

        if let Some(store) = &self.store {
            if let Err(e) = store.save(THEME_STORAGE_KEY, value) {
                log::warn!("Failed to persist theme {}: {}", value, e);
            }
        }
    }

    pub fn toggle(state: ThemeState) -> ThemeState {
        state.toggled()
    }
}
