use dioxus::prelude::*;

use crate::components::{ MoonIcon, SunIcon };
use crate::utils::{ ThemeController, ThemeState };

/// Flips the shared theme. The icon shows the active mode.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<ThemeState>>();
    let is_dark = theme.read().is_dark();

    rsx! {
        button {
            class: "theme-toggle",
            "aria-label": "Toggle theme",
            onclick: move |_| {
                let next = ThemeController::toggle(theme());
                theme.set(next);
            },
            if is_dark {
                MoonIcon {}
            } else {
                SunIcon {}
            }
        }
    }
}
