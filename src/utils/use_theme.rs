use std::rc::Rc;

use dioxus::prelude::*;

use crate::utils::{ ThemeController, ThemeState };

/// Owns the page theme for the app root and shares it as context.
///
/// The stored preference is read once after mount; every later change
/// (including that first read) is pushed to the document and storage by the
/// second effect, which `apply_theme` ignores until the read has happened.
pub fn use_theme_provider(make_controller: fn() -> ThemeController) -> Signal<ThemeState> {
    let controller = use_hook(|| Rc::new(make_controller()));
    let mut theme = use_signal(ThemeState::provisional);
    use_context_provider(|| theme);

    let init = controller.clone();
    use_effect(move || {
        if !theme.peek().is_initialized() {
            theme.set(init.initialize());
        }
    });

    use_effect(move || controller.apply_theme(theme()));

    theme
}
