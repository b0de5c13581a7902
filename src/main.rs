use dioxus::prelude::*;
use portfolio::{ use_theme_provider, LogSettings, Route, ThemeController };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        let settings = LogSettings::from_env();
        env_logger::Builder::new()
            .filter_level(settings.level.to_level_filter())
            .parse_default_env()
            .init();
        settings.report();
    }

    #[cfg(target_arch = "wasm32")]
    {
        let settings = LogSettings::from_env();
        if console_log::init_with_level(settings.level).is_ok() {
            settings.report();
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_theme_provider(ThemeController::from_environment);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
