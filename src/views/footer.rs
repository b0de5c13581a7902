use chrono::Datelike;
use dioxus::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn Footer() -> Element {
    let year = use_hook(|| chrono::Local::now().year());

    rsx! {
        footer { class: "footer",
            div { class: "container footer-inner",
                span { "© {year} {PROFILE.name}" }
                a { class: "link", href: "#top", "Back to top" }
            }
        }
    }
}
