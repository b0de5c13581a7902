use dioxus::prelude::*;

use crate::content::{ CONTACTS, PROFILE };
use crate::utils::{ person_schema, script_payload };
use crate::views::{ About, Contact, Footer, Hero, Projects, Resume };

const DESCRIPTION: &str =
    "A modern single-page portfolio with a floating navbar, theme toggle, and smooth scrolling.";
const FONTS_CSS: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800&display=swap";

#[component]
pub fn Home() -> Element {
    let structured_data = use_hook(|| {
        script_payload(&person_schema(&PROFILE, CONTACTS))
            .map_err(|e| log::warn!("Skipping structured data: {}", e))
            .ok()
    });

    rsx! {
        document::Title { "{PROFILE.name} — Portfolio" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "description", content: DESCRIPTION }
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com", crossorigin: "" }
        document::Link { rel: "stylesheet", href: FONTS_CSS }
        if let Some(payload) = structured_data {
            script { r#type: "application/ld+json", dangerous_inner_html: payload }
        }

        Hero {}
        About {}
        Projects {}
        Resume {}
        Contact {}
        Footer {}
    }
}
