use dioxus::prelude::*;

#[component]
pub fn PageNotFound(route: Vec<String>) -> Element {
    log::debug!("No page at /{}", route.join("/"));

    rsx! {
        section { class: "section",
            div { class: "container",
                h2 { class: "section-title", "Page not found" }
                p { class: "lead", "There is nothing at this address." }
                a { class: "btn primary", href: "/", "Back to the portfolio" }
            }
        }
    }
}
