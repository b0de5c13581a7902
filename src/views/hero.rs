use dioxus::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn Hero() -> Element {
    rsx! {
        header { id: "top", class: "hero",
            div { class: "hero-content",
                p { class: "eyebrow", "Hello, I’m" }
                h1 { class: "title", "{PROFILE.name}" }
                p { class: "subtitle", "{PROFILE.role}" }
                div { class: "cta-row",
                    a { href: "#projects", class: "btn primary", "View Projects" }
                    a { href: "#contact", class: "btn ghost", "Get in Touch" }
                }
            }
            div { class: "backdrop-gradients", "aria-hidden": "true",
                span { class: "blob b1" }
                span { class: "blob b2" }
                span { class: "blob b3" }
            }
        }
    }
}
