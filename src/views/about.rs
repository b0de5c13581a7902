use dioxus::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "section",
            div { class: "container",
                h2 { class: "section-title", "About Me" }
                p { class: "lead", "{PROFILE.summary}" }
                div { class: "grid two",
                    div { class: "card",
                        h3 { "Core Skills" }
                        ul { class: "pill-list",
                            for skill in PROFILE.skills.iter() {
                                li { key: "{skill}", "{skill}" }
                            }
                        }
                    }
                    div { class: "card",
                        h3 { "What I value" }
                        p { "{PROFILE.values}" }
                    }
                }
            }
        }
    }
}
