use dioxus::prelude::*;

use crate::components::TimelineItem;
use crate::content::TIMELINE;

#[component]
pub fn Resume() -> Element {
    rsx! {
        section { id: "resume", class: "section",
            div { class: "container",
                h2 { class: "section-title", "Resume" }
                div { class: "timeline",
                    for entry in TIMELINE.iter() {
                        TimelineItem { key: "{entry.title}", entry: *entry }
                    }
                }
                // No PDF is published yet.
                a { class: "btn primary", href: "#", "aria-disabled": "true", "Download Resume" }
            }
        }
    }
}
