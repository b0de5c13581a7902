use dioxus::prelude::*;

use crate::components::ProjectCard;
use crate::content::PROJECTS;

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: "projects", class: "section alt",
            div { class: "container",
                h2 { class: "section-title", "Projects" }
                div { class: "grid three",
                    for project in PROJECTS.iter() {
                        ProjectCard { key: "{project.title}", project: *project }
                    }
                }
            }
        }
    }
}
