use dioxus::prelude::*;

use crate::content::{ ContactEntry, NavEntry, Project, TimelineEntry };

#[component]
pub fn NavLink(entry: NavEntry) -> Element {
    rsx! {
        a { class: "nav-link", href: entry.href, "aria-label": entry.label, "{entry.label}" }
    }
}

#[component]
pub fn ProjectCard(project: Project) -> Element {
    rsx! {
        article { class: "project-card",
            if let Some(image) = project.image {
                div { class: "project-media zoom-out",
                    img { src: image.src, alt: image.alt, "loading": "lazy" }
                }
            } else {
                div { class: "project-media" }
            }
            div { class: "project-body",
                h3 { "{project.title}" }
                p { "{project.description}" }
                div { class: "tag-row",
                    for tag in project.tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
                div { class: "project-actions",
                    if let Some(demo) = project.demo_url {
                        a {
                            class: "btn small secondary",
                            target: "_blank",
                            rel: "noreferrer",
                            href: demo,
                            "Live Demo"
                        }
                    }
                    a {
                        class: "btn small ghost",
                        target: "_blank",
                        rel: "noreferrer",
                        href: project.code_url,
                        "Code"
                    }
                }
            }
        }
    }
}

#[component]
pub fn TimelineItem(entry: TimelineEntry) -> Element {
    rsx! {
        div { class: "t-item",
            div { class: "t-dot" }
            div { class: "t-content",
                h3 { "{entry.title}" }
                p { "{entry.period}" }
                p { "{entry.description}" }
            }
        }
    }
}

#[component]
pub fn ContactCard(entry: ContactEntry) -> Element {
    let external = entry.is_external();

    rsx! {
        a {
            class: "contact-card",
            href: entry.href,
            target: if external { "_blank" },
            rel: if external { "noreferrer" },
            span { class: "contact-emoji", "{entry.emoji}" }
            div {
                div { class: "contact-label", "{entry.label}" }
                div { class: "contact-value", "{entry.value}" }
            }
        }
    }
}
