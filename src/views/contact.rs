use dioxus::prelude::*;

use crate::components::ContactCard;
use crate::content::CONTACTS;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: "contact", class: "section alt",
            div { class: "container",
                h2 { class: "section-title", "Contact" }
                div { class: "card",
                    p { class: "lead", "Have a project in mind? Let’s talk." }
                    div { class: "contact-grid",
                        for entry in CONTACTS.iter() {
                            ContactCard { key: "{entry.label}", entry: *entry }
                        }
                    }
                }
            }
        }
    }
}
