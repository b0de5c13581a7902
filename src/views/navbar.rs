use dioxus::prelude::*;

use crate::components::{ NavLink, ThemeToggle };
use crate::content::{ NAV_ENTRIES, PROFILE };
use crate::routes::Route;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Layout shared by every route: the floating nav above the page.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        Navigation {}
        Outlet::<Route> {}
    }
}

#[component]
pub fn Navigation() -> Element {
    rsx! {
        nav { class: "floating-nav", role: "navigation", "aria-label": "Primary",
            div { class: "nav-inner",
                a { class: "brand", href: "#top", "aria-label": "Home",
                    span { class: "logo-dot" }
                    span { class: "brand-text", "{PROFILE.short_name}" }
                }
                div { class: "nav-links",
                    for entry in NAV_ENTRIES.iter() {
                        NavLink { key: "{entry.href}", entry: *entry }
                    }
                }
                ThemeToggle {}
            }
        }
    }
}
