use dioxus::prelude::*;

#[component]
pub fn SunIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon-sun",
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            "aria-hidden": "true",
            path {
                d: "M12 18a6 6 0 1 0 0-12 6 6 0 0 0 0 12Z",
                stroke: "currentColor",
                stroke_width: "1.5",
            }
            path {
                d: "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M4.93 19.07l1.41-1.41M17.66 6.34l1.41-1.41",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
            }
        }
    }
}

#[component]
pub fn MoonIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon-moon",
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            "aria-hidden": "true",
            path {
                d: "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79Z",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}
