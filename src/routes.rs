use dioxus::prelude::*;
use crate::views::{ Home, Navbar, PageNotFound };

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home,
    #[end_layout]
    #[route("/:..route")]
    PageNotFound {
        route: Vec<String>,
    },
}
