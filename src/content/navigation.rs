#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavEntry {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { href: "#about", label: "About Me" },
    NavEntry { href: "#projects", label: "Projects" },
    NavEntry { href: "#resume", label: "Resume" },
    NavEntry { href: "#contact", label: "Contacts" },
];
