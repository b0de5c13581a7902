#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactEntry {
    pub emoji: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

impl ContactEntry {
    /// `mailto:` and `tel:` links stay in the current tab.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

pub const CONTACTS: &[ContactEntry] = &[
    ContactEntry {
        emoji: "\u{2709}\u{fe0f}",
        label: "Email",
        value: "hernandezgio16@gmail.com",
        href: "mailto:hernandezgio16@gmail.com",
    },
    ContactEntry {
        emoji: "\u{1f4bc}",
        label: "LinkedIn",
        value: "/in/giohernandez16",
        href: "https://www.linkedin.com/in/giohernandez16",
    },
    ContactEntry {
        emoji: "\u{1f4bb}",
        label: "GitHub",
        value: "@glytch21",
        href: "https://github.com/glytch21",
    },
    ContactEntry {
        emoji: "\u{1f4f1}",
        label: "Phone",
        value: "(+63) 935 629 4066",
        href: "tel:+639356294066",
    },
];
