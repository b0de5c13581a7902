mod cards;
mod icons;
mod theme_toggle;

pub use cards::{ ContactCard, NavLink, ProjectCard, TimelineItem };
pub use icons::{ MoonIcon, SunIcon };
pub use theme_toggle::ThemeToggle;
