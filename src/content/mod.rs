//! Literal page content. Nothing here changes at runtime.

mod contact;
mod navigation;
mod profile;
mod projects;
mod resume;

pub use contact::{ ContactEntry, CONTACTS };
pub use navigation::{ NavEntry, NAV_ENTRIES };
pub use profile::{ Profile, PROFILE };
pub use projects::{ Project, ProjectImage, PROJECTS };
pub use resume::{ TimelineEntry, TIMELINE };
