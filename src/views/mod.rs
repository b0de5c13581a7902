mod about;
mod contact;
mod footer;
mod hero;
mod home;
pub(crate) mod navbar;
mod not_found;
mod projects;
mod resume;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use home::Home;
pub use navbar::Navbar;
pub use not_found::PageNotFound;
pub use projects::Projects;
pub use resume::Resume;
