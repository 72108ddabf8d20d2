//! Routed Pages
//!
//! Each page starts its own scroll runtime and registers its animations once
//! mounted. The `register_*` functions take any [`leptos_scroll::Stage`] so they
//! can run against an in-memory page in tests.

mod about;
mod contact;
mod home;
mod menu;
mod not_found;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use menu::MenuPage;
pub use not_found::NotFound;
