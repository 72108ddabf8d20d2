//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod category_nav;
mod contact_form;
mod footer;
mod loader;
mod menu_card;
mod navbar;
mod page_shell;

pub use category_nav::CategoryNav;
pub use contact_form::ContactForm;
pub use footer::Footer;
pub use loader::LoaderCurtain;
pub use menu_card::{CollectionCard, MenuItemRow};
pub use navbar::Navbar;
pub use page_shell::PageShell;
