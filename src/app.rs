//! Orphée Frontend App
//!
//! Router, document metadata and the site config shared by every page.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::SiteConfig;
use crate::pages::{AboutPage, ContactPage, HomePage, MenuPage, NotFound};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SiteConfig::load());

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/about") view=AboutPage />
                <Route path=path!("/menu") view=MenuPage />
                <Route path=path!("/contact") view=ContactPage />
            </Routes>
        </Router>
    }
}
