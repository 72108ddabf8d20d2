//! Page Shell
//!
//! Document metadata, navigation, overlay and footer around a page's sections.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::catalog::page_meta;
use crate::components::{Footer, Navbar};
use crate::config::Page;

#[component]
pub fn PageShell(page: Page, children: Children) -> impl IntoView {
    let (title, description) = page_meta(page);

    view! {
        <Title text=title />
        <Meta name="description" content=description />
        <div class="relative w-full min-h-screen bg-[#050505] text-[#EAE6D9] font-sans selection:bg-[#D4AF37] selection:text-black">
            <Navbar />
            {children()}
            <Footer />
        </div>
    }
}
