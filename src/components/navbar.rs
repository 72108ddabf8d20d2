//! Navigation Bar and Fullscreen Overlay

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::catalog::NAV_LINKS;
use crate::store::{store_close_menu, store_toggle_menu, use_ui_store, UiStateStoreFields, UiStore};

/// Fixed top bar with the brand link and the overlay toggle
#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_ui_store();
    let is_open = move || store.menu_open().get();

    view! {
        <nav class="fixed top-0 left-0 w-full z-50 px-8 py-8 flex justify-between items-center mix-blend-difference text-[#EAE6D9]">
            <A href="/" attr:class="font-serif text-xl font-bold tracking-tighter">
                "ORPHÉE.NL"
            </A>
            <button
                class="group flex items-center gap-3 cursor-pointer"
                aria-label=move || if is_open() { "Close menu" } else { "Open menu" }
                on:click=move |_| store_toggle_menu(&store)
            >
                <span class="hidden md:block font-mono text-[9px] uppercase tracking-[0.2em] group-hover:text-[#D4AF37] transition-colors">
                    {move || if is_open() { "Close" } else { "Menu" }}
                </span>
                <div class="w-10 h-10 rounded-full border border-white/20 flex items-center justify-center group-hover:bg-[#D4AF37] group-hover:border-[#D4AF37] group-hover:text-black transition-all duration-300">
                    {move || if is_open() { "✕" } else { "☰" }}
                </div>
            </button>
        </nav>
        <MenuOverlay />
    }
}

/// Bound to the anchor itself so keyboard activation closes the overlay too
fn close_on_select<E>(store: UiStore) -> impl Fn(E) + Copy + 'static {
    move |_| store_close_menu(&store)
}

/// Fullscreen destination list; choosing a link closes it before navigating
#[component]
pub fn MenuOverlay() -> impl IntoView {
    let store = use_ui_store();
    let pathname = use_location().pathname;

    let overlay_class = move || {
        let position = if store.menu_open().get() { "translate-y-0" } else { "-translate-y-full" };
        format!(
            "fixed inset-0 bg-[#0F0F0F] z-40 transition-transform duration-700 ease-[cubic-bezier(0.76,0,0.24,1)] {}",
            position
        )
    };

    view! {
        <div class=overlay_class>
            <div class="h-full flex flex-col justify-center items-center gap-8">
                {NAV_LINKS
                    .iter()
                    .map(|&(href, label)| {
                        let link_class = move || {
                            if pathname.get() == href {
                                "font-serif text-5xl md:text-7xl cursor-pointer text-[#D4AF37] italic transition-all duration-300"
                            } else {
                                "font-serif text-5xl md:text-7xl cursor-pointer hover:text-[#D4AF37] hover:italic transition-all duration-300"
                            }
                        };
                        view! {
                            <A href=href attr:class=link_class on:click={close_on_select::<leptos::ev::MouseEvent>(store)}>
                                {label}
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
