//! Sticky Category Navigation
//!
//! Highlights the active menu section and jumps to a section on click.

use leptos::prelude::*;

use crate::context::use_page_context;
use crate::models::CategorySection;
use crate::store::{use_ui_store, UiStateStoreFields};

const ACTIVE: &str = "flex items-center gap-3 text-sm font-mono uppercase tracking-widest transition-all duration-300 text-[#D4AF37]";
const IDLE: &str = "flex items-center gap-3 text-sm font-mono uppercase tracking-widest transition-all duration-300 text-white/40 hover:text-white";

#[component]
pub fn CategoryNav(sections: &'static [CategorySection]) -> impl IntoView {
    let store = use_ui_store();
    let page = use_page_context();

    view! {
        <div class="sticky top-0 z-30 w-full bg-[#050505]/80 backdrop-blur-xl border-b border-white/10">
            <div class="max-w-7xl mx-auto px-6 overflow-x-auto no-scrollbar">
                <div class="flex gap-8 md:gap-12 min-w-max py-6">
                    {sections
                        .iter()
                        .map(|section| {
                            let id = section.id;
                            let page = page.clone();
                            let is_active = move || store.active_category().get() == id;
                            view! {
                                <button
                                    class=move || if is_active() { ACTIVE } else { IDLE }
                                    on:click=move |_| page.jump_to(id)
                                >
                                    <Show when=is_active>
                                        <span class="text-[#D4AF37] animate-pulse">"●"</span>
                                    </Show>
                                    {section.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
