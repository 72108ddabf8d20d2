//! Item Cards

use leptos::prelude::*;

use crate::models::DisplayItem;

/// Large image card for the home page collection
#[component]
pub fn CollectionCard(item: DisplayItem) -> impl IntoView {
    view! {
        <div class="menu-card group cursor-pointer">
            <div class="relative w-full h-[400px] mb-8 overflow-hidden rounded-sm bg-[#111]">
                <img
                    src=item.image
                    alt=item.name
                    loading="lazy"
                    class="absolute inset-0 w-full h-full object-cover opacity-80 group-hover:opacity-100 group-hover:scale-105 transition-all duration-700"
                />
                <div class="absolute top-4 left-4">
                    <span class="font-mono text-[9px] text-[#D4AF37] bg-black/80 backdrop-blur-md px-3 py-1 uppercase tracking-widest">
                        {item.category}
                    </span>
                </div>
            </div>
            <div class="flex justify-between items-start">
                <div>
                    <h3 class="font-serif text-3xl mb-2 group-hover:text-[#D4AF37] transition-colors">{item.name}</h3>
                    <p class="text-white/50 font-light text-sm max-w-sm">{item.description}</p>
                </div>
                <div class="text-right">
                    <span class="block font-serif text-2xl group-hover:text-[#D4AF37] transition-colors">
                        {item.price.to_string()}
                    </span>
                    <span class="block mt-2 opacity-0 group-hover:opacity-100 transition-all text-[#D4AF37]">"↗"</span>
                </div>
            </div>
        </div>
    }
}

/// Thumbnail row inside a menu section; `class` ties it to the section's reveal
#[component]
pub fn MenuItemRow(item: DisplayItem, class: String) -> impl IntoView {
    view! {
        <div class=format!("{} group flex gap-6 items-start cursor-pointer", class)>
            <div class="relative w-24 h-24 md:w-32 md:h-32 shrink-0 overflow-hidden rounded-sm bg-white/5">
                <img
                    src=item.image
                    alt=item.name
                    loading="lazy"
                    class="absolute inset-0 w-full h-full object-cover opacity-80 group-hover:opacity-100 group-hover:scale-110 transition-all duration-500"
                />
            </div>
            <div class="flex-1 pt-1">
                <div class="flex justify-between items-baseline border-b border-white/10 pb-2 mb-2 group-hover:border-[#D4AF37]/50 transition-colors">
                    <h3 class="font-serif text-2xl group-hover:text-[#D4AF37] transition-colors">{item.name}</h3>
                    <span class="font-mono text-lg text-[#D4AF37]">{item.price.to_string()}</span>
                </div>
                <p class="text-white/50 text-sm font-light leading-relaxed mb-3">{item.description}</p>
                <div class="flex items-center gap-2 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    <span class="text-[10px] uppercase tracking-widest text-[#D4AF37]">"Order Now ↗"</span>
                </div>
            </div>
        </div>
    }
}
