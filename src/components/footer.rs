//! Site Footer

use leptos::prelude::*;

use crate::catalog::{ADDRESS_LINES, COPYRIGHT, GENERAL_EMAIL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative w-full py-20 px-6 md:px-12 bg-[#050505] border-t border-white/5">
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row justify-between gap-12">
                <div class="md:w-1/2">
                    <h2 class="font-serif text-4xl mb-6">"Orphée."</h2>
                    <p class="text-white/50 text-sm leading-relaxed max-w-sm">
                        "We bake with the rhythm of the seasons. A piece of France in the sturdy north of the Netherlands."
                    </p>
                </div>
                <div class="grid grid-cols-2 gap-12 font-mono text-xs uppercase tracking-widest text-white/40">
                    <div>
                        <h4 class="text-white mb-4">"Visit"</h4>
                        <ul class="space-y-2">
                            {ADDRESS_LINES.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-white mb-4">"Contact"</h4>
                        <ul class="space-y-2">
                            <li class="hover:text-[#D4AF37] cursor-pointer">"Instagram"</li>
                            <li class="hover:text-[#D4AF37] cursor-pointer">
                                <a href=format!("mailto:{}", GENERAL_EMAIL)>{GENERAL_EMAIL}</a>
                            </li>
                        </ul>
                    </div>
                </div>
            </div>
            <div class="mt-20 text-center text-white/10 text-[10px] uppercase font-mono">{COPYRIGHT}</div>
        </footer>
    }
}
