use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found | Orphée Pâtisserie" />
        <div class="w-full min-h-screen bg-[#050505] text-[#EAE6D9] flex flex-col items-center justify-center gap-8">
            <span class="font-mono text-[#D4AF37] text-xs tracking-[0.4em] uppercase">"404"</span>
            <h1 class="font-serif text-6xl md:text-8xl">"Sold Out."</h1>
            <A href="/" attr:class="font-mono text-xs uppercase tracking-widest text-white/50 hover:text-[#D4AF37] transition-colors">
                "Back to the atelier ↗"
            </A>
        </div>
    }
}
