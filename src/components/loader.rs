//! Loader Curtain
//!
//! Covers the home page until the entrance timeline slides it away.

use leptos::prelude::*;

#[component]
pub fn LoaderCurtain() -> impl IntoView {
    view! {
        <div class="loader-curtain fixed inset-0 bg-[#0F0F0F] z-[9999] flex items-center justify-center pointer-events-none">
            <div class="text-center">
                <h1 class="font-serif text-5xl md:text-7xl text-[#D4AF37] tracking-widest uppercase mb-4">
                    "Orphée"
                </h1>
                <p class="font-mono text-[10px] text-white/50 uppercase tracking-[0.4em]">
                    "Haren • Netherlands"
                </p>
            </div>
        </div>
    }
}
