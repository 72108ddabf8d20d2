//! Menu Page
//!
//! Category sections with a sticky nav that follows the section in view.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_scroll::{
    use_smooth_scroll, Easing, Orchestrator, Props, ScrollResult, Stage, Targets, Timeline, TriggerPoint, Tween,
};

use crate::catalog::{validate_sections, MENU_CATEGORIES};
use crate::components::{CategoryNav, MenuItemRow, PageShell};
use crate::config::Page;
use crate::context::{use_site_config, PageContext};
use crate::models::CategorySection;
use crate::store::{provide_ui_store, store_set_active_category};
use crate::tracker::{track_sections, CategoryTracker};

pub fn register_menu<S, F>(
    orchestrator: &mut Orchestrator<S>,
    stage: &S,
    sections: &[CategorySection],
    on_change: F,
) -> ScrollResult<()>
where
    S: Stage,
    F: Fn(String) + Clone + 'static,
{
    let hero = Timeline::new().then(
        Tween::from(".menu-hero-text", Props::new().y(100.0).opacity(0.0))
            .duration(1.0)
            .stagger(0.2)
            .ease(Easing::Power3Out)
            .delay(0.5),
    );
    orchestrator.register_entrance(stage, &hero);

    let tracker = Rc::new(RefCell::new(CategoryTracker::new(sections.iter().map(|s| s.id))));
    track_sections(orchestrator, stage, tracker, on_change);

    let start: TriggerPoint = "top 80%".parse()?;
    for section in sections {
        let items = Timeline::new().then(
            Tween::from(&format!(".{}", section.item_class()), Props::new().y(50.0).opacity(0.0))
                .duration(0.8)
                .stagger(0.1)
                .ease(Easing::Power2Out),
        );
        orchestrator.register_reveal(stage, &format!("#{}", section.id), start, &items, Targets::WithinTrigger);
    }

    Ok(())
}

#[component]
pub fn MenuPage() -> impl IntoView {
    if let Err(id) = validate_sections(MENU_CATEGORIES) {
        log::error!("duplicate menu section `{}`", id);
    }
    let first = MENU_CATEGORIES.first().map(|s| s.id).unwrap_or_default();
    let config = use_site_config().scroll_for(Page::Menu);
    let store = provide_ui_store(first);
    let scroll = use_smooth_scroll(config, move |orchestrator, stage| {
        let on_change = move |id: String| store_set_active_category(&store, id);
        if let Err(e) = register_menu(orchestrator, stage, MENU_CATEGORIES, on_change) {
            log::error!("menu animations: {}", e);
        }
    });
    provide_context(PageContext::new(scroll));

    let count = MENU_CATEGORIES.len();

    view! {
        <PageShell page=Page::Menu>
            <header class="relative w-full h-[60vh] flex flex-col justify-end pb-24 px-6 md:px-24 border-b border-white/10">
                <div class="absolute inset-0 z-0">
                    <div class="absolute inset-0 bg-gradient-to-t from-[#050505] via-[#050505]/50 to-transparent z-10"></div>
                    <img
                        src="https://images.unsplash.com/photo-1509365465985-25d11c17e812?q=80&w=2532&auto=format&fit=crop"
                        alt="Menu Background"
                        class="absolute inset-0 w-full h-full object-cover opacity-50"
                    />
                </div>
                <div class="relative z-20">
                    <span class="menu-hero-text block font-mono text-[#D4AF37] text-xs tracking-[0.4em] mb-4">"SEASONAL MENU"</span>
                    <h1 class="menu-hero-text font-serif text-7xl md:text-9xl leading-[0.85]">"La Carte"</h1>
                </div>
            </header>

            <CategoryNav sections=MENU_CATEGORIES />

            <main class="max-w-7xl mx-auto px-6 md:px-24 py-24 space-y-32">
                {MENU_CATEGORIES
                    .iter()
                    .enumerate()
                    .map(|(index, section)| {
                        let item_class = section.item_class();
                        view! {
                            <section id=section.id class="relative">
                                <div class="flex flex-col md:flex-row items-baseline gap-6 mb-16 border-b border-white/10 pb-6">
                                    <div class="p-3 border border-[#D4AF37] rounded-full text-[#D4AF37]">{section.icon.glyph()}</div>
                                    <div>
                                        <h2 class="font-serif text-5xl md:text-7xl">{section.label}</h2>
                                        <p class="font-mono text-[#D4AF37] text-xs tracking-[0.2em] mt-2 uppercase opacity-80">
                                            {section.subtitle}
                                        </p>
                                    </div>
                                    <span class="ml-auto font-mono text-white/20 text-xs">
                                        {format!("{:02} / {:02}", index + 1, count)}
                                    </span>
                                </div>
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-x-12 gap-y-16">
                                    {section
                                        .items
                                        .iter()
                                        .map(|item| view! { <MenuItemRow item=*item class=item_class.clone() /> })
                                        .collect_view()}
                                </div>
                            </section>
                        }
                    })
                    .collect_view()}
            </main>

            <section class="w-full py-24 bg-[#111] text-center">
                <h3 class="font-serif text-4xl mb-6">"Have an allergy?"</h3>
                <p class="text-white/50 mb-8">"Please ask our staff for the allergen register."</p>
                <a
                    href="/menu.pdf"
                    download="orphee-menu.pdf"
                    class="inline-block px-8 py-3 border border-[#D4AF37] text-[#D4AF37] uppercase font-mono text-xs tracking-widest hover:bg-[#D4AF37] hover:text-black transition-all"
                >
                    "Download PDF Menu"
                </a>
            </section>
        </PageShell>
    }
}
