//! About Page

use leptos::prelude::*;
use leptos_scroll::{
    use_smooth_scroll, Easing, Orchestrator, Position, Props, ScrollResult, Stage, Targets, Timeline, Tween,
    SELF_TARGET,
};

use crate::catalog::{ADDRESS_LINES, ATELIER_PHONE, GENERAL_EMAIL, OPENING_HOURS, OWNERS};
use crate::components::PageShell;
use crate::config::Page;
use crate::context::{use_site_config, PageContext};
use crate::store::provide_ui_store;

pub fn register_about<S: Stage>(orchestrator: &mut Orchestrator<S>, stage: &S) -> ScrollResult<()> {
    let title = Timeline::new()
        .then(
            Tween::from(".about-title-char", Props::new().y(100.0).opacity(0.0).rotate(5.0))
                .stagger(0.05)
                .duration(1.2)
                .ease(Easing::Power3Out)
                .delay(0.2),
        )
        .at(
            Tween::from(".about-subtitle", Props::new().opacity(0.0).y(20.0)).duration(1.0),
            Position::Offset(-0.5),
        );
    orchestrator.register_entrance(stage, &title);

    // Profiles and text blocks each reveal on their own
    let card = Timeline::new().then(
        Tween::from(SELF_TARGET, Props::new().y(50.0).opacity(0.0))
            .duration(1.2)
            .ease(Easing::Power3Out),
    );
    orchestrator.register_reveal(stage, ".profile-card", "top 80%".parse()?, &card, Targets::WithinTrigger);

    let text = Timeline::new().then(Tween::from(SELF_TARGET, Props::new().y(30.0).opacity(0.0)).duration(1.0));
    orchestrator.register_reveal(stage, ".fade-in-text", "top 85%".parse()?, &text, Targets::WithinTrigger);

    Ok(())
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let config = use_site_config().scroll_for(Page::About);
    provide_ui_store("");
    let scroll = use_smooth_scroll(config, |orchestrator, stage| {
        if let Err(e) = register_about(orchestrator, stage) {
            log::error!("about animations: {}", e);
        }
    });
    provide_context(PageContext::new(scroll));

    view! {
        <PageShell page=Page::About>
            <header class="relative w-full h-screen flex flex-col items-center justify-center px-6 md:px-24 overflow-hidden">
                <div class="absolute inset-0 z-0 opacity-50">
                    <img src="/about.jpg" alt="Orphée Pâtisserie Atelier" class="absolute inset-0 w-full h-full object-cover scale-125" />
                    <div class="absolute inset-0 bg-gradient-to-b from-[#050505] via-transparent to-[#050505] z-10"></div>
                </div>
                <div class="relative z-20 max-w-4xl mx-auto text-center">
                    <span class="about-subtitle block font-mono text-[#D4AF37] text-xs tracking-[0.4em] mb-6 uppercase">
                        "The Architects of Taste"
                    </span>
                    <h1 class="font-serif text-6xl md:text-8xl leading-[0.9] mb-12">
                        <span class="inline-block about-title-char">"Crafting"</span>" "
                        <span class="inline-block about-title-char italic text-[#D4AF37]">"Legacy"</span>" "
                        <span class="inline-block about-title-char">"in Haren"</span>
                    </h1>
                    <p class="about-subtitle text-white/60 text-lg font-light leading-relaxed max-w-2xl mx-auto">
                        "Orphée is the collision of two distinct worlds. A rigorous pursuit of Dutch perfectionism and the chaotic, buttery soul of the French bakery."
                    </p>
                </div>
            </header>

            <section class="w-full px-6 md:px-12 py-12">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {OWNERS
                        .iter()
                        .enumerate()
                        .map(|(i, owner)| {
                            let offset = if i % 2 == 1 { " mt-12 md:mt-24" } else { "" };
                            view! {
                                <div class=format!("profile-card relative h-[80vh] bg-[#111] overflow-hidden group{}", offset)>
                                    <img
                                        src=owner.image
                                        alt=owner.name
                                        class="absolute inset-0 w-full h-full object-cover opacity-60 group-hover:opacity-80 group-hover:scale-105 transition-all duration-700"
                                    />
                                    <div class="absolute bottom-0 left-0 w-full p-12 bg-gradient-to-t from-black/90 to-transparent">
                                        <span class="font-mono text-[#D4AF37] text-xs tracking-widest uppercase mb-2 block">{owner.role}</span>
                                        <h2 class="font-serif text-4xl mb-4">{owner.name}</h2>
                                        <p class="text-white/60 text-sm max-w-sm mb-6">{owner.quote}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="py-32 px-6 md:px-24 max-w-5xl mx-auto text-center">
                <h3 class="fade-in-text font-serif text-3xl md:text-5xl leading-tight mb-12">
                    "\"We chose Haren because it understands quiet luxury. It is not about the loudest sign on the street, but the deepest flavor in the bite.\""
                </h3>
                <div class="fade-in-text w-[1px] h-24 bg-[#D4AF37] mx-auto"></div>
            </section>

            <section id="atelier" class="w-full bg-[#0A0A0A] border-t border-white/5">
                <div class="grid grid-cols-1 md:grid-cols-2">
                    <div class="p-12 md:p-24 flex flex-col justify-center">
                        <span class="font-mono text-[#D4AF37] text-xs tracking-[0.2em] mb-8 uppercase">"Visit The Atelier"</span>
                        <h2 class="font-serif text-5xl mb-12">"Orphée Haren"</h2>
                        <div class="space-y-8">
                            <div class="fade-in-text">
                                <h4 class="font-bold text-lg mb-2">"Address"</h4>
                                <p class="text-white/60 font-light">
                                    {ADDRESS_LINES.iter().map(|line| view! { {*line}<br /> }).collect_view()}
                                </p>
                            </div>
                            <div class="fade-in-text">
                                <h4 class="font-bold text-lg mb-2">"Opening Hours"</h4>
                                <div class="grid grid-cols-2 gap-x-12 text-white/60 font-light text-sm">
                                    {OPENING_HOURS
                                        .iter()
                                        .map(|&(days, hours)| {
                                            let class = if hours.is_none() { "text-[#D4AF37]" } else { "" };
                                            view! {
                                                <span class=class>{days}</span>
                                                <span class=class>{hours.unwrap_or("Closed")}</span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                            <div class="fade-in-text">
                                <h4 class="font-bold text-lg mb-2">"Contact"</h4>
                                <p class="text-white/60 font-light">
                                    <a href=format!("mailto:{}", GENERAL_EMAIL) class="hover:text-white underline decoration-white/20 underline-offset-4">
                                        {GENERAL_EMAIL}
                                    </a>
                                    <br />
                                    {ATELIER_PHONE}
                                </p>
                            </div>
                        </div>
                    </div>
                    <div class="relative h-[50vh] md:h-auto min-h-[600px] bg-[#111]">
                        <img
                            src="https://images.unsplash.com/photo-1497215842964-222b430dc094?q=80&w=2670&auto=format&fit=crop"
                            alt="Storefront"
                            class="absolute inset-0 w-full h-full object-cover grayscale hover:grayscale-0 transition-all duration-1000"
                        />
                    </div>
                </div>
            </section>
        </PageShell>
    }
}
