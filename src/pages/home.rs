//! Home Page
//!
//! Loader curtain and hero entrance, pinned horizontal story, collection grid
//! reveal and hero parallax.

use leptos::prelude::*;
use leptos_scroll::{
    use_smooth_scroll, Easing, Orchestrator, Position, Props, ScrollBoundSpec, ScrollResult, Stage, Targets,
    Timeline, TriggerRange, Tween,
};

use crate::catalog::{HOME_COLLECTION, STORY_SLIDES};
use crate::components::{CollectionCard, LoaderCurtain, PageShell};
use crate::config::Page;
use crate::context::{use_site_config, PageContext};
use crate::store::provide_ui_store;

// Raw markup so the boolean media attributes reach the element as written
const HERO_VIDEO: &str = r#"<video autoplay muted loop playsinline class="absolute inset-0 w-full h-full object-cover scale-125 pointer-events-none" style="filter: brightness(0.6)"><source src="/menu.mp4" type="video/mp4"></video>"#;

/// Pixels of vertical scroll the story stays pinned for
const STORY_PIN_LENGTH: &str = "+=3000";

pub fn register_home<S: Stage>(orchestrator: &mut Orchestrator<S>, stage: &S) -> ScrollResult<()> {
    let intro = Timeline::new()
        .then(
            Tween::to(".loader-curtain", Props::new().y_percent(-100.0))
                .duration(1.2)
                .ease(Easing::Power4InOut)
                .delay(0.2),
        )
        .at(
            Tween::from(".hero-title-line", Props::new().y(150.0).rotate(3.0).opacity(0.0))
                .stagger(0.1)
                .duration(1.2)
                .ease(Easing::Power3Out),
            Position::Offset(-0.8),
        )
        .at(
            Tween::from(".hero-meta", Props::new().opacity(0.0).y(20.0)).duration(1.0),
            Position::Offset(-0.5),
        );
    orchestrator.register_entrance(stage, &intro);

    // Every slide shifts by the same amount so the last one ends in view
    let slides = stage.query(".h-item").len();
    let shift = -100.0 * slides.saturating_sub(1) as f64;
    let story = Timeline::new().then(Tween::to(".h-item", Props::new().x_percent(shift)).ease(Easing::Linear));
    let pinned = ScrollBoundSpec::new(TriggerRange::new("top top", STORY_PIN_LENGTH)?)
        .pin()
        .scrub(1.0);
    orchestrator.register_scrub(stage, "#story", pinned, &story, Targets::WithinTrigger);

    let cards = Timeline::new().then(
        Tween::from(".menu-card", Props::new().y(100.0).opacity(0.0))
            .stagger(0.2)
            .duration(1.0)
            .ease(Easing::Power3Out),
    );
    orchestrator.register_reveal(stage, "#collection", "top 70%".parse()?, &cards, Targets::WithinTrigger);

    let parallax = Timeline::new().then(
        Tween::from_to(
            ".parallax-media",
            Props::new().y_percent(-10.0),
            Props::new().y_percent(10.0),
        )
        .ease(Easing::Linear),
    );
    let through_viewport = ScrollBoundSpec::new(TriggerRange::new("top bottom", "bottom top")?);
    orchestrator.register_scrub(stage, ".parallax-wrapper", through_viewport, &parallax, Targets::WithinTrigger);

    Ok(())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_site_config().scroll_for(Page::Home);
    provide_ui_store("");
    let scroll = use_smooth_scroll(config, |orchestrator, stage| {
        if let Err(e) = register_home(orchestrator, stage) {
            log::error!("home animations: {}", e);
        }
    });
    provide_context(PageContext::new(scroll));

    view! {
        <LoaderCurtain />
        <PageShell page=Page::Home>
            <section class="relative w-full h-screen flex flex-col items-center justify-center px-4 overflow-hidden">
                <div class="parallax-wrapper absolute inset-0 z-0 opacity-60">
                    <div class="parallax-media absolute inset-0" inner_html=HERO_VIDEO></div>
                    <div class="absolute inset-0 bg-black/40"></div>
                </div>
                <div class="relative z-10 text-center">
                    <div class="overflow-hidden mb-2">
                        <p class="hero-title-line font-mono text-[#D4AF37] text-xs tracking-[0.4em] uppercase">"Est. Haren"</p>
                    </div>
                    <h1 class="font-serif text-6xl md:text-8xl leading-[0.9] tracking-tight mb-8">
                        <div class="overflow-hidden"><span class="hero-title-line block">"Dutch"</span></div>
                        <div class="overflow-hidden">
                            <span class="hero-title-line block italic text-[#D4AF37] pr-6">"Precision,"</span>
                        </div>
                        <div class="overflow-hidden"><span class="hero-title-line block">"French Soul"</span></div>
                    </h1>
                    <div class="hero-meta mt-8 flex flex-col items-center">
                        <p class="max-w-md text-white/70 text-sm font-light leading-relaxed mb-8">
                            "A culinary sanctuary in the heart of Groningen. Where artisan chocolate meets the finest local dairy."
                        </p>
                        <div class="w-[1px] h-24 bg-gradient-to-b from-[#D4AF37] to-transparent"></div>
                    </div>
                </div>
            </section>

            <section id="story" class="relative w-full h-screen overflow-hidden bg-[#EAE6D9] text-black">
                <div class="flex h-full w-[300vw]">
                    {STORY_SLIDES
                        .iter()
                        .map(|slide| {
                            view! {
                                <div class="h-item w-screen h-full flex flex-col md:flex-row items-center justify-center p-12 md:p-24 gap-12">
                                    <div class="md:w-1/2">
                                        <h2 class="font-serif text-6xl md:text-8xl mb-6">
                                            {slide.title[0]}
                                            <br />
                                            {slide.title[1]}
                                        </h2>
                                        <p class="text-lg md:text-xl font-light leading-relaxed max-w-lg">{slide.body}</p>
                                    </div>
                                    {slide.image.map(|src| view! {
                                        <div class="md:w-1/3 h-[60vh] relative overflow-hidden grayscale hover:grayscale-0 transition-all duration-700">
                                            <img src=src alt=slide.alt class="absolute inset-0 w-full h-full object-cover" />
                                        </div>
                                    })}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="collection" class="relative w-full py-32 px-6 md:px-24 bg-[#0A0A0A]">
                <div class="max-w-7xl mx-auto">
                    <div class="flex flex-col md:flex-row justify-between items-end mb-24 pb-8 border-b border-white/10">
                        <div>
                            <span class="font-mono text-[#D4AF37] text-xs tracking-[0.2em]">"PÂTISSERIE & CHOCOLATERIE"</span>
                            <h2 class="font-serif text-5xl md:text-7xl mt-2">"The Collection"</h2>
                        </div>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-x-12 gap-y-20">
                        {HOME_COLLECTION.iter().map(|item| view! { <CollectionCard item=*item /> }).collect_view()}
                    </div>
                </div>
            </section>
        </PageShell>
    }
}
