//! Contact Page

use leptos::prelude::*;
use leptos_scroll::{use_smooth_scroll, Easing, Orchestrator, Props, ScrollResult, Stage, Targets, Timeline, Tween};

use crate::catalog::{ATELIER_PHONE, GENERAL_EMAIL, WHOLESALE_EMAIL};
use crate::components::{ContactForm, PageShell};
use crate::config::Page;
use crate::context::{use_site_config, PageContext};
use crate::store::provide_ui_store;

pub fn register_contact<S: Stage>(orchestrator: &mut Orchestrator<S>, stage: &S) -> ScrollResult<()> {
    let hero = Timeline::new().then(
        Tween::from(".contact-hero-text", Props::new().y(100.0).opacity(0.0).rotate(2.0))
            .stagger(0.1)
            .duration(1.2)
            .ease(Easing::Power3Out)
            .delay(0.2),
    );
    orchestrator.register_entrance(stage, &hero);

    let rows = Timeline::new().then(
        Tween::from(".contact-form-row", Props::new().y(30.0).opacity(0.0))
            .stagger(0.1)
            .duration(1.0)
            .ease(Easing::Power2Out),
    );
    orchestrator.register_reveal(stage, ".contact-form-section", "top 70%".parse()?, &rows, Targets::WithinTrigger);

    // The location card sits outside the grid but reveals with it
    let cards = Timeline::new().then(
        Tween::from(".info-card", Props::new().y(50.0).opacity(0.0))
            .stagger(0.2)
            .duration(1.2)
            .ease(Easing::Power3Out),
    );
    orchestrator.register_reveal(stage, ".info-grid", "top 80%".parse()?, &cards, Targets::Document);

    Ok(())
}

#[component]
fn InfoCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="info-card p-6 border border-white/10 hover:border-[#D4AF37]/50 transition-colors group">
            <h4 class="font-serif text-xl mb-2">{title}</h4>
            {children()}
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let config = use_site_config().scroll_for(Page::Contact);
    provide_ui_store("");
    let scroll = use_smooth_scroll(config, |orchestrator, stage| {
        if let Err(e) = register_contact(orchestrator, stage) {
            log::error!("contact animations: {}", e);
        }
    });
    provide_context(PageContext::new(scroll));

    let link = "text-sm text-white/50 group-hover:text-white transition-colors";

    view! {
        <PageShell page=Page::Contact>
            <header class="relative w-full pt-48 pb-24 px-6 md:px-24">
                <div class="max-w-4xl">
                    <span class="contact-hero-text block font-mono text-[#D4AF37] text-xs tracking-[0.4em] mb-6 uppercase">
                        "Concierge Service"
                    </span>
                    <h1 class="font-serif text-6xl md:text-8xl leading-[0.9] mb-12">
                        <span class="block contact-hero-text">"Start a"</span>
                        <span class="block contact-hero-text italic text-[#D4AF37]">"Conversation."</span>
                    </h1>
                    <p class="contact-hero-text text-white/60 text-lg font-light leading-relaxed max-w-xl">
                        "Whether you wish to commission a bespoke wedding cake, inquire about wholesale partnerships, or simply say bonjour."
                    </p>
                </div>
            </header>

            <section class="w-full px-6 md:px-24 pb-32">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-24">
                    <div class="contact-form-section">
                        <ContactForm />
                    </div>
                    <div class="space-y-16">
                        <div class="info-card relative h-[300px] w-full bg-[#111] overflow-hidden grayscale hover:grayscale-0 transition-all duration-700">
                            <img
                                src="https://images.unsplash.com/photo-1496449903678-68ddcb189a24?q=80&w=2670&auto=format&fit=crop"
                                alt="Haren Location"
                                class="absolute inset-0 w-full h-full object-cover opacity-60"
                            />
                            <div class="absolute inset-0 p-8 flex flex-col justify-end">
                                <h3 class="font-serif text-3xl">"Visit Haren"</h3>
                                <p class="text-sm text-white/70 mt-2">"Rijksstraatweg 220, 9752 Haren"</p>
                            </div>
                        </div>
                        <div class="info-grid grid grid-cols-1 sm:grid-cols-2 gap-8">
                            <InfoCard title="General">
                                <a href=format!("mailto:{}", GENERAL_EMAIL) class=link>{GENERAL_EMAIL}</a>
                            </InfoCard>
                            <InfoCard title="Wholesale">
                                <a href=format!("mailto:{}", WHOLESALE_EMAIL) class=link>{WHOLESALE_EMAIL}</a>
                            </InfoCard>
                            <InfoCard title="Atelier">
                                <a href=format!("tel:{}", ATELIER_PHONE.replace(' ', "")) class=link>{ATELIER_PHONE}</a>
                            </InfoCard>
                            <InfoCard title="Hours">
                                <span class="text-sm text-white/50 block">"Wed-Sun: 08:00 - 17:00"</span>
                            </InfoCard>
                        </div>
                    </div>
                </div>
            </section>
        </PageShell>
    }
}
