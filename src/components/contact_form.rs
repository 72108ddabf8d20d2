//! Contact Form
//!
//! Validates locally, then hands the message to the visitor's mail client.

use leptos::prelude::*;

use crate::models::{ContactForm as Form, InquiryType};

const FIELD: &str = "w-full bg-transparent border-b border-white/20 py-4 text-xl font-serif focus:outline-none focus:border-[#D4AF37] transition-colors placeholder:text-white/10";
const LABEL: &str = "block font-mono text-[10px] uppercase tracking-widest text-white/40 mb-2 group-focus-within:text-[#D4AF37] transition-colors";

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(Form::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(|f| f.mailto()) {
            Ok(url) => {
                set_error.set(None);
                let opened = web_sys::window().map(|w| w.location().set_href(&url));
                if !matches!(opened, Some(Ok(()))) {
                    log::warn!("could not open mail client");
                }
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <form class="space-y-12" on:submit=on_submit novalidate=true>
            <div class="contact-form-row group">
                <label class=LABEL>"Your Name"</label>
                <input
                    type="text"
                    placeholder="John Doe"
                    class=FIELD
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </div>
            <div class="contact-form-row group">
                <label class=LABEL>"Email Address"</label>
                <input
                    type="email"
                    placeholder="john@example.com"
                    class=FIELD
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
            </div>
            <div class="contact-form-row group">
                <label class=LABEL>"Inquiry Type"</label>
                <select
                    class=format!("{} text-[#EAE6D9] appearance-none cursor-pointer", FIELD)
                    on:change=move |ev| {
                        if let Some(kind) = InquiryType::from_key(&event_target_value(&ev)) {
                            form.update(|f| f.inquiry = kind);
                        }
                    }
                >
                    {InquiryType::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <option class="bg-[#111]" value=kind.key() selected=move || form.with(|f| f.inquiry == kind)>
                                    {kind.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="contact-form-row group">
                <label class=LABEL>"Message"</label>
                <textarea
                    rows="4"
                    placeholder="Tell us about your needs..."
                    class=format!("{} resize-none", FIELD)
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                ></textarea>
            </div>
            <div class="contact-form-row pt-8">
                <Show when=move || error.get().is_some()>
                    <p class="mb-6 font-mono text-xs text-[#D4AF37]" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
                <button type="submit" class="group flex items-center gap-4 text-xl font-serif hover:text-[#D4AF37] transition-colors">
                    <span>"Send Message"</span>
                    <div class="w-12 h-[1px] bg-white/20 group-hover:bg-[#D4AF37] transition-colors"></div>
                    <span class="transform group-hover:translate-x-1 group-hover:-translate-y-1 transition-transform">"↗"</span>
                </button>
            </div>
        </form>
    }
}
