use leptos::{html, prelude::*, task::spawn_local};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, HtmlFormElement, Request, RequestInit, Response};

use crate::motion::observer::use_motion;
use crate::motion::{
    AnimProperty, Easing, EffectDescriptor, GroupKey, SectionId, TriggerSpec,
};

const LINK_TRIGGER: TriggerSpec = TriggerSpec {
    threshold_percent: 70.0,
    once: true,
};

/// Contact links slide in from the left, 200ms apart.
pub static LINK_REVEAL: [EffectDescriptor; 2] = [
    EffectDescriptor {
        property: AnimProperty::Opacity,
        from: 0.0,
        to: 1.0,
        duration_ms: 700,
        stagger_ms: 200,
        easing: Easing::EaseOut,
        trigger: LINK_TRIGGER,
    },
    EffectDescriptor {
        property: AnimProperty::TranslateX,
        from: -50.0,
        to: 0.0,
        duration_ms: 700,
        stagger_ms: 200,
        easing: Easing::EaseOut,
        trigger: LINK_TRIGGER,
    },
];

const CONTACT_ENDPOINT: &str = "https://formspree.io/f/mvgprwko";

#[derive(Debug, Error)]
enum SubmitError {
    #[error("form data unavailable: {0}")]
    Form(String),
    #[error("request could not be built: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
}

async fn send_message(form: HtmlFormElement) -> Result<(), SubmitError> {
    let data = FormData::new_with_form(&form).map_err(|e| SubmitError::Form(format!("{e:?}")))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(data.as_ref());
    let request = Request::new_with_str_and_init(CONTACT_ENDPOINT, &init)
        .map_err(|e| SubmitError::Request(format!("{e:?}")))?;

    let window = web_sys::window().ok_or_else(|| SubmitError::Request("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| SubmitError::Network(format!("{e:?}")))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| SubmitError::Network(format!("{e:?}")))?;

    if !response.ok() {
        return Err(SubmitError::Status(response.status()));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed,
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let motion = use_motion();
    let section_ref = NodeRef::<html::Section>::new();
    let link_refs: [NodeRef<html::A>; 3] = [NodeRef::new(), NodeRef::new(), NodeRef::new()];
    let form_ref = NodeRef::<html::Form>::new();
    let (status, set_status) = signal(SubmitStatus::Idle);

    Effect::new(move |_| {
        motion.reset(GroupKey::Section(SectionId::Contact));
        motion.register(
            GroupKey::Section(SectionId::Contact),
            section_ref.get().map(Into::into),
        );
        motion.reset(GroupKey::ContactLinks);
        for link in link_refs {
            motion.register(GroupKey::ContactLinks, link.get().map(Into::into));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get_untracked() else {
            return;
        };
        set_status(SubmitStatus::Sending);
        spawn_local(async move {
            match send_message(form.clone()).await {
                Ok(()) => {
                    form.reset();
                    set_status(SubmitStatus::Sent);
                }
                Err(err) => {
                    log::error!("contact form submission failed: {err}");
                    set_status(SubmitStatus::Failed);
                }
            }
        });
    };

    view! {
        <section node_ref=section_ref id="contact" class="max-w-4xl mx-auto px-6 py-24">
            <h2 class="text-3xl font-bold mb-12">
                <span class="text-purple-400">"04."</span>
                " Get In Touch"
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-12">
                <div class="flex flex-col gap-6">
                    <a
                        node_ref=link_refs[0]
                        href="mailto:hello@rushiparekh.dev"
                        class="text-gray-300 hover:text-purple-300 transition-colors"
                    >
                        "✉ hello@rushiparekh.dev"
                    </a>
                    <a
                        node_ref=link_refs[1]
                        href="https://github.com/rushiparekh"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-300 hover:text-purple-300 transition-colors"
                    >
                        "GitHub"
                    </a>
                    <a
                        node_ref=link_refs[2]
                        href="https://linkedin.com/in/rushiparekh"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-300 hover:text-purple-300 transition-colors"
                    >
                        "LinkedIn"
                    </a>
                </div>
                <form node_ref=form_ref class="flex flex-col gap-4" on:submit=on_submit>
                    <input
                        type="text"
                        name="name"
                        required
                        placeholder="Your name"
                        class="px-4 py-3 rounded-md bg-gray-900 border border-gray-700 focus:outline-none focus:ring-2 focus:ring-purple-500"
                    />
                    <input
                        type="email"
                        name="email"
                        required
                        placeholder="Your email"
                        class="px-4 py-3 rounded-md bg-gray-900 border border-gray-700 focus:outline-none focus:ring-2 focus:ring-purple-500"
                    />
                    <input
                        type="text"
                        name="subject"
                        placeholder="Subject"
                        class="px-4 py-3 rounded-md bg-gray-900 border border-gray-700 focus:outline-none focus:ring-2 focus:ring-purple-500"
                    />
                    <textarea
                        name="message"
                        required
                        rows="5"
                        placeholder="Your message"
                        class="px-4 py-3 rounded-md bg-gray-900 border border-gray-700 focus:outline-none focus:ring-2 focus:ring-purple-500"
                    ></textarea>
                    <button
                        type="submit"
                        disabled=move || status() == SubmitStatus::Sending
                        class="px-6 py-3 rounded-md bg-purple-600 hover:bg-purple-500 disabled:opacity-50 font-medium transition-colors"
                    >
                        {move || {
                            if status() == SubmitStatus::Sending { "Sending..." } else { "Send Message" }
                        }}
                    </button>
                    {move || match status() {
                        SubmitStatus::Sent => Some(
                            view! {
                                <p class="text-sm text-green-400">"Message sent, thank you!"</p>
                            }
                                .into_any(),
                        ),
                        SubmitStatus::Failed => Some(
                            view! {
                                <p class="text-sm text-red-400">
                                    "Something went wrong, please try again later."
                                </p>
                            }
                                .into_any(),
                        ),
                        _ => None,
                    }}
                </form>
            </div>
        </section>
    }
}
