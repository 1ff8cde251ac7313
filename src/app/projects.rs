use leptos::{html, prelude::*};

use crate::motion::observer::{set_body_scroll_lock, use_motion};
use crate::motion::{
    AnimProperty, Easing, EffectDescriptor, GroupKey, OverlayController, SectionId, TriggerSpec,
};
use crate::projects::Project;

use super::icons::ProjectGlyph;

const CARD_TRIGGER: TriggerSpec = TriggerSpec {
    threshold_percent: 70.0,
    once: true,
};

pub static CARD_REVEAL: [EffectDescriptor; 2] = [
    EffectDescriptor {
        property: AnimProperty::Opacity,
        from: 0.0,
        to: 1.0,
        duration_ms: 700,
        stagger_ms: 150,
        easing: Easing::EaseOut,
        trigger: CARD_TRIGGER,
    },
    EffectDescriptor {
        property: AnimProperty::TranslateY,
        from: 50.0,
        to: 0.0,
        duration_ms: 700,
        stagger_ms: 150,
        easing: Easing::EaseOut,
        trigger: CARD_TRIGGER,
    },
];

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let motion = use_motion();
    let section_ref = NodeRef::<html::Section>::new();
    let card_refs: Vec<NodeRef<html::Div>> =
        crate::projects::all().iter().map(|_| NodeRef::new()).collect();

    let reg_refs = card_refs.clone();
    Effect::new(move |_| {
        motion.reset(GroupKey::Section(SectionId::Projects));
        motion.register(
            GroupKey::Section(SectionId::Projects),
            section_ref.get().map(Into::into),
        );
        motion.reset(GroupKey::ProjectCards);
        for card in &reg_refs {
            motion.register(GroupKey::ProjectCards, card.get().map(Into::into));
        }
    });

    let overlay = RwSignal::new(OverlayController::new());

    // Lock state tracks the overlay; last writer restores the default.
    Effect::new(move |_| {
        set_body_scroll_lock(overlay.get().scroll_locked());
    });
    on_cleanup(move || {
        overlay.try_update(|o| o.teardown());
        set_body_scroll_lock(false);
    });

    view! {
        <section node_ref=section_ref id="projects" class="max-w-6xl mx-auto px-6 py-24">
            <h2 class="text-3xl font-bold mb-12">
                <span class="text-purple-400">"03."</span>
                " Projects"
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {crate::projects::all()
                    .iter()
                    .enumerate()
                    .zip(card_refs)
                    .map(|((id, project), card_ref)| {
                        view! {
                            <div
                                node_ref=card_ref
                                class="group rounded-lg border border-gray-800 bg-gray-900/60 p-6 cursor-pointer hover:border-purple-500/50 hover:-translate-y-1 transition-all"
                                on:click=move |_| overlay.update(|o| o.open(id))
                            >
                                <ProjectGlyph icon=project.icon />
                                <h3 class="mt-4 font-semibold text-lg group-hover:text-purple-300 transition-colors">
                                    {project.title}
                                </h3>
                                <p class="mt-2 text-sm text-gray-400 leading-relaxed">
                                    {project.short_desc}
                                </p>
                                <p class="mt-4 text-xs text-purple-400">"Read more →"</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                overlay
                    .get()
                    .open_id()
                    .and_then(crate::projects::get)
                    .map(|project| view! { <ProjectModal project=project overlay=overlay /> })
            }}
        </section>
    }
}

#[component]
fn ProjectModal(project: &'static Project, overlay: RwSignal<OverlayController>) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm p-4"
            on:click=move |ev| {
                // close only when the click landed on the backdrop itself,
                // not when it bubbled out of the panel
                let on_backdrop = ev.target().is_some() && ev.target() == ev.current_target();
                overlay.update(|o| o.click_backdrop(on_backdrop));
            }
        >
            <div class="relative w-full max-w-2xl max-h-[85vh] overflow-y-auto rounded-xl border border-gray-700 bg-gray-900 p-8">
                <button
                    class="absolute top-4 right-4 text-gray-400 hover:text-white text-2xl leading-none"
                    aria-label="Close project details"
                    on:click=move |_| overlay.update(|o| o.close())
                >
                    "×"
                </button>
                <div class="flex items-center gap-4">
                    <ProjectGlyph icon=project.icon />
                    <h3 class="text-2xl font-bold">{project.title}</h3>
                </div>
                <p class="mt-6 text-gray-300 leading-relaxed whitespace-pre-line">
                    {project.details}
                </p>
                <div class="mt-6 flex flex-wrap gap-2">
                    {project
                        .stack
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 rounded-full text-xs bg-purple-500/10 text-purple-300 border border-purple-500/30">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mt-8 flex gap-4">
                    {project
                        .github
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-4 py-2 rounded-md border border-gray-600 hover:border-purple-400 text-sm transition-colors"
                                >
                                    "GitHub"
                                </a>
                            }
                        })}
                    {project
                        .demo
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-4 py-2 rounded-md bg-purple-600 hover:bg-purple-500 text-sm transition-colors"
                                >
                                    "Live Demo"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
