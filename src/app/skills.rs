use leptos::{html, prelude::*};

use crate::motion::observer::use_motion;
use crate::motion::{
    AnimProperty, Easing, EffectDescriptor, GroupKey, SectionId, TriggerSpec,
};

const CARD_TRIGGER: TriggerSpec = TriggerSpec {
    threshold_percent: 70.0,
    once: true,
};

/// Cards pop in with a slight overshoot, 100ms apart.
pub static CARD_REVEAL: [EffectDescriptor; 3] = [
    EffectDescriptor {
        property: AnimProperty::Opacity,
        from: 0.0,
        to: 1.0,
        duration_ms: 600,
        stagger_ms: 100,
        easing: Easing::EaseOut,
        trigger: CARD_TRIGGER,
    },
    EffectDescriptor {
        property: AnimProperty::TranslateY,
        from: 50.0,
        to: 0.0,
        duration_ms: 600,
        stagger_ms: 100,
        easing: Easing::EaseOut,
        trigger: CARD_TRIGGER,
    },
    EffectDescriptor {
        property: AnimProperty::Scale,
        from: 0.9,
        to: 1.0,
        duration_ms: 600,
        stagger_ms: 100,
        easing: Easing::BackOut,
        trigger: CARD_TRIGGER,
    },
];

struct Skill {
    name: &'static str,
    blurb: &'static str,
}

static SKILLS: &[Skill] = &[
    Skill {
        name: "React & Next.js",
        blurb: "Component architecture, SSR, and state management at scale.",
    },
    Skill {
        name: "TypeScript",
        blurb: "Typed frontends and shared contracts across the stack.",
    },
    Skill {
        name: "Node.js & Express",
        blurb: "REST APIs, auth flows, and background job pipelines.",
    },
    Skill {
        name: "PostgreSQL",
        blurb: "Schema design, query tuning, and migrations with Knex.",
    },
    Skill {
        name: "Tailwind CSS",
        blurb: "Design systems and responsive layouts without the CSS sprawl.",
    },
    Skill {
        name: "Motion Design",
        blurb: "Scroll-triggered reveals, timelines, and parallax that stay at 60fps.",
    },
    Skill {
        name: "React Native",
        blurb: "Cross-platform mobile apps sharing logic with the web.",
    },
    Skill {
        name: "Python",
        blurb: "Data plumbing and ML-backed features with scikit-learn.",
    },
];

#[component]
pub fn SkillsSection() -> impl IntoView {
    let motion = use_motion();
    let section_ref = NodeRef::<html::Section>::new();
    let card_refs: Vec<NodeRef<html::Div>> = SKILLS.iter().map(|_| NodeRef::new()).collect();

    let reg_refs = card_refs.clone();
    Effect::new(move |_| {
        motion.reset(GroupKey::Section(SectionId::Skills));
        motion.register(
            GroupKey::Section(SectionId::Skills),
            section_ref.get().map(Into::into),
        );
        motion.reset(GroupKey::SkillCards);
        for card in &reg_refs {
            motion.register(GroupKey::SkillCards, card.get().map(Into::into));
        }
    });

    view! {
        <section node_ref=section_ref id="skills" class="max-w-6xl mx-auto px-6 py-24">
            <h2 class="text-3xl font-bold mb-12">
                <span class="text-purple-400">"02."</span>
                " Skills"
            </h2>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                {SKILLS
                    .iter()
                    .zip(card_refs)
                    .map(|(skill, card_ref)| {
                        view! {
                            <div
                                node_ref=card_ref
                                class="rounded-lg border border-gray-800 bg-gray-900/60 p-6 hover:border-purple-500/50 transition-colors"
                            >
                                <h3 class="font-semibold text-lg mb-2">{skill.name}</h3>
                                <p class="text-sm text-gray-400 leading-relaxed">{skill.blurb}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
