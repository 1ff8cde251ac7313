use leptos::{html, prelude::*};

use crate::motion::observer::use_motion;
use crate::motion::{
    AnimProperty, Easing, EffectDescriptor, GroupKey, SectionId, TriggerSpec,
};

const SECTION_TRIGGER: TriggerSpec = TriggerSpec {
    threshold_percent: 80.0,
    once: true,
};

/// Shared by every section wrapper: fade up once the section's top edge
/// reaches 80% of the viewport.
pub static SECTION_REVEAL: [EffectDescriptor; 2] = [
    EffectDescriptor {
        property: AnimProperty::Opacity,
        from: 0.0,
        to: 1.0,
        duration_ms: 800,
        stagger_ms: 0,
        easing: Easing::EaseOut,
        trigger: SECTION_TRIGGER,
    },
    EffectDescriptor {
        property: AnimProperty::TranslateY,
        from: 50.0,
        to: 0.0,
        duration_ms: 800,
        stagger_ms: 0,
        easing: Easing::EaseOut,
        trigger: SECTION_TRIGGER,
    },
];

const PARAGRAPH_TRIGGER: TriggerSpec = TriggerSpec {
    threshold_percent: 70.0,
    once: true,
};

pub static PARAGRAPH_REVEAL: [EffectDescriptor; 2] = [
    EffectDescriptor {
        property: AnimProperty::Opacity,
        from: 0.0,
        to: 1.0,
        duration_ms: 700,
        stagger_ms: 200,
        easing: Easing::EaseOut,
        trigger: PARAGRAPH_TRIGGER,
    },
    EffectDescriptor {
        property: AnimProperty::TranslateY,
        from: 30.0,
        to: 0.0,
        duration_ms: 700,
        stagger_ms: 200,
        easing: Easing::EaseOut,
        trigger: PARAGRAPH_TRIGGER,
    },
];

#[component]
pub fn AboutSection() -> impl IntoView {
    let motion = use_motion();
    let section_ref = NodeRef::<html::Section>::new();
    let para_refs: [NodeRef<html::P>; 3] = [NodeRef::new(), NodeRef::new(), NodeRef::new()];

    Effect::new(move |_| {
        motion.reset(GroupKey::Section(SectionId::About));
        motion.register(
            GroupKey::Section(SectionId::About),
            section_ref.get().map(Into::into),
        );
        motion.reset(GroupKey::Paragraphs);
        for p in para_refs {
            motion.register(GroupKey::Paragraphs, p.get().map(Into::into));
        }
    });

    view! {
        <section node_ref=section_ref id="about" class="max-w-4xl mx-auto px-6 py-24">
            <h2 class="text-3xl font-bold mb-8">
                <span class="text-purple-400">"01."</span>
                " About Me"
            </h2>
            <div class="space-y-6 text-lg text-gray-300 leading-relaxed">
                <p node_ref=para_refs[0]>
                    "I'm a full-stack developer who enjoys taking products from a Figma "
                    "frame to a deployed, measurable system. Most of my work lives at the "
                    "intersection of interface polish and backend plumbing."
                </p>
                <p node_ref=para_refs[1]>
                    "I've shipped healthcare platforms, messaging dashboards, booking "
                    "systems, and marketplaces, usually owning the stack end to end: "
                    "schema design, API surface, and the animated frontend on top."
                </p>
                <p node_ref=para_refs[2]>
                    "When I'm not shipping, I'm experimenting with motion design and "
                    "squeezing render time out of whatever I built last month."
                </p>
            </div>
        </section>
    }
}
