use leptos::{html, prelude::*};

use crate::motion::observer::{use_motion, use_scroll_state};
use crate::motion::scroll::band_progress;
use crate::motion::{AnimProperty, Easing, EffectDescriptor, GroupKey, TriggerSpec};

const HERO_TRIGGER: TriggerSpec = TriggerSpec {
    threshold_percent: 100.0,
    once: true,
};

/// Intro timeline: headline, tagline, and CTA row fade up and sharpen in
/// sequence.
pub static HERO_REVEAL: [EffectDescriptor; 3] = [
    EffectDescriptor {
        property: AnimProperty::Opacity,
        from: 0.0,
        to: 1.0,
        duration_ms: 800,
        stagger_ms: 150,
        easing: Easing::EaseOut,
        trigger: HERO_TRIGGER,
    },
    EffectDescriptor {
        property: AnimProperty::TranslateY,
        from: 20.0,
        to: 0.0,
        duration_ms: 800,
        stagger_ms: 150,
        easing: Easing::EaseOut,
        trigger: HERO_TRIGGER,
    },
    EffectDescriptor {
        property: AnimProperty::Blur,
        from: 8.0,
        to: 0.0,
        duration_ms: 800,
        stagger_ms: 150,
        easing: Easing::EaseOut,
        trigger: HERO_TRIGGER,
    },
];

/// How far the background blobs drift over one viewport of scrolling.
const BLOB_DRIFT_PX: f64 = 120.0;

#[component]
pub fn HeroSection() -> impl IntoView {
    let motion = use_motion();
    let scroll = use_scroll_state();

    let headline_ref = NodeRef::<html::H1>::new();
    let tagline_ref = NodeRef::<html::P>::new();
    let cta_ref = NodeRef::<html::Div>::new();
    let blob_a_ref = NodeRef::<html::Div>::new();
    let blob_b_ref = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        motion.reset(GroupKey::Hero);
        motion.register(GroupKey::Hero, headline_ref.get().map(Into::into));
        motion.register(GroupKey::Hero, tagline_ref.get().map(Into::into));
        motion.register(GroupKey::Hero, cta_ref.get().map(Into::into));

        motion.reset(GroupKey::HeroBlobs);
        motion.register(GroupKey::HeroBlobs, blob_a_ref.get().map(Into::into));
        motion.register(GroupKey::HeroBlobs, blob_b_ref.get().map(Into::into));
    });

    // Continuous path: blobs lag behind the scroll across the first
    // viewport, then park. Reversible on the way back up.
    Effect::new(move |_| {
        let y = scroll.y.get();
        let viewport = web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let progress = band_progress(y, 0.0, viewport);
        motion.apply_parallax(GroupKey::HeroBlobs, progress, BLOB_DRIFT_PX);
    });

    view! {
        <section id="hero" class="relative min-h-screen flex items-center justify-center px-6">
            <div
                node_ref=blob_a_ref
                class="absolute -top-24 -left-24 w-96 h-96 rounded-full bg-purple-600/30 blur-3xl pointer-events-none"
            ></div>
            <div
                node_ref=blob_b_ref
                class="absolute -bottom-32 -right-16 w-[28rem] h-[28rem] rounded-full bg-indigo-500/20 blur-3xl pointer-events-none"
            ></div>
            <div class="relative z-10 max-w-3xl text-center">
                <h1 node_ref=headline_ref class="text-5xl sm:text-6xl font-bold tracking-tight">
                    "Hi, I'm " <span class="text-purple-400">"Rushi Parekh"</span>
                </h1>
                <p node_ref=tagline_ref class="mt-6 text-xl text-gray-400 leading-relaxed">
                    "Full-stack developer building responsive, animated web experiences "
                    "from database to pixel."
                </p>
                <div node_ref=cta_ref class="mt-10 flex items-center justify-center gap-4">
                    <a
                        href="#projects"
                        class="px-6 py-3 rounded-md bg-purple-600 hover:bg-purple-500 font-medium transition-colors"
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="px-6 py-3 rounded-md border border-purple-500/50 hover:border-purple-400 text-purple-300 font-medium transition-colors"
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}
