mod about;
mod contact;
mod footer;
mod hero;
mod icons;
mod navbar;
mod particles;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::motion::observer::{provide_scroll_state, MotionContext};

use about::AboutSection;
use contact::ContactSection;
use footer::{BackToTop, Footer};
use hero::HeroSection;
use navbar::Navbar;
use particles::ParticleField;
use projects::ProjectsSection;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-950 text-gray-100 font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // One animation orchestrator and one scroll sample stream per app.
    MotionContext::provide();
    provide_scroll_state();

    view! {
        <Title formatter=|title| format!("Rushi Parekh - {title}") />

        <Router>
            <Navbar />
            <main class="relative overflow-x-hidden">
                <ParticleField />
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
            <BackToTop />
        </Router>
    }
}

/// Single-page portfolio. Each section registers its reveal groups as it
/// mounts; one deferred arming pass then wires every trigger at once.
#[component]
fn HomePage() -> impl IntoView {
    use crate::motion::observer::{use_motion, RevealPlan};
    use crate::motion::GroupKey;

    let motion = use_motion();
    // Arming is deferred one frame, so every section mount effect in this
    // tick lands its registrations before the plans are wired up.
    Effect::new(move |_| {
        motion.arm_when_ready(vec![
            RevealPlan {
                group: GroupKey::Hero,
                effects: &hero::HERO_REVEAL,
            },
            RevealPlan {
                group: GroupKey::Section(crate::motion::SectionId::About),
                effects: &about::SECTION_REVEAL,
            },
            RevealPlan {
                group: GroupKey::Paragraphs,
                effects: &about::PARAGRAPH_REVEAL,
            },
            RevealPlan {
                group: GroupKey::Section(crate::motion::SectionId::Skills),
                effects: &about::SECTION_REVEAL,
            },
            RevealPlan {
                group: GroupKey::SkillCards,
                effects: &skills::CARD_REVEAL,
            },
            RevealPlan {
                group: GroupKey::Section(crate::motion::SectionId::Projects),
                effects: &about::SECTION_REVEAL,
            },
            RevealPlan {
                group: GroupKey::ProjectCards,
                effects: &projects::CARD_REVEAL,
            },
            RevealPlan {
                group: GroupKey::Section(crate::motion::SectionId::Contact),
                effects: &about::SECTION_REVEAL,
            },
            RevealPlan {
                group: GroupKey::ContactLinks,
                effects: &contact::LINK_REVEAL,
            },
        ]);
    });

    view! {
        <Title text="Full-Stack Developer" />
        <HeroSection />
        <AboutSection />
        <SkillsSection />
        <ProjectsSection />
        <ContactSection />
    }
}
