use leptos::prelude::*;

use crate::motion::observer::use_scroll_state;
use crate::motion::ScrollSample;

static LINKS: &[(&str, &str)] = &[
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
    ("Contact", "#contact"),
];

/// Fixed navbar that tightens up once the page has been scrolled past the
/// hero's opening. Fully reversible on the way back up.
#[component]
pub fn Navbar() -> impl IntoView {
    let scroll = use_scroll_state();
    let compact = move || ScrollSample::new(scroll.y.get()).navbar_compact();

    view! {
        <nav class=move || {
            if compact() {
                "fixed top-0 inset-x-0 z-40 bg-gray-950/90 backdrop-blur border-b border-gray-800 py-3 transition-all duration-300"
            } else {
                "fixed top-0 inset-x-0 z-40 bg-transparent py-6 transition-all duration-300"
            }
        }>
            <div class="max-w-6xl mx-auto px-6 flex items-center justify-between">
                <a href="#hero" class="font-bold text-lg tracking-tight">
                    <span class="text-purple-400">"R"</span>
                    "P"
                </a>
                <div class="flex items-center gap-6 text-sm">
                    {LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=*href
                                    class="text-gray-300 hover:text-purple-300 transition-colors"
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
