use leptos::prelude::*;

use crate::motion::observer::{scroll_to_top, use_scroll_state};
use crate::motion::ScrollSample;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-800 py-8">
            <div class="max-w-6xl mx-auto px-6 flex flex-col sm:flex-row items-center justify-between gap-2 text-sm text-gray-500">
                <p>"© 2026 Rushi Parekh. Built with Rust and Leptos."</p>
                <div class="flex items-center gap-4">
                    <a
                        href="https://github.com/rushiparekh"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-purple-300 transition-colors"
                    >
                        "GitHub"
                    </a>
                    <a
                        href="https://linkedin.com/in/rushiparekh"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-purple-300 transition-colors"
                    >
                        "LinkedIn"
                    </a>
                    <span class="text-xs">"Last deployed: " {env!("BUILD_TIME")}</span>
                </div>
            </div>
        </footer>
    }
}

/// Floating button that appears after 300px of scroll and smooth-scrolls
/// back to the top. Hidden again as soon as the user scrolls back.
#[component]
pub fn BackToTop() -> impl IntoView {
    let scroll = use_scroll_state();
    let visible = move || ScrollSample::new(scroll.y.get()).back_to_top_visible();

    view! {
        <button
            class=move || {
                if visible() {
                    "fixed bottom-6 right-6 z-40 w-12 h-12 rounded-full bg-purple-600 hover:bg-purple-500 text-white shadow-lg transition-all duration-300 opacity-100"
                } else {
                    "fixed bottom-6 right-6 z-40 w-12 h-12 rounded-full bg-purple-600 text-white shadow-lg transition-all duration-300 opacity-0 pointer-events-none"
                }
            }
            aria-label="Back to top"
            on:click=move |_| scroll_to_top()
        >
            "↑"
        </button>
    }
}
