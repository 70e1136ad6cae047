//! Home/landing page

use crate::components::Navbar;
use crate::state::AppState;
use leptos::prelude::*;
use shakti::content::{FEATURES, HIGHLIGHTS};
use shakti::Route;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Landing page with hero section and key features
#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let features_ref = NodeRef::<leptos::html::Section>::new();

    // A stale cookie is not a session; wait for the profile
    let signed_in = move || state.user.with(|u| u.is_some());

    let learn_more = move |_| {
        if let Some(el) = features_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-[#1a0f2e] to-[#31195f] text-white">
            <Navbar />

            <div class="bg-purple-800 py-4 px-4">
                <div class="container mx-auto flex flex-col sm:flex-row justify-between items-center">
                    <p class="text-sm sm:text-base mb-2 sm:mb-0">
                        "Welcome to the next generation of artificial intelligence"
                    </p>
                    <button
                        class="px-3 py-1 rounded-md bg-purple-600 hover:bg-purple-700 text-sm"
                        on:click=learn_more
                    >
                        "Learn More →"
                    </button>
                </div>
            </div>

            <main class="container mx-auto px-4 py-6 sm:py-10">
                <div class="relative overflow-hidden rounded-3xl p-6 sm:p-12 shadow-xl mb-10 sm:mb-20">
                    <div class="grid md:grid-cols-2 gap-8 md:gap-16 items-center relative z-10">
                        <div class="space-y-6 sm:space-y-8">
                            <div class="inline-block px-4 py-2 rounded-full bg-purple-700/50 text-purple-100 text-sm border border-purple-500/20">
                                "Advanced Military Intelligence"
                            </div>
                            <h1 class="text-4xl sm:text-5xl md:text-6xl font-bold leading-tight tracking-tight">
                                "Military Intelligence System"
                            </h1>
                            <p class="text-base sm:text-lg text-purple-100 leading-relaxed max-w-xl">
                                "Empower your military operations with our cutting-edge AI-driven intelligence system. "
                                "Analyze drone imagery, detect objects in real-time, and gain tactical insights for "
                                "enhanced decision-making."
                            </p>
                            <Show
                                when=signed_in
                                fallback=|| view! {
                                    <a
                                        href=Route::Auth.path()
                                        class="inline-flex items-center px-6 py-3 rounded-full bg-purple-600 hover:bg-purple-700 text-lg shadow-lg"
                                    >
                                        "Login"
                                    </a>
                                }
                            >
                                <a
                                    href=Route::Dashboard.path()
                                    class="inline-flex items-center px-6 py-3 rounded-full bg-purple-600 hover:bg-purple-700 text-lg shadow-lg"
                                >
                                    "Go to Dashboard →"
                                </a>
                            </Show>
                        </div>

                        <div class="relative">
                            <img
                                src="/shakti1.jpg"
                                alt="Military Intelligence Interface"
                                class="rounded-2xl w-full object-cover shadow-2xl"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-purple-900/80 to-transparent rounded-2xl flex items-end justify-around p-4 sm:p-6">
                                {HIGHLIGHTS.iter().map(|card| view! {
                                    <div class="text-center">
                                        <p class="font-semibold">{card.title}</p>
                                        <p class="text-xs text-purple-200">{card.description}</p>
                                    </div>
                                }).collect::<Vec<_>>()}
                            </div>
                        </div>
                    </div>
                </div>

                <section node_ref=features_ref class="mb-10 sm:mb-20">
                    <h2 class="text-2xl sm:text-3xl font-bold text-center mb-8 sm:mb-12">"Key Features"</h2>
                    <div class="grid sm:grid-cols-2 md:grid-cols-3 gap-6 sm:gap-8">
                        {FEATURES.iter().map(|card| view! {
                            <div class="bg-purple-900/40 rounded-2xl p-6 hover:bg-purple-900/60 transition-colors">
                                <h3 class="text-xl font-semibold mb-2">{card.title}</h3>
                                <p class="text-purple-200">{card.description}</p>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </section>
            </main>
        </div>
    }
}
