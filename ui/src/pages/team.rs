//! Team page with a carousel of members

use crate::components::Navbar;
use leptos::prelude::*;
use shakti::carousel::{Carousel, Direction};
use shakti::content::{team_carousel, TeamMember};

#[component]
pub fn TeamPage() -> impl IntoView {
    let carousel = RwSignal::new(team_carousel());

    let member = move || carousel.with(|c| c.current().copied());
    let slide_class = move || match carousel.with(Carousel::direction) {
        Direction::Forward => "animate-[slide-in-right_0.4s_ease-out]",
        Direction::Backward => "animate-[slide-in-left_0.4s_ease-out]",
        Direction::None => "",
    };

    let dots = move || {
        let (len, index) = carousel.with(|c| (c.len(), c.index()));
        (0..len)
            .map(|i| {
                view! {
                    <button
                        class=if i == index { "w-3 h-3 rounded-full bg-purple-400" } else { "w-3 h-3 rounded-full bg-purple-800" }
                        on:click=move |_| carousel.update(|c| c.select(i))
                    ></button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-[#1a0f2e] to-[#31195f]">
            <Navbar />
            <main class="container mx-auto px-4 py-20">
                <h1 class="text-5xl md:text-7xl font-extrabold text-white mb-12 text-center">"Meet Our Team"</h1>

                <div class="flex items-center justify-center gap-6">
                    <button
                        class="w-12 h-12 rounded-full bg-purple-800 hover:bg-purple-700 text-white text-xl"
                        on:click=move |_| carousel.update(|c| { c.prev(); })
                    >
                        "‹"
                    </button>

                    {move || member().map(|m: TeamMember| view! {
                        <div class=format!("max-w-md w-full bg-purple-900/40 rounded-3xl p-8 text-center {}", slide_class())>
                            <img src=m.image alt=m.name class="w-40 h-40 mx-auto rounded-full object-cover mb-6 border-4 border-purple-500" />
                            <p class="text-white font-medium text-lg">{m.name}</p>
                            <p class="text-purple-200/80 text-sm">{m.contribution}</p>
                            <p class="text-gray-300 italic mt-4">{format!("\u{201c}{}\u{201d}", m.quote)}</p>
                            <a href=m.linkedin target="_blank" class="inline-block mt-4 text-purple-300 hover:text-white underline">
                                "LinkedIn"
                            </a>
                        </div>
                    })}

                    <button
                        class="w-12 h-12 rounded-full bg-purple-800 hover:bg-purple-700 text-white text-xl"
                        on:click=move |_| carousel.update(|c| { c.next(); })
                    >
                        "›"
                    </button>
                </div>

                <div class="flex justify-center gap-2 mt-8">{dots}</div>
            </main>
        </div>
    }
}
