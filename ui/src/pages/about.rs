//! About pages: overview, project, technology and impact

use crate::components::Navbar;
use leptos::prelude::*;
use shakti::content::{Card, ABOUT_SECTIONS, IMPACTS, PROJECT_OVERVIEW, TECHNOLOGIES};

#[component]
fn CardGrid(cards: &'static [Card], #[prop(default = "md:grid-cols-2")] columns: &'static str) -> impl IntoView {
    view! {
        <div class=format!("grid grid-cols-1 {} gap-6 mb-12", columns)>
            {cards.iter().map(|card| view! {
                <div class="bg-purple-900/40 backdrop-blur-sm rounded-2xl p-6 hover:bg-purple-900/60 transition-colors">
                    <h3 class="text-xl font-bold text-white mb-2">{card.title}</h3>
                    <p class="text-gray-300">{card.description}</p>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn PageShell(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-[#1a0f2e] to-[#31195f]">
            <Navbar />
            <main class="container mx-auto px-4 py-20">
                <h1 class="text-5xl md:text-7xl font-extrabold text-white mb-8 text-center">{title}</h1>
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageShell title="ABOUT US">
            <p class="text-xl text-purple-300 text-center mb-16">
                "Discover the future of military intelligence"
            </p>
            <div class="grid md:grid-cols-2 gap-8">
                {ABOUT_SECTIONS.iter().map(|section| view! {
                    <a
                        href=section.path
                        class="block bg-purple-900/40 rounded-2xl p-8 hover:bg-purple-900/60 hover:scale-[1.02] transition-all"
                    >
                        <h2 class="text-2xl font-bold text-white mb-4">{section.card.title}</h2>
                        <p class="text-gray-300">{section.card.description}</p>
                    </a>
                }).collect::<Vec<_>>()}
            </div>
        </PageShell>
    }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    view! {
        <PageShell title="Project Overview">
            <div class="max-w-4xl mx-auto bg-purple-900/40 backdrop-blur-sm rounded-3xl p-8">
                <p class="text-lg text-gray-300">{PROJECT_OVERVIEW}</p>
            </div>
        </PageShell>
    }
}

#[component]
pub fn TechnologyPage() -> impl IntoView {
    view! {
        <PageShell title="Technology Stack">
            <h2 class="text-2xl font-bold text-white mt-8 mb-4">"Our Cutting-Edge Technologies"</h2>
            <CardGrid cards=&TECHNOLOGIES columns="sm:grid-cols-2 lg:grid-cols-3" />
        </PageShell>
    }
}

#[component]
pub fn ImpactPage() -> impl IntoView {
    view! {
        <PageShell title="Real-World Impact">
            <CardGrid cards=&IMPACTS />
        </PageShell>
    }
}
