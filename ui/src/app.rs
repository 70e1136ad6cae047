//! Router and top-level layout

use crate::components::Toaster;
use crate::pages::{
    AboutPage, AuthPage, ChatPage, DashboardPage, HomePage, ImpactPage, ProjectPage,
    TechnologyPage, TeamPage, UserPage,
};
use crate::state::AppState;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app_state = AppState::new();
    provide_context(app_state);
    app_state.load_user();

    view! {
        <Title text="SHAKTI AI" />
        <Router>
            <main class="min-h-screen bg-[#1a0f2e] text-white">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/about/project") view=ProjectPage />
                    <Route path=path!("/about/technology") view=TechnologyPage />
                    <Route path=path!("/about/impact") view=ImpactPage />
                    <Route path=path!("/about/team") view=TeamPage />
                    <Route path=path!("/auth") view=AuthPage />
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route path=path!("/dashboard/:id") view=ChatPage />
                    <Route path=path!("/user") view=UserPage />
                </Routes>
            </main>
            <Toaster />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-purple-400 mb-4">"404"</h1>
                <p class="text-xl text-purple-200 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-purple-600 hover:bg-purple-700 rounded-lg font-medium transition-colors"
                >
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
