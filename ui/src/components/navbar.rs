//! Top navigation bar

use crate::components::UserMenu;
use crate::state::AppState;
use leptos::prelude::*;
use shakti::Route;

/// Main application navbar
#[component]
pub fn Navbar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let menu_open = RwSignal::new(false);

    let is_auth = Signal::derive(move || state.token.get().is_some());

    let links = move || {
        let mut links = vec![(Route::Dashboard, "Dashboard")];
        if !is_auth.get() {
            links.push((Route::Auth, "Login"));
        }
        links.push((Route::About, "About"));
        links
            .into_iter()
            .map(|(route, label)| {
                view! {
                    <a
                        href=route.path()
                        class="px-3 py-2 rounded-md text-purple-100 hover:text-white hover:bg-purple-800/50 transition-colors"
                    >
                        {label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class="sticky top-0 z-40 bg-[#1a0f2e]/90 backdrop-blur border-b border-purple-500/20">
            <div class="max-w-7xl mx-auto px-4 h-16 flex items-center justify-between">
                <a href="/" class="text-2xl font-bold text-white tracking-wide hover:opacity-80 transition-opacity">
                    "SHAKTI AI"
                </a>

                <nav class="hidden md:flex items-center gap-2">
                    {links}
                    <Show when=move || is_auth.get()>
                        <UserMenu />
                    </Show>
                </nav>

                <button
                    class="md:hidden text-white p-2"
                    on:click=move |_| menu_open.update(|o| *o = !*o)
                >
                    "☰"
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="md:hidden flex flex-col gap-1 px-4 pb-4">
                    {links}
                    <Show when=move || is_auth.get()>
                        <UserMenu />
                    </Show>
                </nav>
            </Show>
        </header>
    }
}
