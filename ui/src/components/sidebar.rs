//! Sidebar with the user's analyses

use crate::state::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use shakti::chat::contexts::delete_chat;
use shakti::Route;

/// Sidebar listing recent analyses
#[component]
pub fn Sidebar(
    /// Whether sidebar is open (mobile)
    is_open: RwSignal<bool>,
    /// Id of the analysis on screen, if any
    #[prop(into)]
    current: Signal<Option<String>>,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    // Load the list on mount and whenever the session changes
    Effect::new(move |_| {
        state.token.track();
        state.load_chats();
    });

    let new_analysis = {
        let navigate = navigate.clone();
        move |_| {
            is_open.set(false);
            navigate(&Route::Dashboard.path(), Default::default());
        }
    };

    let on_delete = Callback::new(move |id: String| {
        let navigate = navigate.clone();
        spawn_local(async move {
            let token = state.token.get_untracked();
            let viewing = current.get_untracked();
            match delete_chat(&state.api(), token.as_deref(), &id, viewing.as_deref()).await {
                Ok(deletion) => {
                    state.chats.set(deletion.remaining);
                    if let Some(route) = deletion.redirect {
                        navigate(&route.path(), Default::default());
                    }
                }
                Err(notice) => state.notify(notice),
            }
        });
    });

    view! {
        // Overlay for mobile
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 bg-black/60 backdrop-blur-sm z-30 lg:hidden"
                on:click=move |_| is_open.set(false)
            ></div>
        </Show>

        <aside class=move || format!(
            "fixed lg:relative inset-y-0 left-0 z-40 w-72 bg-zinc-950 border-r border-purple-500/20
             flex flex-col transform transition-transform duration-300 lg:translate-x-0 {}",
            if is_open.get() { "translate-x-0" } else { "-translate-x-full" }
        )>
            <div class="p-4 border-b border-purple-500/20">
                <button
                    on:click=new_analysis
                    class="w-full flex items-center justify-center gap-2 px-4 py-2 rounded-lg bg-purple-600 hover:bg-purple-700 text-white font-medium"
                >
                    "+ New Analysis"
                </button>
            </div>

            <div class="flex-1 overflow-y-auto p-4">
                <h3 class="text-sm text-zinc-400 mb-4">"Recent Analysis"</h3>
                <Show
                    when=move || state.chats.with(|c| !c.is_empty())
                    fallback=|| view! {
                        <p class="text-sm text-zinc-500 italic px-2">"No analyses yet"</p>
                    }
                >
                    <ul class="space-y-1">
                        <For
                            each=move || state.chats.get()
                            key=|chat| chat.id.clone()
                            children=move |chat| {
                                let id = chat.id.clone();
                                let href = Route::Chat(chat.id.clone()).path();
                                let selected = {
                                    let id = id.clone();
                                    move || current.get().as_deref() == Some(id.as_str())
                                };
                                view! {
                                    <li class=move || format!(
                                        "group flex items-center justify-between rounded-md px-2 py-2 text-sm {}",
                                        if selected() { "bg-purple-800/60 text-white" } else { "text-zinc-300 hover:bg-zinc-800" }
                                    )>
                                        <a href=href class="flex-1 truncate" on:click=move |_| is_open.set(false)>
                                            {chat.title.clone()}
                                        </a>
                                        <button
                                            class="opacity-0 group-hover:opacity-100 text-zinc-500 hover:text-red-400 ml-2"
                                            title="Delete analysis"
                                            on:click=move |_| on_delete.run(id.clone())
                                        >
                                            "🗑"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>

            <div class="p-4 border-t border-purple-500/20">
                <div class="text-xs text-zinc-500 text-center">
                    {concat!("SHAKTI AI v", env!("CARGO_PKG_VERSION"))}
                </div>
            </div>
        </aside>
    }
}
