//! Account dropdown

use crate::state::AppState;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shakti::profile::UserBadge;
use shakti::Route;

#[component]
pub fn UserMenu() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let open = RwSignal::new(false);

    let badge = Memo::new(move |_| state.user.with(|u| UserBadge::from_profile(u.as_ref())));

    let go = move |route: Route| {
        open.set(false);
        navigate(&route.path(), Default::default());
    };

    let go_profile = go.clone();
    let go_login = go.clone();
    let logout = move |_| {
        state.clear_auth();
        go(Route::Auth);
    };

    view! {
        <div class="relative">
            <button
                class="w-9 h-9 rounded-full bg-purple-600 text-white font-semibold flex items-center justify-center"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {move || {
                    let initial = badge.get().initial();
                    if initial.is_empty() { "?".to_string() } else { initial }
                }}
            </button>

            <Show when=move || open.get()>
                <div class="absolute right-0 mt-2 w-64 rounded-lg bg-slate-900 border border-purple-500/30 shadow-xl z-50">
                    <div class="p-4 border-b border-purple-500/20">
                        <p class="font-semibold text-white">{move || badge.get().name}</p>
                        <p class="text-sm text-purple-200">{move || badge.get().email}</p>
                        <p class="text-xs text-purple-300 mt-1">{move || badge.get().position}</p>
                    </div>
                    {
                        let go_profile = go_profile.clone();
                        let go_login = go_login.clone();
                        let logout = logout.clone();
                        move || {
                            if badge.get().signed_in {
                                let go_profile = go_profile.clone();
                                view! {
                                    <div class="py-1">
                                        <button
                                            class="w-full text-left px-4 py-2 hover:bg-purple-800/50"
                                            on:click=move |_| go_profile(Route::User)
                                        >
                                            "Change Password"
                                        </button>
                                        <button
                                            class="w-full text-left px-4 py-2 text-red-300 hover:bg-purple-800/50"
                                            on:click=logout.clone()
                                        >
                                            "Log out"
                                        </button>
                                    </div>
                                }
                                .into_any()
                            } else {
                                let go_login = go_login.clone();
                                view! {
                                    <div class="py-1">
                                        <button
                                            class="w-full text-left px-4 py-2 hover:bg-purple-800/50"
                                            on:click=move |_| go_login(Route::Auth)
                                        >
                                            "Log in"
                                        </button>
                                    </div>
                                }
                                .into_any()
                            }
                        }
                    }
                </div>
            </Show>
        </div>
    }
}
