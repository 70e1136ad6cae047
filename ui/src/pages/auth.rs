//! Login / signup page

use crate::components::{LoadingSpinner, Navbar};
use crate::cookie::CookieTokenStore;
use crate::state::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use shakti::auth::{sign_in, AuthForm, AuthMode};

#[component]
pub fn AuthPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::Login);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let position = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let is_signup = move || mode.get() == AuthMode::Signup;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let form = AuthForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            name: name.get_untracked(),
            position: position.get_untracked(),
        };
        let mode = mode.get_untracked();
        let navigate = navigate.clone();
        loading.set(true);

        spawn_local(async move {
            // The session only counts once the cookie is written
            match sign_in(&state.api(), &CookieTokenStore, mode, &form).await {
                Ok(signed_in) => {
                    state.token.set(Some(signed_in.token.clone()));
                    state.notify(signed_in.notice.clone());
                    state.load_user();
                    navigate(&signed_in.redirect().path(), Default::default());
                }
                Err(notice) => state.notify(notice),
            }
            loading.set(false);
        });
    };

    let toggle = move |_| {
        mode.update(|m| {
            *m = match m {
                AuthMode::Login => AuthMode::Signup,
                AuthMode::Signup => AuthMode::Login,
            }
        })
    };

    let field = |label: &'static str, kind: &'static str, placeholder: &'static str, value: RwSignal<String>| {
        view! {
            <label class="block">
                <span class="block text-sm font-medium text-purple-200 mb-1">{label}</span>
                <input
                    type=kind
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    class="w-full px-4 py-3 bg-purple-950/60 border border-purple-700 rounded-lg text-white
                           placeholder-purple-400 focus:outline-none focus:ring-2 focus:ring-purple-500"
                />
            </label>
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-[#1a0f2e] to-[#31195f]">
            <Navbar />
            <div class="flex items-center justify-center px-4 py-16">
                <div class="w-full max-w-md bg-purple-900/40 backdrop-blur rounded-2xl p-8 shadow-xl">
                    <h1 class="text-3xl font-bold text-white text-center mb-8">
                        {move || mode.get().label()}
                    </h1>

                    <form on:submit=on_submit class="space-y-5">
                        <Show when=is_signup>
                            {field("Name", "text", "John Doe", name)}
                            {field("Position", "text", "Colonel", position)}
                        </Show>
                        {field("Email", "email", "john@example.com", email)}
                        {field("Password", "password", "", password)}

                        <button
                            type="submit"
                            disabled=move || loading.get()
                            class="w-full py-3 bg-purple-600 hover:bg-purple-700 disabled:opacity-60
                                   text-white font-semibold rounded-lg flex items-center justify-center gap-2"
                        >
                            <Show when=move || loading.get()>
                                <LoadingSpinner />
                            </Show>
                            {move || mode.get().label()}
                        </button>
                    </form>

                    <p class="text-center text-purple-200 mt-6 text-sm">
                        {move || if is_signup() { "Already have an account? " } else { "Don't have an account? " }}
                        <button class="text-white underline" on:click=toggle>
                            {move || if is_signup() { "Login" } else { "Sign Up" }}
                        </button>
                    </p>
                </div>
            </div>
        </div>
    }
}
