//! User profile and password change

use crate::components::{LoadingSpinner, Navbar};
use crate::state::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shakti::profile::{change_password, load_profile, PasswordForm};
use shakti::types::UserProfile;

#[component]
pub fn UserPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let profile = RwSignal::new(None::<UserProfile>);
    let loading = RwSignal::new(true);
    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        let token = state.token.get();
        loading.set(true);
        spawn_local(async move {
            match load_profile(&state.api(), token.as_deref()).await {
                Ok(user) => profile.set(Some(user)),
                Err(notice) => state.notify(notice),
            }
            loading.set(false);
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(email) = profile.with_untracked(|p| p.as_ref().map(|p| p.email.clone())) else {
            return;
        };
        let mut form = PasswordForm {
            current: current.get_untracked(),
            new: new.get_untracked(),
        };
        let token = state.token.get_untracked();
        saving.set(true);

        spawn_local(async move {
            match change_password(&state.api(), token.as_deref(), &email, &form).await {
                Ok(notice) => {
                    state.notify(notice);
                    form.clear();
                    current.set(form.current);
                    new.set(form.new);
                }
                Err(notice) => state.notify(notice),
            }
            saving.set(false);
        });
    };

    let details = move || {
        profile.get().map(|user| {
            let role = if user.is_admin { "Admin" } else { "User" };
            let joined = user
                .created_at
                .map(|d| d.format("%B %-d, %Y").to_string())
                .unwrap_or_else(|| "Unknown".to_string());
            let rows = [
                ("Name", user.name.clone()),
                ("Email", user.email.clone()),
                ("Position", user.position.clone()),
                ("Job Title", user.job_title.clone()),
                ("Location", user.location.clone()),
                ("Role", role.to_string()),
                ("Joined", joined),
            ];
            view! {
                <div class="grid md:grid-cols-2 gap-6">
                    <section class="bg-purple-900/40 rounded-2xl p-6">
                        <h2 class="text-xl font-semibold text-white mb-4">"User Information"</h2>
                        <dl class="space-y-2">
                            {rows.into_iter().map(|(label, value)| view! {
                                <div class="flex justify-between gap-4">
                                    <dt class="text-purple-300">{label}</dt>
                                    <dd class="text-white text-right">{value}</dd>
                                </div>
                            }).collect::<Vec<_>>()}
                        </dl>
                    </section>

                    <section class="bg-purple-900/40 rounded-2xl p-6">
                        <h2 class="text-xl font-semibold text-white mb-4">"Activity Summary"</h2>
                        <p class="text-purple-300">"Total Contexts Created"</p>
                        <p class="text-4xl font-bold text-white">{user.total_contexts.to_string()}</p>
                    </section>
                </div>
            }
        })
    };

    let input_class = "w-full px-4 py-3 bg-purple-950/60 border border-purple-700 rounded-lg text-white \
                       focus:outline-none focus:ring-2 focus:ring-purple-500";

    view! {
        <div class="min-h-screen bg-gradient-to-br from-[#1a0f2e] to-[#31195f]">
            <Navbar />
            <main class="container mx-auto px-4 py-12 max-w-4xl">
                <h1 class="text-4xl font-bold text-white mb-8">"User Profile"</h1>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! {
                        <div class="flex justify-center py-16"><LoadingSpinner size="w-12 h-12" /></div>
                    }
                >
                    {details}
                </Show>

                <Show when=move || profile.with(|p| p.is_some())>
                    <section class="bg-purple-900/40 rounded-2xl p-6 mt-6">
                        <h2 class="text-xl font-semibold text-white mb-4">"Change Password"</h2>
                        <form on:submit=on_submit class="space-y-4 max-w-md">
                            <label class="block">
                                <span class="block text-sm text-purple-200 mb-1">"Current Password"</span>
                                <input
                                    type="password"
                                    required=true
                                    prop:value=move || current.get()
                                    on:input=move |ev| current.set(event_target_value(&ev))
                                    class=input_class
                                />
                            </label>
                            <label class="block">
                                <span class="block text-sm text-purple-200 mb-1">"New Password"</span>
                                <input
                                    type="password"
                                    required=true
                                    prop:value=move || new.get()
                                    on:input=move |ev| new.set(event_target_value(&ev))
                                    class=input_class
                                />
                            </label>
                            <button
                                type="submit"
                                disabled=move || saving.get()
                                class="px-6 py-3 bg-purple-600 hover:bg-purple-700 disabled:opacity-60 text-white rounded-lg"
                            >
                                "Update Password"
                            </button>
                        </form>
                    </section>
                </Show>
            </main>
        </div>
    }
}
