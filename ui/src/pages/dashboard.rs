//! Dashboard: start a new analysis or continue an existing one

use crate::components::{ChatBubble, Composer, LoadingSpinner, MediaModal, Sidebar, TypingIndicator};
use crate::state::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use shakti::chat::{fetch_history, post_message, start_analysis};
use shakti::media::{MediaViewer, UploadBatch};
use shakti::profile::greeting;
use shakti::types::ChatMessage;
use shakti::Route;

/// Sidebar, modal and layout shared by both dashboard views.
#[component]
fn DashboardShell(
    #[prop(into)] current: Signal<Option<String>>,
    viewer: RwSignal<MediaViewer>,
    children: Children,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let sidebar_open = RwSignal::new(false);

    view! {
        <div class="flex h-screen bg-zinc-950 text-white">
            <Sidebar is_open=sidebar_open current=current />
            <div class="flex-1 flex flex-col min-w-0">
                <header class="flex items-center gap-3 px-4 py-3 border-b border-purple-500/20 md:hidden">
                    <button class="text-2xl" on:click=move |_| sidebar_open.update(|o| *o = !*o)>"☰"</button>
                    <a href="/" class="font-bold">"SHAKTI AI"</a>
                </header>
                <div class="relative flex-1 flex flex-col min-h-0">
                    {children()}
                    <Show when=move || !state.is_authenticated()>
                        <div class="absolute inset-0 bg-zinc-950/95 flex flex-col items-center justify-center gap-4 text-center px-4">
                            <p class="text-xl text-purple-200">"Please login to start a new analysis."</p>
                            <a href=Route::Auth.path() class="px-6 py-3 rounded-full bg-purple-600 hover:bg-purple-700">
                                "Login"
                            </a>
                        </div>
                    </Show>
                </div>
            </div>
            <MediaModal viewer=viewer />
        </div>
    }
}

/// New analysis view at `/dashboard`
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let text = RwSignal::new(String::new());
    let uploads = RwSignal::new(UploadBatch::new());
    let viewer = RwSignal::new(MediaViewer::default());
    let sending = RwSignal::new(false);

    let heading = move || state.user.with(|u| greeting(u.as_ref()));

    let on_submit = move || {
        if sending.get_untracked() {
            return;
        }
        let payload = uploads.with_untracked(|u| u.to_payload(&text.get_untracked()));
        let token = state.token.get_untracked();
        let navigate = navigate.clone();
        sending.set(true);

        spawn_local(async move {
            match start_analysis(&state.api(), token.as_deref(), &payload).await {
                Ok(chat) => {
                    state.notify(chat.notice.clone());
                    text.set(String::new());
                    uploads.update(UploadBatch::clear);
                    state.load_chats();
                    navigate(&chat.route().path(), Default::default());
                }
                Err(notice) => state.notify(notice),
            }
            sending.set(false);
        });
    };

    view! {
        <DashboardShell current=Signal::derive(|| None::<String>) viewer=viewer>
            <div class="flex-1 flex flex-col items-center justify-center px-4 text-center">
                <h1 class="text-3xl md:text-4xl font-bold mb-3">{heading}</h1>
                <p class="text-purple-300">
                    "Upload drone imagery, videos or a briefing PDF and ask a question to begin."
                </p>
                <Show when=move || sending.get()>
                    <div class="mt-8"><LoadingSpinner size="w-10 h-10" /></div>
                </Show>
            </div>
            <Composer
                text=text
                uploads=uploads
                viewer=viewer
                on_submit=on_submit
                disabled=sending
                placeholder="Ask about your imagery..."
            />
        </DashboardShell>
    }
}

/// Existing analysis at `/dashboard/:id`
#[component]
pub fn ChatPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let params = use_params_map();
    let chat_id = Memo::new(move |_| params.with(|p| p.get("id")));

    let history = RwSignal::new(Vec::<ChatMessage>::new());
    let loading = RwSignal::new(false);
    let text = RwSignal::new(String::new());
    let uploads = RwSignal::new(UploadBatch::new());
    let viewer = RwSignal::new(MediaViewer::default());
    let sending = RwSignal::new(false);
    let bottom = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        let (Some(id), token) = (chat_id.get(), state.token.get()) else {
            return;
        };
        history.set(vec![]);
        loading.set(true);
        spawn_local(async move {
            match fetch_history(&state.api(), token.as_deref(), &id).await {
                Ok(messages) => history.set(messages),
                Err(notice) => state.notify(notice),
            }
            loading.set(false);
        });
    });

    // Keep the newest message in view
    Effect::new(move |_| {
        history.track();
        sending.track();
        if let Some(el) = bottom.get() {
            el.scroll_into_view();
        }
    });

    let on_submit = move || {
        let Some(id) = chat_id.get_untracked() else {
            return;
        };
        if sending.get_untracked() {
            return;
        }
        let payload = uploads.with_untracked(|u| u.to_payload(&text.get_untracked()));
        let token = state.token.get_untracked();
        sending.set(true);

        spawn_local(async move {
            match post_message(&state.api(), token.as_deref(), &id, &payload).await {
                Ok(Some(added)) => {
                    history.update(|h| h.extend(added));
                    text.set(String::new());
                    uploads.update(UploadBatch::clear);
                }
                Ok(None) => {}
                Err(notice) => state.notify(notice),
            }
            sending.set(false);
        });
    };

    let messages = move || {
        history
            .get()
            .into_iter()
            .map(|message| view! { <ChatBubble message=message viewer=viewer /> })
            .collect::<Vec<_>>()
    };

    view! {
        <DashboardShell current=Signal::derive(move || chat_id.get()) viewer=viewer>
            <div class="flex-1 overflow-y-auto px-4 py-6 space-y-4">
                <Show when=move || loading.get()>
                    <div class="flex justify-center py-12"><LoadingSpinner size="w-10 h-10" /></div>
                </Show>
                {messages}
                <Show when=move || sending.get()>
                    <TypingIndicator />
                </Show>
                <div node_ref=bottom></div>
            </div>
            <Composer
                text=text
                uploads=uploads
                viewer=viewer
                on_submit=on_submit
                disabled=Signal::derive(move || sending.get() || loading.get())
            />
        </DashboardShell>
    }
}
