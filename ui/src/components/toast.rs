//! Transient notices

use crate::state::AppState;
use leptos::prelude::*;
use shakti::NoticeVariant;

/// Stack of toasts in the corner of the screen
#[component]
pub fn Toaster() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="fixed bottom-4 right-4 z-[60] flex flex-col gap-2 w-80">
            <For
                each=move || state.toasts.get()
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let id = toast.id.clone();
                    let tone = match toast.notice.variant {
                        NoticeVariant::Info => "bg-slate-900 border-purple-500/40",
                        NoticeVariant::Destructive => "bg-red-900 border-red-500/60",
                    };
                    view! {
                        <div class=format!("rounded-lg border p-4 shadow-xl text-white {}", tone)>
                            <div class="flex items-start justify-between gap-2">
                                <div>
                                    <p class="font-semibold">{toast.notice.title.clone()}</p>
                                    <p class="text-sm opacity-90">{toast.notice.description.clone()}</p>
                                </div>
                                <button
                                    class="text-white/60 hover:text-white"
                                    on:click=move |_| state.dismiss(&id)
                                >
                                    "×"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
