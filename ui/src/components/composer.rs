//! Message input with attachments

use crate::state::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shakti::media::{DataUrl, MediaKind, MediaViewer, UploadBatch};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

async fn read_bytes(file: &File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Validate and read picked files one at a time, in the order they were
/// picked, so previews keep the user's order.
async fn ingest(files: Vec<File>, uploads: RwSignal<UploadBatch>, state: AppState) {
    for file in files {
        let mime = file.type_();
        let size = file.size() as u64;

        let kind = match uploads.with_untracked(|b| b.check(&mime, size)) {
            Ok(kind) => kind,
            Err(rejection) => {
                tracing::warn!(name = %file.name(), %rejection, "rejected upload");
                state.notify(rejection.notice());
                continue;
            }
        };

        let bytes = match read_bytes(&file).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(name = %file.name(), "Failed to read file: {}", e);
                continue;
            }
        };

        let url = DataUrl::encode(&mime, &bytes);
        if let Some(Err(rejection)) = uploads.try_update(|b| b.accept(kind, url)) {
            state.notify(rejection.notice());
        }
    }
}

/// Text area, attachment previews and send button
#[component]
pub fn Composer(
    text: RwSignal<String>,
    uploads: RwSignal<UploadBatch>,
    viewer: RwSignal<MediaViewer>,
    /// Called when the user submits
    on_submit: impl Fn() + 'static + Clone + Send + Sync,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(default = "Type your message...")] placeholder: &'static str,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let file_input = NodeRef::<leptos::html::Input>::new();

    let is_empty = Signal::derive(move || {
        text.with(|t| t.trim().is_empty()) && uploads.with(|u| u.is_empty())
    });

    let on_files = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(list) = input.files() else {
            return;
        };
        let files: Vec<File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
        // Allow picking the same file again
        input.set_value("");
        spawn_local(ingest(files, uploads, state));
    };

    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                if !is_empty.get_untracked() && !disabled.get_untracked() {
                    on_submit();
                }
            }
        }
    };

    let previews = move || {
        MediaKind::ALL
            .into_iter()
            .flat_map(|kind| {
                uploads.with(|u| {
                    u.items(kind)
                        .iter()
                        .enumerate()
                        .map(|(i, url)| (kind, i, url.as_str().to_string()))
                        .collect::<Vec<_>>()
                })
            })
            .map(|(kind, index, src)| {
                let open_src = src.clone();
                let thumb = match kind {
                    MediaKind::Image => view! { <img src=src class="w-full h-full object-cover" /> }.into_any(),
                    MediaKind::Video => view! { <video src=src class="w-full h-full object-cover" muted=true></video> }.into_any(),
                    MediaKind::Pdf => view! { <span class="text-2xl">"📄"</span> }.into_any(),
                };
                view! {
                    <div class="relative w-16 h-16 rounded-md overflow-hidden bg-zinc-800 flex items-center justify-center">
                        <button
                            class="w-full h-full flex items-center justify-center"
                            on:click=move |_| viewer.update(|v| v.open(open_src.clone(), kind))
                        >
                            {thumb}
                        </button>
                        <button
                            class="absolute top-0 right-0 w-5 h-5 bg-black/70 text-white text-xs rounded-bl"
                            on:click=move |_| {
                                uploads.update(|u| {
                                    u.remove(kind, index);
                                });
                            }
                        >
                            "×"
                        </button>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="border-t border-purple-500/20 bg-zinc-900/80 backdrop-blur p-4">
            <Show when=move || uploads.with(|u| !u.is_empty())>
                <div class="flex flex-wrap gap-2 mb-3">{previews}</div>
            </Show>

            <div class="flex items-end gap-3">
                <input
                    node_ref=file_input
                    type="file"
                    multiple=true
                    accept=MediaKind::accept_attr()
                    class="hidden"
                    on:change=on_files
                />
                <button
                    class="p-3 rounded-xl bg-zinc-800 hover:bg-zinc-700 text-white disabled:opacity-50"
                    title="Attach images, videos or a PDF"
                    disabled=move || disabled.get() || uploads.with(|u| u.is_full(MediaKind::Image))
                    on:click=move |_| {
                        if let Some(input) = file_input.get() {
                            input.click();
                        }
                    }
                >
                    "📎"
                </button>

                <textarea
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    placeholder=placeholder
                    disabled=move || disabled.get()
                    rows="1"
                    class="flex-1 px-4 py-3 bg-zinc-950 border border-zinc-700 rounded-xl resize-none
                           text-zinc-100 placeholder-zinc-500
                           focus:outline-none focus:ring-2 focus:ring-purple-500 focus:border-transparent
                           disabled:opacity-50 disabled:cursor-not-allowed"
                    style="max-height: 200px;"
                ></textarea>

                <button
                    on:click=move |_| on_submit()
                    disabled=move || disabled.get() || is_empty.get()
                    class="p-3 bg-purple-600 hover:bg-purple-700 disabled:bg-zinc-700
                           disabled:cursor-not-allowed rounded-xl transition-colors text-white"
                >
                    "➤"
                </button>
            </div>
        </div>
    }
}
