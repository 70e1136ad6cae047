//! Full-size media viewer

use leptos::prelude::*;
use shakti::media::{MediaKind, MediaViewer};

/// Overlay showing the selected image, video or PDF. Clicking the backdrop
/// closes it.
#[component]
pub fn MediaModal(viewer: RwSignal<MediaViewer>) -> impl IntoView {
    let close = move |_| viewer.update(|v| v.close());

    view! {
        <Show when=move || viewer.with(|v| v.is_open())>
            <div
                class="fixed inset-0 z-50 bg-black/80 flex items-center justify-center p-4"
                on:click=close
            >
                <div
                    class="relative max-w-5xl w-full max-h-[90vh] flex items-center justify-center"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        class="absolute -top-10 right-0 text-white text-2xl"
                        on:click=close
                    >
                        "×"
                    </button>
                    {move || {
                        viewer.with(|v| v.selected().cloned()).map(|media| match media.kind {
                            MediaKind::Image => view! {
                                <img src=media.src alt="Full size" class="max-h-[85vh] max-w-full rounded-lg object-contain" />
                            }
                            .into_any(),
                            MediaKind::Video => view! {
                                <video src=media.src controls=true autoplay=true class="max-h-[85vh] max-w-full rounded-lg"></video>
                            }
                            .into_any(),
                            MediaKind::Pdf => view! {
                                <iframe src=media.src title="PDF" class="w-full h-[85vh] rounded-lg bg-white"></iframe>
                            }
                            .into_any(),
                        })
                    }}
                </div>
            </div>
        </Show>
    }
}
