//! Media attached to a message

use crate::api::API_BASE;
use leptos::prelude::*;
use shakti::media::{media_url, GridLayout, MediaKind, MediaViewer};
use shakti::types::ChatMessage;

/// Images and videos in a grid, PDFs as links underneath. Clicking an item
/// opens it in the viewer.
#[component]
pub fn MediaGrid(message: ChatMessage, viewer: RwSignal<MediaViewer>) -> impl IntoView {
    let layout = GridLayout::for_message(&message);
    let cell = layout.cell;

    let visuals: Vec<(MediaKind, String)> = message
        .images
        .iter()
        .map(|name| (MediaKind::Image, media_url(API_BASE, MediaKind::Image, name)))
        .chain(
            message
                .videos
                .iter()
                .map(|name| (MediaKind::Video, media_url(API_BASE, MediaKind::Video, name))),
        )
        .collect();

    let pdfs: Vec<String> = message
        .pdfs
        .iter()
        .map(|name| media_url(API_BASE, MediaKind::Pdf, name))
        .collect();

    view! {
        {(!visuals.is_empty()).then(|| view! {
            <div class=layout.container_class()>
                {visuals.into_iter().map(|(kind, src)| {
                    let open_src = src.clone();
                    let open = move |_| viewer.update(|v| v.open(open_src.clone(), kind));
                    let body = match kind {
                        MediaKind::Video => view! {
                            <video src=src class="w-full h-full object-cover" muted=true></video>
                        }.into_any(),
                        _ => view! {
                            <img src=src alt="Attachment" class="w-full h-full object-cover" />
                        }.into_any(),
                    };
                    view! {
                        <button class=format!("{} overflow-hidden rounded-lg cursor-pointer", cell) on:click=open>
                            {body}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>
        })}
        {(!pdfs.is_empty()).then(|| view! {
            <div class="flex flex-col gap-1 mt-2">
                {pdfs.into_iter().enumerate().map(|(i, src)| {
                    let open_src = src.clone();
                    view! {
                        <button
                            class="text-left text-sm underline text-purple-200 hover:text-white"
                            on:click=move |_| viewer.update(|v| v.open(open_src.clone(), MediaKind::Pdf))
                        >
                            {format!("📄 Document {}", i + 1)}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>
        })}
    }
}
