//! Chat message bubble

use crate::components::MediaGrid;
use leptos::prelude::*;
use pulldown_cmark::{html, Parser};
use shakti::media::{BubbleStyle, MediaViewer};
use shakti::types::ChatMessage;

fn render_markdown(text: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(text));
    out
}

/// Render a single chat message
#[component]
pub fn ChatBubble(message: ChatMessage, viewer: RwSignal<MediaViewer>) -> impl IntoView {
    let is_user = message.is_user();
    let style = BubbleStyle::for_message(&message).css();
    let text = message.text().to_string();
    let has_media = message.has_media();
    let time = message.timestamp.format("%H:%M").to_string();

    view! {
        <div class="flex flex-col gap-1" style=style>
            <div class=if is_user {
                "px-4 py-3 rounded-2xl rounded-tr-sm bg-purple-600 text-white"
            } else {
                "px-4 py-3 rounded-2xl rounded-tl-sm bg-zinc-800 text-zinc-100"
            }>
                {(!text.is_empty()).then(|| {
                    if is_user {
                        view! { <p class="whitespace-pre-wrap break-words">{text.clone()}</p> }.into_any()
                    } else {
                        view! { <div class="prose prose-invert prose-sm max-w-none" inner_html=render_markdown(&text)></div> }.into_any()
                    }
                })}
                {has_media.then(|| view! { <MediaGrid message=message.clone() viewer=viewer /> })}
            </div>
            <span class=if is_user { "text-xs text-zinc-500 text-right" } else { "text-xs text-zinc-500" }>
                {time}
            </span>
        </div>
    }
}
