//! Display lookups for message media and bubbles.

use super::MediaKind;
use crate::types::ChatMessage;

/// CSS grid arrangement for the images and videos of one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: &'static str,
    pub cell: &'static str,
}

impl GridLayout {
    pub fn for_count(count: usize) -> Self {
        match count {
            1 => Self {
                columns: "grid-cols-1",
                cell: "aspect-square sm:aspect-video",
            },
            2 => Self {
                columns: "grid-cols-2",
                cell: "aspect-square",
            },
            3 => Self {
                columns: "grid-cols-3",
                cell: "aspect-square",
            },
            4 => Self {
                columns: "grid-cols-2 grid-rows-2",
                cell: "aspect-square",
            },
            _ => Self {
                columns: "grid-cols-3",
                cell: "aspect-square",
            },
        }
    }

    pub fn for_message(message: &ChatMessage) -> Self {
        Self::for_count(message.visual_count())
    }

    pub fn container_class(&self) -> String {
        format!("grid {} gap-2 mt-2", self.columns)
    }
}

/// URL of a stored media file, or the value itself for local data URLs.
pub fn media_url(api_base: &str, kind: MediaKind, name: &str) -> String {
    if name.starts_with("data:") || name.starts_with("http://") || name.starts_with("https://") {
        return name.to_string();
    }
    format!(
        "{}/{}/{}",
        api_base.trim_end_matches('/'),
        kind.route(),
        name.trim_start_matches('/')
    )
}

/// Width and alignment of one message bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubbleStyle {
    pub width: &'static str,
    pub max_width: &'static str,
    pub margin_left: &'static str,
    pub margin_right: &'static str,
}

impl BubbleStyle {
    pub fn for_message(message: &ChatMessage) -> Self {
        let user = message.is_user();
        let wide = user && message.visual_count() > 0;

        Self {
            width: if wide { "65%" } else { "30%" },
            max_width: if wide { "600px" } else { "300px" },
            margin_left: if user { "auto" } else { "15%" },
            margin_right: if user { "15%" } else { "auto" },
        }
    }

    pub fn css(&self) -> String {
        format!(
            "width: {}; max-width: {}; margin-left: {}; margin-right: {};",
            self.width, self.max_width, self.margin_left, self.margin_right
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sender;
    use chrono::Utc;

    fn message(sender: Sender, images: usize) -> ChatMessage {
        ChatMessage {
            sender,
            message: Some("x".to_string()),
            images: (0..images).map(|i| format!("{}.png", i)).collect(),
            videos: vec![],
            pdfs: vec![],
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_media_url() {
        assert_eq!(
            media_url("http://localhost:8000/", MediaKind::Image, "abc.png"),
            "http://localhost:8000/images/abc.png"
        );
        assert_eq!(
            media_url("http://localhost:8000", MediaKind::Pdf, "r.pdf"),
            "http://localhost:8000/pdfs/r.pdf"
        );
        assert_eq!(
            media_url("http://x", MediaKind::Video, "data:video/mp4;base64,AA"),
            "data:video/mp4;base64,AA"
        );
    }

    #[test]
    fn test_bubble_style() {
        let wide = BubbleStyle::for_message(&message(Sender::User, 2));
        assert_eq!(wide.width, "65%");
        assert_eq!(wide.margin_left, "auto");

        let narrow = BubbleStyle::for_message(&message(Sender::User, 0));
        assert_eq!(narrow.max_width, "300px");

        let bot = BubbleStyle::for_message(&message(Sender::Bot, 3));
        assert_eq!(bot.width, "30%");
        assert_eq!(bot.margin_left, "15%");
        assert!(bot.css().starts_with("width: 30%;"));
    }
}
