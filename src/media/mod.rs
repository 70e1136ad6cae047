//! Media handling: classification, data URLs, upload batches, grid layout
//! and the full-size viewer.

pub mod layout;
pub mod upload;
pub mod viewer;

pub use layout::{media_url, BubbleStyle, GridLayout};
pub use upload::{PendingFile, UploadBatch, UploadRejection};
pub use viewer::{MediaViewer, ViewedMedia};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

const MB: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Pdf,
}

impl MediaKind {
    pub const ALL: [MediaKind; 3] = [MediaKind::Image, MediaKind::Video, MediaKind::Pdf];

    /// Classify a MIME type. Parameters such as `; charset=` are ignored.
    pub fn classify(mime: &str) -> Option<Self> {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if essence.starts_with("image/") {
            Some(MediaKind::Image)
        } else if essence.starts_with("video/") {
            Some(MediaKind::Video)
        } else if essence == "application/pdf" {
            Some(MediaKind::Pdf)
        } else {
            None
        }
    }

    /// Largest accepted file, in bytes.
    pub fn max_bytes(self) -> u64 {
        match self {
            MediaKind::Image => 5 * MB,
            MediaKind::Video => 100 * MB,
            MediaKind::Pdf => 10 * MB,
        }
    }

    /// How many items of this kind one message may carry.
    pub fn max_count(self) -> usize {
        match self {
            MediaKind::Image => 5,
            MediaKind::Video => 2,
            MediaKind::Pdf => 1,
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Pdf => "PDF",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            MediaKind::Image => "images",
            MediaKind::Video => "videos",
            MediaKind::Pdf => "PDFs",
        }
    }

    /// Static route the backend serves stored files of this kind from.
    pub fn route(self) -> &'static str {
        match self {
            MediaKind::Image => "images",
            MediaKind::Video => "videos",
            MediaKind::Pdf => "pdfs",
        }
    }

    pub fn accept_attr() -> &'static str {
        "image/*,video/*,application/pdf"
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.singular())
    }
}

/// A `data:<mime>;base64,<body>` URL used for local previews.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataUrl(String);

impl DataUrl {
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
    }

    /// Wrap an existing URL string, e.g. one produced by the browser.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        (raw.starts_with("data:") && raw.contains(',')).then_some(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part after the first comma; this is what the backend receives.
    pub fn body(&self) -> &str {
        self.0
            .split_once(',')
            .map(|(_, body)| body)
            .unwrap_or_default()
    }

    pub fn mime(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split([';', ',']).next())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for DataUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(MediaKind::classify("image/png"), Some(MediaKind::Image));
        assert_eq!(MediaKind::classify("IMAGE/JPEG"), Some(MediaKind::Image));
        assert_eq!(MediaKind::classify("video/mp4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::classify("application/pdf"), Some(MediaKind::Pdf));
        assert_eq!(
            MediaKind::classify("application/pdf; name=x.pdf"),
            Some(MediaKind::Pdf)
        );
        assert_eq!(MediaKind::classify("application/zip"), None);
        assert_eq!(MediaKind::classify("application/pdfx"), None);
        assert_eq!(MediaKind::classify(""), None);
    }

    #[test]
    fn test_limits() {
        assert_eq!(MediaKind::Image.max_bytes(), 5_242_880);
        assert_eq!(MediaKind::Video.max_bytes(), 104_857_600);
        assert_eq!(MediaKind::Pdf.max_bytes(), 10_485_760);
        assert_eq!(MediaKind::Image.max_count(), 5);
        assert_eq!(MediaKind::Video.max_count(), 2);
        assert_eq!(MediaKind::Pdf.max_count(), 1);
    }

    #[test]
    fn test_data_url() {
        let url = DataUrl::encode("image/png", b"hello");
        assert_eq!(url.as_str(), "data:image/png;base64,aGVsbG8=");
        assert_eq!(url.body(), "aGVsbG8=");
        assert_eq!(url.mime(), "image/png");

        assert!(DataUrl::parse("http://localhost/x.png").is_none());
        let parsed = DataUrl::parse("data:video/mp4;base64,AAAA").unwrap();
        assert_eq!(parsed.mime(), "video/mp4");
    }
}
