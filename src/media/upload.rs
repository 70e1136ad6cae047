//! Client-side upload gate
//!
//! Files are classified by MIME type, checked against per-kind size and
//! count caps, and held as data URLs until the message is sent. Rejected
//! files are dropped; whatever was already accepted stays.

use super::{DataUrl, MediaKind};
use crate::notice::Notice;
use crate::types::ChatPayload;
use thiserror::Error;

/// A file picked by the user, before it is read into a data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl PendingFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("{kind} exceeds the {limit_mb}MB limit ({size} bytes)")]
    TooLarge {
        kind: MediaKind,
        size: u64,
        limit_mb: u64,
    },

    #[error("{kind} limit of {max} reached")]
    TooMany { kind: MediaKind, max: usize },

    #[error("unsupported file type '{mime}'")]
    InvalidType { mime: String },
}

impl UploadRejection {
    pub fn notice(&self) -> Notice {
        match self {
            UploadRejection::TooLarge { kind, limit_mb, .. } => Notice::destructive(
                "File too large",
                format!(
                    "Please upload {} smaller than {}MB each.",
                    kind.plural(),
                    limit_mb
                ),
            ),
            UploadRejection::TooMany { kind, max } => Notice::destructive(
                format!("Too many {}", kind.plural()),
                if *max == 1 {
                    format!("You can upload a maximum of 1 {}.", kind.singular())
                } else {
                    format!("You can upload a maximum of {} {}.", max, kind.plural())
                },
            ),
            UploadRejection::InvalidType { .. } => Notice::destructive(
                "Invalid file type",
                "Please upload only image, video or PDF files.",
            ),
        }
    }
}

/// Attachments collected for the next message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadBatch {
    images: Vec<DataUrl>,
    videos: Vec<DataUrl>,
    pdfs: Vec<DataUrl>,
}

impl UploadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self, kind: MediaKind) -> &[DataUrl] {
        match kind {
            MediaKind::Image => &self.images,
            MediaKind::Video => &self.videos,
            MediaKind::Pdf => &self.pdfs,
        }
    }

    fn items_mut(&mut self, kind: MediaKind) -> &mut Vec<DataUrl> {
        match kind {
            MediaKind::Image => &mut self.images,
            MediaKind::Video => &mut self.videos,
            MediaKind::Pdf => &mut self.pdfs,
        }
    }

    pub fn count(&self, kind: MediaKind) -> usize {
        self.items(kind).len()
    }

    pub fn len(&self) -> usize {
        self.images.len() + self.videos.len() + self.pdfs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self, kind: MediaKind) -> bool {
        self.count(kind) >= kind.max_count()
    }

    /// Validate a file by type and size before reading it.
    pub fn check(&self, mime: &str, size: u64) -> Result<MediaKind, UploadRejection> {
        let kind = MediaKind::classify(mime).ok_or_else(|| UploadRejection::InvalidType {
            mime: mime.to_string(),
        })?;

        if size > kind.max_bytes() {
            return Err(UploadRejection::TooLarge {
                kind,
                size,
                limit_mb: kind.max_bytes() / (1024 * 1024),
            });
        }

        if self.is_full(kind) {
            return Err(UploadRejection::TooMany {
                kind,
                max: kind.max_count(),
            });
        }

        Ok(kind)
    }

    /// Append an already-read file. The cap is checked again because reads
    /// complete after `check`.
    pub fn accept(&mut self, kind: MediaKind, url: DataUrl) -> Result<(), UploadRejection> {
        if self.is_full(kind) {
            return Err(UploadRejection::TooMany {
                kind,
                max: kind.max_count(),
            });
        }
        self.items_mut(kind).push(url);
        Ok(())
    }

    /// Check, encode and append one file.
    pub fn offer(&mut self, file: &PendingFile) -> Result<MediaKind, UploadRejection> {
        let kind = self.check(&file.mime, file.size())?;
        self.accept(kind, DataUrl::encode(&file.mime, &file.bytes))?;
        tracing::debug!(name = %file.name, %kind, "accepted upload");
        Ok(kind)
    }

    /// Offer files in order and collect the rejections.
    pub fn ingest<I>(&mut self, files: I) -> Vec<UploadRejection>
    where
        I: IntoIterator<Item = PendingFile>,
    {
        files
            .into_iter()
            .filter_map(|file| match self.offer(&file) {
                Ok(_) => None,
                Err(rejection) => {
                    tracing::warn!(name = %file.name, %rejection, "rejected upload");
                    Some(rejection)
                }
            })
            .collect()
    }

    pub fn remove(&mut self, kind: MediaKind, index: usize) -> Option<DataUrl> {
        let items = self.items_mut(kind);
        (index < items.len()).then(|| items.remove(index))
    }

    pub fn clear(&mut self) {
        self.images.clear();
        self.videos.clear();
        self.pdfs.clear();
    }

    /// Build the request body. Blank text is sent as `null`.
    pub fn to_payload(&self, text: &str) -> ChatPayload {
        let trimmed = text.trim();
        let bodies = |items: &[DataUrl]| -> Vec<String> {
            items.iter().map(|u| u.body().to_string()).collect()
        };

        ChatPayload {
            message: (!trimmed.is_empty()).then(|| trimmed.to_string()),
            images: bodies(&self.images),
            videos: bodies(&self.videos),
            pdfs: bodies(&self.pdfs),
        }
    }
}
