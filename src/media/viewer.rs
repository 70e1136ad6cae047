use super::MediaKind;

/// The item currently shown full size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewedMedia {
    pub src: String,
    pub kind: MediaKind,
}

impl ViewedMedia {
    /// Local previews are data URLs and render inline.
    pub fn is_inline(&self) -> bool {
        self.src.starts_with("data:")
    }
}

/// Full-size viewer state: at most one item is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaViewer {
    selected: Option<ViewedMedia>,
}

impl MediaViewer {
    pub fn open(&mut self, src: impl Into<String>, kind: MediaKind) {
        self.selected = Some(ViewedMedia {
            src: src.into(),
            kind,
        });
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&ViewedMedia> {
        self.selected.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_replaces_and_close_clears() {
        let mut viewer = MediaViewer::default();
        assert!(!viewer.is_open());

        viewer.open("data:image/png;base64,AA", MediaKind::Image);
        viewer.open("http://localhost:8000/videos/v.mp4", MediaKind::Video);
        let shown = viewer.selected().unwrap();
        assert_eq!(shown.kind, MediaKind::Video);
        assert!(!shown.is_inline());

        viewer.close();
        assert!(viewer.selected().is_none());
    }
}
