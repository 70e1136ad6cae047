//! Upload validation and media layout tables.

use rstest::rstest;
use shakti::carousel::Carousel;
use shakti::content::{team_carousel, TEAM};
use shakti::media::{GridLayout, MediaKind, PendingFile, UploadBatch, UploadRejection};

const MB: usize = 1024 * 1024;

fn file(name: &str, mime: &str, size: usize) -> PendingFile {
    PendingFile::new(name, mime, vec![0u8; size])
}

// ============= Classification =============

#[rstest]
#[case("image/png", Some(MediaKind::Image))]
#[case("image/jpeg", Some(MediaKind::Image))]
#[case("video/mp4", Some(MediaKind::Video))]
#[case("video/webm; codecs=vp9", Some(MediaKind::Video))]
#[case("application/pdf", Some(MediaKind::Pdf))]
#[case("application/zip", None)]
#[case("text/plain", None)]
#[case("", None)]
fn test_classify(#[case] mime: &str, #[case] expected: Option<MediaKind>) {
    assert_eq!(MediaKind::classify(mime), expected);
}

// ============= Size limits =============

#[rstest]
#[case("image/png", 5 * MB, true)]
#[case("image/png", 5 * MB + 1, false)]
#[case("video/mp4", 100 * MB, true)]
#[case("video/mp4", 100 * MB + 1, false)]
#[case("application/pdf", 10 * MB, true)]
#[case("application/pdf", 10 * MB + 1, false)]
fn test_size_limits(#[case] mime: &str, #[case] size: usize, #[case] accepted: bool) {
    let batch = UploadBatch::new();
    assert_eq!(batch.check(mime, size as u64).is_ok(), accepted);
}

#[test]
fn test_too_large_notice() {
    let mut batch = UploadBatch::new();
    let rejected = batch.ingest([file("big.png", "image/png", 5 * MB + 1)]);
    assert_eq!(rejected.len(), 1);

    let notice = rejected[0].notice();
    assert_eq!(notice.title, "File too large");
    assert_eq!(notice.description, "Please upload images smaller than 5MB each.");
    assert!(batch.is_empty());
}

// ============= Count limits =============

#[rstest]
#[case(MediaKind::Image, "image/png", 5, "Too many images", "You can upload a maximum of 5 images.")]
#[case(MediaKind::Video, "video/mp4", 2, "Too many videos", "You can upload a maximum of 2 videos.")]
#[case(MediaKind::Pdf, "application/pdf", 1, "Too many PDFs", "You can upload a maximum of 1 PDF.")]
fn test_count_limits(
    #[case] kind: MediaKind,
    #[case] mime: &str,
    #[case] max: usize,
    #[case] title: &str,
    #[case] description: &str,
) {
    let mut batch = UploadBatch::new();
    let files: Vec<_> = (0..=max).map(|i| file(&format!("f{i}"), mime, 16)).collect();

    let rejected = batch.ingest(files);
    assert_eq!(batch.count(kind), max);
    assert_eq!(rejected, vec![UploadRejection::TooMany { kind, max }]);

    let notice = rejected[0].notice();
    assert_eq!(notice.title, title);
    assert_eq!(notice.description, description);
}

#[test]
fn test_mixed_batch_keeps_valid_files_in_order() {
    let mut batch = UploadBatch::new();
    let rejected = batch.ingest([
        file("a.png", "image/png", 1),
        file("notes.zip", "application/zip", 1),
        file("clip.mp4", "video/mp4", 2),
        file("b.png", "image/png", 3),
        file("brief.pdf", "application/pdf", 4),
    ]);

    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].notice().title, "Invalid file type");
    assert_eq!(batch.count(MediaKind::Image), 2);
    assert_eq!(batch.count(MediaKind::Video), 1);
    assert_eq!(batch.count(MediaKind::Pdf), 1);

    // a.png is one zero byte, b.png three.
    let images = batch.items(MediaKind::Image);
    assert_eq!(images[0].body(), "AA==");
    assert_eq!(images[1].body(), "AAAA");
}

// ============= Grid =============

#[rstest]
#[case(1, "grid-cols-1", "aspect-square sm:aspect-video")]
#[case(2, "grid-cols-2", "aspect-square")]
#[case(3, "grid-cols-3", "aspect-square")]
#[case(4, "grid-cols-2 grid-rows-2", "aspect-square")]
#[case(5, "grid-cols-3", "aspect-square")]
#[case(7, "grid-cols-3", "aspect-square")]
fn test_grid_layout(#[case] count: usize, #[case] columns: &str, #[case] cell: &str) {
    let layout = GridLayout::for_count(count);
    assert_eq!(layout.columns, columns);
    assert_eq!(layout.cell, cell);
    assert_eq!(layout.container_class(), format!("grid {} gap-2 mt-2", columns));
}

// ============= Carousel =============

#[test]
fn test_team_carousel_wraps_both_ways() {
    let mut carousel = team_carousel();
    assert_eq!(carousel.len(), TEAM.len());

    carousel.prev();
    assert_eq!(carousel.index(), TEAM.len() - 1);
    carousel.next();
    assert_eq!(carousel.index(), 0);
}

#[test]
fn test_empty_carousel_is_inert() {
    let mut carousel: Carousel<u8> = Carousel::new(vec![]);
    carousel.next();
    carousel.prev();
    assert_eq!(carousel.index(), 0);
    assert!(carousel.current().is_none());
}
