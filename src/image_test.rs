use super::*;
use crate::consts::MAX_IMAGE_BYTES;

/// Metadata-only source so size tests don't allocate megabytes.
struct Meta {
    mime: &'static str,
    size: u64,
}

impl ImageSource for Meta {
    fn file_name(&self) -> String {
        "meta".into()
    }
    fn mime_type(&self) -> String {
        self.mime.into()
    }
    fn size(&self) -> u64 {
        self.size
    }
    fn preview_url(&self) -> Option<String> {
        None
    }
}

#[test]
fn accepts_png_and_jpeg_within_limit() {
    let cfg = WidgetConfig::default();
    for mime in ["image/png", "image/jpeg", "image/jpg"] {
        assert_eq!(validate_image(&Meta { mime, size: 1024 }, &cfg), Ok(()));
    }
}

#[test]
fn rejects_disallowed_types_regardless_of_size() {
    let cfg = WidgetConfig::default();
    for mime in ["image/gif", "image/webp", "application/pdf", ""] {
        let err = validate_image(&Meta { mime, size: 10 }, &cfg).unwrap_err();
        assert_eq!(err, WidgetError::InvalidImageType { mime: mime.to_owned() });
    }
}

#[test]
fn type_is_checked_before_size() {
    let cfg = WidgetConfig::default();
    let err = validate_image(&Meta { mime: "image/gif", size: MAX_IMAGE_BYTES * 2 }, &cfg).unwrap_err();
    assert!(matches!(err, WidgetError::InvalidImageType { .. }));
}

#[test]
fn exactly_five_mebibytes_is_accepted() {
    let cfg = WidgetConfig::default();
    assert!(validate_image(&Meta { mime: "image/png", size: MAX_IMAGE_BYTES }, &cfg).is_ok());
}

#[test]
fn one_byte_over_limit_is_rejected() {
    let cfg = WidgetConfig::default();
    let err = validate_image(&Meta { mime: "image/jpeg", size: MAX_IMAGE_BYTES + 1 }, &cfg).unwrap_err();
    assert_eq!(err, WidgetError::ImageTooLarge { size: MAX_IMAGE_BYTES + 1, max: MAX_IMAGE_BYTES });
}

#[test]
fn image_file_reports_byte_length() {
    let file = ImageFile::new("cat.png", "image/png", vec![0u8; 42]);
    assert_eq!(file.size(), 42);
    assert_eq!(file.file_name(), "cat.png");
    assert_eq!(file.preview_url(), None);
}

#[test]
fn pending_image_exposes_path() {
    let pending = PendingImage::new("static/uploads/chat_1.png");
    assert_eq!(pending.path(), "static/uploads/chat_1.png");
}
