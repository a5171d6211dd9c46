use super::*;

#[test]
fn promoted_source_uses_data_src() {
    assert_eq!(
        promoted_source("", Some("/static/img/pastel.jpg")),
        Some("/static/img/pastel.jpg".to_owned())
    );
}

#[test]
fn promoted_source_replaces_placeholder() {
    assert_eq!(
        promoted_source("/static/img/placeholder.svg", Some("/static/img/pastel.jpg")),
        Some("/static/img/pastel.jpg".to_owned())
    );
}

#[test]
fn promoted_source_skips_images_without_data_src() {
    assert_eq!(promoted_source("/static/img/pastel.jpg", None), None);
    assert_eq!(promoted_source("", Some("   ")), None);
}

#[test]
fn promoted_source_skips_when_already_assigned() {
    assert_eq!(promoted_source("/a.jpg", Some("/a.jpg")), None);
}
