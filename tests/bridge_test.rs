use std::sync::Arc;

use cb_core::ports::SystemClipboardPort;
use cb_core::{MimeType, PrimaryClip};
use cb_platform::{DesktopHostContext, InMemoryClipboard};
use clipbridge::{ClipText, ClipboardBridge, TypeCode};

fn bridge_over(clipboard: Arc<InMemoryClipboard>) -> ClipboardBridge {
    ClipboardBridge::new(Arc::new(DesktopHostContext::with_clipboard(clipboard)))
}

#[test]
fn test_fresh_clipboard_reads_as_empty() {
    let bridge = bridge_over(Arc::new(InMemoryClipboard::new()));

    assert_eq!(bridge.clip_type(), TypeCode::Unknown);
    assert_eq!(bridge.content(), "");
    assert_eq!(bridge.content_length(), 0);
}

#[test]
fn test_initialize_then_set_plain_text() {
    let bridge = bridge_over(Arc::new(InMemoryClipboard::new()));

    bridge.initialize();
    bridge.set_content(TypeCode::PlainText, "abc");

    assert_eq!(bridge.content(), "abc");
    assert_eq!(bridge.clip_type(), TypeCode::PlainText);
    assert_eq!(bridge.content_length(), 3);
}

#[test]
fn test_written_type_reads_back_for_every_code() {
    let bridge = bridge_over(Arc::new(InMemoryClipboard::new()));

    for code in [TypeCode::PlainText, TypeCode::Intent, TypeCode::UriList] {
        bridge.set_content(code, "hello");
        assert_eq!(bridge.content(), "hello");
        assert_eq!(bridge.clip_type(), code);
    }
}

#[test]
fn test_unknown_type_write_leaves_clipboard_untouched() {
    let clipboard = Arc::new(InMemoryClipboard::with_clip(PrimaryClip::plain_text(
        MimeType::text_uri_list(),
        "file:///keep",
    )));
    let bridge = bridge_over(clipboard.clone());
    let before = clipboard.primary_clip().unwrap();

    bridge.set_content(TypeCode::Unknown, "overwrite");

    assert_eq!(clipboard.primary_clip().unwrap(), before);
    assert_eq!(bridge.clip_type(), TypeCode::UriList);
}

#[test]
fn test_unknown_type_write_on_empty_clipboard_keeps_it_empty() {
    let clipboard = Arc::new(InMemoryClipboard::new());
    let bridge = bridge_over(clipboard.clone());

    bridge.set_content(TypeCode::Unknown, "text");

    assert_eq!(clipboard.primary_clip().unwrap(), None);
}

#[test]
fn test_type_is_unknown_once_clipboard_is_cleared() {
    let clipboard = Arc::new(InMemoryClipboard::new());
    let bridge = bridge_over(clipboard.clone());
    bridge.initialize();
    bridge.set_content(TypeCode::Intent, "#Intent;end");

    clipboard.clear();

    assert_eq!(bridge.clip_type(), TypeCode::Unknown);
    assert_eq!(bridge.content(), "");
}

#[test]
fn test_updated_immediately_after_initialize() {
    let bridge = bridge_over(Arc::new(InMemoryClipboard::new()));
    assert!(!bridge.has_updated());

    bridge.initialize();

    assert!(bridge.has_updated());
    assert!(bridge.has_updated());
}

#[test]
fn test_external_change_is_observed() {
    let clipboard = Arc::new(InMemoryClipboard::new());
    let bridge = bridge_over(clipboard.clone());
    bridge.initialize();

    clipboard
        .set_primary_clip(PrimaryClip::plain_text(MimeType::text_plain(), "from elsewhere"))
        .unwrap();

    assert!(bridge.has_updated());
    assert_eq!(bridge.content(), "from elsewhere");
}

#[test]
fn test_shutdown_keeps_updated_flag() {
    let clipboard = Arc::new(InMemoryClipboard::new());
    let bridge = bridge_over(clipboard.clone());
    bridge.initialize();
    bridge.shutdown();

    clipboard
        .set_primary_clip(PrimaryClip::plain_text(MimeType::text_plain(), "x"))
        .unwrap();

    assert!(bridge.has_updated());
    assert_eq!(bridge.content(), "x");
}

#[test]
fn test_bridges_sharing_a_clipboard_keep_separate_flags() {
    let clipboard = Arc::new(InMemoryClipboard::new());
    let watching = bridge_over(clipboard.clone());
    let idle = bridge_over(clipboard.clone());
    watching.initialize();

    clipboard
        .set_primary_clip(PrimaryClip::plain_text(MimeType::text_plain(), "x"))
        .unwrap();

    assert!(watching.has_updated());
    assert!(!idle.has_updated());
}

#[test]
fn test_length_matches_content_without_concurrent_writes() {
    let bridge = bridge_over(Arc::new(InMemoryClipboard::new()));
    bridge.set_content(TypeCode::PlainText, "naïve café ☕");

    let content = bridge.content();
    assert_eq!(bridge.content_length(), content.chars().count());
    assert_eq!(bridge.content_length(), 12);
}

#[test]
fn test_read_returns_text_and_length_together() {
    let bridge = bridge_over(Arc::new(InMemoryClipboard::new()));
    assert_eq!(bridge.read(), ClipText::default());

    bridge.set_content(TypeCode::UriList, "content://a");

    assert_eq!(
        bridge.read(),
        ClipText {
            text: "content://a".to_string(),
            length: 11,
        }
    );
}

#[test]
fn test_content_uses_first_item_only() {
    let clipboard = Arc::new(InMemoryClipboard::with_clip(PrimaryClip {
        mime_types: vec![MimeType::text_uri_list()],
        items: vec![
            cb_core::ClipItem::Uri("file:///first".into()),
            cb_core::ClipItem::Uri("file:///second".into()),
        ],
    }));
    let bridge = bridge_over(clipboard);

    assert_eq!(bridge.content(), "file:///first");
}

#[test]
fn test_headless_host_degrades_to_defaults() {
    let bridge = ClipboardBridge::new(Arc::new(DesktopHostContext::headless()));

    bridge.initialize();
    bridge.set_content(TypeCode::PlainText, "dropped");

    assert!(bridge.has_updated());
    assert_eq!(bridge.clip_type(), TypeCode::Unknown);
    assert_eq!(bridge.content(), "");
    assert_eq!(bridge.content_length(), 0);
}

#[test]
fn test_generic_advertised_type_reads_as_unknown() {
    for generic in ["text/*", "*/*"] {
        let clipboard = Arc::new(InMemoryClipboard::with_clip(PrimaryClip::plain_text(
            MimeType(generic.into()),
            "payload",
        )));
        let bridge = bridge_over(clipboard);

        assert_eq!(bridge.clip_type(), TypeCode::Unknown, "advertised {generic}");
        assert_eq!(bridge.content(), "payload");
    }
}
