use serde::{Deserialize, Serialize};

use super::mime::MimeType;

/// One item of a clip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClipItem {
    Text(String),
    Uri(String),
    Intent(String),
}

impl ClipItem {
    /// Text form of the item, whatever shape it was stored in.
    pub fn coerce_to_text(&self) -> &str {
        match self {
            ClipItem::Text(text) | ClipItem::Uri(text) | ClipItem::Intent(text) => text,
        }
    }
}

/// The clipboard's current payload as observed at one instant.
///
/// Never cached by the bridge: every read asks the clipboard service again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryClip {
    /// Types the clip advertises, in the order the service reported them.
    pub mime_types: Vec<MimeType>,
    pub items: Vec<ClipItem>,
}

impl PrimaryClip {
    /// A single text item tagged with `mime`.
    pub fn plain_text(mime: MimeType, text: impl Into<String>) -> Self {
        Self {
            mime_types: vec![mime],
            items: vec![ClipItem::Text(text.into())],
        }
    }

    /// Whether any advertised type fits `mime`, which may contain wildcards.
    pub fn has_mime_type(&self, mime: &MimeType) -> bool {
        self.mime_types.iter().any(|m| mime.matches(m))
    }

    pub fn first_item(&self) -> Option<&ClipItem> {
        self.items.first()
    }

    pub fn first_item_text(&self) -> Option<&str> {
        self.first_item().map(ClipItem::coerce_to_text)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Clip text together with its length, taken from a single read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipText {
    pub text: String,
    /// Length in Unicode scalar values.
    pub length: usize,
}

impl ClipText {
    pub fn new(text: String) -> Self {
        let length = text.chars().count();
        Self { text, length }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_clip_carries_one_tagged_item() {
        let clip = PrimaryClip::plain_text(MimeType::text_uri_list(), "file:///tmp/a");

        assert!(clip.has_mime_type(&MimeType::text_uri_list()));
        assert!(!clip.has_mime_type(&MimeType::text_plain()));
        assert_eq!(clip.item_count(), 1);
        assert_eq!(clip.first_item_text(), Some("file:///tmp/a"));
    }

    #[test]
    fn generic_advertised_type_does_not_claim_a_concrete_one() {
        let clip = PrimaryClip::plain_text(MimeType("text/*".into()), "x");

        assert!(!clip.has_mime_type(&MimeType::text_intent()));
        assert!(!clip.has_mime_type(&MimeType::text_plain()));
        assert!(clip.has_mime_type(&MimeType("text/*".into())));
    }

    #[test]
    fn every_item_shape_coerces_to_its_string() {
        assert_eq!(ClipItem::Uri("content://x".into()).coerce_to_text(), "content://x");
        assert_eq!(ClipItem::Intent("#Intent;end".into()).coerce_to_text(), "#Intent;end");
    }

    #[test]
    fn empty_clip_has_no_first_item() {
        let clip = PrimaryClip {
            mime_types: vec![MimeType::text_plain()],
            items: vec![],
        };
        assert!(clip.is_empty());
        assert_eq!(clip.first_item_text(), None);
    }

    #[test]
    fn clip_text_counts_characters_not_bytes() {
        let text = ClipText::new("héllo→".to_string());
        assert_eq!(text.length, 6);
        assert_eq!(ClipText::default().length, 0);
    }
}
