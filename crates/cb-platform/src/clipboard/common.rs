use anyhow::{anyhow, Context, Result};
use cb_core::clipboard::{
    ClipItem, MimeType, PrimaryClip, MIMETYPE_TEXT_INTENT, MIMETYPE_TEXT_PLAIN,
    MIMETYPE_TEXT_URILIST,
};
use clipboard_rs::{Clipboard, ClipboardContent, ClipboardContext, ContentFormat};

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

/// Which of the bridge's formats the OS clipboard currently offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ObservedFormats {
    pub text: bool,
    pub intent: bool,
    pub uri_list: bool,
    pub files: bool,
}

impl ObservedFormats {
    fn probe(ctx: &ClipboardContext) -> Self {
        Self {
            text: ctx.has(ContentFormat::Text),
            intent: ctx.has(ContentFormat::Other(MIMETYPE_TEXT_INTENT.to_string())),
            uri_list: ctx.has(ContentFormat::Other(MIMETYPE_TEXT_URILIST.to_string())),
            files: ctx.has(ContentFormat::Files),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// MIME description of the clip, mirroring what a mobile clip
    /// description would advertise for the same content.
    pub(crate) fn mime_types(&self) -> Vec<MimeType> {
        let mut mimes = Vec::new();
        if self.text {
            mimes.push(MimeType::text_plain());
        }
        if self.intent {
            mimes.push(MimeType::text_intent());
        }
        if self.uri_list || self.files {
            mimes.push(MimeType::text_uri_list());
        }
        mimes
    }
}

pub(crate) struct CommonClipboardImpl;

impl CommonClipboardImpl {
    pub fn read_primary_clip(ctx: &ClipboardContext) -> Result<Option<PrimaryClip>> {
        let formats = ObservedFormats::probe(ctx);
        if formats.is_empty() {
            return Ok(None);
        }

        let mut items = Vec::new();

        // Text first: clips written by the bridge always carry it, and it
        // is what the native side reads back.
        if formats.text {
            items.push(ClipItem::Text(
                map_clipboard_err(ctx.get_text()).context("failed to read clipboard text")?,
            ));
        } else if formats.intent {
            let bytes = map_clipboard_err(ctx.get_buffer(MIMETYPE_TEXT_INTENT))
                .context("failed to read intent clip")?;
            items.push(ClipItem::Intent(String::from_utf8_lossy(&bytes).into_owned()));
        } else if formats.files {
            let files = map_clipboard_err(ctx.get_files()).context("failed to read file list")?;
            items.push(ClipItem::Uri(files.join("\n")));
        } else if formats.uri_list {
            let bytes = map_clipboard_err(ctx.get_buffer(MIMETYPE_TEXT_URILIST))
                .context("failed to read uri list")?;
            items.push(ClipItem::Uri(String::from_utf8_lossy(&bytes).into_owned()));
        }

        Ok(Some(PrimaryClip {
            mime_types: formats.mime_types(),
            items,
        }))
    }

    pub fn write_primary_clip(ctx: &ClipboardContext, clip: &PrimaryClip) -> Result<()> {
        let Some(text) = clip.first_item_text() else {
            return map_clipboard_err(ctx.clear()).context("failed to clear clipboard");
        };

        map_clipboard_err(ctx.set(contents_for(clip, text)))
            .context("failed to install primary clip")
    }
}

/// The text is always offered as plain text; every other advertised type
/// is attached as a custom format carrying the same bytes.
pub(crate) fn contents_for(clip: &PrimaryClip, text: &str) -> Vec<ClipboardContent> {
    let mut contents = vec![ClipboardContent::Text(text.to_string())];
    contents.extend(
        clip.mime_types
            .iter()
            .filter(|mime| mime.as_str() != MIMETYPE_TEXT_PLAIN)
            .map(|mime| ClipboardContent::Other(mime.to_string(), text.as_bytes().to_vec())),
    );
    contents
}
