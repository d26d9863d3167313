mod dirty;
mod mime;
mod snapshot;
mod type_table;

pub use dirty::DirtyFlag;
pub use mime::{MimeType, MIMETYPE_TEXT_INTENT, MIMETYPE_TEXT_PLAIN, MIMETYPE_TEXT_URILIST};
pub use snapshot::{ClipItem, ClipText, PrimaryClip};
pub use type_table::{TypeCode, TypeCodeError, CLIPBOARD_TYPE_TABLE};
