//! The fixed table of clipboard categories the bridge recognizes.
//!
//! Native callers exchange clipboard kinds as small integers. Code `0` means
//! "no clip / unrecognized"; codes `1..=3` index into [`CLIPBOARD_TYPE_TABLE`]
//! (offset by one).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::mime::{MimeType, MIMETYPE_TEXT_INTENT, MIMETYPE_TEXT_PLAIN, MIMETYPE_TEXT_URILIST};
use super::snapshot::PrimaryClip;

/// MIME categories addressed by type codes 1, 2 and 3.
pub const CLIPBOARD_TYPE_TABLE: [&str; 3] =
    [MIMETYPE_TEXT_PLAIN, MIMETYPE_TEXT_INTENT, MIMETYPE_TEXT_URILIST];

/// Order in which a clip's MIME types are probed. A clip may advertise
/// several types; the first hit wins.
const DETECTION_ORDER: [TypeCode; 3] = [TypeCode::Intent, TypeCode::UriList, TypeCode::PlainText];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum TypeCode {
    Unknown = 0,
    PlainText = 1,
    Intent = 2,
    UriList = 3,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeCodeError {
    #[error("clipboard type code {0} is outside the type table (expected 0..=3)")]
    OutOfRange(i32),
}

impl TypeCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// MIME type this code stands for, `None` for [`TypeCode::Unknown`].
    pub fn mime(self) -> Option<MimeType> {
        match self {
            TypeCode::Unknown => None,
            code => Some(MimeType(
                CLIPBOARD_TYPE_TABLE[code as usize - 1].to_string(),
            )),
        }
    }

    /// Classify a clip by the MIME types it advertises.
    ///
    /// Intent-shaped clips win over URI lists, which win over plain text.
    pub fn detect(clip: &PrimaryClip) -> TypeCode {
        DETECTION_ORDER
            .into_iter()
            .find(|code| {
                code.mime()
                    .is_some_and(|mime| clip.has_mime_type(&mime))
            })
            .unwrap_or(TypeCode::Unknown)
    }
}

impl TryFrom<i32> for TypeCode {
    type Error = TypeCodeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TypeCode::Unknown),
            1 => Ok(TypeCode::PlainText),
            2 => Ok(TypeCode::Intent),
            3 => Ok(TypeCode::UriList),
            other => Err(TypeCodeError::OutOfRange(other)),
        }
    }
}

impl From<TypeCode> for i32 {
    fn from(code: TypeCode) -> Self {
        code.as_i32()
    }
}
