use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const MIMETYPE_TEXT_PLAIN: &str = "text/plain";
pub const MIMETYPE_TEXT_INTENT: &str = "text/vnd.android.intent";
pub const MIMETYPE_TEXT_URILIST: &str = "text/uri-list";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MimeType(pub String);

impl MimeType {
    pub fn text_plain() -> Self {
        Self(MIMETYPE_TEXT_PLAIN.into())
    }
    pub fn text_intent() -> Self {
        Self(MIMETYPE_TEXT_INTENT.into())
    }
    pub fn text_uri_list() -> Self {
        Self(MIMETYPE_TEXT_URILIST.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the concrete type `advertised` fits this type used as a pattern.
    ///
    /// Only the pattern may use `*` in its type or subtype position. The
    /// advertised type is compared literally and case-sensitively, so a clip
    /// advertising `text/*` does not match `text/plain`. Malformed values (no
    /// `/`, or an empty half) never match.
    pub fn matches(&self, advertised: &MimeType) -> bool {
        let (Some((pattern_type, pattern_sub)), Some((concrete_type, concrete_sub))) =
            (split_mime(&self.0), split_mime(&advertised.0))
        else {
            return false;
        };

        part_matches(pattern_type, concrete_type) && part_matches(pattern_sub, concrete_sub)
    }
}

fn split_mime(mime: &str) -> Option<(&str, &str)> {
    let (ty, sub) = mime.trim().split_once('/')?;
    if ty.is_empty() || sub.is_empty() {
        return None;
    }
    Some((ty, sub))
}

fn part_matches(pattern: &str, concrete: &str) -> bool {
    pattern == "*" || pattern == concrete
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MimeType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MimeType(s.to_string()))
    }
}
