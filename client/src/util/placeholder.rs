//! Placeholder-service URLs used when a primary image fails to load.
//!
//! Every URL follows one template so fallbacks stay visually consistent:
//! `{base}/{width}x{height}/{background}/{foreground}?text={label}`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

#[cfg(test)]
#[path = "placeholder_test.rs"]
mod placeholder_test;

/// Placeholder service endpoint.
pub const PLACEHOLDER_BASE_URL: &str = "https://placehold.co";

/// Label shown when a post's media cannot be loaded.
pub const MEDIA_NOT_FOUND_LABEL: &str = "Image Not Found";

/// Size and colors of a generated placeholder image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceholderStyle {
    pub width: u32,
    pub height: u32,
    /// Background color as bare hex, without `#`.
    pub background: &'static str,
    /// Text color as bare hex, without `#`.
    pub foreground: &'static str,
}

/// Characters left unescaped in a label (RFC 3986 unreserved).
const LABEL_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const NEUTRAL_BACKGROUND: &str = "cccccc";
const NEUTRAL_FOREGROUND: &str = "333333";

pub const STORY_AVATAR: PlaceholderStyle = neutral(60, 60);
pub const POST_AVATAR: PlaceholderStyle = neutral(40, 40);
pub const SUGGESTION_AVATAR: PlaceholderStyle = neutral(40, 40);
pub const CURRENT_USER_AVATAR: PlaceholderStyle = neutral(60, 60);
pub const POST_MEDIA: PlaceholderStyle = neutral(600, 400);

const fn neutral(width: u32, height: u32) -> PlaceholderStyle {
    PlaceholderStyle {
        width,
        height,
        background: NEUTRAL_BACKGROUND,
        foreground: NEUTRAL_FOREGROUND,
    }
}

/// Build a placeholder URL for `label` rendered with `style`.
pub fn placeholder_url(style: PlaceholderStyle, label: &str) -> String {
    format!(
        "{PLACEHOLDER_BASE_URL}/{}x{}/{}/{}?text={}",
        style.width,
        style.height,
        style.background,
        style.foreground,
        encode_label(label)
    )
}

/// First two characters of a display name, uppercased.
pub fn initials(name: &str) -> String {
    name.chars().take(2).flat_map(char::to_uppercase).collect()
}

/// Per-user avatar fallback labelled with the user's initials.
pub fn avatar_placeholder(style: PlaceholderStyle, name: &str) -> String {
    placeholder_url(style, &initials(name))
}

/// Generic fallback for post media; deliberately not user-specific.
pub fn media_placeholder() -> String {
    placeholder_url(POST_MEDIA, MEDIA_NOT_FOUND_LABEL)
}

/// Encode a label for the `text` query parameter.
///
/// Words are percent-encoded with [`LABEL_SET`] and joined with `+`.
fn encode_label(label: &str) -> String {
    label
        .split(' ')
        .map(|word| utf8_percent_encode(word, LABEL_SET).to_string())
        .collect::<Vec<_>>()
        .join("+")
}
