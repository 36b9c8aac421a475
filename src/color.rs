//! Color-channel extraction and recomposition for translucent backgrounds.
//!
//! Focus-mode tinting works on textual color values as the document reports
//! them (`rgba(235, 235, 235, 0.901961)` and friends). Extraction is a
//! literal scan for digit runs followed by a comma-space, not a CSS parse:
//! keyword colors such as `transparent` carry no channels and yield nothing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Digit runs followed by `", "` — one match per leading channel.
static CHANNEL_SCAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+, ").expect("channel scan regex is valid"));

/// Extracts the leading color channels from a textual color value.
///
/// Returns the matched channels joined by `", "` with the trailing
/// separator stripped, or `None` when the value is empty or contains no
/// channel runs.
///
/// # Example
///
/// ```rust
/// use simpread_style::color::channels;
///
/// assert_eq!(
///     channels("rgba(235, 235, 235, 0.901961)"),
///     Some("235, 235, 235".to_string())
/// );
/// assert_eq!(channels("transparent"), None);
/// assert_eq!(channels(""), None);
/// ```
pub fn channels(value: &str) -> Option<String> {
    let joined: String = CHANNEL_SCAN.find_iter(value).map(|m| m.as_str()).collect();
    if joined.is_empty() {
        return None;
    }
    let trimmed = joined.strip_suffix(", ").unwrap_or(&joined);
    Some(trimmed.to_string())
}

/// Composes an `rgba(...)` value from extracted channels and a fractional
/// alpha.
///
/// # Example
///
/// ```rust
/// use simpread_style::color::compose;
///
/// assert_eq!(compose("235, 235, 235", 0.5), "rgba(235, 235, 235, 0.5)");
/// assert_eq!(compose("0, 0, 0", 1.0), "rgba(0, 0, 0, 1)");
/// ```
pub fn compose(channels: &str, alpha: f64) -> String {
    format!("rgba({}, {})", channels, alpha)
}
