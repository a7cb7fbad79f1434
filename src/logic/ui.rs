//! UI state transition logic
//!
//! Pure timing and text helpers used by the form renderer.

use unicode_width::UnicodeWidthStr;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Whether a toast shown `elapsed_ms` ago should disappear
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Display column of the cursor after `text` inside a bordered input
///
/// Wide characters take two cells; the result is clamped to the field.
///
/// # Examples
/// ```
/// use nestnote::logic::ui::cursor_offset;
///
/// assert_eq!(cursor_offset("abc", 20), 3);
/// assert_eq!(cursor_offset("日本", 20), 4);
/// assert_eq!(cursor_offset("a long folder name", 5), 5);
/// ```
pub fn cursor_offset(text: &str, field_width: u16) -> u16 {
    let width = UnicodeWidthStr::width(text).min(u16::MAX as usize) as u16;
    width.min(field_width)
}
