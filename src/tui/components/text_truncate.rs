//! Width-aware text truncation for table cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates text to the provided display width, appending an ellipsis.
///
/// Width is measured in terminal columns, not Unicode scalar count, so
/// double-width characters are handled correctly. Widths of three or
/// fewer columns fall back to dots only.
#[must_use]
pub(crate) fn fit_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target_width = max_width.saturating_sub(3);
    let mut truncated = String::new();
    let mut current_width = 0;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        truncated.push(ch);
        current_width += char_width;
    }
    format!("{truncated}...")
}

/// Pads text with spaces to exactly the given display width, truncating
/// first when it is too long.
#[must_use]
pub(crate) fn pad_to_width(text: &str, width: usize) -> String {
    let fitted = fit_to_width(text, width);
    let padding = width.saturating_sub(fitted.width());
    format!("{fitted}{}", " ".repeat(padding))
}
