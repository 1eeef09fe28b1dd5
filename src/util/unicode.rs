use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Truncate or right-pad with spaces to exactly `cells` columns
pub fn fit_to_width(s: &str, cells: usize) -> String {
    let mut out = truncate_to_width(s, cells);
    let w = display_width(&out);
    out.extend(std::iter::repeat_n(' ', cells.saturating_sub(w)));
    out
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    match s[byte_offset..].grapheme_indices(true).nth(1) {
        Some((i, _)) => Some(byte_offset + i),
        None => Some(s.len()),
    }
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .last()
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_wide_chars() {
        assert_eq!(display_width("Read"), 4);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("Meditate", 20), "Meditate");
        assert_eq!(truncate_to_width("Meditate", 5), "Medi\u{2026}");
        assert_eq!(truncate_to_width("Meditate", 1), "\u{2026}");
        assert_eq!(truncate_to_width("Meditate", 0), "");
    }

    #[test]
    fn truncate_never_splits_wide_chars() {
        // Budget of 4 cells fits two wide chars, not two and a half
        assert_eq!(truncate_to_width("日本語です", 5), "日本\u{2026}");
        assert_eq!(truncate_to_width("日本語です", 4), "日\u{2026}");
    }

    #[test]
    fn fit_pads_short_names() {
        assert_eq!(fit_to_width("Run", 6), "Run   ");
        assert_eq!(fit_to_width("Running", 5), "Runn\u{2026}");
        assert_eq!(display_width(&fit_to_width("日本語です", 5)), 5);
    }

    #[test]
    fn grapheme_boundaries() {
        let s = "ae\u{301}b"; // e + combining acute is one grapheme
        assert_eq!(next_grapheme_boundary(s, 0), Some(1));
        assert_eq!(next_grapheme_boundary(s, 1), Some(4));
        assert_eq!(next_grapheme_boundary(s, 4), Some(5));
        assert_eq!(next_grapheme_boundary(s, 5), None);
        assert_eq!(prev_grapheme_boundary(s, 5), Some(4));
        assert_eq!(prev_grapheme_boundary(s, 4), Some(1));
        assert_eq!(prev_grapheme_boundary(s, 0), None);
    }
}
