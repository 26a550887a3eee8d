use css::TextBoxStyle;

use crate::TextMeasurer;
use crate::metrics::run_width;

/// Return the byte index at which to break `text` so that the
/// prefix fits within `max_w` CSS pixels.
///
/// Used for `overflow-wrap`/`word-break` on runs that do not fit a line.
/// Always makes progress: when not even one char fits, the first char is
/// returned so the caller can place it on its own line.
pub(crate) fn break_word_prefix_end(
    measurer: &dyn TextMeasurer,
    style: &TextBoxStyle,
    text: &str,
    max_w: f32,
) -> usize {
    if text.is_empty() {
        return 0;
    }

    let max_w = max_w.max(0.0);

    // Candidate cut positions at UTF-8 char boundaries (end indices).
    let ends: Vec<usize> = text
        .char_indices()
        .map(|(idx, ch)| idx + ch.len_utf8())
        .collect();

    let fallback_one_char = ends.first().copied().unwrap_or(text.len()).min(text.len());

    // Find the largest prefix that fits using binary search.
    let mut lo = 0usize;
    let mut hi = ends.len();
    let mut best: Option<usize> = None;
    while lo < hi {
        let mid = (lo + hi) / 2;
        let end = ends[mid];
        let w = run_width(measurer, style, &text[..end]);
        if w <= max_w {
            best = Some(end);
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    best.unwrap_or(fallback_one_char).min(text.len())
}
