use css::TextBoxStyle;

use crate::TextMeasurer;

/// Width of a run of non-space text, including letter spacing.
///
/// The transform is applied before measuring, so `capitalize` sees word
/// starts the way the control renders them and `uppercase` expansions
/// (`ß` to `SS`) are measured as the glyphs they become.
pub(crate) fn run_width(measurer: &dyn TextMeasurer, style: &TextBoxStyle, text: &str) -> f32 {
    prefix_width(measurer, style, text, text.chars().count())
}

/// Width of the first `chars` source characters of `run`, as rendered.
///
/// Transforms only look backwards, so the prefix is transformed on its own
/// and may come out longer than `chars` glyphs.
pub(crate) fn prefix_width(
    measurer: &dyn TextMeasurer,
    style: &TextBoxStyle,
    run: &str,
    chars: usize,
) -> f32 {
    if chars == 0 || run.is_empty() {
        return 0.0;
    }
    let end = run
        .char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(run.len());
    let rendered = style.text_transform.apply(&run[..end]);
    let w = measurer.measure(&rendered, style);
    let w = if w.is_finite() { w.max(0.0) } else { 0.0 };
    w + style.letter_spacing * rendered.chars().count() as f32
}

/// Advance of one preserved space.
pub(crate) fn space_advance(measurer: &dyn TextMeasurer, style: &TextBoxStyle) -> f32 {
    let w = measurer.measure(" ", style);
    let w = if w.is_finite() { w.max(0.0) } else { 0.0 };
    (w + style.letter_spacing + style.word_spacing).max(0.0)
}

/// Advance of a preserved tab starting at `x` (relative to the line's left
/// content edge): up to the next tab stop.
pub(crate) fn tab_advance(measurer: &dyn TextMeasurer, style: &TextBoxStyle, x: f32) -> f32 {
    let space = measurer.measure(" ", style).max(0.0);
    let stop = space * style.tab_size as f32;
    if !(stop.is_finite() && stop > 0.0) {
        return 0.0;
    }
    let next = ((x / stop).floor() + 1.0) * stop;
    (next - x).max(0.0)
}
