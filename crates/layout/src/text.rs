use css::TextBoxStyle;

/// Layout can depend on this without knowing about egui, the DOM, etc.
pub trait TextMeasurer {
    /// Return the width of `text` in CSS px when rendered with `style`.
    ///
    /// `text` is already transformed (`text-transform`) and excludes
    /// letter/word spacing, which layout adds itself.
    fn measure(&self, text: &str, style: &TextBoxStyle) -> f32;

    /// Return the line-height in CSS px for the given `style`.
    fn line_height(&self, style: &TextBoxStyle) -> f32 {
        style.line_height_px()
    }
}
