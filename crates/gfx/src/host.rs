//! An egui `TextEdit` seen through [`layout::TextHost`].

use core_types::{Point, Rect, Size};
use css::{BoxMetrics, FontFamily, Length, LineHeight, OverflowWrap, TextBoxStyle, WhiteSpace};
use egui::text_edit::TextEditOutput;
use egui::{Context, Margin, TextStyle};
use input_core::byte_offset_for_char;
use layout::TextHost;

/// Computed style of a multiline `TextEdit` drawn with `margin` in `ctx`.
///
/// egui wraps at word boundaries and breaks words longer than a row, which
/// is `pre-wrap` with `overflow-wrap: break-word`. The frame stroke is drawn
/// over the margin, so the border is zero.
pub fn text_edit_style(ctx: &Context, margin: Margin) -> TextBoxStyle {
    let font_id = TextStyle::Monospace.resolve(&ctx.style());
    let row_height = ctx.fonts(|f| f.row_height(&font_id));

    TextBoxStyle {
        font_family: FontFamily::new("monospace"),
        font_size: Length::Px(font_id.size),
        line_height: LineHeight::Px(row_height),
        white_space: WhiteSpace::PreWrap,
        overflow_wrap: OverflowWrap::BreakWord,
        tab_size: 4,
        box_metrics: BoxMetrics {
            padding_top: f32::from(margin.top),
            padding_right: f32::from(margin.right),
            padding_bottom: f32::from(margin.bottom),
            padding_left: f32::from(margin.left),
            ..BoxMetrics::zero()
        },
        ..TextBoxStyle::initial()
    }
}

/// Byte-offset `(anchor, focus)` of an egui char-index selection.
///
/// `None` when either end lies past the text, which happens for one frame
/// after the text shrinks under a stale cursor.
pub fn selection_bytes(text: &str, anchor: usize, focus: usize) -> Option<(usize, usize)> {
    Some((
        byte_offset_for_char(text, anchor)?,
        byte_offset_for_char(text, focus)?,
    ))
}

/// Snapshot of a `TextEdit` after it was shown this frame.
#[derive(Clone, Debug)]
pub struct EguiTextHost<'a> {
    text: &'a str,
    revision: u64,
    selection: Option<(usize, usize)>,
    focused: bool,
    rect: Rect,
    style: TextBoxStyle,
}

impl<'a> EguiTextHost<'a> {
    /// `revision` must change whenever `text` does; the caller owns the
    /// counter because egui does not keep one.
    pub fn from_output(
        text: &'a str,
        revision: u64,
        output: &TextEditOutput,
        style: TextBoxStyle,
    ) -> Self {
        let r = output.response.rect;
        Self {
            text,
            revision,
            selection: output
                .cursor_range
                .as_ref()
                .and_then(|r| selection_bytes(text, r.secondary.index, r.primary.index)),
            focused: output.response.has_focus(),
            rect: Rect::new(r.min.x, r.min.y, r.width(), r.height()),
            style,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn style(&self) -> &TextBoxStyle {
        &self.style
    }
}

impl TextHost for EguiTextHost<'_> {
    fn text(&self) -> &str {
        self.text
    }

    fn content_revision(&self) -> u64 {
        self.revision
    }

    fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    /// The response rect is already in screen space after any enclosing
    /// `ScrollArea` offset, and the edit grows with its content.
    fn scroll_offset(&self) -> Point {
        Point::ZERO
    }

    fn computed_style(&self) -> Option<TextBoxStyle> {
        Some(self.style.clone())
    }

    fn client_size(&self) -> Option<Size> {
        let size = Size::new(self.rect.width, self.rect.height);
        (!size.is_empty()).then_some(size)
    }

    fn bounding_rect(&self) -> Option<Rect> {
        Some(self.rect)
    }
}
