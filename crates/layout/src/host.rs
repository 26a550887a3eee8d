use core_types::{Point, Rect, Size};
use css::TextBoxStyle;

/// The live text control a toolbar is attached to.
///
/// Every read goes through this trait so tests can substitute fixed metrics
/// for real layout. Offsets are UTF-8 byte offsets into [`TextHost::text`].
pub trait TextHost {
    /// Current text content.
    fn text(&self) -> &str;

    /// Monotonic revision, bumped whenever [`TextHost::text`] changes.
    fn content_revision(&self) -> u64;

    /// `(anchor, focus)` of the current selection, in either order.
    fn selection(&self) -> Option<(usize, usize)>;

    fn has_focus(&self) -> bool;

    /// How far the control's content is scrolled, in CSS px.
    fn scroll_offset(&self) -> Point;

    /// Computed style snapshot; `None` when the environment cannot provide one.
    fn computed_style(&self) -> Option<TextBoxStyle>;

    /// Client box size (content + padding, no border, no scrollbars);
    /// `None` while the control is not laid out.
    fn client_size(&self) -> Option<Size>;

    /// Border box in viewport coordinates.
    fn bounding_rect(&self) -> Option<Rect>;
}
