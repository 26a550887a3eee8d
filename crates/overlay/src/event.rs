/// Host notifications the toolbar reacts to.
///
/// Geometry-affecting events only schedule work: measurement happens on the
/// next frame, against whatever state the host is in by then.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayEvent {
    SelectionChange,
    PointerUp,
    KeyUp,
    Input,
    /// The input or the window scrolled.
    Scroll,
    Resize,
    StyleChange,
    Focus,
    Blur,
    /// The user closed the toolbar (Escape or the close button).
    Dismiss,
    Unmount,
}

impl OverlayEvent {
    /// `true` for events that only require the placement to be recomputed.
    pub fn requests_frame(self) -> bool {
        matches!(
            self,
            OverlayEvent::SelectionChange
                | OverlayEvent::PointerUp
                | OverlayEvent::KeyUp
                | OverlayEvent::Input
                | OverlayEvent::Scroll
                | OverlayEvent::Resize
                | OverlayEvent::StyleChange
        )
    }
}
