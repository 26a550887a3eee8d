use core_types::{Point, Size};

use crate::config::PlacementConfig;

/// Size of the visible area the toolbar must stay inside, in CSS px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Everything the positioner needs for one placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementRequest {
    /// Viewport position of the text box's content origin.
    pub content_origin: Point,
    /// Anchor relative to the content origin: x to center on, y at the
    /// top of the anchor line.
    pub caret: Point,
    pub line_height: f32,
    pub scroll: Point,
    pub toolbar: Size,
    pub viewport: Viewport,
}

/// Final fixed-position coordinates of the toolbar's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    /// `true` when there was no room above and the toolbar sits below the
    /// anchor line.
    pub flipped: bool,
}

/// Place the toolbar centered above the anchor, clamped into the viewport,
/// flipped below the line when there is no room above.
pub fn place_toolbar(request: &PlacementRequest, config: &PlacementConfig) -> Placement {
    let margin = config.margin;
    let gap = config.gap;
    let toolbar = request.toolbar;
    let viewport = request.viewport;

    let anchor_x = request.content_origin.x + request.caret.x - request.scroll.x;
    let anchor_y = request.content_origin.y + request.caret.y - request.scroll.y;

    let max_x = viewport.width - toolbar.width - margin;
    let x = (anchor_x - toolbar.width / 2.0).min(max_x).max(margin);

    let above = anchor_y - gap - toolbar.height;
    let (mut y, flipped) = if above < margin {
        (anchor_y + request.line_height + gap, true)
    } else {
        (above, false)
    };
    if y + toolbar.height > viewport.height - margin {
        y = margin.max(viewport.height - toolbar.height - margin);
    }

    log::trace!(
        target: "overlay.position",
        "anchor=({anchor_x}, {anchor_y}) placement=({x}, {y}) flipped={flipped}"
    );

    Placement { x, y, flipped }
}
