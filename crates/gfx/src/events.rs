//! Turns egui's immediate-mode frames into the toolbar's host events.
//!
//! egui has no change notifications, so each frame is compared with the
//! previous one and every difference becomes an [`OverlayEvent`].

use core_types::Rect;
use css::TextBoxStyle;
use egui::{Context, Event, Key};
use overlay::{OverlayEvent, Viewport};

/// What one frame showed of the text input and the window.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSample {
    pub revision: u64,
    pub selection: Option<(usize, usize)>,
    pub focused: bool,
    pub rect: Rect,
    pub viewport: Viewport,
    pub style: TextBoxStyle,
    pub input: FrameInput,
}

/// Raw input seen this frame that matters to the toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub pointer_released: bool,
    pub key_released: bool,
    pub escape_pressed: bool,
    pub scrolled: bool,
}

impl FrameInput {
    pub fn read(ctx: &Context) -> Self {
        ctx.input(|i| Self {
            pointer_released: i.pointer.any_released(),
            key_released: i
                .events
                .iter()
                .any(|e| matches!(e, Event::Key { pressed: false, .. })),
            escape_pressed: i.key_pressed(Key::Escape),
            scrolled: i.raw_scroll_delta != egui::Vec2::ZERO,
        })
    }
}

#[derive(Debug, Default)]
pub struct FrameObserver {
    last: Option<FrameSample>,
}

impl FrameObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events implied by the difference between `sample` and the previous
    /// frame. Focus changes come first so a blur is seen before anything
    /// else that happened in the same frame.
    pub fn observe(&mut self, sample: FrameSample) -> Vec<OverlayEvent> {
        let mut events = Vec::new();

        match &self.last {
            None => {
                if sample.focused {
                    events.push(OverlayEvent::Focus);
                }
                if sample.selection.is_some() {
                    events.push(OverlayEvent::SelectionChange);
                }
            }
            Some(prev) => {
                if prev.focused != sample.focused {
                    events.push(if sample.focused {
                        OverlayEvent::Focus
                    } else {
                        OverlayEvent::Blur
                    });
                }
                if prev.revision != sample.revision {
                    events.push(OverlayEvent::Input);
                }
                if prev.selection != sample.selection {
                    events.push(OverlayEvent::SelectionChange);
                }
                if prev.viewport != sample.viewport
                    || prev.rect.width != sample.rect.width
                    || prev.rect.height != sample.rect.height
                {
                    events.push(OverlayEvent::Resize);
                }
                if prev.rect.x != sample.rect.x || prev.rect.y != sample.rect.y {
                    events.push(OverlayEvent::Scroll);
                }
                if prev.style != sample.style {
                    events.push(OverlayEvent::StyleChange);
                }
            }
        }

        let input = sample.input;
        if input.scrolled && !events.contains(&OverlayEvent::Scroll) {
            events.push(OverlayEvent::Scroll);
        }
        if input.pointer_released {
            events.push(OverlayEvent::PointerUp);
        }
        if input.key_released {
            events.push(OverlayEvent::KeyUp);
        }
        if input.escape_pressed {
            events.push(OverlayEvent::Dismiss);
        }

        self.last = Some(sample);
        events
    }
}
