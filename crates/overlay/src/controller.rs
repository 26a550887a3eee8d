use std::time::Instant;

use core_types::{Point, Size, ToolbarAction};
use input_core::{HideReason, SelectionRange, Verdict, VisibilityMachine, qualify_selection};
use layout::{
    CaretAffinity, MeasureError, Mirror, TextHost, TextMeasurer, locate_caret, locate_caret_with,
};

use crate::actions::ToolbarActions;
use crate::config::ToolbarConfig;
use crate::event::OverlayEvent;
use crate::position::{Placement, PlacementRequest, Viewport, place_toolbar};

/// Floating Summarize/Rewrite toolbar attached to one text input.
///
/// Events only record what happened; [`SelectionToolbar::run_frame`] does
/// all measuring against the host's state at that moment.
#[derive(Debug)]
pub struct SelectionToolbar {
    config: ToolbarConfig,
    visibility: VisibilityMachine,
    /// The one replica this toolbar owns. Rebuilt in place when stale.
    mirror: Option<Mirror>,
    frame_pending: bool,
    measured_size: Option<Size>,
    selection: Option<SelectionRange>,
    placement: Option<Placement>,
    /// Selection the user closed the toolbar on. It stays hidden until the
    /// selection changes or the input is focused again.
    suppressed: Option<SelectionRange>,
    mounted: bool,
}

impl SelectionToolbar {
    pub fn new(config: ToolbarConfig) -> Self {
        Self {
            config,
            visibility: VisibilityMachine::new(),
            mirror: None,
            frame_pending: false,
            measured_size: None,
            selection: None,
            placement: None,
            suppressed: None,
            mounted: true,
        }
    }

    pub fn config(&self) -> &ToolbarConfig {
        &self.config
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement.filter(|_| self.is_visible())
    }

    /// Range the visible toolbar acts on.
    pub fn selection(&self) -> Option<SelectionRange> {
        self.selection.filter(|_| self.is_visible())
    }

    pub fn last_hide_reason(&self) -> Option<HideReason> {
        self.visibility.last_hide_reason()
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// When the host must run a frame even without new events, so a pending
    /// blur can hide the toolbar.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.visibility.pending_hide_at()
    }

    pub fn has_mirror(&self) -> bool {
        self.mirror.is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Toolbar size in effect: the last measured size, or the configured
    /// estimate before the first measurement.
    pub fn toolbar_size(&self) -> Size {
        self.measured_size.unwrap_or(Size::new(
            self.config.toolbar.estimated_width,
            self.config.toolbar.estimated_height,
        ))
    }

    /// Report the rendered toolbar size. A change re-places the toolbar.
    pub fn set_toolbar_size(&mut self, size: Size) {
        if size.is_empty() || self.measured_size == Some(size) {
            return;
        }
        self.measured_size = Some(size);
        if self.is_visible() {
            self.frame_pending = true;
        }
    }

    pub fn handle_event(&mut self, event: OverlayEvent, now: Instant) {
        if !self.mounted {
            return;
        }
        log::trace!(target: "overlay.controller", "event {event:?}");

        match event {
            e if e.requests_frame() => self.frame_pending = true,
            OverlayEvent::Focus => {
                self.visibility.cancel_blur();
                self.suppressed = None;
                self.frame_pending = true;
            }
            OverlayEvent::Blur => {
                self.visibility
                    .begin_blur(now, self.config.selection.blur_grace());
                if !self.visibility.is_visible() {
                    self.release();
                }
            }
            OverlayEvent::Dismiss => self.dismiss(),
            OverlayEvent::Unmount => self.unmount(),
            _ => {}
        }
    }

    /// The deferred measuring step. Call once per frame; returns where the
    /// toolbar goes, or `None` when it is hidden.
    pub fn run_frame(
        &mut self,
        host: &dyn TextHost,
        measurer: &dyn TextMeasurer,
        viewport: Viewport,
        now: Instant,
    ) -> Option<Placement> {
        if !self.mounted {
            return None;
        }
        if self.visibility.poll(now) {
            log::debug!(target: "overlay.controller", "hidden after blur grace");
            self.release();
            return None;
        }
        if self.visibility.pending_hide_at().is_some() || !self.frame_pending {
            return self.placement();
        }
        self.frame_pending = false;

        let verdict = qualify_selection(
            host.text(),
            host.selection(),
            host.has_focus(),
            self.config.selection.min_selection_chars,
        );
        let range = match verdict {
            Verdict::Show(range) => range,
            Verdict::Hide(reason) => {
                self.suppressed = None;
                self.hide(reason);
                return None;
            }
        };
        if self.suppressed == Some(range) {
            return None;
        }
        self.suppressed = None;

        match self.measure(host, measurer, viewport, range) {
            Ok(placement) => {
                if self.visibility.show() {
                    log::debug!(target: "overlay.controller", "showing toolbar for {range:?}");
                }
                self.selection = Some(range);
                self.placement = Some(placement);
                Some(placement)
            }
            Err(err) => {
                log::debug!(target: "overlay.controller", "cannot place toolbar: {err}");
                self.hide(HideReason::Unmeasurable);
                None
            }
        }
    }

    fn measure(
        &mut self,
        host: &dyn TextHost,
        measurer: &dyn TextMeasurer,
        viewport: Viewport,
        range: SelectionRange,
    ) -> Result<Placement, MeasureError> {
        let border_box = host.bounding_rect().ok_or(MeasureError::Detached)?;
        let mirror = self.refresh_mirror(host)?;
        let start = locate_caret(mirror, measurer, range.start)?;
        let end = locate_caret_with(mirror, measurer, range.end, CaretAffinity::Upstream)?;
        let content_origin = mirror.content_origin(border_box);

        let anchor_x = if start.line_index == end.line_index {
            (start.x + end.x) / 2.0
        } else {
            start.x
        };

        let request = PlacementRequest {
            content_origin,
            caret: Point::new(anchor_x, start.y),
            line_height: start.line_height,
            scroll: host.scroll_offset(),
            toolbar: self.toolbar_size(),
            viewport,
        };
        Ok(place_toolbar(&request, &self.config.placement))
    }

    fn refresh_mirror(&mut self, host: &dyn TextHost) -> Result<&Mirror, MeasureError> {
        let mirror = match self.mirror.take() {
            Some(mirror) if !mirror.is_stale(host) => mirror,
            _ => Mirror::build(host)?,
        };
        Ok(self.mirror.insert(mirror))
    }

    /// Hand the selected text to `actions` and hide. Returns `false` when
    /// there is nothing to act on.
    pub fn activate(
        &mut self,
        action: ToolbarAction,
        host: &dyn TextHost,
        actions: &mut dyn ToolbarActions,
    ) -> bool {
        let Some(range) = self.selection() else {
            return false;
        };
        let Some(text) = host.text().get(range.start..range.end) else {
            self.hide(HideReason::InvalidSelection);
            return false;
        };

        log::debug!(
            target: "overlay.controller",
            "{} on {} bytes",
            action.label(),
            text.len()
        );
        actions.dispatch(action, text);
        self.suppressed = Some(range);
        self.hide(HideReason::ActionTaken);
        true
    }

    /// Close the toolbar. It stays closed for the current selection.
    pub fn dismiss(&mut self) {
        if let Some(range) = self.selection() {
            self.suppressed = Some(range);
        }
        self.hide(HideReason::Dismissed);
    }

    /// Detach from the host: hide and release the mirror. Later events and
    /// frames are ignored.
    pub fn unmount(&mut self) {
        self.suppressed = None;
        self.hide(HideReason::Unmounted);
        self.mounted = false;
    }

    fn hide(&mut self, reason: HideReason) {
        if self.visibility.hide(reason) {
            log::debug!(target: "overlay.controller", "hiding toolbar: {reason:?}");
        }
        self.release();
    }

    fn release(&mut self) {
        self.mirror = None;
        self.selection = None;
        self.placement = None;
        self.frame_pending = false;
    }
}
