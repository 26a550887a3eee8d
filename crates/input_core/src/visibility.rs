//! Toolbar visibility state machine.
//!
//! Two states only: `Hidden -> Visible` on a qualifying selection,
//! `Visible -> Hidden` on collapse, blur (after a grace delay), dismiss,
//! action taken, or a failed measurement.

use std::time::{Duration, Instant};

use crate::selection::SelectionRange;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Why the toolbar is (or went) hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HideReason {
    /// No selection, or `start == end`.
    Collapsed,
    /// Fewer meaningful characters than the configured threshold.
    BelowThreshold,
    /// The input does not have focus.
    Unfocused,
    /// The host reported offsets outside its text.
    InvalidSelection,
    /// Focus left the input and the grace delay elapsed.
    Blurred,
    Dismissed,
    ActionTaken,
    /// The mirror could not be laid out.
    Unmeasurable,
    Unmounted,
}

/// Outcome of checking a host selection against the show rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Show(SelectionRange),
    Hide(HideReason),
}

/// Decide whether a selection may show the toolbar.
///
/// `selection` is the host's `(anchor, focus)` byte offsets, in either order.
/// A selection qualifies when the input is focused, the range is valid and
/// non-empty, and it holds at least `min_chars` non-whitespace characters.
pub fn qualify_selection(
    text: &str,
    selection: Option<(usize, usize)>,
    focused: bool,
    min_chars: usize,
) -> Verdict {
    if !focused {
        return Verdict::Hide(HideReason::Unfocused);
    }
    let Some((anchor, focus)) = selection else {
        return Verdict::Hide(HideReason::Collapsed);
    };
    let range = match SelectionRange::try_new(anchor, focus, text) {
        Ok(range) => range,
        Err(err) => {
            log::debug!(target: "input_core.visibility", "ignoring selection: {err}");
            return Verdict::Hide(HideReason::InvalidSelection);
        }
    };
    if range.is_empty() {
        return Verdict::Hide(HideReason::Collapsed);
    }
    if range.meaningful_chars(text) < min_chars.max(1) {
        return Verdict::Hide(HideReason::BelowThreshold);
    }
    Verdict::Show(range)
}

#[derive(Clone, Debug, Default)]
pub struct VisibilityMachine {
    state: Visibility,
    blur_deadline: Option<Instant>,
    last_hide: Option<HideReason>,
}

impl VisibilityMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Visible
    }

    /// The reason of the most recent `Visible -> Hidden` transition.
    pub fn last_hide_reason(&self) -> Option<HideReason> {
        self.last_hide
    }

    /// When a pending blur will hide the toolbar, if one is pending.
    pub fn pending_hide_at(&self) -> Option<Instant> {
        self.blur_deadline
    }

    /// Enter `Visible`. Returns `true` if the state changed.
    pub fn show(&mut self) -> bool {
        self.blur_deadline = None;
        let changed = self.state != Visibility::Visible;
        self.state = Visibility::Visible;
        changed
    }

    /// Enter `Hidden`. Returns `true` if the state changed.
    pub fn hide(&mut self, reason: HideReason) -> bool {
        self.blur_deadline = None;
        if self.state == Visibility::Hidden {
            return false;
        }
        self.state = Visibility::Hidden;
        self.last_hide = Some(reason);
        true
    }

    /// Focus left the input. Hides once `grace` has elapsed unless focus
    /// comes back first.
    pub fn begin_blur(&mut self, now: Instant, grace: Duration) {
        if self.state != Visibility::Visible {
            return;
        }
        if grace.is_zero() {
            self.hide(HideReason::Blurred);
        } else if self.blur_deadline.is_none() {
            self.blur_deadline = Some(now + grace);
        }
    }

    /// Focus returned to the input (or moved into the toolbar).
    pub fn cancel_blur(&mut self) {
        self.blur_deadline = None;
    }

    /// Fire an expired blur deadline. Returns `true` if this hid the toolbar.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.blur_deadline {
            Some(deadline) if now >= deadline => self.hide(HideReason::Blurred),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRACE: Duration = Duration::from_millis(150);

    #[test]
    fn qualification_rules() {
        let text = "Hello world";
        assert_eq!(
            qualify_selection(text, Some((0, 5)), true, 3),
            Verdict::Show(SelectionRange::new(0, 5))
        );
        assert_eq!(
            qualify_selection(text, Some((5, 0)), true, 3),
            Verdict::Show(SelectionRange::new(0, 5))
        );
        assert_eq!(
            qualify_selection(text, Some((0, 5)), false, 3),
            Verdict::Hide(HideReason::Unfocused)
        );
        assert_eq!(
            qualify_selection(text, Some((6, 6)), true, 3),
            Verdict::Hide(HideReason::Collapsed)
        );
        assert_eq!(
            qualify_selection(text, None, true, 3),
            Verdict::Hide(HideReason::Collapsed)
        );
        assert_eq!(
            qualify_selection(text, Some((0, 40)), true, 3),
            Verdict::Hide(HideReason::InvalidSelection)
        );
    }

    #[test]
    fn threshold_counts_non_whitespace_only() {
        let text = "ab   cd";
        assert_eq!(
            qualify_selection(text, Some((0, 2)), true, 3),
            Verdict::Hide(HideReason::BelowThreshold)
        );
        // four chars selected, one of them meaningful
        assert_eq!(
            qualify_selection(text, Some((1, 5)), true, 3),
            Verdict::Hide(HideReason::BelowThreshold)
        );
        assert_eq!(
            qualify_selection(text, Some((0, 6)), true, 3),
            Verdict::Show(SelectionRange::new(0, 6))
        );
    }

    #[test]
    fn zero_threshold_still_needs_one_char() {
        assert_eq!(
            qualify_selection("  ", Some((0, 2)), true, 0),
            Verdict::Hide(HideReason::BelowThreshold)
        );
    }

    #[test]
    fn show_and_hide_report_changes() {
        let mut m = VisibilityMachine::new();
        assert_eq!(m.state(), Visibility::Hidden);
        assert!(m.show());
        assert!(!m.show());
        assert!(m.hide(HideReason::Dismissed));
        assert!(!m.hide(HideReason::Collapsed));
        assert_eq!(m.last_hide_reason(), Some(HideReason::Dismissed));
    }

    #[test]
    fn blur_hides_after_grace() {
        let t0 = Instant::now();
        let mut m = VisibilityMachine::new();
        m.show();
        m.begin_blur(t0, GRACE);
        assert!(m.is_visible());
        assert!(!m.poll(t0 + Duration::from_millis(100)));
        assert!(m.is_visible());
        assert!(m.poll(t0 + GRACE));
        assert_eq!(m.last_hide_reason(), Some(HideReason::Blurred));
        assert_eq!(m.pending_hide_at(), None);
    }

    #[test]
    fn refocus_within_grace_cancels_hide() {
        let t0 = Instant::now();
        let mut m = VisibilityMachine::new();
        m.show();
        m.begin_blur(t0, GRACE);
        m.cancel_blur();
        assert!(!m.poll(t0 + GRACE * 2));
        assert!(m.is_visible());
    }

    #[test]
    fn repeated_blur_keeps_first_deadline() {
        let t0 = Instant::now();
        let mut m = VisibilityMachine::new();
        m.show();
        m.begin_blur(t0, GRACE);
        m.begin_blur(t0 + Duration::from_millis(100), GRACE);
        assert_eq!(m.pending_hide_at(), Some(t0 + GRACE));
    }

    #[test]
    fn blur_while_hidden_is_ignored() {
        let t0 = Instant::now();
        let mut m = VisibilityMachine::new();
        m.begin_blur(t0, GRACE);
        assert_eq!(m.pending_hide_at(), None);
    }

    #[test]
    fn zero_grace_hides_immediately() {
        let mut m = VisibilityMachine::new();
        m.show();
        m.begin_blur(Instant::now(), Duration::ZERO);
        assert!(!m.is_visible());
    }
}
