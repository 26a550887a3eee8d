use std::time::Instant;

use app_api::UiApp;
use core_types::ToolbarAction;
use egui::{CentralPanel, Context, Margin, ScrollArea, TextEdit, TopBottomPanel};
use gfx::ui::{SelectionToolbarConfig, selection_toolbar};
use gfx::{
    EguiTextHost, EguiTextMeasurer, FrameInput, FrameObserver, FrameSample, TOOLBAR_STYLE,
    register_style_sheets, text_edit_style,
};
use layout::TextHost;
use overlay::{SelectionToolbar, ToolbarActions, ToolbarConfig, Viewport};

const EDIT_MARGIN: Margin = Margin {
    left: 6,
    right: 6,
    top: 4,
    bottom: 4,
};
const SHOWN_REQUESTS: usize = 6;
const PREVIEW_CHARS: usize = 60;

const SAMPLE_TEXT: &str = "Select a few words in this pad to summon the toolbar.\n\n\
The quick brown fox jumps over the lazy dog. Pack my box with five dozen liquor jugs.\n\
    Indented lines keep their leading spaces.";

/// A request the toolbar sent to the assistant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRequest {
    pub action: ToolbarAction,
    pub text: String,
}

/// Stands in for the assistant: records requests instead of answering them.
#[derive(Debug, Default)]
pub struct ActionLog {
    requests: Vec<ActionRequest>,
}

impl ActionLog {
    pub fn requests(&self) -> &[ActionRequest] {
        &self.requests
    }

    fn record(&mut self, action: ToolbarAction, text: &str) {
        log::info!(
            target: "scrivener",
            "{} requested for {} chars",
            action.label(),
            text.chars().count()
        );
        self.requests.push(ActionRequest {
            action,
            text: text.to_string(),
        });
    }
}

impl ToolbarActions for ActionLog {
    fn summarize(&mut self, text: &str) {
        self.record(ToolbarAction::Summarize, text);
    }

    fn rewrite(&mut self, text: &str) {
        self.record(ToolbarAction::Rewrite, text);
    }
}

fn preview(text: &str) -> String {
    let flat: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= PREVIEW_CHARS {
        return flat;
    }
    let mut out: String = flat.chars().take(PREVIEW_CHARS).collect();
    out.push('…');
    out
}

/// Demo app: one multiline text input with the selection toolbar attached.
pub struct WritingPad {
    text: String,
    revision: u64,
    toolbar: SelectionToolbar,
    observer: FrameObserver,
    actions: ActionLog,
    measurer: Option<EguiTextMeasurer>,
}

impl WritingPad {
    pub fn new(config: ToolbarConfig) -> Self {
        Self {
            text: SAMPLE_TEXT.to_string(),
            revision: 0,
            toolbar: SelectionToolbar::new(config),
            observer: FrameObserver::new(),
            actions: ActionLog::default(),
            measurer: None,
        }
    }

    fn requests_panel(&self, ctx: &Context) {
        TopBottomPanel::bottom("scrivener_requests").show(ctx, |ui| {
            ui.strong("Requests");
            if self.actions.requests().is_empty() {
                ui.weak("Nothing requested yet.");
            }
            for request in self.actions.requests().iter().rev().take(SHOWN_REQUESTS) {
                ui.label(format!(
                    "{}: {}",
                    request.action.label(),
                    preview(&request.text)
                ));
            }
        });
    }
}

impl UiApp for WritingPad {
    fn title(&self) -> &str {
        "Scrivener"
    }

    fn on_start(&mut self, ctx: &Context) {
        register_style_sheets(ctx, &[TOOLBAR_STYLE]);
    }

    fn ui(&mut self, ctx: &Context) {
        let now = Instant::now();
        self.requests_panel(ctx);

        let mut edited = None;
        CentralPanel::default().show(ctx, |ui| {
            ui.heading("Writing pad");
            ScrollArea::vertical().show(ui, |ui| {
                edited = Some(
                    TextEdit::multiline(&mut self.text)
                        .id_salt("scrivener_pad")
                        .code_editor()
                        .margin(EDIT_MARGIN)
                        .desired_width(f32::INFINITY)
                        .desired_rows(16)
                        .show(ui),
                );
            });
        });
        let Some(output) = edited else {
            return;
        };
        if output.response.changed() {
            self.revision += 1;
        }

        let style = text_edit_style(ctx, EDIT_MARGIN);
        let host = EguiTextHost::from_output(&self.text, self.revision, &output, style.clone());
        let screen = ctx.screen_rect();
        let viewport = Viewport::new(screen.width(), screen.height());

        let sample = FrameSample {
            revision: self.revision,
            selection: host.selection(),
            focused: host.has_focus(),
            rect: host.rect(),
            viewport,
            style,
            input: FrameInput::read(ctx),
        };
        for event in self.observer.observe(sample) {
            self.toolbar.handle_event(event, now);
        }

        let measurer: &EguiTextMeasurer = self
            .measurer
            .get_or_insert_with(|| EguiTextMeasurer::new(ctx));
        if let Some(placement) = self.toolbar.run_frame(&host, measurer, viewport, now) {
            let intent = selection_toolbar(ctx, placement, SelectionToolbarConfig::default());
            self.toolbar.set_toolbar_size(intent.size);
            if let Some(action) = intent.action {
                self.toolbar.activate(action, &host, &mut self.actions);
            } else if intent.dismissed {
                self.toolbar.dismiss();
            }
        }

        if self.toolbar.frame_pending() {
            ctx.request_repaint();
        }
        if let Some(deadline) = self.toolbar.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_log_records_in_order() {
        let mut log = ActionLog::default();
        log.dispatch(ToolbarAction::Summarize, "first");
        log.rewrite("second");
        assert_eq!(
            log.requests(),
            &[
                ActionRequest {
                    action: ToolbarAction::Summarize,
                    text: "first".to_string()
                },
                ActionRequest {
                    action: ToolbarAction::Rewrite,
                    text: "second".to_string()
                },
            ]
        );
    }

    #[test]
    fn preview_flattens_and_truncates() {
        assert_eq!(preview("a\n  b\tc"), "a b c");
        let long = "x".repeat(PREVIEW_CHARS + 10);
        let p = preview(&long);
        assert_eq!(p.chars().count(), PREVIEW_CHARS + 1);
        assert!(p.ends_with('…'));
    }
}
