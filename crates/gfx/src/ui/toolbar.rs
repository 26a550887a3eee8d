use core_types::{Size, ToolbarAction};
use egui::{Area, Button, Context, Frame, Id, Order, pos2};
use overlay::Placement;

/// What the user did with the toolbar this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ToolbarIntent {
    pub action: Option<ToolbarAction>,
    pub dismissed: bool,
    /// Rendered size, fed back to the positioner.
    pub size: Size,
    /// The pointer is over the toolbar.
    pub hovered: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct SelectionToolbarConfig {
    pub id_salt: &'static str,
    pub button_height: f32,
    pub show_close: bool,
}

impl Default for SelectionToolbarConfig {
    fn default() -> Self {
        Self {
            id_salt: "scrivener_selection_toolbar",
            button_height: 24.0,
            show_close: true,
        }
    }
}

/// Draw the floating toolbar with its top-left corner at `placement`.
pub fn selection_toolbar(
    ctx: &Context,
    placement: Placement,
    config: SelectionToolbarConfig,
) -> ToolbarIntent {
    let mut intent = ToolbarIntent::default();
    let h = config.button_height.max(1.0);

    let shown = Area::new(Id::new(config.id_salt))
        .order(Order::Foreground)
        .fixed_pos(pos2(placement.x, placement.y))
        .interactable(true)
        .show(ctx, |ui| {
            Frame::popup(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    for action in ToolbarAction::ALL {
                        if ui
                            .add(Button::new(action.label()).min_size([0.0, h].into()))
                            .clicked()
                        {
                            intent.action = Some(action);
                        }
                    }
                    if config.show_close {
                        ui.separator();
                        let close = ui
                            .add(Button::new("✕").frame(false).min_size([h, h].into()))
                            .on_hover_text("Dismiss");
                        if close.clicked() {
                            intent.dismissed = true;
                        }
                    }
                });
            });
        });

    let rect = shown.response.rect;
    intent.size = Size::new(rect.width(), rect.height());
    intent.hovered = shown.response.contains_pointer();
    intent
}
