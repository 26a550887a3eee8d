use egui::Context;

/// An egui application the platform shell can host.
pub trait UiApp {
    /// Window title.
    fn title(&self) -> &str;

    /// Called once, before the first frame.
    fn on_start(&mut self, _ctx: &Context) {}

    /// Build one frame.
    fn ui(&mut self, ctx: &Context);
}
