use core_types::ToolbarAction;

/// Receiver of toolbar actions. Each method gets the text that was selected
/// when the user clicked.
pub trait ToolbarActions {
    fn summarize(&mut self, text: &str);
    fn rewrite(&mut self, text: &str);

    fn dispatch(&mut self, action: ToolbarAction, text: &str) {
        match action {
            ToolbarAction::Summarize => self.summarize(text),
            ToolbarAction::Rewrite => self.rewrite(text),
        }
    }
}
