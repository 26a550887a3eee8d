mod toolbar;

pub use toolbar::{SelectionToolbarConfig, ToolbarIntent, selection_toolbar};
