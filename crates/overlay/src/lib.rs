//! Floating selection toolbar for a plain-text input.
//!
//! [`SelectionToolbar`] listens to host events, measures the selection with
//! a [`layout::Mirror`] on the next frame, and places the toolbar with
//! [`place_toolbar`]. Actions are handed to a [`ToolbarActions`] receiver.

mod actions;
pub mod config;
mod controller;
mod event;
pub mod position;

pub use actions::ToolbarActions;
pub use config::{
    ConfigError, DEFAULT_CONFIG_FILE, PlacementConfig, SelectionConfig, ToolbarConfig,
    ToolbarSizeConfig,
};
pub use controller::SelectionToolbar;
pub use event::OverlayEvent;
pub use position::{Placement, PlacementRequest, Viewport, place_toolbar};
