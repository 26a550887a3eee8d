//! # input_core
//!
//! UI-agnostic selection layer for the floating selection toolbar.
//!
//! This crate provides:
//! - [`SelectionRange`]: a validated text selection with start/end byte offsets
//! - [`qualify_selection`]: the rules deciding whether a selection may show the toolbar
//! - [`VisibilityMachine`]: the `Hidden`/`Visible` state machine with blur grace delay
//!
//! ## Design Principles
//!
//! This crate does not depend on any graphics framework, layout or text
//! measurement. Hosts translate their native positions (char indices,
//! UTF-16 units) into byte offsets with the helpers re-exported here.

mod error;
mod selection;
mod text;
mod visibility;

pub use error::SelectionError;
pub use selection::SelectionRange;
pub use visibility::{HideReason, Verdict, Visibility, VisibilityMachine, qualify_selection};

pub use text::{
    byte_offset_for_char, byte_offset_for_utf16, clamp_to_char_boundary, non_whitespace_chars,
};
