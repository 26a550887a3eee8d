//! Text geometry for a live text control.
//!
//! Builds an offscreen [`Mirror`] of a control's box model and typography,
//! lays its text out into lines with a pluggable [`TextMeasurer`], and
//! reports where a caret at any byte offset would be drawn.

mod breaker;
pub mod caret;
mod error;
mod host;
pub mod lines;
mod metrics;
pub mod mirror;
mod text;

pub use caret::{CaretAffinity, CaretCoordinate, CaretRuns, locate_caret, locate_caret_with};
pub use error::MeasureError;
pub use host::TextHost;
pub use lines::{FragmentKind, LineBox, LineFragment, layout_lines};
pub use mirror::{Mirror, REPLICA_ATTRIBUTES, REPLICA_SUPPRESSION};
pub use text::TextMeasurer;

#[cfg(test)]
mod tests;
