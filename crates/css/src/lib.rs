//! Computed-style snapshot of a text control: the subset of CSS that
//! decides where glyphs land.

pub mod computed;
pub mod error;
pub mod values;

// Re-exports so other crates can just use `css::...` nicely.
pub use computed::{BoxMetrics, MIRRORED_PROPERTIES, TextBoxStyle, compute_text_box_style};
pub use error::ParseError;
pub use values::{
    BoxSizing, FontFamily, FontStyle, FontVariant, FontWeight, GenericFamily, Length, LineHeight,
    OverflowWrap, TextAlign, TextTransform, WhiteSpace, WordBreak, parse_length, parse_px,
};
