use thiserror::Error;

/// Why a declaration could not be applied to a [`TextBoxStyle`](crate::TextBoxStyle).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid value {value:?} for `{property}`")]
    InvalidValue { property: String, value: String },

    #[error("`{0}` does not affect text layout")]
    UnsupportedProperty(String),
}
