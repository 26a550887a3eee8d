use thiserror::Error;

/// Why a position could not be measured. None of these reach the user: the
/// toolbar is simply not shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeasureError {
    #[error("host exposes no computed style")]
    Unsupported,

    #[error("host is not laid out")]
    Detached,

    #[error("content box is empty ({width}x{height})")]
    ZeroSize { width: i32, height: i32 },

    #[error("offset {offset} is outside the text (len {len}) or not on a char boundary")]
    OffsetOutOfRange { offset: usize, len: usize },
}
