use thiserror::Error;

/// A host reported selection offsets that do not describe a range of its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("selection {start}..{end} exceeds text length {len}")]
    OutOfRange { start: usize, end: usize, len: usize },

    #[error("selection offset {offset} is not on a char boundary")]
    NotCharBoundary { offset: usize },
}
