use crate::TextMeasurer;
use crate::error::MeasureError;
use crate::lines::{layout_lines, line_index_for_offset, x_for_offset};
use crate::mirror::Mirror;

/// The text split around a caret: everything before it, a zero-width
/// marker, and everything after it.
///
/// The marker carries no glyphs and offers no break opportunity, so the
/// three runs wrap exactly like the unsplit text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaretRuns<'a> {
    pub before: &'a str,
    pub after: &'a str,
}

impl<'a> CaretRuns<'a> {
    pub fn split(text: &'a str, offset: usize) -> Result<Self, MeasureError> {
        if offset > text.len() || !text.is_char_boundary(offset) {
            return Err(MeasureError::OffsetOutOfRange {
                offset,
                len: text.len(),
            });
        }
        let (before, after) = text.split_at(offset);
        Ok(Self { before, after })
    }

    /// Byte offset of the marker in the source text.
    pub fn marker_offset(&self) -> usize {
        self.before.len()
    }
}

/// Where a caret sits, relative to the mirror's content box origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaretCoordinate {
    pub x: f32,
    /// Top of the caret's line.
    pub y: f32,
    pub line_height: f32,
    pub line_index: usize,
}

/// Which line a caret on a soft-wrap boundary belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaretAffinity {
    /// Start of the following line, where typing would insert.
    #[default]
    Downstream,
    /// End of the preceding line, where a selection ending there is drawn.
    Upstream,
}

/// Locate the caret at byte `offset` of the mirrored text.
///
/// A caret on a soft-wrap boundary is reported at the start of the
/// following line.
pub fn locate_caret(
    mirror: &Mirror,
    measurer: &dyn TextMeasurer,
    offset: usize,
) -> Result<CaretCoordinate, MeasureError> {
    locate_caret_with(mirror, measurer, offset, CaretAffinity::Downstream)
}

/// [`locate_caret`] with an explicit choice of line for offsets that start
/// a line.
pub fn locate_caret_with(
    mirror: &Mirror,
    measurer: &dyn TextMeasurer,
    offset: usize,
    affinity: CaretAffinity,
) -> Result<CaretCoordinate, MeasureError> {
    let text = mirror.text();
    let runs = CaretRuns::split(text, offset)?;
    let style = mirror.style();
    let marker = runs.marker_offset();

    let lines = layout_lines(measurer, style, text, mirror.content_size().width);
    let mut line_index = line_index_for_offset(&lines, marker);
    if affinity == CaretAffinity::Upstream
        && line_index > 0
        && lines.get(line_index).is_some_and(|l| l.source_range.0 == marker)
    {
        line_index -= 1;
    }
    let Some(line) = lines.get(line_index) else {
        return Err(MeasureError::Detached);
    };
    let x = x_for_offset(line, text, marker, measurer, style);

    log::trace!(
        target: "layout.caret",
        "caret offset={} line={} x={} y={} {:?}",
        offset,
        line_index,
        x,
        line.y,
        affinity
    );

    Ok(CaretCoordinate {
        x,
        y: line.y,
        line_height: line.height,
        line_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_both_sides() {
        let runs = CaretRuns::split("Hello world", 5).expect("split");
        assert_eq!(runs.before, "Hello");
        assert_eq!(runs.after, " world");
        assert_eq!(runs.marker_offset(), 5);
    }

    #[test]
    fn split_at_ends() {
        let runs = CaretRuns::split("abc", 0).expect("split");
        assert_eq!((runs.before, runs.after), ("", "abc"));
        let runs = CaretRuns::split("abc", 3).expect("split");
        assert_eq!((runs.before, runs.after), ("abc", ""));
        let runs = CaretRuns::split("", 0).expect("split");
        assert_eq!((runs.before, runs.after), ("", ""));
    }

    #[test]
    fn split_rejects_bad_offsets() {
        assert_eq!(
            CaretRuns::split("abc", 4),
            Err(MeasureError::OffsetOutOfRange { offset: 4, len: 3 })
        );
        assert_eq!(
            CaretRuns::split("é", 1),
            Err(MeasureError::OffsetOutOfRange { offset: 1, len: 2 })
        );
    }
}
