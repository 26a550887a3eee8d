use css::{OverflowWrap, TextAlign, TextBoxStyle, WordBreak};

use crate::TextMeasurer;
use crate::breaker::break_word_prefix_end;
use crate::metrics::{prefix_width, run_width, space_advance, tab_advance};

const EPS: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentKind {
    Text,
    Space,
    Tab,
    /// A preserved newline. Zero width, ends its line.
    Break,
}

/// A run of source text placed on a line. `x` is relative to the content
/// box's left edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineFragment {
    pub kind: FragmentKind,
    pub source_range: (usize, usize),
    pub x: f32,
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineBox {
    /// Top of the line relative to the content box.
    pub y: f32,
    pub height: f32,
    /// Where the pen starts: indent plus alignment offset.
    pub start_x: f32,
    /// Source bytes owned by this line, including hanging spaces and the
    /// newline that ends it.
    pub source_range: (usize, usize),
    pub fragments: Vec<LineFragment>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token {
    Word(usize, usize),
    Space(usize, usize),
    Tab(usize, usize),
    Newline(usize, usize),
}

fn tokenize(value: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    let mut it = value.char_indices().peekable();
    while let Some((idx, ch)) = it.next() {
        let token = match ch {
            '\n' => Token::Newline(idx, idx + 1),
            '\r' => {
                let mut end = idx + 1;
                if let Some((next_idx, '\n')) = it.peek().copied() {
                    let _ = it.next();
                    end = next_idx + 1;
                }
                Token::Newline(idx, end)
            }
            ' ' => Token::Space(idx, idx + 1),
            '\t' => Token::Tab(idx, idx + 1),
            _ => {
                word_start.get_or_insert(idx);
                continue;
            }
        };
        if let Some(start) = word_start.take() {
            tokens.push(Token::Word(start, idx));
        }
        tokens.push(token);
    }

    if let Some(start) = word_start {
        tokens.push(Token::Word(start, value.len()));
    }

    tokens
}

struct LineBuilder {
    start: usize,
    start_x: f32,
    x: f32,
    fragments: Vec<LineFragment>,
    has_content: bool,
    last_was_space: bool,
}

impl LineBuilder {
    fn new(start: usize, start_x: f32) -> Self {
        Self {
            start,
            start_x,
            x: start_x,
            fragments: Vec::new(),
            has_content: false,
            last_was_space: false,
        }
    }

    fn push(&mut self, kind: FragmentKind, source_range: (usize, usize), width: f32) {
        self.fragments.push(LineFragment {
            kind,
            source_range,
            x: self.x,
            width,
        });
        self.x += width;
        match kind {
            FragmentKind::Text => {
                self.has_content = true;
                self.last_was_space = false;
            }
            FragmentKind::Space | FragmentKind::Tab => self.last_was_space = true,
            FragmentKind::Break => {}
        }
    }
}

struct Flow<'a> {
    measurer: &'a dyn TextMeasurer,
    style: &'a TextBoxStyle,
    text: &'a str,
    available_width: f32,
    line_height: f32,
    wraps: bool,
    break_words: bool,
    break_all: bool,
    lines: Vec<LineBox>,
    line: LineBuilder,
}

impl Flow<'_> {
    fn finish_line(&mut self, next_start: usize) {
        let line = std::mem::replace(&mut self.line, LineBuilder::new(next_start, 0.0));

        // Trailing spaces hang past the edge and do not take part in alignment.
        let content_right = line
            .fragments
            .iter()
            .rev()
            .find(|f| f.kind == FragmentKind::Text)
            .map(|f| f.x + f.width)
            .unwrap_or(line.start_x);

        let slack = if self.available_width.is_finite() {
            (self.available_width - content_right).max(0.0)
        } else {
            0.0
        };
        let shift = match self.style.text_align {
            TextAlign::Center => slack / 2.0,
            TextAlign::Right | TextAlign::End => slack,
            TextAlign::Start | TextAlign::Left | TextAlign::Justify => 0.0,
        };

        let mut fragments = line.fragments;
        for frag in &mut fragments {
            frag.x += shift;
        }

        let y = self.lines.len() as f32 * self.line_height;
        self.lines.push(LineBox {
            y,
            height: self.line_height,
            start_x: line.start_x + shift,
            source_range: (line.start, next_start),
            fragments,
        });
    }

    fn push_space(&mut self, range: (usize, usize)) {
        let collapsed = self.style.white_space.collapses_spaces()
            && (self.line.last_was_space || !self.line.has_content);
        let width = if collapsed {
            0.0
        } else {
            space_advance(self.measurer, self.style)
        };
        self.line.push(FragmentKind::Space, range, width);
    }

    fn push_tab(&mut self, range: (usize, usize)) {
        if self.style.white_space.collapses_spaces() {
            self.push_space(range);
            return;
        }
        let width = tab_advance(self.measurer, self.style, self.line.x);
        self.line.push(FragmentKind::Tab, range, width);
    }

    fn push_word(&mut self, start: usize, end: usize) {
        let text = self.text;
        let mut start = start;
        loop {
            let piece = &text[start..end];
            let w = run_width(self.measurer, self.style, piece);

            if !self.wraps || self.line.x + w <= self.available_width + EPS {
                self.line.push(FragmentKind::Text, (start, end), w);
                return;
            }

            if self.line.has_content && !self.break_all {
                self.finish_line(start);
                continue;
            }

            if !self.break_words {
                // Unbreakable run on an empty line: let it overflow.
                self.line.push(FragmentKind::Text, (start, end), w);
                return;
            }

            let room = self.available_width - self.line.x;
            let cut = break_word_prefix_end(self.measurer, self.style, piece, room);
            let cut_w = run_width(self.measurer, self.style, &piece[..cut]);
            if cut_w > room + EPS && self.line.has_content {
                self.finish_line(start);
                continue;
            }
            if cut >= piece.len() {
                self.line.push(FragmentKind::Text, (start, end), w);
                return;
            }

            self.line.push(FragmentKind::Text, (start, start + cut), cut_w);
            self.finish_line(start + cut);
            start += cut;
        }
    }
}

/// Lay out the text of a control the way its `white-space`,
/// `overflow-wrap` and `word-break` settings dictate.
///
/// This preserves (according to `white-space`):
/// - explicit `\n` line breaks (as hard breaks)
/// - sequences of spaces and tabs
/// - leading spaces on a line
///
/// Always returns at least one line, so offsets in empty text and after a
/// trailing newline have a line to sit on.
pub fn layout_lines(
    measurer: &dyn TextMeasurer,
    style: &TextBoxStyle,
    text: &str,
    available_width: f32,
) -> Vec<LineBox> {
    let available_width = if available_width.is_nan() {
        0.0
    } else {
        available_width.max(0.0)
    };
    let white_space = style.white_space;

    let mut flow = Flow {
        measurer,
        style,
        text,
        available_width,
        line_height: measurer.line_height(style).max(0.0),
        wraps: white_space.wraps() && available_width.is_finite(),
        break_words: style.overflow_wrap != OverflowWrap::Normal
            || matches!(style.word_break, WordBreak::BreakAll | WordBreak::BreakWord),
        break_all: style.word_break == WordBreak::BreakAll,
        lines: Vec::new(),
        line: LineBuilder::new(0, style.text_indent),
    };

    for token in tokenize(text) {
        match token {
            Token::Newline(start, end) if white_space.preserves_newlines() => {
                flow.line.push(FragmentKind::Break, (start, end), 0.0);
                flow.finish_line(end);
            }
            Token::Newline(start, end) | Token::Space(start, end) => {
                flow.push_space((start, end))
            }
            Token::Tab(start, end) => flow.push_tab((start, end)),
            Token::Word(start, end) => flow.push_word(start, end),
        }
    }
    flow.finish_line(text.len());

    flow.lines
}

/// Index of the line that displays a caret at `offset`.
///
/// An offset on a soft-wrap boundary belongs to the line that starts there.
pub fn line_index_for_offset(lines: &[LineBox], offset: usize) -> usize {
    lines
        .partition_point(|l| l.source_range.0 <= offset)
        .saturating_sub(1)
}

/// X of the glyph boundary at `offset` within `line`, relative to the
/// content box.
pub fn x_for_offset(
    line: &LineBox,
    text: &str,
    offset: usize,
    measurer: &dyn TextMeasurer,
    style: &TextBoxStyle,
) -> f32 {
    let mut x = line.start_x;
    for frag in &line.fragments {
        let (start, end) = frag.source_range;
        if offset <= start {
            return frag.x;
        }
        if offset < end {
            return match frag.kind {
                FragmentKind::Text => {
                    let chars = text.get(start..offset).map_or(0, |s| s.chars().count());
                    frag.x + prefix_width(measurer, style, &text[start..end], chars)
                }
                FragmentKind::Space | FragmentKind::Tab | FragmentKind::Break => frag.x,
            };
        }
        x = frag.x + frag.width;
    }
    x
}
