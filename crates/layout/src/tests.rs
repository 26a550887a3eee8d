use crate::{
    CaretAffinity, CaretCoordinate, MeasureError, Mirror, TextHost, TextMeasurer, locate_caret,
    locate_caret_with,
};
use core_types::{Point, Rect, Size};
use css::{OverflowWrap, TextAlign, TextBoxStyle, TextTransform, WhiteSpace, WordBreak};

const GLYPH: f32 = 10.0;
const LINE: f32 = 20.0;

struct TestMeasurer;

impl TextMeasurer for TestMeasurer {
    fn measure(&self, text: &str, _style: &TextBoxStyle) -> f32 {
        text.chars().count() as f32 * GLYPH
    }

    fn line_height(&self, _style: &TextBoxStyle) -> f32 {
        LINE
    }
}

struct FakeHost {
    text: String,
    revision: u64,
    style: Option<TextBoxStyle>,
    client: Option<Size>,
}

impl FakeHost {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            revision: 1,
            style: Some(TextBoxStyle::initial()),
            client: Some(Size::new(200.0, 100.0)),
        }
    }
}

impl TextHost for FakeHost {
    fn text(&self) -> &str {
        &self.text
    }

    fn content_revision(&self) -> u64 {
        self.revision
    }

    fn selection(&self) -> Option<(usize, usize)> {
        None
    }

    fn has_focus(&self) -> bool {
        true
    }

    fn scroll_offset(&self) -> Point {
        Point::ZERO
    }

    fn computed_style(&self) -> Option<TextBoxStyle> {
        self.style.clone()
    }

    fn client_size(&self) -> Option<Size> {
        self.client
    }

    fn bounding_rect(&self) -> Option<Rect> {
        self.client.map(|s| Rect::new(0.0, 0.0, s.width, s.height))
    }
}

fn assert_approx_eq(got: f32, want: f32) {
    let eps = 0.01;
    assert!(
        (got - want).abs() <= eps,
        "expected {want:.4}, got {got:.4}"
    );
}

fn mirror_with(text: &str, width: f32, style: TextBoxStyle) -> Mirror {
    Mirror::from_parts(text.to_string(), 0, style, Size::new(width, 100.0)).expect("mirror")
}

fn caret(mirror: &Mirror, offset: usize) -> CaretCoordinate {
    locate_caret(mirror, &TestMeasurer, offset).expect("caret")
}

fn pre_wrap() -> TextBoxStyle {
    TextBoxStyle {
        white_space: WhiteSpace::PreWrap,
        ..TextBoxStyle::initial()
    }
}

#[test]
fn monospace_caret_x_is_offset_times_glyph_width() {
    let text = "Hello world";
    let m = mirror_with(text, 500.0, TextBoxStyle::initial());
    for i in 0..=text.len() {
        let c = caret(&m, i);
        assert_approx_eq(c.x, i as f32 * GLYPH);
        assert_approx_eq(c.y, 0.0);
        assert_eq!(c.line_index, 0);
        assert_approx_eq(c.line_height, LINE);
    }
}

#[test]
fn wrapped_word_moves_to_next_line() {
    let m = mirror_with("aaaa bbbb", 60.0, TextBoxStyle::initial());

    let before_space = caret(&m, 4);
    assert_eq!(before_space.line_index, 0);
    assert_approx_eq(before_space.x, 40.0);

    let wrapped = caret(&m, 5);
    assert_eq!(wrapped.line_index, 1);
    assert_approx_eq(wrapped.x, 0.0);
    assert_approx_eq(wrapped.y, LINE);

    let end = caret(&m, 9);
    assert_eq!(end.line_index, 1);
    assert_approx_eq(end.x, 40.0);
}

#[test]
fn nowrap_keeps_one_line() {
    let style = TextBoxStyle {
        white_space: WhiteSpace::Nowrap,
        ..TextBoxStyle::initial()
    };
    let m = mirror_with("aaaa bbbb", 30.0, style);
    let c = caret(&m, 9);
    assert_eq!(c.line_index, 0);
    assert_approx_eq(c.x, 90.0);
}

#[test]
fn soft_wrap_boundary_belongs_to_following_line() {
    let style = TextBoxStyle {
        overflow_wrap: OverflowWrap::BreakWord,
        ..pre_wrap()
    };
    let m = mirror_with("abcdefgh", 50.0, style);

    let last_on_first = caret(&m, 4);
    assert_eq!(last_on_first.line_index, 0);
    assert_approx_eq(last_on_first.x, 40.0);

    let boundary = caret(&m, 5);
    assert_eq!(boundary.line_index, 1);
    assert_approx_eq(boundary.x, 0.0);
    assert_approx_eq(boundary.y, LINE);
}

#[test]
fn break_all_splits_a_word_after_existing_content() {
    let style = TextBoxStyle {
        word_break: WordBreak::BreakAll,
        ..TextBoxStyle::initial()
    };
    let m = mirror_with("ab cdefgh", 50.0, style);

    // "ab cd" fills the first line
    let inside = caret(&m, 4);
    assert_eq!(inside.line_index, 0);
    assert_approx_eq(inside.x, 40.0);

    let cut = caret(&m, 5);
    assert_eq!(cut.line_index, 1);
    assert_approx_eq(cut.x, 0.0);
    assert_approx_eq(cut.y, LINE);

    let end = caret(&m, 9);
    assert_eq!(end.line_index, 1);
    assert_approx_eq(end.x, 40.0);
}

#[test]
fn break_all_moves_the_word_when_not_one_glyph_fits() {
    let style = TextBoxStyle {
        word_break: WordBreak::BreakAll,
        ..TextBoxStyle::initial()
    };
    // after "abcd " only 5px remain
    let m = mirror_with("abcd efgh", 55.0, style);

    assert_eq!(caret(&m, 4).line_index, 0);

    let moved = caret(&m, 5);
    assert_eq!(moved.line_index, 1);
    assert_approx_eq(moved.x, 0.0);

    let end = caret(&m, 9);
    assert_eq!(end.line_index, 1);
    assert_approx_eq(end.x, 40.0);
}

#[test]
fn upstream_affinity_keeps_a_wrap_boundary_on_the_ending_line() {
    let m = mirror_with("aaaa bbbb", 60.0, TextBoxStyle::initial());

    let down = locate_caret_with(&m, &TestMeasurer, 5, CaretAffinity::Downstream).expect("caret");
    assert_eq!(down, caret(&m, 5));
    assert_eq!(down.line_index, 1);

    let up = locate_caret_with(&m, &TestMeasurer, 5, CaretAffinity::Upstream).expect("caret");
    assert_eq!(up.line_index, 0);
    assert_approx_eq(up.x, 50.0);
    assert_approx_eq(up.y, 0.0);

    // not a line start: both agree
    let mid = locate_caret_with(&m, &TestMeasurer, 7, CaretAffinity::Upstream).expect("caret");
    assert_eq!(mid, caret(&m, 7));

    // offset 0 has no previous line
    let first = locate_caret_with(&m, &TestMeasurer, 0, CaretAffinity::Upstream).expect("caret");
    assert_eq!(first.line_index, 0);
}

#[test]
fn upstream_affinity_after_a_hard_break() {
    let m = mirror_with("ab\ncd", 500.0, pre_wrap());
    let up = locate_caret_with(&m, &TestMeasurer, 3, CaretAffinity::Upstream).expect("caret");
    assert_eq!(up.line_index, 0);
    assert_approx_eq(up.x, 20.0);
}

#[test]
fn uppercase_expansion_shifts_following_carets() {
    let style = TextBoxStyle {
        text_transform: TextTransform::Uppercase,
        ..TextBoxStyle::initial()
    };
    // renders as "STRASSE X"
    let text = "straße x";
    let m = mirror_with(text, 500.0, style);
    let word_end = "straße".len();

    assert_approx_eq(caret(&m, word_end).x, 70.0);
    assert_approx_eq(caret(&m, word_end + 1).x, 80.0);
    assert_approx_eq(caret(&m, text.len()).x, 90.0);
    // inside the word, after "straß"
    assert_approx_eq(caret(&m, "straß".len()).x, 60.0);
}

#[test]
fn hard_breaks_start_new_lines() {
    let m = mirror_with("ab\ncd", 500.0, pre_wrap());

    let before_break = caret(&m, 2);
    assert_eq!(before_break.line_index, 0);
    assert_approx_eq(before_break.x, 20.0);

    let after_break = caret(&m, 3);
    assert_eq!(after_break.line_index, 1);
    assert_approx_eq(after_break.x, 0.0);
    assert_approx_eq(after_break.y, LINE);
}

#[test]
fn trailing_newline_gets_its_own_line() {
    let m = mirror_with("ab\n", 500.0, pre_wrap());
    let c = caret(&m, 3);
    assert_eq!(c.line_index, 1);
    assert_approx_eq(c.y, LINE);
    assert_approx_eq(c.x, 0.0);
}

#[test]
fn newline_is_a_space_when_white_space_collapses() {
    let m = mirror_with("ab\ncd", 500.0, TextBoxStyle::initial());
    let c = caret(&m, 3);
    assert_eq!(c.line_index, 0);
    assert_approx_eq(c.x, 30.0);
}

#[test]
fn leading_whitespace_is_preserved_in_pre_wrap() {
    let m = mirror_with("   x", 500.0, pre_wrap());
    assert_approx_eq(caret(&m, 3).x, 30.0);
    assert_approx_eq(caret(&m, 4).x, 40.0);
}

#[test]
fn leading_whitespace_collapses_in_normal() {
    let m = mirror_with("   x", 500.0, TextBoxStyle::initial());
    assert_approx_eq(caret(&m, 3).x, 0.0);
    assert_approx_eq(caret(&m, 4).x, 10.0);
}

#[test]
fn tabs_advance_to_tab_stops() {
    let style = TextBoxStyle {
        white_space: WhiteSpace::Pre,
        tab_size: 4,
        ..TextBoxStyle::initial()
    };
    let m = mirror_with("\tx", 500.0, style);
    assert_approx_eq(caret(&m, 1).x, 40.0);
}

#[test]
fn text_indent_applies_to_first_line_only() {
    let style = TextBoxStyle {
        text_indent: 15.0,
        ..pre_wrap()
    };
    let m = mirror_with("ab\ncd", 500.0, style);
    assert_approx_eq(caret(&m, 0).x, 15.0);
    assert_approx_eq(caret(&m, 2).x, 35.0);
    assert_approx_eq(caret(&m, 3).x, 0.0);
}

#[test]
fn alignment_shifts_the_line() {
    let centered = TextBoxStyle {
        text_align: TextAlign::Center,
        ..TextBoxStyle::initial()
    };
    let m = mirror_with("abcd", 100.0, centered);
    assert_approx_eq(caret(&m, 0).x, 30.0);
    assert_approx_eq(caret(&m, 4).x, 70.0);

    let right = TextBoxStyle {
        text_align: TextAlign::Right,
        ..TextBoxStyle::initial()
    };
    let m = mirror_with("abcd", 100.0, right);
    assert_approx_eq(caret(&m, 0).x, 60.0);

    let justify = TextBoxStyle {
        text_align: TextAlign::Justify,
        ..TextBoxStyle::initial()
    };
    let m = mirror_with("abcd", 100.0, justify);
    assert_approx_eq(caret(&m, 0).x, 0.0);
}

#[test]
fn letter_and_word_spacing_widen_runs() {
    let style = TextBoxStyle {
        letter_spacing: 2.0,
        ..TextBoxStyle::initial()
    };
    let m = mirror_with("abc", 500.0, style);
    assert_approx_eq(caret(&m, 2).x, 24.0);

    let style = TextBoxStyle {
        word_spacing: 5.0,
        ..TextBoxStyle::initial()
    };
    let m = mirror_with("a b", 500.0, style);
    assert_approx_eq(caret(&m, 2).x, 25.0);
}

#[test]
fn empty_text_has_a_caret_at_origin() {
    let m = mirror_with("", 100.0, TextBoxStyle::initial());
    let c = caret(&m, 0);
    assert_eq!(c.line_index, 0);
    assert_approx_eq(c.x, 0.0);
    assert_approx_eq(c.y, 0.0);
}

#[test]
fn offsets_outside_text_are_rejected() {
    let m = mirror_with("abc", 100.0, TextBoxStyle::initial());
    assert_eq!(
        locate_caret(&m, &TestMeasurer, 4),
        Err(MeasureError::OffsetOutOfRange { offset: 4, len: 3 })
    );
}

#[test]
fn caret_is_deterministic() {
    let m = mirror_with("the quick brown fox jumps", 80.0, TextBoxStyle::initial());
    for i in 0..=m.text().len() {
        assert_eq!(caret(&m, i), caret(&m, i));
    }
}

#[test]
fn build_reports_host_failures() {
    let mut host = FakeHost::new("abc");
    host.style = None;
    assert_eq!(Mirror::build(&host), Err(MeasureError::Unsupported));

    let mut host = FakeHost::new("abc");
    host.client = None;
    assert_eq!(Mirror::build(&host), Err(MeasureError::Detached));

    let mut host = FakeHost::new("abc");
    host.client = Some(Size::new(0.0, 0.0));
    assert_eq!(
        Mirror::build(&host),
        Err(MeasureError::ZeroSize {
            width: 0,
            height: 0
        })
    );
}

#[test]
fn mirror_goes_stale_when_host_changes() {
    let mut host = FakeHost::new("abc");
    let m = Mirror::build(&host).expect("mirror");
    assert!(!m.is_stale(&host));

    host.revision += 1;
    assert!(m.is_stale(&host));
    host.revision -= 1;

    host.client = Some(Size::new(180.0, 100.0));
    assert!(m.is_stale(&host));
    host.client = Some(Size::new(200.0, 100.0));
    assert!(!m.is_stale(&host));

    host.style = Some(TextBoxStyle {
        letter_spacing: 1.0,
        ..TextBoxStyle::initial()
    });
    assert!(m.is_stale(&host));
}
