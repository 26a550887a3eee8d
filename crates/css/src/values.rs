use std::borrow::Cow;
use std::fmt;

/// CSS Length value, currently only supports `px`,
/// but keep this extensible for `em`, `%`, etc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f32),
}

impl Length {
    pub fn px(self) -> f32 {
        match self {
            Length::Px(px) => px,
        }
    }
}

/// Parse a `font-size` value into a Length.
/// Only strictly positive `NNpx` values are accepted.
pub fn parse_length(value: &str) -> Option<Length> {
    let px = parse_px(value)?;
    (px > 0.0).then_some(Length::Px(px))
}

/// Parse a signed `NNpx` value (or a bare `0`) into CSS px.
pub fn parse_px(value: &str) -> Option<f32> {
    let v = value.trim();
    if v == "0" {
        return Some(0.0);
    }
    let num = v.strip_suffix("px")?.trim().parse::<f32>().ok()?;
    num.is_finite().then_some(num)
}

/// Parse a spacing value (`letter-spacing`, `word-spacing`); `normal` is zero.
pub fn parse_spacing(value: &str) -> Option<f32> {
    if value.trim().eq_ignore_ascii_case("normal") {
        return Some(0.0);
    }
    parse_px(value)
}

fn format_px(px: f32) -> String {
    if px == 0.0 {
        "0".to_string()
    } else {
        format!("{px}px")
    }
}

/// The resolved `font-family` list, kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontFamily(String);

/// Generic family a font list falls back to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenericFamily {
    Serif,
    SansSerif,
    Monospace,
}

impl FontFamily {
    pub fn new(list: impl Into<String>) -> Self {
        Self(list.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify the list by its first recognizable entry; unknown lists are sans-serif.
    pub fn generic(&self) -> GenericFamily {
        for name in self.0.split(',') {
            let name = name.trim().trim_matches(|c| c == '"' || c == '\'');
            let lower = name.to_ascii_lowercase();
            match lower.as_str() {
                "monospace" | "ui-monospace" => return GenericFamily::Monospace,
                "serif" | "ui-serif" => return GenericFamily::Serif,
                "sans-serif" | "ui-sans-serif" | "system-ui" => return GenericFamily::SansSerif,
                _ => {}
            }
            if lower.contains("mono") || lower.contains("courier") || lower.contains("consol") {
                return GenericFamily::Monospace;
            }
        }
        GenericFamily::SansSerif
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        Self("sans-serif".to_string())
    }
}

pub fn parse_font_family(value: &str) -> Option<FontFamily> {
    let v = value.trim();
    (!v.is_empty()).then(|| FontFamily::new(v))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

pub fn parse_font_style(value: &str) -> Option<FontStyle> {
    match value.trim().to_ascii_lowercase().as_str() {
        "normal" => Some(FontStyle::Normal),
        "italic" => Some(FontStyle::Italic),
        v if v.starts_with("oblique") => Some(FontStyle::Oblique),
        _ => None,
    }
}

/// Numeric font weight, 1..=1000.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

pub fn parse_font_weight(value: &str) -> Option<FontWeight> {
    match value.trim().to_ascii_lowercase().as_str() {
        "normal" => Some(FontWeight::NORMAL),
        "bold" => Some(FontWeight::BOLD),
        v => {
            let n = v.parse::<f32>().ok()?;
            (1.0..=1000.0)
                .contains(&n)
                .then_some(FontWeight(n.round() as u16))
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontVariant {
    #[default]
    Normal,
    SmallCaps,
}

pub fn parse_font_variant(value: &str) -> Option<FontVariant> {
    match value.trim().to_ascii_lowercase().as_str() {
        "normal" => Some(FontVariant::Normal),
        "small-caps" => Some(FontVariant::SmallCaps),
        _ => None,
    }
}

/// CSS `line-height`. Unitless numbers and percentages scale with the font size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LineHeight {
    #[default]
    Normal,
    Number(f32),
    Px(f32),
}

impl LineHeight {
    /// `normal` is approximated as 1.2 × font size, like most UA fonts.
    pub fn resolve(self, font_px: f32) -> f32 {
        match self {
            LineHeight::Normal => font_px * 1.2,
            LineHeight::Number(n) => font_px * n,
            LineHeight::Px(px) => px,
        }
    }
}

pub fn parse_line_height(value: &str) -> Option<LineHeight> {
    let v = value.trim();
    if v.eq_ignore_ascii_case("normal") {
        return Some(LineHeight::Normal);
    }
    if let Some(pct) = v.strip_suffix('%') {
        let n = pct.trim().parse::<f32>().ok()?;
        return (n.is_finite() && n >= 0.0).then_some(LineHeight::Number(n / 100.0));
    }
    if v.ends_with("px") {
        let px = parse_px(v)?;
        return (px >= 0.0).then_some(LineHeight::Px(px));
    }
    let n = v.parse::<f32>().ok()?;
    (n.is_finite() && n >= 0.0).then_some(LineHeight::Number(n))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

impl TextTransform {
    /// Apply the transform for measurement. Source offsets are never
    /// remapped, so callers measure transformed slices of source ranges.
    pub fn apply<'a>(self, text: &'a str) -> Cow<'a, str> {
        match self {
            TextTransform::None => Cow::Borrowed(text),
            TextTransform::Uppercase => Cow::Owned(text.to_uppercase()),
            TextTransform::Lowercase => Cow::Owned(text.to_lowercase()),
            TextTransform::Capitalize => {
                let mut out = String::with_capacity(text.len());
                let mut at_word_start = true;
                for ch in text.chars() {
                    if at_word_start && ch.is_alphabetic() {
                        out.extend(ch.to_uppercase());
                    } else {
                        out.push(ch);
                    }
                    at_word_start = ch.is_whitespace();
                }
                Cow::Owned(out)
            }
        }
    }
}

pub fn parse_text_transform(value: &str) -> Option<TextTransform> {
    match value.trim().to_ascii_lowercase().as_str() {
        "none" => Some(TextTransform::None),
        "uppercase" => Some(TextTransform::Uppercase),
        "lowercase" => Some(TextTransform::Lowercase),
        "capitalize" => Some(TextTransform::Capitalize),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Left,
    Center,
    Right,
    End,
    Justify,
}

pub fn parse_text_align(value: &str) -> Option<TextAlign> {
    match value.trim().to_ascii_lowercase().as_str() {
        "start" => Some(TextAlign::Start),
        "left" => Some(TextAlign::Left),
        "center" => Some(TextAlign::Center),
        "right" => Some(TextAlign::Right),
        "end" => Some(TextAlign::End),
        "justify" => Some(TextAlign::Justify),
        _ => None,
    }
}

/// CSS `white-space`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WhiteSpace {
    #[default]
    Normal,
    Nowrap,
    Pre,
    PreWrap,
    PreLine,
}

impl WhiteSpace {
    /// Runs of spaces and tabs collapse to a single space.
    pub fn collapses_spaces(self) -> bool {
        matches!(
            self,
            WhiteSpace::Normal | WhiteSpace::Nowrap | WhiteSpace::PreLine
        )
    }

    /// Newlines force a line break instead of acting as a space.
    pub fn preserves_newlines(self) -> bool {
        matches!(
            self,
            WhiteSpace::Pre | WhiteSpace::PreWrap | WhiteSpace::PreLine
        )
    }

    /// Lines may soft-wrap at the content edge.
    pub fn wraps(self) -> bool {
        matches!(
            self,
            WhiteSpace::Normal | WhiteSpace::PreWrap | WhiteSpace::PreLine
        )
    }
}

pub fn parse_white_space(value: &str) -> Option<WhiteSpace> {
    match value.trim().to_ascii_lowercase().as_str() {
        "normal" => Some(WhiteSpace::Normal),
        "nowrap" => Some(WhiteSpace::Nowrap),
        "pre" => Some(WhiteSpace::Pre),
        "pre-wrap" => Some(WhiteSpace::PreWrap),
        "pre-line" => Some(WhiteSpace::PreLine),
        _ => None,
    }
}

/// CSS `overflow-wrap` (legacy alias `word-wrap`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowWrap {
    #[default]
    Normal,
    BreakWord,
    Anywhere,
}

pub fn parse_overflow_wrap(value: &str) -> Option<OverflowWrap> {
    match value.trim().to_ascii_lowercase().as_str() {
        "normal" => Some(OverflowWrap::Normal),
        "break-word" => Some(OverflowWrap::BreakWord),
        "anywhere" => Some(OverflowWrap::Anywhere),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WordBreak {
    #[default]
    Normal,
    BreakAll,
    KeepAll,
    BreakWord,
}

pub fn parse_word_break(value: &str) -> Option<WordBreak> {
    match value.trim().to_ascii_lowercase().as_str() {
        "normal" => Some(WordBreak::Normal),
        "break-all" => Some(WordBreak::BreakAll),
        "keep-all" => Some(WordBreak::KeepAll),
        "break-word" => Some(WordBreak::BreakWord),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxSizing {
    #[default]
    ContentBox,
    BorderBox,
}

pub fn parse_box_sizing(value: &str) -> Option<BoxSizing> {
    match value.trim().to_ascii_lowercase().as_str() {
        "content-box" => Some(BoxSizing::ContentBox),
        "border-box" => Some(BoxSizing::BorderBox),
        _ => None,
    }
}

/// Parse `tab-size` as a count of space advances. Lengths are not supported.
pub fn parse_tab_size(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

/// Parse a 1–4 value box shorthand (`padding`, `border-width`) into
/// `(top, right, bottom, left)`.
pub fn parse_box_shorthand(value: &str) -> Option<(f32, f32, f32, f32)> {
    let parts: Vec<f32> = value
        .split_whitespace()
        .map(parse_px)
        .collect::<Option<Vec<_>>>()?;
    match parts.as_slice() {
        [a] => Some((*a, *a, *a, *a)),
        [v, h] => Some((*v, *h, *v, *h)),
        [t, h, b] => Some((*t, *h, *b, *h)),
        [t, r, b, l] => Some((*t, *r, *b, *l)),
        _ => None,
    }
}

macro_rules! keyword_display {
    ($ty:ident { $($variant:ident => $kw:literal),+ $(,)? }) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(match self {
                    $(Self::$variant => $kw),+
                })
            }
        }
    };
}

keyword_display!(FontStyle { Normal => "normal", Italic => "italic", Oblique => "oblique" });
keyword_display!(FontVariant { Normal => "normal", SmallCaps => "small-caps" });
keyword_display!(TextTransform {
    None => "none",
    Uppercase => "uppercase",
    Lowercase => "lowercase",
    Capitalize => "capitalize",
});
keyword_display!(TextAlign {
    Start => "start",
    Left => "left",
    Center => "center",
    Right => "right",
    End => "end",
    Justify => "justify",
});
keyword_display!(WhiteSpace {
    Normal => "normal",
    Nowrap => "nowrap",
    Pre => "pre",
    PreWrap => "pre-wrap",
    PreLine => "pre-line",
});
keyword_display!(OverflowWrap { Normal => "normal", BreakWord => "break-word", Anywhere => "anywhere" });
keyword_display!(WordBreak {
    Normal => "normal",
    BreakAll => "break-all",
    KeepAll => "keep-all",
    BreakWord => "break-word",
});
keyword_display!(BoxSizing { ContentBox => "content-box", BorderBox => "border-box" });

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_px(self.px()))
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LineHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineHeight::Normal => f.write_str("normal"),
            LineHeight::Number(n) => write!(f, "{n}"),
            LineHeight::Px(px) => f.write_str(&format_px(*px)),
        }
    }
}

pub(crate) fn px_declaration(px: f32) -> String {
    format_px(px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_values() {
        assert_eq!(parse_px("12px"), Some(12.0));
        assert_eq!(parse_px(" -1.5px "), Some(-1.5));
        assert_eq!(parse_px("0"), Some(0.0));
        assert_eq!(parse_px("1em"), None);
        assert_eq!(parse_length("0px"), None);
        assert_eq!(parse_length("14px"), Some(Length::Px(14.0)));
    }

    #[test]
    fn line_height_forms() {
        assert_eq!(parse_line_height("1.5"), Some(LineHeight::Number(1.5)));
        assert_eq!(parse_line_height("150%"), Some(LineHeight::Number(1.5)));
        assert_eq!(parse_line_height("21px"), Some(LineHeight::Px(21.0)));
        assert_eq!(parse_line_height("normal"), Some(LineHeight::Normal));
        assert_eq!(LineHeight::Number(1.5).resolve(14.0), 21.0);
        assert!((LineHeight::Normal.resolve(10.0) - 12.0).abs() < 1e-4);
    }

    #[test]
    fn font_weight_keywords_and_numbers() {
        assert_eq!(parse_font_weight("bold"), Some(FontWeight::BOLD));
        assert_eq!(parse_font_weight("600"), Some(FontWeight(600)));
        assert_eq!(parse_font_weight("0"), None);
    }

    #[test]
    fn generic_family_detection() {
        assert_eq!(
            FontFamily::new("\"JetBrains Mono\", monospace").generic(),
            GenericFamily::Monospace
        );
        assert_eq!(FontFamily::new("Georgia, serif").generic(), GenericFamily::Serif);
        assert_eq!(FontFamily::new("Inter").generic(), GenericFamily::SansSerif);
    }

    #[test]
    fn white_space_modes() {
        assert!(WhiteSpace::PreWrap.wraps());
        assert!(WhiteSpace::PreWrap.preserves_newlines());
        assert!(!WhiteSpace::PreWrap.collapses_spaces());
        assert!(!WhiteSpace::Pre.wraps());
        assert!(WhiteSpace::PreLine.collapses_spaces());
        assert!(!WhiteSpace::Normal.preserves_newlines());
    }

    #[test]
    fn capitalize_keeps_char_count() {
        let t = TextTransform::Capitalize.apply("hello  world");
        assert_eq!(t, "Hello  World");
        assert_eq!(TextTransform::None.apply("abc"), "abc");
    }

    #[test]
    fn box_shorthand_expands() {
        assert_eq!(parse_box_shorthand("4px"), Some((4.0, 4.0, 4.0, 4.0)));
        assert_eq!(parse_box_shorthand("2px 6px"), Some((2.0, 6.0, 2.0, 6.0)));
        assert_eq!(parse_box_shorthand("1px 2px 3px"), Some((1.0, 2.0, 3.0, 2.0)));
        assert_eq!(parse_box_shorthand("1px 2px 3px 4px 5px"), None);
    }

    #[test]
    fn keywords_display_as_css() {
        assert_eq!(WhiteSpace::PreWrap.to_string(), "pre-wrap");
        assert_eq!(Length::Px(14.0).to_string(), "14px");
        assert_eq!(LineHeight::Px(0.0).to_string(), "0");
    }
}
