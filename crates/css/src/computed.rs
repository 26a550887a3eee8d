use crate::error::ParseError;
use crate::values::{
    BoxSizing, FontFamily, FontStyle, FontVariant, FontWeight, Length, LineHeight, OverflowWrap,
    TextAlign, TextTransform, WhiteSpace, WordBreak, parse_box_shorthand, parse_box_sizing,
    parse_font_family, parse_font_style, parse_font_variant, parse_font_weight, parse_length,
    parse_line_height, parse_overflow_wrap, parse_px, parse_spacing, parse_tab_size,
    parse_text_align, parse_text_transform, parse_white_space, parse_word_break, px_declaration,
};

/// Padding and border widths of a text control, in CSS px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxMetrics {
    pub padding_top: f32,
    pub padding_right: f32,
    pub padding_bottom: f32,
    pub padding_left: f32,

    pub border_top: f32,
    pub border_right: f32,
    pub border_bottom: f32,
    pub border_left: f32,
}

impl BoxMetrics {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn horizontal_padding(&self) -> f32 {
        self.padding_left + self.padding_right
    }

    pub fn vertical_padding(&self) -> f32 {
        self.padding_top + self.padding_bottom
    }

    pub fn horizontal_border(&self) -> f32 {
        self.border_left + self.border_right
    }

    pub fn vertical_border(&self) -> f32 {
        self.border_top + self.border_bottom
    }
}

/// Snapshot of every computed property that affects glyph layout inside a
/// text control.
///
/// Captured once per measurement and compared by value: two snapshots that
/// are equal lay text out identically.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBoxStyle {
    /// Inherited.
    pub font_family: FontFamily,
    /// Inherited. Initial: 16px.
    pub font_size: Length,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub font_variant: FontVariant,
    pub line_height: LineHeight,
    pub letter_spacing: f32,
    pub word_spacing: f32,
    pub text_transform: TextTransform,
    pub text_indent: f32,
    pub text_align: TextAlign,
    pub white_space: WhiteSpace,
    pub overflow_wrap: OverflowWrap,
    pub word_break: WordBreak,
    /// Tab stop distance as a count of space advances.
    pub tab_size: u32,

    /// Not inherited.
    pub box_metrics: BoxMetrics,
    pub box_sizing: BoxSizing,
}

impl TextBoxStyle {
    pub fn initial() -> Self {
        TextBoxStyle {
            font_family: FontFamily::default(),
            font_size: Length::Px(16.0),
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
            font_variant: FontVariant::Normal,
            line_height: LineHeight::Normal,
            letter_spacing: 0.0,
            word_spacing: 0.0,
            text_transform: TextTransform::None,
            text_indent: 0.0,
            text_align: TextAlign::Start,
            white_space: WhiteSpace::Normal,
            overflow_wrap: OverflowWrap::Normal,
            word_break: WordBreak::Normal,
            tab_size: 8,
            box_metrics: BoxMetrics::zero(),
            box_sizing: BoxSizing::ContentBox,
        }
    }

    /// The UA defaults of a `<textarea>`: pre-wrapped, break-word, 2px padding
    /// and a 1px border.
    pub fn textarea_defaults() -> Self {
        let mut style = Self::initial();
        style.font_family = FontFamily::new("monospace");
        style.font_size = Length::Px(13.0);
        style.white_space = WhiteSpace::PreWrap;
        style.overflow_wrap = OverflowWrap::BreakWord;
        style.box_metrics = BoxMetrics {
            padding_top: 2.0,
            padding_right: 2.0,
            padding_bottom: 2.0,
            padding_left: 2.0,
            border_top: 1.0,
            border_right: 1.0,
            border_bottom: 1.0,
            border_left: 1.0,
        };
        style
    }

    pub fn font_px(&self) -> f32 {
        self.font_size.px()
    }

    /// Used line height in CSS px.
    pub fn line_height_px(&self) -> f32 {
        self.line_height.resolve(self.font_px()).max(0.0)
    }

    /// Apply one computed declaration. Property names are expected lowercase.
    pub fn apply_declaration(&mut self, name: &str, value: &str) -> Result<(), ParseError> {
        let invalid = || ParseError::InvalidValue {
            property: name.to_string(),
            value: value.to_string(),
        };

        match name {
            "font-family" => self.font_family = parse_font_family(value).ok_or_else(invalid)?,
            "font-size" => self.font_size = parse_length(value).ok_or_else(invalid)?,
            "font-weight" => self.font_weight = parse_font_weight(value).ok_or_else(invalid)?,
            "font-style" => self.font_style = parse_font_style(value).ok_or_else(invalid)?,
            "font-variant" => self.font_variant = parse_font_variant(value).ok_or_else(invalid)?,
            "line-height" => self.line_height = parse_line_height(value).ok_or_else(invalid)?,
            "letter-spacing" => self.letter_spacing = parse_spacing(value).ok_or_else(invalid)?,
            "word-spacing" => self.word_spacing = parse_spacing(value).ok_or_else(invalid)?,
            "text-transform" => {
                self.text_transform = parse_text_transform(value).ok_or_else(invalid)?
            }
            "text-indent" => self.text_indent = parse_px(value).ok_or_else(invalid)?,
            "text-align" => self.text_align = parse_text_align(value).ok_or_else(invalid)?,
            "white-space" => self.white_space = parse_white_space(value).ok_or_else(invalid)?,
            "overflow-wrap" | "word-wrap" => {
                self.overflow_wrap = parse_overflow_wrap(value).ok_or_else(invalid)?
            }
            "word-break" => self.word_break = parse_word_break(value).ok_or_else(invalid)?,
            "tab-size" => self.tab_size = parse_tab_size(value).ok_or_else(invalid)?,
            "box-sizing" => self.box_sizing = parse_box_sizing(value).ok_or_else(invalid)?,

            // --- Padding (non-inherited, px only) ---
            "padding" => {
                let (t, r, b, l) = parse_box_shorthand(value)
                    .filter(|&(t, r, b, l)| t >= 0.0 && r >= 0.0 && b >= 0.0 && l >= 0.0)
                    .ok_or_else(invalid)?;
                let bm = &mut self.box_metrics;
                (bm.padding_top, bm.padding_right, bm.padding_bottom, bm.padding_left) =
                    (t, r, b, l);
            }
            "padding-top" => self.box_metrics.padding_top = non_negative_px(value, invalid)?,
            "padding-right" => self.box_metrics.padding_right = non_negative_px(value, invalid)?,
            "padding-bottom" => {
                self.box_metrics.padding_bottom = non_negative_px(value, invalid)?
            }
            "padding-left" => self.box_metrics.padding_left = non_negative_px(value, invalid)?,

            // --- Border widths (non-inherited, px only) ---
            "border-width" => {
                let (t, r, b, l) = parse_box_shorthand(value)
                    .filter(|&(t, r, b, l)| t >= 0.0 && r >= 0.0 && b >= 0.0 && l >= 0.0)
                    .ok_or_else(invalid)?;
                let bm = &mut self.box_metrics;
                (bm.border_top, bm.border_right, bm.border_bottom, bm.border_left) = (t, r, b, l);
            }
            "border-top-width" => self.box_metrics.border_top = non_negative_px(value, invalid)?,
            "border-right-width" => {
                self.box_metrics.border_right = non_negative_px(value, invalid)?
            }
            "border-bottom-width" => {
                self.box_metrics.border_bottom = non_negative_px(value, invalid)?
            }
            "border-left-width" => self.box_metrics.border_left = non_negative_px(value, invalid)?,

            _ => return Err(ParseError::UnsupportedProperty(name.to_string())),
        }
        Ok(())
    }

    /// Serialize back to longhand declarations, in the order of
    /// [`MIRRORED_PROPERTIES`].
    pub fn to_declarations(&self) -> Vec<(&'static str, String)> {
        let bm = &self.box_metrics;
        let values = [
            self.font_family.as_str().to_string(),
            self.font_size.to_string(),
            self.font_weight.to_string(),
            self.font_style.to_string(),
            self.font_variant.to_string(),
            self.line_height.to_string(),
            px_declaration(self.letter_spacing),
            px_declaration(self.word_spacing),
            self.text_transform.to_string(),
            px_declaration(self.text_indent),
            self.text_align.to_string(),
            self.white_space.to_string(),
            self.overflow_wrap.to_string(),
            self.overflow_wrap.to_string(),
            self.word_break.to_string(),
            self.tab_size.to_string(),
            px_declaration(bm.padding_top),
            px_declaration(bm.padding_right),
            px_declaration(bm.padding_bottom),
            px_declaration(bm.padding_left),
            px_declaration(bm.border_top),
            px_declaration(bm.border_right),
            px_declaration(bm.border_bottom),
            px_declaration(bm.border_left),
            self.box_sizing.to_string(),
        ];
        MIRRORED_PROPERTIES.iter().copied().zip(values).collect()
    }
}

impl Default for TextBoxStyle {
    fn default() -> Self {
        Self::initial()
    }
}

fn non_negative_px(value: &str, invalid: impl Fn() -> ParseError) -> Result<f32, ParseError> {
    parse_px(value).filter(|px| *px >= 0.0).ok_or_else(invalid)
}

/// Every property copied from a live control onto its measurement replica.
pub const MIRRORED_PROPERTIES: [&str; 25] = [
    "font-family",
    "font-size",
    "font-weight",
    "font-style",
    "font-variant",
    "line-height",
    "letter-spacing",
    "word-spacing",
    "text-transform",
    "text-indent",
    "text-align",
    "white-space",
    "word-wrap",
    "overflow-wrap",
    "word-break",
    "tab-size",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "border-top-width",
    "border-right-width",
    "border-bottom-width",
    "border-left-width",
    "box-sizing",
];

/// Compute the snapshot for a control, given:
/// - its specified declarations (already cascaded)
/// - an optional parent snapshot to inherit typography from.
///
/// Invalid or unsupported declarations are skipped, like a browser drops
/// declarations it cannot parse.
pub fn compute_text_box_style(
    specified: &[(String, String)],
    parent: Option<&TextBoxStyle>,
) -> TextBoxStyle {
    // 1. Start from initial values
    let mut result = TextBoxStyle::initial();

    // 2. Apply inheritance: everything but the box model inherits
    if let Some(p) = parent {
        result = TextBoxStyle {
            box_metrics: BoxMetrics::zero(),
            box_sizing: BoxSizing::ContentBox,
            ..p.clone()
        };
    }

    // 3. Apply specified declarations (override inherited/initial)
    for (name, value) in specified {
        let name = name.trim().to_ascii_lowercase();
        if let Err(err) = result.apply_declaration(&name, value) {
            log::debug!(target: "css.computed", "skipping declaration: {err}");
        }
    }

    result
}
