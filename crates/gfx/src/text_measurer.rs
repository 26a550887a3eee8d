use std::cell::RefCell;
use std::collections::HashMap;

use css::{GenericFamily, LineHeight, TextBoxStyle};
use egui::{Color32, Context, FontId};
use layout::TextMeasurer;

/// `egui`-backed adapter for measuring text during layout.
pub struct EguiTextMeasurer {
    ctx: Context,
    space_width_cache: RefCell<HashMap<(u32, bool), f32>>,
}

impl EguiTextMeasurer {
    pub fn new(ctx: &Context) -> Self {
        Self {
            ctx: ctx.clone(),
            space_width_cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    fn space_width(&self, font_id: &FontId, monospace: bool) -> f32 {
        let key = (font_id.size.to_bits(), monospace);
        if let Some(w) = self.space_width_cache.borrow().get(&key).copied() {
            return w;
        }

        // NBSP survives egui's trailing-whitespace trimming.
        let nbsp = "\u{00A0}";
        let w_nbsp = self.width_of(nbsp, font_id);
        let w = if w_nbsp.is_finite() && w_nbsp > 0.0 {
            w_nbsp
        } else {
            let w = (self.width_of(&format!("x{nbsp}x"), font_id) - self.width_of("xx", font_id))
                .max(0.0);
            if w.is_finite() && w > 0.0 {
                w
            } else {
                (font_id.size * 0.33).max(1.0)
            }
        };

        self.space_width_cache.borrow_mut().insert(key, w);
        w
    }

    fn width_of(&self, text: &str, font_id: &FontId) -> f32 {
        self.ctx.fonts(|f| {
            f.layout_no_wrap(text.to_owned(), font_id.clone(), Color32::PLACEHOLDER)
                .rect
                .width()
        })
    }
}

/// The egui font that renders `style`.
pub fn font_id_for(style: &TextBoxStyle) -> FontId {
    let size = style.font_px().max(1.0);
    match style.font_family.generic() {
        GenericFamily::Monospace => FontId::monospace(size),
        GenericFamily::Serif | GenericFamily::SansSerif => FontId::proportional(size),
    }
}

impl TextMeasurer for EguiTextMeasurer {
    fn measure(&self, text: &str, style: &TextBoxStyle) -> f32 {
        let font_id = font_id_for(style);
        let monospace = style.font_family.generic() == GenericFamily::Monospace;

        if text == " " {
            return self.space_width(&font_id, monospace);
        }
        self.width_of(text, &font_id)
    }

    fn line_height(&self, style: &TextBoxStyle) -> f32 {
        match style.line_height {
            LineHeight::Normal => {
                let font_id = font_id_for(style);
                self.ctx.fonts(|f| f.row_height(&font_id))
            }
            _ => style.line_height_px(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css::{FontFamily, Length};

    fn measurer() -> EguiTextMeasurer {
        let ctx = Context::default();
        let _ = ctx.run(Default::default(), |_| {});
        EguiTextMeasurer::new(&ctx)
    }

    fn mono(px: f32) -> TextBoxStyle {
        let mut style = TextBoxStyle::initial();
        style.font_family = FontFamily::new("monospace");
        style.font_size = Length::Px(px);
        style
    }

    #[test]
    fn monospace_width_grows_per_glyph() {
        let m = measurer();
        let style = mono(14.0);
        let one = m.measure("a", &style);
        let four = m.measure("abcd", &style);
        assert!(one > 0.0);
        assert!((four - 4.0 * one).abs() < 0.5, "{four} vs 4 * {one}");
    }

    #[test]
    fn lone_space_has_width() {
        let m = measurer();
        let style = mono(14.0);
        let space = m.measure(" ", &style);
        assert!(space > 0.0);
        assert_eq!(m.measure(" ", &style), space);
    }

    #[test]
    fn explicit_line_height_wins_over_font_metrics() {
        let m = measurer();
        let mut style = mono(14.0);
        style.line_height = LineHeight::Px(30.0);
        assert_eq!(m.line_height(&style), 30.0);

        style.line_height = LineHeight::Normal;
        assert!(m.line_height(&style) > 0.0);
    }
}
