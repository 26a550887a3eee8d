//! Process-wide style registration.
//!
//! Style sheets are applied to every theme of a context once per process,
//! however many toolbars or windows ask for them.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

use egui::{Context, Style, vec2};

/// A named set of tweaks to egui's style.
#[derive(Clone, Copy, Debug)]
pub struct StyleSheet {
    pub name: &'static str,
    pub apply: fn(&mut Style),
}

/// Spacing and rounding of the floating selection toolbar.
pub const TOOLBAR_STYLE: StyleSheet = StyleSheet {
    name: "scrivener.toolbar",
    apply: toolbar_style,
};

fn toolbar_style(style: &mut Style) {
    style.spacing.button_padding = vec2(10.0, 4.0);
    style.spacing.item_spacing.x = 4.0;
    style.visuals.popup_shadow.blur = 8;
}

fn registered() -> &'static Mutex<HashSet<&'static str>> {
    static REGISTERED: OnceLock<Mutex<HashSet<&'static str>>> = OnceLock::new();
    REGISTERED.get_or_init(|| Mutex::new(HashSet::new()))
}

/// Apply every sheet not registered before. Returns `true` if at least
/// one sheet was applied.
pub fn register_style_sheets(ctx: &Context, sheets: &[StyleSheet]) -> bool {
    let mut names = match registered().lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    let mut applied = false;
    for sheet in sheets {
        if !names.insert(sheet.name) {
            log::trace!(target: "gfx.styles", "style sheet {} already registered", sheet.name);
            continue;
        }
        ctx.all_styles_mut(|style| (sheet.apply)(style));
        log::debug!(target: "gfx.styles", "registered style sheet {}", sheet.name);
        applied = true;
    }
    applied
}

pub fn is_registered(name: &str) -> bool {
    match registered().lock() {
        Ok(names) => names.contains(name),
        Err(poisoned) => poisoned.into_inner().contains(name),
    }
}
