use core_types::{Point, Rect, Size};
use css::{BoxSizing, TextBoxStyle};

use crate::error::MeasureError;
use crate::host::TextHost;

/// Declarations that keep a replica out of sight and out of reach while
/// leaving its layout untouched.
pub const REPLICA_SUPPRESSION: [(&str, &str); 8] = [
    ("position", "absolute"),
    ("visibility", "hidden"),
    ("pointer-events", "none"),
    ("overflow", "hidden"),
    ("user-select", "none"),
    ("top", "0"),
    ("left", "-9999px"),
    ("margin", "0"),
];

/// Attributes that hide a replica from focus traversal and assistive tech.
pub const REPLICA_ATTRIBUTES: [(&str, &str); 2] = [("aria-hidden", "true"), ("tabindex", "-1")];

/// Offscreen replica of a text control's box model and typography.
///
/// Valid only for the exact host state it was built from; check
/// [`Mirror::is_stale`] before every measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct Mirror {
    text: String,
    revision: u64,
    style: TextBoxStyle,
    client_size: Size,
    content_size: Size,
}

impl Mirror {
    /// Capture the host's text, computed style and client box.
    pub fn build(host: &dyn TextHost) -> Result<Self, MeasureError> {
        let style = host.computed_style().ok_or(MeasureError::Unsupported)?;
        let client_size = host.client_size().ok_or(MeasureError::Detached)?;
        let mirror = Self::from_parts(
            host.text().to_owned(),
            host.content_revision(),
            style,
            client_size,
        )?;

        log::trace!(
            target: "layout.mirror",
            "built mirror rev={} content={}x{}",
            mirror.revision,
            mirror.content_size.width,
            mirror.content_size.height
        );
        Ok(mirror)
    }

    /// Build from already captured parts.
    pub fn from_parts(
        text: String,
        revision: u64,
        style: TextBoxStyle,
        client_size: Size,
    ) -> Result<Self, MeasureError> {
        let bm = &style.box_metrics;
        let content_size = Size::new(
            client_size.width - bm.horizontal_padding(),
            client_size.height - bm.vertical_padding(),
        );
        if client_size.is_empty() || content_size.is_empty() {
            return Err(MeasureError::ZeroSize {
                width: content_size.width.round() as i32,
                height: content_size.height.round() as i32,
            });
        }

        Ok(Self {
            text,
            revision,
            style,
            client_size,
            content_size,
        })
    }

    /// `true` when the host no longer matches what this replica captured:
    /// its text, its client box or any layout-affecting style changed.
    pub fn is_stale(&self, host: &dyn TextHost) -> bool {
        host.content_revision() != self.revision
            || host.client_size() != Some(self.client_size)
            || host.computed_style().as_ref() != Some(&self.style)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn style(&self) -> &TextBoxStyle {
        &self.style
    }

    /// Content box size: client box minus padding.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn client_size(&self) -> Size {
        self.client_size
    }

    /// Viewport position of the content box origin, given the live
    /// control's border box.
    pub fn content_origin(&self, border_box: Rect) -> Point {
        let bm = &self.style.box_metrics;
        Point::new(
            border_box.x + bm.border_left + bm.padding_left,
            border_box.y + bm.border_top + bm.padding_top,
        )
    }

    /// Declarations a DOM host applies to its replica node: every mirrored
    /// property, an exact size matching the live content box, and the
    /// suppression set.
    pub fn replica_declarations(&self) -> Vec<(String, String)> {
        let bm = &self.style.box_metrics;
        let (width, height) = match self.style.box_sizing {
            BoxSizing::ContentBox => (self.content_size.width, self.content_size.height),
            BoxSizing::BorderBox => (
                self.client_size.width + bm.horizontal_border(),
                self.client_size.height + bm.vertical_border(),
            ),
        };

        let mut out: Vec<(String, String)> = self
            .style
            .to_declarations()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        out.push(("width".to_string(), format!("{width}px")));
        out.push(("height".to_string(), format!("{height}px")));
        out.extend(
            REPLICA_SUPPRESSION
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        );
        out
    }
}
