//! Title block and the shared location type.

use egui::{Align, Align2, Pos2, Vec2};
use serde::{Deserialize, Serialize};

/// Where a block (title, legend) sits inside the chart rect.
///
/// `align` picks the corner/edge in chart-local space (`Align::Min` is
/// left/bottom, `Align::Max` right/top); `offset` is an additional pixel
/// offset from that point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub align: Align2,
    pub offset: Vec2,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            align: Align2([Align::Center, Align::Max]),
            offset: Vec2::ZERO,
        }
    }
}

impl Location {
    /// Pixel position of the aligned point for a chart of the given size.
    pub fn position(&self, width: f32, height: f32) -> Pos2 {
        Pos2::new(
            self.align.x().to_factor() * width + self.offset.x,
            self.align.y().to_factor() * height + self.offset.y,
        )
    }

    /// Layout anchors for a node pinned at this location (anchor min/max
    /// collapse onto the aligned point).
    pub fn anchor(&self) -> Vec2 {
        Vec2::new(self.align.x().to_factor(), self.align.y().to_factor())
    }

    /// Pivot of a node pinned at this location; same point as the anchor.
    pub fn pivot(&self) -> Vec2 {
        self.anchor()
    }
}

/// Chart title block: main text, optional subtitle, typography and
/// placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub show: bool,
    pub text: String,
    pub sub_text: String,
    pub text_font_size: f32,
    pub sub_text_font_size: f32,
    /// Vertical gap between title and subtitle.
    pub item_gap: f32,
    pub location: Location,
}

impl Default for Title {
    fn default() -> Self {
        Self {
            show: true,
            text: "Chart Title".to_string(),
            sub_text: String::new(),
            text_font_size: 16.0,
            sub_text_font_size: 14.0,
            item_gap: 8.0,
            location: Location::default(),
        }
    }
}

/// Turn the literal two-character sequence `\n` in authored text into a
/// real newline before handing it to a text node.
pub(crate) fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}
