//! Legend block configuration.

use serde::{Deserialize, Serialize};

use super::title::Location;

/// How legend clicks drive series visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectedMode {
    /// Every entry toggles independently.
    #[default]
    Multiple,
    /// Radio semantics: exactly one entry active at a time.
    Single,
    /// Clicks are ignored.
    None,
}

/// Legend block: entry filtering, formatting, layout and selection mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub show: bool,
    pub selected_mode: SelectedMode,
    /// Explicit allow-list of series names; empty means "all series".
    /// Names that match no series are silently ignored.
    pub data: Vec<String>,
    /// Display-name template; `{name}` is replaced by the series name.
    /// Empty means the raw name.
    pub formatter: String,
    pub item_width: f32,
    pub item_height: f32,
    pub item_font_size: f32,
    pub location: Location,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            show: true,
            selected_mode: SelectedMode::Multiple,
            data: Vec::new(),
            formatter: String::new(),
            item_width: 60.0,
            item_height: 20.0,
            item_font_size: 14.0,
            location: Location::default(),
        }
    }
}

impl Legend {
    /// Display name for a legend entry after applying the formatter.
    pub fn formatter_content(&self, name: &str) -> String {
        if self.formatter.is_empty() {
            name.to_string()
        } else {
            self.formatter.replace("{name}", name)
        }
    }
}
