//! Series, data points and per-datum label styling.

use egui::{Color32, Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::host::NodeId;

/// Chart type of a serie. Only `Pie` changes core behavior (legend
/// entries come from datum names, label colors allocate per datum);
/// geometry construction for all types is out of scope here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SerieType {
    #[default]
    Line,
    Bar,
    Pie,
    Scatter,
}

/// Marker symbol drawn for a data point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolType {
    None,
    #[default]
    Circle,
    EmptyCircle,
    Rect,
    Triangle,
    Diamond,
}

/// Where a pie label sits relative to its slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelPosition {
    #[default]
    Outside,
    Inside,
    Center,
}

/// Per-serie label styling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SerieLabel {
    pub show: bool,
    pub position: LabelPosition,
    /// Explicit text color override; fully transparent means "computed
    /// from the theme".
    pub color: Color32,
    pub font_size: f32,
    /// Background size; a zero dimension means auto-size to the text.
    pub background_width: f32,
    pub background_height: f32,
    pub background_color: Color32,
    pub border: bool,
    pub border_width: f32,
    pub border_color: Color32,
    /// Rotation of the label box in degrees.
    pub rotate: f32,
    pub offset: Vec2,
    pub padding_left_right: f32,
    pub padding_top_bottom: f32,
}

impl Default for SerieLabel {
    fn default() -> Self {
        Self {
            show: false,
            position: LabelPosition::Outside,
            color: Color32::TRANSPARENT,
            font_size: 14.0,
            background_width: 0.0,
            background_height: 0.0,
            background_color: Color32::TRANSPARENT,
            border: false,
            border_width: 1.0,
            border_color: Color32::GRAY,
            rotate: 0.0,
            offset: Vec2::ZERO,
            padding_left_right: 4.0,
            padding_top_bottom: 2.0,
        }
    }
}

impl SerieLabel {
    /// True when no explicit text color is set.
    pub fn color_is_clear(&self) -> bool {
        self.color == Color32::TRANSPARENT
    }
}

/// Runtime binding between a datum and its pooled label node. Rebuilt
/// from scratch on every label pass, never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelBinding {
    pub node: NodeId,
    pub icon: NodeId,
    pub auto_size: bool,
}

/// One data point of a serie.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SerieData {
    pub name: String,
    pub value: f32,
    pub show: bool,
    pub highlighted: bool,
    #[serde(skip)]
    pub label: Option<LabelBinding>,
    /// Where the label anchor ended up after the last body draw.
    #[serde(skip)]
    pub label_position: Pos2,
}

impl SerieData {
    pub fn new(name: impl Into<String>, value: f32) -> Self {
        Self {
            name: name.into(),
            value,
            show: true,
            highlighted: false,
            label: None,
            label_position: Pos2::ZERO,
        }
    }
}

/// An ordered list of data points plus per-serie flags and styling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Serie {
    pub name: String,
    pub serie_type: SerieType,
    pub show: bool,
    pub highlighted: bool,
    pub symbol: SymbolType,
    pub symbol_size: f32,
    pub symbol_thickness: f32,
    pub label: SerieLabel,
    pub data: Vec<SerieData>,
    /// Entrance animation is running (the tween itself is an external
    /// service; the core only starts/stops it).
    #[serde(skip)]
    pub animation_playing: bool,
}

impl Serie {
    pub fn new(name: impl Into<String>, serie_type: SerieType) -> Self {
        Self {
            name: name.into(),
            serie_type,
            show: true,
            highlighted: false,
            symbol: SymbolType::default(),
            symbol_size: 4.0,
            symbol_thickness: 1.0,
            label: SerieLabel::default(),
            data: Vec::new(),
            animation_playing: false,
        }
    }

    pub fn with_data(mut self, data: impl IntoIterator<Item = SerieData>) -> Self {
        self.data = data.into_iter().collect();
        self
    }
}

/// The ordered serie collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub list: Vec<Serie>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Serie> {
        self.list.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Serie> {
        self.list.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&Serie> {
        self.list.get(index)
    }

    /// Legend names in series order. Pie series contribute one entry per
    /// datum; every other type contributes its serie name.
    pub fn name_list(&self) -> Vec<String> {
        let mut names = Vec::new();
        for serie in &self.list {
            if serie.serie_type == SerieType::Pie {
                names.extend(serie.data.iter().map(|d| d.name.clone()));
            } else {
                names.push(serie.name.clone());
            }
        }
        names
    }

    /// Whether a name may appear as a legend entry. Placeholder series
    /// without a name are excluded.
    pub fn is_legal_legend_name(&self, name: &str) -> bool {
        !name.is_empty()
    }

    /// Whether the serie (or pie datum) behind a legend name is shown.
    pub fn is_active(&self, name: &str) -> bool {
        for serie in &self.list {
            if serie.name == name {
                return serie.show;
            }
            if serie.serie_type == SerieType::Pie {
                if let Some(datum) = serie.data.iter().find(|d| d.name == name) {
                    return datum.show;
                }
            }
        }
        false
    }

    /// Set the visibility behind a legend name: the serie with that name,
    /// and same-named data points inside every other serie. Highlight is
    /// cleared alongside. Returns whether anything with that name is now
    /// shown.
    pub fn set_active(&mut self, name: &str, show: bool) -> bool {
        let mut any_shown = false;
        for serie in &mut self.list {
            if serie.name == name {
                serie.show = show;
                serie.highlighted = false;
                any_shown |= serie.show;
            } else {
                for datum in &mut serie.data {
                    if datum.name == name {
                        datum.show = show;
                        datum.highlighted = false;
                        any_shown |= datum.show;
                    }
                }
            }
        }
        any_shown
    }

    /// Set the highlight flag behind a legend name, same matching rule as
    /// [`Series::set_active`] but without touching visibility.
    pub fn set_highlighted(&mut self, name: &str, highlighted: bool) {
        for serie in &mut self.list {
            if serie.name == name {
                serie.highlighted = highlighted;
            } else {
                for datum in &mut serie.data {
                    if datum.name == name {
                        datum.highlighted = highlighted;
                    }
                }
            }
        }
    }

    /// Largest data value among shown series/data, 0 when nothing is
    /// visible. Drives axis scaling in the chart-type layer.
    pub fn visible_max(&self) -> f32 {
        let mut max = 0.0_f32;
        for serie in self.list.iter().filter(|s| s.show) {
            for datum in serie.data.iter().filter(|d| d.show) {
                max = max.max(datum.value);
            }
        }
        max
    }

    pub fn animation_start(&mut self) {
        for serie in &mut self.list {
            serie.animation_playing = true;
        }
    }

    pub fn animation_stop(&mut self) {
        for serie in &mut self.list {
            serie.animation_playing = false;
        }
    }
}
