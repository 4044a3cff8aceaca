//! Last-observed configuration snapshot.

use egui::Vec2;

use crate::data::legend::Legend;
use crate::data::title::Title;
use crate::theme::Theme;

/// The last-observed copy of every watched configuration field.
///
/// Owned by the chart but deliberately passed `&mut` into
/// [`crate::detect::detect`] each tick, so the detector itself holds no
/// hidden state. Invariant: after a tick, every field here equals the
/// live value, or the matching change bit was raised this tick.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigSnapshot {
    pub width: f32,
    pub height: f32,
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
    pub theme: Theme,
    pub title: Title,
    pub legend: Legend,
    pub serie_count: usize,
    pub serie_names: Vec<String>,
    /// Per-serie data counts for the deferred label-rebuild check; only
    /// advanced while the serie's labels are shown.
    pub data_counts: Vec<usize>,
    /// The one-shot entrance animation kick has been issued.
    pub animation_started: bool,
}

impl Default for ConfigSnapshot {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            anchor_min: Vec2::ZERO,
            anchor_max: Vec2::ZERO,
            theme: Theme::Default,
            title: Title::default(),
            legend: Legend::default(),
            serie_count: 0,
            serie_names: Vec::new(),
            data_counts: Vec::new(),
            animation_started: false,
        }
    }
}

impl ConfigSnapshot {
    /// A chart that has never observed a real size. The first non-zero
    /// size is treated as activation (full re-init), not as a resize.
    pub fn is_unsized(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}
