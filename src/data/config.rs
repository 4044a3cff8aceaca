//! Top-level chart configuration.

use serde::{Deserialize, Serialize};

use super::legend::Legend;
use super::series::Series;
use super::title::Title;
use super::tooltip::Tooltip;
use crate::theme::ThemeInfo;

/// Labels are still pooled for the first N+1 data points of a serie even
/// when its label style is off, so flipping labels on for a reasonably
/// sized serie needs no node creation. Past this index, creation cost for
/// very large series is not worth it.
pub const DEFAULT_LABEL_BUILD_CAP: usize = 100;

/// Misc tuning values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Segment count for circle tessellation.
    pub circle_smoothness: u32,
    /// Highest datum index for which a label node is pooled when the
    /// serie has labels disabled. See [`DEFAULT_LABEL_BUILD_CAP`].
    pub label_build_cap: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            circle_smoothness: 20,
            label_build_cap: DEFAULT_LABEL_BUILD_CAP,
        }
    }
}

/// The single source of truth for a chart instance.
///
/// Mutated by the host/editor between ticks (and by legend interaction
/// during pointer handling); read-only to the detector and builders
/// during a tick. Every piece of derived UI state must be
/// reconstructable from this plus the last snapshot diff.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Chart rect size in pixels, kept in sync with the host rect by the
    /// size check.
    pub width: f32,
    pub height: f32,
    pub theme: ThemeInfo,
    pub title: Title,
    pub legend: Legend,
    pub tooltip: Tooltip,
    pub series: Series,
    pub settings: Settings,
}
