//! Tooltip configuration and per-tick runtime state.

use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::host::NodeId;

/// Tooltip block configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub show: bool,
    pub font_size: f32,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            show: true,
            font_size: 14.0,
        }
    }
}

/// Runtime tooltip state, owned by the chart and rewritten once per tick
/// by the tooltip check step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    /// The tooltip shell has been built at least once.
    pub inited: bool,
    /// The tooltip is currently visible.
    pub active: bool,
    /// Pointer position in chart-local coordinates, valid while active.
    pub pointer_pos: Pos2,
    /// Per-serie matched data index; -1 means "no match". Reset before
    /// every hit-test pass.
    pub data_index: Vec<isize>,
    /// Rendered content text, filled by the chart-type hit-test.
    pub content: String,
    /// Hidden root node and its content child.
    pub node: Option<NodeId>,
    pub content_node: Option<NodeId>,
}

impl TooltipState {
    /// Reset every per-serie match index to "no match", growing or
    /// shrinking the list to the current serie count.
    pub fn reset_indices(&mut self, serie_count: usize) {
        self.data_index.clear();
        self.data_index.resize(serie_count, -1);
    }

    /// Drop the matched values and content (used when force-hiding).
    pub fn clear_value(&mut self) {
        for index in &mut self.data_index {
            *index = -1;
        }
        self.content.clear();
    }
}
