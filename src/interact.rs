//! Legend interaction state machine.
//!
//! Pointer events on legend buttons become series visibility/highlight
//! mutations here. The chart routes events in with the side-table built
//! by the legend pass and applies the follow-up work (button recolor,
//! visible-max recompute, refresh request) when a function reports a
//! transition.

use log::debug;

use crate::data::legend::SelectedMode;
use crate::data::series::Series;
use crate::host::NodeId;
use crate::subview::LegendRuntime;

/// Apply a pointer-down on a legend button.
///
/// Returns `true` when any visibility changed. Mode `None` ignores the
/// click; `Multiple` (and `Single` with one entry) toggles the clicked
/// entry; `Single` with several entries is a radio group: the clicked
/// entry becomes active, every other entry inactive.
pub fn pointer_down(
    series: &mut Series,
    mode: SelectedMode,
    runtime: &LegendRuntime,
    clicked: NodeId,
) -> bool {
    let Some(entry) = runtime.lookup(clicked) else {
        // Not a legend button (stale or foreign handle); nothing to do.
        return false;
    };
    match mode {
        SelectedMode::None => false,
        SelectedMode::Multiple => {
            let show = !series.is_active(&entry.name);
            debug!("legend toggle '{}' -> {show}", entry.name);
            series.set_active(&entry.name, show);
            true
        }
        SelectedMode::Single => {
            if runtime.buttons.len() == 1 {
                let show = !series.is_active(&entry.name);
                series.set_active(&entry.name, show);
                true
            } else {
                select_only(series, runtime, entry.index)
            }
        }
    }
}

/// Force radio selection: entry `index` active, every other entry
/// inactive. Also used to seed Single mode right after a legend rebuild
/// so exactly one series starts visible.
pub fn select_only(series: &mut Series, runtime: &LegendRuntime, index: usize) -> bool {
    if runtime.buttons.is_empty() {
        return false;
    }
    debug!("legend single-select index {index}");
    for button in &runtime.buttons {
        series.set_active(&button.name, button.index == index);
    }
    true
}

/// Pointer entered a legend button: highlight the matching series.
pub fn pointer_enter(series: &mut Series, runtime: &LegendRuntime, node: NodeId) -> bool {
    let Some(entry) = runtime.lookup(node) else {
        return false;
    };
    series.set_highlighted(&entry.name, true);
    true
}

/// Pointer left a legend button: clear the highlight.
pub fn pointer_exit(series: &mut Series, runtime: &LegendRuntime, node: NodeId) -> bool {
    let Some(entry) = runtime.lookup(node) else {
        return false;
    };
    series.set_highlighted(&entry.name, false);
    true
}
