//! Chart runtime: per-tick lifecycle and mesh population.
//!
//! [`Chart`] owns the configuration, the last-observed snapshot, the
//! tooltip state and the legend side-table. Once per tick the host calls
//! [`Chart::update`], which runs the fixed check order (size → theme →
//! title → legend → pointer → tooltip → deferred refresh → deferred
//! labels → animation start) and triggers the minimal set of rebuilds.
//! When the host re-tessellates, it calls [`Chart::populate_mesh`].

use egui::epaint::Mesh;
use egui::Pos2;
use log::trace;

use crate::data::config::ChartConfig;
use crate::data::legend::SelectedMode;
use crate::data::tooltip::TooltipState;
use crate::detect::{detect, ChangeKind};
use crate::drawing;
use crate::host::{ChartHost, FrameInput, NodeId};
use crate::snapshot::ConfigSnapshot;
use crate::subview::{self, LegendRuntime};
use crate::theme::ThemeInfo;
use crate::interact;

/// Chart-type-specific behavior, supplied by the pie/line/bar layer.
///
/// Composition replaces the overridable-method pattern: the core calls
/// into this trait at its delegation points and needs none of them to be
/// implemented.
pub trait ChartRenderer {
    /// Draw the chart body into the mesh.
    fn draw_body(&mut self, _mesh: &mut Mesh, _config: &ChartConfig) {}
    /// Draw tooltip decoration (crosshair, rulers) into the mesh.
    fn draw_tooltip(&mut self, _mesh: &mut Mesh, _config: &ChartConfig, _state: &TooltipState) {}
    /// Hit-test the pointer against chart geometry and fill the tooltip
    /// match indices/content. Only called with an in-bounds position.
    fn hit_test_tooltip(&mut self, _local: Pos2, _config: &ChartConfig, _state: &mut TooltipState) {
    }
    /// Reposition/retext the label nodes after a mesh pass.
    fn refresh_labels(&mut self, _config: &mut ChartConfig, _host: &mut dyn ChartHost) {}
    /// The max value over visible series moved (axis rescale point).
    fn visible_max_changed(&mut self, _max: f32) {}
}

/// Rebuild masks: which change kinds invalidate which subtree.
const REBUILD_TITLE: ChangeKind = ChangeKind::SIZE
    .union(ChangeKind::THEME)
    .union(ChangeKind::TITLE);
const REBUILD_LEGEND: ChangeKind = ChangeKind::SIZE
    .union(ChangeKind::THEME)
    .union(ChangeKind::LEGEND);
const REBUILD_TOOLTIP: ChangeKind = ChangeKind::SIZE.union(ChangeKind::THEME);
const REBUILD_LABELS: ChangeKind = ChangeKind::SIZE;
const REINIT_LABELS: ChangeKind = ChangeKind::ANCHOR.union(ChangeKind::LABEL_COUNT);

/// The retained chart widget core.
pub struct Chart {
    config: ChartConfig,
    snapshot: ConfigSnapshot,
    tooltip: TooltipState,
    legend: LegendRuntime,
    root: NodeId,
    /// Last sampled pointer position, chart-local; `None` when there was
    /// no surface to sample.
    pointer: Option<Pos2>,
    // Deferred-work flags, consumed by the late tick steps.
    refresh_chart: bool,
    refresh_label: bool,
    reinit_label: bool,
    visible_max: f32,
    observers: Vec<(ChangeKind, Box<dyn FnMut(ChangeKind)>)>,
    renderer: Option<Box<dyn ChartRenderer>>,
    custom_draw: Option<Box<dyn FnMut(&mut Mesh)>>,
}

impl Chart {
    /// Create a chart whose subtrees will live under `root`. Nothing is
    /// built until the first [`Chart::update`] observes a non-zero size.
    pub fn new(config: ChartConfig, root: NodeId) -> Self {
        let visible_max = config.series.visible_max();
        Self {
            config,
            snapshot: ConfigSnapshot::default(),
            tooltip: TooltipState::default(),
            legend: LegendRuntime::default(),
            root,
            pointer: None,
            // One initial mesh population.
            refresh_chart: true,
            refresh_label: false,
            reinit_label: false,
            visible_max,
            observers: Vec::new(),
            renderer: None,
            custom_draw: None,
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Live configuration; mutate freely between ticks, the next
    /// [`Chart::update`] picks the changes up.
    pub fn config_mut(&mut self) -> &mut ChartConfig {
        &mut self.config
    }

    pub fn tooltip_state(&self) -> &TooltipState {
        &self.tooltip
    }

    pub fn tooltip_state_mut(&mut self) -> &mut TooltipState {
        &mut self.tooltip
    }

    pub fn legend_runtime(&self) -> &LegendRuntime {
        &self.legend
    }

    /// Max value over visible series as of the last recompute.
    pub fn visible_max(&self) -> f32 {
        self.visible_max
    }

    pub fn set_renderer(&mut self, renderer: Box<dyn ChartRenderer>) {
        self.renderer = Some(renderer);
    }

    /// Extra drawing between the chart body and the tooltip decoration.
    pub fn set_custom_draw(&mut self, hook: Box<dyn FnMut(&mut Mesh)>) {
        self.custom_draw = Some(hook);
    }

    /// Subscribe to change notifications. The callback fires on every
    /// tick whose raised changes intersect `mask`.
    pub fn on_change(&mut self, mask: ChangeKind, callback: Box<dyn FnMut(ChangeKind)>) {
        self.observers.push((mask, callback));
    }

    /// Schedule a mesh re-population for the next deferred-refresh step.
    pub fn request_refresh(&mut self) {
        self.refresh_chart = true;
    }

    /// Schedule a label refresh for the next deferred-label step.
    pub fn request_label_refresh(&mut self) {
        self.refresh_label = true;
    }

    /// Run one tick. The check order is fixed; later steps depend on
    /// earlier ones having settled state.
    pub fn update(&mut self, input: &FrameInput, host: &mut dyn ChartHost) {
        let changes = detect(&self.config, input, &mut self.snapshot);

        if changes.contains(ChangeKind::SIZE) {
            self.config.width = input.size.x;
            self.config.height = input.size.y;
        }
        if changes.contains(ChangeKind::THEME) {
            let preset = ThemeInfo::preset(self.config.theme.theme);
            self.config.theme.copy_from(preset);
        }

        if changes.intersects(REBUILD_TITLE) {
            subview::build_title(&self.config, self.root, host);
        }
        if changes.intersects(REBUILD_LEGEND) {
            self.legend = subview::build_legend(&self.config, self.root, host);
            if self.config.legend.selected_mode == SelectedMode::Single {
                // Seed radio selection so exactly one series is visible.
                if interact::select_only(&mut self.config.series, &self.legend, 0) {
                    subview::refresh_legend_colors(&self.config, &self.legend, host);
                    self.after_visibility_change();
                }
            }
        }
        if changes.intersects(REBUILD_TOOLTIP) {
            subview::build_tooltip(&self.config, self.root, host, &mut self.tooltip);
        }
        if changes.intersects(REBUILD_LABELS) {
            subview::build_labels(&mut self.config, self.root, host);
        }
        if changes.intersects(REINIT_LABELS) {
            self.reinit_label = true;
        }

        if !changes.is_empty() {
            for (mask, callback) in &mut self.observers {
                if changes.intersects(*mask) {
                    callback(changes);
                }
            }
        }

        // Pointer sample, only when the tooltip can use it.
        if self.config.tooltip.show && self.tooltip.inited {
            self.pointer = input.pointer;
        }

        self.check_tooltip(host);

        if self.refresh_chart {
            self.refresh_chart = false;
            trace!("requesting mesh rebuild");
            host.request_mesh_rebuild();
        }

        if self.reinit_label {
            self.reinit_label = false;
            subview::build_labels(&mut self.config, self.root, host);
        }
        if self.refresh_label {
            self.refresh_label = false;
            if let Some(renderer) = self.renderer.as_deref_mut() {
                renderer.refresh_labels(&mut self.config, host);
            }
        }

        if changes.contains(ChangeKind::ANIMATION) {
            // Restart from a clean slate so a stale running flag cannot
            // leak into the new entrance animation.
            self.config.series.animation_stop();
            self.config.series.animation_start();
        }
    }

    /// Mesh population entry point, invoked by the host's render pass
    /// (not every tick): clear, opaque background, chart body, custom
    /// hook, tooltip decoration. Labels are separate UI nodes and are
    /// marked for an out-of-band refresh next tick instead.
    pub fn populate_mesh(&mut self, mesh: &mut Mesh) {
        mesh.clear();
        self.draw_background(mesh);
        if let Some(renderer) = self.renderer.as_deref_mut() {
            renderer.draw_body(mesh, &self.config);
        }
        if let Some(hook) = self.custom_draw.as_mut() {
            hook(mesh);
        }
        if let Some(renderer) = self.renderer.as_deref_mut() {
            renderer.draw_tooltip(mesh, &self.config, &self.tooltip);
        }
        self.refresh_label = true;
    }

    fn draw_background(&self, mesh: &mut Mesh) {
        let (w, h) = (self.config.width, self.config.height);
        drawing::draw_polygon(
            mesh,
            Pos2::new(0.0, h),
            Pos2::new(w, h),
            Pos2::new(w, 0.0),
            Pos2::new(0.0, 0.0),
            self.config.theme.background_color,
        );
    }

    // ── Pointer event routing ────────────────────────────────────────────

    /// Host entry: pointer went down on a node the core subscribed.
    pub fn pointer_down(&mut self, node: NodeId, host: &mut dyn ChartHost) {
        if interact::pointer_down(
            &mut self.config.series,
            self.config.legend.selected_mode,
            &self.legend,
            node,
        ) {
            subview::refresh_legend_colors(&self.config, &self.legend, host);
            self.after_visibility_change();
        }
    }

    /// Host entry: pointer entered a subscribed node.
    pub fn pointer_enter(&mut self, node: NodeId) {
        if interact::pointer_enter(&mut self.config.series, &self.legend, node) {
            self.request_refresh();
        }
    }

    /// Host entry: pointer left a subscribed node.
    pub fn pointer_exit(&mut self, node: NodeId) {
        if interact::pointer_exit(&mut self.config.series, &self.legend, node) {
            self.request_refresh();
        }
    }

    fn after_visibility_change(&mut self) {
        let max = self.config.series.visible_max();
        if max != self.visible_max {
            self.visible_max = max;
            if let Some(renderer) = self.renderer.as_deref_mut() {
                renderer.visible_max_changed(max);
            }
        }
        self.request_refresh();
    }

    // ── Tooltip evaluation ───────────────────────────────────────────────

    fn check_tooltip(&mut self, host: &mut dyn ChartHost) {
        if !self.config.tooltip.show || !self.tooltip.inited {
            if self.tooltip.active {
                self.tooltip.clear_value();
                self.hide_tooltip(host);
            }
            return;
        }

        self.tooltip.reset_indices(self.config.series.len());

        let Some(local) = self.pointer else {
            self.hide_tooltip(host);
            return;
        };
        if local.x < 0.0
            || local.x > self.config.width
            || local.y < 0.0
            || local.y > self.config.height
        {
            self.hide_tooltip(host);
            return;
        }

        self.tooltip.pointer_pos = local;
        if let Some(renderer) = self.renderer.as_deref_mut() {
            renderer.hit_test_tooltip(local, &self.config, &mut self.tooltip);
        }
    }

    /// Hide the tooltip, refreshing only on the visible→hidden transition
    /// so consecutive out-of-bounds ticks cause a single rebuild.
    fn hide_tooltip(&mut self, host: &mut dyn ChartHost) {
        if !self.tooltip.active {
            return;
        }
        self.tooltip.active = false;
        if let Some(node) = self.tooltip.node {
            host.set_visible(node, false);
        }
        self.request_refresh();
    }
}
