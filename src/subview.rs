//! Subview (re)builders.
//!
//! Each builder reconstructs one UI subtree (title block, legend
//! buttons, tooltip shell, pooled per-datum labels) from the current
//! configuration. Builders are idempotent: fixed nodes are get-or-create
//! by name, variable-cardinality children are destroyed before being
//! re-created, so rebuilding twice with unchanged inputs yields an
//! equivalent subtree and no stale handles.

use egui::{Color32, Pos2, Vec2};
use log::debug;

use crate::data::config::ChartConfig;
use crate::data::series::{LabelBinding, LabelPosition, SerieType};
use crate::data::title::unescape_newlines;
use crate::host::{ButtonSpec, ChartHost, NodeId, NodeSpec, PointerEventKind, TextSpec};

const TITLE_NODE: &str = "title";
const LEGEND_NODE: &str = "legend";
const LABEL_NODE: &str = "label";
const TOOLTIP_NODE: &str = "tooltip";

/// One live legend button and its identity.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendButton {
    pub node: NodeId,
    /// Position in the built (filtered, legal) entry list.
    pub index: usize,
    /// The original series name, pre-formatter.
    pub name: String,
}

/// Typed side-table produced by the legend build: button handle →
/// (index, name), plus the unfiltered name list in series order.
/// Pointer events are resolved against this table; no identity is ever
/// encoded in node names.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegendRuntime {
    pub buttons: Vec<LegendButton>,
    pub real_show_names: Vec<String>,
}

impl LegendRuntime {
    /// Resolve a pointer event target to its legend entry.
    pub fn lookup(&self, node: NodeId) -> Option<&LegendButton> {
        self.buttons.iter().find(|b| b.node == node)
    }

    /// Index of a name in the unfiltered series-order list.
    pub fn real_index(&self, name: &str) -> Option<usize> {
        self.real_show_names.iter().position(|n| n == name)
    }
}

/// (Re)build the title block: a positioned container, the title text and
/// the subtitle text below it.
pub fn build_title(config: &ChartConfig, root: NodeId, host: &mut dyn ChartHost) {
    let title = &config.title;
    let location = &title.location;
    let anchor = location.anchor();
    let spec = NodeSpec {
        anchor_min: anchor,
        anchor_max: anchor,
        pivot: location.pivot(),
        size: Vec2::new(config.width, config.height),
    };

    let title_obj = host.create_node(TITLE_NODE, root, &spec);
    host.set_local_position(title_obj, location.position(config.width, config.height));
    host.hide_all(title_obj);

    let text_node = host.create_text_node(
        TITLE_NODE,
        title_obj,
        &TextSpec {
            node: NodeSpec {
                size: Vec2::new(config.width, title.text_font_size),
                ..spec.clone()
            },
            font_size: title.text_font_size,
            color: config.theme.title_text_color,
            align: location.align,
        },
    );
    host.set_visible(text_node, title.show);
    host.set_local_position(text_node, Pos2::ZERO);
    host.set_text(text_node, &unescape_newlines(&title.text));

    let sub_node = host.create_text_node(
        "title_sub",
        title_obj,
        &TextSpec {
            node: NodeSpec {
                size: Vec2::new(config.width, title.sub_text_font_size),
                ..spec
            },
            font_size: title.sub_text_font_size,
            color: config.theme.title_sub_text_color,
            align: location.align,
        },
    );
    host.set_visible(sub_node, title.show && !title.sub_text.is_empty());
    host.set_local_position(
        sub_node,
        Pos2::new(0.0, -(title.text_font_size + title.item_gap)),
    );
    host.set_text(sub_node, &unescape_newlines(&title.sub_text));
}

/// (Re)build the legend buttons and return the side-table describing
/// them. Previous buttons are always fully torn down first.
pub fn build_legend(config: &ChartConfig, root: NodeId, host: &mut dyn ChartHost) -> LegendRuntime {
    let legend = &config.legend;
    let location = &legend.location;
    let anchor = location.anchor();

    let legend_obj = host.create_node(
        LEGEND_NODE,
        root,
        &NodeSpec {
            anchor_min: anchor,
            anchor_max: anchor,
            pivot: location.pivot(),
            size: Vec2::new(config.width, config.height),
        },
    );
    host.set_local_position(legend_obj, location.position(config.width, config.height));

    // Entry candidates: all series names in series order, filtered down
    // to the allow-list when one is set and the legend is shown.
    let real_show_names = config.series.name_list();
    let entries: Vec<&String> = if legend.show && !legend.data.is_empty() {
        real_show_names
            .iter()
            .filter(|name| legend.data.contains(name))
            .collect()
    } else {
        real_show_names.iter().collect()
    };
    let total_legal = entries
        .iter()
        .filter(|name| config.series.is_legal_legend_name(name))
        .count();

    host.destroy_children(legend_obj);
    let mut runtime = LegendRuntime {
        buttons: Vec::new(),
        real_show_names: real_show_names.clone(),
    };
    if !legend.show {
        return runtime;
    }

    let mut slot = 0;
    for name in entries {
        if !config.series.is_legal_legend_name(name) {
            continue;
        }
        let display = legend.formatter_content(name);
        let real_index = runtime.real_index(name).unwrap_or(0);
        let button = host.create_button_node(
            &format!("legend_{slot}"),
            legend_obj,
            &ButtonSpec {
                node: NodeSpec {
                    anchor_min: anchor,
                    anchor_max: anchor,
                    pivot: location.pivot(),
                    size: Vec2::new(legend.item_width, legend.item_height),
                },
                font_size: legend.item_font_size,
                text_color: config.theme.legend_text_color,
                align: location.align,
                slot,
                total: total_legal,
            },
        );
        let background = if config.series.is_active(name) {
            config.theme.color(real_index)
        } else {
            config.theme.legend_unable_color
        };
        host.set_color(button, background);
        host.set_text(button, &display);
        host.clear_pointer_listeners(button);
        host.add_pointer_listener(button, PointerEventKind::Down);
        host.add_pointer_listener(button, PointerEventKind::Enter);
        host.add_pointer_listener(button, PointerEventKind::Exit);
        runtime.buttons.push(LegendButton {
            node: button,
            index: slot,
            name: name.clone(),
        });
        slot += 1;
    }
    debug!("legend rebuilt with {} entries", runtime.buttons.len());
    runtime
}

/// Recolor every legend button from the current active state. Used after
/// interaction toggles, without a full rebuild.
pub fn refresh_legend_colors(config: &ChartConfig, runtime: &LegendRuntime, host: &mut dyn ChartHost) {
    for button in &runtime.buttons {
        let real_index = runtime.real_index(&button.name).unwrap_or(0);
        let background = if config.series.is_active(&button.name) {
            config.theme.color(real_index)
        } else {
            config.theme.legend_unable_color
        };
        host.set_color(button.node, background);
    }
}

/// (Re)build the tooltip shell: a hidden root stripped of its default
/// background, with a themed content node. Marks the state as inited.
pub fn build_tooltip(
    config: &ChartConfig,
    root: NodeId,
    host: &mut dyn ChartHost,
    state: &mut crate::data::tooltip::TooltipState,
) {
    let tooltip_obj = host.create_node(
        TOOLTIP_NODE,
        root,
        &NodeSpec {
            size: Vec2::new(config.width, config.height),
            ..NodeSpec::default()
        },
    );
    host.set_local_position(tooltip_obj, Pos2::ZERO);
    // The content node carries its own background.
    host.strip_background(tooltip_obj);
    host.hide_all(tooltip_obj);

    let content = host.create_text_node(
        "content",
        tooltip_obj,
        &TextSpec {
            node: NodeSpec::default(),
            font_size: config.tooltip.font_size,
            color: config.theme.tooltip_text_color,
            align: egui::Align2::LEFT_TOP,
        },
    );
    host.set_color(content, config.theme.tooltip_background_color);

    state.node = Some(tooltip_obj);
    state.content_node = Some(content);
    state.inited = true;
    state.active = false;
    state.reset_indices(config.series.len());
    host.set_visible(tooltip_obj, false);
}

/// (Re)build the pooled per-datum labels.
///
/// Every label is released back to the pool first. A node is then pooled
/// for each (serie, datum) pair, skipping only data beyond the build cap
/// in series whose labels are globally off.
pub fn build_labels(config: &mut ChartConfig, root: NodeId, host: &mut dyn ChartHost) {
    let label_obj = host.create_node(
        LABEL_NODE,
        root,
        &NodeSpec {
            size: Vec2::new(config.width, config.height),
            ..NodeSpec::default()
        },
    );
    host.release_all(label_obj);

    let cap = config.settings.label_build_cap;
    let theme = config.theme.clone();
    let mut pooled = 0usize;
    for (serie_index, serie) in config.series.iter_mut().enumerate() {
        let style = serie.label.clone();
        for (datum_index, datum) in serie.data.iter_mut().enumerate() {
            if !style.show && datum_index > cap {
                continue;
            }
            let color = if serie.serie_type == SerieType::Pie {
                if style.position == LabelPosition::Inside {
                    Color32::WHITE
                } else {
                    theme.color(pooled)
                }
            } else if !style.color_is_clear() {
                style.color
            } else {
                theme.color(serie_index)
            };
            let key = format!("{LABEL_NODE}_{serie_index}_{datum_index}");
            let node = host.acquire(&key, label_obj, &style, color);
            let icon = host.icon_of(node);
            let auto_size = style.background_width == 0.0 || style.background_height == 0.0;
            datum.label = Some(LabelBinding { node, icon, auto_size });
            host.set_visible(node, false);
            host.set_text(node, &datum.name);
            pooled += 1;
        }
    }
    debug!("label pool rebuilt with {pooled} nodes");
}
