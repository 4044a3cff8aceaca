//! Host framework seam.
//!
//! The chart core never owns UI nodes or a render surface; it drives
//! them through the traits here. A host implements [`NodeFactory`] for
//! retained node management, [`LabelPool`] for the pooled per-datum
//! labels, and [`ChartHost`] to receive mesh rebuild requests. Tests use
//! an in-memory implementation; a real UI binding forwards to its widget
//! tree.
//!
//! All positions crossing this seam are chart-local: origin at the
//! bottom-left of the chart rect, y up, in `[0, width] x [0, height]`.

use egui::{Align2, Color32, Pos2, Vec2};

use crate::data::series::SerieLabel;

/// Opaque handle to a host-owned UI node. Only ever produced by the
/// host; the core stores and compares them but never fabricates one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// Pointer event classes the core subscribes legend buttons to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Enter,
    Exit,
}

/// Layout for a plain container node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeSpec {
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
    pub pivot: Vec2,
    pub size: Vec2,
}

/// Layout plus typography for a text node.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpec {
    pub node: NodeSpec,
    pub font_size: f32,
    pub color: Color32,
    pub align: Align2,
}

/// Layout for one legend button; `slot`/`total` let the host lay the
/// button row out without knowing legend internals.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonSpec {
    pub node: NodeSpec,
    pub font_size: f32,
    pub text_color: Color32,
    pub align: Align2,
    pub slot: usize,
    pub total: usize,
}

/// Retained UI node management.
///
/// The `create_*` methods are get-or-create by `(parent, name)`: calling
/// them again with the same pair returns the existing node, which is
/// what makes the subview builders idempotent.
pub trait NodeFactory {
    fn create_node(&mut self, name: &str, parent: NodeId, spec: &NodeSpec) -> NodeId;
    fn create_text_node(&mut self, name: &str, parent: NodeId, spec: &TextSpec) -> NodeId;
    fn create_button_node(&mut self, name: &str, parent: NodeId, spec: &ButtonSpec) -> NodeId;

    /// Destroy every child of `node` (recursively), keeping `node`.
    fn destroy_children(&mut self, node: NodeId);
    /// Hide every node below `node` without destroying anything; the
    /// container itself stays visible.
    fn hide_all(&mut self, node: NodeId);

    fn set_text(&mut self, node: NodeId, text: &str);
    fn set_color(&mut self, node: NodeId, color: Color32);
    fn set_visible(&mut self, node: NodeId, visible: bool);
    fn set_local_position(&mut self, node: NodeId, pos: Pos2);
    /// Remove the node's default background graphic (the tooltip shell
    /// draws its own).
    fn strip_background(&mut self, node: NodeId);

    fn add_pointer_listener(&mut self, node: NodeId, kind: PointerEventKind);
    fn clear_pointer_listeners(&mut self, node: NodeId);
}

/// Pooled label nodes. `acquire` hands out a node for a stable key,
/// reusing a pooled one when available; `release_all` returns every
/// label under `parent` to the pool.
pub trait LabelPool {
    fn acquire(&mut self, key: &str, parent: NodeId, style: &SerieLabel, color: Color32) -> NodeId;
    /// The icon child of a label node, created on first access.
    fn icon_of(&mut self, label: NodeId) -> NodeId;
    fn release_all(&mut self, parent: NodeId);
}

/// Everything the chart core needs from its host in one bound.
pub trait ChartHost: NodeFactory + LabelPool {
    /// The chart geometry is stale; call
    /// [`crate::Chart::populate_mesh`] before the next paint.
    fn request_mesh_rebuild(&mut self);
}

/// Per-tick input sampled by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Chart rect size in pixels. Zero on both axes means the widget has
    /// no layout yet.
    pub size: Vec2,
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
    /// Pointer position in chart-local coordinates, `None` when the
    /// pointer could not be sampled this tick.
    pub pointer: Option<Pos2>,
}

impl FrameInput {
    /// Input with the given size and everything else defaulted.
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            ..Self::default()
        }
    }
}
