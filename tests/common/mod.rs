//! Shared test support: an in-memory host recording every node the chart
//! core creates and mutates.
#![allow(dead_code)]

use std::collections::HashMap;

use egui::{Color32, Pos2};
use meshchart::{
    ButtonSpec, ChartHost, LabelPool, NodeFactory, NodeId, NodeSpec, PointerEventKind, SerieLabel,
    TextSpec,
};

/// What a node was created as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Plain,
    Text,
    Button,
    Label,
    Icon,
}

/// Everything the mock remembers about one node.
#[derive(Clone, Debug)]
pub struct NodeRecord {
    pub name: String,
    pub parent: NodeId,
    pub kind: NodeKind,
    pub text: String,
    pub color: Color32,
    pub visible: bool,
    pub pos: Pos2,
    pub listeners: Vec<PointerEventKind>,
    pub background_stripped: bool,
    pub slot: usize,
    pub total: usize,
}

/// In-memory [`ChartHost`]: nodes are records in a map, children ordered
/// per parent. `create_*` is get-or-create by `(parent, name)` as the
/// trait contract requires.
#[derive(Default)]
pub struct MockHost {
    next_id: u64,
    pub nodes: HashMap<NodeId, NodeRecord>,
    pub children: HashMap<NodeId, Vec<NodeId>>,
    pub mesh_rebuilds: usize,
    pub pool_releases: usize,
}

/// Parent id for top-level chart nodes in tests.
pub const ROOT: NodeId = NodeId(0);

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: NodeId) -> &NodeRecord {
        self.nodes.get(&id).expect("node should exist")
    }

    pub fn find(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children
            .get(&parent)?
            .iter()
            .copied()
            .find(|id| self.nodes[id].name == name)
    }

    /// Ordered children of a parent, restricted to one kind.
    pub fn children_of_kind(&self, parent: NodeId, kind: NodeKind) -> Vec<NodeId> {
        self.children
            .get(&parent)
            .map(|ids| {
                ids.iter()
                    .copied()
                    .filter(|id| self.nodes[id].kind == kind)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All label nodes below the chart's label container.
    pub fn label_nodes(&self) -> Vec<NodeId> {
        let Some(container) = self.find(ROOT, "label") else {
            return Vec::new();
        };
        self.children_of_kind(container, NodeKind::Label)
    }

    /// All legend buttons in build order.
    pub fn legend_buttons(&self) -> Vec<NodeId> {
        let Some(container) = self.find(ROOT, "legend") else {
            return Vec::new();
        };
        self.children_of_kind(container, NodeKind::Button)
    }

    fn get_or_create(&mut self, name: &str, parent: NodeId, kind: NodeKind) -> NodeId {
        if let Some(existing) = self.find(parent, name) {
            return existing;
        }
        self.next_id += 1;
        let id = NodeId(self.next_id);
        self.nodes.insert(
            id,
            NodeRecord {
                name: name.to_string(),
                parent,
                kind,
                text: String::new(),
                color: Color32::TRANSPARENT,
                visible: true,
                pos: Pos2::ZERO,
                listeners: Vec::new(),
                background_stripped: false,
                slot: 0,
                total: 0,
            },
        );
        self.children.entry(parent).or_default().push(id);
        id
    }

    fn destroy(&mut self, id: NodeId) {
        if let Some(kids) = self.children.remove(&id) {
            for kid in kids {
                self.destroy(kid);
            }
        }
        if let Some(record) = self.nodes.remove(&id) {
            if let Some(siblings) = self.children.get_mut(&record.parent) {
                siblings.retain(|s| *s != id);
            }
        }
    }

    fn set_subtree_visible(&mut self, id: NodeId, visible: bool) {
        if let Some(record) = self.nodes.get_mut(&id) {
            record.visible = visible;
        }
        let kids = self.children.get(&id).cloned().unwrap_or_default();
        for kid in kids {
            self.set_subtree_visible(kid, visible);
        }
    }
}

impl NodeFactory for MockHost {
    fn create_node(&mut self, name: &str, parent: NodeId, _spec: &NodeSpec) -> NodeId {
        self.get_or_create(name, parent, NodeKind::Plain)
    }

    fn create_text_node(&mut self, name: &str, parent: NodeId, spec: &TextSpec) -> NodeId {
        let id = self.get_or_create(name, parent, NodeKind::Text);
        self.nodes.get_mut(&id).unwrap().color = spec.color;
        id
    }

    fn create_button_node(&mut self, name: &str, parent: NodeId, spec: &ButtonSpec) -> NodeId {
        let id = self.get_or_create(name, parent, NodeKind::Button);
        let record = self.nodes.get_mut(&id).unwrap();
        record.slot = spec.slot;
        record.total = spec.total;
        id
    }

    fn destroy_children(&mut self, node: NodeId) {
        let kids = self.children.get(&node).cloned().unwrap_or_default();
        for kid in kids {
            self.destroy(kid);
        }
    }

    fn hide_all(&mut self, node: NodeId) {
        let kids = self.children.get(&node).cloned().unwrap_or_default();
        for kid in kids {
            self.set_subtree_visible(kid, false);
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.nodes.get_mut(&node).unwrap().text = text.to_string();
    }

    fn set_color(&mut self, node: NodeId, color: Color32) {
        self.nodes.get_mut(&node).unwrap().color = color;
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) {
        self.nodes.get_mut(&node).unwrap().visible = visible;
    }

    fn set_local_position(&mut self, node: NodeId, pos: Pos2) {
        self.nodes.get_mut(&node).unwrap().pos = pos;
    }

    fn strip_background(&mut self, node: NodeId) {
        self.nodes.get_mut(&node).unwrap().background_stripped = true;
    }

    fn add_pointer_listener(&mut self, node: NodeId, kind: PointerEventKind) {
        self.nodes.get_mut(&node).unwrap().listeners.push(kind);
    }

    fn clear_pointer_listeners(&mut self, node: NodeId) {
        self.nodes.get_mut(&node).unwrap().listeners.clear();
    }
}

impl LabelPool for MockHost {
    fn acquire(&mut self, key: &str, parent: NodeId, _style: &SerieLabel, color: Color32) -> NodeId {
        let id = self.get_or_create(key, parent, NodeKind::Label);
        self.nodes.get_mut(&id).unwrap().color = color;
        id
    }

    fn icon_of(&mut self, label: NodeId) -> NodeId {
        self.get_or_create("Icon", label, NodeKind::Icon)
    }

    fn release_all(&mut self, parent: NodeId) {
        self.pool_releases += 1;
        // The mock does not keep a free list; releasing just tears the
        // labels down so a rebuild starts from nothing.
        self.destroy_children(parent);
    }
}

impl ChartHost for MockHost {
    fn request_mesh_rebuild(&mut self) {
        self.mesh_rebuilds += 1;
    }
}
