//! meshchart crate root: re-exports and module wiring.
//!
//! A retained-mode 2D chart widget core. The host framework owns the
//! actual UI nodes and the render mesh; this crate owns what happens in
//! between:
//! - `detect`: per-tick diffing of the live config against a snapshot
//! - `subview`: minimal rebuilds of title/legend/tooltip/label subtrees
//! - `interact`: the legend selection state machine
//! - `chart`: the per-tick lifecycle and mesh population protocol
//! - `drawing`: primitive emitters into an `epaint::Mesh`
//!
//! The host is reached only through the traits in `host`; a chart is
//! driven by calling [`Chart::update`] once per frame and
//! [`Chart::populate_mesh`] whenever the host re-tessellates.

pub mod chart;
pub mod data;
pub mod detect;
pub mod drawing;
pub mod host;
pub mod interact;
pub mod snapshot;
pub mod subview;
pub mod theme;

// Public re-exports for a compact external API
pub use chart::{Chart, ChartRenderer};
pub use data::{
    ChartConfig, Legend, Location, SelectedMode, Serie, SerieData, SerieLabel, SerieType, Series,
    Settings, SymbolType, Title, Tooltip, TooltipState, DEFAULT_LABEL_BUILD_CAP,
};
pub use detect::ChangeKind;
pub use host::{
    ButtonSpec, ChartHost, FrameInput, LabelPool, NodeFactory, NodeId, NodeSpec, PointerEventKind,
    TextSpec,
};
pub use snapshot::ConfigSnapshot;
pub use subview::{LegendButton, LegendRuntime};
pub use theme::{Theme, ThemeInfo};
