//! Configuration value types.
//!
//! Everything in here is plain data owned by the chart config: mutated by
//! the host between ticks, diffed against snapshots by the change
//! detector, read by the subview builders. All types are `Clone +
//! PartialEq` (structural equality is what the detector compares) and
//! serde-serializable (the live config is its own persisted form).

pub mod config;
pub mod legend;
pub mod series;
pub mod title;
pub mod tooltip;

pub use config::{ChartConfig, Settings, DEFAULT_LABEL_BUILD_CAP};
pub use legend::{Legend, SelectedMode};
pub use series::{Serie, SerieData, SerieLabel, SerieType, Series, SymbolType};
pub use title::{Location, Title};
pub use tooltip::{Tooltip, TooltipState};
