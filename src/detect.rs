//! Per-tick configuration change detection.
//!
//! [`detect`] compares the live config and frame input against the
//! [`ConfigSnapshot`], updates the snapshot, and returns the set of
//! [`ChangeKind`] bits raised this tick. Each change is raised exactly
//! once: the snapshot always converges to the live value in the same
//! call. Detection never fails; every branch is a plain comparison.

use log::debug;

use crate::data::config::ChartConfig;
use crate::host::FrameInput;
use crate::snapshot::ConfigSnapshot;

// ─────────────────────────────────────────────────────────────────────────────
// ChangeKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing which watched configuration blocks changed in a
/// tick. A single tick may raise several bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChangeKind(pub u32);

impl ChangeKind {
    /// Chart rect size changed, or the chart saw its first non-zero size
    /// (full re-init).
    pub const SIZE: Self = Self(1 << 0);
    /// Layout anchors drifted; labels need a re-init, nothing else.
    pub const ANCHOR: Self = Self(1 << 1);
    /// Theme id changed; the preset table must be copied in.
    pub const THEME: Self = Self(1 << 2);
    /// Any title field changed.
    pub const TITLE: Self = Self(1 << 3);
    /// Legend needs a rebuild: its own fields changed, or the series it
    /// derives entries from did.
    pub const LEGEND: Self = Self(1 << 4);
    /// The number of series changed (always raised together with
    /// `LEGEND`).
    pub const SERIES_COUNT: Self = Self(1 << 5);
    /// A serie with visible labels gained or lost data points.
    pub const LABEL_COUNT: Self = Self(1 << 6);
    /// One-shot: the entrance animation should be started.
    pub const ANIMATION: Self = Self(1 << 7);

    /// Wildcard: matches every change kind.
    pub const ALL: Self = Self(u32::MAX);

    /// The empty set.
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Combine two change sets (bitwise OR).
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether `self` and `other` share at least one bit.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Returns `true` if no bits are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for ChangeKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for ChangeKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for ChangeKind {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl std::ops::Not for ChangeKind {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == ChangeKind::ALL {
            return write!(f, "ALL");
        }
        let pairs: &[(ChangeKind, &str)] = &[
            (ChangeKind::SIZE, "SIZE"),
            (ChangeKind::ANCHOR, "ANCHOR"),
            (ChangeKind::THEME, "THEME"),
            (ChangeKind::TITLE, "TITLE"),
            (ChangeKind::LEGEND, "LEGEND"),
            (ChangeKind::SERIES_COUNT, "SERIES_COUNT"),
            (ChangeKind::LABEL_COUNT, "LABEL_COUNT"),
            (ChangeKind::ANIMATION, "ANIMATION"),
        ];
        let mut first = true;
        for (kind, name) in pairs {
            if self.intersects(*kind) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Detection
// ─────────────────────────────────────────────────────────────────────────────

/// Diff the live config and frame input against the snapshot.
///
/// The snapshot is updated in place for every raised change so the same
/// change is never re-raised next tick.
pub fn detect(
    config: &ChartConfig,
    input: &FrameInput,
    snapshot: &mut ConfigSnapshot,
) -> ChangeKind {
    let mut changes = ChangeKind::empty();

    // Size. An unsized snapshot seeing its first real size is a full
    // re-init, not an incremental resize; both raise SIZE.
    let (width, height) = (input.size.x, input.size.y);
    if snapshot.is_unsized() {
        if width != 0.0 || height != 0.0 {
            snapshot.width = width;
            snapshot.height = height;
            changes |= ChangeKind::SIZE;
        }
    } else if snapshot.width != width || snapshot.height != height {
        snapshot.width = width;
        snapshot.height = height;
        changes |= ChangeKind::SIZE;
    }

    // Anchors move independently of size and only invalidate labels.
    if snapshot.anchor_min != input.anchor_min || snapshot.anchor_max != input.anchor_max {
        snapshot.anchor_min = input.anchor_min;
        snapshot.anchor_max = input.anchor_max;
        changes |= ChangeKind::ANCHOR;
    }

    if snapshot.theme != config.theme.theme {
        snapshot.theme = config.theme.theme;
        changes |= ChangeKind::THEME;
    }

    if snapshot.title != config.title {
        snapshot.title = config.title.clone();
        changes |= ChangeKind::TITLE;
    }

    // The legend rebuilds when its own block changes, and also when the
    // series it derives entries from are added/removed/renamed — the
    // caller never has to touch the legend block for that.
    if snapshot.legend != config.legend {
        snapshot.legend = config.legend.clone();
        changes |= ChangeKind::LEGEND;
    } else if config.legend.show {
        let names = config.series.name_list();
        if snapshot.serie_count != config.series.len() {
            snapshot.serie_count = config.series.len();
            snapshot.serie_names = names;
            changes |= ChangeKind::LEGEND | ChangeKind::SERIES_COUNT;
        } else if snapshot.serie_names != names {
            snapshot.serie_names = names;
            changes |= ChangeKind::LEGEND;
        }
    }

    // Data-count drift for series with visible labels means the label
    // pool no longer matches the data. The stored count only advances
    // for label-shown series, so drift that happens while labels are off
    // is still caught once they come back on.
    snapshot.data_counts.resize(config.series.len(), 0);
    for (i, serie) in config.series.iter().enumerate() {
        if serie.label.show && snapshot.data_counts[i] != serie.data.len() {
            snapshot.data_counts[i] = serie.data.len();
            changes |= ChangeKind::LABEL_COUNT;
        }
    }

    // One-shot entrance animation kick.
    if !snapshot.animation_started {
        snapshot.animation_started = true;
        changes |= ChangeKind::ANIMATION;
    }

    if !changes.is_empty() {
        debug!("config changes this tick: {changes}");
    }
    changes
}
