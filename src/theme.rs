//! Themes: a preset id plus the expanded color table it stands for.
//!
//! The live config carries a full [`ThemeInfo`] so individual colors can
//! be tweaked, but the change detector only watches the preset id:
//! setting [`ThemeInfo::theme`] swaps the whole table for the preset on
//! the next tick, which also makes preset round-trips lossless.

use egui::Color32;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Built-in theme presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Default,
    Dark,
    Light,
}

/// The expanded color table of a theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeInfo {
    /// The preset this table was expanded from. Changing it is the
    /// theme-switch trigger.
    pub theme: Theme,
    pub background_color: Color32,
    pub title_text_color: Color32,
    pub title_sub_text_color: Color32,
    pub legend_text_color: Color32,
    /// Color of a legend button whose entry is toggled off.
    pub legend_unable_color: Color32,
    pub tooltip_background_color: Color32,
    pub tooltip_text_color: Color32,
    pub font_size: f32,
    /// Serie color cycle; indexed with wrap-around via
    /// [`ThemeInfo::color`].
    pub palette: Vec<Color32>,
}

static DEFAULT_THEME: Lazy<ThemeInfo> = Lazy::new(|| ThemeInfo {
    theme: Theme::Default,
    background_color: Color32::WHITE,
    title_text_color: Color32::from_rgb(0x51, 0x4c, 0x4c),
    title_sub_text_color: Color32::from_rgb(0x96, 0x96, 0x96),
    legend_text_color: Color32::from_rgb(0x51, 0x4c, 0x4c),
    legend_unable_color: Color32::from_rgb(0xcc, 0xcc, 0xcc),
    tooltip_background_color: Color32::from_rgba_premultiplied(50, 50, 50, 220),
    tooltip_text_color: Color32::WHITE,
    font_size: 18.0,
    palette: vec![
        Color32::from_rgb(0xc2, 0x35, 0x31),
        Color32::from_rgb(0x2f, 0x45, 0x54),
        Color32::from_rgb(0x61, 0xa0, 0xa8),
        Color32::from_rgb(0xd4, 0x82, 0x65),
        Color32::from_rgb(0x91, 0xc7, 0xae),
        Color32::from_rgb(0x74, 0x9f, 0x83),
        Color32::from_rgb(0xca, 0x86, 0x22),
        Color32::from_rgb(0xbd, 0xa2, 0x9a),
        Color32::from_rgb(0x6e, 0x70, 0x74),
        Color32::from_rgb(0x54, 0x65, 0x70),
        Color32::from_rgb(0xc4, 0xcc, 0xd3),
    ],
});

static DARK_THEME: Lazy<ThemeInfo> = Lazy::new(|| ThemeInfo {
    theme: Theme::Dark,
    background_color: Color32::from_rgb(0x10, 0x10, 0x10),
    title_text_color: Color32::from_rgb(0xee, 0xee, 0xee),
    title_sub_text_color: Color32::from_rgb(0xaa, 0xaa, 0xaa),
    legend_text_color: Color32::from_rgb(0xee, 0xee, 0xee),
    legend_unable_color: Color32::from_rgb(0x50, 0x50, 0x50),
    tooltip_background_color: Color32::from_rgba_premultiplied(50, 50, 50, 220),
    tooltip_text_color: Color32::WHITE,
    font_size: 18.0,
    palette: vec![
        Color32::from_rgb(0x1f, 0x77, 0xb4),
        Color32::from_rgb(0xff, 0x7f, 0x0e),
        Color32::from_rgb(0x2c, 0xa0, 0x2c),
        Color32::from_rgb(0xd6, 0x27, 0x28),
        Color32::from_rgb(0x94, 0x67, 0xbd),
        Color32::from_rgb(0x8c, 0x56, 0x4b),
        Color32::from_rgb(0xe3, 0x77, 0xc2),
        Color32::from_rgb(0x7f, 0x7f, 0x7f),
        Color32::from_rgb(0xbc, 0xbd, 0x22),
        Color32::from_rgb(0x17, 0xbe, 0xcf),
    ],
});

static LIGHT_THEME: Lazy<ThemeInfo> = Lazy::new(|| ThemeInfo {
    theme: Theme::Light,
    background_color: Color32::from_rgb(0xfa, 0xfa, 0xfa),
    title_text_color: Color32::from_rgb(0x33, 0x33, 0x33),
    title_sub_text_color: Color32::from_rgb(0x77, 0x77, 0x77),
    legend_text_color: Color32::from_rgb(0x33, 0x33, 0x33),
    legend_unable_color: Color32::from_rgb(0xcc, 0xcc, 0xcc),
    tooltip_background_color: Color32::from_rgba_premultiplied(50, 50, 50, 220),
    tooltip_text_color: Color32::WHITE,
    font_size: 18.0,
    palette: vec![
        Color32::from_rgb(0xe4, 0x1a, 0x1c),
        Color32::from_rgb(0x37, 0x7e, 0xb8),
        Color32::from_rgb(0x4d, 0xaf, 0x4a),
        Color32::from_rgb(0x98, 0x4e, 0xa3),
        Color32::from_rgb(0xff, 0x7f, 0x00),
        Color32::from_rgb(0xff, 0xff, 0x33),
        Color32::from_rgb(0xa6, 0x56, 0x28),
        Color32::from_rgb(0xf7, 0x81, 0xbf),
        Color32::from_rgb(0x99, 0x99, 0x99),
    ],
});

impl Default for ThemeInfo {
    fn default() -> Self {
        DEFAULT_THEME.clone()
    }
}

impl ThemeInfo {
    /// The canonical color table for a preset.
    pub fn preset(theme: Theme) -> &'static ThemeInfo {
        match theme {
            Theme::Default => &DEFAULT_THEME,
            Theme::Dark => &DARK_THEME,
            Theme::Light => &LIGHT_THEME,
        }
    }

    /// Serie color for an index, wrapping around the palette. A cleared
    /// palette degrades to gray instead of panicking.
    pub fn color(&self, index: usize) -> Color32 {
        if self.palette.is_empty() {
            return Color32::GRAY;
        }
        self.palette[index % self.palette.len()]
    }

    /// Replace this table wholesale. Used on theme switch so a preset
    /// round-trip restores every color exactly.
    pub fn copy_from(&mut self, other: &ThemeInfo) {
        *self = other.clone();
    }
}
