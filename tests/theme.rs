mod common;

use common::{MockHost, ROOT};
use meshchart::{Chart, ChartConfig, FrameInput, Serie, SerieType, Theme, ThemeInfo};

#[test]
fn preset_round_trip_restores_exact_colors() {
    let mut host = MockHost::new();
    let mut config = ChartConfig::default();
    config.series.list.push(Serie::new("A", SerieType::Line));
    let mut chart = Chart::new(config, ROOT);
    let input = FrameInput::sized(580.0, 300.0);
    chart.update(&input, &mut host);

    chart.config_mut().theme.theme = Theme::Dark;
    chart.update(&input, &mut host);
    let dark_first = chart.config().theme.clone();
    assert_eq!(dark_first.theme, Theme::Dark);
    assert_eq!(&dark_first, ThemeInfo::preset(Theme::Dark));

    chart.config_mut().theme.theme = Theme::Default;
    chart.update(&input, &mut host);
    assert_eq!(chart.config().theme, *ThemeInfo::preset(Theme::Default));

    chart.config_mut().theme.theme = Theme::Dark;
    chart.update(&input, &mut host);
    assert_eq!(
        chart.config().theme, dark_first,
        "Dark -> Default -> Dark must restore the exact color table"
    );
}

#[test]
fn theme_change_recolors_the_legend() {
    let mut host = MockHost::new();
    let mut config = ChartConfig::default();
    config.series.list.push(Serie::new("A", SerieType::Line));
    let mut chart = Chart::new(config, ROOT);
    let input = FrameInput::sized(580.0, 300.0);
    chart.update(&input, &mut host);

    chart.config_mut().theme.theme = Theme::Dark;
    chart.update(&input, &mut host);

    let button = chart.legend_runtime().buttons[0].node;
    assert_eq!(
        host.node(button).color,
        ThemeInfo::preset(Theme::Dark).color(0),
        "legend buttons recolor from the new palette"
    );
}

#[test]
fn palette_access_wraps_around() {
    let theme = ThemeInfo::preset(Theme::Default);
    let len = theme.palette.len();
    assert_eq!(theme.color(0), theme.color(len));
    assert_eq!(theme.color(1), theme.color(len + 1));
}

#[test]
fn empty_palette_degrades_to_gray() {
    let mut theme = ThemeInfo::default();
    theme.palette.clear();
    assert_eq!(theme.color(3), egui::Color32::GRAY);
}
