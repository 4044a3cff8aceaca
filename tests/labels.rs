mod common;

use common::{MockHost, NodeKind, ROOT};
use egui::Color32;
use meshchart::subview::build_labels;
use meshchart::{ChartConfig, Serie, SerieData, SerieType};

fn serie_with_points(name: &str, serie_type: SerieType, count: usize) -> Serie {
    Serie::new(name, serie_type).with_data(
        (0..count).map(|i| SerieData::new(format!("{name}-{i}"), i as f32)),
    )
}

#[test]
fn labels_off_pools_up_to_the_cap() {
    let mut host = MockHost::new();
    let mut config = ChartConfig::default();
    config
        .series
        .list
        .push(serie_with_points("A", SerieType::Line, 150));

    build_labels(&mut config, ROOT, &mut host);
    assert_eq!(
        host.label_nodes().len(),
        101,
        "labels-off series pool indices 0..=cap"
    );
}

#[test]
fn labels_on_pools_every_datum() {
    let mut host = MockHost::new();
    let mut config = ChartConfig::default();
    let mut serie = serie_with_points("A", SerieType::Line, 150);
    serie.label.show = true;
    config.series.list.push(serie);

    build_labels(&mut config, ROOT, &mut host);
    assert_eq!(host.label_nodes().len(), 150);
}

#[test]
fn cap_is_configurable() {
    let mut host = MockHost::new();
    let mut config = ChartConfig::default();
    config.settings.label_build_cap = 10;
    config
        .series
        .list
        .push(serie_with_points("A", SerieType::Line, 50));

    build_labels(&mut config, ROOT, &mut host);
    assert_eq!(host.label_nodes().len(), 11);
}

#[test]
fn rebuild_releases_before_acquiring() {
    let mut host = MockHost::new();
    let mut config = ChartConfig::default();
    config
        .series
        .list
        .push(serie_with_points("A", SerieType::Line, 5));

    build_labels(&mut config, ROOT, &mut host);
    assert_eq!(host.label_nodes().len(), 5);
    assert_eq!(host.pool_releases, 1);

    config.series.list[0].data.truncate(2);
    build_labels(&mut config, ROOT, &mut host);
    assert_eq!(
        host.label_nodes().len(),
        2,
        "shrunk data must not leave stale labels"
    );
    assert_eq!(host.pool_releases, 2);
}

#[test]
fn every_datum_gets_a_binding_hidden_by_default() {
    let mut host = MockHost::new();
    let mut config = ChartConfig::default();
    config
        .series
        .list
        .push(serie_with_points("A", SerieType::Line, 3));

    build_labels(&mut config, ROOT, &mut host);
    for datum in &config.series.list[0].data {
        let binding = datum.label.expect("datum should be bound to a label");
        let record = host.node(binding.node);
        assert!(!record.visible, "labels start hidden");
        assert_eq!(record.text, datum.name);
        assert_eq!(host.node(binding.icon).kind, NodeKind::Icon);
        assert!(binding.auto_size, "zero background dims mean auto-size");
    }
}

#[test]
fn explicit_label_color_overrides_theme() {
    let mut host = MockHost::new();
    let mut config = ChartConfig::default();
    let mut serie = serie_with_points("A", SerieType::Line, 1);
    serie.label.color = Color32::RED;
    config.series.list.push(serie);

    build_labels(&mut config, ROOT, &mut host);
    let binding = config.series.list[0].data[0].label.unwrap();
    assert_eq!(host.node(binding.node).color, Color32::RED);
}

#[test]
fn clear_label_color_falls_back_to_serie_theme_color() {
    let mut host = MockHost::new();
    let mut config = ChartConfig::default();
    config
        .series
        .list
        .push(serie_with_points("A", SerieType::Line, 1));
    config
        .series
        .list
        .push(serie_with_points("B", SerieType::Line, 1));

    build_labels(&mut config, ROOT, &mut host);
    let theme = config.theme.clone();
    let b_binding = config.series.list[1].data[0].label.unwrap();
    assert_eq!(
        host.node(b_binding.node).color,
        theme.color(1),
        "non-pie labels color by serie index"
    );
}

#[test]
fn pie_inside_labels_are_white_others_count_colored() {
    let mut host = MockHost::new();
    let mut config = ChartConfig::default();

    let mut inside = serie_with_points("P1", SerieType::Pie, 2);
    inside.label.position = meshchart::data::series::LabelPosition::Inside;
    config.series.list.push(inside);

    build_labels(&mut config, ROOT, &mut host);
    for datum in &config.series.list[0].data {
        let binding = datum.label.unwrap();
        assert_eq!(host.node(binding.node).color, Color32::WHITE);
    }

    let mut host = MockHost::new();
    let mut config = ChartConfig::default();
    config
        .series
        .list
        .push(serie_with_points("P1", SerieType::Pie, 2));
    build_labels(&mut config, ROOT, &mut host);
    let theme = config.theme.clone();
    for (i, datum) in config.series.list[0].data.iter().enumerate() {
        let binding = datum.label.unwrap();
        assert_eq!(
            host.node(binding.node).color,
            theme.color(i),
            "outside pie labels allocate a color per datum"
        );
    }
}
