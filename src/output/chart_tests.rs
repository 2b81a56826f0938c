use super::*;

fn sample() -> Ratios {
    [("Go", 60.0), ("Rust", 40.0)].into_iter().collect()
}

#[test]
fn bar_style_selects_bar_renderer() {
    let svg = renderer_for(ChartStyle::Bar).render(&sample());
    assert!(svg.contains("<g class=\"row\">"));
    assert!(svg.contains("My Programming Languages"));
}

#[test]
fn pie_style_selects_pie_renderer() {
    let svg = renderer_for(ChartStyle::Pie).render(&sample());
    assert!(svg.contains("<path d="));
    assert!(svg.contains("Programming Language Usage"));
}

#[test]
fn renderers_are_pure() {
    let renderer = renderer_for(ChartStyle::Bar);
    assert_eq!(renderer.render(&sample()), renderer.render(&sample()));
}

#[test]
fn write_chart_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("language_stats.svg");
    std::fs::write(&path, "old contents that are longer than the new ones").unwrap();

    write_chart(&path, "<svg/>").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
}

#[test]
fn write_chart_reports_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("chart.svg");

    let err = write_chart(&path, "<svg/>").unwrap_err();

    assert!(matches!(err, LangStatsError::FileWrite { .. }));
    assert!(err.to_string().contains("chart.svg"));
}
