//! Tests for the language bar chart.

use super::*;

fn ratios(entries: &[(&str, f64)]) -> Ratios {
    entries.iter().copied().collect()
}

/// Value of `attr` on every `<rect>` carrying the given fill color.
fn rect_attr_by_fill(svg: &str, fill: &str, attr: &str) -> Vec<f64> {
    let needle = format!("fill=\"{fill}\"");
    let prefix = format!("{attr}=\"");
    svg.lines()
        .filter(|line| line.trim_start().starts_with("<rect") && line.contains(&needle))
        .map(|line| {
            let start = line.find(&prefix).unwrap() + prefix.len();
            let end = start + line[start..].find('"').unwrap();
            line[start..end].parse().unwrap()
        })
        .collect()
}

#[test]
fn fill_width_is_proportional_to_percent() {
    let svg = LanguageBarChart::new().to_svg(&ratios(&[("Go", 60.0), ("Rust", 40.0)]));

    let widths = rect_attr_by_fill(&svg, "#2da44e", "width");

    assert_eq!(widths.len(), 2);
    assert!((widths[0] - 168.0).abs() < 0.01);
    assert!((widths[1] - 112.0).abs() < 0.01);
}

#[test]
fn one_row_per_language_in_iteration_order() {
    let svg = LanguageBarChart::new().to_svg(&ratios(&[("Go", 60.0), ("Rust", 40.0)]));

    assert_eq!(svg.matches("<g class=\"row\">").count(), 2);
    let go = svg.find(">Go</text>").unwrap();
    let rust = svg.find(">Rust</text>").unwrap();
    assert!(go < rust);
}

#[test]
fn height_grows_with_row_count() {
    let chart = LanguageBarChart::new();

    assert!((chart.height_for(0) - 40.0).abs() < f64::EPSILON);
    assert!((chart.height_for(5) - 200.0).abs() < f64::EPSILON);

    let svg = chart.to_svg(&ratios(&[("A", 50.0), ("B", 30.0), ("C", 20.0)]));
    assert!(svg.contains(r#"width="500" height="136""#));
}

#[test]
fn rows_advance_by_fixed_offset() {
    let svg = LanguageBarChart::new().to_svg(&ratios(&[("A", 50.0), ("B", 30.0), ("C", 20.0)]));

    let ys = rect_attr_by_fill(&svg, "#eaeef2", "y");

    assert_eq!(ys, vec![55.0, 87.0, 119.0]);
}

#[test]
fn percent_labels_have_two_decimals() {
    let svg = LanguageBarChart::new().to_svg(&ratios(&[("Python", 66.666_666), ("C", 33.333_334)]));

    assert!(svg.contains(">66.67%</text>"));
    assert!(svg.contains(">33.33%</text>"));
    assert!(svg.contains(r#"<text x="430" y="65" class="percent">"#));
}

#[test]
fn track_spans_full_width() {
    let svg = LanguageBarChart::new().to_svg(&ratios(&[("Rust", 10.0)]));

    let widths = rect_attr_by_fill(&svg, "#eaeef2", "width");

    assert_eq!(widths, vec![280.0]);
}

#[test]
fn fill_width_is_clamped() {
    let chart = LanguageBarChart::new();
    assert!((chart.filled_width(120.0) - 280.0).abs() < f64::EPSILON);
    assert!(chart.filled_width(-3.0).abs() < f64::EPSILON);
}

#[test]
fn title_and_styles_are_present() {
    let svg = LanguageBarChart::new().to_svg(&ratios(&[("Rust", 100.0)]));

    assert!(svg.contains(r#"class="title">My Programming Languages</text>"#));
    assert!(svg.contains(".percent {"));
}

#[test]
fn filled_bar_carries_hover_tooltip() {
    let svg = LanguageBarChart::new().to_svg(&ratios(&[("C & C++", 62.5), ("Go", 37.5)]));

    assert!(svg.contains("<title>C &amp; C++: 62.50%</title>"));
    assert!(svg.contains("<title>Go: 37.50%</title>"));
    assert_eq!(svg.matches("</rect>").count(), 2);
}

#[test]
fn language_names_are_escaped() {
    let svg = LanguageBarChart::new().to_svg(&ratios(&[("<Weird>", 100.0)]));

    assert!(svg.contains("&lt;Weird&gt;"));
    assert!(!svg.contains("<Weird>"));
}

#[test]
fn empty_ratios_render_frame_only() {
    let svg = LanguageBarChart::new().to_svg(&Ratios::default());

    assert_eq!(svg.matches("<g class=\"row\">").count(), 0);
    assert!(svg.contains(r#"height="40""#));
}
