//! Tests for primitive SVG elements.

use super::*;

mod rect_tests {
    use super::*;

    #[test]
    fn plain_rect_is_self_closing() {
        let svg = Rect::new(140.0, 55.0, 280.0, 12.0, ChartColor::hex("#eaeef2")).render();
        assert_eq!(
            svg,
            r##"<rect x="140" y="55" width="280" height="12" fill="#eaeef2"/>"##
        );
    }

    #[test]
    fn rounded_rect_with_stroke() {
        let svg = Rect::new(0.0, 0.0, 500.0, 104.0, ChartColor::hex("#ffffff"))
            .with_radius(12.0)
            .with_stroke(ChartColor::hex("#d0d7de"))
            .render();
        assert!(svg.contains(r#"rx="12""#));
        assert!(svg.contains("stroke=\"#d0d7de\""));
    }

    #[test]
    fn tooltip_is_escaped() {
        let svg = Rect::new(0.0, 0.0, 1.0, 1.0, ChartColor::hex("#000"))
            .with_tooltip("C & C++")
            .render();
        assert!(svg.contains("<title>C &amp; C++</title>"));
        assert!(svg.ends_with("</rect>"));
    }
}

mod text_tests {
    use super::*;

    #[test]
    fn text_with_class() {
        let svg = Text::new(20.0, 65.0, "Rust").with_class("label").render();
        assert_eq!(svg, r#"<text x="20" y="65" class="label">Rust</text>"#);
    }

    #[test]
    fn text_with_inline_style() {
        let svg = Text::new(10.0, 10.0, "50.0%")
            .with_anchor(TextAnchor::Middle)
            .with_font_size(11.0)
            .with_fill(ChartColor::hex("#ffffff"))
            .render();
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains(r#"font-size="11""#));
        assert!(svg.contains("fill=\"#ffffff\""));
    }

    #[test]
    fn content_is_escaped() {
        let svg = Text::new(0.0, 0.0, "<script>").render();
        assert!(svg.contains("&lt;script&gt;"));
    }
}

mod group_tests {
    use super::*;

    #[test]
    fn group_indents_children() {
        let group = Group::new("row")
            .push(&Text::new(0.0, 0.0, "Go"))
            .push(&Rect::new(0.0, 0.0, 1.0, 1.0, ChartColor::hex("#000")));

        let svg = group.render();

        assert!(svg.starts_with("<g class=\"row\">\n"));
        assert!(svg.contains("    <text"));
        assert!(svg.contains("    <rect"));
        assert!(svg.ends_with("</g>"));
    }
}

mod slice_tests {
    use super::*;

    fn slice(start: f64, sweep: f64) -> Slice {
        Slice {
            cx: 100.0,
            cy: 100.0,
            radius: 50.0,
            start_angle: start,
            sweep,
            fill: ChartColor::hex("#1f77b4"),
            label: "Rust".to_string(),
        }
    }

    #[test]
    fn point_at_ninety_degrees_is_top() {
        let (x, y) = slice(0.0, 10.0).point_at(90.0, 50.0);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn quarter_slice_from_top_goes_left() {
        let svg = slice(90.0, 90.0).render();
        assert!(svg.contains("M100,100 L100,50 A50,50 0 0 0 50,100 Z"));
    }

    #[test]
    fn large_slice_sets_large_arc_flag() {
        let svg = slice(90.0, 270.0).render();
        assert!(svg.contains(" 0 1 0 "));
    }

    #[test]
    fn full_slice_is_circle() {
        let svg = slice(90.0, 360.0).render();
        assert!(svg.starts_with("<circle"));
        assert!(svg.contains(r#"r="50""#));
    }

    #[test]
    fn mid_angle_is_centre_of_wedge() {
        assert!((slice(90.0, 60.0).mid_angle() - 120.0).abs() < f64::EPSILON);
    }
}
