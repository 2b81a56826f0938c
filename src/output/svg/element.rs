//! Primitive SVG elements: rectangles, text, groups, and pie slices.

use std::f64::consts::PI;
use std::fmt::Write;

use super::format::{format_coord, html_escape};
use super::style::{ChartColor, TextAnchor};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Rectangle, optionally rounded and with a hover tooltip.
#[derive(Debug, Clone)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rx: f64,
    pub fill: ChartColor,
    pub stroke: Option<ChartColor>,
    pub tooltip: Option<String>,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill: ChartColor) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rx: 0.0,
            fill,
            stroke: None,
            tooltip: None,
        }
    }

    #[must_use]
    pub const fn with_radius(mut self, rx: f64) -> Self {
        self.rx = rx;
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: ChartColor) -> Self {
        self.stroke = Some(stroke);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

impl SvgElement for Rect {
    fn render(&self) -> String {
        let mut attrs = format!(
            r#"x="{}" y="{}" width="{}" height="{}""#,
            format_coord(self.x),
            format_coord(self.y),
            format_coord(self.width),
            format_coord(self.height)
        );
        if self.rx > 0.0 {
            let _ = write!(attrs, r#" rx="{}""#, format_coord(self.rx));
        }
        let _ = write!(attrs, r#" fill="{}""#, self.fill.to_css());
        if let Some(stroke) = &self.stroke {
            let _ = write!(attrs, r#" stroke="{}""#, stroke.to_css());
        }

        match &self.tooltip {
            Some(tooltip) => format!(
                "<rect {attrs}>\n    <title>{}</title>\n</rect>",
                html_escape(tooltip)
            ),
            None => format!("<rect {attrs}/>"),
        }
    }
}

/// Text label, styled either by CSS class or by inline attributes.
#[derive(Debug, Clone)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub class: Option<String>,
    pub anchor: TextAnchor,
    pub font_size: Option<f64>,
    pub fill: Option<ChartColor>,
}

impl Text {
    #[must_use]
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            class: None,
            anchor: TextAnchor::Start,
            font_size: None,
            fill: None,
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: ChartColor) -> Self {
        self.fill = Some(fill);
        self
    }
}

impl SvgElement for Text {
    fn render(&self) -> String {
        let mut attrs = format!(
            r#"x="{}" y="{}""#,
            format_coord(self.x),
            format_coord(self.y)
        );
        if let Some(class) = &self.class {
            let _ = write!(attrs, r#" class="{}""#, html_escape(class));
        }
        if self.anchor != TextAnchor::Start {
            let _ = write!(attrs, r#" text-anchor="{}""#, self.anchor);
        }
        if let Some(size) = self.font_size {
            let _ = write!(attrs, r#" font-size="{}""#, format_coord(size));
        }
        if let Some(fill) = &self.fill {
            let _ = write!(attrs, r#" fill="{}""#, fill.to_css());
        }
        format!("<text {attrs}>{}</text>", html_escape(&self.content))
    }
}

/// A `<g>` wrapper with a class, holding pre-rendered children.
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub class: String,
    pub children: Vec<String>,
}

impl Group {
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn push<E: SvgElement>(mut self, element: &E) -> Self {
        self.children.push(element.render());
        self
    }
}

impl SvgElement for Group {
    fn render(&self) -> String {
        let mut output = String::new();
        let _ = writeln!(output, r#"<g class="{}">"#, html_escape(&self.class));
        for child in &self.children {
            for line in child.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }
        output.push_str("</g>");
        output
    }
}

/// One wedge of a pie chart.
///
/// Angles are in degrees, measured counter-clockwise from the positive x axis
/// as seen on screen; the wedge spans `start_angle..start_angle + sweep`.
#[derive(Debug, Clone)]
pub struct Slice {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
    pub fill: ChartColor,
    pub label: String,
}

impl Slice {
    /// Point on the circle of radius `r` at `angle` degrees.
    #[must_use]
    pub fn point_at(&self, angle: f64, r: f64) -> (f64, f64) {
        let rad = angle * PI / 180.0;
        (r.mul_add(rad.cos(), self.cx), r.mul_add(-rad.sin(), self.cy))
    }

    /// Angle halfway through the wedge, where its labels are placed.
    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        self.sweep.mul_add(0.5, self.start_angle)
    }

    fn is_full_circle(&self) -> bool {
        self.sweep >= 360.0 - 1e-9
    }
}

impl SvgElement for Slice {
    fn render(&self) -> String {
        let fill = self.fill.to_css();
        let title = html_escape(&self.label);

        if self.is_full_circle() {
            return format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{fill}\" stroke=\"#ffffff\">\n    <title>{title}</title>\n</circle>",
                format_coord(self.cx),
                format_coord(self.cy),
                format_coord(self.radius)
            );
        }

        let (x0, y0) = self.point_at(self.start_angle, self.radius);
        let (x1, y1) = self.point_at(self.start_angle + self.sweep, self.radius);
        let large_arc = u8::from(self.sweep > 180.0);
        let r = format_coord(self.radius);

        // sweep-flag 0: counter-clockwise on screen
        format!(
            "<path d=\"M{},{} L{},{} A{r},{r} 0 {large_arc} 0 {},{} Z\" fill=\"{fill}\" stroke=\"#ffffff\">\n    <title>{title}</title>\n</path>",
            format_coord(self.cx),
            format_coord(self.cy),
            format_coord(x0),
            format_coord(y0),
            format_coord(x1),
            format_coord(y1)
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
