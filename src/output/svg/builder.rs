//! SVG document builder for standalone chart files.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::{format_coord, html_escape};

/// Builder for a standalone SVG document with explicit pixel size.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    stylesheet: String,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            stylesheet: String::new(),
            elements: Vec::new(),
        }
    }

    /// Accessible title (`<title>`), not drawn on the canvas.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Embedded CSS, emitted inside a `<style>` element.
    #[must_use]
    pub fn with_stylesheet(mut self, css: impl Into<String>) -> Self {
        self.stylesheet = css.into();
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();
        let width = format_coord(self.width);
        let height = format_coord(self.height);

        let _ = writeln!(
            output,
            r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg" role="img">"#
        );

        if !self.title.is_empty() {
            let escaped = html_escape(&self.title);
            let _ = writeln!(output, r"    <title>{escaped}</title>");
        }

        if !self.stylesheet.is_empty() {
            let _ = writeln!(output, "    <style>");
            for line in self.stylesheet.lines() {
                let _ = writeln!(output, "        {line}");
            }
            let _ = writeln!(output, "    </style>");
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>\n");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
