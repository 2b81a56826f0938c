//! Horizontal language bar chart: one row per language with a label, a
//! background track, a proportional fill, and a percentage.

use crate::stats::Ratios;

use super::builder::SvgBuilder;
use super::element::{Group, Rect, Text};
use super::format::format_percent;
use super::style::ChartColor;

const STYLESHEET: &str = ".title {
  font: bold 20px sans-serif;
  fill: #1f6feb;
}
.label {
  font: 14px sans-serif;
  fill: #24292f;
}
.percent {
  font: 13px monospace;
  fill: #57606a;
}";

#[derive(Debug, Clone)]
pub struct LanguageBarChart {
    pub title: String,
    pub width: f64,
    /// Canvas height before any row is added.
    pub base_height: f64,
    pub row_height: f64,
    pub first_row_y: f64,
    pub label_x: f64,
    pub track_x: f64,
    pub track_width: f64,
    pub bar_height: f64,
    pub track_color: ChartColor,
    pub fill_color: ChartColor,
}

impl Default for LanguageBarChart {
    fn default() -> Self {
        Self {
            title: "My Programming Languages".to_string(),
            width: 500.0,
            base_height: 40.0,
            row_height: 32.0,
            first_row_y: 55.0,
            label_x: 20.0,
            track_x: 140.0,
            track_width: 280.0,
            bar_height: 12.0,
            track_color: ChartColor::hex("#eaeef2"),
            fill_color: ChartColor::hex("#2da44e"),
        }
    }
}

impl LanguageBarChart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas height for `rows` languages.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Row counts are tiny
    pub fn height_for(&self, rows: usize) -> f64 {
        self.row_height.mul_add(rows as f64, self.base_height)
    }

    /// Width of the filled part of the track for a 0–100 percentage.
    #[must_use]
    pub fn filled_width(&self, percent: f64) -> f64 {
        self.track_width * percent.clamp(0.0, 100.0) / 100.0
    }

    fn row(&self, language: &str, percent: f64, y: f64) -> Group {
        let text_y = y + 10.0;
        let track = Rect::new(
            self.track_x,
            y,
            self.track_width,
            self.bar_height,
            self.track_color.clone(),
        )
        .with_radius(self.bar_height / 2.0);
        let fill = Rect::new(
            self.track_x,
            y,
            self.filled_width(percent),
            self.bar_height,
            self.fill_color.clone(),
        )
        .with_radius(self.bar_height / 2.0)
        .with_tooltip(format!("{language}: {}", format_percent(percent, 2)));

        Group::new("row")
            .push(&Text::new(self.label_x, text_y, language).with_class("label"))
            .push(&track)
            .push(&fill)
            .push(
                &Text::new(
                    self.track_x + self.track_width + 10.0,
                    text_y,
                    format_percent(percent, 2),
                )
                .with_class("percent"),
            )
    }

    /// Render `ratios` top to bottom in iteration order.
    #[must_use]
    pub fn to_svg(&self, ratios: &Ratios) -> String {
        let height = self.height_for(ratios.len());

        let background = Rect::new(0.0, 0.0, self.width, height, ChartColor::hex("#ffffff"))
            .with_radius(12.0)
            .with_stroke(ChartColor::hex("#d0d7de"));

        let mut builder = SvgBuilder::new(self.width, height)
            .with_title(self.title.clone())
            .with_stylesheet(STYLESHEET)
            .push_element(&background)
            .push_element(&Text::new(self.label_x, 30.0, self.title.clone()).with_class("title"));

        let mut y = self.first_row_y;
        for (language, percent) in ratios.iter() {
            builder = builder.push_element(&self.row(language, percent, y));
            y += self.row_height;
        }

        builder.build()
    }
}

#[cfg(test)]
#[path = "bar_tests.rs"]
mod tests;
