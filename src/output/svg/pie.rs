//! Pie chart of language shares with outer name labels and inner percentages.

use crate::stats::Ratios;

use super::builder::SvgBuilder;
use super::element::{Slice, Text};
use super::format::format_percent;
use super::style::{ChartColor, TextAnchor};

#[derive(Debug, Clone)]
pub struct LanguagePieChart {
    pub title: String,
    /// Square canvas edge (6in at 72dpi).
    pub size: f64,
    pub radius: f64,
    /// First slice starts here (degrees, 90 = straight up) and slices proceed
    /// counter-clockwise.
    pub start_angle: f64,
    pub label_distance: f64,
    pub percent_distance: f64,
}

impl Default for LanguagePieChart {
    fn default() -> Self {
        Self {
            title: "Programming Language Usage".to_string(),
            size: 432.0,
            radius: 135.0,
            start_angle: 90.0,
            label_distance: 1.1,
            percent_distance: 0.6,
        }
    }
}

impl LanguagePieChart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn center(&self) -> (f64, f64) {
        (self.size / 2.0, self.size / 2.0 + 16.0)
    }

    /// Build one slice per language. Sweeps are proportional to each share of
    /// the mapping's own sum, so a reduced mapping still closes the circle.
    #[must_use]
    pub fn slices(&self, ratios: &Ratios) -> Vec<Slice> {
        let sum = ratios.sum();
        if sum <= 0.0 {
            return Vec::new();
        }

        let (cx, cy) = self.center();
        let mut angle = self.start_angle;

        ratios
            .iter()
            .enumerate()
            .map(|(i, (language, percent))| {
                let sweep = percent / sum * 360.0;
                let slice = Slice {
                    cx,
                    cy,
                    radius: self.radius,
                    start_angle: angle,
                    sweep,
                    fill: ChartColor::palette(i),
                    label: format!("{language}: {}", format_percent(percent, 1)),
                };
                angle += sweep;
                slice
            })
            .collect()
    }

    #[must_use]
    pub fn to_svg(&self, ratios: &Ratios) -> String {
        let mut builder = SvgBuilder::new(self.size, self.size)
            .with_title(self.title.clone())
            .push_element(
                &Text::new(self.size / 2.0, 32.0, self.title.clone())
                    .with_anchor(TextAnchor::Middle)
                    .with_font_size(16.0)
                    .with_fill(ChartColor::hex("#24292f")),
            );

        let slices = self.slices(ratios);
        for slice in &slices {
            builder = builder.push_element(slice);
        }

        for (slice, (language, percent)) in slices.iter().zip(ratios.iter()) {
            let mid = slice.mid_angle();

            let (lx, ly) = slice.point_at(mid, self.radius * self.label_distance);
            let anchor = if lx >= slice.cx {
                TextAnchor::Start
            } else {
                TextAnchor::End
            };
            builder = builder.push_element(
                &Text::new(lx, ly + 4.0, language)
                    .with_anchor(anchor)
                    .with_font_size(12.0)
                    .with_fill(ChartColor::hex("#24292f")),
            );

            let (px, py) = slice.point_at(mid, self.radius * self.percent_distance);
            builder = builder.push_element(
                &Text::new(px, py + 4.0, format_percent(percent, 1))
                    .with_anchor(TextAnchor::Middle)
                    .with_font_size(11.0)
                    .with_fill(ChartColor::hex("#ffffff")),
            );
        }

        builder.build()
    }
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;
