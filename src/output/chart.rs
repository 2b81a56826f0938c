use std::fs;
use std::path::Path;

use crate::config::ChartStyle;
use crate::error::{LangStatsError, Result};
use crate::stats::Ratios;

use super::svg::{LanguageBarChart, LanguagePieChart};

/// Turns a ratio mapping into a complete SVG document.
pub trait ChartRenderer {
    fn render(&self, ratios: &Ratios) -> String;
}

impl ChartRenderer for LanguageBarChart {
    fn render(&self, ratios: &Ratios) -> String {
        self.to_svg(ratios)
    }
}

impl ChartRenderer for LanguagePieChart {
    fn render(&self, ratios: &Ratios) -> String {
        self.to_svg(ratios)
    }
}

/// Renderer for the configured chart style.
#[must_use]
pub fn renderer_for(style: ChartStyle) -> Box<dyn ChartRenderer> {
    match style {
        ChartStyle::Bar => Box::new(LanguageBarChart::new()),
        ChartStyle::Pie => Box::new(LanguagePieChart::new()),
    }
}

/// Write rendered markup verbatim to `path`, replacing any existing file.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_chart(path: &Path, svg: &str) -> Result<()> {
    fs::write(path, svg).map_err(|source| LangStatsError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = svg.len(), "wrote chart");
    Ok(())
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
