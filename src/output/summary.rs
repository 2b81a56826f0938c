use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::stats::{LanguageTotals, OTHER_LABEL, Ratios};

/// Output format of the `summary` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageRow {
    pub language: String,
    pub bytes: u64,
    pub percent: f64,
}

/// Reduced language table together with the totals it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageSummary {
    pub repositories: usize,
    pub total_bytes: u64,
    pub languages: Vec<LanguageRow>,
}

impl LanguageSummary {
    /// Pair every entry of `ratios` with its byte count.
    ///
    /// When `ratios` still covers the whole total (threshold bucketing), the
    /// [`OTHER_LABEL`] row gets every byte not claimed by the other rows, which
    /// includes a real language called "Other" that absorbed the bucket. A
    /// truncated mapping (top-N) has no bucket, so "Other" keeps its own bytes.
    #[must_use]
    pub fn new(totals: &LanguageTotals, ratios: &Ratios) -> Self {
        let total_bytes = totals.total_bytes();
        let claimed: u64 = ratios
            .iter()
            .filter(|(language, _)| *language != OTHER_LABEL)
            .map(|(language, _)| totals.get(language))
            .sum();
        let covers_total = (ratios.sum() - 100.0).abs() < 0.01;

        let languages = ratios
            .iter()
            .map(|(language, percent)| {
                let bytes = if language == OTHER_LABEL && covers_total {
                    total_bytes.saturating_sub(claimed)
                } else {
                    totals.get(language)
                };
                LanguageRow {
                    language: language.to_string(),
                    bytes,
                    percent,
                }
            })
            .collect();

        Self {
            repositories: totals.repositories(),
            total_bytes,
            languages,
        }
    }
}

/// Trait for formatting a language summary into an output format.
pub trait SummaryFormatter {
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, summary: &LanguageSummary) -> Result<String>;
}

#[derive(Debug, Default)]
pub struct SummaryTextFormatter;

impl SummaryFormatter for SummaryTextFormatter {
    fn format(&self, summary: &LanguageSummary) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(output, "Repositories: {}", summary.repositories);
        let _ = writeln!(output, "Total bytes: {}", summary.total_bytes);
        let _ = writeln!(output);

        let name_width = summary
            .languages
            .iter()
            .map(|row| row.language.chars().count())
            .max()
            .unwrap_or(0)
            .max("Language".len());

        let _ = writeln!(output, "{:<name_width$}  {:>8}  {:>12}", "Language", "Percent", "Bytes");
        for row in &summary.languages {
            let _ = writeln!(
                output,
                "{:<name_width$}  {:>7.2}%  {:>12}",
                row.language, row.percent, row.bytes
            );
        }

        Ok(output)
    }
}

#[derive(Debug, Default)]
pub struct SummaryJsonFormatter;

impl SummaryFormatter for SummaryJsonFormatter {
    fn format(&self, summary: &LanguageSummary) -> Result<String> {
        let mut json = serde_json::to_string_pretty(summary)?;
        json.push('\n');
        Ok(json)
    }
}

#[must_use]
pub fn formatter_for(format: SummaryFormat) -> Box<dyn SummaryFormatter> {
    match format {
        SummaryFormat::Text => Box::new(SummaryTextFormatter),
        SummaryFormat::Json => Box::new(SummaryJsonFormatter),
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
