use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{ChartConfig, PolicyKind};

use super::totals::LanguageTotals;

/// Label of the bucket that collects languages below the threshold.
pub const OTHER_LABEL: &str = "Other";

/// Language name → percentage of the grand total, in iteration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ratios(IndexMap<String, f64>);

impl Ratios {
    /// Percentage share of every language: `bytes / grand_total * 100`.
    ///
    /// Returns an empty mapping when the grand total is zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Byte counts stay far below 2^52
    pub fn from_totals(totals: &LanguageTotals) -> Self {
        let grand_total = totals.total_bytes();
        if grand_total == 0 {
            return Self::default();
        }

        totals
            .iter()
            .map(|(language, bytes)| (language, bytes as f64 / grand_total as f64 * 100.0))
            .collect()
    }

    #[must_use]
    pub fn get(&self, language: &str) -> Option<f64> {
        self.0.get(language).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Keep languages at or above `min_percent` in their current order and merge
    /// the rest into a trailing [`OTHER_LABEL`] entry. The bucket is only added
    /// when it is non-zero.
    #[must_use]
    pub fn bucket_below(&self, min_percent: f64) -> Self {
        let mut major = IndexMap::new();
        let mut other = 0.0;

        for (language, percent) in self.iter() {
            if percent >= min_percent {
                major.insert(language.to_string(), percent);
            } else {
                other += percent;
            }
        }

        if other > 0.0 {
            *major.entry(OTHER_LABEL.to_string()).or_insert(0.0) += other;
        }

        Self(major)
    }

    /// The `n` largest languages in descending order. Equal percentages keep
    /// their current relative order; the remainder is dropped.
    #[must_use]
    pub fn top(&self, n: usize) -> Self {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.into_iter().take(n).collect()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Ratios {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Reduction applied to the ratio mapping before rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatioPolicy {
    Threshold { min_percent: f64 },
    TopN { n: usize },
}

impl RatioPolicy {
    #[must_use]
    pub fn from_config(chart: &ChartConfig) -> Self {
        match chart.effective_policy() {
            PolicyKind::Threshold => Self::Threshold {
                min_percent: chart.min_percent,
            },
            PolicyKind::TopN => Self::TopN { n: chart.top_n },
        }
    }

    #[must_use]
    pub fn apply(&self, ratios: &Ratios) -> Ratios {
        match *self {
            Self::Threshold { min_percent } => ratios.bucket_below(min_percent),
            Self::TopN { n } => ratios.top(n),
        }
    }
}

#[cfg(test)]
#[path = "ratio_tests.rs"]
mod tests;
