//! SVG styling primitives: colors and text anchoring.

use std::fmt;

/// Categorical palette used to color pie slices, cycled in order.
pub const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Hex color specification (e.g., "#2da44e").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartColor(String);

impl ChartColor {
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self(color.to_string())
    }

    /// The `index`-th palette color, wrapping around.
    #[must_use]
    pub fn palette(index: usize) -> Self {
        Self::hex(PALETTE[index % PALETTE.len()])
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.0.clone()
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
