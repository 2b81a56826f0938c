//! SVG chart generation for language statistics.
//!
//! Documents are assembled as plain markup from a few primitives
//! ([`Rect`], [`Text`], [`Group`], [`Slice`]) by [`SvgBuilder`], which also
//! sets the pixel size so the file renders standalone.

mod bar;
mod builder;
mod element;
mod format;
mod pie;
mod style;

pub use bar::LanguageBarChart;
pub use builder::SvgBuilder;
pub use element::{Group, Rect, Slice, SvgElement, Text};
pub use format::{format_coord, format_percent, html_escape};
pub use pie::LanguagePieChart;
pub use style::{ChartColor, PALETTE, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
