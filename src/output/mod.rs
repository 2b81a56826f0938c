mod chart;
mod error_output;
mod progress;
mod summary;
pub mod svg;

pub use chart::{ChartRenderer, renderer_for, write_chart};
pub use error_output::{ColorMode, ErrorOutput};
pub use progress::FetchProgress;
pub use summary::{
    LanguageRow, LanguageSummary, SummaryFormat, SummaryFormatter, SummaryJsonFormatter,
    SummaryTextFormatter, formatter_for,
};
