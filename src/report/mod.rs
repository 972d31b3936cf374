//! Stock analysis report rendering.
//!
//! This module turns a [`StockAnalysis`] document into markdown for an
//! external markdown renderer (one that understands the collapsible
//! `<details>`/`<summary>` extension).
//!
//! ## Key Components
//!
//! - [`Section`] and friends: the report data model, with the
//!   polymorphic wire `sources` field resolved into the tagged
//!   [`Sources`] enum at deserialization time
//! - [`SectionFormatter`]: one section into markdown fragments with a
//!   stable anchor id
//! - [`news_sources_markdown`]: structured rendering for news articles
//!   with sentiment metadata
//! - [`ReportRenderer`]: chat and report view assembly, including the
//!   trailing references block and the section filter
//!
//! ## Usage
//!
//! ```ignore
//! use stockbrief::report::{ReportOptions, ReportRenderer, StockAnalysis};
//!
//! let analysis = StockAnalysis::load("analysis.json")?;
//! let markdown = ReportRenderer::new().render_report(&analysis);
//! println!("{}", markdown);
//! ```

mod formatter;
mod news;
mod renderer;
mod types;

pub use formatter::{details_block, SectionFormatter};
pub use news::news_sources_markdown;
pub use renderer::{ReportOptions, ReportRenderer};
pub use types::{
    NewsCompany, NewsSource, Section, SectionKey, Sources, StockAnalysis,
    StockAnalysisReportData,
};

use std::path::Path;

use thiserror::Error;

/// Error type for loading analysis documents.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid analysis document: {0}")]
    Decode(#[from] serde_json::Error),
}

impl StockAnalysis {
    /// Decode an analysis document from JSON text.
    pub fn from_json(raw: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load an analysis document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let analysis = Self::from_json(&raw)?;
        tracing::debug!(ticker = %analysis.ticker, "Loaded stock analysis");
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_rejects_malformed_documents() {
        let err = StockAnalysis::from_json("{\"ticker\": 42}").unwrap_err();
        assert!(matches!(err, ReportError::Decode(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = StockAnalysis::load("/nonexistent/analysis.json").unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
