//! Stockbrief Library
//!
//! Rendering support for an AI stock-analysis chat assistant: analysis
//! reports become markdown documents, and chat messages become ordered
//! view fragments for an external renderer.
//!
//! ## Main Components
//!
//! - [`report`] - Stock analysis data model, section formatting, and
//!   report assembly (chat view, report view, references block)
//! - [`messaging`] - Chat message projection (content flattening, tool
//!   call recovery, interrupt classification)
//!
//! ## Quick Start
//!
//! ```ignore
//! use stockbrief::{ReportRenderer, StockAnalysis};
//!
//! let analysis = StockAnalysis::load("analysis.json")?;
//! let renderer = ReportRenderer::new();
//! println!("{}", renderer.render_report(&analysis));
//! ```

pub mod messaging;
pub mod report;

// Re-export commonly used types
pub use messaging::{
    assistant_fragments, ChatMessage, InterruptKind, MessageContent, MessageFragment,
    MessageRole, ThreadFlags, ToolCall, ToolCallStatus,
};
pub use report::{
    ReportError, ReportOptions, ReportRenderer, Section, SectionFormatter, SectionKey, Sources,
    StockAnalysis, StockAnalysisReportData,
};
