//! Chat message rendering support.
//!
//! The streaming SDK delivers untyped messages, interrupts and UI
//! component updates; this module projects them into the fragments the
//! view layer renders:
//!
//! - [`ChatMessage`] and content block types mirroring the wire format
//! - content projections: text flattening, partial-JSON tool call
//!   recovery, component update dedup
//! - [`InterruptKind`]: structural classification of interrupt payloads
//! - [`assistant_fragments`]: the per-message display branching
//!
//! The actual visual rendering (markdown to HTML, widgets, styling)
//! belongs to external collaborators.

mod content;
mod interrupt;
mod types;
mod view;

pub use content::{content_string, latest_components, parse_partial_json, streamed_tool_calls};
pub use interrupt::{should_show_interrupt, InterruptKind};
pub use types::{
    ChatMessage, ContentBlock, MessageContent, MessageRole, ToolCall, ToolCallStatus,
    UiComponentUpdate,
};
pub use view::{assistant_fragments, tool_call_markdown, MessageFragment, ThreadFlags};
