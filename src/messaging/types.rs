//! Chat message types as delivered by the streaming SDK.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    Human,
    Ai,
    Tool,
    System,
}

/// Message content: either a plain string or a list of typed blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Text(String::new())
    }
}

/// One block of complex message content.
///
/// Tool arguments arrive as an object once complete, or as partial
/// JSON text while still streaming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    ToolUse {
        #[serde(default)]
        id: String,
        #[serde(default)]
        name: String,
        #[serde(default)]
        input: Value,
    },
    /// Block types this UI does not render.
    #[serde(other)]
    Other,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub id: String,

    #[serde(rename = "type")]
    pub role: MessageRole,

    #[serde(default)]
    pub content: MessageContent,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
}

impl ChatMessage {
    /// Create a human message with plain text content.
    pub fn human(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: MessageRole::Human,
            content: MessageContent::Text(text.into()),
            tool_calls: vec![],
        }
    }

    /// Create an assistant message with plain text content.
    pub fn ai(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: MessageRole::Ai,
            content: MessageContent::Text(text.into()),
            tool_calls: vec![],
        }
    }
}

/// A parsed tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

impl ToolCall {
    /// True when the call carries at least one argument.
    pub fn has_args(&self) -> bool {
        self.args.as_object().is_some_and(|map| !map.is_empty())
    }
}

/// Lifecycle of a rendered tool call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolCallStatus {
    InputStreaming,
    InputAvailable,
    OutputAvailable,
    OutputError,
}

impl ToolCallStatus {
    /// Badge label shown next to the tool name.
    pub fn label(&self) -> &'static str {
        match self {
            ToolCallStatus::InputStreaming => "Pending",
            ToolCallStatus::InputAvailable => "Running",
            ToolCallStatus::OutputAvailable => "Completed",
            ToolCallStatus::OutputError => "Error",
        }
    }
}

/// One update for an externally loaded UI component.
///
/// The backend re-emits a component with the same id as its state
/// evolves; only the newest update per id should be mounted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiComponentUpdate {
    pub id: String,
    #[serde(default)]
    pub message_id: String,
    #[serde(default)]
    pub payload: Value,
}
