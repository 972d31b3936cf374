//! Assistant message projection into renderable fragments.
//!
//! The external renderer consumes an ordered list of fragments per
//! message; the branching over message state (tool calls present or
//! hidden, interrupts, component updates) lives here so the view layer
//! stays declarative.

use serde_json::Value;

use super::content::{content_string, latest_components, streamed_tool_calls};
use super::interrupt::{should_show_interrupt, InterruptKind};
use super::types::{ChatMessage, MessageRole, ToolCall, ToolCallStatus, UiComponentUpdate};
use crate::report::details_block;

/// Thread-level state the projection depends on.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadFlags {
    /// This message is the newest in the thread.
    pub is_last_message: bool,
    /// The thread already contains an assistant or tool message.
    pub has_ai_or_tool_messages: bool,
    /// User preference: collapse tool call display entirely.
    pub hide_tool_calls: bool,
}

/// One renderable piece of an assistant message.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageFragment {
    /// Markdown body text. Downstream, the citation collaborator scans
    /// this for citation markers.
    Markdown(String),
    /// Tool invocations to display.
    ToolCalls(Vec<ToolCall>),
    /// An interrupt requiring user attention.
    Interrupt(InterruptKind),
    /// A custom component update to mount.
    Component(UiComponentUpdate),
}

/// Project an assistant message into ordered fragments.
///
/// Tool result messages render nothing. When tool calls are hidden,
/// only interrupts and component updates remain. Complete tool calls
/// win over ones recovered from streamed blocks.
pub fn assistant_fragments(
    message: &ChatMessage,
    interrupt: Option<&Value>,
    component_updates: &[UiComponentUpdate],
    flags: ThreadFlags,
) -> Vec<MessageFragment> {
    if message.role == MessageRole::Tool {
        return Vec::new();
    }

    let interrupt_fragment = interrupt
        .filter(|_| should_show_interrupt(flags.is_last_message, flags.has_ai_or_tool_messages))
        .and_then(|value| InterruptKind::classify(value))
        .map(MessageFragment::Interrupt);
    let components = latest_components(component_updates, &message.id);

    let mut fragments = Vec::new();
    let has_tool_calls = !message.tool_calls.is_empty();

    if has_tool_calls && flags.hide_tool_calls {
        fragments.extend(interrupt_fragment);
        fragments.extend(components.into_iter().map(MessageFragment::Component));
        return fragments;
    }

    if has_tool_calls {
        fragments.push(MessageFragment::ToolCalls(displayed_tool_calls(message)));
        fragments.extend(interrupt_fragment);
        fragments.extend(components.into_iter().map(MessageFragment::Component));
        return fragments;
    }

    let text = content_string(&message.content);
    if !text.is_empty() {
        fragments.push(MessageFragment::Markdown(text));
    }
    fragments.extend(components.into_iter().map(MessageFragment::Component));
    fragments.extend(interrupt_fragment);
    fragments
}

/// Prefer complete tool calls with arguments; fall back to calls
/// recovered from streamed content blocks.
fn displayed_tool_calls(message: &ChatMessage) -> Vec<ToolCall> {
    if message.tool_calls.iter().any(ToolCall::has_args) {
        return message.tool_calls.clone();
    }
    let streamed = streamed_tool_calls(&message.content);
    if streamed.is_empty() {
        message.tool_calls.clone()
    } else {
        streamed
    }
}

/// Render one tool call as a collapsible markdown block with a status
/// label, pretty-printed parameters and the result or error.
pub fn tool_call_markdown(
    call: &ToolCall,
    status: ToolCallStatus,
    result: Option<&str>,
) -> String {
    let mut body = String::new();

    if call.has_args() {
        let params = serde_json::to_string_pretty(&call.args)
            .unwrap_or_else(|_| call.args.to_string());
        body.push_str(&format!("**Parameters**\n\n```json\n{}\n```", params));
    }

    if let Some(result) = result {
        let heading = if status == ToolCallStatus::OutputError {
            "Error"
        } else {
            "Result"
        };
        if !body.is_empty() {
            body.push_str("\n\n");
        }
        match serde_json::from_str::<Value>(result) {
            Ok(value) if value.is_object() || value.is_array() => {
                let pretty = serde_json::to_string_pretty(&value)
                    .unwrap_or_else(|_| value.to_string());
                body.push_str(&format!("**{}**\n\n```json\n{}\n```", heading, pretty));
            }
            _ => {
                body.push_str(&format!("**{}**\n\n{}", heading, result));
            }
        }
    }

    let summary = format!("{} [{}]", call.name, status.label());
    if body.is_empty() {
        format!("**{}**", summary)
    } else {
        details_block(&summary, &body)
    }
}
