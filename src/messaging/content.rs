//! Projections over streamed message content.
//!
//! Pure helpers that flatten complex content into text, recover tool
//! calls from partially streamed blocks, and collapse repeated UI
//! component updates to the newest state per component.

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::types::{ContentBlock, MessageContent, ToolCall, UiComponentUpdate};

/// Flatten message content to its text, ignoring non-text blocks.
pub fn content_string(content: &MessageContent) -> String {
    match content {
        MessageContent::Text(text) => text.clone(),
        MessageContent::Blocks(blocks) => {
            let mut out = String::new();
            for block in blocks {
                if let ContentBlock::Text { text } = block {
                    out.push_str(text);
                }
            }
            out
        }
    }
}

/// Parse a possibly truncated JSON document streamed from a model.
///
/// Unterminated strings, objects and arrays are completed before
/// parsing. Returns `None` when the text cannot be coerced into JSON.
pub fn parse_partial_json(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str(trimmed) {
        return Some(value);
    }
    serde_json::from_str(&complete_json(trimmed)).ok()
}

/// Close whatever the truncation left open.
fn complete_json(text: &str) -> String {
    let mut closers = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for c in text.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => closers.push('}'),
            '[' => closers.push(']'),
            '}' | ']' => {
                closers.pop();
            }
            _ => {}
        }
    }

    let mut repaired = text.trim_end().to_string();
    if escaped {
        // Dangling escape at the cut point.
        repaired.pop();
    }
    if in_string {
        repaired.push('"');
    }
    loop {
        while repaired.ends_with(char::is_whitespace) {
            repaired.pop();
        }
        if repaired.ends_with(',') {
            repaired.pop();
        } else if repaired.ends_with(':') {
            // A key with its value cut off.
            repaired.push_str(" null");
            break;
        } else {
            break;
        }
    }
    for closer in closers.into_iter().rev() {
        repaired.push(closer);
    }
    repaired
}

/// Project streamed `tool_use` blocks into [`ToolCall`]s.
///
/// Blocks without an id are skipped. Arguments still streaming arrive
/// as partial JSON text; they are completed best-effort and fall back
/// to an empty object.
pub fn streamed_tool_calls(content: &MessageContent) -> Vec<ToolCall> {
    let MessageContent::Blocks(blocks) = content else {
        return Vec::new();
    };

    let mut calls = Vec::new();
    for block in blocks {
        let ContentBlock::ToolUse { id, name, input } = block else {
            continue;
        };
        if id.is_empty() {
            continue;
        }
        let args = match input {
            Value::String(raw) => {
                parse_partial_json(raw).unwrap_or_else(|| Value::Object(Map::new()))
            }
            Value::Null => Value::Object(Map::new()),
            other => other.clone(),
        };
        calls.push(ToolCall {
            id: id.clone(),
            name: name.clone(),
            args,
        });
    }
    calls
}

/// Keep only the newest update per component id for one message,
/// preserving the order in which components first appeared.
pub fn latest_components(
    updates: &[UiComponentUpdate],
    message_id: &str,
) -> Vec<UiComponentUpdate> {
    let mut order = Vec::new();
    let mut latest: HashMap<&str, &UiComponentUpdate> = HashMap::new();

    for update in updates {
        if update.message_id != message_id {
            continue;
        }
        if !latest.contains_key(update.id.as_str()) {
            order.push(update.id.as_str());
        }
        latest.insert(update.id.as_str(), update);
    }

    order
        .into_iter()
        .filter_map(|id| latest.get(id).copied().cloned())
        .collect()
}
