//! Classification of interrupt payloads raised by the chat graph.
//!
//! Interrupt values arrive untyped; the UI routes them to one of three
//! views by probing their structure. The probes are collected here so
//! every call site dispatches on the same tagged result.

use serde_json::Value;

/// The interrupt shapes the UI can route.
#[derive(Debug, Clone, PartialEq)]
pub enum InterruptKind {
    /// Agent-inbox action requests (approve, edit, respond).
    AgentInbox(Value),
    /// A scanner approval request.
    ScannerApproval(Value),
    /// Anything else renders in the generic interrupt view.
    Generic(Value),
}

impl InterruptKind {
    /// Classify an untyped interrupt payload.
    ///
    /// Returns `None` for null payloads: there is nothing to show.
    pub fn classify(value: &Value) -> Option<InterruptKind> {
        if value.is_null() {
            return None;
        }
        if is_agent_inbox(value) {
            return Some(InterruptKind::AgentInbox(value.clone()));
        }
        if is_scanner_approval(value) {
            return Some(InterruptKind::ScannerApproval(value.clone()));
        }
        Some(InterruptKind::Generic(value.clone()))
    }
}

/// Agent-inbox interrupts are arrays of requests carrying an
/// `action_request` object.
fn is_agent_inbox(value: &Value) -> bool {
    let Some(items) = value.as_array() else {
        return false;
    };
    let Some(first) = items.first() else {
        return false;
    };
    first.get("action_request").is_some_and(Value::is_object)
}

/// Scanner approvals are tagged objects.
fn is_scanner_approval(value: &Value) -> bool {
    value.get("type").and_then(Value::as_str) == Some("scanner_approval")
}

/// An interrupt is only surfaced on the newest message, or before any
/// assistant or tool message has arrived.
pub fn should_show_interrupt(is_last_message: bool, has_ai_or_tool_messages: bool) -> bool {
    is_last_message || !has_ai_or_tool_messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_null_is_none() {
        assert_eq!(InterruptKind::classify(&Value::Null), None);
    }

    #[test]
    fn test_classify_agent_inbox_shape() {
        let value = json!([{
            "action_request": {"action": "write_file", "args": {"path": "x"}},
            "config": {"allow_accept": true},
            "description": "Approve this write"
        }]);
        assert_eq!(
            InterruptKind::classify(&value),
            Some(InterruptKind::AgentInbox(value.clone()))
        );
    }

    #[test]
    fn test_classify_scanner_approval_tag() {
        let value = json!({"type": "scanner_approval", "scan_id": "s-1"});
        assert_eq!(
            InterruptKind::classify(&value),
            Some(InterruptKind::ScannerApproval(value.clone()))
        );
    }

    #[test]
    fn test_classify_fallback_generic() {
        let value = json!({"question": "Continue?"});
        assert_eq!(
            InterruptKind::classify(&value),
            Some(InterruptKind::Generic(value.clone()))
        );

        let list = json!(["plain", "strings"]);
        assert_eq!(
            InterruptKind::classify(&list),
            Some(InterruptKind::Generic(list.clone()))
        );
    }

    #[test]
    fn test_should_show_interrupt_gating() {
        assert!(should_show_interrupt(true, true));
        assert!(should_show_interrupt(false, false));
        assert!(!should_show_interrupt(false, true));
    }
}
