//! Mutation outcomes and the admin alert channel.
//!
//! Backend actions answer with an [`ActionResponse`]. Callers turn the
//! outcome of a mutation into an [`AlertMessage`] and post it to an
//! [`AlertCenter`]; the mutation itself never touches the alert state.

use serde::{Deserialize, Serialize};

use crate::types::AlertMessageType;

/// Fallback shown when a product update fails outright.
pub const UPDATE_PRODUCT_FAILED: &str = "Failed to update product";
/// Fallback shown when a collection reposition fails outright.
pub const CHANGE_COLLECTION_INDEX_FAILED: &str = "Failed to change product index";

/// Result envelope returned by backend actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(rename = "type")]
    pub kind: AlertMessageType,
    #[serde(default)]
    pub message: String,
}

impl ActionResponse {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertMessageType::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertMessageType::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertMessage {
    #[serde(rename = "type")]
    pub kind: AlertMessageType,
    pub message: String,
}

impl AlertMessage {
    /// Alert for a finished mutation.
    ///
    /// A response is shown as returned; a failed call shows `fallback` as an error.
    #[must_use]
    pub fn from_outcome<E>(outcome: &Result<ActionResponse, E>, fallback: &str) -> Self {
        match outcome {
            Ok(response) => Self {
                kind: response.kind,
                message: response.message.clone(),
            },
            Err(_) => Self {
                kind: AlertMessageType::Error,
                message: fallback.to_string(),
            },
        }
    }
}

/// Holds at most one active alert.
#[derive(Debug, Clone, Default)]
pub struct AlertCenter {
    current: Option<AlertMessage>,
}

impl AlertCenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active alert.
    pub fn post(&mut self, alert: AlertMessage) {
        tracing::debug!(kind = ?alert.kind, message = %alert.message, "Alert posted");
        self.current = Some(alert);
    }

    /// Clear the active alert, returning it.
    pub fn dismiss(&mut self) -> Option<AlertMessage> {
        self.current.take()
    }

    #[must_use]
    pub const fn current(&self) -> Option<&AlertMessage> {
        self.current.as_ref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_is_shown_as_returned() {
        let outcome: Result<_, ()> = Ok(ActionResponse::success("Product updated"));
        let alert = AlertMessage::from_outcome(&outcome, UPDATE_PRODUCT_FAILED);
        assert_eq!(alert.kind, AlertMessageType::Success);
        assert_eq!(alert.message, "Product updated");
    }

    #[test]
    fn test_error_response_keeps_backend_message() {
        let outcome: Result<_, ()> = Ok(ActionResponse::error("Index already taken"));
        let alert = AlertMessage::from_outcome(&outcome, CHANGE_COLLECTION_INDEX_FAILED);
        assert_eq!(alert.kind, AlertMessageType::Error);
        assert_eq!(alert.message, "Index already taken");
    }

    #[test]
    fn test_failed_call_uses_fallback() {
        let outcome: Result<ActionResponse, &str> = Err("connection reset");
        let alert = AlertMessage::from_outcome(&outcome, CHANGE_COLLECTION_INDEX_FAILED);
        assert_eq!(alert.kind, AlertMessageType::Error);
        assert_eq!(alert.message, "Failed to change product index");
    }

    #[test]
    fn test_center_post_and_dismiss() {
        let mut center = AlertCenter::new();
        assert!(center.current().is_none());

        center.post(AlertMessage {
            kind: AlertMessageType::Neutral,
            message: "Saving".to_string(),
        });
        center.post(AlertMessage {
            kind: AlertMessageType::Success,
            message: "Saved".to_string(),
        });
        assert_eq!(center.current().unwrap().message, "Saved");

        assert!(center.dismiss().is_some());
        assert!(center.current().is_none());
    }

    #[test]
    fn test_action_response_wire_format() {
        let response: ActionResponse =
            serde_json::from_str(r#"{"type": "SUCCESS", "message": "ok"}"#).unwrap();
        assert_eq!(response, ActionResponse::success("ok"));
    }
}
