//! Bridge Protocol Types
//!
//! Wire shape of the commands and replies. Field names are camelCase so
//! JavaScript callers can build them directly.

use serde::{Deserialize, Serialize};

/// Request ID - chosen by the caller, echoed back
///
/// Sent as `requestId` since element commands already use `id`.
pub type RequestId = u64;

/// One registry operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Command {
    CreateElement {
        id: String,
    },
    SetAttribute {
        id: String,
        key: String,
        value: String,
    },
    GetAttribute {
        id: String,
        key: String,
    },
    AppendChild {
        #[serde(rename = "parentId")]
        parent_id: String,
        #[serde(rename = "childId")]
        child_id: String,
    },
    FirstChild {
        #[serde(rename = "parentId")]
        parent_id: String,
    },
    Clear,
    ElementCount,
}

/// Outcome of a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Reply {
    /// Mutations, including ones that were ignored
    Done,
    /// String queries, empty when nothing was found
    Value { value: String },
    Count { count: usize },
}

/// Command sent to the bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(rename = "requestId", default)]
    pub request_id: RequestId,
    #[serde(flatten)]
    pub command: Command,
}

/// Reply sent back, matched to its request by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "requestId")]
    pub request_id: RequestId,
    #[serde(flatten)]
    pub reply: Reply,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request: Request = serde_json::from_str(
            r#"{"requestId":7,"op":"appendChild","parentId":"a","childId":"b"}"#,
        )
        .unwrap();

        assert_eq!(request.request_id, 7);
        assert_eq!(
            request.command,
            Command::AppendChild {
                parent_id: "a".to_string(),
                child_id: "b".to_string(),
            }
        );
    }

    #[test]
    fn test_unit_command_without_id() {
        let request: Request = serde_json::from_str(r#"{"op":"clear"}"#).unwrap();
        assert_eq!(request.request_id, 0);
        assert_eq!(request.command, Command::Clear);
    }

    #[test]
    fn test_create_element_keeps_element_id() {
        let request: Request =
            serde_json::from_str(r#"{"requestId":2,"op":"createElement","id":"node-1"}"#)
                .unwrap();

        assert_eq!(
            request.command,
            Command::CreateElement {
                id: "node-1".to_string()
            }
        );
    }

    #[test]
    fn test_response_wire_shape() {
        let response = Response {
            request_id: 3,
            reply: Reply::Value {
                value: "b".to_string(),
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"requestId": 3, "kind": "value", "value": "b"})
        );
    }

    #[test]
    fn test_unknown_op_rejected() {
        let result: std::result::Result<Request, _> =
            serde_json::from_str(r#"{"requestId":1,"op":"removeElement","id":"x"}"#);
        assert!(result.is_err());
    }
}
