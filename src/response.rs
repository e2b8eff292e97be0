// Response envelope shared by all endpoints

use serde::Serialize;

/// Envelope wrapping every response body.
///
/// Success bodies carry `data` (and sometimes `message`); error bodies carry
/// `error`. Absent fields are omitted from the JSON entirely.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success envelope with a data payload.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
        }
    }

    /// Success envelope with a message and a data payload.
    pub fn with_message(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope with a message only.
    pub fn message(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            data: None,
            error: None,
        }
    }

    /// Error envelope with a client-facing message.
    pub fn error(error: &str) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_envelope_omits_absent_fields() {
        let json = serde_json::to_string(&ApiResponse::data(vec![1, 2])).unwrap();
        assert_eq!(json, r#"{"success":true,"data":[1,2]}"#);
    }

    #[test]
    fn error_envelope_carries_only_the_error() {
        let json = serde_json::to_string(&ApiResponse::error("Todo not found")).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"Todo not found"}"#);
    }
}
