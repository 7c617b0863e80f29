use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Success envelope used by the JSON API: a message plus any named payload
/// fields, e.g. {"message": "...", "data": {...}} or
/// {"message": "...", "entries": [...]}.
#[derive(Debug)]
pub struct ApiResponse {
    message: String,
    fields: Map<String, Value>,
    serialization_failed: bool,
}

impl ApiResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: Map::new(),
            serialization_failed: false,
        }
    }

    /// Attach a named payload field to the envelope
    pub fn with(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        match serde_json::to_value(&value) {
            Ok(value) => {
                self.fields.insert(key.into(), value);
            }
            Err(e) => {
                tracing::error!("Failed to serialize response field: {}", e);
                self.serialization_failed = true;
            }
        }
        self
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        if self.serialization_failed {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": true,
                    "message": "Failed to format response",
                    "code": "INTERNAL_SERVER_ERROR"
                })),
            )
                .into_response();
        }

        let mut body = Map::new();
        body.insert("message".to_string(), Value::String(self.message));
        for (k, v) in self.fields {
            body.insert(k, v);
        }

        (StatusCode::OK, Json(Value::Object(body))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_merges_message_and_fields() {
        let res = ApiResponse::new("Saved").with("data", json!({"id": 1}));
        assert_eq!(res.message, "Saved");
        assert_eq!(res.fields["data"]["id"], 1);
        assert!(!res.serialization_failed);
    }
}
