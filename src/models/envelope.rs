use serde::Serialize;
use serde_json::Value;

/// Fixed identifier carried on every response.
pub const OFFICIAL_EMAIL: &str = "ops@bfhl.example.com";

/// Uniform response wrapper. Every path through the service — success,
/// validation failure, 404, 500 — produces this shape, so callers can
/// branch on `is_success` alone.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub is_success: bool,
    pub official_email: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    pub fn success(data: Value) -> Self {
        Self {
            is_success: true,
            official_email: OFFICIAL_EMAIL,
            data: Some(data),
        }
    }

    /// Success with no payload (the health response).
    pub fn success_empty() -> Self {
        Self {
            is_success: true,
            official_email: OFFICIAL_EMAIL,
            data: None,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            is_success: false,
            official_email: OFFICIAL_EMAIL,
            data: Some(Value::String(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_carries_data() {
        let body = serde_json::to_value(Envelope::success(json!([1, 2, 3]))).unwrap();
        assert_eq!(body["is_success"], json!(true));
        assert_eq!(body["official_email"], json!(OFFICIAL_EMAIL));
        assert_eq!(body["data"], json!([1, 2, 3]));
    }

    #[test]
    fn empty_success_omits_data() {
        let body = serde_json::to_value(Envelope::success_empty()).unwrap();
        assert_eq!(body["is_success"], json!(true));
        assert!(body.get("data").is_none());
    }

    #[test]
    fn failure_puts_message_in_data() {
        let body = serde_json::to_value(Envelope::failure("Invalid key".to_string())).unwrap();
        assert_eq!(body["is_success"], json!(false));
        assert_eq!(body["data"], json!("Invalid key"));
    }
}
