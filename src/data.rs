use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::common::{LOGIN, PASSWORD};
use crate::error::NetworkError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

impl LoginRequest {
    /// The only credentials the probe ever sends.
    pub fn fixed() -> Self {
        Self {
            login: LOGIN.to_string(),
            password: PASSWORD.to_string(),
        }
    }
}

/// Whatever the server answered with. The body is not guaranteed to be JSON,
/// so the raw text is kept next to the parsed value.
#[derive(Debug, Clone)]
pub struct ResponseBody {
    pub raw: String,
    pub json: Option<Value>,
}

impl ResponseBody {
    pub fn new(raw: String) -> Self {
        let json = serde_json::from_str(&raw).ok();
        Self { raw, json }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.json.as_ref().and_then(|v| v.get(name))
    }

    /// The whole body as a value, falling back to the raw text.
    pub fn whole(&self) -> Value {
        match &self.json {
            Some(v) => v.clone(),
            None => Value::String(self.raw.clone()),
        }
    }

    /// `message` when the server set a meaningful one, else the entire body.
    pub fn message_or_body(&self) -> Value {
        match self.field("message") {
            Some(m) if is_truthy(m) => m.clone(),
            _ => self.whole(),
        }
    }
}

/// Loose truthiness: null, false, zero and "" count as absent.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Strings print bare, everything else as compact JSON.
pub fn render(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSummary {
    pub status: u16,
    pub message: Value,
    pub user: Value,
    pub token_present: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Success(LoginSummary),
    ServerError { status: u16, message: Value },
    NetworkError(NetworkError),
}

impl LoginOutcome {
    pub fn from_response(status: StatusCode, body: ResponseBody) -> Self {
        if status.is_success() {
            LoginOutcome::Success(LoginSummary {
                status: status.as_u16(),
                message: body.field("message").cloned().unwrap_or(Value::Null),
                user: body.field("user").cloned().unwrap_or(Value::Null),
                token_present: body.field("token").is_some_and(is_truthy),
            })
        } else {
            LoginOutcome::ServerError {
                status: status.as_u16(),
                message: body.message_or_body(),
            }
        }
    }
}

impl From<NetworkError> for LoginOutcome {
    fn from(err: NetworkError) -> Self {
        LoginOutcome::NetworkError(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn fixed_request_serializes_to_the_expected_body() {
        let body = serde_json::to_value(LoginRequest::fixed()).unwrap();
        assert_eq!(
            body,
            json!({ "login": "admin@example.com", "password": "admin123" })
        );
    }

    #[test]
    fn success_summarizes_without_leaking_the_token() {
        let body = ResponseBody::new(
            r#"{"message":"Login successful","user":{"username":"admin"},"token":"eyJ"}"#.into(),
        );
        let outcome = LoginOutcome::from_response(StatusCode::OK, body);
        let LoginOutcome::Success(summary) = outcome else {
            panic!("expected success, got {:?}", outcome);
        };
        assert_eq!(summary.status, 200);
        assert_eq!(summary.message, json!("Login successful"));
        assert_eq!(summary.user, json!({ "username": "admin" }));
        assert!(summary.token_present);

        let shown = serde_json::to_string(&summary).unwrap();
        assert!(!shown.contains("eyJ"));
        assert!(shown.contains("\"tokenPresent\":true"));
    }

    #[test]
    fn success_with_empty_body() {
        let outcome =
            LoginOutcome::from_response(StatusCode::CREATED, ResponseBody::new(String::new()));
        assert_eq!(
            outcome,
            LoginOutcome::Success(LoginSummary {
                status: 201,
                message: Value::Null,
                user: Value::Null,
                token_present: false,
            })
        );
    }

    #[test]
    fn empty_token_is_not_present() {
        let body = ResponseBody::new(r#"{"token":""}"#.into());
        let LoginOutcome::Success(summary) = LoginOutcome::from_response(StatusCode::OK, body)
        else {
            panic!("expected success");
        };
        assert!(!summary.token_present);
    }

    #[test]
    fn server_error_prefers_message() {
        let body = ResponseBody::new(r#"{"message":"Invalid credentials"}"#.into());
        assert_eq!(
            LoginOutcome::from_response(StatusCode::UNAUTHORIZED, body),
            LoginOutcome::ServerError {
                status: 401,
                message: json!("Invalid credentials"),
            }
        );
    }

    #[test]
    fn server_error_falls_back_to_whole_body() {
        let body = ResponseBody::new(r#"{"error":"boom"}"#.into());
        assert_eq!(body.message_or_body(), json!({ "error": "boom" }));

        let body = ResponseBody::new(r#"{"message":"","code":7}"#.into());
        assert_eq!(body.message_or_body(), json!({ "message": "", "code": 7 }));

        let body = ResponseBody::new("<html>Bad Gateway</html>".into());
        assert_eq!(body.message_or_body(), json!("<html>Bad Gateway</html>"));
    }

    #[test]
    fn truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(1.5)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn render_strings_bare() {
        assert_eq!(render(&json!("Invalid credentials")), "Invalid credentials");
        assert_eq!(render(&json!({ "a": 1 })), r#"{"a":1}"#);
    }
}
