use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Login input. Fields that are missing or not strings are `None`.
#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginInput {
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
        Self { username: field("username"), password: field("password") }
    }
}

/// Login result: the shared static token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOutput {
    pub token: String,
}
