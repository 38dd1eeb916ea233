use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Application record as returned by `GET /apps/:app`.
///
/// Every field except `name` may be missing or `null`, and the server adds
/// fields over time, so the record keeps the raw JSON object (in server order)
/// instead of a fixed struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppRecord {
    fields: Map<String, Value>,
}

impl AppRecord {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn owner_email(&self) -> Option<&str> {
        self.str_field("owner_email")
    }

    pub fn stack(&self) -> Option<&str> {
        self.str_field("stack")
    }

    /// Raw value for `key`, including explicit nulls.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Value for `key` when it is set to something other than `null` or `false`.
    pub fn present(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|value| is_set(value))
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

pub fn is_set(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

/// Renders a JSON value the way it appears in `key=value` output.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "../../../tests/models/heroku/app_record.rs"]
mod tests;
