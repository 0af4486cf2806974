//! Form field values, including the absent (undefined) case

use serde_json::Value;
use std::borrow::Cow;

/// A raw form field value as handed over by form-handling code.
///
/// `Undefined` is a field that was never sent, `Null` one that was sent
/// explicitly empty. The two are kept apart because callers treat them
/// differently.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    #[default]
    Undefined,
    Null,
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    /// Arrays and objects
    Nested(Value),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, FieldValue::Undefined)
    }

    /// Null or undefined
    pub fn is_absent(&self) -> bool {
        self.is_null() || self.is_undefined()
    }

    /// String form used by the string validators, if the value has one.
    ///
    /// Numbers render the way they were written (`42`, `1.5`); booleans and
    /// nested values have no string form.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
            FieldValue::Number(n) => Some(Cow::Owned(n.to_string())),
            _ => None,
        }
    }

    /// Look up `field` in a JSON object; a missing key is `Undefined`
    pub fn from_field(data: &serde_json::Map<String, Value>, field: &str) -> Self {
        data.get(field).map_or(FieldValue::Undefined, FieldValue::from)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::String(s) => FieldValue::Text(s),
            Value::Number(n) => FieldValue::Number(n),
            Value::Bool(b) => FieldValue::Bool(b),
            nested @ (Value::Array(_) | Value::Object(_)) => FieldValue::Nested(nested),
        }
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        Self::from(value.clone())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// `None` maps to `Null`: an `Option` field exists but holds nothing
impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_values() {
        assert_eq!(FieldValue::from(json!(null)), FieldValue::Null);
        assert_eq!(FieldValue::from(json!("abc")), FieldValue::Text("abc".into()));
        assert_eq!(FieldValue::from(json!(true)), FieldValue::Bool(true));
        assert!(matches!(FieldValue::from(json!([1, 2])), FieldValue::Nested(_)));
        assert!(matches!(FieldValue::from(json!({"a": 1})), FieldValue::Nested(_)));
    }

    #[test]
    fn test_missing_field_is_undefined() {
        let data = json!({"name": "Ana", "phone": null});
        let map = data.as_object().unwrap();

        assert_eq!(FieldValue::from_field(map, "email"), FieldValue::Undefined);
        assert_eq!(FieldValue::from_field(map, "phone"), FieldValue::Null);
        assert_eq!(FieldValue::from_field(map, "name"), FieldValue::Text("Ana".into()));
    }

    #[test]
    fn test_option_conversion() {
        let none: Option<&str> = None;
        assert_eq!(FieldValue::from(none), FieldValue::Null);
        assert_eq!(FieldValue::from(Some("x")), FieldValue::Text("x".into()));
    }

    #[test]
    fn test_as_text() {
        assert_eq!(FieldValue::from(42i64).as_text().as_deref(), Some("42"));
        assert_eq!(FieldValue::from(json!(1.5)).as_text().as_deref(), Some("1.5"));
        assert_eq!(FieldValue::from("007").as_text().as_deref(), Some("007"));
        assert!(FieldValue::Bool(false).as_text().is_none());
        assert!(FieldValue::Null.as_text().is_none());
    }
}
