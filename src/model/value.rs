use serde::{Deserialize, Serialize};

/// Data types a query value can have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Boolean,
    Number,
    Text,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Boolean => "boolean",
            DataType::Number => "number",
            DataType::Text => "text",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values carried by records and produced by evaluation
///
/// Untagged so a plain JSON scalar (`true`, `42`, `"text"`) deserializes
/// directly into the matching variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Boolean(bool),
    Number(f64),
    String(String),
}

impl Value {
    /// Get the data type of this value
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Boolean(_) => DataType::Boolean,
            Value::Number(_) => DataType::Number,
            Value::String(_) => DataType::Text,
        }
    }

    /// Check if this value is compatible with the given data type
    pub fn is_compatible_with(&self, data_type: DataType) -> bool {
        self.data_type() == data_type
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type() {
        assert_eq!(Value::Boolean(true).data_type(), DataType::Boolean);
        assert_eq!(Value::Number(42.0).data_type(), DataType::Number);
        assert_eq!(
            Value::String("hello".to_string()).data_type(),
            DataType::Text
        );
    }

    #[test]
    fn test_value_compatibility() {
        assert!(Value::Boolean(true).is_compatible_with(DataType::Boolean));
        assert!(Value::Number(42.0).is_compatible_with(DataType::Number));
        assert!(Value::String("hello".to_string()).is_compatible_with(DataType::Text));

        assert!(!Value::Boolean(true).is_compatible_with(DataType::Number));
        assert!(!Value::Number(42.0).is_compatible_with(DataType::Text));
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_eq!(Value::from(42i64), Value::Number(42.0));
        assert_eq!(Value::from(1.5), Value::Number(1.5));
        assert_eq!(Value::from("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_json_round_trip() {
        let value: Value = serde_json::from_str("42").unwrap();
        assert_eq!(value, Value::Number(42.0));

        let value: Value = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(value, Value::String("hello".to_string()));

        let value: Value = serde_json::from_str("true").unwrap();
        assert_eq!(value, Value::Boolean(true));

        // Null and composites have no Value representation
        assert!(serde_json::from_str::<Value>("null").is_err());
        assert!(serde_json::from_str::<Value>("[1, 2]").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Number(35.0).to_string(), "35");
        assert_eq!(Value::Boolean(false).to_string(), "false");
        assert_eq!(Value::String("HR".to_string()).to_string(), "\"HR\"");
    }
}
