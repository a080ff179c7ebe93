use linked_hash_map::LinkedHashMap;
use std::fmt;


/// An ordered key/value mapping, iterated in insertion order. Key order
/// is significant: operator detection inside predicates picks the first
/// `$`-prefixed key by iteration order.
pub type Document = LinkedHashMap<String, Value>;

/// A parsed query AST node, matching the variants of the document
/// serialization. The translator reads these but never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(Number),
    String(String),
    Binary(Vec<u8>),
    Array(Vec<Value>),
    Object(Document),
}

/// A numeric AST value. Integers and doubles are kept distinct because
/// placeholder bindings accept integers but not doubles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Double(f64),
}

impl Value {
    pub fn as_object(&self) -> Option<&Document> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Double(d) => write!(f, "{}", d),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::Number(n.into()),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Number> for Number {
    fn from(n: serde_json::Number) -> Self {
        // Integers outside i64 (large u64 literals) degrade to doubles.
        match n.as_i64() {
            Some(i) => Number::Integer(i),
            None => Number::Double(n.as_f64().unwrap_or_default()),
        }
    }
}
