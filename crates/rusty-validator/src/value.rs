// File: src/value.rs
// Purpose: Dynamic field values and their coercion rules

use rusty_validator_core::{is_numeric, parse_numeric};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A field value as handed over by the host application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
}

impl Value {
    /// Whether the value counts as empty
    ///
    /// Empty values are: null, `""`, `"0"`, `false`, `0`, `0.0` and an empty
    /// array. Whitespace-only strings are not empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !*b,
            Value::Int(n) => *n == 0,
            Value::Float(n) => *n == 0.0,
            Value::String(s) => s.is_empty() || s == "0",
            Value::Array(items) => items.is_empty(),
        }
    }

    /// Numeric reading of the value, if it has one
    ///
    /// Integers and floats are always numeric; strings are numeric when they
    /// hold a decimal literal. Booleans, null and arrays never are.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::String(s) => parse_numeric(s),
            _ => None,
        }
    }

    /// Exact integer reading: integers, and strings holding a plain integer
    /// literal that fits in an `i64`
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::String(s) if is_numeric(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Type-coercing comparison
    ///
    /// - A boolean on either side compares against the other side's
    ///   truthiness (`0` equals `false`, `"yes"` equals `true`).
    /// - Null equals an empty string, and otherwise anything empty.
    /// - Arrays compare element-wise with the same rule.
    /// - Integers on both sides compare exactly; other numeric pairs compare
    ///   as `f64` (`"1.0"` equals `1`).
    /// - Everything else compares by text form.
    pub fn loosely_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Bool(a), b) | (b, Value::Bool(a)) => *a == !b.is_empty(),
            (Value::Null, Value::String(s)) | (Value::String(s), Value::Null) => s.is_empty(),
            (Value::Null, x) | (x, Value::Null) => x.is_empty(),
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loosely_equals(y))
            }
            (Value::Array(_), _) | (_, Value::Array(_)) => false,
            _ => {
                if let (Some(a), Some(b)) = (self.as_integer(), other.as_integer()) {
                    return a == b;
                }
                match (self.as_number(), other.as_number()) {
                    (Some(a), Some(b)) => a == b,
                    _ => self.to_string() == other.to_string(),
                }
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(true) => f.write_str("1"),
            Value::Bool(false) => Ok(()),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => {
                // Format number nicely (remove .0 for integers)
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                let items: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(n as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, isize);

// Values past i64::MAX keep their magnitude as a float
impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Int)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Int)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::Array(items.iter().cloned().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            // Objects have no scalar reading; keep their JSON text
            serde_json::Value::Object(_) => Value::String(json.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Bool(true).to_string(), "1");
        assert_eq!(Value::Bool(false).to_string(), "");
        assert_eq!(Value::from(90210).to_string(), "90210");
        assert_eq!(Value::from(2.0).to_string(), "2");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from("abc").to_string(), "abc");
        assert_eq!(Value::from(vec!["a", "b"]).to_string(), "[a, b]");
    }

    #[test]
    fn test_is_empty() {
        assert!(Value::Null.is_empty());
        assert!(Value::from("").is_empty());
        assert!(Value::from("0").is_empty());
        assert!(Value::from(false).is_empty());
        assert!(Value::from(0).is_empty());
        assert!(Value::from(0.0).is_empty());
        assert!(Value::Array(vec![]).is_empty());

        assert!(!Value::from(" ").is_empty());
        assert!(!Value::from("0.0").is_empty());
        assert!(!Value::from(true).is_empty());
        assert!(!Value::from(-1).is_empty());
        assert!(!Value::from(vec![Value::Null]).is_empty());
    }

    #[test]
    fn test_numeric_reading() {
        assert_eq!(Value::from(7).as_number(), Some(7.0));
        assert_eq!(Value::from(" 3.5").as_number(), Some(3.5));
        assert_eq!(Value::from("fourteen").as_number(), None);
        assert_eq!(Value::from(true).as_number(), None);
        assert_eq!(Value::Null.as_number(), None);
    }

    #[test]
    fn test_loose_equality() {
        assert!(Value::from("1.0").loosely_equals(&Value::from(1)));
        assert!(Value::from(42).loosely_equals(&Value::from("42")));
        assert!(Value::from(true).loosely_equals(&Value::from("1")));
        assert!(Value::Null.loosely_equals(&Value::from("")));
        assert!(Value::from("apple").loosely_equals(&Value::from("apple")));

        assert!(Value::from(0).loosely_equals(&Value::from(false)));
        assert!(Value::Null.loosely_equals(&Value::from(0)));
        assert!(Value::from(true).loosely_equals(&Value::from("yes")));
        assert!(Value::from(false).loosely_equals(&Value::from("0")));
        assert!(Value::Null.loosely_equals(&Value::Array(vec![])));

        assert!(!Value::from("apple pie").loosely_equals(&Value::from("cheesecake")));
        assert!(!Value::Null.loosely_equals(&Value::from("0")));
        assert!(!Value::from(true).loosely_equals(&Value::from("")));
        assert!(!Value::from("Apple").loosely_equals(&Value::from("apple")));
        assert!(!Value::from(vec!["a"]).loosely_equals(&Value::from("a")));
    }

    #[test]
    fn test_large_integers_compare_exactly() {
        let a = Value::from(9_007_199_254_740_993i64);
        let b = Value::from(9_007_199_254_740_992i64);
        assert!(!a.loosely_equals(&b));
        assert!(!a.loosely_equals(&Value::from("9007199254740992")));
        assert!(a.loosely_equals(&Value::from(" 9007199254740993")));
        assert!(Value::from(i64::MAX).loosely_equals(&Value::from(i64::MAX.to_string())));
    }

    #[test]
    fn test_integer_reading() {
        assert_eq!(Value::from(7).as_integer(), Some(7));
        assert_eq!(Value::from("+12").as_integer(), Some(12));
        assert_eq!(Value::from("1.5").as_integer(), None);
        assert_eq!(Value::from("1e3").as_integer(), None);
        assert_eq!(Value::from(2.0).as_integer(), None);
    }

    #[test]
    fn test_unsigned_and_slice_conversions() {
        assert_eq!(Value::from(5usize), Value::Int(5));
        assert_eq!(Value::from(7u64), Value::Int(7));
        assert_eq!(Value::from(u64::MAX), Value::Float(u64::MAX as f64));

        let colors: &[&str] = &["red", "blue"];
        assert_eq!(Value::from(colors), Value::from(vec!["red", "blue"]));
    }

    #[test]
    fn test_type_checks() {
        assert!(Value::Null.is_null());
        assert!(Value::from(None::<i32>).is_null());
        assert!(!Value::from("").is_null());
        assert!(Value::from(false).is_bool());
        assert!(!Value::from(0).is_bool());
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({ "n": 5, "f": 2.5, "s": "x", "list": [1, "a"] });
        assert_eq!(Value::from(json["n"].clone()), Value::Int(5));
        assert_eq!(Value::from(json["f"].clone()), Value::Float(2.5));
        assert_eq!(Value::from(json["s"].clone()), Value::from("x"));
        assert_eq!(
            Value::from(json["list"].clone()),
            Value::Array(vec![Value::Int(1), Value::from("a")])
        );
        assert_eq!(Value::from(json["missing"].clone()), Value::Null);
    }
}
