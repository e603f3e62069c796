/// Conditional class lists.
///
/// A `ClassValue` is anything a caller can hand to the composer: a class
/// string, a falsy placeholder, a number, a nested list or a map of
/// class → enabled flag. Flattening keeps the truthy parts in order.
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ClassValue {
    /// null / undefined / absent.
    Null,
    /// `false` and `true` both contribute nothing.
    Bool(bool),
    /// Non-zero numbers render as their decimal text.
    Number(f64),
    /// One or more whitespace-separated class names.
    Text(String),
    List(Vec<ClassValue>),
    /// Ordered class → enabled pairs.
    Map(Vec<(String, bool)>),
}

impl ClassValue {
    /// JavaScript-style truthiness. Lists and maps are truthy even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            ClassValue::Null => false,
            ClassValue::Bool(b) => *b,
            ClassValue::Number(n) => *n != 0.0 && !n.is_nan(),
            ClassValue::Text(s) => !s.is_empty(),
            ClassValue::List(_) | ClassValue::Map(_) => true,
        }
    }

    /// Append this value's classes to `out`, space-separated.
    fn write_to(&self, out: &mut String) {
        match self {
            ClassValue::Null | ClassValue::Bool(_) => {}
            ClassValue::Number(n) => {
                if self.is_truthy() {
                    push_part(out, &n.to_string());
                }
            }
            ClassValue::Text(s) => {
                if !s.is_empty() {
                    push_part(out, s);
                }
            }
            ClassValue::List(items) => {
                for item in items {
                    item.write_to(out);
                }
            }
            ClassValue::Map(entries) => {
                for (class, enabled) in entries {
                    if *enabled && !class.is_empty() {
                        push_part(out, class);
                    }
                }
            }
        }
    }
}

fn push_part(out: &mut String, part: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(part);
}

/// Flatten `inputs` into one space-separated string, dropping falsy parts.
/// No conflict resolution happens here.
pub fn join_classes(inputs: &[ClassValue]) -> String {
    let mut out = String::new();
    for input in inputs {
        input.write_to(&mut out);
    }
    out
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl From<&str> for ClassValue {
    fn from(s: &str) -> Self {
        ClassValue::Text(s.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(s: String) -> Self {
        ClassValue::Text(s)
    }
}

impl From<&String> for ClassValue {
    fn from(s: &String) -> Self {
        ClassValue::Text(s.clone())
    }
}

impl From<bool> for ClassValue {
    fn from(b: bool) -> Self {
        ClassValue::Bool(b)
    }
}

impl From<f64> for ClassValue {
    fn from(n: f64) -> Self {
        ClassValue::Number(n)
    }
}

impl From<i64> for ClassValue {
    fn from(n: i64) -> Self {
        ClassValue::Number(n as f64)
    }
}

/// `("active", is_active)` includes `active` only when the flag is set.
impl From<(&str, bool)> for ClassValue {
    fn from((class, enabled): (&str, bool)) -> Self {
        ClassValue::Map(vec![(class.to_string(), enabled)])
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::Null, Into::into)
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(items: Vec<T>) -> Self {
        ClassValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(items: [T; N]) -> Self {
        ClassValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>> FromIterator<T> for ClassValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ClassValue::List(iter.into_iter().map(Into::into).collect())
    }
}

/// Loosely-typed input from JSON. Object values are reduced to their
/// truthiness, so `{"active": 1, "hidden": ""}` enables only `active`.
impl From<Value> for ClassValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ClassValue::Null,
            Value::Bool(b) => ClassValue::Bool(b),
            Value::Number(n) => n.as_f64().map_or(ClassValue::Null, ClassValue::Number),
            Value::String(s) => ClassValue::Text(s),
            Value::Array(items) => items.into_iter().collect(),
            Value::Object(map) => ClassValue::Map(
                map.into_iter()
                    .map(|(class, v)| (class, json_truthy(&v)))
                    .collect(),
            ),
        }
    }
}

fn json_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
