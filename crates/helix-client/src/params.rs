//! Sparse-parameter filter and query-string encoding.
//!
//! An optional parameter that the caller never supplied is `None`. Only
//! `None` is dropped: `Some(0)`, `Some(false)`, `Some(String::new())`,
//! `Some(vec![])` and `Some(Value::Null)` all survive the filter.

use serde_json::{Map, Value};
use url::form_urlencoded;

/// Parameters that were actually supplied, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Vec<(String, Value)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a supplied parameter.
    pub fn push(&mut self, key: impl Into<String>, value: Value) {
        self.0.push((key.into(), value));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Turn the supplied parameters back into filter candidates.
    pub fn into_candidates(self) -> impl Iterator<Item = (String, Option<Value>)> {
        self.0.into_iter().map(|(k, v)| (k, Some(v)))
    }

    /// Render as a JSON object for a request body.
    pub fn into_json(self) -> Value {
        Value::Object(self.0.into_iter().collect::<Map<String, Value>>())
    }
}

/// Keep only the candidates that carry a value.
pub fn exclude_unset<K, I>(candidates: I) -> Params
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Option<Value>)>,
{
    Params(
        candidates
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key.into(), v)))
            .collect(),
    )
}

/// Build a nested JSON object from sparse candidates.
///
/// Collapses to `None` when no field was supplied, so the enclosing
/// parameter is dropped instead of being sent as `{}`.
pub fn nested<K, I>(candidates: I) -> Option<Value>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Option<Value>)>,
{
    let params = exclude_unset(candidates);
    if params.is_empty() {
        None
    } else {
        Some(params.into_json())
    }
}

/// Percent-encode parameters for a query string.
///
/// Arrays repeat the key once per element (`id=1&id=2`) and booleans are
/// always the lowercase tokens `true`/`false`.
pub fn encode_query(params: &Params) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params.iter() {
        match value {
            Value::Array(items) => {
                for item in items {
                    serializer.append_pair(key, &query_token(item));
                }
            }
            other => {
                serializer.append_pair(key, &query_token(other));
            }
        }
    }
    serializer.finish()
}

fn query_token(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "true".to_owned(),
        Value::Bool(false) => "false".to_owned(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Nested structures have no query form; send their compact JSON.
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Conversion of an endpoint field into a filter candidate.
///
/// A plain `T` is always present; `Option<T>` is present only when `Some`.
pub trait ParamSlot {
    fn into_slot(self) -> Option<Value>;
}

macro_rules! impl_param_slot {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParamSlot for $ty {
                fn into_slot(self) -> Option<Value> {
                    Some(Value::from(self))
                }
            }

            impl ParamSlot for Option<$ty> {
                fn into_slot(self) -> Option<Value> {
                    self.map(Value::from)
                }
            }
        )*
    };
}

impl_param_slot!(
    String,
    &str,
    bool,
    u32,
    u64,
    i64,
    Value,
    Vec<String>,
    Vec<Value>,
);
