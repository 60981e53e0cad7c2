//! Command-line arguments for the `helix` binary.

use clap::Parser;
use helix_client::{HelixRequest, Method, Params};
use serde_json::Value;

/// Perform one Helix API call and print `{status, body}` as JSON.
#[derive(Debug, Parser)]
#[command(name = "helix", version)]
pub struct Cli {
    /// HTTP verb, case-insensitive.
    #[arg(value_parser = parse_method)]
    pub method: Method,

    /// Path relative to the Helix base URL, e.g. `users`.
    pub path: String,

    /// Query parameters as key=value. Repeat a key to send a list.
    #[arg(value_name = "KEY=VALUE", value_parser = parse_pair)]
    pub pairs: Vec<(String, Value)>,

    /// JSON request body.
    #[arg(long, value_name = "JSON", value_parser = parse_json)]
    pub body: Option<Value>,

    /// Print 4xx/5xx responses instead of failing.
    #[arg(long)]
    pub no_raise: bool,
}

impl Cli {
    pub fn into_request(self) -> HelixRequest {
        let mut grouped: Vec<(String, Vec<Value>)> = Vec::new();
        for (key, value) in self.pairs {
            match grouped.iter_mut().find(|(k, _)| *k == key) {
                Some((_, values)) => values.push(value),
                None => grouped.push((key, vec![value])),
            }
        }

        let mut query = Params::new();
        for (key, mut values) in grouped {
            let value = if values.len() == 1 {
                values.remove(0)
            } else {
                Value::Array(values)
            };
            query.push(key, value);
        }

        let mut request = HelixRequest::new(self.method, self.path).with_query(query);
        request.body = self.body;
        if self.no_raise {
            request = request.without_raise();
        }
        request
    }
}

fn parse_method(raw: &str) -> Result<Method, String> {
    Method::from_bytes(raw.to_uppercase().as_bytes()).map_err(|e| e.to_string())
}

fn parse_pair(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {raw:?}"))?;
    Ok((key.to_owned(), scalar(value)))
}

fn parse_json(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("not valid JSON: {e}"))
}

/// `true`/`false` and integers keep their JSON type, anything else is a string.
fn scalar(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => raw
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(raw.to_owned())),
    }
}
