//! Textual form of expression results.
//!
//! | Value     | Rendering                                     |
//! |-----------|-----------------------------------------------|
//! | string    | unchanged                                     |
//! | list      | `[v1 v2 ...]`                                 |
//! | map       | `{k1: v1, k2: v2}`, pairs sorted by key text  |
//! | int, uint | decimal                                       |
//! | double    | shortest round-trippable decimal (`2.0` → `2`)|
//! | bool      | `true` / `false`                              |
//! | timestamp | RFC 3339 in UTC                               |
//! | duration  | seconds with an `s` suffix                    |
//! | null      | `null`                                        |
//! | bytes     | UTF-8 text                                    |
//! | function  | error                                         |

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};

use super::Value;
use crate::errors::EvalError;

/// Converts `value` into the text spliced into a document.
///
/// Elements of lists and maps are rendered with the same rules. Values without
/// a textual form fail with [`EvalError::Unsupported`], wherever they appear.
///
/// ```rust
/// # use celplate::value::{to_template_string, Value};
/// let list = Value::from(vec![1, 2, 3]);
/// assert_eq!(to_template_string(&list).unwrap(), "[1 2 3]");
/// ```
pub fn to_template_string(value: &Value) -> Result<String, EvalError> {
    let mut out = String::new();
    render(value, &mut out)?;
    Ok(out)
}

fn render(value: &Value, out: &mut String) -> Result<(), EvalError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => out.push_str(&i.to_string()),
        Value::UInt(u) => out.push_str(&u.to_string()),
        // `Display` for f64 already prints the shortest form that reads back
        // to the same number, and drops the fraction of whole numbers. It
        // never uses exponent notation: `1e21` is written out in full and
        // `1e-7` is `0.0000001`, unlike CEL's `1e+21` and `1e-07`.
        Value::Double(d) => out.push_str(&d.to_string()),
        Value::String(s) => out.push_str(s),
        Value::Bytes(bytes) => match std::str::from_utf8(bytes) {
            Ok(s) => out.push_str(s),
            Err(_) => return Err(unsupported(value)),
        },
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                render(item, out)?;
            }
            out.push(']');
        }
        Value::Map(map) => {
            let mut pairs = map
                .iter()
                .map(|(key, value)| -> Result<_, EvalError> {
                    Ok((key.to_string(), to_template_string(value)?))
                })
                .collect::<Result<Vec<_>, _>>()?;
            pairs.sort();

            out.push('{');
            for (i, (key, value)) in pairs.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push_str(": ");
                out.push_str(value);
            }
            out.push('}');
        }
        Value::Timestamp(ts) => out.push_str(&render_timestamp(ts)),
        Value::Duration(d) => out.push_str(&render_duration(d)),
        Value::Function(_) => return Err(unsupported(value)),
    }
    Ok(())
}

fn unsupported(value: &Value) -> EvalError {
    EvalError::Unsupported { type_name: value.type_name() }
}

/// Default rendering of a timestamp: RFC 3339, UTC, `Z` suffix, and only as
/// many fractional digits as needed.
pub fn render_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Default rendering of a duration: a decimal number of seconds followed by
/// `s`, e.g. `3600s` or `1.5s`.
pub fn render_duration(d: &TimeDelta) -> String {
    let seconds = match d.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 1e9,
        None => d.num_seconds() as f64,
    };
    format!("{seconds}s")
}
