//! Built-in operations.
//!
//! Expression engines expose extra operations on top of their core language
//! (joining lists, formatting timestamps, string helpers). They are collected
//! in an [`Operations`] registry that is assembled once, when the evaluator is
//! built, and never changes afterwards.

use std::fmt::Write;

use crate::errors::EvalError;
use crate::value::{KeyMap, Value, to_template_string};

/// Signature of an operation: `receiver.name(args...)`.
pub type Operation = fn(&Value, &[Value]) -> Result<Value, EvalError>;

/// Immutable registry of named operations.
#[derive(Debug, Clone, Default)]
pub struct Operations {
    table: KeyMap<Operation>,
}

impl Operations {
    /// Creates a registry containing exactly the given operations.
    pub fn new<I, S>(operations: I) -> Self
    where
        I: IntoIterator<Item = (S, Operation)>,
        S: Into<String>,
    {
        Operations {
            table: operations.into_iter().map(|(name, op)| (name.into(), op)).collect(),
        }
    }

    /// The operations every evaluator is expected to provide.
    pub fn standard() -> Self {
        Operations::new([
            ("join", join as Operation),
            ("format", format as Operation),
            ("split", split as Operation),
            ("replace", replace as Operation),
            ("lowerAscii", lower_ascii as Operation),
            ("upperAscii", upper_ascii as Operation),
            ("trim", trim as Operation),
        ])
    }

    /// Returns the registry extended with `op` registered as `name`.
    ///
    /// An operation already registered under `name` is replaced.
    pub fn with(mut self, name: impl Into<String>, op: Operation) -> Self {
        self.table.insert(name.into(), op);
        self
    }

    /// Looks up an operation by name.
    pub fn get(&self, name: &str) -> Option<Operation> {
        self.table.get(name).copied()
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    /// Applies the operation `name` to `receiver` and `args`.
    pub fn call(&self, name: &str, receiver: &Value, args: &[Value]) -> Result<Value, EvalError> {
        let op = self
            .get(name)
            .ok_or_else(|| EvalError::UnknownOperation(name.to_string()))?;
        tracing::trace!(operation = name, receiver = receiver.type_name(), "calling operation");
        op(receiver, args)
    }
}

fn operation_error(name: &str, message: impl Into<String>) -> EvalError {
    EvalError::Operation { name: name.to_string(), message: message.into() }
}

fn string_args<'a, const N: usize>(name: &str, args: &'a [Value]) -> Result<[&'a str; N], EvalError> {
    if args.len() != N {
        return Err(operation_error(
            name,
            format!("expected {N} argument(s), got {}", args.len()),
        ));
    }
    let mut out = [""; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.as_str().ok_or_else(|| {
            operation_error(name, format!("expected string argument, got {}", arg.type_name()))
        })?;
    }
    Ok(out)
}

fn string_receiver<'a>(name: &str, receiver: &'a Value) -> Result<&'a str, EvalError> {
    receiver.as_str().ok_or_else(|| {
        operation_error(name, format!("unsupported receiver of type {}", receiver.type_name()))
    })
}

/// `list.join(delimiter)`: renders each element and joins them.
pub fn join(receiver: &Value, args: &[Value]) -> Result<Value, EvalError> {
    let [delimiter] = string_args::<1>("join", args)?;
    let Value::List(items) = receiver else {
        return Err(operation_error(
            "join",
            format!("unsupported receiver of type {}", receiver.type_name()),
        ));
    };
    let parts = items
        .iter()
        .map(to_template_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::String(parts.join(delimiter)))
}

/// `timestamp.format(pattern)`: strftime-style rendering.
pub fn format(receiver: &Value, args: &[Value]) -> Result<Value, EvalError> {
    let [pattern] = string_args::<1>("format", args)?;
    let Value::Timestamp(ts) = receiver else {
        return Err(operation_error(
            "format",
            format!("unsupported receiver of type {}", receiver.type_name()),
        ));
    };
    // Invalid specifiers make the formatter fail rather than panic when
    // written through `fmt::Write`.
    let mut out = String::new();
    write!(out, "{}", ts.format(pattern))
        .map_err(|_| operation_error("format", format!("invalid pattern {pattern:?}")))?;
    Ok(Value::String(out))
}

/// `string.split(separator)`.
pub fn split(receiver: &Value, args: &[Value]) -> Result<Value, EvalError> {
    let s = string_receiver("split", receiver)?;
    let [separator] = string_args::<1>("split", args)?;
    Ok(Value::List(s.split(separator).map(Value::from).collect()))
}

/// `string.replace(old, new)`: replaces every occurrence.
pub fn replace(receiver: &Value, args: &[Value]) -> Result<Value, EvalError> {
    let s = string_receiver("replace", receiver)?;
    let [from, to] = string_args::<2>("replace", args)?;
    Ok(Value::String(s.replace(from, to)))
}

/// `string.lowerAscii()`.
pub fn lower_ascii(receiver: &Value, args: &[Value]) -> Result<Value, EvalError> {
    let s = string_receiver("lowerAscii", receiver)?;
    let [] = string_args::<0>("lowerAscii", args)?;
    Ok(Value::String(s.to_ascii_lowercase()))
}

/// `string.upperAscii()`.
pub fn upper_ascii(receiver: &Value, args: &[Value]) -> Result<Value, EvalError> {
    let s = string_receiver("upperAscii", receiver)?;
    let [] = string_args::<0>("upperAscii", args)?;
    Ok(Value::String(s.to_ascii_uppercase()))
}

/// `string.trim()`: strips leading and trailing whitespace.
pub fn trim(receiver: &Value, args: &[Value]) -> Result<Value, EvalError> {
    let s = string_receiver("trim", receiver)?;
    let [] = string_args::<0>("trim", args)?;
    Ok(Value::String(s.trim().to_string()))
}
