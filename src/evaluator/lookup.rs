//! Evaluator resolving dotted variable paths.
//!
//! `inputs.region` selects the `region` key of the `inputs` variable,
//! `inputs.zones.0` the first element of the `zones` list. There are no
//! operators: anything beyond a path is reported as a compile error.

use crate::errors::EvalError;
use crate::source::{Errors, Location, SourceError};
use crate::value::{Bindings, Key, Value, to_template_string};

use super::Evaluator;

/// One `.`-separated part of a path, with the location of its first character.
#[derive(Debug)]
struct Segment {
    name: String,
    location: Location,
}

/// Resolves expressions of the form `root.field.field` against [`Bindings`].
///
/// Only paths are understood. The built-in [`Operations`](super::Operations)
/// such as `join` or `format` cannot be called from path syntax; evaluators
/// with a richer expression language call them through
/// [`Operations::call`](super::Operations::call).
///
/// ```rust
/// # use celplate::evaluator::{Evaluator, LookupEvaluator};
/// # use celplate::value::{Bindings, Value};
/// let mut bindings = Bindings::new();
/// bindings.insert("inputs".to_string(), [("region", "us-east-1")].into_iter().collect());
///
/// let evaluator = LookupEvaluator::new(bindings).unwrap();
/// assert_eq!(evaluator.evaluate(" inputs.region ").unwrap(), "us-east-1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LookupEvaluator {
    bindings: Bindings,
}

impl LookupEvaluator {
    /// Creates an evaluator over `bindings`.
    ///
    /// Fails if a variable name could never be referenced by a path.
    pub fn new(bindings: Bindings) -> Result<Self, EvalError> {
        if let Some(name) = bindings.keys().find(|name| !is_identifier(name)) {
            return Err(EvalError::InvalidBinding(name.clone()));
        }
        Ok(LookupEvaluator { bindings })
    }

    /// The variables expressions are resolved against.
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    fn compile(&self, expression: &str) -> Result<Vec<Segment>, Errors> {
        let segments = parse_path(expression)?;
        let Some(root) = segments.first() else {
            return Err(SourceError::new(Location::start(), "empty expression").into());
        };
        if !self.bindings.contains_key(&root.name) {
            return Err(SourceError::new(
                root.location,
                format!("undeclared reference to '{}'", root.name),
            )
            .into());
        }
        Ok(segments)
    }

    fn resolve(&self, segments: &[Segment]) -> Result<&Value, EvalError> {
        let (root, fields) = segments
            .split_first()
            .ok_or_else(|| EvalError::Evaluation("empty path".to_string()))?;
        let mut value = self
            .bindings
            .get(&root.name)
            .ok_or_else(|| EvalError::Evaluation(format!("no such variable '{}'", root.name)))?;
        for field in fields {
            value = select(value, &field.name)?;
        }
        Ok(value)
    }
}

impl Evaluator for LookupEvaluator {
    #[tracing::instrument(level = "debug", skip(self))]
    fn evaluate(&self, expression: &str) -> Result<String, EvalError> {
        let segments = self.compile(expression).map_err(EvalError::Compile)?;
        let value = self.resolve(&segments)?;
        to_template_string(value)
    }
}

fn select<'a>(value: &'a Value, field: &str) -> Result<&'a Value, EvalError> {
    match value {
        Value::Map(map) => map
            .get(&Key::String(field.to_string()))
            .or_else(|| field.parse::<i64>().ok().and_then(|i| map.get(&Key::Int(i))))
            .ok_or_else(|| EvalError::Evaluation(format!("no such key: {field}"))),
        Value::List(items) => {
            let index = field
                .parse::<usize>()
                .map_err(|_| EvalError::Evaluation(format!("invalid list index '{field}'")))?;
            items
                .get(index)
                .ok_or_else(|| EvalError::Evaluation(format!("index out of range: {index}")))
        }
        other => Err(EvalError::Evaluation(format!(
            "cannot select field '{field}' from value of type {}",
            other.type_name()
        ))),
    }
}

fn is_segment_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => chars.all(is_segment_char),
        _ => false,
    }
}

/// Splits `expression` into path segments, collecting every syntax problem.
fn parse_path(expression: &str) -> Result<Vec<Segment>, Errors> {
    let mut errors = Errors::new();
    let mut segments = Vec::new();
    let mut current: Option<Segment> = None;
    let mut location = Location::start();
    let mut seen_path = false;
    let mut ended = false;
    let mut trailing_reported = false;
    let mut dangling_dot: Option<Location> = None;

    for ch in expression.chars() {
        if ch.is_whitespace() {
            ended |= seen_path;
            trailing_reported = false;
        } else if ended {
            // One error per trailing word.
            if !trailing_reported {
                errors.push(SourceError::new(
                    location,
                    format!("unexpected character {ch:?} after end of expression"),
                ));
                trailing_reported = true;
            }
        } else if ch == '.' {
            seen_path = true;
            match current.take() {
                Some(segment) => segments.push(segment),
                None => errors.push(SourceError::new(location, "expected identifier before '.'")),
            }
            dangling_dot = Some(location);
        } else if is_segment_char(ch) {
            seen_path = true;
            dangling_dot = None;
            current
                .get_or_insert_with(|| Segment { name: String::new(), location })
                .name
                .push(ch);
        } else {
            seen_path = true;
            errors.push(SourceError::new(location, format!("unexpected character {ch:?}")));
        }
        location.advance(ch);
    }

    match current {
        Some(segment) => segments.push(segment),
        None if !seen_path => errors.push(SourceError::new(Location::start(), "empty expression")),
        None => {}
    }
    if let Some(dot) = dangling_dot {
        errors.push(SourceError::new(dot, "expected identifier after '.'"));
    }

    errors.into_result()?;
    Ok(segments)
}
