//! The boundary between the scanner and an expression language.
//!
//! The [`Scanner`](crate::scanner::Scanner) knows nothing about the contents
//! of `${{ ... }}` blocks. It hands the raw text between the delimiters to an
//! [`Evaluator`] and splices the returned string into the output. Any
//! expression engine can be plugged in by implementing this one method.
//!
//! Two building blocks are provided:
//! - [`LookupEvaluator`] resolves dotted variable paths against [`Bindings`](crate::value::Bindings).
//! - [`Operations`] is a registry of the built-in operations (`join`, `format`,
//!   string helpers) an expression engine exposes to its users.

use std::rc::Rc;
use std::sync::Arc;

use crate::errors::EvalError;

mod lookup;
mod operations;

pub use self::lookup::LookupEvaluator;
pub use self::operations::{Operation, Operations};

/// Evaluates expressions nested inside `${{ ... }}` blocks.
pub trait Evaluator {
    /// Evaluates `expression` and returns its textual form.
    ///
    /// Compile errors must be reported all at once through
    /// [`EvalError::Compile`], located relative to the start of `expression`.
    /// Successful results are rendered with
    /// [`to_template_string`](crate::value::to_template_string).
    fn evaluate(&self, expression: &str) -> Result<String, EvalError>;
}

impl<T: Evaluator + ?Sized> Evaluator for &T {
    fn evaluate(&self, expression: &str) -> Result<String, EvalError> {
        (**self).evaluate(expression)
    }
}

impl<T: Evaluator + ?Sized> Evaluator for Box<T> {
    fn evaluate(&self, expression: &str) -> Result<String, EvalError> {
        (**self).evaluate(expression)
    }
}

impl<T: Evaluator + ?Sized> Evaluator for Rc<T> {
    fn evaluate(&self, expression: &str) -> Result<String, EvalError> {
        (**self).evaluate(expression)
    }
}

impl<T: Evaluator + ?Sized> Evaluator for Arc<T> {
    fn evaluate(&self, expression: &str) -> Result<String, EvalError> {
        (**self).evaluate(expression)
    }
}

/// Evaluator backed by a closure, see [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> Evaluator for FromFn<F>
where
    F: Fn(&str) -> Result<String, EvalError>,
{
    fn evaluate(&self, expression: &str) -> Result<String, EvalError> {
        (self.0)(expression)
    }
}

/// Creates an evaluator that calls `f` for every expression.
///
/// ```rust
/// # use celplate::evaluator::{from_fn, Evaluator};
/// let upper = from_fn(|expr: &str| Ok(expr.trim().to_uppercase()));
/// assert_eq!(upper.evaluate(" abc ").unwrap(), "ABC");
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&str) -> Result<String, EvalError>,
{
    FromFn(f)
}
